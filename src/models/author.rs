//! Author model

use serde::{Deserialize, Serialize};

use super::book::Book;
use super::Identified;

/// Author entity as exchanged with the backend.
///
/// All fields are optional: an instance may be a bare `{id}` reference, a
/// not-yet-saved draft, or a full snapshot with the books relation loaded.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Author {
    pub id: Option<i32>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub books: Option<Vec<Book>>,
}

impl Identified for Author {
    fn id(&self) -> Option<i32> {
        self.id
    }
}
