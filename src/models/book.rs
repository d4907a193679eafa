//! Book model

use serde::{Deserialize, Serialize};

use super::author::Author;
use super::publisher::Publisher;
use super::Identified;

/// Book entity as exchanged with the backend.
///
/// The cover image travels as a base64 string next to its content type, and
/// relations hold full entity snapshots rather than bare ids.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Book {
    pub id: Option<i32>,
    pub isbn: Option<String>,
    pub name: Option<String>,
    pub publish_year: Option<String>,
    pub copies: Option<i32>,
    pub cover_content_type: Option<String>,
    pub cover: Option<String>,
    pub publisher: Option<Publisher>,
    pub authors: Option<Vec<Author>>,
}

impl Identified for Book {
    fn id(&self) -> Option<i32> {
        self.id
    }
}
