//! Publisher model

use serde::{Deserialize, Serialize};

use super::Identified;

/// Publisher entity. Managed by an external feature; the console only needs
/// it as the option type for the book's publisher relation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Publisher {
    pub id: Option<i32>,
    pub name: Option<String>,
}

impl Identified for Publisher {
    fn id(&self) -> Option<i32> {
        self.id
    }
}
