//! Client (borrower) model

use serde::{Deserialize, Serialize};

use super::Identified;

/// Client entity as exchanged with the backend.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Client {
    pub id: Option<i32>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub address: Option<String>,
    pub phone: Option<String>,
}

impl Identified for Client {
    fn id(&self) -> Option<i32> {
        self.id
    }
}
