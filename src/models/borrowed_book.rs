//! Borrowed book (loan) model

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::book::Book;
use super::client::Client;
use super::Identified;

/// Borrowed-book entity linking one book to one client.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BorrowedBook {
    pub id: Option<i32>,
    pub borrow_date: Option<NaiveDate>,
    pub book: Option<Book>,
    pub client: Option<Client>,
}

impl Identified for BorrowedBook {
    fn id(&self) -> Option<i32> {
        self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_borrow_date_wire_format() {
        let loan = BorrowedBook {
            id: Some(11),
            borrow_date: Some(NaiveDate::from_ymd_opt(2021, 9, 14).unwrap()),
            book: None,
            client: None,
        };
        let json = serde_json::to_value(&loan).unwrap();
        assert_eq!(json["borrowDate"], "2021-09-14");

        let back: BorrowedBook = serde_json::from_value(json).unwrap();
        assert_eq!(back.borrow_date, loan.borrow_date);
    }
}
