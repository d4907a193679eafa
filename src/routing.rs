//! Declarative routing table for the entity features.
//!
//! Each route maps a URL path segment to one entity feature; the matching
//! controller is only constructed when the route is dispatched.

use crate::error::{AppError, AppResult};

/// Entity feature routes, in registration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityRoute {
    Publisher,
    Author,
    Client,
    Book,
    BorrowedBook,
}

impl EntityRoute {
    pub const ALL: [EntityRoute; 5] = [
        EntityRoute::Publisher,
        EntityRoute::Author,
        EntityRoute::Client,
        EntityRoute::Book,
        EntityRoute::BorrowedBook,
    ];

    /// URL path segment of the feature.
    pub fn path(self) -> &'static str {
        match self {
            EntityRoute::Publisher => "publisher",
            EntityRoute::Author => "author",
            EntityRoute::Client => "client",
            EntityRoute::Book => "book",
            EntityRoute::BorrowedBook => "borrowed-book",
        }
    }

    /// Page title shown for the feature.
    pub fn page_title(self) -> &'static str {
        match self {
            EntityRoute::Publisher => "Publishers",
            EntityRoute::Author => "Authors",
            EntityRoute::Client => "Clients",
            EntityRoute::Book => "Books",
            EntityRoute::BorrowedBook => "BorrowedBooks",
        }
    }

    /// Resolve a path segment back to its route.
    pub fn from_path(path: &str) -> AppResult<Self> {
        Self::ALL
            .into_iter()
            .find(|route| route.path() == path)
            .ok_or_else(|| AppError::UnknownRoute(path.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paths_round_trip() {
        for route in EntityRoute::ALL {
            assert_eq!(EntityRoute::from_path(route.path()).unwrap(), route);
        }
    }

    #[test]
    fn test_unknown_path_is_rejected() {
        assert!(matches!(
            EntityRoute::from_path("loans"),
            Err(AppError::UnknownRoute(_))
        ));
    }

    #[test]
    fn test_page_titles() {
        assert_eq!(EntityRoute::Book.page_title(), "Books");
        assert_eq!(EntityRoute::BorrowedBook.page_title(), "BorrowedBooks");
    }
}
