//! REST services for the backend entity resources

pub mod rest;

pub use rest::{EntityApi, RestService};

use std::sync::Arc;
use std::time::Duration;

use crate::config::ApiConfig;
use crate::error::AppResult;
use crate::models::{Author, Book, BorrowedBook, Client, Publisher};

/// Container for all per-entity services
#[derive(Clone)]
pub struct Services {
    pub authors: Arc<dyn EntityApi<Author>>,
    pub books: Arc<dyn EntityApi<Book>>,
    pub borrowed_books: Arc<dyn EntityApi<BorrowedBook>>,
    pub clients: Arc<dyn EntityApi<Client>>,
    pub publishers: Arc<dyn EntityApi<Publisher>>,
}

impl Services {
    /// Create all services against the configured backend
    pub fn new(config: &ApiConfig) -> AppResult<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()?;

        Ok(Self {
            authors: Arc::new(RestService::new(http.clone(), &config.base_url, "authors")),
            books: Arc::new(RestService::new(http.clone(), &config.base_url, "books")),
            borrowed_books: Arc::new(RestService::new(
                http.clone(),
                &config.base_url,
                "borrowed-books",
            )),
            clients: Arc::new(RestService::new(http.clone(), &config.base_url, "clients")),
            publishers: Arc::new(RestService::new(http, &config.base_url, "publishers")),
        })
    }
}
