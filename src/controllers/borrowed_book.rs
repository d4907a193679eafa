//! Borrowed-book update form controller

use std::sync::Arc;

use chrono::NaiveDate;
use tokio_util::sync::CancellationToken;
use validator::Validate;

use crate::error::AppResult;
use crate::models::collection::{add_to_collection_if_missing, track_by_id};
use crate::models::{Book, BorrowedBook, Client};
use crate::navigation::Navigator;
use crate::services::EntityApi;

/// Form state bound to the borrowed-book editor.
#[derive(Debug, Clone, Default, Validate)]
pub struct BorrowedBookForm {
    pub id: Option<i32>,
    pub borrow_date: Option<NaiveDate>,
    pub book: Option<Book>,
    pub client: Option<Client>,
}

pub struct BorrowedBookUpdateController {
    borrowed_books: Arc<dyn EntityApi<BorrowedBook>>,
    books: Arc<dyn EntityApi<Book>>,
    clients: Arc<dyn EntityApi<Client>>,
    navigator: Arc<dyn Navigator>,
    cancel: CancellationToken,
    pub is_saving: bool,
    pub books_collection: Vec<Book>,
    pub clients_collection: Vec<Client>,
    pub edit_form: BorrowedBookForm,
}

impl BorrowedBookUpdateController {
    pub fn new(
        borrowed_books: Arc<dyn EntityApi<BorrowedBook>>,
        books: Arc<dyn EntityApi<Book>>,
        clients: Arc<dyn EntityApi<Client>>,
        navigator: Arc<dyn Navigator>,
    ) -> Self {
        Self {
            borrowed_books,
            books,
            clients,
            navigator,
            cancel: CancellationToken::new(),
            is_saving: false,
            books_collection: Vec::new(),
            clients_collection: Vec::new(),
            edit_form: BorrowedBookForm::default(),
        }
    }

    /// Populate the form from an existing loan (or the empty default), then
    /// load the relation option collections.
    pub async fn initialize(&mut self, borrowed_book: &BorrowedBook) {
        self.update_form(borrowed_book);
        self.load_relationships_options().await;
    }

    /// Fetch book and client options concurrently, excluding entities the
    /// backend already ties to another loan, and reconcile each collection
    /// with the loan's current relation value. A failed fetch leaves that
    /// collection untouched.
    pub async fn load_relationships_options(&mut self) {
        if self.cancel.is_cancelled() {
            return;
        }
        let filter = [("borrowedBookId.specified".to_string(), "false".to_string())];

        let (books, clients) = {
            let books_fut = self.books.query(&filter);
            let clients_fut = self.clients.query(&filter);
            tokio::select! {
                _ = self.cancel.cancelled() => return,
                res = async { tokio::join!(books_fut, clients_fut) } => res,
            }
        };

        match books {
            Ok(fetched) => {
                self.books_collection =
                    add_to_collection_if_missing(fetched, self.edit_form.book.as_ref());
            }
            Err(e) => tracing::debug!("Book options load failed: {}", e),
        }
        match clients {
            Ok(fetched) => {
                self.clients_collection =
                    add_to_collection_if_missing(fetched, self.edit_form.client.as_ref());
            }
            Err(e) => tracing::debug!("Client options load failed: {}", e),
        }
    }

    pub async fn save(&mut self) -> AppResult<()> {
        self.edit_form.validate()?;
        self.is_saving = true;
        let borrowed_book = self.create_from_form();
        let result = if borrowed_book.id.is_some() {
            self.borrowed_books.update(&borrowed_book).await
        } else {
            self.borrowed_books.create(&borrowed_book).await
        };
        self.is_saving = false;
        match result {
            Ok(_) => {
                self.previous_state();
                Ok(())
            }
            Err(e) => {
                tracing::warn!("Borrowed book save failed: {}", e);
                Err(e)
            }
        }
    }

    pub fn previous_state(&self) {
        self.navigator.back();
    }

    pub fn track_book_by_id(&self, index: usize, item: &Book) -> i32 {
        track_by_id(index, item)
    }

    pub fn track_client_by_id(&self, index: usize, item: &Client) -> i32 {
        track_by_id(index, item)
    }

    /// Cancel any in-flight option loads.
    pub fn dispose(&self) {
        self.cancel.cancel();
    }

    fn update_form(&mut self, borrowed_book: &BorrowedBook) {
        self.edit_form = BorrowedBookForm {
            id: borrowed_book.id,
            borrow_date: borrowed_book.borrow_date,
            book: borrowed_book.book.clone(),
            client: borrowed_book.client.clone(),
        };

        let books = std::mem::take(&mut self.books_collection);
        self.books_collection =
            add_to_collection_if_missing(books, self.edit_form.book.as_ref());
        let clients = std::mem::take(&mut self.clients_collection);
        self.clients_collection =
            add_to_collection_if_missing(clients, self.edit_form.client.as_ref());
    }

    fn create_from_form(&self) -> BorrowedBook {
        BorrowedBook {
            id: self.edit_form.id,
            borrow_date: self.edit_form.borrow_date,
            book: self.edit_form.book.clone(),
            client: self.edit_form.client.clone(),
        }
    }
}

impl Drop for BorrowedBookUpdateController {
    fn drop(&mut self) {
        self.cancel.cancel();
    }
}
