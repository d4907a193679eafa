//! Book update form controller

use std::sync::Arc;

use tokio_util::sync::CancellationToken;
use validator::Validate;

use crate::data_util;
use crate::error::{AppError, AppResult};
use crate::models::collection::{add_to_collection_if_missing, get_selected, track_by_id};
use crate::models::{Author, Book, Publisher};
use crate::navigation::Navigator;
use crate::services::EntityApi;

/// Form state bound to the book editor.
#[derive(Debug, Clone, Default, Validate)]
pub struct BookForm {
    pub id: Option<i32>,
    #[validate(required, length(min = 5, max = 13))]
    pub isbn: Option<String>,
    #[validate(required, length(max = 100))]
    pub name: Option<String>,
    #[validate(required, length(min = 4, max = 50))]
    pub publish_year: Option<String>,
    #[validate(required)]
    pub copies: Option<i32>,
    pub cover: Option<String>,
    pub cover_content_type: Option<String>,
    pub publisher: Option<Publisher>,
    pub authors: Option<Vec<Author>>,
}

pub struct BookUpdateController {
    books: Arc<dyn EntityApi<Book>>,
    publishers: Arc<dyn EntityApi<Publisher>>,
    authors: Arc<dyn EntityApi<Author>>,
    navigator: Arc<dyn Navigator>,
    cancel: CancellationToken,
    pub is_saving: bool,
    /// Publishers not yet tied to another book, plus the current selection.
    pub publishers_collection: Vec<Publisher>,
    /// All authors; shared across books, so never filtered server-side.
    pub authors_shared_collection: Vec<Author>,
    pub edit_form: BookForm,
}

impl BookUpdateController {
    pub fn new(
        books: Arc<dyn EntityApi<Book>>,
        publishers: Arc<dyn EntityApi<Publisher>>,
        authors: Arc<dyn EntityApi<Author>>,
        navigator: Arc<dyn Navigator>,
    ) -> Self {
        Self {
            books,
            publishers,
            authors,
            navigator,
            cancel: CancellationToken::new(),
            is_saving: false,
            publishers_collection: Vec::new(),
            authors_shared_collection: Vec::new(),
            edit_form: BookForm::default(),
        }
    }

    /// Populate the form from an existing book (or the empty default), then
    /// load the relation option collections.
    pub async fn initialize(&mut self, book: &Book) {
        self.update_form(book);
        self.load_relationships_options().await;
    }

    /// Fetch publisher and author options concurrently and reconcile each
    /// collection with the book's current relation values. A failed fetch
    /// leaves that collection untouched.
    pub async fn load_relationships_options(&mut self) {
        if self.cancel.is_cancelled() {
            return;
        }
        let publisher_filter = [("bookId.specified".to_string(), "false".to_string())];

        let (publishers, authors) = {
            let publishers_fut = self.publishers.query(&publisher_filter);
            let authors_fut = self.authors.query(&[]);
            tokio::select! {
                _ = self.cancel.cancelled() => return,
                res = async { tokio::join!(publishers_fut, authors_fut) } => res,
            }
        };

        match publishers {
            Ok(fetched) => {
                self.publishers_collection =
                    add_to_collection_if_missing(fetched, self.edit_form.publisher.as_ref());
            }
            Err(e) => tracing::debug!("Publisher options load failed: {}", e),
        }
        match authors {
            Ok(fetched) => {
                self.authors_shared_collection =
                    add_to_collection_if_missing(fetched, self.edit_form.authors.iter().flatten());
            }
            Err(e) => tracing::debug!("Author options load failed: {}", e),
        }
    }

    pub async fn save(&mut self) -> AppResult<()> {
        self.edit_form.validate()?;
        self.is_saving = true;
        let book = self.create_from_form();
        let result = if book.id.is_some() {
            self.books.update(&book).await
        } else {
            self.books.create(&book).await
        };
        self.is_saving = false;
        match result {
            Ok(_) => {
                self.previous_state();
                Ok(())
            }
            Err(e) => {
                tracing::warn!("Book save failed: {}", e);
                Err(e)
            }
        }
    }

    pub fn previous_state(&self) {
        self.navigator.back();
    }

    pub fn track_publisher_by_id(&self, index: usize, item: &Publisher) -> i32 {
        track_by_id(index, item)
    }

    pub fn track_author_by_id(&self, index: usize, item: &Author) -> i32 {
        track_by_id(index, item)
    }

    /// Return the instance the form already holds for `option`, so the
    /// multi-select can match selections by identity.
    pub fn get_selected_author<'a>(
        &self,
        option: &'a Author,
        selected: Option<&'a [Author]>,
    ) -> &'a Author {
        get_selected(option, selected)
    }

    /// Display size of the current cover, when one is set.
    pub fn byte_size(&self, base64: &str) -> String {
        data_util::byte_size(base64)
    }

    /// Load raw file bytes into the cover form fields. Non-image content is
    /// rejected when an image is required.
    pub fn set_file_data(
        &mut self,
        bytes: &[u8],
        content_type: &str,
        image_required: bool,
    ) -> AppResult<()> {
        if image_required && !data_util::is_image(content_type) {
            return Err(AppError::FileLoad(format!(
                "expected an image, got {content_type}"
            )));
        }
        self.edit_form.cover = Some(data_util::to_base64(bytes));
        self.edit_form.cover_content_type = Some(content_type.to_string());
        Ok(())
    }

    /// Clear the cover form fields.
    pub fn clear_input_image(&mut self) {
        self.edit_form.cover = None;
        self.edit_form.cover_content_type = None;
    }

    /// Cancel any in-flight option loads.
    pub fn dispose(&self) {
        self.cancel.cancel();
    }

    fn update_form(&mut self, book: &Book) {
        self.edit_form = BookForm {
            id: book.id,
            isbn: book.isbn.clone(),
            name: book.name.clone(),
            publish_year: book.publish_year.clone(),
            copies: book.copies,
            cover: book.cover.clone(),
            cover_content_type: book.cover_content_type.clone(),
            publisher: book.publisher.clone(),
            authors: book.authors.clone(),
        };

        let publishers = std::mem::take(&mut self.publishers_collection);
        self.publishers_collection =
            add_to_collection_if_missing(publishers, self.edit_form.publisher.as_ref());
        let authors = std::mem::take(&mut self.authors_shared_collection);
        self.authors_shared_collection =
            add_to_collection_if_missing(authors, self.edit_form.authors.iter().flatten());
    }

    fn create_from_form(&self) -> Book {
        Book {
            id: self.edit_form.id,
            isbn: self.edit_form.isbn.clone(),
            name: self.edit_form.name.clone(),
            publish_year: self.edit_form.publish_year.clone(),
            copies: self.edit_form.copies,
            cover_content_type: self.edit_form.cover_content_type.clone(),
            cover: self.edit_form.cover.clone(),
            publisher: self.edit_form.publisher.clone(),
            authors: self.edit_form.authors.clone(),
        }
    }
}

impl Drop for BookUpdateController {
    fn drop(&mut self) {
        self.cancel.cancel();
    }
}
