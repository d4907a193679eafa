//! Author update form controller

use std::sync::Arc;

use validator::Validate;

use crate::error::AppResult;
use crate::models::Author;
use crate::navigation::Navigator;
use crate::services::EntityApi;

/// Form state bound to the author editor.
#[derive(Debug, Clone, Default, Validate)]
pub struct AuthorForm {
    pub id: Option<i32>,
    #[validate(required, length(max = 50))]
    pub first_name: Option<String>,
    #[validate(required, length(max = 50))]
    pub last_name: Option<String>,
}

pub struct AuthorUpdateController {
    authors: Arc<dyn EntityApi<Author>>,
    navigator: Arc<dyn Navigator>,
    pub is_saving: bool,
    pub edit_form: AuthorForm,
}

impl AuthorUpdateController {
    pub fn new(authors: Arc<dyn EntityApi<Author>>, navigator: Arc<dyn Navigator>) -> Self {
        Self {
            authors,
            navigator,
            is_saving: false,
            edit_form: AuthorForm::default(),
        }
    }

    /// Populate the form from an existing author, or from the empty default
    /// for a new one.
    pub fn initialize(&mut self, author: &Author) {
        self.update_form(author);
    }

    /// Validate the form and dispatch create or update, depending on whether
    /// the author has been persisted before. Navigates back on success only.
    pub async fn save(&mut self) -> AppResult<()> {
        self.edit_form.validate()?;
        self.is_saving = true;
        let author = self.create_from_form();
        let result = if author.id.is_some() {
            self.authors.update(&author).await
        } else {
            self.authors.create(&author).await
        };
        self.is_saving = false;
        match result {
            Ok(_) => {
                self.previous_state();
                Ok(())
            }
            Err(e) => {
                tracing::warn!("Author save failed: {}", e);
                Err(e)
            }
        }
    }

    pub fn previous_state(&self) {
        self.navigator.back();
    }

    fn update_form(&mut self, author: &Author) {
        self.edit_form = AuthorForm {
            id: author.id,
            first_name: author.first_name.clone(),
            last_name: author.last_name.clone(),
        };
    }

    fn create_from_form(&self) -> Author {
        Author {
            id: self.edit_form.id,
            first_name: self.edit_form.first_name.clone(),
            last_name: self.edit_form.last_name.clone(),
            books: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AppError;
    use crate::navigation::MockNavigator;
    use crate::services::rest::MockEntityApi;

    fn existing_author() -> Author {
        Author {
            id: Some(123),
            first_name: Some("Ursula".to_string()),
            last_name: Some("Le Guin".to_string()),
            books: None,
        }
    }

    #[tokio::test]
    async fn test_save_calls_update_for_existing_entity() {
        let mut authors = MockEntityApi::<Author>::new();
        authors
            .expect_update()
            .withf(|a: &Author| a.id == Some(123))
            .times(1)
            .returning(|a| Ok(a.clone()));
        let mut navigator = MockNavigator::new();
        navigator.expect_back().times(1).return_const(());

        let mut controller = AuthorUpdateController::new(Arc::new(authors), Arc::new(navigator));
        controller.initialize(&existing_author());

        controller.save().await.unwrap();
        assert!(!controller.is_saving);
    }

    #[tokio::test]
    async fn test_save_calls_create_for_new_entity() {
        let mut authors = MockEntityApi::<Author>::new();
        authors
            .expect_create()
            .withf(|a: &Author| a.id.is_none())
            .times(1)
            .returning(|a| {
                let mut created = a.clone();
                created.id = Some(1);
                Ok(created)
            });
        let mut navigator = MockNavigator::new();
        navigator.expect_back().times(1).return_const(());

        let mut controller = AuthorUpdateController::new(Arc::new(authors), Arc::new(navigator));
        controller.initialize(&Author {
            first_name: Some("Octavia".to_string()),
            last_name: Some("Butler".to_string()),
            ..Default::default()
        });

        controller.save().await.unwrap();
        assert!(!controller.is_saving);
    }

    #[tokio::test]
    async fn test_save_error_clears_flag_without_navigating() {
        let mut authors = MockEntityApi::<Author>::new();
        authors.expect_update().times(1).returning(|_| {
            Err(AppError::UnexpectedStatus {
                status: reqwest::StatusCode::INTERNAL_SERVER_ERROR,
                message: "boom".to_string(),
            })
        });
        let mut navigator = MockNavigator::new();
        navigator.expect_back().times(0);

        let mut controller = AuthorUpdateController::new(Arc::new(authors), Arc::new(navigator));
        controller.initialize(&existing_author());

        assert!(controller.save().await.is_err());
        assert!(!controller.is_saving);
    }

    #[tokio::test]
    async fn test_invalid_form_is_rejected_before_dispatch() {
        let authors = MockEntityApi::<Author>::new();
        let navigator = MockNavigator::new();

        let mut controller = AuthorUpdateController::new(Arc::new(authors), Arc::new(navigator));
        controller.initialize(&Author::default());

        assert!(matches!(
            controller.save().await,
            Err(AppError::Validation(_))
        ));
        assert!(!controller.is_saving);
    }

    #[tokio::test]
    async fn test_overlong_name_is_rejected() {
        let authors = MockEntityApi::<Author>::new();
        let navigator = MockNavigator::new();

        let mut controller = AuthorUpdateController::new(Arc::new(authors), Arc::new(navigator));
        controller.initialize(&Author {
            first_name: Some("x".repeat(51)),
            last_name: Some("y".to_string()),
            ..Default::default()
        });

        assert!(matches!(
            controller.save().await,
            Err(AppError::Validation(_))
        ));
    }
}
