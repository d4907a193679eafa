//! Generic REST client for backend entity resources.
//!
//! Every entity resource exposes the same CRUD surface; `RestService` carries
//! the shared HTTP plumbing once and is instantiated per resource path.

use std::marker::PhantomData;

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::{AppError, AppResult};
use crate::models::Identified;

/// Asynchronous CRUD operations of one backend entity resource.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait EntityApi<T: Send + Sync + 'static>: Send + Sync {
    /// Persist a new entity. The backend assigns the identifier.
    async fn create(&self, entity: &T) -> AppResult<T>;

    /// Replace a persisted entity. Fails with [`AppError::MissingIdentifier`]
    /// when the entity has never been saved.
    async fn update(&self, entity: &T) -> AppResult<T>;

    /// Fetch a single entity by identifier.
    async fn find(&self, id: i32) -> AppResult<T>;

    /// Fetch the entity collection, optionally narrowed by filter parameters
    /// such as `bookId.specified=false`.
    async fn query(&self, filter: &[(String, String)]) -> AppResult<Vec<T>>;

    /// Delete a persisted entity.
    async fn delete(&self, id: i32) -> AppResult<()>;
}

/// `EntityApi` implementation over the backend REST API.
pub struct RestService<T> {
    http: reqwest::Client,
    base_url: String,
    resource: &'static str,
    _entity: PhantomData<fn() -> T>,
}

impl<T> RestService<T> {
    pub fn new(http: reqwest::Client, base_url: &str, resource: &'static str) -> Self {
        Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            resource,
            _entity: PhantomData,
        }
    }

    fn resource_url(&self) -> String {
        format!("{}/api/{}", self.base_url, self.resource)
    }

    fn entity_url(&self, id: i32) -> String {
        format!("{}/{}", self.resource_url(), id)
    }
}

/// Read the response body as `T`, mapping non-2xx statuses to
/// [`AppError::UnexpectedStatus`].
async fn expect_body<T: DeserializeOwned>(response: reqwest::Response) -> AppResult<T> {
    let status = response.status();
    if !status.is_success() {
        let message = response.text().await.unwrap_or_default();
        return Err(AppError::UnexpectedStatus { status, message });
    }
    Ok(response.json().await?)
}

#[async_trait]
impl<T> EntityApi<T> for RestService<T>
where
    T: Identified + Serialize + DeserializeOwned + Send + Sync + 'static,
{
    async fn create(&self, entity: &T) -> AppResult<T> {
        let url = self.resource_url();
        tracing::debug!("POST {}", url);
        let response = self.http.post(url).json(entity).send().await?;
        expect_body(response).await
    }

    async fn update(&self, entity: &T) -> AppResult<T> {
        let id = entity.id().ok_or(AppError::MissingIdentifier)?;
        let url = self.entity_url(id);
        tracing::debug!("PUT {}", url);
        let response = self.http.put(url).json(entity).send().await?;
        expect_body(response).await
    }

    async fn find(&self, id: i32) -> AppResult<T> {
        let url = self.entity_url(id);
        tracing::debug!("GET {}", url);
        let response = self.http.get(url).send().await?;
        expect_body(response).await
    }

    async fn query(&self, filter: &[(String, String)]) -> AppResult<Vec<T>> {
        let url = self.resource_url();
        tracing::debug!("GET {} with {} filter(s)", url, filter.len());
        let mut request = self.http.get(url);
        if !filter.is_empty() {
            request = request.query(filter);
        }
        let response = request.send().await?;
        expect_body(response).await
    }

    async fn delete(&self, id: i32) -> AppResult<()> {
        let url = self.entity_url(id);
        tracing::debug!("DELETE {}", url);
        let response = self.http.delete(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(AppError::UnexpectedStatus { status, message });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Author;

    fn service() -> RestService<Author> {
        RestService::new(reqwest::Client::new(), "http://localhost:8080/", "authors")
    }

    #[test]
    fn test_urls_strip_trailing_slash() {
        let svc = service();
        assert_eq!(svc.resource_url(), "http://localhost:8080/api/authors");
        assert_eq!(svc.entity_url(42), "http://localhost:8080/api/authors/42");
    }

    #[test]
    fn test_update_requires_identifier() {
        let svc = service();
        let draft = Author::default();
        let result = tokio_test::block_on(svc.update(&draft));
        assert!(matches!(result, Err(AppError::MissingIdentifier)));
    }
}
