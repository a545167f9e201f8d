//! Record client for the users REST API.
//!
//! Each operation is a single HTTP round trip: no retries, no timeout, no
//! caching. Failures are handed back to the caller as [`ApiError`].

use std::sync::Arc;

use async_trait::async_trait;
use reqwest::{header::CONTENT_TYPE, Client, Method, StatusCode};
use serde::de::DeserializeOwned;

use crate::config::Config;
use crate::errors::{ApiError, NO_CONTENT_MESSAGE};
use crate::models::{User, UserDraft};

/// Collection path of the users resource.
pub const USERS_PATH: &str = "/api/users";

/// The four operations the controller needs from the backend.
#[async_trait]
pub trait UserApi: Send + Sync {
    /// GET /api/users
    async fn list_users(&self) -> Result<Vec<User>, ApiError>;

    /// POST /api/users
    async fn create_user(&self, draft: &UserDraft) -> Result<User, ApiError>;

    /// PUT /api/users/{id}
    async fn update_user(&self, id: i64, draft: &UserDraft) -> Result<User, ApiError>;

    /// DELETE /api/users/{id}
    async fn delete_user(&self, id: i64) -> Result<(), ApiError>;
}

#[async_trait]
impl<T: UserApi + ?Sized> UserApi for Arc<T> {
    async fn list_users(&self) -> Result<Vec<User>, ApiError> {
        (**self).list_users().await
    }

    async fn create_user(&self, draft: &UserDraft) -> Result<User, ApiError> {
        (**self).create_user(draft).await
    }

    async fn update_user(&self, id: i64, draft: &UserDraft) -> Result<User, ApiError> {
        (**self).update_user(id, draft).await
    }

    async fn delete_user(&self, id: i64) -> Result<(), ApiError> {
        (**self).delete_user(id).await
    }
}

/// Reqwest-backed [`UserApi`] implementation.
#[derive(Debug, Clone)]
pub struct UserClient {
    http: Client,
    base_url: String,
}

impl UserClient {
    /// Build a client for the given base URL (e.g. `http://localhost:8080`).
    ///
    /// # Errors
    ///
    /// Returns an error when the reqwest client cannot be constructed.
    pub fn new(base_url: impl Into<String>) -> Result<Self, reqwest::Error> {
        let http = Client::builder().build()?;
        Ok(Self::with_client(http, base_url))
    }

    /// Build a client from loaded configuration.
    pub fn from_config(config: &Config) -> Result<Self, reqwest::Error> {
        Self::new(config.api_base_url.clone())
    }

    /// Wrap an existing reqwest client.
    pub fn with_client(http: Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { http, base_url }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Perform one request and return the body of a successful response.
    ///
    /// `None` means the server answered 204 or sent no body; it is never
    /// parsed as JSON.
    async fn send(
        &self,
        method: Method,
        path: &str,
        body: Option<&UserDraft>,
    ) -> Result<Option<String>, ApiError> {
        let url = self.url(path);
        tracing::debug!("{} {}", method, url);

        let mut request = self
            .http
            .request(method.clone(), &url)
            .header(CONTENT_TYPE, "application/json");
        if let Some(draft) = body {
            request = request.body(serde_json::to_vec(draft)?);
        }

        let response = request.send().await?;
        let status = response.status();

        if !status.is_success() {
            // An unreadable error body falls back to the reason phrase
            let text = response.text().await.unwrap_or_default();
            let err = ApiError::from_status(status, &text);
            tracing::warn!("{} {} failed with {}: {}", method, url, status, err);
            return Err(err);
        }

        let text = response.text().await?;
        if status == StatusCode::NO_CONTENT || text.is_empty() {
            return Ok(None);
        }

        Ok(Some(text))
    }
}

fn decode<T: DeserializeOwned>(body: &str) -> Result<T, ApiError> {
    Ok(serde_json::from_str(body)?)
}

fn user_path(id: i64) -> String {
    format!("{}/{}", USERS_PATH, id)
}

#[async_trait]
impl UserApi for UserClient {
    async fn list_users(&self) -> Result<Vec<User>, ApiError> {
        match self.send(Method::GET, USERS_PATH, None).await? {
            Some(body) => decode(&body),
            None => Ok(Vec::new()),
        }
    }

    async fn create_user(&self, draft: &UserDraft) -> Result<User, ApiError> {
        match self.send(Method::POST, USERS_PATH, Some(draft)).await? {
            Some(body) => decode(&body),
            None => Err(ApiError::new(NO_CONTENT_MESSAGE)),
        }
    }

    async fn update_user(&self, id: i64, draft: &UserDraft) -> Result<User, ApiError> {
        match self.send(Method::PUT, &user_path(id), Some(draft)).await? {
            Some(body) => decode(&body),
            None => Err(ApiError::new(NO_CONTENT_MESSAGE)),
        }
    }

    async fn delete_user(&self, id: i64) -> Result<(), ApiError> {
        self.send(Method::DELETE, &user_path(id), None).await?;
        Ok(())
    }
}
