//! Reqwest-backed user collection adapter.
//!
//! This adapter owns transport details only: the single GET request,
//! optional timeout, HTTP error mapping, and JSON decoding into domain users.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode, Url};

use super::dto::UsersResponseDto;
use crate::domain::User;
use crate::domain::ports::{UserSource, UserSourceError};

/// Public collection endpoint used when no override is configured.
pub const DEFAULT_USERS_ENDPOINT: &str = "https://jsonplaceholder.typicode.com/users";

const USER_AGENT: &str = concat!("user-roster/", env!("CARGO_PKG_VERSION"));

/// User source performing one HTTP GET against a collection endpoint.
pub struct HttpUserSource {
    client: Client,
    endpoint: Url,
}

impl HttpUserSource {
    /// Build an adapter without a request timeout.
    /// ```rust,ignore
    /// let source = HttpUserSource::new(endpoint)?;
    /// ```
    /// # Errors
    ///
    /// Returns an error when the reqwest client cannot be constructed.
    pub fn new(endpoint: Url) -> Result<Self, reqwest::Error> {
        Self::with_timeout(endpoint, None)
    }

    /// Build an adapter, optionally bounding each request by `timeout`.
    /// ```rust,ignore
    /// let source = HttpUserSource::with_timeout(endpoint, Some(Duration::from_secs(10)))?;
    /// ```
    /// # Errors
    ///
    /// Returns an error when the reqwest client cannot be constructed.
    pub fn with_timeout(endpoint: Url, timeout: Option<Duration>) -> Result<Self, reqwest::Error> {
        let builder = Client::builder().user_agent(USER_AGENT);
        let client = match timeout {
            Some(limit) => builder.timeout(limit),
            None => builder,
        }
        .build()?;
        Ok(Self { client, endpoint })
    }

    /// Endpoint this adapter reads from.
    #[must_use]
    pub const fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

#[async_trait]
impl UserSource for HttpUserSource {
    async fn fetch_users(&self) -> Result<Vec<User>, UserSourceError> {
        let response = self
            .client
            .get(self.endpoint.clone())
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .await
            .map_err(map_transport_error)?;

        let status = response.status();
        let body = response.bytes().await.map_err(map_transport_error)?;
        if !status.is_success() {
            return Err(map_status_error(status, body.as_ref()));
        }

        parse_users(body.as_ref())
    }
}

fn parse_users(body: &[u8]) -> Result<Vec<User>, UserSourceError> {
    let decoded: UsersResponseDto = serde_json::from_slice(body).map_err(|error| {
        UserSourceError::decode(format!("invalid user collection JSON: {error}"))
    })?;
    decoded
        .into_domain_users()
        .map_err(UserSourceError::decode)
}

fn map_transport_error(error: reqwest::Error) -> UserSourceError {
    if error.is_timeout() {
        UserSourceError::timeout(error.to_string())
    } else {
        UserSourceError::transport(error.to_string())
    }
}

fn map_status_error(status: StatusCode, body: &[u8]) -> UserSourceError {
    let preview = body_preview(body);
    let message = if preview.is_empty() {
        status
            .canonical_reason()
            .unwrap_or("no response body")
            .to_owned()
    } else {
        preview
    };
    UserSourceError::status(status.as_u16(), message)
}

fn body_preview(body: &[u8]) -> String {
    const PREVIEW_CHAR_LIMIT: usize = 160;

    let compact = String::from_utf8_lossy(body)
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ");
    let preview = compact.chars().take(PREVIEW_CHAR_LIMIT).collect::<String>();
    if compact.chars().count() > PREVIEW_CHAR_LIMIT {
        format!("{preview}...")
    } else {
        preview
    }
}
