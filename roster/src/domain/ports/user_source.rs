//! Driven port for fetching the full user collection.
//!
//! The datasource issues exactly one call per load and treats every error
//! variant the same way, so the variants exist for logging and adapter tests
//! rather than for branching in the domain.

use async_trait::async_trait;

use super::define_port_error;
use crate::domain::User;

define_port_error! {
    /// Errors surfaced while fetching users.
    pub enum UserSourceError {
        /// Network transport failed before a response arrived.
        Transport {
            /// Transport failure description.
            message: String,
        } =>
            "user source transport failed: {message}",
        /// The request exceeded its configured timeout.
        Timeout {
            /// Timeout description.
            message: String,
        } =>
            "user source timeout: {message}",
        /// The remote answered with a non-success status.
        Status {
            /// HTTP status code.
            status: u16,
            /// Response body preview or canonical reason.
            message: String,
        } =>
            "user source returned status {status}: {message}",
        /// The response body was not a valid user collection.
        Decode {
            /// Decoder failure description.
            message: String,
        } =>
            "user source response decode failed: {message}",
    }
}

/// Port for reading the remote user collection.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserSource: Send + Sync {
    /// Fetch every user in one request.
    ///
    /// # Examples
    ///
    /// ```rust,ignore
    /// use user_roster::domain::ports::{FixtureUserSource, UserSource};
    /// use user_roster::domain::{User, UserId};
    ///
    /// let source = FixtureUserSource::new(vec![User::named(UserId::new(1), "Alice", "alice")]);
    /// let users = source.fetch_users().await?;
    /// assert_eq!(users.len(), 1);
    /// # Ok::<(), user_roster::domain::ports::UserSourceError>(())
    /// ```
    async fn fetch_users(&self) -> Result<Vec<User>, UserSourceError>;
}

/// In-memory source returning a fixed collection on every call.
#[derive(Debug, Clone, Default)]
pub struct FixtureUserSource {
    users: Vec<User>,
}

impl FixtureUserSource {
    /// Serve `users` from every fetch.
    #[must_use]
    pub const fn new(users: Vec<User>) -> Self {
        Self { users }
    }
}

#[async_trait]
impl UserSource for FixtureUserSource {
    async fn fetch_users(&self) -> Result<Vec<User>, UserSourceError> {
        Ok(self.users.clone())
    }
}
