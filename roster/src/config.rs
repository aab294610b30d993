//! Roster configuration loaded via OrthoConfig.
//!
//! Values layer CLI flags over `USER_ROSTER_*` environment variables over
//! configuration files. Everything is optional; accessors apply defaults.

use std::time::Duration;

use ortho_config::OrthoConfig;
use serde::Deserialize;
use thiserror::Error;
use url::Url;

use crate::outbound::jsonplaceholder::DEFAULT_USERS_ENDPOINT;

/// Errors raised while interpreting loaded settings.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SettingsError {
    /// The endpoint override is not a URL.
    #[error("invalid user collection endpoint `{endpoint}`: {source}")]
    InvalidEndpoint {
        /// Raw configured value.
        endpoint: String,
        /// Parser failure.
        #[source]
        source: url::ParseError,
    },
    /// The endpoint override is not an HTTP(S) URL.
    #[error("user collection endpoint must use http or https, got `{scheme}`")]
    UnsupportedScheme {
        /// Scheme found in the configured value.
        scheme: String,
    },
}

/// Settings for the roster binary.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "USER_ROSTER")]
pub struct RosterSettings {
    /// Override for the user collection endpoint.
    pub endpoint: Option<String>,
    /// Per-request timeout in seconds. Zero means no timeout.
    #[ortho_config(default = 0)]
    pub request_timeout_secs: u64,
}

impl RosterSettings {
    /// Return the configured endpoint, falling back to the public collection.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError`] when the override is not an HTTP(S) URL.
    pub fn endpoint(&self) -> Result<Url, SettingsError> {
        let raw = self.endpoint.as_deref().unwrap_or(DEFAULT_USERS_ENDPOINT);
        let url = Url::parse(raw).map_err(|source| SettingsError::InvalidEndpoint {
            endpoint: raw.to_owned(),
            source,
        })?;
        match url.scheme() {
            "http" | "https" => Ok(url),
            other => Err(SettingsError::UnsupportedScheme {
                scheme: other.to_owned(),
            }),
        }
    }

    /// Return the request timeout, if one is configured.
    #[must_use]
    pub fn request_timeout(&self) -> Option<Duration> {
        (self.request_timeout_secs > 0).then(|| Duration::from_secs(self.request_timeout_secs))
    }
}
