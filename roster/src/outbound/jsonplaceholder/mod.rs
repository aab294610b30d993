//! JSONPlaceholder-style user collection adapter.
//!
//! This module provides a thin HTTP implementation of the `UserSource`
//! port.

mod dto;
mod http_source;

pub use http_source::{DEFAULT_USERS_ENDPOINT, HttpUserSource};
