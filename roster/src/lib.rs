//! User roster library modules.
//!
//! A single-page user roster: fetch the user collection once, show it as a
//! table, and let the person at the screen soft-delete rows after a
//! confirmation. Deletions live only in memory for the lifetime of the
//! [`domain::UserDatasource`].

pub mod config;
pub mod domain;
pub mod inbound;
pub mod outbound;

pub use config::{RosterSettings, SettingsError};
pub use domain::{UserDatasource, UsersPage};
