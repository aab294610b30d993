//! Domain ports defining the edges of the hexagon.
//!
//! `UserSource` is driven by the datasource and implemented by outbound
//! adapters; `DeleteConfirmation` is implemented by whichever inbound adapter
//! is showing the users page.

mod macros;
pub(crate) use macros::define_port_error;

mod delete_confirmation;
mod user_source;

#[cfg(test)]
pub use delete_confirmation::MockDeleteConfirmation;
pub use delete_confirmation::{ConfirmDialog, DeleteConfirmation};
#[cfg(test)]
pub use user_source::MockUserSource;
pub use user_source::{FixtureUserSource, UserSource, UserSourceError};
