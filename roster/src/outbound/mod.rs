//! Outbound adapters implementing domain ports for external infrastructure.
//!
//! - **jsonplaceholder**: reqwest-backed `UserSource` reading the remote user
//!   collection
//!
//! Adapters are thin translators that convert between domain types and
//! transport representations. They contain no business logic.

pub mod jsonplaceholder;
