//! Inbound adapters driving the domain.
//!
//! - **console**: terminal front end rendering the users table and asking
//!   for delete confirmation on stdin

pub mod console;
