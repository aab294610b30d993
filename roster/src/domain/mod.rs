//! Domain primitives, ports and services.
//!
//! Purpose: hold the user model, the replaying snapshot stream and the
//! datasource that filters fetched users by the soft-deleted set. Adapters
//! live in `outbound` and `inbound` and only talk to the domain through
//! [`ports`].
//!
//! Public surface:
//! - User (alias to `user::User`) with `Address`, `Geo`, `Company`, `UserId`.
//! - UserDatasource (alias to `user_datasource::UserDatasource`): the store.
//! - UsersPage (alias to `users_page::UsersPage`): table view state.
//! - ReplayLatest (alias to `replay::ReplayLatest`): multicast cell.

pub mod ports;
pub mod replay;
pub mod user;
pub mod user_datasource;
pub mod user_details;
pub mod users_page;

pub use self::replay::{ReplayLatest, ReplaySubscription};
pub use self::user::{Address, Company, Geo, User, UserId};
pub use self::user_datasource::{
    UserDatasource, UsersCountStream, UsersSnapshot, UsersSubscription,
};
pub use self::user_details::UserDetails;
pub use self::users_page::UsersPage;
