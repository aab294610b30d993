//! User data model.
//!
//! Users are immutable once fetched. Snapshots share them behind an `Arc`
//! and only ever filter the list, never edit a record in place.

use std::fmt;

/// Externally assigned numeric user identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct UserId(u64);

impl UserId {
    /// Wrap a raw identifier.
    ///
    /// # Examples
    /// ```
    /// use user_roster::domain::UserId;
    ///
    /// assert_eq!(UserId::new(7).get(), 7);
    /// ```
    #[must_use]
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    /// Access the raw identifier.
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl From<u64> for UserId {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Geographic position kept as the decimal strings the API returns.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Geo {
    /// Latitude as a decimal string.
    pub lat: String,
    /// Longitude as a decimal string.
    pub lng: String,
}

/// Postal address.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Address {
    /// Street name and number.
    pub street: String,
    /// Suite or apartment.
    pub suite: String,
    /// City.
    pub city: String,
    /// Postal code.
    pub zipcode: String,
    /// Coordinates of the address.
    pub geo: Geo,
}

/// Employer details.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Company {
    /// Company name.
    pub name: String,
    /// Marketing catchphrase.
    pub catch_phrase: String,
    /// Business tagline.
    pub tagline: String,
}

/// Application user as fetched from the remote collection.
///
/// ## Invariants
/// - `id` is unique within one fetched collection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    /// Stable identifier.
    pub id: UserId,
    /// Display name.
    pub name: String,
    /// Login handle.
    pub username: String,
    /// Contact e-mail address.
    pub email: String,
    /// Postal address.
    pub address: Address,
    /// Contact phone number.
    pub phone: String,
    /// Website host name, without scheme.
    pub website: String,
    /// Employer details.
    pub company: Company,
}

impl User {
    /// Build a user with the given identity and blank contact details.
    ///
    /// Handy for fixtures; production users come from a
    /// [`UserSource`](crate::domain::ports::UserSource).
    ///
    /// # Examples
    /// ```
    /// use user_roster::domain::{User, UserId};
    ///
    /// let user = User::named(UserId::new(1), "Alice", "alice");
    /// assert_eq!(user.name, "Alice");
    /// assert!(user.email.is_empty());
    /// ```
    pub fn named(id: UserId, name: impl Into<String>, username: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            username: username.into(),
            email: String::new(),
            address: Address::default(),
            phone: String::new(),
            website: String::new(),
            company: Company::default(),
        }
    }
}
