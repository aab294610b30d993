//! Presentation helpers for the user detail view.

use super::User;

const MAPS_SEARCH_URL: &str = "https://www.google.com/maps/search/?api=1&query=";

/// Read-only detail view over one [`User`].
#[derive(Debug, Clone, Copy)]
pub struct UserDetails<'a> {
    user: &'a User,
}

impl<'a> UserDetails<'a> {
    /// Wrap a user for display.
    #[must_use]
    pub const fn new(user: &'a User) -> Self {
        Self { user }
    }

    /// The underlying user.
    #[must_use]
    pub const fn user(&self) -> &'a User {
        self.user
    }

    /// Map search link for the address coordinates.
    ///
    /// # Examples
    /// ```
    /// use user_roster::domain::{User, UserDetails, UserId};
    ///
    /// let mut user = User::named(UserId::new(1), "Leanne Graham", "Bret");
    /// user.address.geo.lat = "-37.3159".to_owned();
    /// user.address.geo.lng = "81.1496".to_owned();
    /// assert_eq!(
    ///     UserDetails::new(&user).map_url(),
    ///     "https://www.google.com/maps/search/?api=1&query=-37.3159,81.1496",
    /// );
    /// ```
    #[must_use]
    pub fn map_url(&self) -> String {
        let geo = &self.user.address.geo;
        format!("{MAPS_SEARCH_URL}{},{}", geo.lat, geo.lng)
    }

    /// Website link. The API stores bare host names.
    #[must_use]
    pub fn website_url(&self) -> String {
        format!("http://{}", self.user.website)
    }

    /// Address as two display lines: street and suite, then city and zip.
    #[must_use]
    pub fn address_lines(&self) -> [String; 2] {
        let address = &self.user.address;
        [
            format!("{}, {}", address.street, address.suite),
            format!("{}, {}", address.city, address.zipcode),
        ]
    }

    /// Company name, catchphrase and tagline, one per line.
    #[must_use]
    pub fn company_lines(&self) -> [&'a str; 3] {
        let company = &self.user.company;
        [
            company.name.as_str(),
            company.catch_phrase.as_str(),
            company.tagline.as_str(),
        ]
    }
}
