//! Users page state: the visible table rows plus a loading flag.
//!
//! The page owns one subscription to the datasource and folds every
//! snapshot it receives into its own copy, the way a view binds to a stream.
//! Deletion always goes through a [`DeleteConfirmation`] first.

use std::sync::Arc;

use tracing::{debug, info};

use super::ports::{ConfirmDialog, DeleteConfirmation};
use super::user_datasource::{UserDatasource, UsersSnapshot, UsersSubscription};
use super::{User, UserDetails, UserId};

/// View model behind the users table.
pub struct UsersPage {
    datasource: Arc<UserDatasource>,
    subscription: UsersSubscription,
    users: UsersSnapshot,
    is_loading: bool,
}

impl UsersPage {
    /// Bind a page to `datasource`.
    #[must_use]
    pub fn new(datasource: Arc<UserDatasource>) -> Self {
        let subscription = datasource.subscribe();
        let users = datasource.snapshot();
        Self {
            datasource,
            subscription,
            users,
            is_loading: false,
        }
    }

    /// Load users and refresh the page once the snapshot arrives.
    pub async fn open(&mut self) {
        self.is_loading = true;
        self.datasource.load().await;
        self.sync();
    }

    /// Ask for confirmation and soft-delete `id` when granted.
    ///
    /// Returns whether the user was deleted.
    pub async fn request_delete(
        &mut self,
        id: UserId,
        confirmation: &mut dyn DeleteConfirmation,
    ) -> bool {
        let confirmed = confirmation.confirm(&ConfirmDialog::delete_user()).await;
        if confirmed {
            self.datasource.delete_user(id);
            info!(user_id = %id, "user deleted from the roster");
        } else {
            debug!(user_id = %id, "user deletion cancelled");
        }
        self.sync();
        confirmed
    }

    /// Detail view for a visible user.
    #[must_use]
    pub fn details(&self, id: UserId) -> Option<UserDetails<'_>> {
        self.users
            .iter()
            .find(|user| user.id == id)
            .map(UserDetails::new)
    }

    /// Rows currently shown.
    #[must_use]
    pub fn users(&self) -> &[User] {
        &self.users
    }

    /// Number of rows currently shown.
    #[must_use]
    pub fn user_count(&self) -> usize {
        self.users.len()
    }

    /// Whether a load is still waiting for its snapshot.
    #[must_use]
    pub const fn is_loading(&self) -> bool {
        self.is_loading
    }

    /// Fold any queued snapshots into the page.
    pub fn sync(&mut self) {
        if let Some(latest) = self.subscription.latest() {
            self.users = latest;
            self.is_loading = false;
            debug!(users = self.users.len(), "users page refreshed");
        }
    }
}
