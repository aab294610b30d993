//! Client-side user datasource.
//!
//! Owns the soft-deleted identifier set and the replaying snapshot stream.
//! All mutation goes through [`UserDatasource::load`] and
//! [`UserDatasource::delete_user`]; subscribers only ever read.
//!
//! ## Invariants
//! - A published snapshot never contains an identifier from the deleted set.
//!   Both mutators filter and publish while holding the deleted-set lock, so
//!   a load cannot publish a list filtered against a stale set.
//! - A failed fetch publishes an empty snapshot. The failure is logged and
//!   never returned to the caller.
//! - Overlapping loads are not serialised; whichever fetch completes last
//!   publishes last.

use std::collections::BTreeSet;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use futures_util::StreamExt;
use futures_util::stream::Map;
use tokio::task::JoinHandle;
use tracing::{debug, warn};

use super::ports::UserSource;
use super::replay::{ReplayLatest, ReplaySubscription};
use super::{User, UserId};

/// Deletion-filtered list of users currently visible.
pub type UsersSnapshot = Arc<[User]>;

/// Stream of snapshots as handed out by [`UserDatasource::subscribe`].
pub type UsersSubscription = ReplaySubscription<UsersSnapshot>;

/// Stream of snapshot lengths as handed out by
/// [`UserDatasource::subscribe_count`].
pub type UsersCountStream = Map<UsersSubscription, fn(UsersSnapshot) -> usize>;

/// Reactive store over the remote user collection.
pub struct UserDatasource {
    source: Arc<dyn UserSource>,
    deleted: Mutex<BTreeSet<UserId>>,
    snapshots: ReplayLatest<UsersSnapshot>,
}

impl UserDatasource {
    /// Build an empty datasource reading from `source`.
    ///
    /// Subscribers see an empty snapshot until the first load completes.
    #[must_use]
    pub fn new(source: Arc<dyn UserSource>) -> Self {
        Self {
            source,
            deleted: Mutex::new(BTreeSet::new()),
            snapshots: ReplayLatest::new(empty_snapshot()),
        }
    }

    /// Fetch the collection once and publish it without deleted users.
    ///
    /// ```rust,ignore
    /// datasource.load().await;
    /// assert_eq!(datasource.snapshot().len(), 2);
    /// ```
    pub async fn load(&self) {
        let fetched = self.source.fetch_users().await;

        let deleted = self.lock_deleted();
        let snapshot = match fetched {
            Ok(users) => {
                let fetched_count = users.len();
                let visible: UsersSnapshot = users
                    .into_iter()
                    .filter(|user| !deleted.contains(&user.id))
                    .collect();
                debug!(
                    fetched = fetched_count,
                    visible = visible.len(),
                    "publishing fetched user snapshot"
                );
                visible
            }
            Err(error) => {
                warn!(%error, "user fetch failed; publishing empty snapshot");
                empty_snapshot()
            }
        };
        self.snapshots.publish(snapshot);
    }

    /// Run [`Self::load`] on the tokio runtime without waiting for it.
    ///
    /// # Panics
    ///
    /// Panics when called outside a tokio runtime.
    pub fn spawn_load(self: &Arc<Self>) -> JoinHandle<()> {
        let datasource = Arc::clone(self);
        tokio::spawn(async move { datasource.load().await })
    }

    /// Mark `id` as deleted and republish the snapshot without it.
    ///
    /// Unknown identifiers are still recorded, so a later load suppresses
    /// them too. Nothing is sent to the remote collection.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    ///
    /// use user_roster::domain::ports::FixtureUserSource;
    /// use user_roster::domain::{UserDatasource, UserId};
    ///
    /// let datasource = UserDatasource::new(Arc::new(FixtureUserSource::default()));
    /// datasource.delete_user(UserId::new(99));
    /// assert!(datasource.is_deleted(UserId::new(99)));
    /// assert!(datasource.snapshot().is_empty());
    /// ```
    pub fn delete_user(&self, id: UserId) {
        let mut deleted = self.lock_deleted();
        deleted.insert(id);

        let remaining: UsersSnapshot = self
            .snapshots
            .current()
            .iter()
            .filter(|user| user.id != id)
            .cloned()
            .collect();
        debug!(user_id = %id, visible = remaining.len(), "user soft-deleted");
        self.snapshots.publish(remaining);
    }

    /// Subscribe to snapshots, starting with the current one.
    #[must_use]
    pub fn subscribe(&self) -> UsersSubscription {
        self.snapshots.subscribe()
    }

    /// Subscribe to snapshot lengths, starting with the current one.
    #[must_use]
    pub fn subscribe_count(&self) -> UsersCountStream {
        self.subscribe().map(snapshot_len as fn(UsersSnapshot) -> usize)
    }

    /// The most recently published snapshot.
    #[must_use]
    pub fn snapshot(&self) -> UsersSnapshot {
        self.snapshots.current()
    }

    /// Whether `id` has been soft-deleted in this session.
    #[must_use]
    pub fn is_deleted(&self, id: UserId) -> bool {
        self.lock_deleted().contains(&id)
    }

    /// Every soft-deleted identifier in ascending order.
    ///
    /// Ordering follows the id, not the order of the delete calls.
    #[must_use]
    pub fn deleted_ids(&self) -> Vec<UserId> {
        self.lock_deleted().iter().copied().collect()
    }

    fn lock_deleted(&self) -> MutexGuard<'_, BTreeSet<UserId>> {
        self.deleted.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

fn empty_snapshot() -> UsersSnapshot {
    Arc::from(Vec::new())
}

fn snapshot_len(snapshot: UsersSnapshot) -> usize {
    snapshot.len()
}
