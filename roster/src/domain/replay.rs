//! Multicast value holder that replays its latest value to new subscribers.
//!
//! Every subscriber owns an unbounded channel. Subscribing pushes the cached
//! value into the fresh channel before the sender is registered, so a
//! subscriber always observes the current value first and then every later
//! publication in order. Publishing happens under the state lock, which keeps
//! the cache and the fan-out order consistent across threads.

use std::pin::Pin;
use std::sync::{Mutex, MutexGuard, PoisonError};
use std::task::{Context, Poll};

use futures_util::Stream;
use tokio::sync::mpsc;

struct ReplayState<T> {
    latest: T,
    subscribers: Vec<mpsc::UnboundedSender<T>>,
}

/// Broadcast cell with "replay latest" semantics.
pub struct ReplayLatest<T> {
    state: Mutex<ReplayState<T>>,
}

impl<T: Clone> ReplayLatest<T> {
    /// Create a holder whose first replayed value is `initial`.
    pub fn new(initial: T) -> Self {
        Self {
            state: Mutex::new(ReplayState {
                latest: initial,
                subscribers: Vec::new(),
            }),
        }
    }

    /// Register a subscriber. The current value is queued immediately.
    ///
    /// # Examples
    /// ```
    /// use user_roster::domain::ReplayLatest;
    ///
    /// let cell = ReplayLatest::new(1_u32);
    /// let mut early = cell.subscribe();
    /// cell.publish(2);
    /// let mut late = cell.subscribe();
    ///
    /// assert_eq!(early.try_next(), Some(1));
    /// assert_eq!(early.try_next(), Some(2));
    /// assert_eq!(late.try_next(), Some(2));
    /// assert_eq!(late.try_next(), None);
    /// ```
    pub fn subscribe(&self) -> ReplaySubscription<T> {
        let (sender, receiver) = mpsc::unbounded_channel();
        let mut state = self.lock();
        if sender.send(state.latest.clone()).is_ok() {
            state.subscribers.push(sender);
        }
        ReplaySubscription { receiver }
    }

    /// Replace the cached value and deliver it to every live subscriber.
    ///
    /// Subscribers whose receiving half was dropped are pruned.
    pub fn publish(&self, value: T) {
        let mut state = self.lock();
        state
            .subscribers
            .retain(|subscriber| subscriber.send(value.clone()).is_ok());
        state.latest = value;
    }

    /// Clone of the cached value.
    pub fn current(&self) -> T {
        self.lock().latest.clone()
    }

    /// Number of subscribers still holding their receiving half.
    pub fn subscriber_count(&self) -> usize {
        let mut state = self.lock();
        state.subscribers.retain(|subscriber| !subscriber.is_closed());
        state.subscribers.len()
    }

    fn lock(&self) -> MutexGuard<'_, ReplayState<T>> {
        // Every mutation completes before the guard drops, so a poisoned
        // state is still coherent.
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Receiving half handed out by [`ReplayLatest::subscribe`].
///
/// The stream ends only once the owning [`ReplayLatest`] is dropped.
pub struct ReplaySubscription<T> {
    receiver: mpsc::UnboundedReceiver<T>,
}

impl<T> ReplaySubscription<T> {
    /// Take the next queued value without waiting.
    pub fn try_next(&mut self) -> Option<T> {
        self.receiver.try_recv().ok()
    }

    /// Drain every queued value and return the most recent one.
    pub fn latest(&mut self) -> Option<T> {
        let mut latest = None;
        while let Some(value) = self.try_next() {
            latest = Some(value);
        }
        latest
    }
}

impl<T> Stream for ReplaySubscription<T> {
    type Item = T;

    fn poll_next(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        self.receiver.poll_recv(cx)
    }
}
