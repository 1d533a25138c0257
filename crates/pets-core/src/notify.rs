//! Change notification for pet identifiers.
//!
//! The provider calls [`ChangeNotifier::notify_change`] after every mutation
//! that touched at least one row. [`ChangeBroadcaster`] fans those calls out
//! over a `tokio` broadcast channel; each [`ChangeSubscription`] keeps only the
//! notifications that concern the identifier it watches.
//!
//! Delivery is fire-and-forget. Notifying with no subscribers is not an error,
//! and a subscriber that falls behind skips the notifications it missed.

use log::{debug, warn};
use tokio::sync::broadcast::{self, error::RecvError, error::TryRecvError};

use crate::{models::ResultSet, uri::PetUri};

const CHANNEL_CAPACITY: usize = 256;

/// Receives change signals from the record access component.
pub trait ChangeNotifier: Send + Sync {
    /// Signals that data reachable through `uri` changed.
    fn notify_change(&self, uri: &PetUri);
}

/// Notifier for callers that do not observe changes.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopNotifier;

impl ChangeNotifier for NoopNotifier {
    fn notify_change(&self, _uri: &PetUri) {}
}

/// Broadcast-backed notifier that observers subscribe to.
#[derive(Debug, Clone)]
pub struct ChangeBroadcaster {
    sender: broadcast::Sender<PetUri>,
}

impl ChangeBroadcaster {
    pub fn new() -> Self {
        let (sender, _) = broadcast::channel(CHANNEL_CAPACITY);
        Self { sender }
    }

    /// Watches `uri` for changes.
    ///
    /// With `notify_for_descendants`, a collection subscription also hears
    /// about changes to individual pets. A single-pet subscription always
    /// hears about changes announced on the whole collection.
    pub fn subscribe(&self, uri: PetUri, notify_for_descendants: bool) -> ChangeSubscription {
        ChangeSubscription {
            receiver: self.sender.subscribe(),
            uri,
            notify_for_descendants,
        }
    }

    /// Watches the identifier a result set was read through.
    pub fn watch(&self, result: &ResultSet) -> ChangeSubscription {
        self.subscribe(result.notification_uri(), true)
    }

    /// Number of live subscriptions.
    pub fn subscriber_count(&self) -> usize {
        self.sender.receiver_count()
    }
}

impl Default for ChangeBroadcaster {
    fn default() -> Self {
        Self::new()
    }
}

impl ChangeNotifier for ChangeBroadcaster {
    fn notify_change(&self, uri: &PetUri) {
        // No receivers is fine.
        if self.sender.send(*uri).is_err() {
            debug!("No observers for change on {uri}");
        }
    }
}

/// A registration for change notifications on one identifier.
#[derive(Debug)]
pub struct ChangeSubscription {
    receiver: broadcast::Receiver<PetUri>,
    uri: PetUri,
    notify_for_descendants: bool,
}

impl ChangeSubscription {
    /// Identifier this subscription watches.
    pub fn uri(&self) -> PetUri {
        self.uri
    }

    /// Returns true if a change announced on `changed` concerns this
    /// subscription.
    pub fn matches(&self, changed: &PetUri) -> bool {
        *changed == self.uri
            || changed.is_ancestor_of(&self.uri)
            || (self.notify_for_descendants && self.uri.is_ancestor_of(changed))
    }

    /// Returns the next matching change without waiting, if one is queued.
    pub fn try_next(&mut self) -> Option<PetUri> {
        loop {
            match self.receiver.try_recv() {
                Ok(changed) if self.matches(&changed) => return Some(changed),
                Ok(_) => continue,
                Err(TryRecvError::Lagged(skipped)) => {
                    warn!("Observer of {} skipped {skipped} notifications", self.uri);
                }
                Err(TryRecvError::Empty | TryRecvError::Closed) => return None,
            }
        }
    }

    /// Waits for the next matching change.
    ///
    /// Returns `None` once every notifier has been dropped.
    pub async fn next(&mut self) -> Option<PetUri> {
        loop {
            match self.receiver.recv().await {
                Ok(changed) if self.matches(&changed) => return Some(changed),
                Ok(_) => continue,
                Err(RecvError::Lagged(skipped)) => {
                    warn!("Observer of {} skipped {skipped} notifications", self.uri);
                }
                Err(RecvError::Closed) => return None,
            }
        }
    }

    /// Drains every queued change and returns the matching ones in order.
    pub fn drain(&mut self) -> Vec<PetUri> {
        std::iter::from_fn(|| self.try_next()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_notify_without_subscribers_is_silent() {
        let broadcaster = ChangeBroadcaster::new();
        broadcaster.notify_change(&PetUri::Collection);
        assert_eq!(broadcaster.subscriber_count(), 0);
    }

    #[test]
    fn test_collection_subscription_with_descendants() {
        let broadcaster = ChangeBroadcaster::new();
        let mut sub = broadcaster.subscribe(PetUri::Collection, true);

        broadcaster.notify_change(&PetUri::Item(3));
        broadcaster.notify_change(&PetUri::Collection);

        assert_eq!(sub.drain(), vec![PetUri::Item(3), PetUri::Collection]);
    }

    #[test]
    fn test_collection_subscription_without_descendants() {
        let broadcaster = ChangeBroadcaster::new();
        let mut sub = broadcaster.subscribe(PetUri::Collection, false);

        broadcaster.notify_change(&PetUri::Item(3));
        assert_eq!(sub.try_next(), None);

        broadcaster.notify_change(&PetUri::Collection);
        assert_eq!(sub.try_next(), Some(PetUri::Collection));
    }

    #[test]
    fn test_item_subscription_ignores_other_items() {
        let broadcaster = ChangeBroadcaster::new();
        let mut sub = broadcaster.subscribe(PetUri::Item(1), false);

        broadcaster.notify_change(&PetUri::Item(2));
        broadcaster.notify_change(&PetUri::Item(1));
        broadcaster.notify_change(&PetUri::Collection);

        assert_eq!(sub.drain(), vec![PetUri::Item(1), PetUri::Collection]);
        assert_eq!(sub.uri(), PetUri::Item(1));
    }

    #[tokio::test]
    async fn test_next_waits_for_matching_change() {
        let broadcaster = ChangeBroadcaster::new();
        let mut sub = broadcaster.subscribe(PetUri::Item(5), false);

        let sender = broadcaster.clone();
        tokio::spawn(async move {
            sender.notify_change(&PetUri::Item(4));
            sender.notify_change(&PetUri::Item(5));
        });

        assert_eq!(sub.next().await, Some(PetUri::Item(5)));
    }
}
