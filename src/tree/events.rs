//! Tree change notifications
//!
//! Events say that the root list changed, not how. Subscribers re-read
//! whatever part of the tree they display.

use serde::{Deserialize, Serialize};
use tokio::sync::broadcast;

/// Emitted after every mutation of the root list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", content = "data")]
pub enum TreeEvent {
    RootsAdded { count: usize },
    RootRemoved,
    Cleared,
}

/// Broadcasts tree events to all subscribers
#[derive(Clone)]
pub struct TreeEvents {
    sender: broadcast::Sender<TreeEvent>,
}

impl TreeEvents {
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self { sender }
    }

    /// Returns the number of receivers that got the event
    pub fn broadcast(&self, event: TreeEvent) -> usize {
        // send() fails only when nobody is listening
        self.sender.send(event).unwrap_or(0)
    }

    pub fn subscribe(&self) -> broadcast::Receiver<TreeEvent> {
        self.sender.subscribe()
    }

    pub fn subscriber_count(&self) -> usize {
        self.sender.receiver_count()
    }
}

impl Default for TreeEvents {
    fn default() -> Self {
        Self::new(64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_broadcast_reaches_subscriber() {
        let events = TreeEvents::new(8);
        let mut rx = events.subscribe();

        assert_eq!(events.broadcast(TreeEvent::Cleared), 1);
        assert_eq!(rx.recv().await.unwrap(), TreeEvent::Cleared);
    }

    #[test]
    fn test_no_subscribers() {
        let events = TreeEvents::new(8);
        assert_eq!(events.broadcast(TreeEvent::RootRemoved), 0);
        assert_eq!(events.subscriber_count(), 0);
    }
}
