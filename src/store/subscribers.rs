//! Subscriber registry.
//!
//! The registry stores state callbacks and invokes them, in registration
//! order, every time the store commits a change. Presentation code
//! registers once and keeps the returned `SubscriptionId` to unsubscribe.

use serde::{Deserialize, Serialize};

use crate::core::GameState;

/// Handle returned by `subscribe`, used to unsubscribe.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SubscriptionId(pub u32);

impl SubscriptionId {
    /// Create a new subscription ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for SubscriptionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Subscription({})", self.0)
    }
}

/// A state callback.
pub type Subscriber = Box<dyn FnMut(&GameState)>;

/// Ordered set of subscribers.
#[derive(Default)]
pub struct SubscriberRegistry {
    /// Subscribers in registration order.
    entries: Vec<(SubscriptionId, Subscriber)>,

    /// Next ID to allocate. IDs are never reused.
    next_id: u32,
}

impl SubscriberRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a subscriber, returns its ID.
    pub fn register(&mut self, subscriber: Subscriber) -> SubscriptionId {
        let id = SubscriptionId::new(self.next_id);
        self.next_id += 1;
        self.entries.push((id, subscriber));
        id
    }

    /// Unregister a subscriber.
    ///
    /// Returns true if the subscriber was found and removed.
    pub fn unregister(&mut self, id: SubscriptionId) -> bool {
        if let Some(idx) = self.entries.iter().position(|(sid, _)| *sid == id) {
            self.entries.remove(idx);
            true
        } else {
            false
        }
    }

    /// Is a subscription still registered?
    #[must_use]
    pub fn contains(&self, id: SubscriptionId) -> bool {
        self.entries.iter().any(|(sid, _)| *sid == id)
    }

    /// Deliver a snapshot to every subscriber, in registration order.
    pub fn publish(&mut self, state: &GameState) {
        for (_, subscriber) in &mut self.entries {
            subscriber(state);
        }
    }

    /// Number of registered subscribers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if no subscribers are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl std::fmt::Debug for SubscriberRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SubscriberRegistry")
            .field("ids", &self.entries.iter().map(|(id, _)| *id).collect::<Vec<_>>())
            .field("next_id", &self.next_id)
            .finish()
    }
}
