//! Game store: the single mutable game state and its subscribers.
//!
//! Presentation code subscribes to the store, issues commands, and receives
//! the full new state synchronously after every commit.

pub mod game_store;
pub mod subscribers;

pub use game_store::GameStore;
pub use subscribers::{Subscriber, SubscriberRegistry, SubscriptionId};
