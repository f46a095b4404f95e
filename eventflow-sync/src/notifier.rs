//! Change notification seam.
//!
//! Live update delivery is not wired in this implementation: no
//! listeners are attached to the primary store and subscriptions never
//! fire. The subscribe contract is kept so a deployment that does attach
//! primary-store listeners can deliver updated collections (deduplicated
//! against the last delivered snapshot) without changing callers.
//! Callers should branch on [`ChangeNotifier::supports_live_updates`]
//! instead of waiting on a callback.

use eventflow_types::{EventRecord, User};

/// Subscribe/unsubscribe surface for live collection updates.
#[derive(Debug, Default)]
pub struct ChangeNotifier {
    _private: (),
}

impl ChangeNotifier {
    /// Creates a notifier.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether subscriptions actually deliver updates.
    #[must_use]
    pub fn supports_live_updates(&self) -> bool {
        false
    }

    /// Registers a callback for user collection updates.
    ///
    /// No-op today: the callback is dropped and never invoked.
    pub fn subscribe_users<F>(&self, _callback: F) -> Subscription
    where
        F: Fn(Vec<User>) + Send + Sync + 'static,
    {
        Subscription { _private: () }
    }

    /// Registers a callback for event collection updates.
    ///
    /// No-op today: the callback is dropped and never invoked.
    pub fn subscribe_events<F>(&self, _callback: F) -> Subscription
    where
        F: Fn(Vec<EventRecord>) + Send + Sync + 'static,
    {
        Subscription { _private: () }
    }
}

/// Handle returned by a subscribe call. Dropping it (or calling
/// [`Subscription::unsubscribe`]) ends the subscription.
#[derive(Debug)]
pub struct Subscription {
    _private: (),
}

impl Subscription {
    /// Cancels the subscription.
    pub fn unsubscribe(self) {}
}
