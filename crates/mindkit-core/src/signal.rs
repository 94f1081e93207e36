//! Typed single-threaded publish/subscribe primitive.
//!
//! Each notification kind the overview observes (scroll, zoom, selection,
//! layout) is a separate `Signal<E>`: subscribers register a handler and
//! receive every subsequent emission until they unsubscribe. Handlers run
//! synchronously on the emitting call stack, so they should return quickly;
//! long work belongs behind a deferred task.

use std::cell::RefCell;
use std::rc::Rc;

use uuid::Uuid;

/// Subscription handle for unsubscribing from a signal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(Uuid);

impl SubscriptionId {
    fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl std::fmt::Display for SubscriptionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Sub({})", &self.0.to_string()[..8])
    }
}

type Handler<E> = Rc<dyn Fn(&E)>;

/// A single-threaded observable event source.
///
/// Subscribing and unsubscribing are safe while an emission is in flight:
/// the handler list is snapshotted before dispatch, and a handler removed
/// mid-emission is not invoked for the remainder of that emission.
pub struct Signal<E> {
    handlers: RefCell<Vec<(SubscriptionId, Handler<E>)>>,
}

impl<E> Signal<E> {
    /// Creates a signal with no subscribers.
    pub fn new() -> Self {
        Self {
            handlers: RefCell::new(Vec::new()),
        }
    }

    /// Registers a handler and returns its subscription id.
    pub fn subscribe<F>(&self, handler: F) -> SubscriptionId
    where
        F: Fn(&E) + 'static,
    {
        let id = SubscriptionId::new();
        self.handlers.borrow_mut().push((id, Rc::new(handler)));
        tracing::debug!("subscription {} added", id);
        id
    }

    /// Removes a subscription.
    ///
    /// Returns true if the subscription was found and removed. Removing an
    /// already-removed subscription returns false and is otherwise a no-op.
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let mut handlers = self.handlers.borrow_mut();
        let before = handlers.len();
        handlers.retain(|(existing, _)| *existing != id);
        let removed = handlers.len() != before;
        if removed {
            tracing::debug!("subscription {} removed", id);
        }
        removed
    }

    /// Emits an event to every live subscriber.
    pub fn emit(&self, event: &E) {
        let snapshot: Vec<(SubscriptionId, Handler<E>)> = self.handlers.borrow().clone();
        for (id, handler) in snapshot {
            // Skip handlers unsubscribed by an earlier handler in this
            // emission; delivery after detach would be a dangling callback.
            if self.is_subscribed(id) {
                handler(event);
            }
        }
    }

    /// True when the subscription is still registered.
    pub fn is_subscribed(&self, id: SubscriptionId) -> bool {
        self.handlers
            .borrow()
            .iter()
            .any(|(existing, _)| *existing == id)
    }

    /// The number of active subscriptions.
    pub fn subscriber_count(&self) -> usize {
        self.handlers.borrow().len()
    }
}

impl<E> Default for Signal<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> std::fmt::Debug for Signal<E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Signal")
            .field("subscribers", &self.subscriber_count())
            .finish()
    }
}
