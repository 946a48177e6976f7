//! Shared, observable cart store.
//!
//! The snapshot lives inside a `tokio::sync::watch` channel. Dispatch applies
//! the reducer while holding the channel's write lock, so concurrent writers
//! are serialised and every subscriber sees a consistent snapshot. Readers
//! never compute totals; they read them from the snapshot.

use std::sync::Arc;

use tokio::sync::watch;
use tracing::{debug, instrument};

use crate::action::CartAction;
use crate::snapshot::CartSnapshot;

/// Handle to the cart store.
///
/// Cheaply cloneable; all clones share one snapshot.
#[derive(Clone)]
pub struct CartStore {
    inner: Arc<CartStoreInner>,
}

struct CartStoreInner {
    state: watch::Sender<CartSnapshot>,
}

impl CartStore {
    /// Create a store holding an empty cart.
    #[must_use]
    pub fn new() -> Self {
        Self::with_snapshot(CartSnapshot::empty())
    }

    /// Create a store seeded with an existing snapshot.
    #[must_use]
    pub fn with_snapshot(snapshot: CartSnapshot) -> Self {
        let (state, _rx) = watch::channel(snapshot);
        Self {
            inner: Arc::new(CartStoreInner { state }),
        }
    }

    /// Apply an action and return the resulting snapshot.
    ///
    /// Subscribers are notified only when the snapshot changed.
    #[instrument(skip(self, action), fields(action = %action.kind()))]
    pub fn dispatch(&self, action: CartAction) -> CartSnapshot {
        let mut next = CartSnapshot::empty();
        let changed = self.inner.state.send_if_modified(|snapshot| {
            let changed = snapshot.apply(action);
            next = snapshot.clone();
            changed
        });

        debug!(
            changed,
            item_count = next.item_count(),
            subtotal = %next.subtotal(),
            panel = %next.panel(),
            "cart action applied"
        );
        next
    }

    /// Apply an action only if `precondition` holds for the current snapshot.
    ///
    /// The check runs under the same write lock as the reducer, so no other
    /// dispatch can land between them. Returns `None`, without applying the
    /// action or notifying subscribers, when the precondition fails.
    #[instrument(skip(self, action, precondition), fields(action = %action.kind()))]
    pub fn dispatch_if(
        &self,
        action: CartAction,
        precondition: impl FnOnce(&CartSnapshot) -> bool,
    ) -> Option<CartSnapshot> {
        let mut next = None;
        let changed = self.inner.state.send_if_modified(|snapshot| {
            if !precondition(snapshot) {
                return false;
            }
            let changed = snapshot.apply(action);
            next = Some(snapshot.clone());
            changed
        });

        debug!(applied = next.is_some(), changed, "conditional cart action");
        next
    }

    /// Apply several actions in order and return the final snapshot.
    pub fn dispatch_all(&self, actions: impl IntoIterator<Item = CartAction>) -> CartSnapshot {
        actions
            .into_iter()
            .fold(self.snapshot(), |_, action| self.dispatch(action))
    }

    /// The current snapshot.
    #[must_use]
    pub fn snapshot(&self) -> CartSnapshot {
        self.inner.state.borrow().clone()
    }

    /// Subscribe to snapshot changes.
    ///
    /// The receiver starts with the current snapshot marked as seen.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<CartSnapshot> {
        self.inner.state.subscribe()
    }

    /// Number of live subscribers.
    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        self.inner.state.receiver_count()
    }
}

impl Default for CartStore {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for CartStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let snapshot = self.inner.state.borrow();
        f.debug_struct("CartStore")
            .field("lines", &snapshot.lines().len())
            .field("item_count", &snapshot.item_count())
            .field("subscribers", &self.inner.state.receiver_count())
            .finish()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use rust_decimal::Decimal;
    use threadline_core::LineId;

    use super::*;
    use crate::line::CartLine;

    fn add(id: &str, price: i64, quantity: u32) -> CartAction {
        CartAction::AddLine {
            line: CartLine::builder(id, "Item", Decimal::from(price))
                .quantity(quantity)
                .build()
                .unwrap(),
        }
    }

    #[test]
    fn test_dispatch_returns_new_snapshot() {
        let store = CartStore::new();
        let snapshot = store.dispatch(add("A", 100, 1));
        assert_eq!(snapshot.item_count(), 1);
        assert_eq!(store.snapshot(), snapshot);
    }

    #[test]
    fn test_clones_share_state() {
        let store = CartStore::new();
        let other = store.clone();
        other.dispatch(add("A", 5, 2));
        assert_eq!(store.snapshot().subtotal(), Decimal::from(10));
    }

    #[test]
    fn test_dispatch_all() {
        let store = CartStore::new();
        let snapshot = store.dispatch_all([
            add("A", 100, 1),
            add("A", 100, 2),
            CartAction::ToggleCartPanel,
        ]);
        assert_eq!(snapshot.item_count(), 3);
        assert_eq!(snapshot.subtotal(), Decimal::from(300));
        assert!(snapshot.is_cart_panel_open());
    }

    #[test]
    fn test_dispatch_all_empty_returns_current() {
        let store = CartStore::new();
        store.dispatch(add("A", 1, 1));
        let snapshot = store.dispatch_all(Vec::new());
        assert_eq!(snapshot.item_count(), 1);
    }

    #[tokio::test]
    async fn test_subscriber_sees_changes() {
        let store = CartStore::new();
        let mut rx = store.subscribe();
        assert_eq!(store.subscriber_count(), 1);

        store.dispatch(add("A", 20, 3));
        rx.changed().await.unwrap();
        let seen = rx.borrow_and_update().clone();
        assert_eq!(seen.item_count(), 3);
        assert_eq!(seen.subtotal(), Decimal::from(60));
    }

    #[tokio::test]
    async fn test_noop_does_not_notify() {
        let store = CartStore::new();
        let rx = store.subscribe();

        store.dispatch(CartAction::RemoveLine {
            id: LineId::new("missing"),
        });
        store.dispatch(CartAction::CloseCheckout);
        assert!(!rx.has_changed().unwrap());
    }

    #[tokio::test]
    async fn test_huge_prices_keep_store_consistent() {
        let store = CartStore::new();
        let mut rx = store.subscribe();
        let gown = CartLine::builder("A", "Gown", Decimal::MAX).build().unwrap();

        store.dispatch(CartAction::AddLine { line: gown.clone() });
        let snapshot = store.dispatch(CartAction::AddLine { line: gown });

        assert_eq!(snapshot.item_count(), 2);
        assert_eq!(snapshot.subtotal(), Decimal::MAX);
        assert_eq!(store.snapshot(), snapshot);
        assert!(rx.has_changed().unwrap());
        assert_eq!(*rx.borrow_and_update(), snapshot);
    }

    #[tokio::test]
    async fn test_dispatch_if_rejected_leaves_store_untouched() {
        let store = CartStore::new();
        let rx = store.subscribe();
        let id = LineId::new("A");

        let outcome = store.dispatch_if(
            CartAction::SetQuantity {
                id: id.clone(),
                quantity: 3,
            },
            |snapshot| snapshot.line(&id).is_some(),
        );

        assert!(outcome.is_none());
        assert!(store.snapshot().is_empty());
        assert!(!rx.has_changed().unwrap());
    }

    #[test]
    fn test_dispatch_if_applies_when_precondition_holds() {
        let store = CartStore::new();
        store.dispatch(add("A", 10, 1));
        let id = LineId::new("A");

        let snapshot = store
            .dispatch_if(
                CartAction::SetQuantity {
                    id: id.clone(),
                    quantity: 5,
                },
                |snapshot| snapshot.line(&id).is_some(),
            )
            .unwrap();
        assert_eq!(snapshot.item_count(), 5);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_dispatch_if_races_with_removal() {
        let store = CartStore::new();
        let id = LineId::new("A");

        let remover = {
            let store = store.clone();
            let id = id.clone();
            tokio::spawn(async move {
                for _ in 0..200 {
                    store.dispatch(add("A", 1, 1));
                    store.dispatch(CartAction::RemoveLine { id: id.clone() });
                }
            })
        };
        let updater = {
            let store = store.clone();
            tokio::spawn(async move {
                for _ in 0..200 {
                    let action = CartAction::SetQuantity {
                        id: id.clone(),
                        quantity: 7,
                    };
                    if let Some(snapshot) =
                        store.dispatch_if(action, |snapshot| snapshot.line(&id).is_some())
                    {
                        assert_eq!(snapshot.line(&id).unwrap().quantity(), 7);
                    }
                }
            })
        };

        remover.await.unwrap();
        updater.await.unwrap();
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_dispatch_is_serialised() {
        let store = CartStore::new();
        let mut handles = Vec::new();
        for _ in 0..8 {
            let store = store.clone();
            handles.push(tokio::spawn(async move {
                for _ in 0..50 {
                    store.dispatch(add("A", 2, 1));
                }
            }));
        }
        for handle in handles {
            handle.await.unwrap();
        }

        let snapshot = store.snapshot();
        assert_eq!(snapshot.lines().len(), 1);
        assert_eq!(snapshot.item_count(), 400);
        assert_eq!(snapshot.subtotal(), Decimal::from(800));
    }
}
