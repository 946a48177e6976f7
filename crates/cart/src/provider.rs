//! Task-scoped access to a [`CartStore`].
//!
//! Code that cannot take the store as a parameter runs inside [`provide`] (or
//! [`provide_sync`]) and reaches it with [`current`]. Asking for the store
//! outside such a scope is a wiring bug: [`current`] panics rather than handing
//! back a fresh empty cart.

use std::future::Future;

use crate::action::CartAction;
use crate::error::CartError;
use crate::snapshot::CartSnapshot;
use crate::store::CartStore;

tokio::task_local! {
    static CURRENT_STORE: CartStore;
}

/// Run `future` with `store` available through [`current`].
pub async fn provide<F: Future>(store: CartStore, future: F) -> F::Output {
    CURRENT_STORE.scope(store, future).await
}

/// Run `f` with `store` available through [`current`].
pub fn provide_sync<R>(store: CartStore, f: impl FnOnce() -> R) -> R {
    CURRENT_STORE.sync_scope(store, f)
}

/// The store for the current scope.
///
/// # Errors
///
/// Returns [`CartError::OutOfScope`] when called outside [`provide`].
pub fn try_current() -> Result<CartStore, CartError> {
    CURRENT_STORE
        .try_with(CartStore::clone)
        .map_err(|_| CartError::OutOfScope)
}

/// The store for the current scope.
///
/// # Panics
///
/// Panics when called outside [`provide`] or [`provide_sync`].
#[must_use]
pub fn current() -> CartStore {
    match try_current() {
        Ok(store) => store,
        Err(err) => panic!("{err}; wrap the caller in threadline_cart::provider::provide"),
    }
}

/// Dispatch to the store for the current scope.
///
/// # Panics
///
/// Panics when called outside [`provide`] or [`provide_sync`].
pub fn dispatch(action: CartAction) -> CartSnapshot {
    current().dispatch(action)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_try_current_outside_scope() {
        assert_eq!(try_current().unwrap_err(), CartError::OutOfScope);
    }

    #[test]
    #[should_panic(expected = "outside of its provider scope")]
    fn test_current_outside_scope_panics() {
        let _ = current();
    }

    #[test]
    fn test_sync_scope_shares_store() {
        let store = CartStore::new();
        provide_sync(store.clone(), || {
            dispatch(CartAction::ToggleCartPanel);
        });
        assert!(store.snapshot().is_cart_panel_open());
    }

    #[tokio::test]
    async fn test_async_scope_spans_awaits() {
        let store = CartStore::new();
        let snapshot = provide(store.clone(), async {
            tokio::task::yield_now().await;
            dispatch(CartAction::OpenCheckout)
        })
        .await;

        assert!(snapshot.is_checkout_panel_open());
        assert_eq!(store.snapshot(), snapshot);
    }

    #[tokio::test]
    async fn test_spawned_task_is_outside_scope() {
        let store = CartStore::new();
        let result = provide(store, async {
            tokio::spawn(async { try_current().is_err() }).await.unwrap()
        })
        .await;
        assert!(result);
    }
}
