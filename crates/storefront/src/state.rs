//! Application state shared across handlers.

use std::sync::Arc;

use rust_decimal::Decimal;
use threadline_cart::CartStore;
use threadline_core::{CurrencyCode, Price};

use crate::catalog::Catalog;
use crate::config::StorefrontConfig;

/// Application state shared across all handlers.
///
/// This struct is cheaply cloneable via `Arc` and provides access to the
/// process-wide cart store, the catalogue, and configuration. Handlers never
/// hold a private copy of the cart; they dispatch to the shared store.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: StorefrontConfig,
    cart: CartStore,
    catalog: Catalog,
}

impl AppState {
    /// Create a new application state with an empty cart.
    #[must_use]
    pub fn new(config: StorefrontConfig, catalog: Catalog) -> Self {
        Self::with_cart(config, catalog, CartStore::new())
    }

    /// Create a new application state around an existing cart store.
    #[must_use]
    pub fn with_cart(config: StorefrontConfig, catalog: Catalog, cart: CartStore) -> Self {
        Self {
            inner: Arc::new(AppStateInner {
                config,
                cart,
                catalog,
            }),
        }
    }

    /// Get a reference to the storefront configuration.
    #[must_use]
    pub fn config(&self) -> &StorefrontConfig {
        &self.inner.config
    }

    /// Get a reference to the cart store.
    #[must_use]
    pub fn cart(&self) -> &CartStore {
        &self.inner.cart
    }

    /// Get a reference to the product catalogue.
    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.inner.catalog
    }

    /// Display currency.
    #[must_use]
    pub fn currency(&self) -> CurrencyCode {
        self.inner.config.currency
    }

    /// Format an amount in the display currency.
    #[must_use]
    pub fn format_price(&self, amount: Decimal) -> String {
        Price::new(amount, self.currency()).display()
    }

    /// Start a background subscriber that logs cart badge changes.
    ///
    /// The task ends when the cart store is dropped.
    pub fn start_cart_watcher(&self) -> tokio::task::JoinHandle<()> {
        let mut rx = self.cart().subscribe();
        let currency = self.currency();

        tokio::spawn(async move {
            while rx.changed().await.is_ok() {
                let (count, subtotal, panel) = {
                    let snapshot = rx.borrow_and_update();
                    (snapshot.item_count(), snapshot.subtotal(), snapshot.panel())
                };
                tracing::info!(
                    item_count = count,
                    subtotal = %Price::new(subtotal, currency),
                    panel = %panel,
                    "cart updated"
                );
            }
            tracing::debug!("cart watcher stopped");
        })
    }
}
