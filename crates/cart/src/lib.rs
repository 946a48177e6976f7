//! Threadline Cart - the storefront's shopping cart store.
//!
//! The cart is a small reducer: every change is a [`CartAction`] applied to the
//! current [`CartSnapshot`], and the item count and subtotal are recomputed
//! after every action so consumers never compute totals themselves.
//!
//! # Modules
//!
//! - [`line`] - Validated cart lines
//! - [`action`] - The action set accepted by the reducer
//! - [`snapshot`] - Snapshot state and the pure reducer
//! - [`store`] - Shared, observable store handle
//! - [`provider`] - Task-scoped access to a store
//! - [`error`] - Error types
//!
//! # Example
//!
//! ```rust
//! use rust_decimal::Decimal;
//! use threadline_cart::{CartAction, CartLine, CartStore};
//!
//! let store = CartStore::new();
//! let line = CartLine::builder("A", "Linen shirt", Decimal::from(100))
//!     .quantity(2)
//!     .build()
//!     .unwrap();
//!
//! let snapshot = store.dispatch(CartAction::AddLine { line });
//! assert_eq!(snapshot.item_count(), 2);
//! assert_eq!(snapshot.subtotal(), Decimal::from(200));
//! ```

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod action;
pub mod error;
pub mod line;
pub mod provider;
pub mod snapshot;
pub mod store;

pub use action::{CartAction, CartActionKind};
pub use error::{CartError, CartLineError};
pub use line::{CartLine, CartLineBuilder};
pub use snapshot::CartSnapshot;
pub use store::CartStore;
