//! End-to-end cart sessions across the store, its subscribers, and the
//! task-scoped provider.

#![allow(clippy::unwrap_used)]

use rust_decimal::Decimal;
use serde_json::json;
use threadline_cart::{CartAction, CartError, CartStore, provider};
use threadline_core::{LineId, ProductId};
use threadline_integration_tests::fixtures::{add, line, sale_line};
use threadline_storefront::catalog::Catalog;

#[test]
fn test_merge_then_price_scenario() {
    let store = CartStore::new();
    store.dispatch(add(line("A", 10_000, 1)));
    let snapshot = store.dispatch(add(line("A", 10_000, 2)));

    assert_eq!(snapshot.lines().len(), 1);
    assert_eq!(snapshot.item_count(), 3);
    assert_eq!(snapshot.subtotal(), Decimal::from(300));
}

#[test]
fn test_sale_then_zero_quantity_scenario() {
    let store = CartStore::new();
    let snapshot = store.dispatch(add(sale_line("B", 5_000, 4_000, 2)));
    assert_eq!(snapshot.item_count(), 2);
    assert_eq!(snapshot.subtotal(), Decimal::from(80));

    let snapshot = store.dispatch(CartAction::SetQuantity {
        id: LineId::new("B"),
        quantity: 0,
    });
    assert!(snapshot.is_empty());
    assert_eq!(snapshot.item_count(), 0);
    assert_eq!(snapshot.subtotal(), Decimal::ZERO);
}

#[test]
fn test_panel_scenario() {
    let store = CartStore::new();
    let snapshot = store.dispatch(CartAction::ToggleCartPanel);
    assert!(snapshot.is_cart_panel_open());

    let snapshot = store.dispatch(CartAction::OpenCheckout);
    assert!(!snapshot.is_cart_panel_open());
    assert!(snapshot.is_checkout_panel_open());

    let snapshot = store.dispatch(CartAction::CloseCheckout);
    assert!(!snapshot.is_cart_panel_open());
    assert!(!snapshot.is_checkout_panel_open());
}

#[tokio::test]
async fn test_shopper_session_from_catalog() {
    let catalog = Catalog::mock();
    let store = CartStore::new();
    let mut badge = store.subscribe();

    let dress = catalog.get(&ProductId::new("silk-wrap-dress")).unwrap();
    let tote = catalog.get(&ProductId::new("canvas-tote")).unwrap();

    let session = [
        add(dress.cart_line(Some("S"), Some("emerald"), 1).unwrap()),
        add(tote.cart_line(None, None, 2).unwrap()),
        add(dress.cart_line(Some("S"), Some("emerald"), 1).unwrap()),
        CartAction::ToggleCartPanel,
        CartAction::RemoveLine {
            id: LineId::new("canvas-tote"),
        },
        CartAction::OpenCheckout,
    ];
    let snapshot = store.dispatch_all(session);

    assert!(badge.has_changed().unwrap());
    assert_eq!(badge.borrow_and_update().item_count(), 2);

    assert_eq!(snapshot.lines().len(), 1);
    let dress_line = snapshot.lines().first().unwrap();
    assert_eq!(dress_line.id().as_str(), "silk-wrap-dress|S|emerald");
    assert_eq!(dress_line.quantity(), 2);
    assert_eq!(snapshot.subtotal(), Decimal::from(298));
    assert!(snapshot.is_checkout_panel_open());
    assert!(!snapshot.is_cart_panel_open());
}

#[tokio::test]
async fn test_every_subscriber_observes_the_same_snapshot() {
    let store = CartStore::new();
    let mut header = store.subscribe();
    let mut drawer = store.subscribe();
    assert_eq!(store.subscriber_count(), 2);

    let waiter = tokio::spawn(async move {
        header.changed().await.unwrap();
        header.borrow_and_update().clone()
    });

    let snapshot = store.dispatch(add(line("A", 2_500, 4)));
    let seen_by_header = waiter.await.unwrap();

    drawer.changed().await.unwrap();
    assert_eq!(seen_by_header, snapshot);
    assert_eq!(*drawer.borrow_and_update(), snapshot);
}

#[tokio::test]
async fn test_provider_scope_shares_one_store() {
    let store = CartStore::new();

    provider::provide(store.clone(), async {
        provider::dispatch(add(line("A", 1_000, 1)));
        tokio::task::yield_now().await;
        provider::dispatch(CartAction::ToggleCartPanel);

        let nested = provider::current();
        nested.dispatch(add(line("A", 1_000, 1)));
    })
    .await;

    let snapshot = store.snapshot();
    assert_eq!(snapshot.item_count(), 2);
    assert!(snapshot.is_cart_panel_open());
}

#[test]
fn test_provider_outside_scope_is_an_error() {
    assert_eq!(provider::try_current().unwrap_err(), CartError::OutOfScope);
}

#[test]
fn test_snapshot_wire_shape() {
    let store = CartStore::new();
    let snapshot = store.dispatch_all([
        add(sale_line("B", 5_000, 4_000, 2)),
        CartAction::ToggleCartPanel,
    ]);

    let value = serde_json::to_value(&snapshot).unwrap();
    assert_eq!(value["itemCount"], json!(2));
    assert_eq!(value["isCartPanelOpen"], json!(true));
    assert_eq!(value["isCheckoutPanelOpen"], json!(false));
    assert_eq!(value["lines"][0]["id"], json!("B"));
    assert_eq!(value["lines"][0]["salePriceOverride"], json!("40.00"));
}
