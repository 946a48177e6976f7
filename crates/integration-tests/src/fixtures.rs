//! Cart fixtures and proptest generators.

use proptest::prelude::*;
use rust_decimal::Decimal;
use threadline_cart::{CartAction, CartLine};
use threadline_core::LineId;

/// Ids used by generated actions. Small on purpose so that adds merge and
/// removals hit existing lines.
pub const LINE_IDS: [&str; 4] = ["a", "b", "c", "d"];

/// A valid line priced in cents.
///
/// # Panics
///
/// Panics if `quantity` is zero.
#[must_use]
pub fn line(id: &str, unit_cents: i64, quantity: u32) -> CartLine {
    CartLine::builder(id, format!("Item {id}"), Decimal::new(unit_cents, 2))
        .quantity(quantity)
        .build()
        .expect("fixture line is valid")
}

/// A valid line with a sale price, both in cents.
///
/// # Panics
///
/// Panics if `quantity` is zero.
#[must_use]
pub fn sale_line(id: &str, unit_cents: i64, sale_cents: i64, quantity: u32) -> CartLine {
    CartLine::builder(id, format!("Item {id}"), Decimal::new(unit_cents, 2))
        .sale_price(Decimal::new(sale_cents, 2))
        .quantity(quantity)
        .build()
        .expect("fixture line is valid")
}

/// `ADD_LINE` for `line`.
#[must_use]
pub const fn add(line: CartLine) -> CartAction {
    CartAction::AddLine { line }
}

pub fn line_id() -> impl Strategy<Value = LineId> {
    prop::sample::select(LINE_IDS.to_vec()).prop_map(LineId::new)
}

/// Valid lines with prices up to 500.00 and an optional sale price.
pub fn cart_line() -> impl Strategy<Value = CartLine> {
    (
        line_id(),
        0..=50_000i64,
        prop::option::of(0..=50_000i64),
        1..=20u32,
    )
        .prop_map(|(id, unit, sale, quantity)| {
            let name = format!("Item {id}");
            let mut builder = CartLine::builder(id, name, Decimal::new(unit, 2)).quantity(quantity);
            if let Some(sale) = sale {
                builder = builder.sale_price(Decimal::new(sale, 2));
            }
            builder.build().expect("generated line is valid")
        })
}

/// Any action, weighted towards line changes.
pub fn cart_action() -> impl Strategy<Value = CartAction> {
    prop_oneof![
        4 => cart_line().prop_map(|line| CartAction::AddLine { line }),
        2 => line_id().prop_map(|id| CartAction::RemoveLine { id }),
        2 => (line_id(), -5..=30i64)
            .prop_map(|(id, quantity)| CartAction::SetQuantity { id, quantity }),
        1 => Just(CartAction::ToggleCartPanel),
        1 => Just(CartAction::OpenCheckout),
        1 => Just(CartAction::CloseCheckout),
        1 => Just(CartAction::ClearCart),
    ]
}

pub fn cart_actions(max_len: usize) -> impl Strategy<Value = Vec<CartAction>> {
    prop::collection::vec(cart_action(), 0..max_len)
}
