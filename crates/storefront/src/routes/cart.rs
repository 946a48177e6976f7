//! Cart route handlers.
//!
//! Each mutating handler turns the request into a single `CartAction`,
//! dispatches it to the shared store, and returns the resulting `CartView`.

use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use threadline_cart::{CartAction, CartLine, CartSnapshot};
use threadline_core::{LineId, ProductId};
use tracing::instrument;

use crate::error::{AppError, Result, add_breadcrumb};
use crate::state::AppState;

/// Cart item display data.
#[derive(Debug, Clone, Serialize)]
pub struct CartItemView {
    pub id: String,
    pub name: String,
    pub image_url: String,
    pub size: Option<String>,
    pub color: Option<String>,
    pub quantity: u32,
    pub price: String,
    /// Regular price, shown struck through when a sale price applies.
    pub compare_at_price: Option<String>,
    pub line_price: String,
}

/// Cart display data.
#[derive(Debug, Clone, Serialize)]
pub struct CartView {
    pub items: Vec<CartItemView>,
    pub subtotal: String,
    pub subtotal_amount: Decimal,
    pub item_count: u64,
    pub is_cart_panel_open: bool,
    pub is_checkout_panel_open: bool,
}

/// Cart count badge data.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct CountView {
    pub count: u64,
}

// =============================================================================
// Type Conversions
// =============================================================================

impl CartItemView {
    fn from_line(line: &CartLine, state: &AppState) -> Self {
        Self {
            id: line.id().to_string(),
            name: line.name().to_string(),
            image_url: line.image_url().to_string(),
            size: line.size().map(String::from),
            color: line.color().map(String::from),
            quantity: line.quantity(),
            price: state.format_price(line.effective_price()),
            compare_at_price: line
                .is_on_sale()
                .then(|| state.format_price(line.unit_price())),
            line_price: state.format_price(line.line_total()),
        }
    }
}

impl CartView {
    /// Build the view for a snapshot.
    #[must_use]
    pub fn from_snapshot(snapshot: &CartSnapshot, state: &AppState) -> Self {
        Self {
            items: snapshot
                .lines()
                .iter()
                .map(|line| CartItemView::from_line(line, state))
                .collect(),
            subtotal: state.format_price(snapshot.subtotal()),
            subtotal_amount: snapshot.subtotal(),
            item_count: snapshot.item_count(),
            is_cart_panel_open: snapshot.is_cart_panel_open(),
            is_checkout_panel_open: snapshot.is_checkout_panel_open(),
        }
    }
}

// =============================================================================
// Request Bodies
// =============================================================================

/// Add to cart request body.
#[derive(Debug, Deserialize)]
pub struct AddToCartForm {
    pub handle: ProductId,
    pub size: Option<String>,
    pub color: Option<String>,
    pub quantity: Option<u32>,
}

/// Update quantity request body.
#[derive(Debug, Deserialize)]
pub struct UpdateCartForm {
    pub quantity: i64,
}

fn body<T>(payload: std::result::Result<Json<T>, JsonRejection>) -> Result<T> {
    payload
        .map(|Json(value)| value)
        .map_err(|rejection| AppError::BadRequest(rejection.body_text()))
}

fn dispatch(state: &AppState, action: CartAction) -> Json<CartView> {
    let snapshot = state.cart().dispatch(action);
    Json(CartView::from_snapshot(&snapshot, state))
}

// =============================================================================
// Handlers
// =============================================================================

/// Current cart.
#[instrument(skip(state))]
pub async fn show(State(state): State<AppState>) -> Json<CartView> {
    Json(CartView::from_snapshot(&state.cart().snapshot(), &state))
}

/// Cart count badge.
#[instrument(skip(state))]
pub async fn count(State(state): State<AppState>) -> Json<CountView> {
    Json(CountView {
        count: state.cart().snapshot().item_count(),
    })
}

/// Add a product variant to the cart.
///
/// Adding a variant already in the cart increases its quantity.
#[instrument(skip(state, payload))]
pub async fn add(
    State(state): State<AppState>,
    payload: std::result::Result<Json<AddToCartForm>, JsonRejection>,
) -> Result<Json<CartView>> {
    let form = body(payload)?;
    let product = state
        .catalog()
        .get(&form.handle)
        .ok_or_else(|| AppError::NotFound(format!("product {}", form.handle)))?;

    let line = product.cart_line(
        form.size.as_deref(),
        form.color.as_deref(),
        form.quantity.unwrap_or(1),
    )?;

    add_breadcrumb(
        "cart",
        "Added to cart",
        Some(&[("line_id", line.id().as_str())]),
    );
    Ok(dispatch(&state, CartAction::AddLine { line }))
}

/// Set a line's quantity. Zero or negative removes the line.
///
/// Answers 404 when the line is not in the cart at the moment of dispatch.
#[instrument(skip(state, payload))]
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<LineId>,
    payload: std::result::Result<Json<UpdateCartForm>, JsonRejection>,
) -> Result<Json<CartView>> {
    let form = body(payload)?;
    let action = CartAction::SetQuantity {
        id: id.clone(),
        quantity: form.quantity,
    };

    let snapshot = state
        .cart()
        .dispatch_if(action, |snapshot| snapshot.line(&id).is_some())
        .ok_or_else(|| AppError::NotFound(format!("cart line {id}")))?;
    Ok(Json(CartView::from_snapshot(&snapshot, &state)))
}

/// Remove a line. Removing a line that is not in the cart is not an error.
#[instrument(skip(state))]
pub async fn remove(State(state): State<AppState>, Path(id): Path<LineId>) -> Json<CartView> {
    dispatch(&state, CartAction::RemoveLine { id })
}

/// Empty the cart.
#[instrument(skip(state))]
pub async fn clear(State(state): State<AppState>) -> Json<CartView> {
    dispatch(&state, CartAction::ClearCart)
}

/// Show or hide the cart panel.
#[instrument(skip(state))]
pub async fn toggle_panel(State(state): State<AppState>) -> Json<CartView> {
    dispatch(&state, CartAction::ToggleCartPanel)
}

/// Show checkout (hides the cart panel).
#[instrument(skip(state))]
pub async fn open_checkout(State(state): State<AppState>) -> Json<CartView> {
    dispatch(&state, CartAction::OpenCheckout)
}

/// Hide checkout.
#[instrument(skip(state))]
pub async fn close_checkout(State(state): State<AppState>) -> Json<CartView> {
    dispatch(&state, CartAction::CloseCheckout)
}
