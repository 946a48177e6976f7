//! HTTP route handlers for storefront.
//!
//! # Route Structure
//!
//! ```text
//! GET    /health                    - Health check
//!
//! # Products
//! GET    /products                  - Product listing (?category=&on_sale=&sort=)
//! GET    /products/{handle}         - Product detail
//!
//! # Cart
//! GET    /cart                      - Current cart
//! DELETE /cart                      - Empty the cart
//! GET    /cart/count                - Cart count badge
//! POST   /cart/lines                - Add a product variant
//! PUT    /cart/lines/{id}           - Set a line's quantity
//! DELETE /cart/lines/{id}           - Remove a line
//! POST   /cart/panel/toggle         - Show/hide the cart panel
//!
//! # Checkout
//! POST   /checkout/open             - Show checkout (hides the cart panel)
//! POST   /checkout/close            - Hide checkout
//! ```

pub mod cart;
pub mod products;

use axum::{
    Router,
    routing::{get, post, put},
};

use crate::state::AppState;

/// Create the product routes router.
pub fn product_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(products::index))
        .route("/{handle}", get(products::show))
}

/// Create the cart routes router.
pub fn cart_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(cart::show).delete(cart::clear))
        .route("/count", get(cart::count))
        .route("/lines", post(cart::add))
        .route("/lines/{id}", put(cart::update).delete(cart::remove))
        .route("/panel/toggle", post(cart::toggle_panel))
}

/// Create the checkout routes router.
pub fn checkout_routes() -> Router<AppState> {
    Router::new()
        .route("/open", post(cart::open_checkout))
        .route("/close", post(cart::close_checkout))
}

/// Create all routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .nest("/products", product_routes())
        .nest("/cart", cart_routes())
        .nest("/checkout", checkout_routes())
}
