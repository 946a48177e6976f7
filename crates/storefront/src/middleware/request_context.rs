//! Request context middleware for tracing and error correlation.
//!
//! Every request gets an ID, taken from the `x-request-id` header when an
//! upstream proxy set one and generated otherwise. The ID and the number of
//! cart lines at the start of the request are:
//! - Recorded on the request span
//! - Set as Sentry tags
//! - Echoed back in response headers

use axum::{
    extract::{Request, State},
    http::HeaderValue,
    middleware::Next,
    response::Response,
};
use tracing::Span;
use uuid::Uuid;

use crate::state::AppState;

/// The HTTP header name for request IDs.
pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Response header carrying the cart item count after the request.
pub const CART_COUNT_HEADER: &str = "x-cart-count";

/// Attach request ID and cart context to the span, Sentry scope, and response.
pub async fn request_context_middleware(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Response {
    let request_id = request
        .headers()
        .get(REQUEST_ID_HEADER)
        .and_then(|h| h.to_str().ok())
        .filter(|id| !id.is_empty())
        .map_or_else(|| Uuid::new_v4().to_string(), String::from);
    let cart_lines = state.cart().snapshot().lines().len();

    let span = Span::current();
    span.record("request_id", request_id.as_str());
    span.record("cart_lines", cart_lines);

    sentry::configure_scope(|scope| {
        scope.set_tag("request_id", &request_id);
        scope.set_tag("cart_lines", cart_lines);
    });

    let mut response = next.run(request).await;

    if let Ok(value) = HeaderValue::from_str(&request_id) {
        response.headers_mut().insert(REQUEST_ID_HEADER, value);
    }
    let count = state.cart().snapshot().item_count();
    response
        .headers_mut()
        .insert(CART_COUNT_HEADER, HeaderValue::from(count));

    response
}
