//! HTTP middleware stack for storefront.
//!
//! # Middleware Order (bottom to top in Router)
//!
//! 1. Sentry layers (hub per request, transactions)
//! 2. `TraceLayer` (request span)
//! 3. Request context (request ID and cart size on span, Sentry scope, response)

pub mod request_context;

pub use request_context::{REQUEST_ID_HEADER, request_context_middleware};
