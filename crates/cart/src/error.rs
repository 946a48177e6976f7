//! Cart error types.

use thiserror::Error;

/// Errors that can occur when constructing a [`CartLine`](crate::CartLine).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CartLineError {
    /// The line ID is empty.
    #[error("line id cannot be empty")]
    EmptyId,
    /// The display name is empty.
    #[error("line name cannot be empty")]
    EmptyName,
    /// The regular unit price is below zero.
    #[error("unit price cannot be negative (got {0})")]
    NegativeUnitPrice(rust_decimal::Decimal),
    /// The sale price override is below zero.
    #[error("sale price cannot be negative (got {0})")]
    NegativeSalePrice(rust_decimal::Decimal),
    /// A line must hold at least one unit.
    #[error("quantity must be at least 1")]
    ZeroQuantity,
}

/// Errors raised by the cart store itself.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CartError {
    /// A line failed validation.
    #[error("invalid cart line: {0}")]
    InvalidLine(#[from] CartLineError),

    /// The store was requested outside of a [`provide`](crate::provider::provide) scope.
    #[error("cart store accessed outside of its provider scope")]
    OutOfScope,
}
