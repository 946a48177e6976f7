//! Core types for Threadline.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod id;
pub mod price;
pub mod status;

pub use id::*;
pub use price::{CurrencyCode, CurrencyCodeError, Price};
pub use status::PanelState;
