//! Threadline Core - Shared types library.
//!
//! This crate provides common types used across all Threadline components:
//! - `cart` - The cart store (reducer, snapshot, subscriptions)
//! - `storefront` - JSON storefront service owning the process-wide cart
//! - `cli` - Command-line tools for replaying cart scripts
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no async runtime, no HTTP.
//! This keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for type-safe IDs, prices, and panel state

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
