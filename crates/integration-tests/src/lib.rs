//! Integration tests for Threadline.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p threadline-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `cart_properties` - Property tests over random action sequences
//! - `cart_scenarios` - Reducer, store and provider behaviour end to end
//! - `storefront_api` - HTTP tests against a storefront bound to a local port
//!
//! This library holds the fixtures and generators those tests share.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod fixtures;
pub mod server;

pub use server::TestServer;
