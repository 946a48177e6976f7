//! Replay a script of cart actions.
//!
//! A script is a YAML or JSON list of actions in their wire form:
//!
//! ```yaml
//! - type: ADD_LINE
//!   line: { id: canvas-tote, name: Canvas Tote, unitPrice: "45.00", quantity: 2 }
//! - type: TOGGLE_CART_PANEL
//! - type: SET_QUANTITY
//!   id: canvas-tote
//!   quantity: 1
//! ```
//!
//! Files ending in `.json` are read as JSON; anything else as YAML.

use std::path::Path;

use thiserror::Error;
use threadline_cart::{CartAction, CartSnapshot, CartStore, provider};
use threadline_core::{CurrencyCode, Price};

/// Errors that can occur while replaying a script.
#[derive(Debug, Error)]
pub enum ReplayError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: String,
        source: std::io::Error,
    },

    #[error("invalid JSON script: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid YAML script: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// Parse a script. `json` selects the JSON reader, otherwise YAML.
///
/// # Errors
///
/// Returns an error if the script is not a list of valid actions. Lines are
/// validated while parsing, so a negative price or zero quantity is rejected
/// here rather than reaching the store.
pub fn parse(source: &str, json: bool) -> Result<Vec<CartAction>, ReplayError> {
    if json {
        Ok(serde_json::from_str(source)?)
    } else {
        Ok(serde_yaml::from_str(source)?)
    }
}

/// Load and parse the script at `path`.
///
/// # Errors
///
/// Returns an error if the file cannot be read or parsed.
pub fn load(path: &Path) -> Result<Vec<CartAction>, ReplayError> {
    let source = std::fs::read_to_string(path).map_err(|source| ReplayError::Read {
        path: path.display().to_string(),
        source,
    })?;
    let json = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
    parse(&source, json)
}

/// Dispatch `actions` in order through the store of the current scope.
///
/// # Panics
///
/// Panics when called outside [`provider::provide`].
pub fn apply(actions: Vec<CartAction>, currency: CurrencyCode) -> CartSnapshot {
    let mut snapshot = provider::current().snapshot();
    for (step, action) in actions.into_iter().enumerate() {
        let kind = action.kind();
        snapshot = provider::dispatch(action);
        tracing::info!(
            step = step + 1,
            action = %kind,
            lines = snapshot.lines().len(),
            item_count = snapshot.item_count(),
            subtotal = %Price::new(snapshot.subtotal(), currency),
            panel = %snapshot.panel(),
            "applied"
        );
    }
    snapshot
}

/// Replay the script at `path` through a fresh store and log the final snapshot.
///
/// # Errors
///
/// Returns an error if the script cannot be loaded or the snapshot cannot be
/// serialized.
pub async fn run(path: &Path, currency: CurrencyCode) -> Result<CartSnapshot, ReplayError> {
    let actions = load(path)?;
    tracing::info!("Replaying {} actions from {}", actions.len(), path.display());

    let store = CartStore::new();
    let snapshot = provider::provide(store, async move { apply(actions, currency) }).await;

    tracing::info!("Final snapshot:\n{}", serde_json::to_string_pretty(&snapshot)?);
    Ok(snapshot)
}
