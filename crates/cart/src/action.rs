//! The action set accepted by the cart reducer.

use serde::{Deserialize, Serialize};
use threadline_core::LineId;

use crate::line::CartLine;

/// A change to the cart.
///
/// Actions are internally tagged on the wire, e.g.
/// `{"type": "SET_QUANTITY", "id": "A", "quantity": 2}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CartAction {
    /// Add a line, merging into an existing line with the same id.
    AddLine { line: CartLine },
    /// Remove the line with this id, if any.
    RemoveLine { id: LineId },
    /// Set a line's quantity. Values at or below zero remove the line.
    SetQuantity { id: LineId, quantity: i64 },
    /// Flip the cart panel.
    ToggleCartPanel,
    /// Show checkout and hide the cart panel.
    OpenCheckout,
    /// Hide checkout.
    CloseCheckout,
    /// Remove every line.
    ClearCart,
}

/// Fieldless discriminant of a [`CartAction`], for logging.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CartActionKind {
    AddLine,
    RemoveLine,
    SetQuantity,
    ToggleCartPanel,
    OpenCheckout,
    CloseCheckout,
    ClearCart,
}

impl CartAction {
    #[must_use]
    pub const fn kind(&self) -> CartActionKind {
        match self {
            Self::AddLine { .. } => CartActionKind::AddLine,
            Self::RemoveLine { .. } => CartActionKind::RemoveLine,
            Self::SetQuantity { .. } => CartActionKind::SetQuantity,
            Self::ToggleCartPanel => CartActionKind::ToggleCartPanel,
            Self::OpenCheckout => CartActionKind::OpenCheckout,
            Self::CloseCheckout => CartActionKind::CloseCheckout,
            Self::ClearCart => CartActionKind::ClearCart,
        }
    }

    /// Whether the action can change `lines` (and therefore the totals).
    #[must_use]
    pub const fn touches_lines(&self) -> bool {
        matches!(
            self,
            Self::AddLine { .. }
                | Self::RemoveLine { .. }
                | Self::SetQuantity { .. }
                | Self::ClearCart
        )
    }
}

impl CartActionKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::AddLine => "ADD_LINE",
            Self::RemoveLine => "REMOVE_LINE",
            Self::SetQuantity => "SET_QUANTITY",
            Self::ToggleCartPanel => "TOGGLE_CART_PANEL",
            Self::OpenCheckout => "OPEN_CHECKOUT",
            Self::CloseCheckout => "CLOSE_CHECKOUT",
            Self::ClearCart => "CLEAR_CART",
        }
    }
}

impl std::fmt::Display for CartActionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_tagged_actions() {
        let action: CartAction =
            serde_json::from_str(r#"{"type":"SET_QUANTITY","id":"A","quantity":-4}"#).unwrap();
        assert_eq!(
            action,
            CartAction::SetQuantity {
                id: LineId::new("A"),
                quantity: -4
            }
        );

        let action: CartAction = serde_json::from_str(r#"{"type":"OPEN_CHECKOUT"}"#).unwrap();
        assert_eq!(action, CartAction::OpenCheckout);
    }

    #[test]
    fn test_add_line_rejects_invalid_payload() {
        let json =
            r#"{"type":"ADD_LINE","line":{"id":"A","name":"Tee","unitPrice":"5","quantity":0}}"#;
        assert!(serde_json::from_str::<CartAction>(json).is_err());
    }

    #[test]
    fn test_kind_matches_wire_tag() {
        let action = CartAction::RemoveLine {
            id: LineId::new("A"),
        };
        let value = serde_json::to_value(&action).unwrap();
        assert_eq!(value["type"], action.kind().as_str());
        assert!(action.touches_lines());
        assert!(!CartAction::ToggleCartPanel.touches_lines());
    }
}
