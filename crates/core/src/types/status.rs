//! Status enums for storefront UI state.

use serde::{Deserialize, Serialize};

/// Visibility of the cart and checkout panels.
///
/// The two panels are mutually exclusive, so they are modelled as one
/// three-valued state rather than two independent flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum PanelState {
    #[default]
    Closed,
    CartOpen,
    CheckoutOpen,
}

impl PanelState {
    /// Whether the cart panel is visible.
    #[must_use]
    pub const fn is_cart_open(self) -> bool {
        matches!(self, Self::CartOpen)
    }

    /// Whether the checkout panel is visible.
    #[must_use]
    pub const fn is_checkout_open(self) -> bool {
        matches!(self, Self::CheckoutOpen)
    }

    /// Flip the cart panel. Opening it hides checkout.
    #[must_use]
    pub const fn toggle_cart(self) -> Self {
        match self {
            Self::CartOpen => Self::Closed,
            Self::Closed | Self::CheckoutOpen => Self::CartOpen,
        }
    }

    /// Show checkout, hiding the cart panel.
    #[must_use]
    pub const fn open_checkout(self) -> Self {
        Self::CheckoutOpen
    }

    /// Hide checkout. The cart panel is left as it was.
    #[must_use]
    pub const fn close_checkout(self) -> Self {
        match self {
            Self::CheckoutOpen => Self::Closed,
            other => other,
        }
    }
}

impl std::fmt::Display for PanelState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Closed => write!(f, "closed"),
            Self::CartOpen => write!(f, "cart_open"),
            Self::CheckoutOpen => write!(f, "checkout_open"),
        }
    }
}
