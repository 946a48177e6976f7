//! Validated cart lines.
//!
//! A [`CartLine`] can only be obtained through [`CartLineBuilder::build`] or by
//! deserialising, and both paths run the same checks. Any `CartLine` in hand
//! therefore has a non-empty id and name, non-negative prices, and at least one
//! unit.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use threadline_core::LineId;

use crate::error::CartLineError;

/// One product variant in the cart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "CartLineData", into = "CartLineData")]
pub struct CartLine {
    id: LineId,
    name: String,
    image_url: String,
    unit_price: Decimal,
    sale_price_override: Option<Decimal>,
    quantity: u32,
    size: Option<String>,
    color: Option<String>,
}

impl CartLine {
    /// Start building a line with its required fields.
    pub fn builder(
        id: impl Into<LineId>,
        name: impl Into<String>,
        unit_price: Decimal,
    ) -> CartLineBuilder {
        CartLineBuilder {
            data: CartLineData {
                id: id.into(),
                name: name.into(),
                image_url: String::new(),
                unit_price,
                sale_price_override: None,
                quantity: 1,
                size: None,
                color: None,
            },
        }
    }

    #[must_use]
    pub const fn id(&self) -> &LineId {
        &self.id
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn image_url(&self) -> &str {
        &self.image_url
    }

    #[must_use]
    pub const fn unit_price(&self) -> Decimal {
        self.unit_price
    }

    #[must_use]
    pub const fn sale_price_override(&self) -> Option<Decimal> {
        self.sale_price_override
    }

    /// Number of units; always at least 1.
    #[must_use]
    pub const fn quantity(&self) -> u32 {
        self.quantity
    }

    #[must_use]
    pub fn size(&self) -> Option<&str> {
        self.size.as_deref()
    }

    #[must_use]
    pub fn color(&self) -> Option<&str> {
        self.color.as_deref()
    }

    /// Price charged per unit: the sale override if present, else the unit price.
    #[must_use]
    pub fn effective_price(&self) -> Decimal {
        self.sale_price_override.unwrap_or(self.unit_price)
    }

    /// Effective price multiplied by quantity, saturating at `Decimal::MAX`.
    #[must_use]
    pub fn line_total(&self) -> Decimal {
        self.effective_price().saturating_mul(Decimal::from(self.quantity))
    }

    /// Whether a sale override is in effect.
    #[must_use]
    pub const fn is_on_sale(&self) -> bool {
        self.sale_price_override.is_some()
    }

    /// Add units, saturating at `u32::MAX`.
    pub(crate) fn add_quantity(&mut self, extra: u32) {
        self.quantity = self.quantity.saturating_add(extra);
    }

    /// Replace the quantity. Callers remove the line instead of passing zero.
    pub(crate) fn set_quantity(&mut self, quantity: u32) {
        debug_assert!(quantity > 0);
        self.quantity = quantity;
    }
}

/// Builder for [`CartLine`].
#[derive(Debug, Clone)]
#[must_use]
pub struct CartLineBuilder {
    data: CartLineData,
}

impl CartLineBuilder {
    pub fn image_url(mut self, url: impl Into<String>) -> Self {
        self.data.image_url = url.into();
        self
    }

    pub fn sale_price(mut self, price: Decimal) -> Self {
        self.data.sale_price_override = Some(price);
        self
    }

    pub fn quantity(mut self, quantity: u32) -> Self {
        self.data.quantity = quantity;
        self
    }

    pub fn size(mut self, size: impl Into<String>) -> Self {
        self.data.size = Some(size.into());
        self
    }

    pub fn color(mut self, color: impl Into<String>) -> Self {
        self.data.color = Some(color.into());
        self
    }

    /// Validate and produce the line.
    ///
    /// # Errors
    ///
    /// Returns an error if the id or name is empty, a price is negative, or the
    /// quantity is zero.
    pub fn build(self) -> Result<CartLine, CartLineError> {
        CartLine::try_from(self.data)
    }
}

/// Unvalidated wire form of a [`CartLine`].
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CartLineData {
    id: LineId,
    name: String,
    #[serde(default)]
    image_url: String,
    unit_price: Decimal,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    sale_price_override: Option<Decimal>,
    #[serde(default = "default_quantity")]
    quantity: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    size: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    color: Option<String>,
}

const fn default_quantity() -> u32 {
    1
}

impl TryFrom<CartLineData> for CartLine {
    type Error = CartLineError;

    fn try_from(data: CartLineData) -> Result<Self, Self::Error> {
        if data.id.is_empty() {
            return Err(CartLineError::EmptyId);
        }
        if data.name.trim().is_empty() {
            return Err(CartLineError::EmptyName);
        }
        if data.unit_price < Decimal::ZERO {
            return Err(CartLineError::NegativeUnitPrice(data.unit_price));
        }
        if let Some(sale) = data.sale_price_override.filter(|p| *p < Decimal::ZERO) {
            return Err(CartLineError::NegativeSalePrice(sale));
        }
        if data.quantity == 0 {
            return Err(CartLineError::ZeroQuantity);
        }

        Ok(Self {
            id: data.id,
            name: data.name,
            image_url: data.image_url,
            unit_price: data.unit_price,
            sale_price_override: data.sale_price_override,
            quantity: data.quantity,
            size: data.size,
            color: data.color,
        })
    }
}

impl From<CartLine> for CartLineData {
    fn from(line: CartLine) -> Self {
        Self {
            id: line.id,
            name: line.name,
            image_url: line.image_url,
            unit_price: line.unit_price,
            sale_price_override: line.sale_price_override,
            quantity: line.quantity,
            size: line.size,
            color: line.color,
        }
    }
}
