//! Cart snapshot and the pure reducer.
//!
//! [`CartSnapshot::reduce`] is the whole state machine: it takes the current
//! snapshot and an action and returns the next snapshot. It performs no I/O and
//! cannot fail. `item_count` and `subtotal` are recomputed from `lines` in full
//! after every action that can touch them.

use rust_decimal::Decimal;
use serde::{Serialize, Serializer};
use threadline_core::{LineId, PanelState};

use crate::action::CartAction;
use crate::line::CartLine;

/// Complete state of the cart at a point in time.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CartSnapshot {
    lines: Vec<CartLine>,
    panel: PanelState,
    item_count: u64,
    subtotal: Decimal,
}

impl CartSnapshot {
    /// An empty cart with both panels closed.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Lines in insertion order.
    #[must_use]
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// Look up a line by id.
    #[must_use]
    pub fn line(&self, id: &LineId) -> Option<&CartLine> {
        self.lines.iter().find(|line| line.id() == id)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Sum of quantities across all lines.
    #[must_use]
    pub const fn item_count(&self) -> u64 {
        self.item_count
    }

    /// Sum of effective price times quantity across all lines, saturating at
    /// `Decimal::MAX`.
    #[must_use]
    pub const fn subtotal(&self) -> Decimal {
        self.subtotal
    }

    #[must_use]
    pub const fn panel(&self) -> PanelState {
        self.panel
    }

    #[must_use]
    pub const fn is_cart_panel_open(&self) -> bool {
        self.panel.is_cart_open()
    }

    #[must_use]
    pub const fn is_checkout_panel_open(&self) -> bool {
        self.panel.is_checkout_open()
    }

    /// Apply an action and return the next snapshot.
    #[must_use]
    pub fn reduce(mut self, action: CartAction) -> Self {
        self.apply(action);
        self
    }

    /// Apply an action in place.
    ///
    /// Returns `true` if the snapshot changed. No-op actions (removing an
    /// unknown id, closing a closed checkout) return `false`.
    pub fn apply(&mut self, action: CartAction) -> bool {
        let touches_lines = action.touches_lines();

        let changed = match action {
            CartAction::AddLine { line } => {
                self.add_line(line);
                true
            }
            CartAction::RemoveLine { id } => self.remove_line(&id),
            CartAction::SetQuantity { id, quantity } => self.set_quantity(&id, quantity),
            CartAction::ToggleCartPanel => self.set_panel(self.panel.toggle_cart()),
            CartAction::OpenCheckout => self.set_panel(self.panel.open_checkout()),
            CartAction::CloseCheckout => self.set_panel(self.panel.close_checkout()),
            CartAction::ClearCart => {
                let had_lines = !self.lines.is_empty();
                self.lines.clear();
                had_lines
            }
        };

        if touches_lines {
            self.recompute_totals();
        }
        changed
    }

    fn add_line(&mut self, line: CartLine) {
        match self.lines.iter_mut().find(|existing| existing.id() == line.id()) {
            Some(existing) => existing.add_quantity(line.quantity()),
            None => self.lines.push(line),
        }
    }

    fn remove_line(&mut self, id: &LineId) -> bool {
        let before = self.lines.len();
        self.lines.retain(|line| line.id() != id);
        self.lines.len() != before
    }

    fn set_quantity(&mut self, id: &LineId, quantity: i64) -> bool {
        let Some(index) = self.lines.iter().position(|line| line.id() == id) else {
            return false;
        };

        let clamped = quantity.max(0);
        if clamped == 0 {
            self.lines.remove(index);
            return true;
        }

        let quantity = u32::try_from(clamped).unwrap_or(u32::MAX);
        match self.lines.get_mut(index) {
            Some(line) if line.quantity() != quantity => {
                line.set_quantity(quantity);
                true
            }
            _ => false,
        }
    }

    fn set_panel(&mut self, next: PanelState) -> bool {
        let changed = self.panel != next;
        self.panel = next;
        changed
    }

    fn recompute_totals(&mut self) {
        self.item_count = self
            .lines
            .iter()
            .map(|line| u64::from(line.quantity()))
            .sum();
        self.subtotal = self
            .lines
            .iter()
            .map(CartLine::line_total)
            .fold(Decimal::ZERO, Decimal::saturating_add);
    }
}

impl FromIterator<CartAction> for CartSnapshot {
    fn from_iter<I: IntoIterator<Item = CartAction>>(actions: I) -> Self {
        actions.into_iter().fold(Self::empty(), Self::reduce)
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SnapshotRef<'a> {
    lines: &'a [CartLine],
    is_cart_panel_open: bool,
    is_checkout_panel_open: bool,
    item_count: u64,
    subtotal: Decimal,
}

impl Serialize for CartSnapshot {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        SnapshotRef {
            lines: &self.lines,
            is_cart_panel_open: self.is_cart_panel_open(),
            is_checkout_panel_open: self.is_checkout_panel_open(),
            item_count: self.item_count,
            subtotal: self.subtotal,
        }
        .serialize(serializer)
    }
}
