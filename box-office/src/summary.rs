//! Read-only view of the order for the summary panel.

use crate::fare::{FareClass, price_label};
use crate::order::{OrderState, SubmitState};
use crate::types::Money;
use serde::Serialize;
use std::fmt;

/// Shown when no tickets are selected
pub const EMPTY_SELECTION_TEXT: &str = "Select tickets above";

/// One selected fare class
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct LineItem {
    /// Fare class
    pub fare: FareClass,
    /// Tickets selected
    pub quantity: u32,
    /// Quantity times unit price
    pub subtotal: Money,
    /// e.g. "2x Adult"
    pub label: String,
    /// e.g. "€50" or "Free"
    pub subtotal_label: String,
}

/// Summary panel contents
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct OrderSummary {
    /// Fare classes with at least one ticket
    pub lines: Vec<LineItem>,
    /// Order total
    pub total: Money,
    /// e.g. "€75"
    pub total_label: String,
    /// Submit control state
    pub submit_state: SubmitState,
    /// No tickets selected
    pub is_empty: bool,
}

impl From<&OrderState> for OrderSummary {
    fn from(state: &OrderState) -> Self {
        let lines: Vec<LineItem> = state
            .quantities()
            .iter()
            .filter(|(_, quantity)| *quantity > 0)
            .map(|(fare, quantity)| {
                let subtotal = state.subtotal(fare);
                LineItem {
                    fare,
                    quantity,
                    subtotal,
                    label: format!("{quantity}x {fare}"),
                    subtotal_label: price_label(subtotal),
                }
            })
            .collect();

        let total = state.total_price();
        Self {
            is_empty: lines.is_empty(),
            lines,
            total,
            total_label: total.to_string(),
            submit_state: state.submit_state(),
        }
    }
}

impl fmt::Display for OrderSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty {
            return writeln!(f, "{EMPTY_SELECTION_TEXT}");
        }
        for line in &self.lines {
            writeln!(f, "{:<12}{:>8}", line.label, line.subtotal_label)?;
        }
        writeln!(f, "{:<12}{:>8}", "Total", self.total_label)
    }
}
