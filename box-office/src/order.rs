//! Order form state: ticket quantities, contact details and checkout status.
//!
//! `OrderState` owns every rule about what the form may hold. Quantities are
//! clamped to `[FareClass::MIN_QUANTITY, FareClass::MAX_QUANTITY]`, the total
//! is always derived from the quantities, and an order can only be submitted
//! when it costs something and all contact fields are filled.

use crate::checkout::CheckoutReceipt;
use crate::contact::{ContactDetails, ContactField};
use crate::fare::FareClass;
use crate::types::{Money, OrderId};
use chrono::{DateTime, Utc};
use festival_core::environment::Clock;
use serde::{Deserialize, Serialize};
use thiserror::Error;

// ============================================================================
// Quantities
// ============================================================================

/// Tickets requested per fare class
///
/// Deserializing rejects counts above [`FareClass::MAX_QUANTITY`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawQuantities")]
pub struct TicketQuantities {
    adult: u32,
    child: u32,
}

impl TicketQuantities {
    /// Builds quantities, clamping each to the allowed range
    #[must_use]
    pub fn new(adult: u32, child: u32) -> Self {
        Self {
            adult: clamp_quantity(i64::from(adult)),
            child: clamp_quantity(i64::from(child)),
        }
    }

    /// Tickets of one class
    #[must_use]
    pub const fn get(&self, fare: FareClass) -> u32 {
        match fare {
            FareClass::Adult => self.adult,
            FareClass::Child => self.child,
        }
    }

    const fn slot_mut(&mut self, fare: FareClass) -> &mut u32 {
        match fare {
            FareClass::Adult => &mut self.adult,
            FareClass::Child => &mut self.child,
        }
    }

    /// `(fare, quantity)` pairs in display order
    pub fn iter(&self) -> impl Iterator<Item = (FareClass, u32)> + '_ {
        FareClass::ALL.into_iter().map(|fare| (fare, self.get(fare)))
    }

    /// No tickets of any class
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.adult == 0 && self.child == 0
    }

    /// Tickets across all classes
    #[must_use]
    pub const fn total_tickets(&self) -> u32 {
        self.adult.saturating_add(self.child)
    }
}

/// A stored quantity outside the allowed range
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{fare} quantity {quantity} exceeds {max}", max = FareClass::MAX_QUANTITY)]
pub struct QuantityOutOfRange {
    /// Offending fare class
    pub fare: FareClass,
    /// Value that was read
    pub quantity: u32,
}

#[derive(Deserialize)]
struct RawQuantities {
    adult: u32,
    child: u32,
}

impl TryFrom<RawQuantities> for TicketQuantities {
    type Error = QuantityOutOfRange;

    fn try_from(raw: RawQuantities) -> Result<Self, Self::Error> {
        for (fare, quantity) in [(FareClass::Adult, raw.adult), (FareClass::Child, raw.child)] {
            if quantity > FareClass::MAX_QUANTITY {
                return Err(QuantityOutOfRange { fare, quantity });
            }
        }
        Ok(Self {
            adult: raw.adult,
            child: raw.child,
        })
    }
}

fn clamp_quantity(value: i64) -> u32 {
    let clamped = value.clamp(
        i64::from(FareClass::MIN_QUANTITY),
        i64::from(FareClass::MAX_QUANTITY),
    );
    u32::try_from(clamped).unwrap_or(FareClass::MIN_QUANTITY)
}

// ============================================================================
// Submit gating
// ============================================================================

/// Whether the submit control accepts a press
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SubmitState {
    /// Nothing to pay or contact incomplete
    Disabled,
    /// Paid tickets selected and contact complete
    Enabled,
}

/// Reason a submit request was refused
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum SubmitBlocked {
    /// Total price is zero
    #[error("order total is zero")]
    NothingToPay,

    /// Some contact fields are empty
    #[error("missing contact details: {}", field_list(.fields))]
    MissingContact {
        /// Empty fields, in form order
        fields: Vec<ContactField>,
    },

    /// A previous submission is still waiting on checkout
    #[error("checkout already in progress for order {order_id}")]
    CheckoutInProgress {
        /// Order being handed off
        order_id: OrderId,
    },
}

fn field_list(fields: &[ContactField]) -> String {
    fields
        .iter()
        .map(|field| field.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

// ============================================================================
// Checkout status and intent
// ============================================================================

/// Progress of the hand-off to the checkout collaborator
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum CheckoutStatus {
    /// Nothing handed off yet
    #[default]
    Idle,
    /// Waiting for the collaborator to answer
    Submitting {
        /// Order handed off
        order_id: OrderId,
    },
    /// Collaborator accepted the order
    Accepted {
        /// Confirmation from the collaborator
        receipt: CheckoutReceipt,
    },
    /// Collaborator refused, failed or did not answer in time
    Failed {
        /// Order that failed
        order_id: OrderId,
        /// Human-readable cause
        reason: String,
    },
}

impl CheckoutStatus {
    /// True while waiting on `order_id` specifically
    #[must_use]
    pub fn is_submitting(&self, order_id: OrderId) -> bool {
        matches!(self, Self::Submitting { order_id: pending } if *pending == order_id)
    }

    /// True while waiting on any order
    #[must_use]
    pub const fn is_pending(&self) -> bool {
        matches!(self, Self::Submitting { .. })
    }
}

/// Snapshot of the form handed to checkout
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderIntent {
    /// Identifier assigned at submit time
    pub order_id: OrderId,
    /// Tickets per fare class
    pub quantities: TicketQuantities,
    /// Contact details as typed
    pub contact: ContactDetails,
    /// Amount to charge
    pub total_price: Money,
    /// When the order was submitted
    pub created_at: DateTime<Utc>,
}

// ============================================================================
// Order state
// ============================================================================

/// Everything the order form holds
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderState {
    quantities: TicketQuantities,
    contact: ContactDetails,
    checkout: CheckoutStatus,
}

impl OrderState {
    /// Empty form: no tickets, blank contact, nothing submitted
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Tickets of one class
    #[must_use]
    pub const fn quantity(&self, fare: FareClass) -> u32 {
        self.quantities.get(fare)
    }

    /// All ticket quantities
    #[must_use]
    pub const fn quantities(&self) -> &TicketQuantities {
        &self.quantities
    }

    /// Contact details as typed
    #[must_use]
    pub const fn contact(&self) -> &ContactDetails {
        &self.contact
    }

    /// Current checkout progress
    #[must_use]
    pub const fn checkout(&self) -> &CheckoutStatus {
        &self.checkout
    }

    /// Adds `delta` tickets of `fare`, clamping the result silently.
    ///
    /// Returns whether the quantity changed.
    pub fn change_quantity(&mut self, fare: FareClass, delta: i32) -> bool {
        let slot = self.quantities.slot_mut(fare);
        let next = clamp_quantity(i64::from(*slot) + i64::from(delta));
        if next == *slot {
            return false;
        }
        *slot = next;
        true
    }

    /// Stores `value` verbatim in `field`. Returns whether it changed.
    pub fn update_contact_field(&mut self, field: ContactField, value: impl Into<String>) -> bool {
        self.contact.set(field, value)
    }

    /// Price of all tickets of one class
    #[must_use]
    pub const fn subtotal(&self, fare: FareClass) -> Money {
        fare.unit_price().saturating_multiply(self.quantity(fare))
    }

    /// Sum of every subtotal
    #[must_use]
    pub fn total_price(&self) -> Money {
        FareClass::ALL.into_iter().map(|fare| self.subtotal(fare)).sum()
    }

    /// Paid tickets selected and all contact fields filled
    #[must_use]
    pub fn is_submittable(&self) -> bool {
        !self.total_price().is_zero() && self.contact.is_complete()
    }

    /// State of the submit control
    #[must_use]
    pub fn submit_state(&self) -> SubmitState {
        if self.is_submittable() {
            SubmitState::Enabled
        } else {
            SubmitState::Disabled
        }
    }

    /// Checks whether a submit would be accepted right now.
    ///
    /// # Errors
    ///
    /// Returns the first reason the submit would be refused, checking for an
    /// in-flight checkout, then the total, then the contact fields.
    pub fn submit_check(&self) -> Result<(), SubmitBlocked> {
        if let CheckoutStatus::Submitting { order_id } = self.checkout {
            return Err(SubmitBlocked::CheckoutInProgress { order_id });
        }
        if self.total_price().is_zero() {
            return Err(SubmitBlocked::NothingToPay);
        }
        let missing = self.contact.missing_fields();
        if !missing.is_empty() {
            return Err(SubmitBlocked::MissingContact { fields: missing });
        }
        Ok(())
    }

    /// Builds the order intent for checkout without changing the form.
    ///
    /// # Errors
    ///
    /// Returns [`SubmitBlocked`] when [`Self::submit_check`] fails.
    pub fn submit(&self, clock: &dyn Clock) -> Result<OrderIntent, SubmitBlocked> {
        self.submit_check()?;
        Ok(OrderIntent {
            order_id: OrderId::new(),
            quantities: self.quantities,
            contact: self.contact.clone(),
            total_price: self.total_price(),
            created_at: clock.now(),
        })
    }

    pub(crate) fn set_checkout(&mut self, status: CheckoutStatus) {
        self.checkout = status;
    }
}
