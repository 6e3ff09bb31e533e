//! Value objects shared across the box office.

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

// ============================================================================
// Identifiers
// ============================================================================

/// Unique identifier for a submitted order
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OrderId(Uuid);

impl OrderId {
    /// Creates a new random `OrderId`
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Create an `OrderId` from a `Uuid`
    #[must_use]
    pub const fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Get the inner UUID
    #[must_use]
    pub const fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for OrderId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for OrderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ============================================================================
// Money Value Object (cents-based to avoid floating point errors)
// ============================================================================

/// Euro amount stored in cents
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(u64);

impl Money {
    /// Zero euros
    pub const ZERO: Self = Self(0);

    /// Creates a `Money` value from cents
    #[must_use]
    pub const fn from_cents(cents: u64) -> Self {
        Self(cents)
    }

    /// Creates a `Money` value from whole euros
    #[must_use]
    pub const fn from_euros(euros: u32) -> Self {
        Self(euros as u64 * 100)
    }

    /// Returns the amount in cents
    #[must_use]
    pub const fn cents(&self) -> u64 {
        self.0
    }

    /// Returns the amount in whole euros (rounded down)
    #[must_use]
    pub const fn euros(&self) -> u64 {
        self.0 / 100
    }

    /// Checks if the amount is zero
    #[must_use]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Adds two money amounts with overflow checking
    #[must_use]
    pub const fn checked_add(self, other: Self) -> Option<Self> {
        match self.0.checked_add(other.0) {
            Some(result) => Some(Self(result)),
            None => None,
        }
    }

    /// Multiplies money by a quantity with overflow checking
    #[must_use]
    pub const fn checked_multiply(self, quantity: u32) -> Option<Self> {
        match self.0.checked_mul(quantity as u64) {
            Some(result) => Some(Self(result)),
            None => None,
        }
    }

    /// Adds two amounts, saturating at `u64::MAX` cents
    #[must_use]
    pub const fn saturating_add(self, other: Self) -> Self {
        Self(self.0.saturating_add(other.0))
    }

    /// Multiplies by a quantity, saturating at `u64::MAX` cents
    #[must_use]
    pub const fn saturating_multiply(self, quantity: u32) -> Self {
        Self(self.0.saturating_mul(quantity as u64))
    }
}

impl std::iter::Sum for Money {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, Self::saturating_add)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let cents = self.0 % 100;
        if cents == 0 {
            write!(f, "€{}", self.euros())
        } else {
            write!(f, "€{}.{cents:02}", self.euros())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn money_display_drops_zero_cents() {
        assert_eq!(Money::from_euros(25).to_string(), "€25");
        assert_eq!(Money::from_cents(2550).to_string(), "€25.50");
        assert_eq!(Money::from_cents(5).to_string(), "€0.05");
        assert_eq!(Money::ZERO.to_string(), "€0");
    }

    #[test]
    fn money_arithmetic() {
        let ticket = Money::from_euros(25);
        assert_eq!(ticket.checked_multiply(3), Some(Money::from_euros(75)));
        assert_eq!(
            ticket.checked_add(Money::from_euros(5)),
            Some(Money::from_euros(30))
        );
        assert_eq!(Money::from_cents(u64::MAX).checked_add(ticket), None);
        assert_eq!(
            Money::from_cents(u64::MAX).saturating_multiply(2),
            Money::from_cents(u64::MAX)
        );
    }

    #[test]
    fn money_sum() {
        let total: Money = [Money::from_euros(50), Money::ZERO, Money::from_cents(50)]
            .into_iter()
            .sum();
        assert_eq!(total, Money::from_cents(5050));
        assert!(!total.is_zero());
    }

    #[test]
    fn money_serializes_as_cents() {
        let json = serde_json::to_string(&Money::from_euros(25)).unwrap_or_default();
        assert_eq!(json, "2500");
    }

    #[test]
    fn order_ids_are_unique() {
        let a = OrderId::new();
        let b = OrderId::new();
        assert_ne!(a, b);
        assert_eq!(OrderId::from_uuid(*a.as_uuid()), a);
    }
}
