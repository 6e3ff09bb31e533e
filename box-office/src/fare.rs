//! Fare classes offered on the ticket form.

use crate::types::Money;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Ticket category with its own price and quantity cap
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FareClass {
    /// Ages 13 and over
    Adult,
    /// Ages 12 and under, free with an adult
    Child,
}

impl FareClass {
    /// Every fare class, in display order
    pub const ALL: [Self; 2] = [Self::Adult, Self::Child];

    /// Fewest tickets of one class an order can hold
    pub const MIN_QUANTITY: u32 = 0;

    /// Most tickets of one class an order can hold
    pub const MAX_QUANTITY: u32 = 10;

    /// Price of a single ticket
    #[must_use]
    pub const fn unit_price(self) -> Money {
        match self {
            Self::Adult => Money::from_euros(25),
            Self::Child => Money::ZERO,
        }
    }

    /// Name shown on the ticket card
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Adult => "Adult",
            Self::Child => "Child",
        }
    }

    /// Age guidance shown under the price. Not enforced.
    #[must_use]
    pub const fn age_label(self) -> &'static str {
        match self {
            Self::Adult => "Ages 13+",
            Self::Child => "Ages 12 & under",
        }
    }

    /// What the ticket includes
    #[must_use]
    pub const fn perks(self) -> &'static [&'static str] {
        match self {
            Self::Adult => &["Full access", "VR & planetarium", "Live entertainment"],
            Self::Child => &["Full access", "Kids zone", "With adult"],
        }
    }

    /// Price as printed on the card: "Free" for zero-priced fares
    #[must_use]
    pub fn price_label(self) -> String {
        price_label(self.unit_price())
    }
}

impl fmt::Display for FareClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// "Free" for zero, the euro amount otherwise
#[must_use]
pub fn price_label(amount: Money) -> String {
    if amount.is_zero() {
        "Free".to_string()
    } else {
        amount.to_string()
    }
}
