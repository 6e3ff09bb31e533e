//! Planetarium Festival box office
//!
//! Ticket order form for the festival landing page (3-4 October, Nicosia).
//! The form holds ticket quantities per fare class and four contact fields,
//! derives the total, and hands a submitted order to a checkout collaborator.
//!
//! # Architecture
//!
//! ```text
//!  ticket cards / contact inputs
//!              │  OrderAction (commands)
//!              ▼
//!     ┌─────────────────┐      Effect::Future       ┌──────────────────┐
//!     │  OrderReducer   │ ────────────────────────▶ │ CheckoutGateway  │
//!     │  (OrderState)   │ ◀──────────────────────── │   hand_off()     │
//!     └─────────────────┘   OrderAction (events)    └──────────────────┘
//!              │
//!              ▼
//!        OrderSummary
//! ```
//!
//! # Rules
//!
//! - Each fare class holds between 0 and 10 tickets. Changes past either
//!   bound are clamped silently.
//! - The total is `adults × €25 + children × €0`.
//! - Submit is enabled only when the total is above zero and every contact
//!   field is non-empty. A blocked submit never reaches checkout.
//!
//! # Example
//!
//! ```
//! use box_office::{ContactField, FareClass, OrderState, SubmitState};
//!
//! let mut order = OrderState::new();
//! order.change_quantity(FareClass::Adult, 2);
//! for field in ContactField::ALL {
//!     order.update_contact_field(field, field.placeholder());
//! }
//!
//! assert_eq!(order.total_price().to_string(), "€50");
//! assert_eq!(order.submit_state(), SubmitState::Enabled);
//! ```

pub mod checkout;
pub mod config;
pub mod contact;
pub mod content;
pub mod fare;
pub mod order;
pub mod order_form;
pub mod summary;
pub mod types;

pub use checkout::{
    CheckoutError, CheckoutGateway, CheckoutReceipt, CheckoutResult, LoggingCheckout,
    RecordingCheckout,
};
pub use config::Config;
pub use contact::{ContactDetails, ContactField, UnknownContactField};
pub use content::{ContentError, FestivalContent};
pub use fare::FareClass;
pub use order::{
    CheckoutStatus, OrderIntent, OrderState, QuantityOutOfRange, SubmitBlocked, SubmitState,
    TicketQuantities,
};
pub use order_form::{OrderAction, OrderEnvironment, OrderReducer};
pub use summary::OrderSummary;
pub use types::{Money, OrderId};
