//! Order form reducer.
//!
//! Commands come from the ticket cards and contact inputs. The only effect is
//! the checkout hand-off, whose outcome comes back as an event.

use crate::checkout::{CheckoutError, CheckoutGateway, CheckoutReceipt};
use crate::contact::ContactField;
use crate::fare::FareClass;
use crate::order::{CheckoutStatus, OrderState};
use crate::types::OrderId;
use festival_core::{
    SmallVec, async_effect, effect::Effect, environment::Clock, reducer::Reducer, smallvec,
};
use festival_macros::Action;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Duration;

/// How long a hand-off may run before it is marked failed
pub const DEFAULT_CHECKOUT_TIMEOUT: Duration = Duration::from_secs(30);

// ============================================================================
// Actions (Commands + Events)
// ============================================================================

/// Actions for the order form
#[derive(Action, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum OrderAction {
    // Commands
    /// Add `delta` tickets of `fare` (negative removes)
    #[command]
    ChangeQuantity {
        /// Fare class to change
        fare: FareClass,
        /// Signed change, clamped to the allowed range
        delta: i32,
    },

    /// Replace the value of a contact input
    #[command]
    UpdateContactField {
        /// Input being edited
        field: ContactField,
        /// New value, stored verbatim
        value: String,
    },

    /// Press the submit control
    #[command]
    Submit,

    // Events
    /// Checkout accepted the order
    #[event]
    CheckoutAccepted {
        /// Confirmation from checkout
        receipt: CheckoutReceipt,
    },

    /// Checkout refused or failed
    #[event]
    CheckoutFailed {
        /// Order handed off
        order_id: OrderId,
        /// Failure reason
        reason: String,
    },

    /// Checkout did not answer within the timeout
    #[event]
    CheckoutTimedOut {
        /// Order handed off
        order_id: OrderId,
    },
}

impl OrderAction {
    /// Order a checkout outcome refers to, if this is one
    #[must_use]
    pub const fn outcome_order_id(&self) -> Option<OrderId> {
        match self {
            Self::CheckoutAccepted { receipt } => Some(receipt.order_id),
            Self::CheckoutFailed { order_id, .. } | Self::CheckoutTimedOut { order_id } => {
                Some(*order_id)
            },
            _ => None,
        }
    }
}

// ============================================================================
// Environment
// ============================================================================

/// Dependencies injected into the order reducer
#[derive(Clone)]
pub struct OrderEnvironment {
    /// Clock for order timestamps
    pub clock: Arc<dyn Clock>,
    /// Collaborator receiving submitted orders
    pub checkout: Arc<dyn CheckoutGateway>,
    /// Upper bound on a single hand-off
    pub checkout_timeout: Duration,
}

impl OrderEnvironment {
    /// Creates an environment with the default checkout timeout
    #[must_use]
    pub fn new(clock: Arc<dyn Clock>, checkout: Arc<dyn CheckoutGateway>) -> Self {
        Self {
            clock,
            checkout,
            checkout_timeout: DEFAULT_CHECKOUT_TIMEOUT,
        }
    }

    /// Overrides the checkout timeout
    #[must_use]
    pub fn with_checkout_timeout(mut self, timeout: Duration) -> Self {
        self.checkout_timeout = timeout;
        self
    }
}

impl std::fmt::Debug for OrderEnvironment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OrderEnvironment")
            .field("checkout_timeout", &self.checkout_timeout)
            .finish_non_exhaustive()
    }
}

// ============================================================================
// Reducer
// ============================================================================

/// Reducer for the order form
#[derive(Clone, Debug, Default)]
pub struct OrderReducer;

impl OrderReducer {
    /// Creates a new `OrderReducer`
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    fn submit(
        state: &mut OrderState,
        env: &OrderEnvironment,
    ) -> SmallVec<[Effect<OrderAction>; 4]> {
        let intent = match state.submit(env.clock.as_ref()) {
            Ok(intent) => intent,
            Err(blocked) => {
                tracing::warn!(reason = %blocked, "Submit blocked");
                metrics::counter!("box_office.submit", "outcome" => "blocked").increment(1);
                return SmallVec::new();
            },
        };

        let order_id = intent.order_id;
        state.set_checkout(CheckoutStatus::Submitting { order_id });

        tracing::info!(
            order_id = %order_id,
            tickets = intent.quantities.total_tickets(),
            amount = intent.total_price.cents(),
            "Order submitted, handing off to checkout"
        );
        metrics::counter!("box_office.submit", "outcome" => "accepted").increment(1);

        let checkout = Arc::clone(&env.checkout);
        let timeout = env.checkout_timeout;

        smallvec![async_effect! {
            match tokio::time::timeout(timeout, checkout.hand_off(intent)).await {
                Ok(Ok(receipt)) => Some(OrderAction::CheckoutAccepted { receipt }),
                Ok(Err(CheckoutError::Timeout)) | Err(_) => {
                    Some(OrderAction::CheckoutTimedOut { order_id })
                },
                Ok(Err(error)) => Some(OrderAction::CheckoutFailed {
                    order_id,
                    reason: error.to_string(),
                }),
            }
        }]
    }

    fn apply_outcome(state: &mut OrderState, action: OrderAction) {
        let Some(order_id) = action.outcome_order_id() else {
            return;
        };

        if !state.checkout().is_submitting(order_id) {
            tracing::debug!(
                order_id = %order_id,
                outcome = action.name(),
                "Ignoring stale checkout outcome"
            );
            return;
        }

        let status = match action {
            OrderAction::CheckoutAccepted { receipt } => {
                tracing::info!(
                    order_id = %order_id,
                    reference = %receipt.reference,
                    "Checkout accepted"
                );
                CheckoutStatus::Accepted { receipt }
            },
            OrderAction::CheckoutFailed { reason, .. } => {
                tracing::warn!(order_id = %order_id, reason = %reason, "Checkout failed");
                CheckoutStatus::Failed { order_id, reason }
            },
            _ => {
                tracing::warn!(order_id = %order_id, "Checkout timed out");
                CheckoutStatus::Failed {
                    order_id,
                    reason: CheckoutError::Timeout.to_string(),
                }
            },
        };
        state.set_checkout(status);
    }
}

impl Reducer for OrderReducer {
    type State = OrderState;
    type Action = OrderAction;
    type Environment = OrderEnvironment;

    fn reduce(
        &self,
        state: &mut Self::State,
        action: Self::Action,
        env: &Self::Environment,
    ) -> SmallVec<[Effect<Self::Action>; 4]> {
        match action {
            OrderAction::ChangeQuantity { fare, delta } => {
                if state.change_quantity(fare, delta) {
                    tracing::debug!(
                        fare = %fare,
                        quantity = state.quantity(fare),
                        total = state.total_price().cents(),
                        "Quantity changed"
                    );
                }
                SmallVec::new()
            },

            OrderAction::UpdateContactField { field, value } => {
                state.update_contact_field(field, value);
                SmallVec::new()
            },

            OrderAction::Submit => Self::submit(state, env),

            // ========== Checkout outcomes ==========
            outcome => {
                Self::apply_outcome(state, outcome);
                SmallVec::new()
            },
        }
    }
}
