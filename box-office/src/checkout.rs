//! Checkout collaborator that receives submitted orders.
//!
//! The form never charges anyone itself. A submitted [`OrderIntent`] is handed
//! to a [`CheckoutGateway`], which answers with a receipt or an error. The
//! hosted payment page sits behind this seam.

use crate::order::OrderIntent;
use crate::types::{Money, OrderId};
use serde::{Deserialize, Serialize};
use std::future::Future;
use std::pin::Pin;
use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;
use thiserror::Error;

/// Checkout result
pub type CheckoutResult<T> = Result<T, CheckoutError>;

/// Why a hand-off did not produce a receipt
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum CheckoutError {
    /// Checkout refused the order
    #[error("checkout declined: {reason}")]
    Declined {
        /// Decline reason
        reason: String,
    },

    /// Checkout could not be reached
    #[error("checkout unavailable: {message}")]
    Unavailable {
        /// Error message
        message: String,
    },

    /// Checkout did not answer in time
    #[error("checkout timed out")]
    Timeout,
}

/// Confirmation returned by the checkout collaborator
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckoutReceipt {
    /// Order the receipt belongs to
    pub order_id: OrderId,
    /// Collaborator's reference for the session
    pub reference: String,
    /// Amount the collaborator will charge
    pub amount: Money,
}

/// Receives order intents for payment
pub trait CheckoutGateway: Send + Sync {
    /// Hand an order over for payment
    ///
    /// # Errors
    ///
    /// Returns [`CheckoutError`] if the collaborator refuses or fails
    fn hand_off(
        &self,
        intent: OrderIntent,
    ) -> Pin<Box<dyn Future<Output = CheckoutResult<CheckoutReceipt>> + Send>>;
}

// ============================================================================
// Logging checkout
// ============================================================================

/// Accepts every order after a fixed latency and logs it
#[derive(Clone, Debug)]
pub struct LoggingCheckout {
    latency: Duration,
}

impl LoggingCheckout {
    /// Creates a checkout that answers after `latency`
    #[must_use]
    pub const fn new(latency: Duration) -> Self {
        Self { latency }
    }

    /// Arc-wrapped instance for the environment
    #[must_use]
    pub fn shared(latency: Duration) -> Arc<dyn CheckoutGateway> {
        Arc::new(Self::new(latency))
    }
}

impl Default for LoggingCheckout {
    fn default() -> Self {
        Self::new(Duration::from_millis(100))
    }
}

impl CheckoutGateway for LoggingCheckout {
    fn hand_off(
        &self,
        intent: OrderIntent,
    ) -> Pin<Box<dyn Future<Output = CheckoutResult<CheckoutReceipt>> + Send>> {
        let latency = self.latency;
        Box::pin(async move {
            tokio::time::sleep(latency).await;

            let reference = format!("chk_{}", uuid::Uuid::new_v4().simple());

            tracing::info!(
                order_id = %intent.order_id,
                adult = intent.quantities.get(crate::fare::FareClass::Adult),
                child = intent.quantities.get(crate::fare::FareClass::Child),
                amount = intent.total_price.cents(),
                reference = %reference,
                "Order handed off to checkout"
            );

            Ok(CheckoutReceipt {
                order_id: intent.order_id,
                reference,
                amount: intent.total_price,
            })
        })
    }
}

// ============================================================================
// Recording checkout
// ============================================================================

/// Remembers every intent it receives. Useful in tests.
#[derive(Clone, Debug, Default)]
pub struct RecordingCheckout {
    intents: Arc<Mutex<Vec<OrderIntent>>>,
    failure: Option<CheckoutError>,
    latency: Duration,
}

impl RecordingCheckout {
    /// Accepts every order immediately
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Answers every hand-off with `error`
    #[must_use]
    pub fn failing(error: CheckoutError) -> Self {
        Self {
            failure: Some(error),
            ..Self::default()
        }
    }

    /// Waits `latency` before answering
    #[must_use]
    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }

    /// Intents received so far, oldest first
    #[must_use]
    pub fn intents(&self) -> Vec<OrderIntent> {
        self.intents
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Number of hand-offs received
    #[must_use]
    pub fn hand_off_count(&self) -> usize {
        self.intents
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }
}

impl CheckoutGateway for RecordingCheckout {
    fn hand_off(
        &self,
        intent: OrderIntent,
    ) -> Pin<Box<dyn Future<Output = CheckoutResult<CheckoutReceipt>> + Send>> {
        self.intents
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(intent.clone());

        let failure = self.failure.clone();
        let latency = self.latency;
        Box::pin(async move {
            if !latency.is_zero() {
                tokio::time::sleep(latency).await;
            }
            match failure {
                Some(error) => Err(error),
                None => Ok(CheckoutReceipt {
                    order_id: intent.order_id,
                    reference: format!("rec_{}", intent.order_id.as_uuid().simple()),
                    amount: intent.total_price,
                }),
            }
        })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::contact::ContactDetails;
    use crate::order::TicketQuantities;

    fn intent() -> OrderIntent {
        OrderIntent {
            order_id: OrderId::new(),
            quantities: TicketQuantities::new(2, 0),
            contact: ContactDetails {
                first_name: "Andreas".to_string(),
                last_name: "Ioannou".to_string(),
                email: "andreas@example.com".to_string(),
                phone: "+357 99 111 222".to_string(),
            },
            total_price: Money::from_euros(50),
            created_at: chrono::Utc::now(),
        }
    }

    #[tokio::test]
    async fn logging_checkout_issues_reference() {
        let checkout = LoggingCheckout::new(Duration::ZERO);
        let intent = intent();

        let receipt = checkout.hand_off(intent.clone()).await.unwrap();

        assert_eq!(receipt.order_id, intent.order_id);
        assert_eq!(receipt.amount, Money::from_euros(50));
        assert!(receipt.reference.starts_with("chk_"));
    }

    #[tokio::test]
    async fn recording_checkout_keeps_intents() {
        let checkout = RecordingCheckout::new();
        let first = intent();
        let second = intent();

        checkout.hand_off(first.clone()).await.unwrap();
        checkout.hand_off(second.clone()).await.unwrap();

        assert_eq!(checkout.hand_off_count(), 2);
        assert_eq!(checkout.intents(), vec![first, second]);
    }

    #[tokio::test]
    async fn failing_checkout_still_records() {
        let checkout = RecordingCheckout::failing(CheckoutError::Declined {
            reason: "card expired".to_string(),
        });

        let result = checkout.hand_off(intent()).await;

        assert_eq!(
            result,
            Err(CheckoutError::Declined {
                reason: "card expired".to_string()
            })
        );
        assert_eq!(checkout.hand_off_count(), 1);
    }

    #[test]
    fn error_messages() {
        assert_eq!(CheckoutError::Timeout.to_string(), "checkout timed out");
        assert_eq!(
            CheckoutError::Unavailable {
                message: "503".to_string()
            }
            .to_string(),
            "checkout unavailable: 503"
        );
    }
}
