//! Declarative macros for ergonomic effect construction
//!
//! Reducers wrap their async hand-offs in the same `Effect::Future` shape
//! every time. This macro keeps that terse.

/// Create an `Effect::Future` from an async block
///
/// The block evaluates to `Option<Action>`; `Some` is fed back to the store.
///
/// # Example
///
/// ```rust,ignore
/// use festival_core::async_effect;
///
/// async_effect! {
///     match checkout.hand_off(intent).await {
///         Ok(receipt) => Some(OrderAction::CheckoutAccepted { receipt }),
///         Err(error) => Some(OrderAction::CheckoutFailed { order_id, reason: error.to_string() }),
///     }
/// }
/// ```
#[macro_export]
macro_rules! async_effect {
    ($($body:tt)*) => {
        $crate::effect::Effect::Future(
            ::std::boxed::Box::pin(async move { $($body)* })
        )
    };
}
