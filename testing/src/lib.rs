//! # Festival Testing
//!
//! Testing utilities for reducers built on `festival-core`.
//!
//! This crate provides:
//! - `FixedClock` / `test_clock()` for deterministic timestamps
//! - `ReducerTest`, a Given-When-Then harness for reducers
//! - Effect assertion helpers
//! - `init_test_tracing()` to see reducer logs while debugging a test
//!
//! ## Example
//!
//! ```ignore
//! use festival_testing::{ReducerTest, test_clock};
//!
//! ReducerTest::new(OrderReducer::new())
//!     .with_env(environment(test_clock()))
//!     .given_state(OrderState::default())
//!     .when_action(OrderAction::ChangeQuantity { fare: FareClass::Adult, delta: 1 })
//!     .then_state(|state| assert_eq!(state.total_price(), Money::from_euros(25)))
//!     .run();
//! ```

use chrono::{DateTime, Utc};
use festival_core::environment::Clock;


/// Mock implementations of Environment traits
pub mod mocks {
    use super::{Clock, DateTime, Utc};

    /// Fixed clock for deterministic tests
    ///
    /// # Example
    ///
    /// ```
    /// use festival_testing::mocks::FixedClock;
    /// use festival_core::environment::Clock;
    /// use chrono::Utc;
    ///
    /// let clock = FixedClock::new(Utc::now());
    /// assert_eq!(clock.now(), clock.now());
    /// ```
    #[derive(Debug, Clone)]
    pub struct FixedClock {
        time: DateTime<Utc>,
    }

    impl FixedClock {
        /// Create a new fixed clock with the given time
        #[must_use]
        pub const fn new(time: DateTime<Utc>) -> Self {
            Self { time }
        }
    }

    impl Clock for FixedClock {
        fn now(&self) -> DateTime<Utc> {
            self.time
        }
    }

    /// Create a default fixed clock for tests (opening morning, 2025-10-03 10:00 UTC)
    ///
    /// # Panics
    ///
    /// Panics if the hardcoded timestamp fails to parse, which cannot happen.
    #[must_use]
    #[allow(clippy::expect_used)]
    pub fn test_clock() -> FixedClock {
        FixedClock::new(
            DateTime::parse_from_rfc3339("2025-10-03T10:00:00Z")
                .expect("hardcoded timestamp should always parse")
                .with_timezone(&Utc),
        )
    }
}

/// Install a compact `tracing` subscriber for tests
///
/// Honours `RUST_LOG`. Safe to call from many tests; only the first call wins.
pub fn init_test_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with_test_writer()
        .try_init();
}

// Re-export commonly used items
pub use mocks::{FixedClock, test_clock};
pub use reducer_test::{ReducerTest, assertions};
