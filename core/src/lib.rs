//! # Festival Core
//!
//! Core traits and types shared by every part of the box office.
//!
//! A feature is described by four pieces:
//!
//! - **State**: owned, cloneable data for the feature (e.g. the order form)
//! - **Action**: every input the feature reacts to (user commands and outcomes of effects)
//! - **Reducer**: `(State, Action, Environment) → (State, Effects)`, synchronous and
//!   deterministic
//! - **Effect**: a description of asynchronous work, executed later by the runtime
//!
//! External collaborators (clocks, checkout providers) are injected through
//! an environment value so that reducers stay testable.
//!
//! ## Example
//!
//! ```
//! use festival_core::{SmallVec, effect::Effect, reducer::Reducer, smallvec};
//!
//! #[derive(Debug, Default)]
//! struct Tally {
//!     seats: u32,
//! }
//!
//! enum TallyAction {
//!     Add(u32),
//! }
//!
//! struct TallyReducer;
//!
//! impl Reducer for TallyReducer {
//!     type State = Tally;
//!     type Action = TallyAction;
//!     type Environment = ();
//!
//!     fn reduce(
//!         &self,
//!         state: &mut Tally,
//!         action: TallyAction,
//!         _env: &(),
//!     ) -> SmallVec<[Effect<TallyAction>; 4]> {
//!         match action {
//!             TallyAction::Add(n) => state.seats += n,
//!         }
//!         smallvec![Effect::None]
//!     }
//! }
//!
//! let mut tally = Tally::default();
//! TallyReducer.reduce(&mut tally, TallyAction::Add(3), &());
//! assert_eq!(tally.seats, 3);
//! ```

// Re-export commonly used types
pub use chrono::{DateTime, Utc};
pub use serde::{Deserialize, Serialize};
pub use smallvec::{SmallVec, smallvec};

/// Declarative helpers for building effects
pub mod effect_macros;

/// Reducer module - the trait that holds all business logic
pub mod reducer {
    use super::SmallVec;
    use super::effect::Effect;

    /// The Reducer trait - core abstraction for business logic
    ///
    /// # Type Parameters
    ///
    /// - `State`: The domain state this reducer operates on
    /// - `Action`: The action type this reducer processes
    /// - `Environment`: The injected dependencies this reducer needs
    pub trait Reducer {
        /// The state type this reducer operates on
        type State;

        /// The action type this reducer processes
        type Action;

        /// The environment type with injected dependencies
        type Environment;

        /// Reduce an action into state changes and effects
        ///
        /// Implementations must not block and must not perform I/O directly:
        /// anything asynchronous is returned as an [`Effect`] and run by the
        /// runtime after the state update has been committed.
        fn reduce(
            &self,
            state: &mut Self::State,
            action: Self::Action,
            env: &Self::Environment,
        ) -> SmallVec<[Effect<Self::Action>; 4]>;
    }
}

/// Effect module - side effect descriptions
///
/// Effects are values, not execution. A reducer returns them and the
/// runtime decides when and where they run.
pub mod effect {
    use std::future::Future;
    use std::pin::Pin;

    /// Effect type - describes a side effect to be executed
    ///
    /// # Type Parameters
    ///
    /// - `Action`: The action type that effects can produce (feedback loop)
    pub enum Effect<Action> {
        /// No-op effect
        None,

        /// Arbitrary async computation
        ///
        /// Returns `Option<Action>` - if Some, the action is fed back into the reducer
        Future(Pin<Box<dyn Future<Output = Option<Action>> + Send>>),
    }

    // Manual Debug implementation since Future doesn't implement Debug
    impl<Action> std::fmt::Debug for Effect<Action> {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            match self {
                Effect::None => write!(f, "Effect::None"),
                Effect::Future(_) => write!(f, "Effect::Future(<future>)"),
            }
        }
    }

    impl<Action> Effect<Action> {
        /// Returns true for [`Effect::None`]
        #[must_use]
        pub const fn is_none(&self) -> bool {
            matches!(self, Effect::None)
        }

        /// Returns true for [`Effect::Future`]
        #[must_use]
        pub const fn is_future(&self) -> bool {
            matches!(self, Effect::Future(_))
        }
    }
}

/// Environment module - dependency injection traits
pub mod environment {
    use chrono::{DateTime, Utc};

    /// Clock trait - abstracts time operations for testability
    pub trait Clock: Send + Sync {
        /// Get the current time
        fn now(&self) -> DateTime<Utc>;
    }

    /// Wall clock backed by [`Utc::now`]
    #[derive(Debug, Clone, Copy, Default)]
    pub struct SystemClock;

    impl Clock for SystemClock {
        fn now(&self) -> DateTime<Utc> {
            Utc::now()
        }
    }
}
