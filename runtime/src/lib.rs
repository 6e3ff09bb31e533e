//! # Festival Runtime
//!
//! The Store runtime that owns a feature's state, runs its reducer for every
//! action and executes the effects the reducer returns.
//!
//! ## Core Components
//!
//! - **Store**: serialises actions through the reducer and spawns effects
//! - **Effect Executor**: turns effect descriptions into tokio tasks and feeds
//!   produced actions back into the store
//! - **Action broadcast**: lets callers observe actions produced by effects
//!   (e.g. waiting for a checkout outcome)
//!
//! ## Example
//!
//! ```ignore
//! use festival_runtime::Store;
//!
//! let store = Store::new(OrderState::default(), OrderReducer::new(), environment);
//!
//! store.send(OrderAction::ChangeQuantity { fare: FareClass::Adult, delta: 1 }).await?;
//! let total = store.state(OrderState::total_price).await;
//! ```

use festival_core::{effect::Effect, reducer::Reducer};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::time::Duration;
use tokio::sync::{RwLock, watch};

/// Error types for the Store runtime
pub mod error {
    use thiserror::Error;

    /// Errors that can occur during Store operations
    #[derive(Error, Debug)]
    pub enum StoreError {
        /// Store is shutting down and not accepting new actions
        #[error("Store is shutting down")]
        ShutdownInProgress,

        /// Shutdown timed out waiting for effects to complete
        #[error("Shutdown timed out with {0} effects still running")]
        ShutdownTimeout(usize),

        /// Timeout waiting for a matching action
        ///
        /// Returned by `send_and_wait_for` when the timeout expires before
        /// a matching action is received.
        #[error("Timeout waiting for action")]
        Timeout,

        /// Action broadcast channel closed
        #[error("Action broadcast channel closed")]
        ChannelClosed,
    }
}

pub use error::StoreError;

/// Handle for tracking effect completion
///
/// Returned by [`Store::send()`]. Tracks the effects spawned directly by
/// that action; actions fed back by those effects get their own handles.
#[derive(Clone)]
pub struct EffectHandle {
    effects: Arc<AtomicUsize>,
    completion: watch::Receiver<()>,
}

impl EffectHandle {
    fn new() -> (Self, EffectTracking) {
        let counter = Arc::new(AtomicUsize::new(0));
        let (tx, rx) = watch::channel(());

        let handle = Self {
            effects: Arc::clone(&counter),
            completion: rx,
        };

        let tracking = EffectTracking {
            counter,
            notifier: Arc::new(tx),
        };

        (handle, tracking)
    }

    /// Number of effects from this action that are still running
    #[must_use]
    pub fn pending(&self) -> usize {
        self.effects.load(Ordering::SeqCst)
    }

    /// Wait for all effects to complete
    pub async fn wait(&mut self) {
        while self.effects.load(Ordering::SeqCst) > 0 {
            if self.completion.changed().await.is_err() {
                break;
            }
        }
    }

    /// Wait for all effects to complete with a timeout
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Timeout`] if the timeout expires before all effects complete.
    pub async fn wait_with_timeout(&mut self, timeout: Duration) -> Result<(), StoreError> {
        tokio::time::timeout(timeout, self.wait())
            .await
            .map_err(|_| StoreError::Timeout)
    }
}

impl std::fmt::Debug for EffectHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EffectHandle")
            .field("pending_effects", &self.effects.load(Ordering::SeqCst))
            .finish_non_exhaustive()
    }
}

/// Internal: tracking context passed through effect execution
#[derive(Clone)]
struct EffectTracking {
    counter: Arc<AtomicUsize>,
    notifier: Arc<watch::Sender<()>>,
}

impl EffectTracking {
    fn increment(&self) {
        self.counter.fetch_add(1, Ordering::SeqCst);
    }

    fn decrement(&self) {
        if self.counter.fetch_sub(1, Ordering::SeqCst) == 1 {
            let _ = self.notifier.send(());
        }
    }
}

/// Internal: RAII guard that decrements the effect counter on drop
///
/// Runs even if the effect task panics.
struct DecrementGuard(EffectTracking);

impl Drop for DecrementGuard {
    fn drop(&mut self) {
        self.0.decrement();
    }
}

/// Guard that decrements the store-wide pending counter on drop
struct AtomicCounterGuard(Arc<AtomicUsize>);

impl Drop for AtomicCounterGuard {
    fn drop(&mut self) {
        self.0.fetch_sub(1, Ordering::SeqCst);
    }
}

/// Store runtime for coordinating reducer execution and effect handling.
pub mod store {
    use super::{
        Arc, AtomicBool, AtomicCounterGuard, AtomicUsize, DecrementGuard, Duration, Effect,
        EffectHandle, EffectTracking, Ordering, Reducer, RwLock, StoreError,
    };
    use tokio::sync::broadcast;

    /// Number of effect-produced actions buffered for observers
    const BROADCAST_CAPACITY: usize = 16;

    /// The Store - runtime coordinator for a reducer
    ///
    /// The Store manages:
    /// 1. State (behind `RwLock`; the reducer runs under the write lock)
    /// 2. Reducer (business logic)
    /// 3. Environment (injected dependencies)
    /// 4. Effect execution (with feedback loop)
    ///
    /// Cloning a store is cheap and every clone shares the same state.
    pub struct Store<S, A, E, R>
    where
        R: Reducer<State = S, Action = A, Environment = E>,
    {
        state: Arc<RwLock<S>>,
        reducer: R,
        environment: E,
        shutdown: Arc<AtomicBool>,
        pending_effects: Arc<AtomicUsize>,
        /// Actions produced by effects, cloned out to observers.
        action_broadcast: broadcast::Sender<A>,
    }

    impl<S, A, E, R> Store<S, A, E, R>
    where
        R: Reducer<State = S, Action = A, Environment = E> + Send + Sync + 'static,
        A: Send + Clone + 'static,
        S: Send + Sync + 'static,
        E: Send + Sync + 'static,
    {
        /// Create a new store with initial state, reducer, and environment
        #[must_use]
        pub fn new(initial_state: S, reducer: R, environment: E) -> Self {
            let (action_broadcast, _) = broadcast::channel(BROADCAST_CAPACITY);

            Self {
                state: Arc::new(RwLock::new(initial_state)),
                reducer,
                environment,
                shutdown: Arc::new(AtomicBool::new(false)),
                pending_effects: Arc::new(AtomicUsize::new(0)),
                action_broadcast,
            }
        }

        /// Number of effects currently running across the whole store
        #[must_use]
        pub fn pending_effects(&self) -> usize {
            self.pending_effects.load(Ordering::Acquire)
        }

        /// Initiate graceful shutdown of the store
        ///
        /// Rejects new actions, then waits for pending effects to complete.
        /// Actions produced by those effects are still applied to the state.
        ///
        /// # Errors
        ///
        /// Returns [`StoreError::ShutdownTimeout`] if the timeout expires before all
        /// pending effects complete.
        pub async fn shutdown(&self, timeout: Duration) -> Result<(), StoreError> {
            tracing::info!("Initiating graceful shutdown");
            metrics::counter!("store.shutdown.initiated").increment(1);

            self.shutdown.store(true, Ordering::Release);

            let start = std::time::Instant::now();
            let poll_interval = Duration::from_millis(10);

            loop {
                let pending = self.pending_effects.load(Ordering::Acquire);

                if pending == 0 {
                    tracing::info!("All effects completed, shutdown successful");
                    return Ok(());
                }

                if start.elapsed() >= timeout {
                    tracing::error!(
                        pending_effects = pending,
                        "Shutdown timeout: {} effects still running", pending
                    );
                    metrics::counter!("store.shutdown.timeout").increment(1);
                    return Err(StoreError::ShutdownTimeout(pending));
                }

                tokio::time::sleep(poll_interval).await;
            }
        }

        /// Send an action to the store
        ///
        /// 1. Acquires the write lock on state
        /// 2. Calls the reducer with (state, action, environment)
        /// 3. Starts the returned effects in spawned tasks
        ///
        /// Concurrent `send()` calls serialize at the reducer: each action is
        /// applied to completion before the next one sees the state. `send()`
        /// returns once effects are started, not finished.
        ///
        /// # Errors
        ///
        /// Returns [`StoreError::ShutdownInProgress`] if the store is shutting down.
        #[tracing::instrument(skip(self, action), name = "store_send")]
        pub async fn send(&self, action: A) -> Result<EffectHandle, StoreError>
        where
            R: Clone,
            E: Clone,
        {
            if self.shutdown.load(Ordering::Acquire) {
                tracing::warn!("Rejected action: store is shutting down");
                metrics::counter!("store.shutdown.rejected_actions").increment(1);
                return Err(StoreError::ShutdownInProgress);
            }

            metrics::counter!("store.commands.total").increment(1);

            Ok(self.dispatch(action).await)
        }

        /// Run the reducer and start its effects
        ///
        /// Skips the shutdown gate so that effect feedback lands while a
        /// shutdown drains.
        async fn dispatch(&self, action: A) -> EffectHandle
        where
            R: Clone,
            E: Clone,
        {
            let (handle, tracking) = EffectHandle::new();

            let effects = {
                let mut state = self.state.write().await;
                let span = tracing::debug_span!("reducer_execution");
                let _enter = span.enter();

                let effects = self.reducer.reduce(&mut *state, action, &self.environment);
                tracing::trace!("Reducer completed, returned {} effects", effects.len());
                effects
            };

            for effect in effects {
                self.execute_effect(effect, &tracking);
            }

            handle
        }

        /// Send an action and wait for a matching action produced by effects
        ///
        /// Subscribes to the action broadcast before sending so the result
        /// cannot be missed.
        ///
        /// # Errors
        ///
        /// - [`StoreError::Timeout`]: no matching action within `timeout`
        /// - [`StoreError::ChannelClosed`]: the broadcast channel closed
        /// - [`StoreError::ShutdownInProgress`]: the store is shutting down
        pub async fn send_and_wait_for<F>(
            &self,
            action: A,
            predicate: F,
            timeout: Duration,
        ) -> Result<A, StoreError>
        where
            R: Clone,
            E: Clone,
            F: Fn(&A) -> bool,
        {
            let mut rx = self.action_broadcast.subscribe();

            self.send(action).await?;

            tokio::time::timeout(timeout, async {
                loop {
                    match rx.recv().await {
                        Ok(action) if predicate(&action) => return Ok(action),
                        Ok(_) => {},
                        Err(broadcast::error::RecvError::Lagged(skipped)) => {
                            tracing::warn!(
                                skipped,
                                "Action observer lagged, {} actions skipped", skipped
                            );
                        },
                        Err(broadcast::error::RecvError::Closed) => {
                            return Err(StoreError::ChannelClosed);
                        },
                    }
                }
            })
            .await
            .map_err(|_| StoreError::Timeout)?
        }

        /// Read current state via a closure
        ///
        /// ```ignore
        /// let adults = store.state(|s| s.quantity(FareClass::Adult)).await;
        /// ```
        pub async fn state<F, T>(&self, f: F) -> T
        where
            F: FnOnce(&S) -> T,
        {
            let state = self.state.read().await;
            f(&*state)
        }

        /// Spawn a tracked task that may feed an action back into the store
        fn spawn_tracked<Fut>(&self, tracking: &EffectTracking, work: Fut)
        where
            R: Clone,
            E: Clone,
            Fut: std::future::Future<Output = Option<A>> + Send + 'static,
        {
            tracking.increment();
            self.pending_effects.fetch_add(1, Ordering::SeqCst);
            let pending_guard = AtomicCounterGuard(Arc::clone(&self.pending_effects));
            let guard = DecrementGuard(tracking.clone());
            let store = self.clone();

            tokio::spawn(async move {
                let _guard = guard;
                let _pending_guard = pending_guard;

                if let Some(action) = work.await {
                    let _ = store.action_broadcast.send(action.clone());
                    store.dispatch(action).await;
                }
            });
        }

        /// Execute an effect with tracking
        ///
        /// Effect tasks that panic are isolated in their spawned task; the
        /// [`DecrementGuard`] keeps the counters accurate either way.
        #[tracing::instrument(skip(self, effect, tracking), name = "execute_effect")]
        fn execute_effect(&self, effect: Effect<A>, tracking: &EffectTracking)
        where
            R: Clone,
            E: Clone,
        {
            match effect {
                Effect::None => {
                    metrics::counter!("store.effects.executed", "type" => "none").increment(1);
                },
                Effect::Future(fut) => {
                    metrics::counter!("store.effects.executed", "type" => "future").increment(1);
                    self.spawn_tracked(tracking, fut);
                },
            }
        }
    }

    impl<S, A, E, R> Clone for Store<S, A, E, R>
    where
        R: Reducer<State = S, Action = A, Environment = E> + Clone,
        E: Clone,
    {
        fn clone(&self) -> Self {
            Self {
                state: Arc::clone(&self.state),
                reducer: self.reducer.clone(),
                environment: self.environment.clone(),
                shutdown: Arc::clone(&self.shutdown),
                pending_effects: Arc::clone(&self.pending_effects),
                action_broadcast: self.action_broadcast.clone(),
            }
        }
    }
}

pub use store::Store;

#[cfg(test)]
mod tests {
    use super::*;
    use festival_core::{SmallVec, effect::Effect, reducer::Reducer, smallvec};

    /// Gate counter used to exercise the store: guests pass a turnstile.
    #[derive(Debug, Clone, Default)]
    struct TurnstileState {
        admitted: i32,
    }

    #[derive(Debug, Clone)]
    enum TurnstileAction {
        Admit,
        Leave,
        Idle,
        ScanTicket,
        ScanSlowly,
        JamScanner,
    }

    #[derive(Debug, Clone)]
    struct GateEnv;

    #[derive(Debug, Clone)]
    struct TurnstileReducer;

    impl Reducer for TurnstileReducer {
        type State = TurnstileState;
        type Action = TurnstileAction;
        type Environment = GateEnv;

        fn reduce(
            &self,
            state: &mut Self::State,
            action: Self::Action,
            _env: &Self::Environment,
        ) -> SmallVec<[Effect<Self::Action>; 4]> {
            match action {
                TurnstileAction::Admit => {
                    state.admitted += 1;
                    smallvec![Effect::None]
                },
                TurnstileAction::Leave => {
                    state.admitted -= 1;
                    smallvec![Effect::None]
                },
                TurnstileAction::Idle => smallvec![Effect::None],
                TurnstileAction::ScanTicket => {
                    smallvec![Effect::Future(Box::pin(async { Some(TurnstileAction::Admit) }))]
                },
                TurnstileAction::ScanSlowly => smallvec![Effect::Future(Box::pin(async {
                    tokio::time::sleep(Duration::from_millis(20)).await;
                    Some(TurnstileAction::Admit)
                }))],
                #[allow(clippy::panic)] // Intentional panic for testing effect isolation
                TurnstileAction::JamScanner => smallvec![Effect::Future(Box::pin(async {
                    panic!("scanner jammed");
                }))],
            }
        }
    }

    fn store() -> Store<TurnstileState, TurnstileAction, GateEnv, TurnstileReducer> {
        Store::new(TurnstileState::default(), TurnstileReducer, GateEnv)
    }

    #[tokio::test]
    async fn test_store_creation() {
        let store = store();
        assert_eq!(store.state(|s| s.admitted).await, 0);
    }

    #[tokio::test]
    async fn test_send_action() -> Result<(), StoreError> {
        let store = store();

        store.send(TurnstileAction::Admit).await?;
        store.send(TurnstileAction::Admit).await?;
        store.send(TurnstileAction::Leave).await?;
        store.send(TurnstileAction::Idle).await?;

        assert_eq!(store.state(|s| s.admitted).await, 1);
        Ok(())
    }

    #[tokio::test]
    async fn test_effect_future_feeds_back() -> Result<(), StoreError> {
        let store = store();

        let mut handle = store.send(TurnstileAction::ScanTicket).await?;
        handle.wait_with_timeout(Duration::from_secs(1)).await?;

        assert_eq!(store.state(|s| s.admitted).await, 1);
        Ok(())
    }

    #[tokio::test]
    async fn test_slow_effect_is_tracked() -> Result<(), StoreError> {
        let store = store();

        let mut handle = store.send(TurnstileAction::ScanSlowly).await?;
        assert_eq!(store.state(|s| s.admitted).await, 0);
        assert_eq!(handle.pending(), 1);

        handle.wait_with_timeout(Duration::from_secs(1)).await?;
        assert_eq!(store.state(|s| s.admitted).await, 1);
        Ok(())
    }

    #[tokio::test]
    #[allow(clippy::panic)] // Tests are allowed to panic on failures
    async fn test_concurrent_sends() {
        let store = store();

        let handles: Vec<_> = (0..10)
            .map(|_| {
                let store = store.clone();
                tokio::spawn(async move {
                    let _ = store.send(TurnstileAction::Admit).await;
                })
            })
            .collect();

        for handle in handles {
            if let Err(e) = handle.await {
                panic!("concurrent send task panicked: {e}");
            }
        }

        assert_eq!(store.state(|s| s.admitted).await, 10);
    }

    #[tokio::test]
    async fn test_store_clone_shares_state() -> Result<(), StoreError> {
        let first = store();
        let second = first.clone();

        first.send(TurnstileAction::Admit).await?;
        assert_eq!(second.state(|s| s.admitted).await, 1);
        Ok(())
    }

    #[tokio::test]
    async fn test_effect_panic_isolation() -> Result<(), StoreError> {
        let store = store();

        let mut handle = store.send(TurnstileAction::JamScanner).await?;
        handle.wait_with_timeout(Duration::from_secs(1)).await?;

        // Store still processes actions after a panicking effect
        store.send(TurnstileAction::Admit).await?;
        assert_eq!(store.state(|s| s.admitted).await, 1);
        assert_eq!(store.pending_effects(), 0);
        Ok(())
    }

    #[tokio::test]
    async fn test_shutdown_rejects_new_actions() -> Result<(), StoreError> {
        let store = store();

        store.shutdown(Duration::from_secs(1)).await?;
        let result = store.send(TurnstileAction::Admit).await;

        assert!(matches!(result, Err(StoreError::ShutdownInProgress)));
        Ok(())
    }

    #[tokio::test]
    async fn test_shutdown_applies_effect_feedback() -> Result<(), StoreError> {
        let store = store();

        store.send(TurnstileAction::ScanSlowly).await?;
        store.shutdown(Duration::from_secs(1)).await?;

        assert_eq!(store.pending_effects(), 0);
        assert_eq!(store.state(|s| s.admitted).await, 1);
        Ok(())
    }
}
