//! Integration tests for Store action broadcasting
//!
//! Observers wait on actions produced by effects: this is how callers learn
//! the outcome of an asynchronous hand-off without polling state.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)] // Test code can use unwrap/expect/panic

use festival_core::{SmallVec, effect::Effect, reducer::Reducer, smallvec};
use festival_runtime::{Store, StoreError};
use std::sync::Arc;
use std::time::Duration;

// ============================================================================
// Test Fixtures
// ============================================================================

/// Wristband activation: each band goes through three checks before it is live.
#[derive(Debug, Clone, PartialEq)]
enum WristbandAction {
    Activate { band: u64 },
    CheckPassed { band: u64, check: u32 },
    Activated { band: u64 },
    Revoked { band: u64 },
    Scan,
    Scanned { total: u32 },
}

#[derive(Debug, Clone, Default)]
struct WristbandState {
    scans: u32,
    checks: Vec<u32>,
}

#[derive(Clone)]
struct GateEnvironment;

#[derive(Clone)]
struct WristbandReducer;

impl Reducer for WristbandReducer {
    type State = WristbandState;
    type Action = WristbandAction;
    type Environment = GateEnvironment;

    fn reduce(
        &self,
        state: &mut Self::State,
        action: Self::Action,
        _env: &Self::Environment,
    ) -> SmallVec<[Effect<Self::Action>; 4]> {
        match action {
            WristbandAction::Activate { band } => smallvec![Effect::Future(Box::pin(async move {
                tokio::time::sleep(Duration::from_millis(5)).await;
                Some(WristbandAction::CheckPassed { band, check: 1 })
            }))],
            WristbandAction::CheckPassed { band, check } => {
                state.checks.push(check);
                if check < 3 {
                    smallvec![Effect::Future(Box::pin(async move {
                        tokio::time::sleep(Duration::from_millis(5)).await;
                        Some(WristbandAction::CheckPassed { band, check: check + 1 })
                    }))]
                } else {
                    smallvec![Effect::Future(Box::pin(async move {
                        Some(WristbandAction::Activated { band })
                    }))]
                }
            },
            WristbandAction::Activated { .. }
            | WristbandAction::Revoked { .. }
            | WristbandAction::Scanned { .. } => smallvec![Effect::None],
            WristbandAction::Scan => {
                state.scans += 1;
                let total = state.scans;
                smallvec![Effect::Future(Box::pin(async move {
                    Some(WristbandAction::Scanned { total })
                }))]
            },
        }
    }
}

fn new_store() -> Store<WristbandState, WristbandAction, GateEnvironment, WristbandReducer> {
    Store::new(WristbandState::default(), WristbandReducer, GateEnvironment)
}

// ============================================================================
// Tests
// ============================================================================

#[tokio::test]
async fn send_and_wait_for_immediate_result() {
    let store = new_store();

    let result = store
        .send_and_wait_for(
            WristbandAction::Scan,
            |action| matches!(action, WristbandAction::Scanned { .. }),
            Duration::from_secs(1),
        )
        .await
        .unwrap();

    assert_eq!(result, WristbandAction::Scanned { total: 1 });
}

#[tokio::test]
async fn send_and_wait_for_multi_step_flow() {
    let store = new_store();

    let result = store
        .send_and_wait_for(
            WristbandAction::Activate { band: 42 },
            |action| matches!(action, WristbandAction::Activated { band: 42 }),
            Duration::from_secs(1),
        )
        .await
        .unwrap();

    assert_eq!(result, WristbandAction::Activated { band: 42 });
    assert_eq!(store.state(|s| s.checks.clone()).await, vec![1, 2, 3]);
}

#[tokio::test]
async fn send_and_wait_for_times_out() {
    let store = new_store();

    let result = store
        .send_and_wait_for(
            WristbandAction::Activate { band: 99 },
            |action| matches!(action, WristbandAction::Revoked { band: 99 }),
            Duration::from_millis(50),
        )
        .await;

    assert!(matches!(result, Err(StoreError::Timeout)));
}

#[tokio::test]
async fn concurrent_waiters_receive_their_own_result() {
    let store = Arc::new(new_store());

    let mut handles = vec![];
    for band in 1..=4 {
        let store = Arc::clone(&store);
        handles.push(tokio::spawn(async move {
            store
                .send_and_wait_for(
                    WristbandAction::Activate { band },
                    move |action| {
                        matches!(action, WristbandAction::Activated { band: b } if *b == band)
                    },
                    Duration::from_secs(2),
                )
                .await
        }));
    }

    for (band, handle) in (1..=4).zip(handles) {
        let result = handle.await.expect("task panicked").unwrap();
        assert_eq!(result, WristbandAction::Activated { band });
    }

    assert_eq!(store.state(|s| s.checks.len()).await, 12);
}

#[tokio::test]
async fn direct_sends_are_not_broadcast() {
    let store = new_store();

    let result = store
        .send_and_wait_for(
            WristbandAction::Revoked { band: 7 },
            |action| matches!(action, WristbandAction::Revoked { band: 7 }),
            Duration::from_millis(50),
        )
        .await;

    assert!(matches!(result, Err(StoreError::Timeout)));
}

#[tokio::test]
async fn waiter_only_sees_actions_after_subscribing() {
    let store = new_store();

    let mut handle = store.send(WristbandAction::Scan).await.unwrap();
    handle.wait_with_timeout(Duration::from_secs(1)).await.unwrap();

    let result = store
        .send_and_wait_for(
            WristbandAction::Scan,
            |action| matches!(action, WristbandAction::Scanned { .. }),
            Duration::from_secs(1),
        )
        .await
        .unwrap();

    assert_eq!(result, WristbandAction::Scanned { total: 2 });
}

#[tokio::test]
async fn waiting_is_rejected_after_shutdown() {
    let store = new_store();
    store.shutdown(Duration::from_secs(1)).await.unwrap();

    let result = store
        .send_and_wait_for(
            WristbandAction::Scan,
            |action| matches!(action, WristbandAction::Scanned { .. }),
            Duration::from_millis(50),
        )
        .await;

    assert!(matches!(result, Err(StoreError::ShutdownInProgress)));
    assert_eq!(store.state(|s| s.scans).await, 0);
}
