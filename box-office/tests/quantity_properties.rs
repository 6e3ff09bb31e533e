//! Property tests for ticket quantities and pricing

#![allow(clippy::unwrap_used)] // Test code can use unwrap

use box_office::{ContactField, FareClass, Money, OrderState, SubmitState};
use proptest::prelude::*;

fn fare() -> impl Strategy<Value = FareClass> {
    prop_oneof![Just(FareClass::Adult), Just(FareClass::Child)]
}

fn step() -> impl Strategy<Value = i32> {
    prop_oneof![Just(1), Just(-1)]
}

fn expected_total(state: &OrderState) -> Money {
    Money::from_euros(25 * state.quantity(FareClass::Adult))
}

proptest! {
    #[test]
    fn quantities_stay_in_range(steps in prop::collection::vec((fare(), step()), 0..200)) {
        let mut state = OrderState::new();
        for (fare, delta) in steps {
            state.change_quantity(fare, delta);
            for fare in FareClass::ALL {
                let quantity = state.quantity(fare);
                let range = FareClass::MIN_QUANTITY..=FareClass::MAX_QUANTITY;
                prop_assert!(range.contains(&quantity));
            }
        }
    }

    #[test]
    fn arbitrary_deltas_clamp(deltas in prop::collection::vec((fare(), any::<i32>()), 0..50)) {
        let mut state = OrderState::new();
        for (fare, delta) in deltas {
            let before = i64::from(state.quantity(fare));
            state.change_quantity(fare, delta);
            let expected = (before + i64::from(delta)).clamp(0, 10);
            prop_assert_eq!(i64::from(state.quantity(fare)), expected);
        }
    }

    #[test]
    fn total_is_adults_times_price(steps in prop::collection::vec((fare(), step()), 0..100)) {
        let mut state = OrderState::new();
        for (fare, delta) in steps {
            state.change_quantity(fare, delta);
            prop_assert_eq!(state.total_price(), expected_total(&state));
        }
    }

    #[test]
    fn zero_tickets_never_submittable(
        first in ".*",
        last in ".*",
        email in ".*",
        phone in ".*",
    ) {
        let mut state = OrderState::new();
        state.update_contact_field(ContactField::FirstName, first);
        state.update_contact_field(ContactField::LastName, last);
        state.update_contact_field(ContactField::Email, email);
        state.update_contact_field(ContactField::Phone, phone);
        prop_assert!(!state.is_submittable());
        prop_assert_eq!(state.submit_state(), SubmitState::Disabled);
    }

    #[test]
    fn any_empty_field_blocks_submit(adults in 1u32..=10, empty in 0usize..4) {
        let mut state = OrderState::new();
        state.change_quantity(FareClass::Adult, i32::try_from(adults).unwrap());
        for (index, field) in ContactField::ALL.into_iter().enumerate() {
            let value = if index == empty { "" } else { field.placeholder() };
            state.update_contact_field(field, value);
        }
        prop_assert!(!state.total_price().is_zero());
        prop_assert!(!state.is_submittable());
    }

    #[test]
    fn contact_update_is_idempotent(value in ".*") {
        let mut once = OrderState::new();
        once.update_contact_field(ContactField::Email, value.clone());

        let mut twice = once.clone();
        let changed = twice.update_contact_field(ContactField::Email, value);

        prop_assert!(!changed);
        prop_assert_eq!(once, twice);
    }
}

#[test]
fn bounds_are_no_ops() {
    let mut state = OrderState::new();
    assert!(!state.change_quantity(FareClass::Child, -1));
    assert_eq!(state.quantity(FareClass::Child), 0);

    state.change_quantity(FareClass::Child, 10);
    assert!(!state.change_quantity(FareClass::Child, 1));
    assert_eq!(state.quantity(FareClass::Child), 10);
}
