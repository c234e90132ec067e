//! Property-based tests for the statistics calculators.
//!
//! These tests pin the conservation and partition laws the calculators
//! must hold over arbitrary inputs.

use proptest::prelude::*;

use crate::reservation::Reservation;
use crate::room::RoomUnit;
use crate::stats::{compute_metrics, compute_occupancy};

// Strategy for generating a unit with independent capacity and occupancy
fn unit_strategy() -> impl Strategy<Value = RoomUnit> {
    (0u32..=10, 0u32..=15).prop_map(|(capacity, occupied)| {
        let mut unit = RoomUnit::fresh(1, capacity);
        unit.occupied = occupied;
        unit
    })
}

fn units_strategy() -> impl Strategy<Value = Vec<RoomUnit>> {
    prop::collection::vec(unit_strategy(), 0..20)
}

// Strategy for a reservation with arbitrary status code, including
// codes no variant names
fn reservation_strategy() -> impl Strategy<Value = Reservation> {
    (
        "[a-z]{1,8}@[a-z]{1,8}\\.com",
        0i32..=5,
        0.0f64..10_000.0,
        any::<bool>(),
        any::<bool>(),
        prop::option::of(1u32..=30),
        prop::option::of(1u32..=10),
    )
        .prop_map(
            |(email, status_code, total, payment_plan, group, group_size, guest_count)| {
                let mut r = Reservation::builder("Customer", email, 1)
                    .total(total)
                    .payment_plan(payment_plan)
                    .build()
                    .unwrap();
                r.status_code = status_code;
                r.group = group;
                r.group_size = group_size;
                r.guest_count = guest_count;
                r
            },
        )
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 2000,
        .. ProptestConfig::default()
    })]

    // Occupied plus available always equals declared capacity
    #[test]
    fn occupancy_conserves_capacity(
        units in units_strategy(),
        desired in 0u32..=20,
        capacity in 0u32..=10,
    ) {
        let stats = compute_occupancy(&units, desired, capacity);
        prop_assert_eq!(
            i64::from(stats.total_occupied) + stats.total_available,
            i64::from(stats.total_capacity)
        );
    }

    // Every unit lands in exactly one classification bucket
    #[test]
    fn occupancy_classification_partitions_units(
        units in units_strategy(),
        desired in 0u32..=20,
        capacity in 0u32..=10,
    ) {
        let stats = compute_occupancy(&units, desired, capacity);
        prop_assert_eq!(
            (stats.full_units + stats.partial_units + stats.empty_units) as usize,
            units.len()
        );
    }

    // Zero declared capacity always yields zero percent
    #[test]
    fn occupancy_percent_zero_on_zero_capacity(units in units_strategy()) {
        let stats = compute_occupancy(&units, 0, 7);
        prop_assert_eq!(stats.occupancy_percent, 0.0);
        let stats = compute_occupancy(&units, 7, 0);
        prop_assert_eq!(stats.occupancy_percent, 0.0);
    }

    // The computation is deterministic
    #[test]
    fn occupancy_is_deterministic(
        units in units_strategy(),
        desired in 0u32..=20,
        capacity in 0u32..=10,
    ) {
        let first = compute_occupancy(&units, desired, capacity);
        let second = compute_occupancy(&units, desired, capacity);
        prop_assert_eq!(first, second);
    }

    // Group/individual and liquidated/outstanding are exact partitions;
    // status buckets never exceed the total
    #[test]
    fn metrics_partitions_hold(
        reservations in prop::collection::vec(reservation_strategy(), 0..30)
    ) {
        let metrics = compute_metrics(&reservations);

        prop_assert_eq!(
            metrics.group_count + metrics.individual_count,
            metrics.total_count
        );
        prop_assert_eq!(
            metrics.liquidated_count + metrics.outstanding_count,
            metrics.total_count
        );
        prop_assert!(
            metrics.confirmed_count + metrics.pending_count + metrics.cancelled_count
                <= metrics.total_count
        );
        prop_assert!(metrics.unique_customers <= metrics.total_count);
    }

    // Headcount is the sum of per-reservation headcounts and at least
    // one per non-group booking without a guest count
    #[test]
    fn metrics_headcount_matches_sum(
        reservations in prop::collection::vec(reservation_strategy(), 0..30)
    ) {
        let metrics = compute_metrics(&reservations);
        let expected: u32 = reservations.iter().map(Reservation::headcount).sum();
        prop_assert_eq!(metrics.total_headcount, expected);
    }
}
