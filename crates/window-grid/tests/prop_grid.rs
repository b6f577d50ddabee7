//! Property-based tests for the grid index space and selection engine.
//!
//! These verify invariants that should hold for *any* valid interval and
//! index, not just the specific examples in the other test files.

use chrono::NaiveDate;
use proptest::prelude::*;
use window_grid::config::TimeConfig;
use window_grid::index::{decompose, recompose};
use window_grid::SelectionEngine;

// ---------------------------------------------------------------------------
// Strategies
// ---------------------------------------------------------------------------

/// Intervals that divide a day evenly.
fn arb_even_interval() -> impl Strategy<Value = u32> {
    prop_oneof![
        Just(5u32),
        Just(10),
        Just(15),
        Just(20),
        Just(30),
        Just(60),
        Just(120),
        Just(240),
    ]
}

/// Any interval the config accepts, dividing or not.
fn arb_interval() -> impl Strategy<Value = u32> {
    1u32..=1440
}

fn arb_date() -> impl Strategy<Value = NaiveDate> {
    (2024i32..=2030, 1u32..=12, 1u32..=28)
        .prop_map(|(y, m, d)| NaiveDate::from_ymd_opt(y, m, d).unwrap())
}

// ---------------------------------------------------------------------------
// Property 1: Even intervals tile the day exactly
// ---------------------------------------------------------------------------
proptest! {
    #[test]
    fn even_intervals_tile_exactly(interval in arb_even_interval()) {
        let config = TimeConfig::new(interval).unwrap();
        prop_assert_eq!(config.slots_per_day() * interval, 1440);
    }
}

// ---------------------------------------------------------------------------
// Property 2: decompose/recompose roundtrip over the full linear range
// ---------------------------------------------------------------------------
proptest! {
    #[test]
    fn decompose_recompose_roundtrip(interval in arb_interval(), raw in 0u32..10_000) {
        let config = TimeConfig::new(interval).unwrap();
        let spd = config.slots_per_day();
        let index = raw % config.total_slots();

        let slot = decompose(index, spd);
        prop_assert!(slot.day_offset <= 1);
        prop_assert!(slot.slot_in_day < spd);
        prop_assert_eq!(recompose(slot, spd), index);
    }
}

// ---------------------------------------------------------------------------
// Property 3: Every slot label is a well-formed "HH:MM"
// ---------------------------------------------------------------------------
proptest! {
    #[test]
    fn labels_are_well_formed(interval in arb_interval()) {
        let config = TimeConfig::new(interval).unwrap();
        for label in config.labels() {
            prop_assert_eq!(label.len(), 5, "bad label {:?}", label);
            let (hh, rest) = label.split_at(2);
            let (colon, mm) = rest.split_at(1);
            prop_assert_eq!(colon, ":");
            let hh: u32 = hh.parse().unwrap();
            let mm: u32 = mm.parse().unwrap();
            prop_assert!(hh < 24, "hour out of range in {:?}", label);
            prop_assert!(mm < 60, "minute out of range in {:?}", label);
        }
    }
}

// ---------------------------------------------------------------------------
// Property 4: Committed range is independent of drag direction
// ---------------------------------------------------------------------------
proptest! {
    #[test]
    fn drag_direction_does_not_matter(
        interval in arb_even_interval(),
        date in arb_date(),
        a in 0u32..10_000,
        b in 0u32..10_000,
    ) {
        let mut forward = SelectionEngine::new(interval, date).unwrap();
        let total = forward.config().total_slots();
        let (a, b) = (a % total, b % total);

        forward.begin_selection(a);
        forward.extend_selection(b);
        forward.end_selection();

        let mut backward = SelectionEngine::new(interval, date).unwrap();
        backward.begin_selection(b);
        backward.extend_selection(a);
        backward.end_selection();

        prop_assert_eq!(forward.committed(), backward.committed());
        prop_assert!(forward.committed().is_some());
    }
}

// ---------------------------------------------------------------------------
// Property 5: Committed model invariants for any single drag
// ---------------------------------------------------------------------------
proptest! {
    #[test]
    fn committed_model_is_consistent(
        interval in arb_even_interval(),
        date in arb_date(),
        a in 0u32..10_000,
        b in 0u32..10_000,
    ) {
        let mut eng = SelectionEngine::new(interval, date).unwrap();
        let total = eng.config().total_slots();

        eng.begin_selection(a % total);
        eng.extend_selection(b % total);
        eng.end_selection();

        let model = eng.committed().unwrap().clone();

        // The start day is either the day before the base date or the base
        // date itself.
        let delta = (date - model.date).num_days();
        prop_assert!(delta == 0 || delta == 1, "start date off by {delta}");

        // Within one rendered day, the end strictly follows the start unless
        // the window wraps past midnight.
        if !model.crosses_midnight {
            prop_assert!(
                model.end_time > model.start_time,
                "non-wrapping window {} -> {} does not move forward",
                model.start_time,
                model.end_time
            );
        }
    }
}

// ---------------------------------------------------------------------------
// Property 6: end_selection is idempotent for any drag
// ---------------------------------------------------------------------------
proptest! {
    #[test]
    fn end_selection_idempotent(
        interval in arb_even_interval(),
        date in arb_date(),
        a in 0u32..10_000,
        b in 0u32..10_000,
    ) {
        let mut eng = SelectionEngine::new(interval, date).unwrap();
        let total = eng.config().total_slots();

        eng.begin_selection(a % total);
        eng.extend_selection(b % total);
        eng.end_selection();
        let first = eng.committed().cloned();
        eng.end_selection();
        prop_assert_eq!(eng.committed().cloned(), first);
    }
}
