//! Tier 1: normalization, symmetry, removal and bulk init.

use chargegraph::engine::FailOp;
use chargegraph::{ChargeInput, Error};

use crate::test_utils::*;

#[test]
fn reversed_arguments_produce_identical_state() {
    let a = with_points(2);
    let b = with_points(2);
    a.graph.charge_add(1, 2, 7.5).unwrap();
    b.graph.charge_add(2, 1, 7.5).unwrap();
    for (x, y) in [(1, 2), (2, 1)] {
        assert_eq!(cost_between(&a.graph, x, y), cost_between(&b.graph, x, y));
    }
}

#[test]
fn add_is_visible_from_both_endpoints() {
    let h = with_points(2);
    let stored = h.graph.charge_add(2, 1, 3.0).unwrap();
    assert_eq!((stored.origin(), stored.destination()), (1, 2));
    assert_eq!(cost_between(&h.graph, 1, 2), Some(3.0));
    assert_eq!(cost_between(&h.graph, 2, 1), Some(3.0));
}

#[test]
fn re_add_overwrites_without_parallel_edges() {
    let h = with_points(2);
    h.graph.charge_add(1, 2, 3.0).unwrap();
    h.graph.charge_add(2, 1, 9.0).unwrap();
    let adj = h.graph.charge_adjacent(1).unwrap();
    assert_eq!(adj.adjacencies.len(), 1);
    assert_eq!(adj.adjacencies[&2].cost, 9.0);
}

#[test]
fn remove_clears_both_sides() {
    let h = seeded();
    h.graph.charge_remove(5, 4).unwrap();
    assert_eq!(cost_between(&h.graph, 4, 5), None);
    assert_eq!(cost_between(&h.graph, 5, 4), None);
}

#[test]
fn remove_twice_is_not_found() {
    let h = seeded();
    h.graph.charge_remove(1, 2).unwrap();
    assert!(matches!(
        h.graph.charge_remove(1, 2).unwrap_err(),
        Error::ChargeNotFound { .. }
    ));
}

#[test]
fn negative_weight_never_reaches_the_store() {
    let h = with_points(2);
    let err = h.graph.charge_add(1, 2, -0.01).unwrap_err();
    assert!(err.is_invalid_input());
    assert_eq!(h.store.calls(FailOp::HashPut), 0);
    assert_eq!(cost_between(&h.graph, 1, 2), None);
}

#[test]
fn missing_point_errors_perform_no_mutation() {
    let h = seeded();
    h.store.reset_calls();
    assert!(h.graph.charge_add(1, 42, 1.0).unwrap_err().is_not_found());
    assert!(h.graph.charge_remove(42, 1).unwrap_err().is_not_found());
    assert!(h.graph.charge_adjacent(42).unwrap_err().is_not_found());
    assert!(h.graph.charge_min_path(42, 1).unwrap_err().is_not_found());
    assert_eq!(h.store.calls(FailOp::HashPut), 0);
    assert_eq!(h.store.calls(FailOp::HashDelete), 0);
}

#[test]
fn init_clears_then_applies_in_order() {
    let h = seeded();
    h.graph
        .charge_init(vec![
            ChargeInput::new(1, 2, 1.0),
            ChargeInput::new(3, 4, 2.0),
            ChargeInput::new(2, 1, 5.0),
        ])
        .unwrap();
    assert_eq!(cost_between(&h.graph, 1, 2), Some(5.0));
    assert_eq!(cost_between(&h.graph, 3, 4), Some(2.0));
    assert_eq!(cost_between(&h.graph, 1, 3), None);
    assert!(h.graph.charge_adjacent(10).unwrap().adjacencies.is_empty());
}

#[test]
fn zero_cost_charges_are_allowed() {
    let h = with_points(2);
    h.graph.charge_add(1, 2, 0.0).unwrap();
    assert_eq!(cost_between(&h.graph, 2, 1), Some(0.0));
}

mod properties {
    use proptest::prelude::*;

    use crate::test_utils::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(32))]

        #[test]
        fn argument_order_never_matters(a in 1u64..=5, b in 1u64..=5, cost in 0u32..1000) {
            prop_assume!(a != b);
            let cost = f64::from(cost) / 4.0;
            let forward = with_points(5);
            let reversed = with_points(5);
            let f = forward.graph.charge_add(a, b, cost).unwrap();
            let r = reversed.graph.charge_add(b, a, cost).unwrap();
            prop_assert_eq!(f, r);
            prop_assert_eq!(f.origin(), a.min(b));
            for id in [a, b] {
                prop_assert_eq!(
                    forward.graph.charge_adjacent(id).unwrap(),
                    reversed.graph.charge_adjacent(id).unwrap()
                );
            }
            prop_assert_eq!(cost_between(&forward.graph, a, b), Some(cost));
            prop_assert_eq!(cost_between(&forward.graph, b, a), Some(cost));
        }
    }
}
