//! Tier 4: lease expiry and partial write failures.

use std::time::Duration;

use chargegraph::engine::FailOp;

use crate::test_utils::*;

#[test]
fn charges_decay_without_renewal() {
    let h = seeded();
    h.clock.advance(Duration::from_secs(LEASE_SECS - 1));
    assert!(h.graph.charge_min_path(1, 5).unwrap().reachable);
    h.clock.advance(Duration::from_secs(1));
    assert!(!h.graph.charge_min_path(1, 5).unwrap().reachable);
    // points outlive charges
    assert_eq!(h.graph.point_list().unwrap().len(), 10);
}

#[test]
fn re_add_renews_the_lease() {
    let h = seeded();
    h.clock.advance(Duration::from_secs(LEASE_SECS / 2));
    h.graph.charge_add(1, 2, 2.0).unwrap();
    h.clock.advance(Duration::from_secs(LEASE_SECS / 2));
    assert_eq!(cost_between(&h.graph, 1, 2), Some(2.0));
    assert_eq!(cost_between(&h.graph, 1, 3), None);
}

#[test]
fn second_write_failure_leaves_one_sided_charge() {
    let h = with_points(2);
    h.store.fail_once_after(FailOp::HashPut, None, 1);
    let err = h.graph.charge_add(2, 1, 4.0).unwrap_err();
    assert!(err.is_retryable());
    assert_eq!(cost_between(&h.graph, 1, 2), Some(4.0));
    assert_eq!(cost_between(&h.graph, 2, 1), None);

    // reachable one way only until repaired
    assert!(h.graph.charge_min_path(1, 2).unwrap().reachable);
    assert!(!h.graph.charge_min_path(2, 1).unwrap().reachable);

    h.graph.charge_add(1, 2, 4.0).unwrap();
    assert_eq!(cost_between(&h.graph, 2, 1), Some(4.0));
}

#[test]
fn remove_succeeds_on_one_sided_charge() {
    let h = with_points(2);
    h.store.fail_once_after(FailOp::HashPut, None, 1);
    assert!(h.graph.charge_add(1, 2, 4.0).is_err());
    h.graph.charge_remove(2, 1).unwrap();
    assert_eq!(cost_between(&h.graph, 1, 2), None);
    assert!(h.graph.charge_remove(2, 1).unwrap_err().is_not_found());
}

#[test]
fn store_outage_is_not_reported_as_unreachable() {
    let h = seeded();
    h.store.fail_always(FailOp::HashGetAll, Some("charges:4"));
    let err = h.graph.charge_min_path(6, 7).unwrap_err();
    assert!(err.is_retryable());
    assert!(h.graph.charge_adjacent(4).unwrap_err().is_retryable());
    h.store.disarm_all();
    assert!(h.graph.charge_min_path(6, 7).unwrap().reachable);
}
