//! Tier 2: neighbor queries.

use chargegraph::engine::FailOp;

use crate::test_utils::*;

#[test]
fn default_dataset_neighbors() {
    let h = seeded();
    let adj = h.graph.charge_adjacent(5).unwrap();
    assert_eq!(adj.point.name, "Córdoba");
    let mut names: Vec<_> = adj.adjacencies.values().map(|a| a.name.as_str()).collect();
    names.sort_unstable();
    assert_eq!(names, vec!["Catamarca", "Chubut", "GBA_1", "Santa Fe"]);
}

#[test]
fn reads_a_single_record() {
    let h = seeded();
    h.store.reset_calls();
    h.graph.charge_adjacent(1).unwrap();
    assert_eq!(h.store.calls(FailOp::HashGetAll), 1);
}

#[test]
fn point_deleted_out_of_band_is_skipped() {
    let h = seeded();
    h.graph.point_delete(2).unwrap();
    let adj = h.graph.charge_adjacent(1).unwrap();
    assert!(!adj.adjacencies.contains_key(&2));
    assert_eq!(adj.adjacencies.len(), 2);
}

#[test]
fn renamed_point_shows_new_name() {
    let h = seeded();
    h.graph.point_update(3, "GBA Sur").unwrap();
    let adj = h.graph.charge_adjacent(1).unwrap();
    assert_eq!(adj.adjacencies[&3].name, "GBA Sur");
}
