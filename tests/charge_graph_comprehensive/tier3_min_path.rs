//! Tier 3: minimum-cost paths.

use chargegraph::engine::FailOp;
use chargegraph::ChargeInput;

use crate::test_utils::*;

fn load(h: &Harness, charges: &[(u64, u64, f64)]) {
    h.graph
        .charge_init(
            charges
                .iter()
                .map(|&(a, b, c)| ChargeInput::new(a, b, c))
                .collect(),
        )
        .unwrap();
}

#[test]
fn reference_graph() {
    let h = with_points(5);
    load(
        &h,
        &[
            (1, 2, 2.0),
            (1, 3, 3.0),
            (2, 3, 5.0),
            (2, 4, 10.0),
            (1, 4, 11.0),
            (4, 5, 5.0),
            (2, 5, 14.0),
        ],
    );
    let path = h.graph.charge_min_path(1, 5).unwrap();
    assert!(path.reachable);
    assert_eq!(path.total_cost, Some(16.0));
    assert!(path.path == ["P1", "P4", "P5"] || path.path == ["P1", "P2", "P5"]);

    // cheaper than 1-2-4-5
    let via_two_four = 2.0 + 10.0 + 5.0;
    assert!(path.total_cost.unwrap() < via_two_four);
}

#[test]
fn self_path() {
    let h = seeded();
    h.store.reset_calls();
    let path = h.graph.charge_min_path(8, 8).unwrap();
    assert_eq!(path.total_cost, Some(0.0));
    assert_eq!(path.path, vec!["Chubut"]);
    assert!(path.reachable);
    assert_eq!(h.store.calls(FailOp::HashGetAll), 0);
}

#[test]
fn disconnected_components() {
    let h = with_points(6);
    load(&h, &[(1, 2, 1.0), (2, 3, 1.0), (4, 5, 1.0), (5, 6, 1.0)]);
    let path = h.graph.charge_min_path(1, 6).unwrap();
    assert!(!path.reachable);
    assert_eq!(path.total_cost, None);
    assert!(path.path.is_empty());
    assert_eq!(path.origin.name, "P1");
    assert_eq!(path.destination.name, "P6");
}

#[test]
fn default_dataset_long_route() {
    let h = seeded();
    // Misiones to Santa Cruz: 6-4-1-3-8-9 = 6 + 11 + 3 + 10 + 11
    let path = h.graph.charge_min_path(6, 9).unwrap();
    assert_eq!(path.total_cost, Some(41.0));
    assert_eq!(
        path.path,
        vec!["Misiones", "Santa Fe", "CABA", "GBA_2", "Chubut", "Santa Cruz"]
    );
}

#[test]
fn path_is_symmetric_in_cost() {
    let h = seeded();
    for (a, b) in [(1, 9), (7, 3), (10, 2)] {
        let there = h.graph.charge_min_path(a, b).unwrap().total_cost;
        let back = h.graph.charge_min_path(b, a).unwrap().total_cost;
        assert_eq!(there, back, "{} <-> {}", a, b);
    }
}

#[test]
fn path_reflects_latest_writes() {
    let h = seeded();
    assert_eq!(h.graph.charge_min_path(1, 5).unwrap().total_cost, Some(16.0));
    h.graph.charge_add(1, 5, 1.0).unwrap();
    assert_eq!(h.graph.charge_min_path(1, 5).unwrap().total_cost, Some(1.0));
    h.graph.charge_remove(1, 5).unwrap();
    assert_eq!(h.graph.charge_min_path(1, 5).unwrap().total_cost, Some(16.0));
}

#[test]
fn overflowing_route_is_invalid_input() {
    let h = with_points(3);
    load(&h, &[(1, 2, 1e308), (2, 3, 1e308)]);
    assert!(h.graph.charge_min_path(1, 3).unwrap_err().is_invalid_input());
}

#[test]
fn json_command_yields_json_path() {
    let h = seeded();
    let cmd: chargegraph::Command = serde_json::from_str(
        r#"{"command":"charge_min_path","origin":6,"destination":9}"#,
    )
    .unwrap();
    let output = h.graph.executor().execute(cmd).unwrap();
    let json: serde_json::Value = serde_json::from_str(&output.to_json_pretty()).unwrap();
    assert_eq!(json["type"], "path");
    assert_eq!(json["value"]["total_cost"], 41.0);
    assert_eq!(json["value"]["reachable"], true);
    assert_eq!(json["value"]["path"][0], "Misiones");
    assert_eq!(json["value"]["path_ids"].as_array().unwrap().len(), 6);
}

#[test]
fn unreachable_serializes_with_null_cost() {
    let h = with_points(2);
    let path = h.graph.charge_min_path(1, 2).unwrap();
    let json = serde_json::to_value(&path).unwrap();
    assert_eq!(json["reachable"], false);
    assert!(json["total_cost"].is_null());
    assert_eq!(json["path"], serde_json::json!([]));
}
