//! Shared harness for the comprehensive suite.

use std::sync::Arc;

use chargegraph::engine::{FailpointStore, KvBackend, ManualClock, ShardedStore};
use chargegraph::{ChargeGraph, GraphConfig};

/// Lease used by the harness: one hour.
pub const LEASE_SECS: u64 = 3600;

pub struct Harness {
    pub clock: Arc<ManualClock>,
    pub store: Arc<FailpointStore>,
    pub graph: ChargeGraph,
}

impl Harness {
    /// A second handle over the same store, as another service instance.
    pub fn another_instance(&self) -> ChargeGraph {
        ChargeGraph::with_backend(self.store.clone(), config(false)).unwrap()
    }
}

pub fn config(seed: bool) -> GraphConfig {
    GraphConfig {
        charge_lease_secs: LEASE_SECS,
        point_lease_secs: 365 * 86_400,
        seed_on_start: seed,
    }
}

fn build(seed: bool) -> Harness {
    let clock = Arc::new(ManualClock::new(1_700_000_000_000));
    let inner: Arc<dyn KvBackend> = Arc::new(ShardedStore::with_clock(clock.clone()));
    let store = Arc::new(FailpointStore::new(inner));
    let graph = ChargeGraph::with_backend(store.clone(), config(seed)).unwrap();
    store.reset_calls();
    Harness {
        clock,
        store,
        graph,
    }
}

/// Default dataset loaded.
pub fn seeded() -> Harness {
    build(true)
}

/// `n` points named `P1..Pn`, no charges.
pub fn with_points(n: u64) -> Harness {
    let h = build(false);
    for id in 1..=n {
        h.graph.point_create(id, &format!("P{}", id)).unwrap();
    }
    h.store.reset_calls();
    h
}

/// Cost of `other` in `id`'s adjacency, if present.
pub fn cost_between(graph: &ChargeGraph, id: u64, other: u64) -> Option<f64> {
    graph
        .charge_adjacent(id)
        .unwrap()
        .adjacencies
        .get(&other)
        .map(|a| a.cost)
}
