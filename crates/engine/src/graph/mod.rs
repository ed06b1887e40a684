//! Charge graph engine.
//!
//! Provides an undirected, weighted graph overlay on top of a key-value
//! backend. Each charge is stored twice, once in each endpoint's adjacency
//! record. The two writes are independent: there is no cross-key
//! transaction and no rollback, so a failure between them leaves the charge
//! visible from one side only. Readers never assume symmetry, and the next
//! successful write of the same charge repairs it.

pub mod edge_store;
pub mod keys;
pub mod pathfinding;
pub mod traversal;
pub mod types;

use std::sync::Arc;

use chargegraph_core::{
    validate_point_id, Charge, EntityRef, GraphError, GraphResult, PointId,
};
use chargegraph_storage::KvBackend;

use crate::config::GraphConfig;
use crate::directory::NodeDirectory;

pub use edge_store::EdgeStore;

/// Graph engine providing charge mutation and queries.
///
/// Holds no graph state of its own: every call reads what it needs from
/// the backend. Clone is cheap, and instances sharing a backend see the
/// same graph.
#[derive(Clone)]
pub struct GraphEngine {
    edges: EdgeStore,
    directory: Arc<dyn NodeDirectory>,
}

impl GraphEngine {
    /// Create an engine over `backend`, validating ids with `directory`.
    pub fn new(
        backend: Arc<dyn KvBackend>,
        directory: Arc<dyn NodeDirectory>,
        config: &GraphConfig,
    ) -> Self {
        Self {
            edges: EdgeStore::new(backend, config.charge_lease()),
            directory,
        }
    }

    /// The underlying edge store.
    pub fn edge_store(&self) -> &EdgeStore {
        &self.edges
    }

    pub(crate) fn directory(&self) -> &dyn NodeDirectory {
        self.directory.as_ref()
    }

    /// Fail with `NotFound` unless `id` is a known selling point.
    fn require_point(&self, id: PointId) -> GraphResult<()> {
        validate_point_id(id)?;
        if !self.directory.exists(id)? {
            return Err(GraphError::not_found(EntityRef::selling_point(id)));
        }
        Ok(())
    }

    // =========================================================================
    // Charge mutation
    // =========================================================================

    /// Add or overwrite a charge, writing both directions.
    ///
    /// `charge` is already normalized by construction, so adding `(a, b)`
    /// and later `(b, a)` hits the same two entries. Both leases restart.
    pub fn add_charge(&self, charge: Charge) -> GraphResult<Charge> {
        self.require_point(charge.origin())?;
        self.require_point(charge.destination())?;

        self.edges
            .put_edge_entry(charge.origin(), charge.destination(), charge.cost())?;
        // no rollback of the first entry if this fails
        self.edges
            .put_edge_entry(charge.destination(), charge.origin(), charge.cost())?;

        tracing::debug!(
            target: "chargegraph::graph",
            origin = charge.origin(),
            destination = charge.destination(),
            cost = charge.cost(),
            "charge stored"
        );
        Ok(charge)
    }

    /// Remove the direct connection between `a` and `b`.
    ///
    /// Succeeds if at least one directional entry existed. Fails with
    /// `NotFound` only when neither side had one.
    pub fn remove_charge(&self, a: PointId, b: PointId) -> GraphResult<()> {
        validate_point_id(a)?;
        validate_point_id(b)?;
        if a == b {
            return Err(GraphError::invalid_input(format!(
                "A charge needs two distinct selling points, got {} twice",
                a
            )));
        }
        self.require_point(a)?;
        self.require_point(b)?;

        let (origin, destination) = (a.min(b), a.max(b));
        let forward = self.edges.delete_edge_entry(origin, destination)?;
        let backward = self.edges.delete_edge_entry(destination, origin)?;

        match forward + backward {
            0 => Err(GraphError::not_found(EntityRef::charge(origin, destination))),
            1 => {
                tracing::warn!(
                    target: "chargegraph::graph",
                    origin,
                    destination,
                    "removed asymmetric charge (only one direction was present)"
                );
                Ok(())
            }
            _ => {
                tracing::debug!(target: "chargegraph::graph", origin, destination, "charge removed");
                Ok(())
            }
        }
    }

    /// Clear every charge, then add `charges` in order.
    ///
    /// Later charges over the same pair overwrite earlier ones. Every
    /// endpoint is checked before the clear, so a batch naming an unknown
    /// point leaves the current graph in place.
    pub fn init(&self, charges: &[Charge]) -> GraphResult<()> {
        for charge in charges {
            self.require_point(charge.origin())?;
            self.require_point(charge.destination())?;
        }
        self.edges.clear_all()?;
        for charge in charges {
            self.add_charge(*charge)?;
        }
        tracing::info!(target: "chargegraph::graph", charges = charges.len(), "charge graph initialized");
        Ok(())
    }
}

impl std::fmt::Debug for GraphEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GraphEngine")
            .field("edges", &self.edges)
            .finish()
    }
}
