//! Lease-bound adjacency records.
//!
//! One directional entry is one field of the owning point's adjacency
//! record. Each write renews only that field's lease, so the two entries of
//! a logical charge age independently.

use std::collections::BTreeMap;
use std::sync::Arc;
use std::time::Duration;

use chargegraph_core::{validate_cost, GraphError, GraphResult, PointId};
use chargegraph_storage::KvBackend;

use super::keys;

/// Per-point adjacency records over a [`KvBackend`].
#[derive(Clone)]
pub struct EdgeStore {
    backend: Arc<dyn KvBackend>,
    lease: Duration,
}

impl EdgeStore {
    /// Create an edge store whose entries live for `lease` after each write.
    pub fn new(backend: Arc<dyn KvBackend>, lease: Duration) -> Self {
        Self { backend, lease }
    }

    /// Lease applied on every write.
    pub fn lease(&self) -> Duration {
        self.lease
    }

    /// Upsert `node → neighbor` and renew its lease.
    pub fn put_edge_entry(&self, node: PointId, neighbor: PointId, weight: f64) -> GraphResult<()> {
        validate_cost(weight)?;
        let value = serde_json::to_string(&weight)?;
        self.backend.hash_put(
            &keys::adjacency_key(node),
            &keys::neighbor_field(neighbor),
            &value,
            Some(self.lease),
        )
    }

    /// Remove `node → neighbor`. Returns 1 if it existed, 0 otherwise.
    pub fn delete_edge_entry(&self, node: PointId, neighbor: PointId) -> GraphResult<usize> {
        let existed = self
            .backend
            .hash_delete(&keys::adjacency_key(node), &keys::neighbor_field(neighbor))?;
        Ok(usize::from(existed))
    }

    /// Live entries of `node`'s adjacency record, keyed by neighbor.
    pub fn get_adjacency(&self, node: PointId) -> GraphResult<BTreeMap<PointId, f64>> {
        let key = keys::adjacency_key(node);
        let fields = self.backend.hash_get_all(&key)?;
        let mut adjacency = BTreeMap::new();
        for (field, value) in fields {
            let neighbor = keys::parse_neighbor_field(&key, &field)?;
            let weight: f64 = serde_json::from_str(&value)?;
            validate_cost(weight).map_err(|_| {
                GraphError::serialization(format!(
                    "adjacency record '{}' holds invalid weight {} for {}",
                    key, value, neighbor
                ))
            })?;
            adjacency.insert(neighbor, weight);
        }
        tracing::debug!(
            target: "chargegraph::edges",
            node,
            neighbors = adjacency.len(),
            "read adjacency record"
        );
        Ok(adjacency)
    }

    /// Every point that currently has a live adjacency record.
    pub fn nodes(&self) -> GraphResult<Vec<PointId>> {
        let record_keys = self.backend.scan_prefix(keys::CHARGE_PREFIX)?;
        Ok(record_keys
            .iter()
            .filter_map(|k| keys::parse_adjacency_key(k))
            .collect())
    }

    /// Remove every adjacency record. Returns the number of records removed.
    pub fn clear_all(&self) -> GraphResult<usize> {
        let record_keys = self.backend.scan_prefix(keys::CHARGE_PREFIX)?;
        let mut removed = 0;
        for key in &record_keys {
            if self.backend.delete(key)? {
                removed += 1;
            }
        }
        tracing::warn!(target: "chargegraph::edges", removed, "cleared all adjacency records");
        Ok(removed)
    }
}

impl std::fmt::Debug for EdgeStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EdgeStore")
            .field("lease", &self.lease)
            .finish()
    }
}
