//! Neighbor queries: direct connections of a single selling point.

use std::collections::BTreeMap;

use chargegraph_core::{
    validate_point_id, EntityRef, GraphError, GraphResult, PointId, SellingPoint,
};

use super::types::{AdjacencyInfo, AdjacentPoints};
use super::GraphEngine;

impl GraphEngine {
    /// Direct neighbors of `id` with their names and costs.
    ///
    /// Reads only `id`'s own adjacency record, so a charge that is present
    /// on the other side only is not reported. Neighbors that no longer
    /// resolve in the directory are left out.
    pub fn get_adjacent(&self, id: PointId) -> GraphResult<AdjacentPoints> {
        validate_point_id(id)?;
        let name = self
            .directory()
            .resolve(id)?
            .ok_or_else(|| GraphError::not_found(EntityRef::selling_point(id)))?;

        let mut adjacencies = BTreeMap::new();
        for (neighbor, cost) in self.edge_store().get_adjacency(id)? {
            match self.directory().resolve(neighbor)? {
                Some(name) => {
                    adjacencies.insert(neighbor, AdjacencyInfo { name, cost });
                }
                None => tracing::warn!(
                    target: "chargegraph::graph",
                    id,
                    neighbor,
                    "neighbor no longer resolves, skipping"
                ),
            }
        }

        Ok(AdjacentPoints {
            point: SellingPoint { id, name },
            adjacencies,
        })
    }
}
