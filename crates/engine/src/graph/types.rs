//! Query result types for the charge graph.

use std::collections::BTreeMap;

use chargegraph_core::{PointId, SellingPoint};
use serde::{Deserialize, Serialize};

/// One neighbor in an adjacency query.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdjacencyInfo {
    /// Neighbor display name.
    pub name: String,
    /// Cost of the direct connection.
    pub cost: f64,
}

/// Result of an adjacency query.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdjacentPoints {
    /// The queried point.
    pub point: SellingPoint,
    /// Resolvable neighbors keyed by id. Callers must not rely on order.
    pub adjacencies: BTreeMap<PointId, AdjacencyInfo>,
}

/// Result of a minimum-cost path query.
///
/// An unreachable destination is a normal result: `reachable` is false,
/// `total_cost` is `None` and both paths are empty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MinCostPath {
    /// Where the path starts.
    pub origin: SellingPoint,
    /// Where the path ends.
    pub destination: SellingPoint,
    /// Sum of the charges along the path.
    pub total_cost: Option<f64>,
    /// Display names along the path. Unresolvable points are skipped.
    pub path: Vec<String>,
    /// Point ids along the path, origin first.
    pub path_ids: Vec<PointId>,
    /// Whether the destination can be reached at all.
    pub reachable: bool,
}

impl MinCostPath {
    /// Path from a point to itself.
    pub fn trivial(point: SellingPoint) -> Self {
        Self {
            path: vec![point.name.clone()],
            path_ids: vec![point.id],
            origin: point.clone(),
            destination: point,
            total_cost: Some(0.0),
            reachable: true,
        }
    }

    /// No path exists.
    pub fn unreachable(origin: SellingPoint, destination: SellingPoint) -> Self {
        Self {
            origin,
            destination,
            total_cost: None,
            path: Vec::new(),
            path_ids: Vec::new(),
            reachable: false,
        }
    }
}
