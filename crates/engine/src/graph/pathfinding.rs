//! Minimum-cost paths over the stored charge graph.
//!
//! Dijkstra with a lazy-deletion binary heap. The graph is never loaded as
//! a whole: each node is read from the edge store at the moment it is
//! expanded, so leases and concurrent writes are observed as they are.

use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap, HashSet};

use chargegraph_core::{
    validate_point_id, EntityRef, GraphError, GraphResult, PointId, SellingPoint,
};

use super::types::MinCostPath;
use super::GraphEngine;

/// Frontier entry. Ordered so that `BinaryHeap` pops the smallest cost;
/// equal costs fall back to the smaller id.
#[derive(Debug, Clone, Copy)]
struct Frontier {
    cost: f64,
    node: PointId,
}

impl PartialEq for Frontier {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Frontier {}

impl Ord for Frontier {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .cost
            .total_cmp(&self.cost)
            .then_with(|| other.node.cmp(&self.node))
    }
}

impl PartialOrd for Frontier {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Outcome of one Dijkstra run, before names are resolved.
#[derive(Debug, Clone, PartialEq)]
pub struct ShortestPath {
    /// Total cost of the path.
    pub cost: f64,
    /// Point ids, origin first.
    pub nodes: Vec<PointId>,
}

impl GraphEngine {
    /// Cheapest path between two selling points.
    ///
    /// Fails with `NotFound` if either point is unknown. An unreachable
    /// destination is a normal result with `reachable == false`.
    pub fn min_cost_path(&self, origin: PointId, destination: PointId) -> GraphResult<MinCostPath> {
        let origin_point = self.lookup_point(origin)?;
        let destination_point = self.lookup_point(destination)?;

        if origin == destination {
            return Ok(MinCostPath::trivial(origin_point));
        }

        let Some(found) = self.shortest_path(origin, destination)? else {
            tracing::debug!(
                target: "chargegraph::path",
                origin,
                destination,
                "destination unreachable"
            );
            return Ok(MinCostPath::unreachable(origin_point, destination_point));
        };

        let mut names = Vec::with_capacity(found.nodes.len());
        for &id in &found.nodes {
            match self.directory().resolve(id)? {
                Some(name) => names.push(name),
                None => tracing::warn!(
                    target: "chargegraph::path",
                    id,
                    "path point no longer resolves, dropping its name"
                ),
            }
        }

        Ok(MinCostPath {
            origin: origin_point,
            destination: destination_point,
            total_cost: Some(found.cost),
            path: names,
            path_ids: found.nodes,
            reachable: true,
        })
    }

    /// Run Dijkstra from `origin` until `destination` is settled.
    ///
    /// Reads one adjacency record per expanded node. Returns `None` when the
    /// frontier runs dry first. Any store failure aborts the search.
    ///
    /// A route whose running cost overflows `f64` is not relaxed. If the
    /// destination was only reachable through such routes the search fails
    /// with `InvalidInput` instead of reporting it unreachable.
    pub fn shortest_path(
        &self,
        origin: PointId,
        destination: PointId,
    ) -> GraphResult<Option<ShortestPath>> {
        let mut best: HashMap<PointId, f64> = HashMap::new();
        let mut predecessor: HashMap<PointId, PointId> = HashMap::new();
        let mut settled: HashSet<PointId> = HashSet::new();
        let mut frontier = BinaryHeap::new();

        best.insert(origin, 0.0);
        frontier.push(Frontier {
            cost: 0.0,
            node: origin,
        });

        let mut expanded = 0usize;
        let mut overflowed = false;
        while let Some(Frontier { cost, node }) = frontier.pop() {
            if !settled.insert(node) {
                // stale entry
                continue;
            }
            if node == destination {
                tracing::debug!(
                    target: "chargegraph::path",
                    origin,
                    destination,
                    cost,
                    expanded,
                    "destination settled"
                );
                let nodes = walk_back(&predecessor, origin, destination)?;
                return Ok(Some(ShortestPath { cost, nodes }));
            }

            expanded += 1;
            for (neighbor, weight) in self.edge_store().get_adjacency(node)? {
                if settled.contains(&neighbor) {
                    continue;
                }
                let candidate = cost + weight;
                if !candidate.is_finite() {
                    overflowed = true;
                    continue;
                }
                if best.get(&neighbor).map_or(true, |&known| candidate < known) {
                    best.insert(neighbor, candidate);
                    predecessor.insert(neighbor, node);
                    frontier.push(Frontier {
                        cost: candidate,
                        node: neighbor,
                    });
                }
            }
        }

        if overflowed {
            return Err(GraphError::invalid_input(format!(
                "path cost from {} to {} exceeds the representable range",
                origin, destination
            )));
        }
        Ok(None)
    }

    /// Resolve a point for a path query, failing with `NotFound`.
    fn lookup_point(&self, id: PointId) -> GraphResult<SellingPoint> {
        validate_point_id(id)?;
        let name = self
            .directory()
            .resolve(id)?
            .ok_or_else(|| GraphError::not_found(EntityRef::selling_point(id)))?;
        Ok(SellingPoint { id, name })
    }
}

/// Follow predecessors from `destination` back to `origin`.
fn walk_back(
    predecessor: &HashMap<PointId, PointId>,
    origin: PointId,
    destination: PointId,
) -> GraphResult<Vec<PointId>> {
    let mut nodes = vec![destination];
    let mut current = destination;
    while current != origin {
        current = *predecessor.get(&current).ok_or_else(|| {
            GraphError::internal(format!("no predecessor recorded for {}", current))
        })?;
        nodes.push(current);
    }
    nodes.reverse();
    Ok(nodes)
}
