//! Charge graph engine
//!
//! This crate ties the storage seam to the graph semantics:
//! - EdgeStore: lease-bound per-point adjacency records
//! - GraphEngine: charge mutation, neighbor queries, minimum-cost paths
//! - SellingPointDirectory: the node directory the engine validates against
//! - GraphConfig: lease durations and startup behavior
//! - seed: the default dataset

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod config;
pub mod directory;
pub mod graph;
pub mod seed;

pub use config::GraphConfig;
pub use directory::{NodeDirectory, SellingPointDirectory};
pub use graph::pathfinding::ShortestPath;
pub use graph::types::{AdjacencyInfo, AdjacentPoints, MinCostPath};
pub use graph::{EdgeStore, GraphEngine};
