//! Public types for the chargegraph API.
//!
//! This module re-exports types from internal crates with a clean public interface.

// ============================================================================
// Public API types - these are what users should use
// ============================================================================

// Nodes and edges
pub use chargegraph_core::{Charge, PointId, SellingPoint};

// Query results
pub use chargegraph_engine::{AdjacencyInfo, AdjacentPoints, MinCostPath};

// Configuration
pub use chargegraph_engine::GraphConfig;

// Command surface
pub use chargegraph_executor::{ChargeInput, Command, Output, PointInput};
