//! Charge Graph Comprehensive Test Suite
//!
//! Drives the public `chargegraph` surface end to end.
//!
//! ## Test Tiers
//!
//! - **Tier 1**: Edge normalization and mutation contracts
//! - **Tier 2**: Neighbor queries
//! - **Tier 3**: Minimum-cost paths
//! - **Tier 4**: Leases and partial failures
//! - **Tier 5**: Concurrent instances over one store
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test --test charge_graph_comprehensive
//! ```

mod test_utils;

// Tier 1: Mutation contracts
mod tier1_mutation;

// Tier 2: Neighbor queries
mod tier2_adjacency;

// Tier 3: Minimum-cost paths
mod tier3_min_path;

// Tier 4: Leases and partial failures
mod tier4_leases_and_failures;

// Tier 5: Concurrency
mod tier5_concurrency;
