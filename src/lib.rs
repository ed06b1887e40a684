//! Charge graph between selling points.
//!
//! A weighted, undirected graph of selling points and the transfer cost
//! between them, kept in a key-value store with per-entry leases. Answers
//! direct-neighbor lookups and minimum-cost paths, reading the graph from
//! the store one node at a time.
//!
//! # Example
//!
//! ```ignore
//! use chargegraph::{ChargeGraph, GraphConfig};
//!
//! let graph = ChargeGraph::open(GraphConfig::default())?;
//! graph.charge_add(1, 2, 4.0)?;
//! let path = graph.charge_min_path(1, 5)?;
//! println!("{:?} costs {:?}", path.path, path.total_cost);
//! ```

#![warn(missing_docs)]

pub mod types;

pub use chargegraph_executor::{ChargeGraph, Error, Executor, Result};
pub use types::*;

/// Lower-level building blocks, for embedding the engine directly.
pub mod engine {
    pub use chargegraph_core::{EntityRef, GraphError, GraphResult};
    pub use chargegraph_engine::{
        seed, EdgeStore, GraphEngine, NodeDirectory, SellingPointDirectory, ShortestPath,
    };
    pub use chargegraph_storage::{
        Clock, FailOp, FailpointStore, KvBackend, ManualClock, ShardedStore, SystemClock,
    };
}
