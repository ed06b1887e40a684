//! Storage layer for the charge graph
//!
//! Defines the [`KvBackend`] seam the graph engine talks to and ships an
//! in-process implementation:
//! - ShardedStore: DashMap shards with per-entry leases
//! - Clock: wall clock and a manually driven clock for lease tests
//! - FailpointStore: wrapper that injects backend failures

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod backend;
pub mod clock;
pub mod failpoint;
pub mod sharded;

pub use backend::KvBackend;
pub use clock::{Clock, ManualClock, SystemClock};
pub use failpoint::{FailOp, FailpointStore};
pub use sharded::ShardedStore;
