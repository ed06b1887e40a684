//! Command execution layer for the charge graph
//!
//! Every operation the service exposes is a [`Command`]. The [`Executor`]
//! validates it, runs it against the engine and returns an [`Output`] or
//! an [`Error`]. [`ChargeGraph`] wraps the executor in typed methods.
//!
//! # Example
//!
//! ```ignore
//! use chargegraph_executor::ChargeGraph;
//! use chargegraph_engine::GraphConfig;
//!
//! let graph = ChargeGraph::open(GraphConfig::default())?;
//! let path = graph.charge_min_path(1, 5)?;
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

mod api;
mod command;
pub mod convert;
mod error;
mod executor;
pub mod handlers;
mod output;


pub use api::ChargeGraph;
pub use command::{ChargeInput, Command, PointInput};
pub use error::Error;
pub use executor::{Executor, Services};
pub use output::Output;

/// Result type for executor operations.
pub type Result<T> = std::result::Result<T, Error>;
