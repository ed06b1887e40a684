//! Core types for the charge graph
//!
//! This crate defines the vocabulary shared by every other layer:
//! - PointId / SellingPoint: the nodes owned by the directory
//! - Charge: a normalized, non-negative undirected edge
//! - GraphError / GraphResult: the error taxonomy

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod error;
pub mod types;

pub use error::{EntityRef, GraphError, GraphResult};
pub use types::{validate_cost, validate_point_id, Charge, PointId, SellingPoint};
