//! Command handlers, one module per domain.
//!
//! Handlers validate raw input, call into the engine and wrap the result
//! in an [`Output`](crate::Output).

pub mod charge;
pub mod point;
