//! Error taxonomy for the charge graph.
//!
//! Every layer below the executor reports failures as [`GraphError`].
//! "Unreachable destination" and "no adjacency" are results, not errors,
//! so they never appear here.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::types::PointId;

/// Result type alias used across the workspace.
pub type GraphResult<T> = Result<T, GraphError>;

/// Reference to the entity an error is about.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum EntityRef {
    /// A selling point in the directory.
    SellingPoint {
        /// Selling point id.
        id: PointId,
    },
    /// A direct connection between two selling points.
    Charge {
        /// Smaller endpoint id.
        origin: PointId,
        /// Larger endpoint id.
        destination: PointId,
    },
}

impl EntityRef {
    /// Reference a selling point.
    pub fn selling_point(id: PointId) -> Self {
        EntityRef::SellingPoint { id }
    }

    /// Reference a charge; endpoints are stored in canonical order.
    pub fn charge(a: PointId, b: PointId) -> Self {
        EntityRef::Charge {
            origin: a.min(b),
            destination: a.max(b),
        }
    }
}

impl fmt::Display for EntityRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntityRef::SellingPoint { id } => write!(f, "selling point {}", id),
            EntityRef::Charge {
                origin,
                destination,
            } => write!(f, "direct connection between {} and {}", origin, destination),
        }
    }
}

/// Errors raised by the store, the directory and the graph engine.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GraphError {
    /// Referenced entity does not exist.
    #[error("{entity_ref} does not exist")]
    NotFound {
        /// What was looked up.
        entity_ref: EntityRef,
    },

    /// Malformed input, caught before any store access.
    #[error("invalid input: {message}")]
    InvalidInput {
        /// Human readable reason.
        message: String,
    },

    /// The backing key-value service failed or timed out.
    #[error("store unavailable: {reason}")]
    StoreUnavailable {
        /// Backend-provided reason.
        reason: String,
    },

    /// A stored record could not be encoded or decoded.
    #[error("serialization error: {message}")]
    Serialization {
        /// Codec-provided reason.
        message: String,
    },

    /// Invariant violation inside the workspace.
    #[error("internal error: {message}")]
    Internal {
        /// Description of the violated invariant.
        message: String,
    },
}

impl GraphError {
    /// Build a `NotFound` error.
    pub fn not_found(entity_ref: EntityRef) -> Self {
        GraphError::NotFound { entity_ref }
    }

    /// Build an `InvalidInput` error.
    pub fn invalid_input(message: impl Into<String>) -> Self {
        GraphError::InvalidInput {
            message: message.into(),
        }
    }

    /// Build a `StoreUnavailable` error.
    pub fn store_unavailable(reason: impl Into<String>) -> Self {
        GraphError::StoreUnavailable {
            reason: reason.into(),
        }
    }

    /// Build a `Serialization` error.
    pub fn serialization(message: impl Into<String>) -> Self {
        GraphError::Serialization {
            message: message.into(),
        }
    }

    /// Build an `Internal` error.
    pub fn internal(message: impl Into<String>) -> Self {
        GraphError::Internal {
            message: message.into(),
        }
    }

    /// True for failures that may succeed on retry.
    pub fn is_transient(&self) -> bool {
        matches!(self, GraphError::StoreUnavailable { .. })
    }
}

impl From<serde_json::Error> for GraphError {
    fn from(e: serde_json::Error) -> Self {
        GraphError::serialization(e.to_string())
    }
}
