//! Executor error type.
//!
//! This is the error surface callers see. Each variant maps to one class
//! of caller-visible failure; internal details are carried as text.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors returned by the executor and the [`ChargeGraph`](crate::ChargeGraph) API.
#[derive(Debug, Clone, PartialEq, Error, Serialize, Deserialize)]
#[serde(tag = "code", rename_all = "snake_case")]
pub enum Error {
    /// A referenced selling point does not exist.
    #[error("{point} does not exist")]
    PointNotFound {
        /// Which point.
        point: String,
    },

    /// No directional entry existed on either side of a charge.
    #[error("{charge} does not exist")]
    ChargeNotFound {
        /// Which charge.
        charge: String,
    },

    /// Malformed input.
    #[error("invalid input: {reason}")]
    InvalidInput {
        /// What was wrong.
        reason: String,
    },

    /// The backing store failed; the call may succeed on retry.
    #[error("store unavailable: {reason}")]
    StoreUnavailable {
        /// Backend-provided reason.
        reason: String,
    },

    /// A stored record could not be decoded.
    #[error("serialization error: {reason}")]
    Serialization {
        /// Codec-provided reason.
        reason: String,
    },

    /// Invariant violation or unexpected output.
    #[error("internal error: {reason}")]
    Internal {
        /// Description.
        reason: String,
    },
}

impl Error {
    /// True for the "does not exist" class.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Error::PointNotFound { .. } | Error::ChargeNotFound { .. }
        )
    }

    /// True when the caller sent something malformed.
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, Error::InvalidInput { .. })
    }

    /// True when retrying may help.
    pub fn is_retryable(&self) -> bool {
        matches!(self, Error::StoreUnavailable { .. })
    }
}
