//! Error conversion from internal error types.
//!
//! This module provides conversions from [`GraphError`] to the executor's
//! [`Error`] type.

use crate::Error;
use chargegraph_core::{EntityRef, GraphError};

/// Convert a GraphError to an executor Error.
///
/// `NotFound` is split by what was looked up, so callers can tell a
/// missing point from a missing connection.
impl From<GraphError> for Error {
    fn from(err: GraphError) -> Self {
        match err {
            GraphError::NotFound { entity_ref } => {
                let entity_str = entity_ref.to_string();
                match entity_ref {
                    EntityRef::SellingPoint { .. } => Error::PointNotFound { point: entity_str },
                    EntityRef::Charge { .. } => Error::ChargeNotFound { charge: entity_str },
                }
            }

            GraphError::InvalidInput { message } => Error::InvalidInput { reason: message },

            GraphError::StoreUnavailable { reason } => Error::StoreUnavailable { reason },

            GraphError::Serialization { message } => Error::Serialization { reason: message },

            GraphError::Internal { message } => Error::Internal { reason: message },
        }
    }
}

/// Convert a chargegraph_core::GraphResult to an executor Result.
pub fn convert_result<T>(result: chargegraph_core::GraphResult<T>) -> crate::Result<T> {
    result.map_err(Error::from)
}
