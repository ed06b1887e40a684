//! Commands accepted by the [`Executor`](crate::Executor).
//!
//! Commands carry raw caller input. Validation happens in the handlers,
//! before anything reaches the engine.

use chargegraph_core::PointId;
use serde::{Deserialize, Serialize};

/// A charge as supplied by a caller, not yet normalized or validated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChargeInput {
    /// One endpoint.
    pub origin: PointId,
    /// The other endpoint.
    pub destination: PointId,
    /// Transfer cost.
    pub cost: f64,
}

impl ChargeInput {
    /// Convenience constructor.
    pub fn new(origin: PointId, destination: PointId, cost: f64) -> Self {
        Self {
            origin,
            destination,
            cost,
        }
    }
}

/// A selling point as supplied by a caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PointInput {
    /// Positive id.
    pub id: PointId,
    /// Display name.
    pub name: String,
}

/// Every operation the service surface exposes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "command", rename_all = "snake_case")]
pub enum Command {
    // ==================== Charges (5) ====================
    /// Add or overwrite the charge between two points.
    ChargeAdd {
        /// One endpoint.
        origin: PointId,
        /// The other endpoint.
        destination: PointId,
        /// Transfer cost, non-negative.
        cost: f64,
    },
    /// Remove the direct connection between two points.
    ChargeRemove {
        /// One endpoint.
        origin: PointId,
        /// The other endpoint.
        destination: PointId,
    },
    /// Direct neighbors of a point.
    ChargeAdjacent {
        /// Queried point.
        id: PointId,
    },
    /// Cheapest path between two points.
    ChargeMinPath {
        /// Start point.
        origin: PointId,
        /// End point.
        destination: PointId,
    },
    /// Clear every charge and load `charges` in order.
    ChargeInit {
        /// Charges to load.
        charges: Vec<ChargeInput>,
    },

    // ==================== Selling points (6) ====================
    /// Add a new selling point.
    PointCreate {
        /// New id.
        id: PointId,
        /// Display name.
        name: String,
    },
    /// Rename an existing selling point.
    PointUpdate {
        /// Existing id.
        id: PointId,
        /// New display name.
        name: String,
    },
    /// Remove a selling point.
    PointDelete {
        /// Existing id.
        id: PointId,
    },
    /// Look up one selling point.
    PointGet {
        /// Queried id.
        id: PointId,
    },
    /// Every selling point, sorted by id.
    PointList,
    /// Replace every selling point with `points`.
    PointInit {
        /// Points to load.
        points: Vec<PointInput>,
    },

    // ==================== Service (2) ====================
    /// Liveness check.
    Ping,
    /// Load the default dataset.
    Seed,
}

impl Command {
    /// Short name used in logs.
    pub fn name(&self) -> &'static str {
        match self {
            Command::ChargeAdd { .. } => "ChargeAdd",
            Command::ChargeRemove { .. } => "ChargeRemove",
            Command::ChargeAdjacent { .. } => "ChargeAdjacent",
            Command::ChargeMinPath { .. } => "ChargeMinPath",
            Command::ChargeInit { .. } => "ChargeInit",
            Command::PointCreate { .. } => "PointCreate",
            Command::PointUpdate { .. } => "PointUpdate",
            Command::PointDelete { .. } => "PointDelete",
            Command::PointGet { .. } => "PointGet",
            Command::PointList => "PointList",
            Command::PointInit { .. } => "PointInit",
            Command::Ping => "Ping",
            Command::Seed => "Seed",
        }
    }

    /// Whether the command writes to the store.
    pub fn is_write(&self) -> bool {
        matches!(
            self,
            Command::ChargeAdd { .. }
                | Command::ChargeRemove { .. }
                | Command::ChargeInit { .. }
                | Command::PointCreate { .. }
                | Command::PointUpdate { .. }
                | Command::PointDelete { .. }
                | Command::PointInit { .. }
                | Command::Seed
        )
    }
}
