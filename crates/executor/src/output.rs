//! Results returned by the [`Executor`](crate::Executor).

use chargegraph_core::{Charge, SellingPoint};
use chargegraph_engine::{AdjacentPoints, MinCostPath};
use serde::Serialize;

/// One result per command.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum Output {
    /// Command succeeded with nothing to return.
    Unit,
    /// Reply to `Ping`.
    Pong {
        /// Crate version.
        version: String,
    },
    /// The normalized charge that was stored.
    Charge(Charge),
    /// Neighbors of a point.
    Adjacent(AdjacentPoints),
    /// Cheapest path, possibly unreachable.
    Path(MinCostPath),
    /// A single selling point.
    Point(SellingPoint),
    /// A lookup that may find nothing.
    MaybePoint(Option<SellingPoint>),
    /// Several selling points.
    Points(Vec<SellingPoint>),
    /// Number of records loaded.
    Loaded {
        /// Selling points loaded.
        points: usize,
        /// Charges loaded.
        charges: usize,
    },
}

impl Output {
    /// Render as pretty JSON for display.
    pub fn to_json_pretty(&self) -> String {
        serde_json::to_string_pretty(self)
            .unwrap_or_else(|e| serde_json::json!({ "error": e.to_string() }).to_string())
    }
}
