//! Node and edge types.

use serde::{Deserialize, Serialize};

use crate::error::{GraphError, GraphResult};

/// Identifier of a selling point. Valid ids are positive.
pub type PointId = u64;

/// Reject the reserved id 0.
pub fn validate_point_id(id: PointId) -> GraphResult<()> {
    if id == 0 {
        return Err(GraphError::invalid_input(
            "Selling point id must be positive",
        ));
    }
    Ok(())
}

/// A selling point as held by the directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SellingPoint {
    /// Positive id.
    pub id: PointId,
    /// Display name, trimmed and non-empty.
    pub name: String,
}

impl SellingPoint {
    /// Build a selling point, trimming the name.
    pub fn new(id: PointId, name: impl AsRef<str>) -> GraphResult<Self> {
        let point = SellingPoint {
            id,
            name: name.as_ref().trim().to_string(),
        };
        point.validate()?;
        Ok(point)
    }

    /// Check the id and name constraints.
    pub fn validate(&self) -> GraphResult<()> {
        validate_point_id(self.id)?;
        if self.name.trim().is_empty() {
            return Err(GraphError::invalid_input(
                "Selling point name must not be empty",
            ));
        }
        Ok(())
    }
}

/// Wire shape of a charge before normalization.
#[derive(Debug, Clone, Deserialize)]
struct RawCharge {
    origin: PointId,
    destination: PointId,
    cost: f64,
}

impl TryFrom<RawCharge> for Charge {
    type Error = GraphError;

    fn try_from(raw: RawCharge) -> GraphResult<Self> {
        Charge::new(raw.origin, raw.destination, raw.cost)
    }
}

/// An undirected, non-negative transfer cost between two selling points.
///
/// The endpoints are always stored with `origin < destination`. Building a
/// charge from `(b, a)` yields the same value as building it from `(a, b)`,
/// so two charges over the same pair always address the same stored entries.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawCharge")]
pub struct Charge {
    origin: PointId,
    destination: PointId,
    cost: f64,
}

impl Charge {
    /// Build a normalized charge.
    ///
    /// Fails with `InvalidInput` if either id is zero, the ids are equal,
    /// or the cost is negative or not finite.
    pub fn new(a: PointId, b: PointId, cost: f64) -> GraphResult<Self> {
        validate_point_id(a)?;
        validate_point_id(b)?;
        if a == b {
            return Err(GraphError::invalid_input(format!(
                "A charge needs two distinct selling points, got {} twice",
                a
            )));
        }
        validate_cost(cost)?;
        let (origin, destination) = if a > b { (b, a) } else { (a, b) };
        Ok(Charge {
            origin,
            destination,
            cost,
        })
    }

    /// Smaller endpoint.
    pub fn origin(&self) -> PointId {
        self.origin
    }

    /// Larger endpoint.
    pub fn destination(&self) -> PointId {
        self.destination
    }

    /// Transfer cost.
    pub fn cost(&self) -> f64 {
        self.cost
    }

    /// The endpoint opposite to `id`, if `id` is an endpoint.
    pub fn other(&self, id: PointId) -> Option<PointId> {
        if id == self.origin {
            Some(self.destination)
        } else if id == self.destination {
            Some(self.origin)
        } else {
            None
        }
    }
}

/// Costs must be finite and non-negative.
pub fn validate_cost(cost: f64) -> GraphResult<()> {
    if !cost.is_finite() {
        return Err(GraphError::invalid_input("Cost must be a finite number"));
    }
    if cost < 0.0 {
        return Err(GraphError::invalid_input(format!(
            "Cost must be greater than or equal to 0, got {}",
            cost
        )));
    }
    Ok(())
}
