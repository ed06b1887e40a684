//! Selling point operations on the ChargeGraph API surface.

use chargegraph_core::{PointId, SellingPoint};

use super::ChargeGraph;
use crate::command::PointInput;
use crate::{Command, Error, Output, Result};

impl ChargeGraph {
    /// Add a new selling point.
    pub fn point_create(&self, id: PointId, name: &str) -> Result<SellingPoint> {
        match self.executor.execute(Command::PointCreate {
            id,
            name: name.to_string(),
        })? {
            Output::Point(point) => Ok(point),
            _ => Err(Error::Internal {
                reason: "Unexpected output for PointCreate".into(),
            }),
        }
    }

    /// Rename an existing selling point.
    pub fn point_update(&self, id: PointId, name: &str) -> Result<SellingPoint> {
        match self.executor.execute(Command::PointUpdate {
            id,
            name: name.to_string(),
        })? {
            Output::Point(point) => Ok(point),
            _ => Err(Error::Internal {
                reason: "Unexpected output for PointUpdate".into(),
            }),
        }
    }

    /// Remove a selling point. Its charges stay in the store.
    pub fn point_delete(&self, id: PointId) -> Result<()> {
        match self.executor.execute(Command::PointDelete { id })? {
            Output::Unit => Ok(()),
            _ => Err(Error::Internal {
                reason: "Unexpected output for PointDelete".into(),
            }),
        }
    }

    /// Look up a selling point.
    pub fn point_get(&self, id: PointId) -> Result<Option<SellingPoint>> {
        match self.executor.execute(Command::PointGet { id })? {
            Output::MaybePoint(point) => Ok(point),
            _ => Err(Error::Internal {
                reason: "Unexpected output for PointGet".into(),
            }),
        }
    }

    /// Every selling point, sorted by id.
    pub fn point_list(&self) -> Result<Vec<SellingPoint>> {
        match self.executor.execute(Command::PointList)? {
            Output::Points(points) => Ok(points),
            _ => Err(Error::Internal {
                reason: "Unexpected output for PointList".into(),
            }),
        }
    }

    /// Replace every selling point with `points`.
    pub fn point_init(&self, points: Vec<PointInput>) -> Result<usize> {
        match self.executor.execute(Command::PointInit { points })? {
            Output::Loaded { points, .. } => Ok(points),
            _ => Err(Error::Internal {
                reason: "Unexpected output for PointInit".into(),
            }),
        }
    }
}
