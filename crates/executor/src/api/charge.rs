//! Charge operations on the ChargeGraph API surface.

use chargegraph_core::{Charge, PointId};
use chargegraph_engine::{AdjacentPoints, MinCostPath};

use super::ChargeGraph;
use crate::command::ChargeInput;
use crate::{Command, Error, Output, Result};

impl ChargeGraph {
    /// Add or overwrite the charge between two points.
    ///
    /// Returns the stored charge, endpoints in ascending order.
    pub fn charge_add(&self, origin: PointId, destination: PointId, cost: f64) -> Result<Charge> {
        match self.executor.execute(Command::ChargeAdd {
            origin,
            destination,
            cost,
        })? {
            Output::Charge(charge) => Ok(charge),
            _ => Err(Error::Internal {
                reason: "Unexpected output for ChargeAdd".into(),
            }),
        }
    }

    /// Remove the direct connection between two points.
    pub fn charge_remove(&self, origin: PointId, destination: PointId) -> Result<()> {
        match self.executor.execute(Command::ChargeRemove {
            origin,
            destination,
        })? {
            Output::Unit => Ok(()),
            _ => Err(Error::Internal {
                reason: "Unexpected output for ChargeRemove".into(),
            }),
        }
    }

    /// Direct neighbors of a point.
    pub fn charge_adjacent(&self, id: PointId) -> Result<AdjacentPoints> {
        match self.executor.execute(Command::ChargeAdjacent { id })? {
            Output::Adjacent(adjacent) => Ok(adjacent),
            _ => Err(Error::Internal {
                reason: "Unexpected output for ChargeAdjacent".into(),
            }),
        }
    }

    /// Cheapest path between two points.
    pub fn charge_min_path(&self, origin: PointId, destination: PointId) -> Result<MinCostPath> {
        match self.executor.execute(Command::ChargeMinPath {
            origin,
            destination,
        })? {
            Output::Path(path) => Ok(path),
            _ => Err(Error::Internal {
                reason: "Unexpected output for ChargeMinPath".into(),
            }),
        }
    }

    /// Clear every charge and load `charges` in order.
    pub fn charge_init(&self, charges: Vec<ChargeInput>) -> Result<usize> {
        match self.executor.execute(Command::ChargeInit { charges })? {
            Output::Loaded { charges, .. } => Ok(charges),
            _ => Err(Error::Internal {
                reason: "Unexpected output for ChargeInit".into(),
            }),
        }
    }
}
