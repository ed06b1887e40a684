//! Charge command handlers.

use std::sync::Arc;

use chargegraph_core::{validate_point_id, Charge, PointId};

use crate::command::ChargeInput;
use crate::convert::convert_result;
use crate::executor::Services;
use crate::{Error, Output, Result};

/// Reject an id pair that cannot name a charge.
fn validate_pair(origin: PointId, destination: PointId) -> Result<()> {
    convert_result(validate_point_id(origin))?;
    convert_result(validate_point_id(destination))?;
    if origin == destination {
        return Err(Error::InvalidInput {
            reason: format!(
                "Origin and destination must differ, got {} twice",
                origin
            ),
        });
    }
    Ok(())
}

/// Handle ChargeAdd command.
pub fn charge_add(
    p: &Arc<Services>,
    origin: PointId,
    destination: PointId,
    cost: f64,
) -> Result<Output> {
    validate_pair(origin, destination)?;
    let charge = convert_result(Charge::new(origin, destination, cost))?;
    let stored = convert_result(p.engine.add_charge(charge))?;
    Ok(Output::Charge(stored))
}

/// Handle ChargeRemove command.
pub fn charge_remove(p: &Arc<Services>, origin: PointId, destination: PointId) -> Result<Output> {
    validate_pair(origin, destination)?;
    convert_result(p.engine.remove_charge(origin, destination))?;
    Ok(Output::Unit)
}

/// Handle ChargeAdjacent command.
pub fn charge_adjacent(p: &Arc<Services>, id: PointId) -> Result<Output> {
    convert_result(validate_point_id(id))?;
    let adjacent = convert_result(p.engine.get_adjacent(id))?;
    Ok(Output::Adjacent(adjacent))
}

/// Handle ChargeMinPath command.
pub fn charge_min_path(
    p: &Arc<Services>,
    origin: PointId,
    destination: PointId,
) -> Result<Output> {
    convert_result(validate_point_id(origin))?;
    convert_result(validate_point_id(destination))?;
    let path = convert_result(p.engine.min_cost_path(origin, destination))?;
    Ok(Output::Path(path))
}

/// Handle ChargeInit command.
///
/// Every charge is validated before the store is cleared.
pub fn charge_init(p: &Arc<Services>, charges: Vec<ChargeInput>) -> Result<Output> {
    let mut parsed = Vec::with_capacity(charges.len());
    for input in &charges {
        validate_pair(input.origin, input.destination)?;
        parsed.push(convert_result(Charge::new(
            input.origin,
            input.destination,
            input.cost,
        ))?);
    }
    convert_result(p.engine.init(&parsed))?;
    Ok(Output::Loaded {
        points: 0,
        charges: parsed.len(),
    })
}
