//! Selling point command handlers.

use std::sync::Arc;

use chargegraph_core::{validate_point_id, PointId, SellingPoint};

use crate::command::PointInput;
use crate::convert::convert_result;
use crate::executor::Services;
use crate::{Output, Result};

/// Handle PointCreate command.
pub fn point_create(p: &Arc<Services>, id: PointId, name: String) -> Result<Output> {
    let point = convert_result(SellingPoint::new(id, name))?;
    let created = convert_result(p.directory.create(point))?;
    Ok(Output::Point(created))
}

/// Handle PointUpdate command.
pub fn point_update(p: &Arc<Services>, id: PointId, name: String) -> Result<Output> {
    let updated = convert_result(p.directory.update(id, &name))?;
    Ok(Output::Point(updated))
}

/// Handle PointDelete command.
pub fn point_delete(p: &Arc<Services>, id: PointId) -> Result<Output> {
    convert_result(p.directory.delete(id))?;
    Ok(Output::Unit)
}

/// Handle PointGet command.
pub fn point_get(p: &Arc<Services>, id: PointId) -> Result<Output> {
    convert_result(validate_point_id(id))?;
    let point = convert_result(p.directory.find_by_id(id))?;
    Ok(Output::MaybePoint(point))
}

/// Handle PointList command.
pub fn point_list(p: &Arc<Services>) -> Result<Output> {
    let points = convert_result(p.directory.find_all())?;
    Ok(Output::Points(points))
}

/// Handle PointInit command.
pub fn point_init(p: &Arc<Services>, points: Vec<PointInput>) -> Result<Output> {
    let parsed = points
        .into_iter()
        .map(|input| convert_result(SellingPoint::new(input.id, input.name)))
        .collect::<Result<Vec<_>>>()?;
    convert_result(p.directory.initialize(&parsed))?;
    Ok(Output::Loaded {
        points: parsed.len(),
        charges: 0,
    })
}
