//! Default dataset loaded on startup.

use chargegraph_core::{Charge, GraphResult, PointId, SellingPoint};

use crate::directory::SellingPointDirectory;
use crate::graph::GraphEngine;

const POINTS: [(PointId, &str); 10] = [
    (1, "CABA"),
    (2, "GBA_1"),
    (3, "GBA_2"),
    (4, "Santa Fe"),
    (5, "Córdoba"),
    (6, "Misiones"),
    (7, "Salta"),
    (8, "Chubut"),
    (9, "Santa Cruz"),
    (10, "Catamarca"),
];

const CHARGES: [(PointId, PointId, f64); 14] = [
    (1, 2, 2.0),
    (1, 3, 3.0),
    (2, 3, 5.0),
    (2, 4, 10.0),
    (1, 4, 11.0),
    (4, 5, 5.0),
    (2, 5, 14.0),
    (6, 7, 32.0),
    (8, 9, 11.0),
    (10, 7, 5.0),
    (3, 8, 10.0),
    (5, 8, 30.0),
    (10, 5, 5.0),
    (4, 6, 6.0),
];

/// The default selling points.
pub fn default_points() -> GraphResult<Vec<SellingPoint>> {
    POINTS
        .iter()
        .map(|(id, name)| SellingPoint::new(*id, name))
        .collect()
}

/// The default charges.
pub fn default_charges() -> GraphResult<Vec<Charge>> {
    CHARGES
        .iter()
        .map(|&(a, b, cost)| Charge::new(a, b, cost))
        .collect()
}

/// Replace the directory and the graph with the default dataset.
pub fn bootstrap(directory: &SellingPointDirectory, engine: &GraphEngine) -> GraphResult<()> {
    tracing::info!(target: "chargegraph::seed", "loading default dataset");

    let points = default_points()?;
    directory.initialize(&points)?;
    tracing::info!(target: "chargegraph::seed", points = points.len(), "selling points loaded");

    let charges = default_charges()?;
    engine.init(&charges)?;
    tracing::info!(target: "chargegraph::seed", charges = charges.len(), "charges loaded");
    Ok(())
}
