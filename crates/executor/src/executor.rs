//! Command dispatch.

use std::sync::Arc;

use chargegraph_engine::{seed, GraphConfig, GraphEngine, SellingPointDirectory};
use chargegraph_storage::KvBackend;

use crate::convert::convert_result;
use crate::handlers::{charge, point};
use crate::{Command, Output, Result};

/// Engine and directory shared by every handler.
#[derive(Debug)]
pub struct Services {
    /// Charge graph.
    pub engine: GraphEngine,
    /// Selling point directory.
    pub directory: SellingPointDirectory,
}

/// Executes [`Command`]s against one backend.
///
/// Holds no graph state; several executors over the same backend behave
/// like independent service instances.
#[derive(Debug, Clone)]
pub struct Executor {
    services: Arc<Services>,
}

impl Executor {
    /// Wire the directory and the engine over `backend`.
    pub fn new(backend: Arc<dyn KvBackend>, config: &GraphConfig) -> Self {
        let directory = SellingPointDirectory::new(backend.clone(), Some(config.point_lease()));
        let engine = GraphEngine::new(backend, Arc::new(directory.clone()), config);
        Self {
            services: Arc::new(Services { engine, directory }),
        }
    }

    /// The wired services.
    pub fn services(&self) -> &Arc<Services> {
        &self.services
    }

    /// Run one command.
    pub fn execute(&self, cmd: Command) -> Result<Output> {
        let name = cmd.name();
        let write = cmd.is_write();
        tracing::debug!(target: "chargegraph::executor", command = name, write, "executing");
        let p = &self.services;

        let result = match cmd {
            Command::ChargeAdd {
                origin,
                destination,
                cost,
            } => charge::charge_add(p, origin, destination, cost),
            Command::ChargeRemove {
                origin,
                destination,
            } => charge::charge_remove(p, origin, destination),
            Command::ChargeAdjacent { id } => charge::charge_adjacent(p, id),
            Command::ChargeMinPath {
                origin,
                destination,
            } => charge::charge_min_path(p, origin, destination),
            Command::ChargeInit { charges } => charge::charge_init(p, charges),
            Command::PointCreate { id, name } => point::point_create(p, id, name),
            Command::PointUpdate { id, name } => point::point_update(p, id, name),
            Command::PointDelete { id } => point::point_delete(p, id),
            Command::PointGet { id } => point::point_get(p, id),
            Command::PointList => point::point_list(p),
            Command::PointInit { points } => point::point_init(p, points),
            Command::Ping => Ok(Output::Pong {
                version: env!("CARGO_PKG_VERSION").to_string(),
            }),
            Command::Seed => self.seed(),
        };

        if let Err(ref e) = result {
            if write && !e.is_not_found() && !e.is_invalid_input() {
                tracing::warn!(target: "chargegraph::executor", command = name, error = %e, "write failed");
            } else {
                tracing::debug!(target: "chargegraph::executor", command = name, error = %e, "command failed");
            }
        }
        result
    }

    fn seed(&self) -> Result<Output> {
        let p = &self.services;
        convert_result(seed::bootstrap(&p.directory, &p.engine))?;
        Ok(Output::Loaded {
            points: convert_result(seed::default_points())?.len(),
            charges: convert_result(seed::default_charges())?.len(),
        })
    }
}
