//! Typed API over the executor.
//!
//! [`ChargeGraph`] turns each [`Command`](crate::Command) into a method
//! with typed arguments and a typed return value.

mod charge;
mod db;
mod point;

use std::sync::Arc;

use chargegraph_engine::GraphConfig;
use chargegraph_storage::{KvBackend, ShardedStore};

use crate::convert::convert_result;
use crate::{Executor, Result};

/// Handle to a charge graph service.
///
/// Clone is cheap. Clones, and handles built with [`ChargeGraph::with_backend`]
/// over the same backend, all see the same data.
#[derive(Debug, Clone)]
pub struct ChargeGraph {
    executor: Executor,
}

impl ChargeGraph {
    /// Open over a fresh in-process store.
    ///
    /// Loads the default dataset when `config.seed_on_start` is set.
    pub fn open(config: GraphConfig) -> Result<Self> {
        Self::with_backend(Arc::new(ShardedStore::new()), config)
    }

    /// Open over an existing backend.
    pub fn with_backend(backend: Arc<dyn KvBackend>, config: GraphConfig) -> Result<Self> {
        convert_result(config.validate())?;
        let graph = Self {
            executor: Executor::new(backend, &config),
        };
        if config.seed_on_start {
            graph.seed()?;
        }
        Ok(graph)
    }

    /// The executor behind this handle.
    pub fn executor(&self) -> &Executor {
        &self.executor
    }
}
