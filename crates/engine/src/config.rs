//! Graph configuration.
//!
//! Loaded from `chargegraph.toml` when a path is given, defaults otherwise.
//! Unknown keys are rejected so a typo does not silently fall back to the
//! default lease.

use std::path::Path;
use std::time::Duration;

use chargegraph_core::{GraphError, GraphResult};
use serde::Deserialize;

/// Default lease for adjacency entries and selling points: 24 hours.
pub const DEFAULT_LEASE_SECS: u64 = 24 * 60 * 60;

/// Runtime configuration for the engine.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GraphConfig {
    /// Seconds an adjacency entry lives after its last write.
    pub charge_lease_secs: u64,
    /// Seconds a selling point lives after its last write.
    pub point_lease_secs: u64,
    /// Load the default dataset on startup.
    pub seed_on_start: bool,
}

impl Default for GraphConfig {
    fn default() -> Self {
        Self {
            charge_lease_secs: DEFAULT_LEASE_SECS,
            point_lease_secs: DEFAULT_LEASE_SECS,
            seed_on_start: true,
        }
    }
}

impl GraphConfig {
    /// Conventional file name.
    pub const FILE_NAME: &'static str = "chargegraph.toml";

    /// Parse and validate a TOML document.
    pub fn from_toml_str(s: &str) -> GraphResult<Self> {
        let cfg: GraphConfig = toml::from_str(s)
            .map_err(|e| GraphError::invalid_input(format!("invalid config: {}", e)))?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Read and validate a TOML file.
    pub fn from_file(path: impl AsRef<Path>) -> GraphResult<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|e| {
            GraphError::invalid_input(format!("cannot read config {}: {}", path.display(), e))
        })?;
        Self::from_toml_str(&contents)
    }

    /// Reject zero-length leases.
    pub fn validate(&self) -> GraphResult<()> {
        if self.charge_lease_secs == 0 {
            return Err(GraphError::invalid_input(
                "charge_lease_secs must be greater than 0",
            ));
        }
        if self.point_lease_secs == 0 {
            return Err(GraphError::invalid_input(
                "point_lease_secs must be greater than 0",
            ));
        }
        Ok(())
    }

    /// Lease for adjacency entries.
    pub fn charge_lease(&self) -> Duration {
        Duration::from_secs(self.charge_lease_secs)
    }

    /// Lease for selling point records.
    pub fn point_lease(&self) -> Duration {
        Duration::from_secs(self.point_lease_secs)
    }
}
