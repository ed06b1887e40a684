//! Service operations: ping, seed.

use super::ChargeGraph;
use crate::{Command, Error, Output, Result};

impl ChargeGraph {
    /// Ping the service. Returns the crate version.
    pub fn ping(&self) -> Result<String> {
        match self.executor.execute(Command::Ping)? {
            Output::Pong { version } => Ok(version),
            _ => Err(Error::Internal {
                reason: "Unexpected output for Ping".into(),
            }),
        }
    }

    /// Replace all data with the default dataset.
    ///
    /// Returns the number of selling points and charges loaded.
    pub fn seed(&self) -> Result<(usize, usize)> {
        match self.executor.execute(Command::Seed)? {
            Output::Loaded { points, charges } => Ok((points, charges)),
            _ => Err(Error::Internal {
                reason: "Unexpected output for Seed".into(),
            }),
        }
    }
}
