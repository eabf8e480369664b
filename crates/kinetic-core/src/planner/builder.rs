//! Builder for creating and configuring Planner instances.

use std::path::{Path, PathBuf};

use log::debug;

use super::Planner;
use crate::{
    error::{KineticError, Result},
    storage::FileStorage,
};

/// Builder for [`Planner`].
#[derive(Debug, Clone, Default)]
pub struct PlannerBuilder {
    data_dir: Option<PathBuf>,
}

impl PlannerBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a custom data directory.
    ///
    /// If not specified, uses the XDG Base Directory specification:
    /// `$XDG_DATA_HOME/kinetic` or `~/.local/share/kinetic`.
    pub fn with_data_dir<P: AsRef<Path>>(mut self, dir: Option<P>) -> Self {
        if let Some(dir) = dir {
            self.data_dir = Some(dir.as_ref().to_path_buf());
        }
        self
    }

    /// Builds the planner, creating the data directory if needed.
    ///
    /// # Errors
    ///
    /// Returns `KineticError::XdgDirectory` if the default directory cannot be
    /// resolved and `KineticError::Storage` if it cannot be created.
    pub async fn build(self) -> Result<Planner> {
        let data_dir = match self.data_dir {
            Some(dir) => dir,
            None => Self::default_data_dir()?,
        };

        let planner = Planner::new(data_dir);
        planner.with_storage(|_storage: FileStorage| Ok(())).await?;

        debug!("Planner data directory: {}", planner.data_dir.display());
        Ok(planner)
    }

    fn default_data_dir() -> Result<PathBuf> {
        let marker = xdg::BaseDirectories::with_prefix("kinetic")
            .place_data_file("ks_plans_v1")
            .map_err(|e| KineticError::XdgDirectory(e.to_string()))?;

        marker
            .parent()
            .map(Path::to_path_buf)
            .ok_or_else(|| KineticError::XdgDirectory("data directory has no parent".to_string()))
    }
}
