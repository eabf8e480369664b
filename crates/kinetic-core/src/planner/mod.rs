//! Async facade over the plan store and theme preference.
//!
//! The storage backends are synchronous. [`Planner`] opens a fresh
//! [`FileStorage`](crate::storage::FileStorage) per call and runs the work on
//! tokio's blocking pool, so callers can use it from async code.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │    Handlers     │    │   Operations    │    │     Storage     │
//! │  (handlers.rs)  │───▶│ (plan_ops,      │───▶│  (FileStorage)  │
//! │                 │    │  theme_ops)     │    │                 │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//!   display wrappers       domain values          one file per key
//! ```
//!
//! # Examples
//!
//! ```rust,no_run
//! use kinetic_core::{params::GeneratePlan, PlannerBuilder};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let planner = PlannerBuilder::new()
//!     .with_data_dir(Some("/tmp/kinetic"))
//!     .build()
//!     .await?;
//!
//! let result = planner
//!     .generate_plan_result(&GeneratePlan::default(), true)
//!     .await?;
//! println!("{result}");
//! # Ok(())
//! # }
//! ```

use std::path::{Path, PathBuf};

use tokio::task;

use crate::{
    error::{KineticError, Result},
    storage::FileStorage,
};

pub mod builder;
pub mod handlers;
pub mod plan_ops;
pub mod theme_ops;


pub use builder::PlannerBuilder;

/// Entry point for plan and theme operations backed by a data directory.
#[derive(Debug, Clone)]
pub struct Planner {
    pub(crate) data_dir: PathBuf,
}

impl Planner {
    pub(crate) fn new(data_dir: PathBuf) -> Self {
        Self { data_dir }
    }

    /// Directory holding the storage files.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// Runs `work` against a freshly opened file storage on the blocking pool.
    pub(crate) async fn with_storage<T, F>(&self, work: F) -> Result<T>
    where
        T: Send + 'static,
        F: FnOnce(FileStorage) -> Result<T> + Send + 'static,
    {
        let data_dir = self.data_dir.clone();

        task::spawn_blocking(move || {
            let storage = FileStorage::open(&data_dir)?;
            work(storage)
        })
        .await
        .map_err(|e| KineticError::configuration(format!("Task join error: {e}")))?
    }
}
