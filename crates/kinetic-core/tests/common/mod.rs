#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use kinetic_core::{carousel::SlideSurface, Planner, PlannerBuilder};
use tempfile::TempDir;

/// Helper function to create a test planner over a temporary data directory
pub async fn create_test_planner() -> (TempDir, Planner) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let planner = PlannerBuilder::new()
        .with_data_dir(Some(temp_dir.path()))
        .build()
        .await
        .expect("Failed to create planner");
    (temp_dir, planner)
}

/// Slide deck whose markers stay observable after the carousel is moved into
/// a driver task.
#[derive(Clone)]
pub struct SharedDeck {
    pub active: Arc<Mutex<Vec<bool>>>,
}

impl SharedDeck {
    pub fn new(slides: usize) -> Self {
        Self {
            active: Arc::new(Mutex::new(vec![false; slides])),
        }
    }

    /// Indices currently marked active.
    pub fn marked(&self) -> Vec<usize> {
        self.active
            .lock()
            .expect("deck lock poisoned")
            .iter()
            .enumerate()
            .filter_map(|(index, active)| active.then_some(index))
            .collect()
    }
}

impl SlideSurface for SharedDeck {
    fn slide_count(&self) -> usize {
        self.active.lock().expect("deck lock poisoned").len()
    }

    fn set_active(&mut self, index: usize, active: bool) {
        self.active.lock().expect("deck lock poisoned")[index] = active;
    }
}
