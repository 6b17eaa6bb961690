//! A ranking session: the loaded pool plus the list being ranked.

use rand::Rng;

use super::list::RankedList;
use crate::experiment::{can_draw, draw_experiment, reset_to_full, ExperimentError};
use crate::models::{LayoutMode, VideoItem};

/// State shared by every view of one ranking session.
///
/// The pool is fixed once loaded; only the working list changes.
#[derive(Debug, Clone)]
pub struct Session {
    /// Full dataset, never mutated.
    pool: Vec<VideoItem>,
    /// Working list being ranked.
    list: RankedList,
    /// True while the working list is an experiment subset.
    experiment_mode: bool,
    /// Number of videos per experiment.
    sample_size: usize,
    /// Presentation flag.
    layout: LayoutMode,
}

impl Session {
    /// Create a session with an empty working list.
    ///
    /// A sample size of zero is raised to one.
    pub fn new(pool: Vec<VideoItem>, sample_size: usize) -> Self {
        if sample_size == 0 {
            tracing::warn!("Experiment sample size 0 is invalid; using 1");
        }
        Self {
            pool,
            list: RankedList::default(),
            experiment_mode: false,
            sample_size: sample_size.max(1),
            layout: LayoutMode::default(),
        }
    }

    /// Create a session and fill the working list.
    ///
    /// With `start_in_experiment` and a large enough pool this draws an
    /// experiment; otherwise the list is a shuffled copy of the whole pool.
    pub fn start<R: Rng + ?Sized>(
        pool: Vec<VideoItem>,
        sample_size: usize,
        start_in_experiment: bool,
        rng: &mut R,
    ) -> Self {
        let mut session = Self::new(pool, sample_size);
        if start_in_experiment && session.can_start_experiment() {
            if let Err(e) = session.start_experiment(rng) {
                tracing::warn!("Could not draw the startup experiment: {}", e);
                session.reset_to_full(rng);
            }
        } else {
            if start_in_experiment {
                tracing::warn!(
                    "Only {} videos loaded, need {} for an experiment; showing the full dataset",
                    session.pool.len(),
                    session.sample_size
                );
            }
            session.reset_to_full(rng);
        }
        session
    }

    pub fn pool(&self) -> &[VideoItem] {
        &self.pool
    }

    pub fn list(&self) -> &RankedList {
        &self.list
    }

    pub fn list_mut(&mut self) -> &mut RankedList {
        &mut self.list
    }

    pub fn is_experiment_mode(&self) -> bool {
        self.experiment_mode
    }

    pub fn sample_size(&self) -> usize {
        self.sample_size
    }

    pub fn layout(&self) -> LayoutMode {
        self.layout
    }

    pub fn toggle_layout(&mut self) {
        self.layout = self.layout.toggled();
    }

    /// Whether the pool can supply an experiment.
    pub fn can_start_experiment(&self) -> bool {
        can_draw(&self.pool, self.sample_size)
    }

    /// Whether returning to the full dataset would change the list size.
    pub fn can_reset(&self) -> bool {
        self.experiment_mode && self.pool.len() > self.list.len()
    }

    /// Replace the working list with a fresh experiment subset.
    pub fn start_experiment<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<(), ExperimentError> {
        let subset = draw_experiment(&self.pool, self.sample_size, rng)?;
        self.list.initialize(subset);
        self.experiment_mode = true;
        tracing::info!("Started experiment with {} videos", self.list.len());
        Ok(())
    }

    /// Replace the working list with the whole pool, shuffled.
    pub fn reset_to_full<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.list.initialize(reset_to_full(&self.pool, rng));
        self.experiment_mode = false;
        tracing::info!("Showing full dataset ({} videos)", self.list.len());
    }
}
