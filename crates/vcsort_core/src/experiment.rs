//! Experiment subset selection.
//!
//! An experiment ranks a small random sample of the full dataset. The sample is
//! randomized twice: once to choose which videos take part, and again to pick
//! the order they are first presented in.

use rand::Rng;
use thiserror::Error;

use crate::models::VideoItem;
use crate::shuffle::shuffled;

/// Number of videos in one experiment.
pub const DEFAULT_SAMPLE_SIZE: usize = 5;

/// Errors from experiment selection.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ExperimentError {
    #[error("An experiment needs {required} videos but only {available} are loaded")]
    PoolTooSmall { required: usize, available: usize },
}

/// Whether a pool can supply an experiment of `sample_size` videos.
pub fn can_draw(pool: &[VideoItem], sample_size: usize) -> bool {
    pool.len() >= sample_size
}

/// Draw `sample_size` distinct videos from `pool` in random order.
///
/// Never returns a short list: a pool smaller than the sample is an error.
pub fn draw_experiment<R: Rng + ?Sized>(
    pool: &[VideoItem],
    sample_size: usize,
    rng: &mut R,
) -> Result<Vec<VideoItem>, ExperimentError> {
    if !can_draw(pool, sample_size) {
        return Err(ExperimentError::PoolTooSmall {
            required: sample_size,
            available: pool.len(),
        });
    }

    let mut picked = shuffled(pool, rng);
    picked.truncate(sample_size);
    let subset = shuffled(&picked, rng);

    tracing::debug!("Drew {} of {} videos for experiment", subset.len(), pool.len());
    Ok(subset)
}

/// A shuffled copy of the entire pool.
pub fn reset_to_full<R: Rng + ?Sized>(pool: &[VideoItem], rng: &mut R) -> Vec<VideoItem> {
    shuffled(pool, rng)
}
