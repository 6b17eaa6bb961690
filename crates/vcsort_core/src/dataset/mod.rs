//! Startup dataset loading.
//!
//! The dataset is a JSON array of video descriptors:
//!
//! ```json
//! [
//!   { "id": "../public/swarm-videos//111407.893-PM-25-Aug-2025_vision=5.0_....mp4",
//!     "name": "VID0001_swarm.mp4",
//!     "correctComplexity": 3 }
//! ]
//! ```
//!
//! Every entry is checked against the schema (`id` and `name` strings are
//! required). Entries that fail are rejected individually and reported; only a
//! document that cannot be read or is not an array fails the whole load.

mod loader;
mod schema;

pub use loader::{load_dataset, DatasetSource};
pub use schema::{parse_dataset, DatasetReport, RejectedEntry};

use std::path::PathBuf;

use thiserror::Error;

/// Errors that make the whole dataset unusable.
#[derive(Error, Debug)]
pub enum DatasetError {
    #[error("Failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to fetch {url}: {source}")]
    Fetch {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("Fetching {url} returned HTTP status {status}")]
    Status { url: String, status: u16 },

    #[error("Dataset is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Dataset must be a JSON array of video entries")]
    NotAnArray,
}

/// Result type for dataset operations.
pub type DatasetResult<T> = Result<T, DatasetError>;
