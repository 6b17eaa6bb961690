//! Configuration management for Video Complexity Sorter.
//!
//! This module provides:
//! - TOML-based configuration with logical sections
//! - Atomic file writes (write to temp, then rename)
//! - Section-level updates (only changed section is modified)
//! - Validation on load with automatic defaults
//!
//! # Example
//!
//! ```no_run
//! use vcsort_core::config::{ConfigManager, ConfigSection};
//!
//! // Create manager and load (or create default) config
//! let mut config = ConfigManager::new(".config/settings.toml");
//! config.load_or_create().unwrap();
//!
//! // Read settings
//! println!("Dataset: {}", config.settings().paths.dataset);
//!
//! // Modify a setting
//! config.settings_mut().experiment.sample_size = 6;
//!
//! // Save just the experiment section atomically
//! config.update_section(ConfigSection::Experiment).unwrap();
//! ```

mod manager;
mod settings;

pub use manager::{ConfigError, ConfigManager, ConfigResult};
pub use settings::{ConfigSection, ExperimentSettings, LoggingSettings, PathSettings, Settings};
