//! Settings struct with TOML-based sections.
//!
//! Settings are organized into logical sections that map to TOML tables.
//! Each section can be updated independently for atomic section-level updates.

use serde::{Deserialize, Serialize};

use crate::email::EmailConfig;
use crate::experiment::DEFAULT_SAMPLE_SIZE;
use crate::logging::LogLevel;

/// Root settings structure containing all configuration sections.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Settings {
    /// Path-related settings.
    #[serde(default)]
    pub paths: PathSettings,

    /// Experiment sampling.
    #[serde(default)]
    pub experiment: ExperimentSettings,

    /// Email delivery identifiers.
    #[serde(default)]
    pub email: EmailConfig,

    /// Logging configuration.
    #[serde(default)]
    pub logging: LoggingSettings,
}

/// Config file sections.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigSection {
    Paths,
    Experiment,
    Email,
    Logging,
}

impl ConfigSection {
    /// All sections, in file order.
    pub const ALL: [ConfigSection; 4] = [
        ConfigSection::Paths,
        ConfigSection::Experiment,
        ConfigSection::Email,
        ConfigSection::Logging,
    ];

    /// TOML table name.
    pub fn table_name(&self) -> &'static str {
        match self {
            ConfigSection::Paths => "paths",
            ConfigSection::Experiment => "experiment",
            ConfigSection::Email => "email",
            ConfigSection::Logging => "logging",
        }
    }

    /// Comment written above the table.
    pub fn comment(&self) -> &'static str {
        match self {
            ConfigSection::Paths => "Dataset location and output directories",
            ConfigSection::Experiment => "Random experiment sampling",
            ConfigSection::Email => "Email delivery (EmailJS identifiers)",
            ConfigSection::Logging => "Logging configuration",
        }
    }
}

impl Settings {
    /// Replace values that cannot be used with their defaults.
    ///
    /// Returns true when anything changed.
    pub fn sanitize(&mut self) -> bool {
        if self.experiment.sample_size == 0 {
            tracing::warn!(
                "experiment.sample_size must be at least 1; using {}",
                DEFAULT_SAMPLE_SIZE
            );
            self.experiment.sample_size = DEFAULT_SAMPLE_SIZE;
            return true;
        }
        false
    }
}

/// Dataset and directory settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PathSettings {
    /// Dataset JSON: file path or http(s) URL.
    #[serde(default = "default_dataset")]
    pub dataset: String,

    /// Prefix removed from every dataset `id`.
    #[serde(default = "default_public_prefix")]
    pub public_prefix: String,

    /// Folder that dataset `src` paths are relative to.
    #[serde(default = "default_media_root")]
    pub media_root: String,

    /// Folder the CSV save dialog opens in.
    #[serde(default = "default_export_folder")]
    pub export_folder: String,

    /// Folder for log files.
    #[serde(default = "default_logs_folder")]
    pub logs_folder: String,
}

fn default_dataset() -> String {
    "json-videos.JSON".to_string()
}

fn default_public_prefix() -> String {
    "../public".to_string()
}

fn default_media_root() -> String {
    "public".to_string()
}

fn default_export_folder() -> String {
    ".".to_string()
}

fn default_logs_folder() -> String {
    ".logs".to_string()
}

impl Default for PathSettings {
    fn default() -> Self {
        Self {
            dataset: default_dataset(),
            public_prefix: default_public_prefix(),
            media_root: default_media_root(),
            export_folder: default_export_folder(),
            logs_folder: default_logs_folder(),
        }
    }
}

/// Experiment sampling settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExperimentSettings {
    /// Videos per experiment.
    #[serde(default = "default_sample_size")]
    pub sample_size: usize,

    /// Draw an experiment right after loading.
    #[serde(default = "default_true")]
    pub start_in_experiment: bool,
}

fn default_sample_size() -> usize {
    DEFAULT_SAMPLE_SIZE
}

fn default_true() -> bool {
    true
}

impl Default for ExperimentSettings {
    fn default() -> Self {
        Self {
            sample_size: default_sample_size(),
            start_in_experiment: true,
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingSettings {
    /// Default level when RUST_LOG is unset.
    #[serde(default)]
    pub level: LogLevel,

    /// Also write a daily log file to the logs folder.
    #[serde(default = "default_true")]
    pub file_logging: bool,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: LogLevel::Info,
            file_logging: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_gets_defaults() {
        let settings: Settings = toml::from_str("").unwrap();
        assert_eq!(settings.paths.dataset, "json-videos.JSON");
        assert_eq!(settings.experiment.sample_size, 5);
        assert!(settings.experiment.start_in_experiment);
        assert!(settings.email.is_placeholder());
        assert_eq!(settings.logging.level, LogLevel::Info);
    }

    #[test]
    fn partial_section_keeps_other_defaults() {
        let settings: Settings =
            toml::from_str("[experiment]\nsample_size = 3\n[logging]\nlevel = \"debug\"\n").unwrap();
        assert_eq!(settings.experiment.sample_size, 3);
        assert!(settings.experiment.start_in_experiment);
        assert_eq!(settings.logging.level, LogLevel::Debug);
    }

    #[test]
    fn sanitize_raises_zero_sample_size() {
        let mut settings: Settings = toml::from_str("[experiment]\nsample_size = 0\n").unwrap();
        assert!(settings.sanitize());
        assert_eq!(settings.experiment.sample_size, DEFAULT_SAMPLE_SIZE);

        let mut valid = Settings::default();
        valid.experiment.sample_size = 1;
        assert!(!valid.sanitize());
        assert_eq!(valid.experiment.sample_size, 1);
    }

    #[test]
    fn media_root_defaults_to_public() {
        let settings: Settings = toml::from_str("").unwrap();
        assert_eq!(settings.paths.media_root, "public");
    }

    #[test]
    fn table_names_are_unique() {
        let mut names: Vec<&str> = ConfigSection::ALL.iter().map(|s| s.table_name()).collect();
        names.sort();
        names.dedup();
        assert_eq!(names.len(), ConfigSection::ALL.len());
    }
}
