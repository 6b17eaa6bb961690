//! Video Complexity Sorter - Main entry point
//!
//! This is the application entry point using iced. It handles:
//! - Configuration loading
//! - Application-level logging initialization
//! - Directory creation
//! - Application launch

use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use vcsort_core::config::ConfigManager;
use vcsort_core::logging::{init_tracing, init_tracing_with_file};

mod app;
mod handlers;
mod pages;
mod theme;
mod widgets;
mod windows;

use app::App;

/// Default config path: .config/settings.toml (relative to current working directory)
fn default_config_path() -> PathBuf {
    PathBuf::from(".config").join("settings.toml")
}

fn main() -> iced::Result {
    // Load configuration first (needed for logs directory path)
    let config_path = default_config_path();
    let mut config_manager = ConfigManager::new(&config_path);

    if let Err(e) = config_manager.load_or_create() {
        eprintln!("Warning: Failed to load config: {}. Using defaults.", e);
    }

    let logging = config_manager.settings().logging.clone();
    let _log_guard = if logging.file_logging {
        init_tracing_with_file(logging.level, &config_manager.logs_folder())
    } else {
        init_tracing(logging.level);
        None
    };

    tracing::info!("Video Complexity Sorter starting");
    tracing::info!("Config: {}", config_path.display());
    tracing::info!("Core version: {}", vcsort_core::version());

    if let Err(e) = config_manager.ensure_dirs_exist() {
        tracing::error!("Failed to create directories: {}", e);
    }

    let config = Arc::new(Mutex::new(config_manager));

    iced::application(move || App::new(Arc::clone(&config)), App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .subscription(App::subscription)
        .window_size((960.0, 800.0))
        .centered()
        .run()
}
