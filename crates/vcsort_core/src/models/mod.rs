//! Data models for Video Complexity Sorter.
//!
//! This module contains the core data structures used throughout the application:
//! - `VideoItem`: a rankable video with a stable identity
//! - `MediaSource`: where a video plays from
//! - `SimulationParameters`: values decoded from an encoded filename
//! - `LayoutMode`: list presentation flag

mod enums;
mod params;
mod video;

pub use enums::LayoutMode;
pub use params::{SimulationParameters, PARAMETER_LABELS, PLACEHOLDER};
pub use video::{extract_video_label, MediaSource, VideoItem, UNKNOWN_VIDEO_NAME};
