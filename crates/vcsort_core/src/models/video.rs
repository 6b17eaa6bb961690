//! Rankable video descriptor.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::parser::{parse_filename, FilenameMetadata};

/// Label used when a filename carries no `VID<digits>` token.
pub const UNKNOWN_VIDEO_NAME: &str = "Unknown Video";

/// Where a video's media can be opened from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MediaSource {
    /// Remote http(s) URL, used as is.
    Url(String),
    /// Local file.
    File(PathBuf),
}

/// A video in the dataset or in a ranking session.
///
/// `id` never changes once the item is built; ranking only moves items.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VideoItem {
    /// Unique identifier (media path with the public prefix removed).
    pub id: String,
    /// Short label, e.g. `VID0042`.
    pub name: String,
    /// Full original filename.
    pub original_name: String,
    /// Path or URL of the media.
    pub src: String,
    /// Externally supplied ground-truth rank, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_complexity: Option<String>,
}

impl VideoItem {
    /// Build an item from a dataset entry.
    ///
    /// The first occurrence of `public_prefix` is removed from `path` to form
    /// both `id` and `src`.
    pub fn from_entry(path: &str, original_name: &str, public_prefix: &str) -> Self {
        let cleaned = if public_prefix.is_empty() {
            path.to_string()
        } else {
            path.replacen(public_prefix, "", 1)
        };

        Self {
            id: cleaned.clone(),
            name: extract_video_label(original_name)
                .unwrap_or(UNKNOWN_VIDEO_NAME)
                .to_string(),
            original_name: original_name.to_string(),
            src: cleaned,
            target_complexity: None,
        }
    }

    /// Attach a ground-truth complexity rank.
    pub fn with_target_complexity(mut self, rank: impl Into<String>) -> Self {
        self.target_complexity = Some(rank.into());
        self
    }

    /// Target complexity for display, empty when absent.
    pub fn target_complexity_display(&self) -> &str {
        self.target_complexity.as_deref().unwrap_or("")
    }

    /// Resolve `src` for playback.
    ///
    /// Web-root paths such as `/swarm-videos/a.mp4` are taken relative to
    /// `media_root`.
    pub fn media_source(&self, media_root: &Path) -> MediaSource {
        if self.src.starts_with("http://") || self.src.starts_with("https://") {
            return MediaSource::Url(self.src.clone());
        }
        MediaSource::File(media_root.join(self.src.trim_start_matches('/')))
    }

    /// Decode the simulation parameters from this item's media path.
    pub fn metadata(&self) -> FilenameMetadata {
        parse_filename(&self.src)
    }
}

/// Find the first `VID` token followed by at least one digit.
pub fn extract_video_label(filename: &str) -> Option<&str> {
    filename.match_indices("VID").find_map(|(start, _)| {
        let digits = filename[start + 3..]
            .bytes()
            .take_while(u8::is_ascii_digit)
            .count();
        (digits > 0).then(|| &filename[start..start + 3 + digits])
    })
}
