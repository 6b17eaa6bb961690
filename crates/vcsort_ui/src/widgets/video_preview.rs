//! Hover-to-play video previews.
//!
//! Each card gets a muted, looping preview that plays while the cursor is
//! over it. Playback state is cached here and never read back from the
//! player on the UI thread.
//!
//! Real playback needs the `video-preview` feature (GStreamer). Without it
//! the card shows a framed placeholder naming the media file.

#[cfg(feature = "video-preview")]
use std::collections::{HashMap, HashSet};
use std::path::{Path, PathBuf};

use iced::widget::{container, text};
use iced::{Background, Border, Element, Length, Theme};

use vcsort_core::models::{MediaSource, VideoItem};

use crate::app::Message;
use crate::theme::{colors, font, spacing};

/// Height of the preview frame on every card.
pub const PREVIEW_HEIGHT: f32 = 150.0;

/// An opened preview and its cached pause flag.
#[cfg(feature = "video-preview")]
struct PreviewPlayer {
    video: iced_video_player::Video,
    is_paused: bool,
}

/// Preview players for the cards in the working list.
#[derive(Default)]
pub struct PreviewState {
    /// Folder web-root `src` paths resolve against.
    media_root: PathBuf,
    /// Card whose preview should be playing.
    playing: Option<String>,
    /// Players are opened on first hover.
    #[cfg(feature = "video-preview")]
    players: HashMap<String, PreviewPlayer>,
    /// Items whose media failed to open; not retried.
    #[cfg(feature = "video-preview")]
    unavailable: HashSet<String>,
}

impl PreviewState {
    pub fn new(media_root: impl Into<PathBuf>) -> Self {
        Self {
            media_root: media_root.into(),
            ..Self::default()
        }
    }

    pub fn media_root(&self) -> &Path {
        &self.media_root
    }

    pub fn playing(&self) -> Option<&str> {
        self.playing.as_deref()
    }

    pub fn is_playing(&self, id: &str) -> bool {
        self.playing.as_deref() == Some(id)
    }

    /// Start `item`'s preview, pausing the one that played before.
    pub fn play(&mut self, item: &VideoItem) {
        if self.is_playing(&item.id) {
            return;
        }
        if let Some(previous) = self.playing.take() {
            self.pause(&previous);
        }
        self.resume(item);
        self.playing = Some(item.id.clone());
    }

    /// Pause `id` if it is the playing preview.
    pub fn stop(&mut self, id: &str) {
        if self.is_playing(id) {
            self.pause(id);
            self.playing = None;
        }
    }

    /// Drop every player; the working list was replaced.
    pub fn clear(&mut self) {
        self.playing = None;
        #[cfg(feature = "video-preview")]
        {
            self.players.clear();
            self.unavailable.clear();
        }
    }

    #[cfg(feature = "video-preview")]
    pub fn is_unavailable(&self, id: &str) -> bool {
        self.unavailable.contains(id)
    }

    #[cfg(not(feature = "video-preview"))]
    pub fn is_unavailable(&self, _id: &str) -> bool {
        false
    }

    #[cfg(feature = "video-preview")]
    fn resume(&mut self, item: &VideoItem) {
        if self.unavailable.contains(&item.id) {
            return;
        }
        if !self.players.contains_key(&item.id) {
            match open_player(&item.media_source(&self.media_root)) {
                Ok(video) => {
                    tracing::debug!("Opened preview for {}", item.id);
                    self.players.insert(
                        item.id.clone(),
                        PreviewPlayer {
                            video,
                            is_paused: true,
                        },
                    );
                }
                Err(e) => {
                    tracing::warn!("No preview for {}: {}", item.id, e);
                    self.unavailable.insert(item.id.clone());
                    return;
                }
            }
        }
        if let Some(player) = self.players.get_mut(&item.id) {
            if player.is_paused {
                player.video.set_paused(false);
                player.is_paused = false;
            }
        }
    }

    #[cfg(not(feature = "video-preview"))]
    fn resume(&mut self, _item: &VideoItem) {}

    #[cfg(feature = "video-preview")]
    fn pause(&mut self, id: &str) {
        if let Some(player) = self.players.get_mut(id) {
            if !player.is_paused {
                player.video.set_paused(true);
                player.is_paused = true;
            }
        }
    }

    #[cfg(not(feature = "video-preview"))]
    fn pause(&mut self, _id: &str) {}
}

/// Open a muted, looping player, paused until hovered.
#[cfg(feature = "video-preview")]
fn open_player(source: &MediaSource) -> Result<iced_video_player::Video, String> {
    let url = match source {
        MediaSource::Url(raw) => url::Url::parse(raw).map_err(|e| e.to_string())?,
        MediaSource::File(path) => {
            let absolute = std::path::absolute(path).map_err(|e| e.to_string())?;
            url::Url::from_file_path(&absolute)
                .map_err(|()| format!("not a file path: {}", absolute.display()))?
        }
    };

    let mut video = iced_video_player::Video::new(&url).map_err(|e| e.to_string())?;
    video.set_looping(true);
    video.set_muted(true);
    video.set_paused(true);
    Ok(video)
}

/// Preview frame for one card.
pub fn view<'a>(state: &'a PreviewState, item: &'a VideoItem) -> Element<'a, Message> {
    if let Some(player) = player_view(state, &item.id) {
        return player;
    }

    let label = if state.is_unavailable(&item.id) {
        "Preview unavailable".to_string()
    } else {
        match item.media_source(state.media_root()) {
            MediaSource::Url(url) => url,
            MediaSource::File(path) => path.display().to_string(),
        }
    };

    let playing = state.is_playing(&item.id);
    container(text(label).size(font::SM).color(colors::TEXT_MUTED))
        .padding(spacing::SM)
        .center_x(Length::Fill)
        .center_y(Length::Fixed(PREVIEW_HEIGHT))
        .style(move |_theme: &Theme| container::Style {
            background: Some(Background::Color(colors::BADGE_BG)),
            border: Border {
                color: if playing { colors::PRIMARY } else { colors::BORDER },
                width: 1.0,
                radius: 4.0.into(),
            },
            ..Default::default()
        })
        .into()
}

#[cfg(feature = "video-preview")]
fn player_view<'a>(state: &'a PreviewState, id: &str) -> Option<Element<'a, Message>> {
    let player = state.players.get(id)?;
    Some(
        iced_video_player::VideoPlayer::new(&player.video)
            .width(Length::Fill)
            .height(Length::Fixed(PREVIEW_HEIGHT))
            .into(),
    )
}

#[cfg(not(feature = "video-preview"))]
fn player_view<'a>(_state: &'a PreviewState, _id: &str) -> Option<Element<'a, Message>> {
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: &str) -> VideoItem {
        VideoItem::from_entry(id, "VID1.mp4", "")
    }

    #[test]
    fn play_switches_between_cards() {
        let mut state = PreviewState::new("public");
        state.play(&item("/a.mp4"));
        assert_eq!(state.playing(), Some("/a.mp4"));

        state.play(&item("/b.mp4"));
        assert_eq!(state.playing(), Some("/b.mp4"));
        assert!(!state.is_playing("/a.mp4"));
    }

    #[test]
    fn stop_only_affects_the_playing_card() {
        let mut state = PreviewState::new("public");
        state.play(&item("/a.mp4"));
        state.stop("/b.mp4");
        assert_eq!(state.playing(), Some("/a.mp4"));

        state.stop("/a.mp4");
        assert_eq!(state.playing(), None);
    }

    #[test]
    fn clear_stops_playback() {
        let mut state = PreviewState::new("public");
        state.play(&item("/a.mp4"));
        state.clear();
        assert_eq!(state.playing(), None);
        assert_eq!(state.media_root(), Path::new("public"));
    }
}
