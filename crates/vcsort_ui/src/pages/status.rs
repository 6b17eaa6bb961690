//! Loading and load-failure views.

use iced::widget::{center, column, text};
use iced::{Alignment, Element};

use crate::app::Message;
use crate::theme::{colors, font, spacing};

/// Shown while the dataset is being read.
pub fn loading_view<'a>(source: &str) -> Element<'a, Message> {
    center(
        column![
            text("Loading videos...").size(font::LG),
            text(format!("Reading {}", source))
                .size(font::SM)
                .color(colors::TEXT_SECONDARY),
        ]
        .spacing(spacing::SM)
        .align_x(Alignment::Center),
    )
    .into()
}

/// Shown when the dataset could not be loaded. There is no way back from here.
pub fn error_view<'a>(source: &str, error: &str) -> Element<'a, Message> {
    center(
        column![
            text("Could not load the video dataset").size(font::HEADER),
            text(format!("Source: {}", source))
                .size(font::NORMAL)
                .color(colors::TEXT_SECONDARY),
            text(error.to_string()).size(font::NORMAL),
            text("Check [paths] dataset in .config/settings.toml and restart.")
                .size(font::SM)
                .color(colors::TEXT_MUTED),
        ]
        .spacing(spacing::SM)
        .align_x(Alignment::Center),
    )
    .padding(spacing::XL)
    .into()
}
