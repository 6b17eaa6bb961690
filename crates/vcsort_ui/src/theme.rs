//! Theme configuration for Video Complexity Sorter.
//!
//! This module provides the iced theme and custom colors.

use iced::{Color, Theme};

/// Theme used by every view.
pub fn app_theme() -> Theme {
    Theme::Dark
}

/// Application theme colors.
pub mod colors {
    use super::Color;

    /// Card/panel background
    pub const CARD: Color = Color::from_rgb(0.14, 0.14, 0.14);

    /// Card background while another card is dragged over the list
    pub const CARD_IDLE: Color = Color::from_rgb(0.12, 0.12, 0.12);

    /// Card being dragged
    pub const CARD_DRAGGING: Color = Color::from_rgb(0.15, 0.18, 0.22);

    /// Primary accent color
    pub const PRIMARY: Color = Color::from_rgb(0.30, 0.50, 0.80);

    /// Drop indicator line
    pub const DROP_INDICATOR: Color = Color::from_rgb(0.3, 0.6, 1.0);

    /// Success banner background
    pub const SUCCESS: Color = Color::from_rgb(0.18, 0.35, 0.18);

    /// Warning banner background
    pub const WARNING: Color = Color::from_rgb(0.35, 0.35, 0.18);

    /// Error banner background
    pub const ERROR: Color = Color::from_rgb(0.35, 0.18, 0.18);

    /// Text secondary
    pub const TEXT_SECONDARY: Color = Color::from_rgb(0.53, 0.53, 0.53);

    /// Text muted
    pub const TEXT_MUTED: Color = Color::from_rgb(0.40, 0.40, 0.40);

    /// Border color
    pub const BORDER: Color = Color::from_rgb(0.25, 0.25, 0.25);

    /// Selected card border
    pub const SELECTED: Color = Color::from_rgb(0.24, 0.35, 0.50);

    /// Rank badge background
    pub const BADGE_BG: Color = Color::from_rgb(0.20, 0.20, 0.20);

    /// Dimmed backdrop behind modal dialogs
    pub const BACKDROP: Color = Color::from_rgba(0.0, 0.0, 0.0, 0.6);
}

/// Spacing constants.
pub mod spacing {
    /// Extra small spacing (4px)
    pub const XS: f32 = 4.0;
    /// Small spacing (8px)
    pub const SM: f32 = 8.0;
    /// Medium spacing (12px)
    pub const MD: f32 = 12.0;
    /// Large spacing (16px)
    pub const LG: f32 = 16.0;
    /// Extra large spacing (24px)
    pub const XL: f32 = 24.0;
}

/// Font sizes.
pub mod font {
    /// Small font size
    pub const SM: f32 = 11.0;
    /// Normal font size
    pub const NORMAL: f32 = 13.0;
    /// Medium font size
    pub const MD: f32 = 14.0;
    /// Large font size
    pub const LG: f32 = 16.0;
    /// Header font size
    pub const HEADER: f32 = 22.0;
}

/// Card width in the horizontal layout.
pub const GRID_CARD_WIDTH: f32 = 260.0;
