//! Custom widgets.

pub mod reorderable_list;
pub mod video_preview;
