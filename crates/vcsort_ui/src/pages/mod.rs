//! Full-window views.

pub mod sorter;
pub mod status;
