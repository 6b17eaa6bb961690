//! Ranked list model.
//!
//! This module provides:
//! - `RankedList`: the ordered working list with identity-based reordering
//! - `Session`: the loaded pool, the working list and session-level flags

mod list;
mod session;

pub use list::{array_move, RankedList};
pub use session::Session;
