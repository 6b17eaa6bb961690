//! Message handlers.
//!
//! Each module adds `impl App` methods for one area of the application:
//! startup loading, list ranking, card previews, CSV export and email
//! delivery.

mod dataset;
mod email;
mod export;
mod preview;
mod ranking;
