//! Filename metadata parser.
//!
//! Simulation videos are named after the parameters that produced them:
//!
//! ```text
//! /swarm-videos//111407.893-PM-25-Aug-2025_vision=5.0_minsep=1.0_maxalign=2_maxcohere=3_maxsep=4_population=40.mp4
//! ```
//!
//! - Segment 0 holds the capture time after a `//` marker
//!   (`HHMMSS.mmm-AM|PM-DD-Mon-YYYY`).
//! - Segments 1-6 hold `key=value` pairs in a fixed order.
//!
//! Parsing never fails as a whole: each field that cannot be decoded becomes
//! a `?` placeholder.

mod capture_time;
mod filename;

pub use capture_time::{format_capture_time, parse_capture_time};
pub use filename::{parse_filename, FilenameMetadata, KNOWN_PREFIXES};
