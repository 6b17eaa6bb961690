//! Decoding of encoded simulation filenames.

use chrono::NaiveDateTime;

use super::capture_time::{format_capture_time, parse_capture_time};
use crate::models::{SimulationParameters, PARAMETER_LABELS, PLACEHOLDER};

/// Path prefixes removed before parsing.
pub const KNOWN_PREFIXES: [&str; 2] = ["../public/", "../public"];

/// Marker that precedes the capture time token in segment 0.
const DATE_MARKER: &str = "//";

/// Everything that can be decoded from a filename.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FilenameMetadata {
    /// Capture time, `None` when the date token is absent or invalid.
    pub captured_at: Option<NaiveDateTime>,
    /// The six simulation parameters.
    pub params: SimulationParameters,
}

impl FilenameMetadata {
    /// Parameter values in fixed order.
    pub fn values(&self) -> [&str; 6] {
        self.params.values()
    }

    /// Capture time as `HH:MM:SS DD/MM/YY`, or the placeholder.
    pub fn captured_at_display(&self) -> String {
        self.captured_at
            .as_ref()
            .map(format_capture_time)
            .unwrap_or_else(|| PLACEHOLDER.to_string())
    }

    /// Multi-line description with one labelled value per line.
    pub fn description(&self) -> String {
        let mut lines = Vec::with_capacity(PARAMETER_LABELS.len() + 1);
        lines.push(format!("Date taken: {}", self.captured_at_display()));
        for (label, value) in PARAMETER_LABELS.iter().zip(self.values()) {
            lines.push(format!("{}: {}", label, value));
        }
        lines.join("\n")
    }
}

/// Parse a raw path or filename.
///
/// Pure and total: the same input always yields the same output, and input
/// without the expected structure yields placeholders instead of an error.
pub fn parse_filename(raw: &str) -> FilenameMetadata {
    let name = strip_known_prefix(raw);
    if name.is_empty() {
        return FilenameMetadata::default();
    }

    let segments: Vec<&str> = name.split('_').collect();

    let captured_at = segments
        .first()
        .and_then(|segment| segment.split(DATE_MARKER).nth(1))
        .and_then(parse_capture_time);

    let value = |idx: usize| segment_value(segments.get(idx).copied());

    let population = value(6);
    let population = match population.split('.').next() {
        Some(head) if !head.is_empty() => head.to_string(),
        _ => PLACEHOLDER.to_string(),
    };

    FilenameMetadata {
        captured_at,
        params: SimulationParameters {
            vision_range: value(1),
            min_separation: value(2),
            max_align_turn: value(3),
            max_cohere_turn: value(4),
            max_sep_turn: value(5),
            population,
        },
    }
}

fn strip_known_prefix(raw: &str) -> &str {
    KNOWN_PREFIXES
        .iter()
        .find_map(|prefix| raw.strip_prefix(prefix))
        .unwrap_or(raw)
}

/// Value between the first and second `=` of a `key=value` segment.
fn segment_value(segment: Option<&str>) -> String {
    segment
        .and_then(|s| s.split('=').nth(1))
        .filter(|v| !v.is_empty())
        .unwrap_or(PLACEHOLDER)
        .to_string()
}
