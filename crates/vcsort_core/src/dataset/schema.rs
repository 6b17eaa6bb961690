//! Per-entry validation of the dataset document.

use std::collections::HashSet;

use serde::Deserialize;
use serde_json::Value;

use super::{DatasetError, DatasetResult};
use crate::models::VideoItem;

/// Ground-truth rank as it may appear in the document.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum TargetRank {
    Number(serde_json::Number),
    Text(String),
}

impl TargetRank {
    fn into_string(self) -> String {
        match self {
            TargetRank::Number(n) => n.to_string(),
            TargetRank::Text(s) => s,
        }
    }
}

/// Schema of one dataset entry. Unknown keys are ignored.
#[derive(Debug, Deserialize)]
struct RawEntry {
    id: String,
    name: String,
    #[serde(default, rename = "correctComplexity")]
    correct_complexity: Option<TargetRank>,
}

/// An entry that failed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RejectedEntry {
    /// Position in the source array.
    pub index: usize,
    /// Why it was rejected.
    pub reason: String,
}

/// Outcome of validating a dataset document.
#[derive(Debug, Clone, Default)]
pub struct DatasetReport {
    /// Valid items, in document order.
    pub items: Vec<VideoItem>,
    /// Entries that were skipped.
    pub rejected: Vec<RejectedEntry>,
}

impl DatasetReport {
    /// Short human-readable summary.
    pub fn summary(&self) -> String {
        if self.rejected.is_empty() {
            format!("Loaded {} videos", self.items.len())
        } else {
            format!(
                "Loaded {} videos ({} malformed entries skipped)",
                self.items.len(),
                self.rejected.len()
            )
        }
    }
}

/// Validate a dataset document.
///
/// `public_prefix` is removed from each entry's `id` to form the item path.
pub fn parse_dataset(json: &str, public_prefix: &str) -> DatasetResult<DatasetReport> {
    let document: Value = serde_json::from_str(json)?;
    let Value::Array(entries) = document else {
        return Err(DatasetError::NotAnArray);
    };

    let mut report = DatasetReport::default();
    let mut seen = HashSet::new();

    for (index, value) in entries.into_iter().enumerate() {
        match validate_entry(value, public_prefix) {
            Ok(item) if !seen.insert(item.id.clone()) => {
                report.rejected.push(RejectedEntry {
                    index,
                    reason: format!("duplicate id '{}'", item.id),
                });
            }
            Ok(item) => report.items.push(item),
            Err(reason) => report.rejected.push(RejectedEntry { index, reason }),
        }
    }

    for rejected in &report.rejected {
        tracing::warn!("Skipping dataset entry {}: {}", rejected.index, rejected.reason);
    }

    Ok(report)
}

fn validate_entry(value: Value, public_prefix: &str) -> Result<VideoItem, String> {
    let raw: RawEntry = serde_json::from_value(value).map_err(|e| e.to_string())?;

    if raw.id.trim().is_empty() {
        return Err("empty id".to_string());
    }

    let mut item = VideoItem::from_entry(&raw.id, &raw.name, public_prefix);
    if item.id.is_empty() {
        return Err(format!("id '{}' is only the public prefix", raw.id));
    }
    if let Some(rank) = raw.correct_complexity {
        item = item.with_target_complexity(rank.into_string());
    }
    Ok(item)
}

#[cfg(test)]
mod tests {
    use super::*;

    const PREFIX: &str = "../public";

    #[test]
    fn valid_entries_become_items() {
        let json = r#"[
            {"id": "../public/videos//a_vision=1.mp4", "name": "VID0001_a.mp4"},
            {"id": "../public/videos//b.mp4", "name": "b.mp4", "correctComplexity": 4, "extra": true}
        ]"#;
        let report = parse_dataset(json, PREFIX).unwrap();

        assert!(report.rejected.is_empty());
        assert_eq!(report.items.len(), 2);
        assert_eq!(report.items[0].id, "/videos//a_vision=1.mp4");
        assert_eq!(report.items[0].name, "VID0001");
        assert_eq!(report.items[1].name, "Unknown Video");
        assert_eq!(report.items[1].target_complexity.as_deref(), Some("4"));
        assert_eq!(report.summary(), "Loaded 2 videos");
    }

    #[test]
    fn malformed_entries_are_reported() {
        let json = r#"[
            {"id": "/a.mp4", "name": "VID1"},
            {"name": "missing id"},
            {"id": 12, "name": "numeric id"},
            "not an object",
            {"id": "  ", "name": "blank"},
            {"id": "/a.mp4", "name": "duplicate"}
        ]"#;
        let report = parse_dataset(json, PREFIX).unwrap();

        assert_eq!(report.items.len(), 1);
        let indices: Vec<usize> = report.rejected.iter().map(|r| r.index).collect();
        assert_eq!(indices, vec![1, 2, 3, 4, 5]);
        assert!(report.rejected[4].reason.contains("duplicate"));
        assert!(report.summary().contains("5 malformed"));
    }

    #[test]
    fn string_target_rank_is_kept() {
        let json = r#"[{"id": "/a.mp4", "name": "VID1", "correctComplexity": "high"}]"#;
        let report = parse_dataset(json, PREFIX).unwrap();
        assert_eq!(report.items[0].target_complexity.as_deref(), Some("high"));
    }

    #[test]
    fn non_array_document_fails() {
        assert!(matches!(
            parse_dataset(r#"{"id": "/a.mp4"}"#, PREFIX),
            Err(DatasetError::NotAnArray)
        ));
    }

    #[test]
    fn invalid_json_fails() {
        assert!(matches!(parse_dataset("[{", PREFIX), Err(DatasetError::Json(_))));
    }

    #[test]
    fn empty_array_is_valid() {
        let report = parse_dataset("[]", PREFIX).unwrap();
        assert!(report.items.is_empty());
    }
}
