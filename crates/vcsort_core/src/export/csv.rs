//! CSV formatting of a ranked list.

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::models::VideoItem;

/// Default export file name.
pub const CSV_FILE_NAME: &str = "video_complexity_order.csv";

/// Header row, in column order.
pub const CSV_HEADERS: [&str; 9] = [
    "Rank",
    "Video Name",
    "Target Complexity Rank",
    "Vision",
    "Minimum separation",
    "Maximum alignment turn",
    "Maximum coherence turn",
    "Maximum separation",
    "Population",
];

/// Errors that can occur while exporting.
#[derive(Error, Debug)]
pub enum ExportError {
    #[error("Failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Result type for export operations.
pub type ExportResult<T> = Result<T, ExportError>;

/// Always wrap in double quotes, doubling embedded quotes.
pub fn quote_field(value: &str) -> String {
    format!("\"{}\"", value.replace('"', "\"\""))
}

/// Quote only when the value would otherwise break the row.
pub fn escape_field(value: &str) -> String {
    if value.contains([',', '"', '\n', '\r']) {
        quote_field(value)
    } else {
        value.to_string()
    }
}

/// One data row for `item` at `rank`.
pub fn csv_row(rank: usize, item: &VideoItem) -> String {
    let metadata = item.metadata();
    let mut fields = Vec::with_capacity(CSV_HEADERS.len());
    fields.push(rank.to_string());
    fields.push(quote_field(&item.name));
    fields.push(escape_field(item.target_complexity_display()));
    fields.extend(metadata.values().iter().map(|v| escape_field(v)));
    fields.join(",")
}

/// Header plus one row per item in current order, newline separated.
pub fn format_csv(items: &[VideoItem]) -> String {
    let mut lines = Vec::with_capacity(items.len() + 1);
    lines.push(CSV_HEADERS.join(","));
    lines.extend(
        items
            .iter()
            .enumerate()
            .map(|(idx, item)| csv_row(idx + 1, item)),
    );
    lines.join("\n")
}

/// Write the CSV for `items` to `path`.
///
/// Writes to a temp file first, then renames. Returns the number of data rows.
pub fn write_csv(path: &Path, items: &[VideoItem]) -> ExportResult<usize> {
    let content = format_csv(items);
    let wrap = |source: io::Error| ExportError::Write {
        path: path.to_path_buf(),
        source,
    };

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(wrap)?;
    }

    let temp_path = path.with_extension("csv.tmp");
    {
        let mut file = fs::File::create(&temp_path).map_err(wrap)?;
        file.write_all(content.as_bytes()).map_err(wrap)?;
        file.sync_all().map_err(wrap)?;
    }
    fs::rename(&temp_path, path).map_err(wrap)?;

    tracing::info!("Exported {} ranked videos to {}", items.len(), path.display());
    Ok(items.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn video(path: &str, name: &str) -> VideoItem {
        let mut item = VideoItem::from_entry(path, "x.mp4", "");
        item.name = name.to_string();
        item
    }

    #[test]
    fn header_row_is_fixed() {
        let csv = format_csv(&[]);
        assert_eq!(
            csv,
            "Rank,Video Name,Target Complexity Rank,Vision,Minimum separation,Maximum alignment turn,Maximum coherence turn,Maximum separation,Population"
        );
    }

    #[test]
    fn rows_follow_current_order() {
        let items = vec![
            video(
                "/v//111407.893-PM-25-Aug-2025_vision=5.0_minsep=1_maxalign=2_maxcohere=3_maxsep=4_population=40.mp4",
                "VID1",
            )
            .with_target_complexity("2"),
            video("/v/plain.mp4", "VID2"),
        ];
        let csv = format_csv(&items);
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[1], "1,\"VID1\",2,5.0,1,2,3,4,40");
        assert_eq!(lines[2], "2,\"VID2\",,?,?,?,?,?,?");
    }

    #[test]
    fn embedded_quotes_are_doubled() {
        let items = vec![video("/a.mp4", "Vid \"A\""), video("/b.mp4", "B")];
        let csv = format_csv(&items);
        let row = csv.lines().nth(1).unwrap();
        assert!(row.starts_with("1,\"Vid \"\"A\"\"\","));
    }

    #[test]
    fn awkward_parameter_values_are_quoted() {
        assert_eq!(escape_field("1,5"), "\"1,5\"");
        assert_eq!(escape_field("plain"), "plain");
        assert_eq!(quote_field("plain"), "\"plain\"");
    }

    #[test]
    fn write_csv_creates_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("out").join(CSV_FILE_NAME);
        let items = vec![video("/a.mp4", "A"), video("/b.mp4", "B")];

        let rows = write_csv(&path, &items).unwrap();
        assert_eq!(rows, 2);

        let written = fs::read_to_string(&path).unwrap();
        assert_eq!(written, format_csv(&items));
        assert!(!path.with_extension("csv.tmp").exists());
    }
}
