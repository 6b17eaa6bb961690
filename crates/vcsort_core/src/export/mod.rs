//! Ranking export.
//!
//! The current order is exported as comma-separated text that spreadsheet
//! tools open directly.

mod csv;

pub use self::csv::{
    csv_row, escape_field, format_csv, quote_field, write_csv, ExportError, ExportResult,
    CSV_FILE_NAME, CSV_HEADERS,
};
