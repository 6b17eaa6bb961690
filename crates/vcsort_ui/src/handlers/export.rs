//! CSV export handlers.

use std::path::PathBuf;

use iced::Task;

use vcsort_core::config::ConfigSection;
use vcsort_core::export::{write_csv, CSV_FILE_NAME};

use crate::app::{App, Message, Notice};

impl App {
    /// Ask where to save the ranking.
    pub fn export_csv(&self) -> Task<Message> {
        let folder = PathBuf::from(&self.settings.paths.export_folder);

        Task::perform(
            async move {
                rfd::AsyncFileDialog::new()
                    .set_title("Export Ranking as CSV")
                    .set_directory(&folder)
                    .set_file_name(CSV_FILE_NAME)
                    .add_filter("CSV Files", &["csv"])
                    .save_file()
                    .await
                    .map(|f| f.path().to_path_buf())
            },
            Message::ExportPathChosen,
        )
    }

    /// Write the current order to the chosen file.
    pub fn handle_export_path(&mut self, path: Option<PathBuf>) {
        let (Some(path), Some(session)) = (path, &self.session) else {
            return;
        };

        match write_csv(&path, session.list().items()) {
            Ok(rows) => {
                self.notice = Some(Notice::Success(format!(
                    "Exported {} videos to {}",
                    rows,
                    path.display()
                )));
                if let Some(folder) = path.parent() {
                    self.remember_export_folder(folder.to_string_lossy().to_string());
                }
            }
            Err(e) => {
                tracing::error!("CSV export failed: {}", e);
                self.notice = Some(Notice::Error(e.to_string()));
            }
        }
    }

    /// Open the next save dialog where this one ended.
    fn remember_export_folder(&mut self, folder: String) {
        if folder.is_empty() || folder == self.settings.paths.export_folder {
            return;
        }
        self.settings.paths.export_folder = folder.clone();

        let mut cfg = self.config();
        cfg.settings_mut().paths.export_folder = folder;
        if let Err(e) = cfg.update_section(ConfigSection::Paths) {
            tracing::warn!("Failed to save export folder: {}", e);
        }
    }
}
