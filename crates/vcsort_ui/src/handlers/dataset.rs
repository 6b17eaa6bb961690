//! Startup dataset loading handlers.

use iced::Task;

use vcsort_core::dataset::{load_dataset, DatasetReport, DatasetSource};
use vcsort_core::ranking::Session;

use crate::app::{App, Message, Notice};

impl App {
    /// Start loading the configured dataset.
    pub fn load_dataset(&self) -> Task<Message> {
        let source = DatasetSource::from_setting(&self.settings.paths.dataset);
        let prefix = self.settings.paths.public_prefix.clone();

        Task::perform(
            async move {
                load_dataset(&source, &prefix)
                    .await
                    .map_err(|e| e.to_string())
            },
            Message::DatasetLoaded,
        )
    }

    /// Handle the finished dataset load.
    ///
    /// Failure is terminal: the error view stays up for the rest of the run.
    pub fn handle_dataset_loaded(&mut self, result: Result<DatasetReport, String>) {
        let report = match result {
            Ok(report) => report,
            Err(e) => {
                tracing::error!("Dataset load failed: {}", e);
                self.load_error = Some(e);
                return;
            }
        };

        if !report.rejected.is_empty() {
            self.notice = Some(Notice::Warning(report.summary()));
        }

        let experiment = &self.settings.experiment;
        self.session = Some(Session::start(
            report.items,
            experiment.sample_size,
            experiment.start_in_experiment,
            &mut rand::thread_rng(),
        ));
    }
}
