//! Main application module for Video Complexity Sorter.
//!
//! Holds the application state, the message type and the iced
//! `update`/`view`/`subscription` entry points. Message handling lives in
//! `handlers`, views live in `pages` and `windows`.

use std::collections::HashSet;
use std::path::PathBuf;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use iced::widget::{center, opaque, stack, text_editor};
use iced::{event, keyboard, mouse, window, Element, Event, Subscription, Task, Theme};

use vcsort_core::config::{ConfigManager, Settings};
use vcsort_core::dataset::DatasetReport;
use vcsort_core::email::{EmailForm, EmailJsClient};
use vcsort_core::ranking::Session;

use crate::theme::{self, colors};
use crate::widgets::video_preview::PreviewState;
use crate::{pages, windows};

/// All possible messages the application can receive.
#[derive(Debug, Clone)]
pub enum Message {
    // Startup
    DatasetLoaded(Result<DatasetReport, String>),

    // Header controls
    ToggleLayout,
    StartExperiment,
    ResetToFull,

    // Ranking
    Shuffle,
    Finalize,
    DragStart(String),
    CardEntered(String),
    CardExited(String),
    DragEnd,
    MoveSelectedUp,
    MoveSelectedDown,
    ToggleDetails(String),

    // Export
    ExportCsv,
    ExportPathChosen(Option<PathBuf>),

    // Email dialog
    OpenEmail,
    CloseEmail,
    EmailNameChanged(String),
    EmailAddressChanged(String),
    EmailNotesEdited(text_editor::Action),
    SendEmail,
    EmailSent(Result<(), String>),
}

/// Drag-and-drop state for the ranked list.
///
/// Items are tracked by id so a drop always resolves against the current
/// order, whatever happened to positions during the drag.
#[derive(Debug, Clone, Default)]
pub struct DragState {
    /// Item being dragged.
    pub dragging: Option<String>,
    /// Item currently under the cursor.
    pub hover: Option<String>,
}

/// One-line feedback shown above the list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    Success(String),
    Warning(String),
    Error(String),
}

impl Notice {
    pub fn text(&self) -> &str {
        match self {
            Notice::Success(text) | Notice::Warning(text) | Notice::Error(text) => text,
        }
    }
}

/// Email dialog state.
#[derive(Default)]
pub struct EmailDialogState {
    pub open: bool,
    pub form: EmailForm,
    /// Editor buffer for the notes; mirrored into `form.message`.
    pub notes: text_editor::Content,
    pub sending: bool,
    pub error: Option<String>,
}

/// Main application state.
pub struct App {
    pub config: Arc<Mutex<ConfigManager>>,
    /// Snapshot of the settings taken at startup.
    pub settings: Settings,

    /// Set once the dataset has loaded.
    pub session: Option<Session>,
    /// Terminal load failure.
    pub load_error: Option<String>,

    pub drag_state: DragState,
    /// Item moved by the Up/Down keys.
    pub selected_id: Option<String>,
    /// Items whose parameter panel is open.
    pub expanded: HashSet<String>,
    /// One-line feedback (load report, export result, email result).
    pub notice: Option<Notice>,
    /// Hover-to-play card previews.
    pub preview: PreviewState,

    pub email: EmailDialogState,
    pub mailer: EmailJsClient,
}

impl App {
    /// Build the application and start loading the dataset.
    pub fn new(config: Arc<Mutex<ConfigManager>>) -> (Self, Task<Message>) {
        let settings = lock_config(&config).settings().clone();
        let mailer = EmailJsClient::new(settings.email.clone());
        let preview = PreviewState::new(&settings.paths.media_root);

        if !mailer.is_configured() {
            tracing::warn!("Email identifiers are placeholders; sending is disabled");
        }

        let app = Self {
            config,
            settings,
            session: None,
            load_error: None,
            drag_state: DragState::default(),
            selected_id: None,
            expanded: HashSet::new(),
            notice: None,
            preview,
            email: EmailDialogState::default(),
            mailer,
        };

        let task = app.load_dataset();
        (app, task)
    }

    pub fn title(&self) -> String {
        match &self.session {
            Some(session) => format!(
                "Video Complexity Sorter ({} videos)",
                session.list().len()
            ),
            None => "Video Complexity Sorter".to_string(),
        }
    }

    pub fn theme(&self) -> Theme {
        theme::app_theme()
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::DatasetLoaded(result) => {
                self.handle_dataset_loaded(result);
                Task::none()
            }

            Message::ToggleLayout => {
                if let Some(session) = &mut self.session {
                    session.toggle_layout();
                }
                Task::none()
            }
            Message::StartExperiment => {
                self.start_experiment();
                Task::none()
            }
            Message::ResetToFull => {
                self.reset_to_full();
                Task::none()
            }

            Message::Shuffle => {
                self.shuffle();
                Task::none()
            }
            Message::Finalize => {
                self.finalize();
                Task::none()
            }
            Message::DragStart(id) => {
                self.drag_start(id);
                Task::none()
            }
            Message::CardEntered(id) => {
                self.preview_enter(&id);
                self.drag_hover(id);
                Task::none()
            }
            Message::CardExited(id) => {
                self.preview_exit(&id);
                self.drag_leave(&id);
                Task::none()
            }
            Message::DragEnd => {
                self.drag_end();
                Task::none()
            }
            Message::MoveSelectedUp => {
                self.move_selected(true);
                Task::none()
            }
            Message::MoveSelectedDown => {
                self.move_selected(false);
                Task::none()
            }
            Message::ToggleDetails(id) => {
                self.toggle_details(id);
                Task::none()
            }

            Message::ExportCsv => self.export_csv(),
            Message::ExportPathChosen(path) => {
                self.handle_export_path(path);
                Task::none()
            }

            Message::OpenEmail => {
                self.open_email();
                Task::none()
            }
            Message::CloseEmail => {
                self.close_email();
                Task::none()
            }
            Message::EmailNameChanged(value) => {
                self.email.form.from_name = value;
                Task::none()
            }
            Message::EmailAddressChanged(value) => {
                self.email.form.from_email = value;
                Task::none()
            }
            Message::EmailNotesEdited(action) => {
                self.edit_email_notes(action);
                Task::none()
            }
            Message::SendEmail => self.send_email(),
            Message::EmailSent(result) => {
                self.handle_email_sent(result);
                Task::none()
            }
        }
    }

    pub fn view(&self) -> Element<'_, Message> {
        let page = match (&self.session, &self.load_error) {
            (_, Some(error)) => pages::status::error_view(&self.settings.paths.dataset, error),
            (None, None) => pages::status::loading_view(&self.settings.paths.dataset),
            (Some(session), None) => pages::sorter::view(self, session),
        };

        if !self.email.open {
            return page;
        }

        let dialog = center(windows::email_dialog::view(self)).style(|_theme: &Theme| {
            iced::widget::container::Style {
                background: Some(colors::BACKDROP.into()),
                ..Default::default()
            }
        });

        stack![page, opaque(dialog)].into()
    }

    pub fn subscription(&self) -> Subscription<Message> {
        event::listen_with(handle_event)
    }

    /// Lock the shared config manager.
    pub fn config(&self) -> MutexGuard<'_, ConfigManager> {
        lock_config(&self.config)
    }
}

/// A poisoned lock still holds usable settings.
fn lock_config(config: &Mutex<ConfigManager>) -> MutexGuard<'_, ConfigManager> {
    config.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Map raw window events to messages.
fn handle_event(event: Event, status: event::Status, _window: window::Id) -> Option<Message> {
    match event {
        // Releases end a drag wherever the cursor is
        Event::Mouse(mouse::Event::ButtonReleased(mouse::Button::Left)) => Some(Message::DragEnd),
        Event::Keyboard(keyboard::Event::KeyPressed { key, .. }) => {
            if status == event::Status::Captured {
                return None;
            }
            match key {
                keyboard::Key::Named(keyboard::key::Named::ArrowUp) => {
                    Some(Message::MoveSelectedUp)
                }
                keyboard::Key::Named(keyboard::key::Named::ArrowDown) => {
                    Some(Message::MoveSelectedDown)
                }
                keyboard::Key::Named(keyboard::key::Named::Escape) => Some(Message::CloseEmail),
                _ => None,
            }
        }
        _ => None,
    }
}
