//! Email dialog handlers.

use iced::widget::text_editor;
use iced::Task;

use vcsort_core::email::EmailForm;

use crate::app::{App, Message, Notice};

impl App {
    pub fn open_email(&mut self) {
        self.email.open = true;
        self.email.error = None;
    }

    /// Close the dialog unless a send is in flight.
    pub fn close_email(&mut self) {
        if !self.email.sending {
            self.email.open = false;
            self.email.error = None;
        }
    }

    /// Apply an edit to the notes and mirror the text into the form.
    pub fn edit_email_notes(&mut self, action: text_editor::Action) {
        if self.email.sending {
            return;
        }
        self.email.notes.perform(action);
        self.email.form.message = self.email.notes.text();
    }

    /// Send the form together with the current order.
    pub fn send_email(&mut self) -> Task<Message> {
        if self.email.sending {
            return Task::none();
        }
        let Some(session) = &self.session else {
            return Task::none();
        };

        let form = self.email.form.clone();
        let items = session.list().items().to_vec();

        // Surface form and config problems without a round trip
        if let Err(e) = self.mailer.build_request(&form, &items) {
            self.email.error = Some(e.to_string());
            return Task::none();
        }

        self.email.sending = true;
        self.email.error = None;

        let mailer = self.mailer.clone();
        Task::perform(
            async move { mailer.send(&form, &items).await.map_err(|e| e.to_string()) },
            Message::EmailSent,
        )
    }

    pub fn handle_email_sent(&mut self, result: Result<(), String>) {
        self.email.sending = false;
        match result {
            Ok(()) => {
                self.email.open = false;
                self.email.form = EmailForm::default();
                self.email.notes = text_editor::Content::new();
                self.notice = Some(Notice::Success("Email sent successfully!".to_string()));
            }
            Err(e) => {
                tracing::error!("Email send failed: {}", e);
                self.email.error = Some(format!("Failed to send email: {}", e));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use vcsort_core::config::ConfigManager;
    use vcsort_core::dataset::DatasetReport;
    use vcsort_core::models::VideoItem;

    use iced::widget::text_editor::{Action, Edit};

    use crate::app::{App, Notice};

    fn loaded_app() -> App {
        let config = Arc::new(Mutex::new(ConfigManager::new("unused/settings.toml")));
        let (mut app, _) = App::new(config);
        app.handle_dataset_loaded(Ok(DatasetReport {
            items: vec![VideoItem::from_entry("/v/a.mp4", "VID1.mp4", "")],
            rejected: Vec::new(),
        }));
        app
    }

    #[test]
    fn placeholder_config_blocks_send() {
        let mut app = loaded_app();
        app.open_email();
        app.email.form.from_name = "Ada".into();
        app.email.form.from_email = "ada@example.com".into();

        let _ = app.send_email();
        assert!(!app.email.sending);
        assert!(app.email.error.is_some());
        assert!(app.email.open);
    }

    #[test]
    fn failure_keeps_dialog_open() {
        let mut app = loaded_app();
        app.open_email();
        app.email.sending = true;
        app.handle_email_sent(Err("status 400".into()));

        assert!(app.email.open);
        assert!(!app.email.sending);
        assert!(app.email.error.as_deref().unwrap().contains("status 400"));
    }

    #[test]
    fn success_resets_form_and_closes() {
        let mut app = loaded_app();
        app.open_email();
        app.email.form.from_name = "Ada".into();
        app.handle_email_sent(Ok(()));

        assert!(!app.email.open);
        assert!(app.email.form.from_name.is_empty());
        assert_eq!(
            app.notice,
            Some(Notice::Success("Email sent successfully!".to_string()))
        );
    }

    #[test]
    fn notes_editor_feeds_the_form() {
        let mut app = loaded_app();
        app.open_email();
        for c in "line one".chars() {
            app.edit_email_notes(Action::Edit(Edit::Insert(c)));
        }
        app.edit_email_notes(Action::Edit(Edit::Enter));
        app.edit_email_notes(Action::Edit(Edit::Insert('x')));

        assert_eq!(app.email.form.message.trim_end(), "line one\nx");

        app.handle_email_sent(Ok(()));
        assert!(app.email.notes.text().trim().is_empty());
        assert!(app.email.form.message.is_empty());
    }

    #[test]
    fn cannot_close_while_sending() {
        let mut app = loaded_app();
        app.open_email();
        app.email.sending = true;
        app.close_email();
        assert!(app.email.open);
    }
}
