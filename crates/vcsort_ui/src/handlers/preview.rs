//! Card preview handlers.

use crate::app::App;

impl App {
    /// Play the preview of the card under the cursor.
    pub fn preview_enter(&mut self, id: &str) {
        let Some(session) = &self.session else {
            return;
        };
        if let Some(item) = session.list().items().iter().find(|item| item.id == id) {
            self.preview.play(item);
        }
    }

    /// Pause the preview of the card the cursor left.
    pub fn preview_exit(&mut self, id: &str) {
        self.preview.stop(id);
    }
}
