//! Ranked list handlers.

use crate::app::{App, DragState, Notice};

impl App {
    /// Replace the working list with a new random experiment.
    pub fn start_experiment(&mut self) {
        let Some(session) = &mut self.session else {
            return;
        };
        match session.start_experiment(&mut rand::thread_rng()) {
            Ok(()) => self.clear_list_ui_state(),
            Err(e) => {
                tracing::warn!("Cannot start experiment: {}", e);
                self.notice = Some(Notice::Warning(e.to_string()));
            }
        }
    }

    /// Return to the full dataset, shuffled.
    pub fn reset_to_full(&mut self) {
        if let Some(session) = &mut self.session {
            session.reset_to_full(&mut rand::thread_rng());
            self.clear_list_ui_state();
        }
    }

    pub fn shuffle(&mut self) {
        if let Some(session) = &mut self.session {
            session.list_mut().shuffle(&mut rand::thread_rng());
            self.drag_state = DragState::default();
        }
    }

    pub fn finalize(&mut self) {
        if let Some(session) = &mut self.session {
            session.list_mut().finalize();
        }
    }

    /// Pressing an item starts a drag and selects it for keyboard moves.
    pub fn drag_start(&mut self, id: String) {
        self.selected_id = Some(id.clone());
        self.drag_state = DragState {
            dragging: Some(id),
            hover: None,
        };
    }

    pub fn drag_hover(&mut self, id: String) {
        if self.drag_state.dragging.is_some() {
            self.drag_state.hover = Some(id);
        }
    }

    pub fn drag_leave(&mut self, id: &str) {
        if self.drag_state.hover.as_deref() == Some(id) {
            self.drag_state.hover = None;
        }
    }

    /// Drop the dragged item onto the hovered one.
    ///
    /// Releasing outside any item, or on the dragged item itself, leaves the
    /// order unchanged.
    pub fn drag_end(&mut self) {
        let DragState { dragging, hover } = std::mem::take(&mut self.drag_state);
        if let (Some(session), Some(moved), Some(target)) = (&mut self.session, dragging, hover) {
            session.list_mut().reorder_by_identity(&moved, &target);
        }
    }

    /// Move the selected item one place up or down.
    pub fn move_selected(&mut self, up: bool) {
        if self.email.open {
            return;
        }
        let (Some(session), Some(id)) = (&mut self.session, &self.selected_id) else {
            return;
        };
        if up {
            session.list_mut().move_up(id);
        } else {
            session.list_mut().move_down(id);
        }
    }

    pub fn toggle_details(&mut self, id: String) {
        if !self.expanded.remove(&id) {
            self.expanded.insert(id);
        }
    }

    /// Forget per-item UI state when the working list is replaced.
    fn clear_list_ui_state(&mut self) {
        self.drag_state = DragState::default();
        self.selected_id = None;
        self.expanded.clear();
        self.preview.clear();
    }
}
