//! Dialog views shown over the main page.

pub mod email_dialog;
