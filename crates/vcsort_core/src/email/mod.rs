//! Emailing the final order.
//!
//! This module provides:
//! - `EmailConfig`: delivery identifiers, supplied at construction time
//! - `EmailForm`: what the user types into the email dialog
//! - `order_summary`: the derived order listing attached to each message
//! - `EmailJsClient`: delivery through the EmailJS REST endpoint

mod client;
mod config;
mod form;

pub use client::{EmailJsClient, EmailRequest};
pub use config::{EmailConfig, DEFAULT_ENDPOINT};
pub use form::{order_summary, EmailForm, ORDER_FIELD};

use thiserror::Error;

/// Errors from composing or sending an email.
#[derive(Error, Debug)]
pub enum EmailError {
    #[error("{0}")]
    InvalidForm(String),

    #[error("Email service is not configured (service, template and public key are required)")]
    NotConfigured,

    #[error("Failed to reach email service: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Email service returned status {status}: {body}")]
    Rejected { status: u16, body: String },
}
