//! Email service identifiers.

use serde::{Deserialize, Serialize};

/// EmailJS REST endpoint for sending a templated message.
pub const DEFAULT_ENDPOINT: &str = "https://api.emailjs.com/api/v1.0/email/send";

/// Identifiers for the email delivery service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmailConfig {
    /// Service identifier.
    #[serde(default = "default_service_id")]
    pub service_id: String,

    /// Template identifier.
    #[serde(default = "default_template_id")]
    pub template_id: String,

    /// Public key (sent as `user_id`).
    #[serde(default = "default_public_key")]
    pub public_key: String,

    /// Send endpoint.
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
}

fn default_service_id() -> String {
    "YOUR_SERVICE_ID".to_string()
}

fn default_template_id() -> String {
    "YOUR_TEMPLATE_ID".to_string()
}

fn default_public_key() -> String {
    "YOUR_PUBLIC_KEY".to_string()
}

fn default_endpoint() -> String {
    DEFAULT_ENDPOINT.to_string()
}

impl Default for EmailConfig {
    fn default() -> Self {
        Self {
            service_id: default_service_id(),
            template_id: default_template_id(),
            public_key: default_public_key(),
            endpoint: default_endpoint(),
        }
    }
}

impl EmailConfig {
    /// True while any identifier is empty or still a `YOUR_` placeholder.
    pub fn is_placeholder(&self) -> bool {
        [&self.service_id, &self.template_id, &self.public_key]
            .iter()
            .any(|v| v.trim().is_empty() || v.contains("YOUR_"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_placeholders() {
        assert!(EmailConfig::default().is_placeholder());
    }

    #[test]
    fn real_identifiers_are_accepted() {
        let config = EmailConfig {
            service_id: "service_abc".into(),
            template_id: "template_xyz".into(),
            public_key: "pk123".into(),
            ..Default::default()
        };
        assert!(!config.is_placeholder());

        let missing_key = EmailConfig {
            public_key: " ".into(),
            ..config
        };
        assert!(missing_key.is_placeholder());
    }
}
