//! EmailJS delivery client.

use std::collections::BTreeMap;

use serde::Serialize;

use super::config::EmailConfig;
use super::form::{order_summary, EmailForm, ORDER_FIELD};
use super::EmailError;
use crate::models::VideoItem;

/// Body of one send request.
///
/// Built fresh for every send, so the derived order field never lingers in
/// the form the user is editing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EmailRequest {
    pub service_id: String,
    pub template_id: String,
    pub user_id: String,
    pub template_params: BTreeMap<String, String>,
}

/// Sends ranking emails through EmailJS.
#[derive(Debug, Clone)]
pub struct EmailJsClient {
    config: EmailConfig,
    http: reqwest::Client,
}

impl EmailJsClient {
    pub fn new(config: EmailConfig) -> Self {
        Self {
            config,
            http: reqwest::Client::new(),
        }
    }

    pub fn config(&self) -> &EmailConfig {
        &self.config
    }

    /// Whether sending can be attempted at all.
    pub fn is_configured(&self) -> bool {
        !self.config.is_placeholder()
    }

    /// Compose the request for `form` and the current order.
    pub fn build_request(
        &self,
        form: &EmailForm,
        items: &[VideoItem],
    ) -> Result<EmailRequest, EmailError> {
        if !self.is_configured() {
            return Err(EmailError::NotConfigured);
        }
        form.validate()?;

        let mut params = BTreeMap::new();
        params.insert("from_name".to_string(), form.from_name.trim().to_string());
        params.insert("from_email".to_string(), form.from_email.trim().to_string());
        params.insert("message".to_string(), form.message.clone());
        params.insert(ORDER_FIELD.to_string(), order_summary(items));

        Ok(EmailRequest {
            service_id: self.config.service_id.clone(),
            template_id: self.config.template_id.clone(),
            user_id: self.config.public_key.clone(),
            template_params: params,
        })
    }

    /// Send the current order. Any non-success status is an error.
    pub async fn send(&self, form: &EmailForm, items: &[VideoItem]) -> Result<(), EmailError> {
        let request = self.build_request(form, items)?;

        tracing::info!(
            "Sending order of {} videos via {}",
            items.len(),
            self.config.endpoint
        );

        let response = self
            .http
            .post(&self.config.endpoint)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if status.is_success() {
            tracing::info!("Order email accepted");
            Ok(())
        } else {
            let body = response.text().await.unwrap_or_default();
            tracing::warn!("Email service rejected message: {} {}", status, body);
            Err(EmailError::Rejected {
                status: status.as_u16(),
                body,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn configured() -> EmailJsClient {
        EmailJsClient::new(EmailConfig {
            service_id: "service_1".into(),
            template_id: "template_1".into(),
            public_key: "key_1".into(),
            ..Default::default()
        })
    }

    fn form() -> EmailForm {
        EmailForm {
            from_name: " Ada ".into(),
            from_email: "ada@example.com".into(),
            message: "notes".into(),
        }
    }

    #[test]
    fn request_carries_identifiers_and_order() {
        let items = vec![VideoItem::from_entry("/a.mp4", "VID1.mp4", "")];
        let request = configured().build_request(&form(), &items).unwrap();

        assert_eq!(request.service_id, "service_1");
        assert_eq!(request.template_id, "template_1");
        assert_eq!(request.user_id, "key_1");
        assert_eq!(request.template_params["from_name"], "Ada");
        assert_eq!(request.template_params["message"], "notes");
        assert_eq!(
            request.template_params[ORDER_FIELD],
            "User's Final Order:\n1. VID1 (Target Rank: n/a)"
        );
    }

    #[test]
    fn form_is_not_modified_by_building() {
        let client = configured();
        let form = form();
        let before = form.clone();
        let _ = client.build_request(&form, &[]);
        assert_eq!(form, before);
    }

    #[test]
    fn placeholder_config_refuses_to_build() {
        let client = EmailJsClient::new(EmailConfig::default());
        assert!(!client.is_configured());
        assert!(matches!(
            client.build_request(&form(), &[]),
            Err(EmailError::NotConfigured)
        ));
    }

    #[test]
    fn invalid_form_refuses_to_build() {
        let bad = EmailForm::default();
        assert!(matches!(
            configured().build_request(&bad, &[]),
            Err(EmailError::InvalidForm(_))
        ));
    }

    #[test]
    fn request_serializes_as_emailjs_body() {
        let request = configured().build_request(&form(), &[]).unwrap();
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["user_id"], "key_1");
        assert!(json["template_params"][ORDER_FIELD].is_string());
    }
}
