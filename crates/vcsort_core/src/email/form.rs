//! Email dialog contents and the derived order listing.

use super::EmailError;
use crate::models::VideoItem;

/// Template field that carries the derived order listing.
pub const ORDER_FIELD: &str = "complexity_order_list";

/// Fields the user fills in before sending.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EmailForm {
    /// Sender name (required).
    pub from_name: String,
    /// Sender email (required).
    pub from_email: String,
    /// Free-text notes.
    pub message: String,
}

impl EmailForm {
    /// Check required fields.
    pub fn validate(&self) -> Result<(), EmailError> {
        if self.from_name.trim().is_empty() {
            return Err(EmailError::InvalidForm("Your name is required.".to_string()));
        }
        let email = self.from_email.trim();
        if email.is_empty() {
            return Err(EmailError::InvalidForm("Your email is required.".to_string()));
        }
        match email.split_once('@') {
            Some((local, domain)) if !local.is_empty() && !domain.is_empty() => Ok(()),
            _ => Err(EmailError::InvalidForm(format!(
                "'{}' is not a valid email address.",
                email
            ))),
        }
    }

    /// True when the required fields are non-empty.
    pub fn is_complete(&self) -> bool {
        !self.from_name.trim().is_empty() && !self.from_email.trim().is_empty()
    }
}

/// Order listing: a heading then `N. name (Target Rank: X)` per item.
pub fn order_summary(items: &[VideoItem]) -> String {
    let lines: Vec<String> = items
        .iter()
        .enumerate()
        .map(|(idx, item)| {
            format!(
                "{}. {} (Target Rank: {})",
                idx + 1,
                item.name,
                item.target_complexity.as_deref().unwrap_or("n/a")
            )
        })
        .collect();
    format!("User's Final Order:\n{}", lines.join("\n"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(name: &str, email: &str) -> EmailForm {
        EmailForm {
            from_name: name.into(),
            from_email: email.into(),
            message: String::new(),
        }
    }

    #[test]
    fn required_fields() {
        assert!(form("Ada", "ada@example.com").validate().is_ok());
        assert!(matches!(form("", "ada@example.com").validate(), Err(EmailError::InvalidForm(_))));
        assert!(matches!(form("Ada", "  ").validate(), Err(EmailError::InvalidForm(_))));
        assert!(matches!(form("Ada", "not-an-email").validate(), Err(EmailError::InvalidForm(_))));
        assert!(!form("Ada", "").is_complete());
    }

    #[test]
    fn summary_lists_rank_name_and_target() {
        let items = vec![
            VideoItem::from_entry("/a.mp4", "VID3.mp4", "").with_target_complexity("2"),
            VideoItem::from_entry("/b.mp4", "VID9.mp4", ""),
        ];
        assert_eq!(
            order_summary(&items),
            "User's Final Order:\n1. VID3 (Target Rank: 2)\n2. VID9 (Target Rank: n/a)"
        );
    }
}
