//! Contact form validation and delivery.

use std::sync::LazyLock;

use async_trait::async_trait;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::errors::AppError;

static EMAIL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\S+@\S+\.\S+").expect("email pattern is valid"));

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub message: String,
}

/// Per-field validation messages. Phone is optional and never fails.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ContactFormErrors {
    pub name: Option<&'static str>,
    pub email: Option<&'static str>,
    pub message: Option<&'static str>,
}

impl ContactFormErrors {
    pub fn is_empty(&self) -> bool {
        self.count() == 0
    }

    pub fn count(&self) -> usize {
        [self.name, self.email, self.message]
            .iter()
            .filter(|error| error.is_some())
            .count()
    }
}

impl ContactForm {
    pub fn validate(&self) -> ContactFormErrors {
        let email = self.email.trim();
        ContactFormErrors {
            name: self.name.trim().is_empty().then_some("Name is required"),
            email: if email.is_empty() {
                Some("Email is required")
            } else if !EMAIL.is_match(email) {
                Some("Email is invalid")
            } else {
                None
            },
            message: self
                .message
                .trim()
                .is_empty()
                .then_some("Message is required"),
        }
    }
}

/// Where valid contact messages go.
#[async_trait]
pub trait ContactSink: Send + Sync {
    async fn deliver(&self, form: &ContactForm) -> Result<(), AppError>;
}

/// Records messages in the log. There is no mail backend.
pub struct LogContactSink;

#[async_trait]
impl ContactSink for LogContactSink {
    async fn deliver(&self, form: &ContactForm) -> Result<(), AppError> {
        tracing::info!(
            name = %form.name,
            email = %form.email,
            phone = %form.phone,
            "Contact form submitted: {}",
            form.message
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_name_and_bad_email_give_two_errors() {
        let form = ContactForm {
            name: "  ".to_string(),
            email: "not-an-email".to_string(),
            phone: String::new(),
            message: "Hello".to_string(),
        };

        let errors = form.validate();
        assert_eq!(errors.count(), 2);
        assert_eq!(errors.name, Some("Name is required"));
        assert_eq!(errors.email, Some("Email is invalid"));
        assert_eq!(errors.message, None);
    }

    #[test]
    fn test_all_missing() {
        let errors = ContactForm::default().validate();
        assert_eq!(errors.email, Some("Email is required"));
        assert_eq!(errors.count(), 3);
    }

    #[test]
    fn test_valid_form_without_phone() {
        let form = ContactForm {
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            phone: String::new(),
            message: "Two seats to Rome".to_string(),
        };
        assert!(form.validate().is_empty());
    }
}
