//! Footer newsletter signup.

use async_trait::async_trait;
use serde::Deserialize;

use crate::errors::AppError;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct NewsletterForm {
    #[serde(default)]
    pub email: String,
    /// Page the signup was made from.
    pub redirect: Option<String>,
}

impl NewsletterForm {
    /// Any non-empty address containing `@` is accepted.
    pub fn validate(&self) -> Result<&str, &'static str> {
        if self.email.is_empty() || !self.email.contains('@') {
            return Err("Please enter a valid email address.");
        }
        Ok(&self.email)
    }
}

/// What the footer shows in place of, or next to, the signup form.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum NewsletterStatus {
    #[default]
    Idle,
    Subscribed,
    Rejected(&'static str),
}

/// Where newsletter signups go.
#[async_trait]
pub trait NewsletterSink: Send + Sync {
    async fn subscribe(&self, email: &str) -> Result<(), AppError>;
}

/// Records signups in the log. There is no mailing list backend.
pub struct LogNewsletterSink;

#[async_trait]
impl NewsletterSink for LogNewsletterSink {
    async fn subscribe(&self, email: &str) -> Result<(), AppError> {
        tracing::info!(email = %email, "Newsletter subscription");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(email: &str) -> NewsletterForm {
        NewsletterForm {
            email: email.to_string(),
            redirect: None,
        }
    }

    #[test]
    fn test_address_needs_an_at_sign() {
        assert!(form("").validate().is_err());
        assert!(form("traveller.example.com").validate().is_err());
        assert_eq!(form("a@b").validate(), Ok("a@b"));
    }
}
