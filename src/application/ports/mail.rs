// src/application/ports/mail.rs
use async_trait::async_trait;
use thiserror::Error;

/// A multipart message with an HTML body and a plain-text alternative.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutgoingMail {
    pub to: String,
    pub reply_to: Option<String>,
    pub subject: String,
    pub text_body: String,
    pub html_body: String,
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum MailError {
    /// Connection problems, timeouts, 4xx replies.
    #[error("transient mail transport failure: {0}")]
    Transient(String),

    /// Malformed addresses, 5xx replies.
    #[error("mail permanently rejected: {0}")]
    Permanent(String),
}

#[async_trait]
pub trait Mailer: Send + Sync {
    async fn send(&self, mail: OutgoingMail) -> Result<(), MailError>;
}
