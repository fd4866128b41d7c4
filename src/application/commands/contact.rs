// src/application/commands/contact.rs
use std::sync::Arc;

use crate::{
    application::{
        dto::MessageDto,
        error::{ApplicationError, ApplicationResult},
        ports::mail::{MailError, Mailer, OutgoingMail},
    },
    domain::user::EmailAddress,
};

pub const SENT_MESSAGE: &str = "Your message has been sent.";
pub const FAILED_MESSAGE: &str = "We encountered an error sending your message, try again later..";

pub struct ContactCommand {
    pub subject: String,
    pub email: String,
    pub message: String,
}

/// Forwards contact-form submissions to the site owner's mailbox.
pub struct ContactService {
    mailer: Arc<dyn Mailer>,
    recipient: String,
}

impl ContactService {
    pub fn new(mailer: Arc<dyn Mailer>, recipient: impl Into<String>) -> Self {
        Self {
            mailer,
            recipient: recipient.into(),
        }
    }

    pub async fn send(&self, command: ContactCommand) -> ApplicationResult<MessageDto> {
        let subject = command.subject.trim().to_string();
        if subject.is_empty() {
            return Err(ApplicationError::validation("subject is required"));
        }
        if command.message.trim().is_empty() {
            return Err(ApplicationError::validation("message is required"));
        }
        let sender = EmailAddress::new(command.email)?;

        let mail = OutgoingMail {
            to: self.recipient.clone(),
            reply_to: Some(sender.to_string()),
            subject,
            text_body: render_text(&sender, &command.message),
            html_body: render_html(&sender, &command.message),
        };

        match self.mailer.send(mail).await {
            Ok(()) => {
                tracing::info!(sender = %sender, "contact message delivered");
                Ok(MessageDto::new(SENT_MESSAGE))
            }
            Err(MailError::Transient(reason)) => {
                tracing::warn!(sender = %sender, %reason, "contact message delivery failed, transient");
                Err(ApplicationError::unavailable(FAILED_MESSAGE))
            }
            Err(MailError::Permanent(reason)) => {
                tracing::error!(sender = %sender, %reason, "contact message rejected");
                Err(ApplicationError::upstream(FAILED_MESSAGE))
            }
        }
    }
}

fn render_text(sender: &EmailAddress, message: &str) -> String {
    format!("From: {sender}\n\n{message}\n")
}

fn render_html(sender: &EmailAddress, message: &str) -> String {
    let body = escape_html(message).replace('\n', "<br>\n");
    format!(
        "<html><body><p><strong>From:</strong> {}</p><p>{body}</p></body></html>",
        escape_html(sender.as_str())
    )
}

fn escape_html(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#x27;"),
            other => escaped.push(other),
        }
    }
    escaped
}
