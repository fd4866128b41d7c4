// src/infrastructure/mail.rs
use crate::application::ports::mail::{MailError, Mailer, OutgoingMail};
use async_trait::async_trait;
use lettre::{
    AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor,
    message::{Mailbox, MultiPart},
    transport::smtp::{self, authentication::Credentials},
};
use thiserror::Error;
use tracing::{info, warn};

#[derive(Debug, Clone)]
pub struct SmtpSettings {
    pub host: String,
    pub port: u16,
    pub username: Option<String>,
    pub password: Option<String>,
    pub starttls: bool,
    pub from: String,
}

#[derive(Debug, Error)]
pub enum MailSetupError {
    #[error("invalid sender address `{0}`")]
    InvalidFrom(String),
    #[error("failed to configure SMTP transport: {0}")]
    Transport(#[from] smtp::Error),
}

pub struct SmtpMailer {
    transport: AsyncSmtpTransport<Tokio1Executor>,
    from: Mailbox,
}

impl SmtpMailer {
    pub fn new(settings: &SmtpSettings) -> Result<Self, MailSetupError> {
        let from = settings
            .from
            .parse::<Mailbox>()
            .map_err(|_| MailSetupError::InvalidFrom(settings.from.clone()))?;

        let builder = if settings.starttls {
            AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&settings.host)?
        } else {
            AsyncSmtpTransport::<Tokio1Executor>::relay(&settings.host)?
        }
        .port(settings.port);

        let builder = match (&settings.username, &settings.password) {
            (Some(username), Some(password)) => {
                builder.credentials(Credentials::new(username.clone(), password.clone()))
            }
            _ => builder,
        };

        Ok(Self {
            transport: builder.build(),
            from,
        })
    }

    fn build_message(&self, mail: OutgoingMail) -> Result<Message, MailError> {
        let to = parse_mailbox(&mail.to)?;
        let mut builder = Message::builder()
            .from(self.from.clone())
            .to(to)
            .subject(mail.subject);
        if let Some(reply_to) = mail.reply_to.as_deref() {
            builder = builder.reply_to(parse_mailbox(reply_to)?);
        }

        builder
            .multipart(MultiPart::alternative_plain_html(
                mail.text_body,
                mail.html_body,
            ))
            .map_err(|err| MailError::Permanent(format!("failed to build message: {err}")))
    }
}

fn parse_mailbox(value: &str) -> Result<Mailbox, MailError> {
    value
        .parse::<Mailbox>()
        .map_err(|err| MailError::Permanent(format!("invalid address `{value}`: {err}")))
}

/// 5xx replies are permanent; everything else (4xx, I/O, timeouts, TLS) may succeed on retry.
fn classify(err: &smtp::Error) -> MailError {
    if err.is_permanent() {
        MailError::Permanent(err.to_string())
    } else {
        MailError::Transient(err.to_string())
    }
}

#[async_trait]
impl Mailer for SmtpMailer {
    async fn send(&self, mail: OutgoingMail) -> Result<(), MailError> {
        let subject = mail.subject.clone();
        let message = self.build_message(mail)?;
        self.transport
            .send(message)
            .await
            .map_err(|err| classify(&err))?;
        info!(%subject, "mail delivered to relay");
        Ok(())
    }
}

/// Used when no SMTP host is configured. Messages are logged and dropped.
#[derive(Default, Clone)]
pub struct NoopMailer;

#[async_trait]
impl Mailer for NoopMailer {
    async fn send(&self, mail: OutgoingMail) -> Result<(), MailError> {
        warn!(
            to = %mail.to,
            subject = %mail.subject,
            "SMTP not configured; dropping outgoing mail"
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settings() -> SmtpSettings {
        SmtpSettings {
            host: "smtp.example.com".into(),
            port: 587,
            username: None,
            password: None,
            starttls: true,
            from: "Quill <noreply@example.com>".into(),
        }
    }

    fn mail(to: &str, reply_to: Option<&str>) -> OutgoingMail {
        OutgoingMail {
            to: to.into(),
            reply_to: reply_to.map(str::to_string),
            subject: "Hello".into(),
            text_body: "plain".into(),
            html_body: "<p>html</p>".into(),
        }
    }

    #[tokio::test]
    async fn rejects_invalid_sender() {
        let mut bad = settings();
        bad.from = "not an address".into();
        assert!(matches!(
            SmtpMailer::new(&bad),
            Err(MailSetupError::InvalidFrom(_))
        ));
    }

    #[tokio::test]
    async fn invalid_recipient_is_permanent() {
        let mailer = SmtpMailer::new(&settings()).expect("mailer");
        let err = mailer.build_message(mail("nope", None)).unwrap_err();
        assert!(matches!(err, MailError::Permanent(_)));
    }

    #[tokio::test]
    async fn message_carries_reply_to_and_both_bodies() {
        let mailer = SmtpMailer::new(&settings()).expect("mailer");
        let message = mailer
            .build_message(mail("owner@example.com", Some("visitor@example.com")))
            .expect("message");
        let raw = String::from_utf8(message.formatted()).expect("utf8");

        assert!(raw.contains("Reply-To: visitor@example.com"));
        assert!(raw.contains("multipart/alternative"));
        assert!(raw.contains("text/plain"));
        assert!(raw.contains("text/html"));
    }

    #[tokio::test]
    async fn noop_mailer_accepts_everything() {
        NoopMailer
            .send(mail("owner@example.com", None))
            .await
            .expect("noop send");
    }
}
