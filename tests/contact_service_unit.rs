mod support;

use quill_core::application::{
    commands::contact::{ContactCommand, FAILED_MESSAGE, SENT_MESSAGE},
    error::ApplicationError,
    ports::mail::MailError,
};
use support::{RecordingMailer, TestApp};

fn contact() -> ContactCommand {
    ContactCommand {
        subject: "Hello".to_string(),
        email: "reader@example.com".to_string(),
        message: "I <3 your blog".to_string(),
    }
}

/// 送信成功時は固定メッセージを返し、返信先に送信者を設定する
#[tokio::test]
async fn delivered_message_is_addressed_to_the_owner() {
    let app = TestApp::new();

    let result = app.services.contact.send(contact()).await.unwrap();
    assert_eq!(result.message, SENT_MESSAGE);

    let sent = app.mailer.sent();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].to, "owner@example.com");
    assert_eq!(sent[0].reply_to.as_deref(), Some("reader@example.com"));
    assert_eq!(sent[0].subject, "Hello");
    assert!(sent[0].text_body.contains("I <3 your blog"));
    assert!(sent[0].html_body.contains("I &lt;3 your blog"));
}

/// 一時的な失敗は Unavailable、恒久的な拒否は Upstream
#[tokio::test]
async fn delivery_failures_are_classified() {
    let transient = TestApp::with_mailer(RecordingMailer::failing(MailError::Transient(
        "connection reset".into(),
    )));
    assert!(matches!(
        transient.services.contact.send(contact()).await,
        Err(ApplicationError::Unavailable(msg)) if msg == FAILED_MESSAGE
    ));

    let permanent = TestApp::with_mailer(RecordingMailer::failing(MailError::Permanent(
        "550 mailbox unavailable".into(),
    )));
    assert!(matches!(
        permanent.services.contact.send(contact()).await,
        Err(ApplicationError::Upstream(msg)) if msg == FAILED_MESSAGE
    ));
}

/// 件名や本文が空、送信者アドレスが不正なら送信しない
#[tokio::test]
async fn invalid_submissions_are_not_sent() {
    let app = TestApp::new();
    let contact_service = &app.services.contact;

    let mut blank_subject = contact();
    blank_subject.subject = "  ".to_string();
    assert!(matches!(
        contact_service.send(blank_subject).await,
        Err(ApplicationError::Validation(_))
    ));

    let mut blank_message = contact();
    blank_message.message = String::new();
    assert!(contact_service.send(blank_message).await.is_err());

    let mut bad_sender = contact();
    bad_sender.email = "not-an-email".to_string();
    assert!(contact_service.send(bad_sender).await.is_err());

    assert!(app.mailer.sent().is_empty());
}
