// tests/support/mocks/delivery.rs
use std::sync::Mutex;

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use quill_core::application::{
    ApplicationResult,
    ports::{
        mail::{MailError, Mailer, OutgoingMail},
        media::{MediaKind, MediaStorage, MediaUpload},
    },
};

/* -------------------------------- Mailer -------------------------------- */

/// 送信内容を記録し、設定した結果を返すメーラー
#[derive(Default)]
pub struct RecordingMailer {
    outcome: Option<MailError>,
    sent: Mutex<Vec<OutgoingMail>>,
}

impl RecordingMailer {
    pub fn failing(error: MailError) -> Self {
        Self {
            outcome: Some(error),
            sent: Mutex::default(),
        }
    }

    pub fn sent(&self) -> Vec<OutgoingMail> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl Mailer for RecordingMailer {
    async fn send(&self, mail: OutgoingMail) -> Result<(), MailError> {
        self.sent.lock().unwrap().push(mail);
        match &self.outcome {
            Some(error) => Err(error.clone()),
            None => Ok(()),
        }
    }
}

/* -------------------------------- MediaStorage -------------------------------- */

/// ファイルシステムに触れず保存パスだけを返す
#[derive(Default)]
pub struct InMemoryMedia {
    stored: Mutex<Vec<String>>,
}

impl InMemoryMedia {
    pub fn stored(&self) -> Vec<String> {
        self.stored.lock().unwrap().clone()
    }
}

#[async_trait]
impl MediaStorage for InMemoryMedia {
    async fn store(
        &self,
        kind: MediaKind,
        upload: MediaUpload,
        now: DateTime<Utc>,
    ) -> ApplicationResult<String> {
        let extension = upload.image_extension()?;
        let mut stored = self.stored.lock().unwrap();
        let path = format!("{}/upload-{}.{extension}", kind.directory(now), stored.len() + 1);
        stored.push(path.clone());
        Ok(path)
    }
}
