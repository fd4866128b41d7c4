// src/application/ports/media.rs
use crate::application::{ApplicationResult, error::ApplicationError};
use async_trait::async_trait;
use bytes::Bytes;
use chrono::{DateTime, Utc};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaKind {
    PostImage,
    Avatar,
}

impl MediaKind {
    /// Directory, relative to the media root, that receives uploads of this kind.
    pub fn directory(self, now: DateTime<Utc>) -> String {
        match self {
            Self::PostImage => format!("posts/{}", now.format("%Y/%m/%d")),
            Self::Avatar => "users".to_string(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct MediaUpload {
    pub file_name: Option<String>,
    pub content_type: Option<String>,
    pub bytes: Bytes,
}

const IMAGE_EXTENSIONS: [&str; 5] = ["png", "jpg", "jpeg", "gif", "webp"];

impl MediaUpload {
    /// Resolves the file extension for an image upload, rejecting anything else.
    pub fn image_extension(&self) -> ApplicationResult<&'static str> {
        if self.bytes.is_empty() {
            return Err(ApplicationError::validation("uploaded file is empty"));
        }

        let from_type = self
            .content_type
            .as_deref()
            .and_then(|value| match value.to_ascii_lowercase().as_str() {
                "image/png" => Some("png"),
                "image/jpeg" | "image/jpg" => Some("jpg"),
                "image/gif" => Some("gif"),
                "image/webp" => Some("webp"),
                _ => None,
            });

        let from_name = || {
            let name = self.file_name.as_deref()?;
            let (_, ext) = name.rsplit_once('.')?;
            let ext = ext.to_ascii_lowercase();
            IMAGE_EXTENSIONS
                .iter()
                .copied()
                .find(|known| *known == ext)
                .map(|known| if known == "jpeg" { "jpg" } else { known })
        };

        from_type
            .or_else(from_name)
            .ok_or_else(|| ApplicationError::validation("upload a valid image"))
    }
}

#[async_trait]
pub trait MediaStorage: Send + Sync {
    /// Persists the upload and returns its path relative to the media root.
    async fn store(
        &self,
        kind: MediaKind,
        upload: MediaUpload,
        now: DateTime<Utc>,
    ) -> ApplicationResult<String>;
}
