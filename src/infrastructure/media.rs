use std::path::{Path, PathBuf};

use crate::application::{
    error::{ApplicationError, ApplicationResult},
    ports::media::{MediaKind, MediaStorage, MediaUpload},
};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use tracing::debug;
use uuid::Uuid;

/// Writes uploads below a local directory that the HTTP layer serves statically.
#[derive(Debug, Clone)]
pub struct LocalMediaStorage {
    root: PathBuf,
}

impl LocalMediaStorage {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

#[async_trait]
impl MediaStorage for LocalMediaStorage {
    async fn store(
        &self,
        kind: MediaKind,
        upload: MediaUpload,
        now: DateTime<Utc>,
    ) -> ApplicationResult<String> {
        let extension = upload.image_extension()?;
        let directory = kind.directory(now);
        let relative = format!("{directory}/{}.{extension}", Uuid::new_v4().simple());

        let target_dir = self.root.join(&directory);
        tokio::fs::create_dir_all(&target_dir)
            .await
            .map_err(|err| ApplicationError::infrastructure(format!("media dir: {err}")))?;
        tokio::fs::write(self.root.join(&relative), &upload.bytes)
            .await
            .map_err(|err| ApplicationError::infrastructure(format!("media write: {err}")))?;

        debug!(path = %relative, size = upload.bytes.len(), "stored media file");
        Ok(relative)
    }
}
