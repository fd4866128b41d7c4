// src/presentation/http/controllers/mod.rs
pub mod comments;
pub mod pages;
pub mod posts;
pub mod requests;
pub mod users;

use crate::application::ports::media::MediaUpload;
use crate::presentation::http::error::{HttpError, HttpResult};
use axum::extract::Multipart;

/// Pulls the named file field out of a multipart body.
pub(crate) async fn read_upload(mut multipart: Multipart, field_name: &str) -> HttpResult<MediaUpload> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|err| HttpError::bad_request(err.body_text()))?
    {
        if field.name() != Some(field_name) {
            continue;
        }
        let file_name = field.file_name().map(str::to_string);
        let content_type = field.content_type().map(str::to_string);
        let bytes = field
            .bytes()
            .await
            .map_err(|err| HttpError::bad_request(err.body_text()))?;
        return Ok(MediaUpload {
            file_name,
            content_type,
            bytes,
        });
    }

    Err(HttpError::bad_request(format!(
        "multipart field `{field_name}` is required"
    )))
}
