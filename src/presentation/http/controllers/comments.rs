use crate::application::{commands::posts::CreateCommentCommand, dto::CommentDto};
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::Authenticated;
use crate::presentation::http::state::HttpState;
use axum::{
    Extension, Json,
    extract::Path,
    http::StatusCode,
};

use super::requests::CommentRequest;

#[utoipa::path(
    post,
    path = "/posts/comment/{post_id}",
    params(("post_id" = i64, Path, description = "Post being commented on")),
    request_body = CommentRequest,
    responses(
        (status = 201, description = "Comment added.", body = CommentDto),
        (status = 400, description = "Empty comment.", body = crate::presentation::http::error::ErrorResponse),
        (status = 401, description = "Not signed in.", body = crate::presentation::http::error::ErrorResponse),
        (status = 404, description = "Unknown post.", body = crate::presentation::http::error::ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "Posts"
)]
pub async fn add_comment(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Path(post_id): Path<i64>,
    Json(payload): Json<CommentRequest>,
) -> HttpResult<(StatusCode, Json<CommentDto>)> {
    let command = CreateCommentCommand {
        post_id,
        content: payload.content,
    };

    let comment = state
        .services
        .post_commands
        .add_comment(&user, command)
        .await
        .into_http()?;

    Ok((StatusCode::CREATED, Json(comment)))
}
