// src/presentation/http/controllers/posts.rs
use crate::application::{
    commands::posts::{
        CreatePostCommand, DeletePostCommand, UpdatePostCommand, UploadPostImageCommand,
    },
    dto::{MessageDto, PostDetailPageDto, PostDto, PostFormContextDto, PostListPageDto, SearchPageDto},
    queries::posts::PostDetailQuery,
};
use crate::presentation::http::error::{HttpError, HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::{Authenticated, ClientAddr, MaybeAuthenticated};
use crate::presentation::http::state::HttpState;
use axum::{
    Extension, Json,
    extract::{Multipart, Path, Query},
    http::StatusCode,
};
use tracing::info;

use super::read_upload;
use super::requests::{ImageUploadForm, PageParams, PostFormRequest, SearchParams};

type ErrorBody = crate::presentation::http::error::ErrorResponse;

#[utoipa::path(
    get,
    path = "/posts",
    params(PageParams),
    responses((status = 200, description = "Available posts, newest first.", body = PostListPageDto)),
    tag = "Posts"
)]
pub async fn list_posts(
    Extension(state): Extension<HttpState>,
    Query(params): Query<PageParams>,
) -> HttpResult<Json<PostListPageDto>> {
    state
        .services
        .post_queries
        .list_posts(params.page())
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/posts/categories/{slug}",
    params(("slug" = String, Path, description = "Category slug"), PageParams),
    responses(
        (status = 200, description = "Available posts in the category.", body = PostListPageDto),
        (status = 404, description = "Unknown category.", body = ErrorBody)
    ),
    tag = "Posts"
)]
pub async fn list_by_category(
    Extension(state): Extension<HttpState>,
    Path(slug): Path<String>,
    Query(params): Query<PageParams>,
) -> HttpResult<Json<PostListPageDto>> {
    state
        .services
        .post_queries
        .list_by_category(&slug, params.page())
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/posts/tags/{slug}",
    params(("slug" = String, Path, description = "Tag slug"), PageParams),
    responses(
        (status = 200, description = "Available posts carrying the tag.", body = PostListPageDto),
        (status = 404, description = "Unknown tag.", body = ErrorBody)
    ),
    tag = "Posts"
)]
pub async fn list_by_tag(
    Extension(state): Extension<HttpState>,
    Path(slug): Path<String>,
    Query(params): Query<PageParams>,
) -> HttpResult<Json<PostListPageDto>> {
    state
        .services
        .post_queries
        .list_by_tag(&slug, params.page())
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/posts/search",
    params(SearchParams),
    responses(
        (status = 200, description = "Available posts whose title or content contains the query.", body = SearchPageDto),
        (status = 400, description = "Missing query parameter.", body = ErrorBody)
    ),
    tag = "Posts"
)]
pub async fn search(
    Extension(state): Extension<HttpState>,
    Query(params): Query<SearchParams>,
) -> HttpResult<Json<SearchPageDto>> {
    let query = params
        .query
        .ok_or_else(|| HttpError::bad_request("query parameter is required"))?;

    state
        .services
        .post_queries
        .search(&query, params.page.as_deref())
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/posts/{category_slug}/{id}/{slug}",
    params(
        ("category_slug" = String, Path, description = "Slug of the post's category"),
        ("id" = i64, Path, description = "Post id"),
        ("slug" = String, Path, description = "Post slug")
    ),
    responses(
        (status = 200, description = "Post with related posts, comments and sidebar.", body = PostDetailPageDto),
        (status = 404, description = "No visible post at this address.", body = ErrorBody)
    ),
    tag = "Posts"
)]
pub async fn post_detail(
    Extension(state): Extension<HttpState>,
    viewer: MaybeAuthenticated,
    ClientAddr(address): ClientAddr,
    Path((category_slug, id, slug)): Path<(String, i64, String)>,
) -> HttpResult<Json<PostDetailPageDto>> {
    let query = PostDetailQuery {
        category_slug,
        id,
        slug,
    };

    state
        .services
        .post_queries
        .post_detail(viewer.0.as_ref(), query, address)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/posts/create",
    responses(
        (status = 200, description = "Categories and tags to choose from.", body = PostFormContextDto),
        (status = 401, description = "Not signed in.", body = ErrorBody)
    ),
    security(("bearerAuth" = [])),
    tag = "Posts"
)]
pub async fn create_form(
    Extension(state): Extension<HttpState>,
    Authenticated(_user): Authenticated,
) -> HttpResult<Json<PostFormContextDto>> {
    state
        .services
        .post_queries
        .create_form()
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    post,
    path = "/posts/create",
    request_body = PostFormRequest,
    responses(
        (status = 201, description = "Post created.", body = PostDto),
        (status = 400, description = "Invalid fields or unknown category/tags.", body = ErrorBody),
        (status = 401, description = "Not signed in.", body = ErrorBody)
    ),
    security(("bearerAuth" = [])),
    tag = "Posts"
)]
pub async fn create_post(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Json(payload): Json<PostFormRequest>,
) -> HttpResult<(StatusCode, Json<PostDto>)> {
    let command = CreatePostCommand {
        category_id: payload.category_id,
        tag_ids: payload.tag_ids,
        title: payload.title,
        content: payload.content,
        available: payload.available,
    };

    let post = state
        .services
        .post_commands
        .create_post(&user, command)
        .await
        .into_http()?;
    info!(post_id = post.id, author = %user.username, "post created via http");

    Ok((StatusCode::CREATED, Json(post)))
}

#[utoipa::path(
    get,
    path = "/posts/update/{slug}",
    params(("slug" = String, Path, description = "Post slug")),
    responses(
        (status = 200, description = "Current values plus choices.", body = PostFormContextDto),
        (status = 404, description = "No such post owned by the caller.", body = ErrorBody)
    ),
    security(("bearerAuth" = [])),
    tag = "Posts"
)]
pub async fn update_form(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Path(slug): Path<String>,
) -> HttpResult<Json<PostFormContextDto>> {
    state
        .services
        .post_queries
        .update_form(&user, &slug)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    post,
    path = "/posts/update/{slug}",
    params(("slug" = String, Path, description = "Post slug")),
    request_body = PostFormRequest,
    responses(
        (status = 200, description = "Post updated; the slug changes with the title.", body = PostDto),
        (status = 404, description = "No such post owned by the caller.", body = ErrorBody)
    ),
    security(("bearerAuth" = [])),
    tag = "Posts"
)]
pub async fn update_post(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Path(slug): Path<String>,
    Json(payload): Json<PostFormRequest>,
) -> HttpResult<Json<PostDto>> {
    let command = UpdatePostCommand {
        slug,
        category_id: payload.category_id,
        tag_ids: payload.tag_ids,
        title: payload.title,
        content: payload.content,
        available: payload.available,
    };

    state
        .services
        .post_commands
        .update_post(&user, command)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    post,
    path = "/posts/delete/{id}",
    params(("id" = i64, Path, description = "Post id")),
    responses(
        (status = 200, description = "Post deleted.", body = MessageDto),
        (status = 404, description = "No such post owned by the caller.", body = ErrorBody)
    ),
    security(("bearerAuth" = [])),
    tag = "Posts"
)]
pub async fn delete_post(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Path(id): Path<i64>,
) -> HttpResult<Json<MessageDto>> {
    state
        .services
        .post_commands
        .delete_post(&user, DeletePostCommand { id })
        .await
        .into_http()?;

    Ok(Json(MessageDto::new("Post deleted.")))
}

#[utoipa::path(
    post,
    path = "/posts/image/{id}",
    params(("id" = i64, Path, description = "Post id")),
    request_body(content = ImageUploadForm, content_type = "multipart/form-data"),
    responses(
        (status = 200, description = "Image stored and attached.", body = PostDto),
        (status = 400, description = "Missing or non-image upload.", body = ErrorBody),
        (status = 404, description = "No such post owned by the caller.", body = ErrorBody)
    ),
    security(("bearerAuth" = [])),
    tag = "Posts"
)]
pub async fn upload_image(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Path(id): Path<i64>,
    multipart: Multipart,
) -> HttpResult<Json<PostDto>> {
    let upload = read_upload(multipart, "image").await?;

    state
        .services
        .post_commands
        .upload_image(&user, UploadPostImageCommand { post_id: id, upload })
        .await
        .into_http()
        .map(Json)
}
