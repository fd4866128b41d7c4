// src/presentation/http/controllers/users.rs
use crate::application::{
    commands::users::{
        ChangePasswordCommand, LoginUserCommand, RegisterUserCommand, UpdateProfileCommand,
        UploadAvatarCommand,
    },
    dto::{
        AuthorDetailPageDto, AuthorsPageDto, LoginResultDto, MessageDto, ProfileDto,
        ProfilePageDto, UserDto,
    },
};
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::Authenticated;
use crate::presentation::http::state::HttpState;
use axum::{
    Extension, Json,
    extract::{Multipart, Path, Query},
    http::StatusCode,
};

use super::read_upload;
use super::requests::{
    ChangePasswordRequest, ImageUploadForm, LoginRequest, PageParams, ProfileUpdateRequest,
    RegisterRequest,
};

type ErrorBody = crate::presentation::http::error::ErrorResponse;

#[utoipa::path(
    post,
    path = "/user/register",
    request_body = RegisterRequest,
    responses(
        (status = 201, description = "Account and empty profile created.", body = UserDto),
        (status = 400, description = "Passwords differ or fail the policy.", body = ErrorBody),
        (status = 409, description = "Username or email already taken.", body = ErrorBody)
    ),
    tag = "Users"
)]
pub async fn register(
    Extension(state): Extension<HttpState>,
    Json(payload): Json<RegisterRequest>,
) -> HttpResult<(StatusCode, Json<UserDto>)> {
    let command = RegisterUserCommand {
        first_name: payload.first_name,
        last_name: payload.last_name,
        username: payload.username,
        email: payload.email,
        password: payload.password,
        repassword: payload.repassword,
    };

    let user = state
        .services
        .user_commands
        .register(command)
        .await
        .into_http()?;

    Ok((StatusCode::CREATED, Json(user)))
}

#[utoipa::path(
    post,
    path = "/user/login",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Bearer token for a new session.", body = LoginResultDto),
        (status = 401, description = "Unknown username or wrong password.", body = ErrorBody),
        (status = 403, description = "Account disabled.", body = ErrorBody)
    ),
    tag = "Users"
)]
pub async fn login(
    Extension(state): Extension<HttpState>,
    Json(payload): Json<LoginRequest>,
) -> HttpResult<Json<LoginResultDto>> {
    let command = LoginUserCommand {
        username: payload.username,
        password: payload.password,
    };

    state
        .services
        .user_commands
        .login(command)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    post,
    path = "/user/logout",
    responses(
        (status = 200, description = "Session revoked.", body = MessageDto),
        (status = 401, description = "Not signed in.", body = ErrorBody)
    ),
    security(("bearerAuth" = [])),
    tag = "Users"
)]
pub async fn logout(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
) -> HttpResult<Json<MessageDto>> {
    state
        .services
        .user_commands
        .logout(&user)
        .await
        .into_http()?;

    Ok(Json(MessageDto::new("You have been logged out.")))
}

#[utoipa::path(
    get,
    path = "/user/profile/detail",
    params(PageParams),
    responses(
        (status = 200, description = "Own profile with every own post.", body = ProfilePageDto),
        (status = 401, description = "Not signed in.", body = ErrorBody)
    ),
    security(("bearerAuth" = [])),
    tag = "Users"
)]
pub async fn profile_detail(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Query(params): Query<PageParams>,
) -> HttpResult<Json<ProfilePageDto>> {
    state
        .services
        .user_queries
        .profile_page(&user, params.page())
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/user/profile/update",
    responses((status = 200, description = "Current profile values.", body = ProfileDto)),
    security(("bearerAuth" = [])),
    tag = "Users"
)]
pub async fn profile_form(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
) -> HttpResult<Json<ProfileDto>> {
    state
        .services
        .user_queries
        .profile(&user)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    post,
    path = "/user/profile/update",
    request_body = ProfileUpdateRequest,
    responses(
        (status = 200, description = "Profile updated.", body = ProfileDto),
        (status = 409, description = "Username or email already taken.", body = ErrorBody)
    ),
    security(("bearerAuth" = [])),
    tag = "Users"
)]
pub async fn update_profile(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Json(payload): Json<ProfileUpdateRequest>,
) -> HttpResult<Json<ProfileDto>> {
    let command = UpdateProfileCommand {
        first_name: payload.first_name,
        last_name: payload.last_name,
        username: payload.username,
        email: payload.email,
        title: payload.title,
        description: payload.description,
    };

    state
        .services
        .user_commands
        .update_profile(&user, command)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    post,
    path = "/user/profile/avatar",
    request_body(content = ImageUploadForm, content_type = "multipart/form-data"),
    responses(
        (status = 200, description = "Avatar replaced.", body = ProfileDto),
        (status = 400, description = "Missing or non-image upload.", body = ErrorBody)
    ),
    security(("bearerAuth" = [])),
    tag = "Users"
)]
pub async fn upload_avatar(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    multipart: Multipart,
) -> HttpResult<Json<ProfileDto>> {
    let upload = read_upload(multipart, "image").await?;

    state
        .services
        .user_commands
        .upload_avatar(&user, UploadAvatarCommand { upload })
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    post,
    path = "/user/change-password",
    request_body = ChangePasswordRequest,
    responses(
        (status = 200, description = "Password changed.", body = MessageDto),
        (status = 400, description = "Old password wrong or new pair invalid.", body = ErrorBody)
    ),
    security(("bearerAuth" = [])),
    tag = "Users"
)]
pub async fn change_password(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Json(payload): Json<ChangePasswordRequest>,
) -> HttpResult<Json<MessageDto>> {
    let command = ChangePasswordCommand {
        old_password: payload.old_password,
        new_password1: payload.new_password1,
        new_password2: payload.new_password2,
    };

    state
        .services
        .user_commands
        .change_password(&user, command)
        .await
        .into_http()?;

    Ok(Json(MessageDto::new(
        "Your password has been changed successfully.",
    )))
}

#[utoipa::path(
    get,
    path = "/user/all",
    params(PageParams),
    responses((status = 200, description = "Authors ordered by post count.", body = AuthorsPageDto)),
    tag = "Users"
)]
pub async fn authors(
    Extension(state): Extension<HttpState>,
    Query(params): Query<PageParams>,
) -> HttpResult<Json<AuthorsPageDto>> {
    state
        .services
        .user_queries
        .authors(params.page())
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/user/detail/{id}",
    params(("id" = i64, Path, description = "Author id"), PageParams),
    responses(
        (status = 200, description = "Author with their available posts.", body = AuthorDetailPageDto),
        (status = 404, description = "Unknown author.", body = ErrorBody)
    ),
    tag = "Users"
)]
pub async fn author_detail(
    Extension(state): Extension<HttpState>,
    Path(id): Path<i64>,
    Query(params): Query<PageParams>,
) -> HttpResult<Json<AuthorDetailPageDto>> {
    state
        .services
        .user_queries
        .author_detail(id, params.page())
        .await
        .into_http()
        .map(Json)
}
