// src/presentation/http/controllers/pages.rs
use crate::application::{
    commands::contact::ContactCommand,
    dto::{AboutPageDto, HomePageDto, MessageDto, SidebarDto},
};
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json};

use super::requests::ContactRequest;

#[utoipa::path(
    get,
    path = "/",
    responses((status = 200, description = "Latest, random and popular posts.", body = HomePageDto)),
    tag = "Pages"
)]
pub async fn home(Extension(state): Extension<HttpState>) -> HttpResult<Json<HomePageDto>> {
    state.services.post_queries.home().await.into_http().map(Json)
}

#[utoipa::path(
    get,
    path = "/about",
    responses((status = 200, description = "Static site description.", body = AboutPageDto)),
    tag = "Pages"
)]
pub async fn about(Extension(state): Extension<HttpState>) -> HttpResult<Json<AboutPageDto>> {
    state.services.post_queries.about().await.into_http().map(Json)
}

#[utoipa::path(
    get,
    path = "/contact",
    responses((status = 200, description = "Sidebar shown next to the contact form.", body = SidebarDto)),
    tag = "Pages"
)]
pub async fn contact_page(Extension(state): Extension<HttpState>) -> HttpResult<Json<SidebarDto>> {
    state
        .services
        .post_queries
        .sidebar()
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    post,
    path = "/contact",
    request_body = ContactRequest,
    responses(
        (status = 200, description = "Message handed to the mail relay.", body = MessageDto),
        (status = 400, description = "Missing subject, message or a malformed address.", body = crate::presentation::http::error::ErrorResponse),
        (status = 502, description = "Relay rejected the message.", body = crate::presentation::http::error::ErrorResponse),
        (status = 503, description = "Relay temporarily unreachable.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Pages"
)]
pub async fn send_contact(
    Extension(state): Extension<HttpState>,
    Json(payload): Json<ContactRequest>,
) -> HttpResult<Json<MessageDto>> {
    let command = ContactCommand {
        subject: payload.subject,
        email: payload.email,
        message: payload.message,
    };

    state
        .services
        .contact
        .send(command)
        .await
        .into_http()
        .map(Json)
}
