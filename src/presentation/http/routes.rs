// src/presentation/http/routes.rs
use crate::presentation::http::state::HttpState;
use crate::presentation::http::{
    controllers::{comments, pages, posts, users},
    middleware::rate_limit::account_rate_limit_layer,
    openapi::{self, StatusResponse},
};
use axum::{
    Extension, Router,
    http::{HeaderValue, Method},
    routing::{get, post},
};
use std::{path::PathBuf, time::Duration};
use tower::Layer;
use tower_http::{
    compression::CompressionLayer,
    cors::{AllowOrigin, Any, CorsLayer},
    normalize_path::{NormalizePath, NormalizePathLayer},
    services::ServeDir,
    trace::TraceLayer,
};
use tracing::warn;

/// Knobs the router needs from configuration.
#[derive(Debug, Clone)]
pub struct RouterSettings {
    pub rate_limit: bool,
    pub allowed_origins: Vec<String>,
    pub media_root: PathBuf,
    pub media_url_prefix: String,
}

impl Default for RouterSettings {
    fn default() -> Self {
        Self {
            rate_limit: false,
            allowed_origins: Vec::new(),
            media_root: PathBuf::from("media"),
            media_url_prefix: "/media".to_string(),
        }
    }
}

fn cors_layer(allowed_origins: &[String]) -> CorsLayer {
    let origins: Vec<HeaderValue> = allowed_origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                warn!(%origin, "ignoring unparsable CORS origin");
                None
            }
        })
        .collect();

    let allow_origin = if origins.is_empty() {
        AllowOrigin::from(Any)
    } else {
        AllowOrigin::list(origins)
    };

    CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers(Any)
        .max_age(Duration::from_secs(3600))
}

fn media_mount(prefix: &str) -> String {
    let trimmed = prefix.trim().trim_matches('/');
    if trimmed.is_empty() {
        "/media".to_string()
    } else {
        format!("/{trimmed}")
    }
}

fn account_routes(rate_limit: bool) -> Router {
    let router = Router::new()
        .route("/user/register", post(users::register))
        .route("/user/login", post(users::login))
        .route("/user/change-password", post(users::change_password));

    if rate_limit {
        router.layer(account_rate_limit_layer())
    } else {
        router
    }
}

/// Full application: routes, shared state, tower-http layers and trailing-slash
/// normalisation (so `/posts/` and `/posts` both resolve).
pub fn build_router(state: HttpState, settings: &RouterSettings) -> NormalizePath<Router> {
    let router = Router::new()
        .merge(openapi::docs_router())
        .route("/health", get(health))
        .route("/", get(pages::home))
        .route("/about", get(pages::about))
        .route(
            "/contact",
            get(pages::contact_page).post(pages::send_contact),
        )
        .route("/posts", get(posts::list_posts))
        .route("/posts/search", get(posts::search))
        .route("/posts/categories/{slug}", get(posts::list_by_category))
        .route("/posts/tags/{slug}", get(posts::list_by_tag))
        .route(
            "/posts/create",
            get(posts::create_form).post(posts::create_post),
        )
        .route(
            "/posts/update/{slug}",
            get(posts::update_form).post(posts::update_post),
        )
        .route("/posts/delete/{id}", post(posts::delete_post))
        .route("/posts/image/{id}", post(posts::upload_image))
        .route("/posts/comment/{post_id}", post(comments::add_comment))
        .route(
            "/posts/{category_slug}/{id}/{slug}",
            get(posts::post_detail),
        )
        .merge(account_routes(settings.rate_limit))
        .route("/user/logout", post(users::logout))
        .route("/user/profile/detail", get(users::profile_detail))
        .route(
            "/user/profile/update",
            get(users::profile_form).post(users::update_profile),
        )
        .route("/user/profile/avatar", post(users::upload_avatar))
        .route("/user/all", get(users::authors))
        .route("/user/detail/{id}", get(users::author_detail))
        .nest_service(
            &media_mount(&settings.media_url_prefix),
            ServeDir::new(&settings.media_root),
        )
        .layer(TraceLayer::new_for_http())
        .layer(CompressionLayer::new())
        .layer(cors_layer(&settings.allowed_origins))
        .layer(Extension(state));

    NormalizePathLayer::trim_trailing_slash().layer(router)
}

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service health check.", body = crate::presentation::http::openapi::StatusResponse)
    ),
    tag = "System"
)]
pub async fn health() -> axum::Json<StatusResponse> {
    axum::Json(StatusResponse {
        status: "ok".into(),
    })
}
