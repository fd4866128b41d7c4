// tests/support/helpers.rs
use std::sync::Arc;

use axum::{
    Router,
    body::{self, Body},
    http::{Request, StatusCode, header},
    response::Response,
};
use chrono::Utc;
use serde_json::Value;
use tower_http::normalize_path::NormalizePath;

use quill_core::{
    application::{
        dto::{AuthenticatedUser, CategoryDto, PostDto, TagDto},
        commands::posts::CreatePostCommand,
        services::{Adapters, ApplicationServices, Repositories},
    },
    domain::user::{
        EmailAddress, NewUser, PasswordHash, PersonName, UserRepository, Username,
    },
    infrastructure::security::session_store::InMemorySessionRevocationStore,
    presentation::http::{
        routes::{RouterSettings, build_router},
        state::HttpState,
    },
};

use super::mocks::{
    DummyPasswordHasher, DummySlug, FirstNSampler, InMemoryCatalog, InMemoryMedia,
    RecordingMailer, StaticTokenManager, SteppingClock, actor, token_for,
};

/// シード済みユーザーの平文パスワード
pub const SEED_PASSWORD: &str = "correct-horse-9";

/// インメモリのリポジトリとモックアダプタで組み立てたアプリケーション
pub struct TestApp {
    pub catalog: Arc<InMemoryCatalog>,
    pub mailer: Arc<RecordingMailer>,
    pub media: Arc<InMemoryMedia>,
    pub services: Arc<ApplicationServices>,
}

impl TestApp {
    pub fn new() -> Self {
        Self::with_mailer(RecordingMailer::default())
    }

    pub fn with_mailer(mailer: RecordingMailer) -> Self {
        let catalog = Arc::new(InMemoryCatalog::new());
        let mailer = Arc::new(mailer);
        let media = Arc::new(InMemoryMedia::default());

        let repos = Repositories {
            users: catalog.clone(),
            post_writes: catalog.clone(),
            post_reads: catalog.clone(),
            categories: catalog.clone(),
            tags: catalog.clone(),
            comments: catalog.clone(),
            hits: catalog.clone(),
        };
        let adapters = Adapters {
            password_hasher: Arc::new(DummyPasswordHasher),
            token_manager: Arc::new(StaticTokenManager),
            session_revocation_store: Arc::new(InMemorySessionRevocationStore::new()),
            mailer: mailer.clone(),
            media: media.clone(),
            sampler: Arc::new(FirstNSampler),
            clock: Arc::new(SteppingClock::default()),
            slugger: Arc::new(DummySlug),
            contact_recipient: "owner@example.com".to_string(),
        };

        Self {
            catalog,
            mailer,
            media,
            services: Arc::new(ApplicationServices::new(repos, adapters)),
        }
    }

    pub fn router(&self) -> NormalizePath<Router> {
        let state = HttpState::new(Arc::clone(&self.services));
        build_router(state, &RouterSettings::default())
    }

    /// パスワード `SEED_PASSWORD` を持つユーザーを直接登録する
    pub async fn seed_user(&self, username: &str) -> AuthenticatedUser {
        let new_user = NewUser::new(
            Username::new(username).unwrap(),
            EmailAddress::new(format!("{username}@example.com")).unwrap(),
            PersonName::new("Test").unwrap(),
            PersonName::new("User").unwrap(),
            PasswordHash::new(format!("hashed:{SEED_PASSWORD}")).unwrap(),
            Utc::now(),
        );
        let (user, _) = self.catalog.insert_with_detail(new_user).await.unwrap();
        actor(i64::from(user.id), username)
    }

    pub async fn seed_category(&self, name: &str) -> CategoryDto {
        self.services
            .taxonomy_commands
            .create_category(name)
            .await
            .unwrap()
    }

    pub async fn seed_tag(&self, name: &str) -> TagDto {
        self.services.taxonomy_commands.create_tag(name).await.unwrap()
    }

    pub async fn seed_post(
        &self,
        author: &AuthenticatedUser,
        category_id: i64,
        title: &str,
        content: &str,
        available: bool,
    ) -> PostDto {
        let command = CreatePostCommand::builder()
            .category(category_id)
            .title(title)
            .content(content)
            .available(available)
            .build()
            .unwrap();
        self.services
            .post_commands
            .create_post(author, command)
            .await
            .unwrap()
    }
}

/// 認証済みユーザーに対応する Bearer ヘッダー値
pub fn bearer(user: &AuthenticatedUser) -> String {
    format!(
        "Bearer {}",
        token_for(i64::from(user.id), &user.username, &user.session_id)
    )
}

pub fn json_request(method: &str, uri: &str, body: &Value, auth: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json");
    if let Some(auth) = auth {
        builder = builder.header(header::AUTHORIZATION, auth);
    }
    builder
        .body(Body::from(serde_json::to_vec(body).unwrap()))
        .unwrap()
}

pub async fn json_body(resp: Response) -> Value {
    let bytes = body::to_bytes(resp.into_body(), 1024 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&bytes).expect("expected json body")
}

/// Assert that a response is an ErrorResponse JSON with the expected status and error string.
pub async fn assert_error_response(resp: Response, expected_status: StatusCode, expected_error: &str) {
    assert_eq!(resp.status(), expected_status);
    let ct = resp
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("")
        .to_string();
    assert!(ct.starts_with("application/json"), "unexpected content-type: {ct}");
    let json = json_body(resp).await;
    let err_field = json.get("error").and_then(Value::as_str).unwrap_or("");
    let msg_field = json.get("message").and_then(Value::as_str).unwrap_or("");
    assert_eq!(err_field, expected_error, "unexpected error field: {err_field}");
    assert!(!msg_field.is_empty(), "expected non-empty message field in ErrorResponse");
}
