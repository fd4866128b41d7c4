// tests/support/mocks/security.rs
use async_trait::async_trait;
use chrono::Duration;

use quill_core::application::{
    ApplicationResult,
    dto::{AuthTokenDto, AuthenticatedUser, TokenSubject},
    error::ApplicationError,
    ports::security::{PasswordHasher, TokenManager},
};
use quill_core::domain::user::UserId;

/* -------------------------------- PasswordHasher -------------------------------- */

/// `hashed:{password}` 形式で保存する平文ハッシャー
#[derive(Clone, Debug, Default)]
pub struct DummyPasswordHasher;

#[async_trait]
impl PasswordHasher for DummyPasswordHasher {
    async fn hash(&self, password: &str) -> ApplicationResult<String> {
        Ok(format!("hashed:{password}"))
    }

    async fn verify(&self, password: &str, expected_hash: &str) -> ApplicationResult<()> {
        if expected_hash == format!("hashed:{password}") {
            Ok(())
        } else {
            Err(ApplicationError::unauthorized("invalid credentials"))
        }
    }
}

/* -------------------------------- TokenManager -------------------------------- */

/// `token:{user_id}:{username}:{session_id}` 形式のトークンを発行・検証する
#[derive(Clone, Debug, Default)]
pub struct StaticTokenManager;

pub fn token_for(user_id: i64, username: &str, session_id: &str) -> String {
    format!("token:{user_id}:{username}:{session_id}")
}

#[async_trait]
impl TokenManager for StaticTokenManager {
    async fn issue(&self, subject: TokenSubject) -> ApplicationResult<AuthTokenDto> {
        let issued_at = super::time::fixed_now();
        Ok(AuthTokenDto {
            token: token_for(
                i64::from(subject.user_id),
                &subject.username,
                &subject.session_id,
            ),
            issued_at,
            expires_at: issued_at + Duration::hours(1),
            expires_in: 3600,
            session_id: subject.session_id,
        })
    }

    async fn authenticate(&self, token: &str) -> ApplicationResult<AuthenticatedUser> {
        let invalid = || ApplicationError::unauthorized("invalid token");
        let mut parts = token.splitn(4, ':');
        if parts.next() != Some("token") {
            return Err(invalid());
        }
        let id = parts
            .next()
            .and_then(|raw| raw.parse::<i64>().ok())
            .and_then(|raw| UserId::new(raw).ok())
            .ok_or_else(invalid)?;
        let username = parts.next().ok_or_else(invalid)?.to_string();
        let session_id = parts.next().ok_or_else(invalid)?.to_string();

        let now = super::time::fixed_now();
        Ok(AuthenticatedUser {
            id,
            username,
            issued_at: now,
            expires_at: now + Duration::hours(1),
            session_id,
        })
    }
}

/// トークンを経由せずにサービスへ渡す認証済みユーザー
pub fn actor(id: i64, username: &str) -> AuthenticatedUser {
    let now = super::time::fixed_now();
    AuthenticatedUser {
        id: UserId::new(id).expect("invalid user id"),
        username: username.into(),
        issued_at: now,
        expires_at: now + Duration::hours(1),
        session_id: format!("session-{id}"),
    }
}
