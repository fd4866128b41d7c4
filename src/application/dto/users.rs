use crate::domain::user::{AuthorSummary, User, UserDetail};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::serde_time;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UserDto {
    pub id: i64,
    pub username: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub is_active: bool,
    #[serde(with = "serde_time")]
    pub created_at: DateTime<Utc>,
}

impl From<User> for UserDto {
    fn from(user: User) -> Self {
        Self {
            id: user.id.into(),
            username: user.username.into(),
            email: user.email.into(),
            first_name: user.first_name,
            last_name: user.last_name,
            is_active: user.is_active,
            created_at: user.created_at,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct UserDetailDto {
    pub title: Option<String>,
    pub description: Option<String>,
    pub image: Option<String>,
}

impl From<UserDetail> for UserDetailDto {
    fn from(detail: UserDetail) -> Self {
        Self {
            title: detail.title.map(Into::into),
            description: detail.description.map(Into::into),
            image: detail.image,
        }
    }
}

/// Account plus its one-to-one profile record.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ProfileDto {
    pub user: UserDto,
    pub detail: UserDetailDto,
}

impl ProfileDto {
    pub fn from_parts(user: User, detail: Option<UserDetail>) -> Self {
        Self {
            user: user.into(),
            detail: detail.map(UserDetailDto::from).unwrap_or_default(),
        }
    }
}

/// Public view of an author; no email address.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AuthorDto {
    pub id: i64,
    pub username: String,
    pub first_name: String,
    pub last_name: String,
    pub detail: UserDetailDto,
    pub post_count: u64,
}

impl AuthorDto {
    pub fn from_parts(user: User, detail: Option<UserDetail>, post_count: u64) -> Self {
        Self {
            id: user.id.into(),
            username: user.username.into(),
            first_name: user.first_name,
            last_name: user.last_name,
            detail: detail.map(UserDetailDto::from).unwrap_or_default(),
            post_count,
        }
    }
}

impl From<AuthorSummary> for AuthorDto {
    fn from(summary: AuthorSummary) -> Self {
        Self::from_parts(summary.user, summary.detail, summary.post_count)
    }
}
