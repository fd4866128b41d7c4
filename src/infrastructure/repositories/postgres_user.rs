// src/infrastructure/repositories/postgres_user.rs
use super::{from_sql_count, map_sqlx, to_sql_offset};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::user::{
    AuthorSummary, EmailAddress, NewUser, PasswordHash, ProfileDescription, ProfileTitle, User,
    UserDetail, UserDetailUpdate, UserId, UserRepository, UserUpdate, Username,
};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool, Postgres, QueryBuilder};

const USER_COLUMNS: &str =
    "id, username, email, first_name, last_name, password_hash, is_active, created_at";

#[derive(Clone)]
pub struct PostgresUserRepository {
    pool: PgPool,
}

impl PostgresUserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn find_one(&self, column: &str, value: UserKey<'_>) -> DomainResult<Option<User>> {
        let mut builder: QueryBuilder<Postgres> = QueryBuilder::new("SELECT ");
        builder.push(USER_COLUMNS);
        builder.push(" FROM users WHERE ");
        builder.push(column);
        builder.push(" = ");
        match value {
            UserKey::Id(id) => builder.push_bind(id),
            UserKey::Text(text) => builder.push_bind(text.to_string()),
        };

        let row = builder
            .build_query_as::<UserRow>()
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?;

        row.map(User::try_from).transpose()
    }
}

enum UserKey<'a> {
    Id(i64),
    Text(&'a str),
}

#[derive(Debug, FromRow)]
struct UserRow {
    id: i64,
    username: String,
    email: String,
    first_name: String,
    last_name: String,
    password_hash: String,
    is_active: bool,
    created_at: DateTime<Utc>,
}

impl TryFrom<UserRow> for User {
    type Error = DomainError;

    fn try_from(row: UserRow) -> Result<Self, Self::Error> {
        Ok(User {
            id: UserId::new(row.id)?,
            username: Username::new(row.username)?,
            email: EmailAddress::new(row.email)?,
            first_name: row.first_name,
            last_name: row.last_name,
            password_hash: PasswordHash::new(row.password_hash)?,
            is_active: row.is_active,
            created_at: row.created_at,
        })
    }
}

#[derive(Debug, FromRow)]
struct DetailRow {
    user_id: i64,
    title: Option<String>,
    description: Option<String>,
    image: Option<String>,
}

impl TryFrom<DetailRow> for UserDetail {
    type Error = DomainError;

    fn try_from(row: DetailRow) -> Result<Self, Self::Error> {
        Ok(UserDetail {
            user_id: UserId::new(row.user_id)?,
            title: row.title.map(ProfileTitle::new).transpose()?,
            description: row.description.map(ProfileDescription::new).transpose()?,
            image: row.image,
        })
    }
}

#[derive(Debug, FromRow)]
struct AuthorRow {
    #[sqlx(flatten)]
    user: UserRow,
    detail_user_id: Option<i64>,
    detail_title: Option<String>,
    detail_description: Option<String>,
    detail_image: Option<String>,
    post_count: i64,
}

impl TryFrom<AuthorRow> for AuthorSummary {
    type Error = DomainError;

    fn try_from(row: AuthorRow) -> Result<Self, Self::Error> {
        let detail = row
            .detail_user_id
            .map(|user_id| {
                UserDetail::try_from(DetailRow {
                    user_id,
                    title: row.detail_title,
                    description: row.detail_description,
                    image: row.detail_image,
                })
            })
            .transpose()?;

        Ok(AuthorSummary {
            user: User::try_from(row.user)?,
            detail,
            post_count: from_sql_count(row.post_count),
        })
    }
}

#[async_trait]
impl UserRepository for PostgresUserRepository {
    async fn insert_with_detail(&self, new_user: NewUser) -> DomainResult<(User, UserDetail)> {
        let NewUser {
            username,
            email,
            first_name,
            last_name,
            password_hash,
            is_active,
            created_at,
        } = new_user;

        let mut tx = self.pool.begin().await.map_err(map_sqlx)?;

        let user_row = sqlx::query_as::<_, UserRow>(&format!(
            "INSERT INTO users (username, email, first_name, last_name, password_hash, is_active, created_at)
             VALUES ($1, $2, $3, $4, $5, $6, $7)
             RETURNING {USER_COLUMNS}"
        ))
        .bind(username.as_str())
        .bind(email.as_str())
        .bind(first_name.as_str())
        .bind(last_name.as_str())
        .bind(password_hash.as_str())
        .bind(is_active)
        .bind(created_at)
        .fetch_one(&mut *tx)
        .await
        .map_err(map_sqlx)?;

        let detail_row = sqlx::query_as::<_, DetailRow>(
            "INSERT INTO user_details (user_id) VALUES ($1)
             RETURNING user_id, title, description, image",
        )
        .bind(user_row.id)
        .fetch_one(&mut *tx)
        .await
        .map_err(map_sqlx)?;

        tx.commit().await.map_err(map_sqlx)?;

        Ok((User::try_from(user_row)?, UserDetail::try_from(detail_row)?))
    }

    async fn find_by_id(&self, id: UserId) -> DomainResult<Option<User>> {
        self.find_one("id", UserKey::Id(i64::from(id))).await
    }

    async fn find_by_username(&self, username: &Username) -> DomainResult<Option<User>> {
        self.find_one("username", UserKey::Text(username.as_str()))
            .await
    }

    async fn find_by_email(&self, email: &EmailAddress) -> DomainResult<Option<User>> {
        self.find_one("email", UserKey::Text(email.as_str())).await
    }

    async fn update(&self, update: UserUpdate) -> DomainResult<User> {
        if update.is_empty() {
            return Err(DomainError::Validation(
                "no fields provided for update".into(),
            ));
        }

        let UserUpdate {
            id,
            username,
            email,
            first_name,
            last_name,
            password_hash,
        } = update;

        let mut builder: QueryBuilder<Postgres> = QueryBuilder::new("UPDATE users SET id = id");
        if let Some(username) = username {
            builder.push(", username = ");
            builder.push_bind(String::from(username));
        }
        if let Some(email) = email {
            builder.push(", email = ");
            builder.push_bind(String::from(email));
        }
        if let Some(first_name) = first_name {
            builder.push(", first_name = ");
            builder.push_bind(String::from(first_name));
        }
        if let Some(last_name) = last_name {
            builder.push(", last_name = ");
            builder.push_bind(String::from(last_name));
        }
        if let Some(password_hash) = password_hash {
            builder.push(", password_hash = ");
            builder.push_bind(String::from(password_hash));
        }
        builder.push(" WHERE id = ");
        builder.push_bind(i64::from(id));
        builder.push(" RETURNING ");
        builder.push(USER_COLUMNS);

        let row = builder
            .build_query_as::<UserRow>()
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?
            .ok_or_else(|| DomainError::NotFound("user not found".into()))?;

        User::try_from(row)
    }

    async fn find_detail(&self, id: UserId) -> DomainResult<Option<UserDetail>> {
        let row = sqlx::query_as::<_, DetailRow>(
            "SELECT user_id, title, description, image FROM user_details WHERE user_id = $1",
        )
        .bind(i64::from(id))
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(UserDetail::try_from).transpose()
    }

    /// Title and description are overwritten; the image only when one is given.
    async fn update_detail(&self, update: UserDetailUpdate) -> DomainResult<UserDetail> {
        let row = sqlx::query_as::<_, DetailRow>(
            "INSERT INTO user_details (user_id, title, description, image)
             VALUES ($1, $2, $3, $4)
             ON CONFLICT ON CONSTRAINT user_details_user_id_key DO UPDATE
             SET title = EXCLUDED.title,
                 description = EXCLUDED.description,
                 image = COALESCE(EXCLUDED.image, user_details.image)
             RETURNING user_id, title, description, image",
        )
        .bind(i64::from(update.user_id))
        .bind(update.title.map(String::from))
        .bind(update.description.map(String::from))
        .bind(update.image)
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)?;

        UserDetail::try_from(row)
    }

    async fn count_authors(&self) -> DomainResult<u64> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(DISTINCT author_id) FROM posts")
            .fetch_one(&self.pool)
            .await
            .map(from_sql_count)
            .map_err(map_sqlx)
    }

    async fn list_authors(&self, limit: u32, offset: u64) -> DomainResult<Vec<AuthorSummary>> {
        let rows = sqlx::query_as::<_, AuthorRow>(
            "SELECT u.id, u.username, u.email, u.first_name, u.last_name, u.password_hash,
                    u.is_active, u.created_at,
                    d.user_id AS detail_user_id, d.title AS detail_title,
                    d.description AS detail_description, d.image AS detail_image,
                    COUNT(p.id) AS post_count
             FROM users u
             JOIN posts p ON p.author_id = u.id
             LEFT JOIN user_details d ON d.user_id = u.id
             GROUP BY u.id, d.id
             ORDER BY post_count DESC, u.id
             LIMIT $1 OFFSET $2",
        )
        .bind(i64::from(limit))
        .bind(to_sql_offset(offset))
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        rows.into_iter().map(AuthorSummary::try_from).collect()
    }
}
