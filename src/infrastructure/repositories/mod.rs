// src/infrastructure/repositories/mod.rs
mod error;
mod postgres_comment;
mod postgres_hit;
mod postgres_post;
mod postgres_taxonomy;
mod postgres_user;

pub use error::map_sqlx;
pub use postgres_comment::PostgresCommentRepository;
pub use postgres_hit::PostgresHitCountRepository;
pub use postgres_post::{PostgresPostReadRepository, PostgresPostWriteRepository};
pub use postgres_taxonomy::{PostgresCategoryRepository, PostgresTagRepository};
pub use postgres_user::PostgresUserRepository;

/// Converts a page offset to the signed type Postgres expects.
fn to_sql_offset(offset: u64) -> i64 {
    i64::try_from(offset).unwrap_or(i64::MAX)
}

fn from_sql_count(count: i64) -> u64 {
    u64::try_from(count).unwrap_or(0)
}
