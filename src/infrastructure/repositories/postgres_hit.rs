// src/infrastructure/repositories/postgres_hit.rs
use super::{from_sql_count, map_sqlx};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::hit::{
    ClientAddress, HitCount, HitCountId, HitCountRepository, PopularityScope, PostViewCount,
};
use crate::domain::post::PostId;
use async_trait::async_trait;
use sqlx::{FromRow, PgPool};

#[derive(Clone)]
pub struct PostgresHitCountRepository {
    pool: PgPool,
}

impl PostgresHitCountRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct HitRow {
    id: i64,
    ip: String,
}

impl TryFrom<HitRow> for HitCount {
    type Error = DomainError;

    fn try_from(row: HitRow) -> Result<Self, Self::Error> {
        Ok(HitCount {
            id: HitCountId::new(row.id)?,
            address: ClientAddress::new(row.ip)?,
        })
    }
}

#[derive(Debug, FromRow)]
struct ViewCountRow {
    post_id: i64,
    views: i64,
}

#[async_trait]
impl HitCountRepository for PostgresHitCountRepository {
    async fn find_by_address(&self, address: &ClientAddress) -> DomainResult<Option<HitCount>> {
        let row = sqlx::query_as::<_, HitRow>("SELECT id, ip FROM hit_counts WHERE ip = $1")
            .bind(address.as_str())
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?;

        row.map(HitCount::try_from).transpose()
    }

    async fn insert(&self, address: &ClientAddress) -> DomainResult<HitCount> {
        let inserted = sqlx::query_as::<_, HitRow>(
            "INSERT INTO hit_counts (ip) VALUES ($1)
             ON CONFLICT ON CONSTRAINT hit_counts_ip_key DO NOTHING
             RETURNING id, ip",
        )
        .bind(address.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        match inserted {
            Some(row) => HitCount::try_from(row),
            None => self
                .find_by_address(address)
                .await?
                .ok_or_else(|| DomainError::Persistence("hit count vanished after conflict".into())),
        }
    }

    async fn attach(&self, post_id: PostId, hit_id: HitCountId) -> DomainResult<()> {
        sqlx::query(
            "INSERT INTO post_views (post_id, hit_count_id) VALUES ($1, $2)
             ON CONFLICT DO NOTHING",
        )
        .bind(i64::from(post_id))
        .bind(i64::from(hit_id))
        .execute(&self.pool)
        .await
        .map_err(map_sqlx)?;
        Ok(())
    }

    async fn view_counts(&self, scope: &PopularityScope) -> DomainResult<Vec<PostViewCount>> {
        let rows = sqlx::query_as::<_, ViewCountRow>(
            "SELECT p.id AS post_id, COUNT(v.hit_count_id) AS views
             FROM posts p
             LEFT JOIN post_views v ON v.post_id = p.id
             WHERE p.available = TRUE AND ($1::BIGINT IS NULL OR p.category_id = $1)
             GROUP BY p.id
             ORDER BY p.id",
        )
        .bind(scope.category_id.map(i64::from))
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        rows.into_iter()
            .map(|row| -> DomainResult<PostViewCount> {
                Ok(PostViewCount {
                    post_id: PostId::new(row.post_id)?,
                    views: from_sql_count(row.views),
                })
            })
            .collect()
    }
}
