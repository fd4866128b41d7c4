// src/infrastructure/repositories/postgres_post.rs
use std::collections::HashMap;

use super::{from_sql_count, map_sqlx, to_sql_offset};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::post::{
    NewPost, Post, PostContent, PostFilter, PostId, PostReadRepository, PostRecord, PostTitle,
    PostUpdate, PostWriteRepository,
};
use crate::domain::slug::Slug;
use crate::domain::taxonomy::{Category, CategoryId, Tag, TagId, TaxonomyName};
use crate::domain::user::{UserId, Username};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgConnection, PgPool, Postgres, QueryBuilder};

const POST_COLUMNS: &str = "id, title, slug, content, image, author_id, category_id, available, created_at";

const RECORD_SELECT: &str = "SELECT p.id, p.title, p.slug, p.content, p.image, p.author_id, \
     p.category_id, p.available, p.created_at, \
     c.name AS category_name, c.slug AS category_slug, u.username AS author_username, \
     (SELECT COUNT(*) FROM post_views v WHERE v.post_id = p.id) AS view_count \
     FROM posts p \
     JOIN categories c ON c.id = p.category_id \
     JOIN users u ON u.id = p.author_id";

#[derive(Clone)]
pub struct PostgresPostWriteRepository {
    pool: PgPool,
}

impl PostgresPostWriteRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Clone)]
pub struct PostgresPostReadRepository {
    pool: PgPool,
}

impl PostgresPostReadRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct PostRow {
    id: i64,
    title: String,
    slug: String,
    content: String,
    image: Option<String>,
    author_id: i64,
    category_id: i64,
    available: bool,
    created_at: DateTime<Utc>,
}

impl PostRow {
    fn into_post(self, tag_ids: Vec<TagId>) -> DomainResult<Post> {
        Ok(Post {
            id: PostId::new(self.id)?,
            title: PostTitle::new(self.title)?,
            slug: Slug::new(self.slug)?,
            content: PostContent::new(self.content)?,
            image: self.image,
            author_id: UserId::new(self.author_id)?,
            category_id: CategoryId::new(self.category_id)?,
            tag_ids,
            available: self.available,
            created_at: self.created_at,
        })
    }
}

#[derive(Debug, FromRow)]
struct RecordRow {
    #[sqlx(flatten)]
    post: PostRow,
    category_name: String,
    category_slug: String,
    author_username: String,
    view_count: i64,
}

#[derive(Debug, FromRow)]
struct PostTagRow {
    post_id: i64,
    id: i64,
    name: String,
    slug: String,
}

impl TryFrom<PostTagRow> for Tag {
    type Error = DomainError;

    fn try_from(row: PostTagRow) -> Result<Self, Self::Error> {
        Ok(Tag {
            id: TagId::new(row.id)?,
            name: TaxonomyName::new(row.name)?,
            slug: Slug::new(row.slug)?,
        })
    }
}

async fn replace_tags(
    conn: &mut PgConnection,
    post_id: i64,
    tag_ids: &[TagId],
) -> Result<(), sqlx::Error> {
    sqlx::query("DELETE FROM post_tags WHERE post_id = $1")
        .bind(post_id)
        .execute(&mut *conn)
        .await?;

    if tag_ids.is_empty() {
        return Ok(());
    }

    let ids: Vec<i64> = tag_ids.iter().copied().map(i64::from).collect();
    sqlx::query(
        "INSERT INTO post_tags (post_id, tag_id)
         SELECT $1, tag_id FROM UNNEST($2::BIGINT[]) AS tag_id
         ON CONFLICT DO NOTHING",
    )
    .bind(post_id)
    .bind(&ids)
    .execute(&mut *conn)
    .await?;

    Ok(())
}

async fn tag_ids_of(conn: &mut PgConnection, post_id: i64) -> Result<Vec<i64>, sqlx::Error> {
    sqlx::query_scalar::<_, i64>(
        "SELECT tag_id FROM post_tags WHERE post_id = $1 ORDER BY tag_id",
    )
    .bind(post_id)
    .fetch_all(&mut *conn)
    .await
}

fn to_tag_ids(ids: Vec<i64>) -> DomainResult<Vec<TagId>> {
    ids.into_iter().map(TagId::new).collect()
}

#[async_trait]
impl PostWriteRepository for PostgresPostWriteRepository {
    async fn insert(&self, post: NewPost) -> DomainResult<Post> {
        let NewPost {
            title,
            slug,
            content,
            author_id,
            category_id,
            tag_ids,
            available,
            created_at,
        } = post;

        let mut tx = self.pool.begin().await.map_err(map_sqlx)?;

        let row = sqlx::query_as::<_, PostRow>(&format!(
            "INSERT INTO posts (title, slug, content, author_id, category_id, available, created_at)
             VALUES ($1, $2, $3, $4, $5, $6, $7)
             RETURNING {POST_COLUMNS}"
        ))
        .bind(title.as_str())
        .bind(slug.as_str())
        .bind(content.as_str())
        .bind(i64::from(author_id))
        .bind(i64::from(category_id))
        .bind(available)
        .bind(created_at)
        .fetch_one(&mut *tx)
        .await
        .map_err(map_sqlx)?;

        replace_tags(&mut tx, row.id, &tag_ids)
            .await
            .map_err(map_sqlx)?;
        tx.commit().await.map_err(map_sqlx)?;

        row.into_post(tag_ids)
    }

    async fn update(&self, update: PostUpdate) -> DomainResult<Post> {
        let PostUpdate {
            id,
            title,
            slug,
            content,
            category_id,
            tag_ids,
            available,
            image,
        } = update;

        let mut builder: QueryBuilder<Postgres> = QueryBuilder::new("UPDATE posts SET id = id");

        if let Some(title) = title {
            builder.push(", title = ");
            builder.push_bind(title.into_inner());
        }
        if let Some(slug) = slug {
            builder.push(", slug = ");
            builder.push_bind(slug.into_inner());
        }
        if let Some(content) = content {
            builder.push(", content = ");
            builder.push_bind(content.into_inner());
        }
        if let Some(category_id) = category_id {
            builder.push(", category_id = ");
            builder.push_bind(i64::from(category_id));
        }
        if let Some(available) = available {
            builder.push(", available = ");
            builder.push_bind(available);
        }
        if let Some(image) = image {
            builder.push(", image = ");
            builder.push_bind(image);
        }

        builder.push(" WHERE id = ");
        builder.push_bind(i64::from(id));
        builder.push(" RETURNING ");
        builder.push(POST_COLUMNS);

        let mut tx = self.pool.begin().await.map_err(map_sqlx)?;

        let row = builder
            .build_query_as::<PostRow>()
            .fetch_optional(&mut *tx)
            .await
            .map_err(map_sqlx)?
            .ok_or_else(|| DomainError::NotFound("post not found".into()))?;

        if let Some(tag_ids) = &tag_ids {
            replace_tags(&mut tx, row.id, tag_ids)
                .await
                .map_err(map_sqlx)?;
        }
        let current_tags = tag_ids_of(&mut tx, row.id).await.map_err(map_sqlx)?;
        tx.commit().await.map_err(map_sqlx)?;

        row.into_post(to_tag_ids(current_tags)?)
    }

    async fn delete(&self, id: PostId) -> DomainResult<()> {
        let result = sqlx::query("DELETE FROM posts WHERE id = $1")
            .bind(i64::from(id))
            .execute(&self.pool)
            .await
            .map_err(map_sqlx)?;
        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound("post not found".into()));
        }
        Ok(())
    }
}

fn escape_like(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len() + 2);
    escaped.push('%');
    for ch in raw.chars() {
        if matches!(ch, '\\' | '%' | '_') {
            escaped.push('\\');
        }
        escaped.push(ch);
    }
    escaped.push('%');
    escaped
}

impl PostgresPostReadRepository {
    fn apply_filter(builder: &mut QueryBuilder<'_, Postgres>, filter: &PostFilter) {
        builder.push(" WHERE TRUE");

        if !filter.include_unavailable {
            builder.push(" AND p.available = TRUE");
        }
        if let Some(category_id) = filter.category_id {
            builder.push(" AND p.category_id = ");
            builder.push_bind(i64::from(category_id));
        }
        if let Some(tag_id) = filter.tag_id {
            builder.push(" AND EXISTS (SELECT 1 FROM post_tags pt WHERE pt.post_id = p.id AND pt.tag_id = ");
            builder.push_bind(i64::from(tag_id));
            builder.push(")");
        }
        if let Some(author_id) = filter.author_id {
            builder.push(" AND p.author_id = ");
            builder.push_bind(i64::from(author_id));
        }
        if let Some(text) = &filter.search {
            let pattern = escape_like(text);
            builder.push(" AND (p.title ILIKE ");
            builder.push_bind(pattern.clone());
            builder.push(" OR p.content ILIKE ");
            builder.push_bind(pattern);
            builder.push(")");
        }
    }

    async fn load_tags(&self, post_ids: &[i64]) -> DomainResult<HashMap<i64, Vec<Tag>>> {
        if post_ids.is_empty() {
            return Ok(HashMap::new());
        }

        let rows = sqlx::query_as::<_, PostTagRow>(
            "SELECT pt.post_id, t.id, t.name, t.slug
             FROM post_tags pt JOIN tags t ON t.id = pt.tag_id
             WHERE pt.post_id = ANY($1)
             ORDER BY t.id",
        )
        .bind(post_ids)
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        let mut by_post: HashMap<i64, Vec<Tag>> = HashMap::new();
        for row in rows {
            by_post.entry(row.post_id).or_default().push(Tag::try_from(row)?);
        }
        Ok(by_post)
    }

    async fn assemble(&self, rows: Vec<RecordRow>) -> DomainResult<Vec<PostRecord>> {
        let ids: Vec<i64> = rows.iter().map(|row| row.post.id).collect();
        let mut tags = self.load_tags(&ids).await?;

        rows.into_iter()
            .map(|row| -> DomainResult<PostRecord> {
                let post_tags = tags.remove(&row.post.id).unwrap_or_default();
                let tag_ids = post_tags.iter().map(|tag| tag.id).collect();
                let category = Category {
                    id: CategoryId::new(row.post.category_id)?,
                    name: TaxonomyName::new(row.category_name)?,
                    slug: Slug::new(row.category_slug)?,
                };
                Ok(PostRecord {
                    post: row.post.into_post(tag_ids)?,
                    category,
                    tags: post_tags,
                    author_username: Username::new(row.author_username)?,
                    view_count: from_sql_count(row.view_count),
                })
            })
            .collect()
    }

    async fn fetch_one(&self, column: &str, value: RecordKey<'_>) -> DomainResult<Option<PostRecord>> {
        let mut builder: QueryBuilder<Postgres> = QueryBuilder::new(RECORD_SELECT);
        builder.push(" WHERE p.");
        builder.push(column);
        builder.push(" = ");
        match value {
            RecordKey::Id(id) => builder.push_bind(id),
            RecordKey::Slug(slug) => builder.push_bind(slug.to_string()),
        };

        let row = builder
            .build_query_as::<RecordRow>()
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?;

        match row {
            Some(row) => Ok(self.assemble(vec![row]).await?.pop()),
            None => Ok(None),
        }
    }
}

enum RecordKey<'a> {
    Id(i64),
    Slug(&'a str),
}

#[async_trait]
impl PostReadRepository for PostgresPostReadRepository {
    async fn find_by_id(&self, id: PostId) -> DomainResult<Option<PostRecord>> {
        self.fetch_one("id", RecordKey::Id(i64::from(id))).await
    }

    async fn find_by_slug(&self, slug: &Slug) -> DomainResult<Option<PostRecord>> {
        self.fetch_one("slug", RecordKey::Slug(slug.as_str())).await
    }

    async fn id_by_slug(&self, slug: &Slug) -> DomainResult<Option<PostId>> {
        sqlx::query_scalar::<_, i64>("SELECT id FROM posts WHERE slug = $1")
            .bind(slug.as_str())
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?
            .map(PostId::new)
            .transpose()
    }

    async fn find_many(&self, ids: &[PostId]) -> DomainResult<Vec<PostRecord>> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }
        let ids: Vec<i64> = ids.iter().copied().map(i64::from).collect();

        let mut builder: QueryBuilder<Postgres> = QueryBuilder::new(RECORD_SELECT);
        builder.push(" WHERE p.id = ANY(");
        builder.push_bind(ids);
        builder.push(") ORDER BY p.id");

        let rows = builder
            .build_query_as::<RecordRow>()
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx)?;
        self.assemble(rows).await
    }

    async fn count(&self, filter: &PostFilter) -> DomainResult<u64> {
        let mut builder: QueryBuilder<Postgres> = QueryBuilder::new("SELECT COUNT(*) FROM posts p");
        Self::apply_filter(&mut builder, filter);

        builder
            .build_query_scalar::<i64>()
            .fetch_one(&self.pool)
            .await
            .map(from_sql_count)
            .map_err(map_sqlx)
    }

    async fn list(
        &self,
        filter: &PostFilter,
        limit: u32,
        offset: u64,
    ) -> DomainResult<Vec<PostRecord>> {
        let mut builder: QueryBuilder<Postgres> = QueryBuilder::new(RECORD_SELECT);
        Self::apply_filter(&mut builder, filter);
        builder.push(" ORDER BY p.created_at DESC, p.id DESC LIMIT ");
        builder.push_bind(i64::from(limit));
        builder.push(" OFFSET ");
        builder.push_bind(to_sql_offset(offset));

        let rows = builder
            .build_query_as::<RecordRow>()
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx)?;
        self.assemble(rows).await
    }

    async fn available_ids(&self) -> DomainResult<Vec<PostId>> {
        let ids = sqlx::query_scalar::<_, i64>(
            "SELECT id FROM posts WHERE available = TRUE ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        ids.into_iter().map(PostId::new).collect()
    }
}
