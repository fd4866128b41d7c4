// src/domain/slug.rs
use std::{fmt, sync::Arc};

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::application::ports::util::SlugGenerator;
use crate::domain::errors::{DomainError, DomainResult};

const MAX_SLUG_LENGTH: usize = 255;
/// Room left for a `-{u64}` collision suffix.
const MAX_BASE_LENGTH: usize = MAX_SLUG_LENGTH - 1 - 20;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Slug(String);

impl Slug {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(DomainError::Validation("slug cannot be empty".into()));
        }
        if value.len() > MAX_SLUG_LENGTH {
            return Err(DomainError::Validation(format!(
                "slug cannot exceed {MAX_SLUG_LENGTH} characters"
            )));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for Slug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<Slug> for String {
    fn from(value: Slug) -> Self {
        value.0
    }
}

/// Lookup over the rows that already hold a slug of one kind (posts, categories, tags).
#[async_trait]
pub trait SlugRegistry: Send + Sync {
    /// Prefix used when a title normalises to nothing.
    fn kind(&self) -> &'static str;

    /// Id of the row currently holding `slug`, if any.
    async fn slug_owner(&self, slug: &Slug) -> DomainResult<Option<i64>>;
}

/// Allocates slugs that are unique within a registry by suffixing `-1`, `-2`, ...
/// onto the normalised title until a free candidate is found.
///
/// The existence check and the later insert are not atomic; two concurrent
/// allocations for the same title can both pick the same candidate, in which case
/// the store's unique constraint rejects the second insert as a conflict.
pub struct UniqueSlugService {
    generator: Arc<dyn SlugGenerator>,
}

impl UniqueSlugService {
    pub fn new(generator: Arc<dyn SlugGenerator>) -> Self {
        Self { generator }
    }

    /// Normalised title, cut to leave room for a collision suffix.
    pub fn base_slug(&self, kind: &str, title: &str, now: DateTime<Utc>) -> String {
        let base = truncate_base(&self.generator.slugify(title));
        if base.is_empty() {
            format!("{kind}-{}", now.timestamp())
        } else {
            base
        }
    }

    pub async fn allocate(
        &self,
        registry: &dyn SlugRegistry,
        title: &str,
        ignore_id: Option<i64>,
        now: DateTime<Utc>,
    ) -> DomainResult<Slug> {
        let base_slug = self.base_slug(registry.kind(), title, now);

        let mut candidate = base_slug.clone();
        let mut counter = 1u64;

        loop {
            let slug = Slug::new(candidate.clone())?;
            match registry.slug_owner(&slug).await? {
                Some(owner) if ignore_id == Some(owner) => return Ok(slug),
                Some(_) => {
                    candidate = format!("{base_slug}-{counter}");
                    counter += 1;
                }
                None => return Ok(slug),
            }
        }
    }
}

/// Cuts at the last hyphen inside the limit so no word is split, unless the
/// only word is longer than the limit itself.
fn truncate_base(base: &str) -> String {
    if base.len() <= MAX_BASE_LENGTH {
        return base.trim_matches('-').to_string();
    }

    let mut end = MAX_BASE_LENGTH;
    while !base.is_char_boundary(end) {
        end -= 1;
    }
    let head = &base[..end];
    let cut = if base[end..].starts_with('-') {
        head
    } else {
        head.rfind('-').map_or(head, |at| &head[..at])
    };
    cut.trim_matches('-').to_string()
}
