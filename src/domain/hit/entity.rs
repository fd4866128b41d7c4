// src/domain/hit/entity.rs
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::post::PostId;
use crate::domain::taxonomy::CategoryId;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HitCountId(pub i64);

impl HitCountId {
    pub fn new(id: i64) -> DomainResult<Self> {
        if id <= 0 {
            Err(DomainError::Validation("hit count id must be positive".into()))
        } else {
            Ok(Self(id))
        }
    }
}

impl From<HitCountId> for i64 {
    fn from(value: HitCountId) -> Self {
        value.0
    }
}

/// Network address of a viewer, as reported by the proxy chain or the socket.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ClientAddress(String);

impl ClientAddress {
    pub const MAX_LENGTH: usize = 100;

    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into().trim().to_string();
        if value.is_empty() {
            return Err(DomainError::Validation("client address cannot be empty".into()));
        }
        if value.len() > Self::MAX_LENGTH {
            return Err(DomainError::Validation(format!(
                "client address cannot exceed {} characters",
                Self::MAX_LENGTH
            )));
        }
        Ok(Self(value))
    }

    /// First entry of a forwarded-for header wins over the direct peer address
    /// when it is a usable address; otherwise the peer address is used.
    pub fn resolve(forwarded_for: Option<&str>, remote_addr: Option<&str>) -> Option<Self> {
        forwarded_for
            .and_then(|header| header.split(',').next())
            .and_then(|first| Self::new(first).ok())
            .or_else(|| remote_addr.and_then(|peer| Self::new(peer).ok()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ClientAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One row per distinct address across the whole catalog, linked to every post
/// that address has viewed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HitCount {
    pub id: HitCountId,
    pub address: ClientAddress,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PostViewCount {
    pub post_id: PostId,
    pub views: u64,
}

/// Which available posts take part in a popularity ranking.
#[derive(Debug, Clone, Copy, Default)]
pub struct PopularityScope {
    pub category_id: Option<CategoryId>,
}

impl PopularityScope {
    pub fn global() -> Self {
        Self::default()
    }

    pub fn category(category_id: CategoryId) -> Self {
        Self {
            category_id: Some(category_id),
        }
    }
}

/// Orders a post → view count projection by views, descending, and keeps the top
/// `limit`. The sort is stable so ties keep projection order.
pub fn rank_by_popularity(mut counts: Vec<PostViewCount>, limit: usize) -> Vec<PostViewCount> {
    counts.sort_by(|a, b| b.views.cmp(&a.views));
    counts.truncate(limit);
    counts
}
