// src/domain/post/entity.rs
use crate::domain::post::value_objects::{PostContent, PostId, PostTitle};
use crate::domain::slug::Slug;
use crate::domain::taxonomy::{Category, CategoryId, Tag, TagId};
use crate::domain::user::{UserId, Username};
use chrono::{DateTime, Utc};

#[derive(Debug, Clone)]
pub struct Post {
    pub id: PostId,
    pub title: PostTitle,
    pub slug: Slug,
    pub content: PostContent,
    pub image: Option<String>,
    pub author_id: UserId,
    pub category_id: CategoryId,
    pub tag_ids: Vec<TagId>,
    pub available: bool,
    pub created_at: DateTime<Utc>,
}

impl Post {
    pub fn is_owned_by(&self, user_id: UserId) -> bool {
        self.author_id == user_id
    }

    pub fn title_changed(&self, title: &PostTitle) -> bool {
        self.title != *title
    }
}

/// A post joined with everything a page needs to render it.
#[derive(Debug, Clone)]
pub struct PostRecord {
    pub post: Post,
    pub category: Category,
    pub tags: Vec<Tag>,
    pub author_username: Username,
    pub view_count: u64,
}

impl PostRecord {
    /// Canonical detail path: `/posts/<category_slug>/<id>/<slug>/`.
    pub fn detail_path(&self) -> String {
        format!(
            "/posts/{}/{}/{}/",
            self.category.slug,
            i64::from(self.post.id),
            self.post.slug
        )
    }
}

#[derive(Debug, Clone)]
pub struct NewPost {
    pub title: PostTitle,
    pub slug: Slug,
    pub content: PostContent,
    pub author_id: UserId,
    pub category_id: CategoryId,
    pub tag_ids: Vec<TagId>,
    pub available: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct PostUpdate {
    pub id: PostId,
    pub title: Option<PostTitle>,
    pub slug: Option<Slug>,
    pub content: Option<PostContent>,
    pub category_id: Option<CategoryId>,
    pub tag_ids: Option<Vec<TagId>>,
    pub available: Option<bool>,
    pub image: Option<String>,
}

impl PostUpdate {
    pub fn new(id: PostId) -> Self {
        Self {
            id,
            title: None,
            slug: None,
            content: None,
            category_id: None,
            tag_ids: None,
            available: None,
            image: None,
        }
    }

    pub fn with_title(mut self, title: PostTitle) -> Self {
        self.title = Some(title);
        self
    }

    pub fn with_slug(mut self, slug: Slug) -> Self {
        self.slug = Some(slug);
        self
    }

    pub fn with_content(mut self, content: PostContent) -> Self {
        self.content = Some(content);
        self
    }

    pub fn with_category(mut self, category_id: CategoryId) -> Self {
        self.category_id = Some(category_id);
        self
    }

    pub fn with_tags(mut self, tag_ids: Vec<TagId>) -> Self {
        self.tag_ids = Some(tag_ids);
        self
    }

    pub fn with_available(mut self, available: bool) -> Self {
        self.available = Some(available);
        self
    }

    pub fn with_image(mut self, image: String) -> Self {
        self.image = Some(image);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::taxonomy::TaxonomyName;

    fn sample_record() -> PostRecord {
        PostRecord {
            post: Post {
                id: PostId::new(12).unwrap(),
                title: PostTitle::new("Rust tips").unwrap(),
                slug: Slug::new("rust-tips").unwrap(),
                content: PostContent::new("content").unwrap(),
                image: None,
                author_id: UserId::new(1).unwrap(),
                category_id: CategoryId::new(3).unwrap(),
                tag_ids: vec![],
                available: true,
                created_at: Utc::now(),
            },
            category: Category {
                id: CategoryId::new(3).unwrap(),
                name: TaxonomyName::new("Programming").unwrap(),
                slug: Slug::new("programming").unwrap(),
            },
            tags: vec![],
            author_username: Username::new("writer").unwrap(),
            view_count: 0,
        }
    }

    #[test]
    fn detail_path_combines_category_id_and_slug() {
        assert_eq!(sample_record().detail_path(), "/posts/programming/12/rust-tips/");
    }

    #[test]
    fn ownership_and_title_change() {
        let record = sample_record();
        assert!(record.post.is_owned_by(UserId::new(1).unwrap()));
        assert!(!record.post.is_owned_by(UserId::new(2).unwrap()));
        assert!(!record.post.title_changed(&PostTitle::new("Rust tips").unwrap()));
        assert!(record.post.title_changed(&PostTitle::new("Rust tricks").unwrap()));
    }
}
