// tests/support/mocks/catalog.rs
//! Postgres スキーマと同じ制約（一意キー・カスケード削除）を持つインメモリストア
use std::collections::{BTreeSet, HashMap};
use std::sync::Mutex;

use async_trait::async_trait;

use quill_core::domain::{
    comment::{Comment, CommentId, CommentRecord, CommentRepository, NewComment},
    errors::{DomainError, DomainResult},
    hit::{ClientAddress, HitCount, HitCountId, HitCountRepository, PopularityScope, PostViewCount},
    post::{
        NewPost, Post, PostFilter, PostId, PostReadRepository, PostRecord, PostUpdate,
        PostWriteRepository,
    },
    slug::Slug,
    taxonomy::{
        Category, CategoryId, CategoryRepository, NewCategory, NewTag, Tag, TagId, TagRepository,
    },
    user::{
        AuthorSummary, EmailAddress, NewUser, User, UserDetail, UserDetailUpdate, UserId,
        UserRepository, UserUpdate, Username,
    },
};

#[derive(Default)]
struct CatalogState {
    users: Vec<User>,
    details: HashMap<i64, UserDetail>,
    categories: Vec<Category>,
    tags: Vec<Tag>,
    posts: Vec<Post>,
    hits: Vec<HitCount>,
    post_views: BTreeSet<(i64, i64)>,
    comments: Vec<Comment>,
    sequence: i64,
}

impl CatalogState {
    fn next_id(&mut self) -> i64 {
        self.sequence += 1;
        self.sequence
    }

    fn record(&self, post: &Post) -> DomainResult<PostRecord> {
        let category = self
            .categories
            .iter()
            .find(|category| category.id == post.category_id)
            .cloned()
            .ok_or_else(|| DomainError::Persistence("dangling category".into()))?;
        let author_username = self
            .users
            .iter()
            .find(|user| user.id == post.author_id)
            .map(|user| user.username.clone())
            .ok_or_else(|| DomainError::Persistence("dangling author".into()))?;
        let mut tags: Vec<Tag> = self
            .tags
            .iter()
            .filter(|tag| post.tag_ids.contains(&tag.id))
            .cloned()
            .collect();
        tags.sort_by_key(|tag| tag.id);

        Ok(PostRecord {
            post: post.clone(),
            category,
            tags,
            author_username,
            view_count: self.views_of(post.id),
        })
    }

    fn views_of(&self, post_id: PostId) -> u64 {
        let id = i64::from(post_id);
        self.post_views.iter().filter(|(post, _)| *post == id).count() as u64
    }

    fn matches(post: &Post, filter: &PostFilter) -> bool {
        if !filter.include_unavailable && !post.available {
            return false;
        }
        if filter.category_id.is_some_and(|id| id != post.category_id) {
            return false;
        }
        if filter.tag_id.is_some_and(|id| !post.tag_ids.contains(&id)) {
            return false;
        }
        if filter.author_id.is_some_and(|id| id != post.author_id) {
            return false;
        }
        match filter.search.as_deref() {
            Some(needle) => {
                let needle = needle.to_lowercase();
                post.title.as_str().to_lowercase().contains(&needle)
                    || post.content.as_str().to_lowercase().contains(&needle)
            }
            None => true,
        }
    }

    fn ensure_unique_user(
        &self,
        username: &Username,
        email: &EmailAddress,
        except: Option<UserId>,
    ) -> DomainResult<()> {
        for user in self.users.iter().filter(|user| Some(user.id) != except) {
            if user.username == *username {
                return Err(DomainError::Conflict("username already exists".into()));
            }
            if user.email == *email {
                return Err(DomainError::Conflict("email already exists".into()));
            }
        }
        Ok(())
    }
}

/// 全リポジトリトレイトを一つのストアで実装する
#[derive(Default)]
pub struct InMemoryCatalog {
    state: Mutex<CatalogState>,
}

impl InMemoryCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn hit_count_rows(&self) -> Vec<HitCount> {
        self.state.lock().unwrap().hits.clone()
    }

    pub fn viewed_posts_of(&self, hit_id: HitCountId) -> Vec<i64> {
        self.state
            .lock()
            .unwrap()
            .post_views
            .iter()
            .filter(|(_, hit)| *hit == hit_id.0)
            .map(|(post, _)| *post)
            .collect()
    }

    pub fn post_count(&self) -> usize {
        self.state.lock().unwrap().posts.len()
    }

    pub fn comment_count(&self) -> usize {
        self.state.lock().unwrap().comments.len()
    }

    pub fn deactivate_user(&self, id: i64) {
        let mut state = self.state.lock().unwrap();
        if let Some(user) = state.users.iter_mut().find(|user| i64::from(user.id) == id) {
            user.is_active = false;
        }
    }
}

#[async_trait]
impl UserRepository for InMemoryCatalog {
    async fn insert_with_detail(&self, new_user: NewUser) -> DomainResult<(User, UserDetail)> {
        let mut state = self.state.lock().unwrap();
        state.ensure_unique_user(&new_user.username, &new_user.email, None)?;

        let id = UserId::new(state.next_id())?;
        let user = User {
            id,
            username: new_user.username,
            email: new_user.email,
            first_name: new_user.first_name.as_str().to_string(),
            last_name: new_user.last_name.as_str().to_string(),
            password_hash: new_user.password_hash,
            is_active: new_user.is_active,
            created_at: new_user.created_at,
        };
        let detail = UserDetail::empty(id);
        state.users.push(user.clone());
        state.details.insert(i64::from(id), detail.clone());
        Ok((user, detail))
    }

    async fn find_by_id(&self, id: UserId) -> DomainResult<Option<User>> {
        let state = self.state.lock().unwrap();
        Ok(state.users.iter().find(|user| user.id == id).cloned())
    }

    async fn find_by_username(&self, username: &Username) -> DomainResult<Option<User>> {
        let state = self.state.lock().unwrap();
        Ok(state
            .users
            .iter()
            .find(|user| user.username == *username)
            .cloned())
    }

    async fn find_by_email(&self, email: &EmailAddress) -> DomainResult<Option<User>> {
        let state = self.state.lock().unwrap();
        Ok(state.users.iter().find(|user| user.email == *email).cloned())
    }

    async fn update(&self, update: UserUpdate) -> DomainResult<User> {
        let mut state = self.state.lock().unwrap();
        let current = state
            .users
            .iter()
            .find(|user| user.id == update.id)
            .cloned()
            .ok_or_else(|| DomainError::NotFound("user not found".into()))?;

        let username = update.username.clone().unwrap_or(current.username.clone());
        let email = update.email.clone().unwrap_or(current.email.clone());
        state.ensure_unique_user(&username, &email, Some(update.id))?;

        let user = state
            .users
            .iter_mut()
            .find(|user| user.id == update.id)
            .ok_or_else(|| DomainError::NotFound("user not found".into()))?;
        user.username = username;
        user.email = email;
        if let Some(first_name) = update.first_name {
            user.first_name = first_name.as_str().to_string();
        }
        if let Some(last_name) = update.last_name {
            user.last_name = last_name.as_str().to_string();
        }
        if let Some(password_hash) = update.password_hash {
            user.set_password(password_hash);
        }
        Ok(user.clone())
    }

    async fn find_detail(&self, id: UserId) -> DomainResult<Option<UserDetail>> {
        let state = self.state.lock().unwrap();
        Ok(state.details.get(&i64::from(id)).cloned())
    }

    async fn update_detail(&self, update: UserDetailUpdate) -> DomainResult<UserDetail> {
        let mut state = self.state.lock().unwrap();
        let entry = state
            .details
            .entry(i64::from(update.user_id))
            .or_insert_with(|| UserDetail::empty(update.user_id));
        entry.title = update.title;
        entry.description = update.description;
        if let Some(image) = update.image {
            entry.image = Some(image);
        }
        Ok(entry.clone())
    }

    async fn count_authors(&self) -> DomainResult<u64> {
        let state = self.state.lock().unwrap();
        let authors: BTreeSet<i64> = state
            .posts
            .iter()
            .map(|post| i64::from(post.author_id))
            .collect();
        Ok(authors.len() as u64)
    }

    async fn list_authors(&self, limit: u32, offset: u64) -> DomainResult<Vec<AuthorSummary>> {
        let state = self.state.lock().unwrap();
        let mut summaries: Vec<AuthorSummary> = state
            .users
            .iter()
            .filter_map(|user| {
                let post_count = state
                    .posts
                    .iter()
                    .filter(|post| post.author_id == user.id)
                    .count() as u64;
                (post_count > 0).then(|| AuthorSummary {
                    user: user.clone(),
                    detail: state.details.get(&i64::from(user.id)).cloned(),
                    post_count,
                })
            })
            .collect();
        summaries.sort_by(|a, b| {
            b.post_count
                .cmp(&a.post_count)
                .then(i64::from(a.user.id).cmp(&i64::from(b.user.id)))
        });
        Ok(summaries
            .into_iter()
            .skip(offset as usize)
            .take(limit as usize)
            .collect())
    }
}

#[async_trait]
impl PostWriteRepository for InMemoryCatalog {
    async fn insert(&self, post: NewPost) -> DomainResult<Post> {
        let mut state = self.state.lock().unwrap();
        if state.posts.iter().any(|existing| existing.slug == post.slug) {
            return Err(DomainError::Conflict("post slug already exists".into()));
        }
        if !state.categories.iter().any(|c| c.id == post.category_id) {
            return Err(DomainError::Validation("unknown category".into()));
        }

        let created = Post {
            id: PostId::new(state.next_id())?,
            title: post.title,
            slug: post.slug,
            content: post.content,
            image: None,
            author_id: post.author_id,
            category_id: post.category_id,
            tag_ids: post.tag_ids,
            available: post.available,
            created_at: post.created_at,
        };
        state.posts.push(created.clone());
        Ok(created)
    }

    async fn update(&self, update: PostUpdate) -> DomainResult<Post> {
        let mut state = self.state.lock().unwrap();
        if let Some(slug) = &update.slug {
            if state
                .posts
                .iter()
                .any(|post| post.slug == *slug && post.id != update.id)
            {
                return Err(DomainError::Conflict("post slug already exists".into()));
            }
        }

        let post = state
            .posts
            .iter_mut()
            .find(|post| post.id == update.id)
            .ok_or_else(|| DomainError::NotFound("post not found".into()))?;
        if let Some(title) = update.title {
            post.title = title;
        }
        if let Some(slug) = update.slug {
            post.slug = slug;
        }
        if let Some(content) = update.content {
            post.content = content;
        }
        if let Some(category_id) = update.category_id {
            post.category_id = category_id;
        }
        if let Some(tag_ids) = update.tag_ids {
            post.tag_ids = tag_ids;
        }
        if let Some(available) = update.available {
            post.available = available;
        }
        if let Some(image) = update.image {
            post.image = Some(image);
        }
        Ok(post.clone())
    }

    async fn delete(&self, id: PostId) -> DomainResult<()> {
        let mut state = self.state.lock().unwrap();
        let before = state.posts.len();
        state.posts.retain(|post| post.id != id);
        if state.posts.len() == before {
            return Err(DomainError::NotFound("post not found".into()));
        }
        state.comments.retain(|comment| comment.post_id != id);
        let raw = i64::from(id);
        state.post_views.retain(|(post, _)| *post != raw);
        Ok(())
    }
}

#[async_trait]
impl PostReadRepository for InMemoryCatalog {
    async fn find_by_id(&self, id: PostId) -> DomainResult<Option<PostRecord>> {
        let state = self.state.lock().unwrap();
        state
            .posts
            .iter()
            .find(|post| post.id == id)
            .map(|post| state.record(post))
            .transpose()
    }

    async fn find_by_slug(&self, slug: &Slug) -> DomainResult<Option<PostRecord>> {
        let state = self.state.lock().unwrap();
        state
            .posts
            .iter()
            .find(|post| post.slug == *slug)
            .map(|post| state.record(post))
            .transpose()
    }

    async fn id_by_slug(&self, slug: &Slug) -> DomainResult<Option<PostId>> {
        let state = self.state.lock().unwrap();
        Ok(state
            .posts
            .iter()
            .find(|post| post.slug == *slug)
            .map(|post| post.id))
    }

    async fn find_many(&self, ids: &[PostId]) -> DomainResult<Vec<PostRecord>> {
        let state = self.state.lock().unwrap();
        state
            .posts
            .iter()
            .filter(|post| ids.contains(&post.id))
            .map(|post| state.record(post))
            .collect()
    }

    async fn count(&self, filter: &PostFilter) -> DomainResult<u64> {
        let state = self.state.lock().unwrap();
        Ok(state
            .posts
            .iter()
            .filter(|post| CatalogState::matches(post, filter))
            .count() as u64)
    }

    async fn list(
        &self,
        filter: &PostFilter,
        limit: u32,
        offset: u64,
    ) -> DomainResult<Vec<PostRecord>> {
        let state = self.state.lock().unwrap();
        let mut matching: Vec<&Post> = state
            .posts
            .iter()
            .filter(|post| CatalogState::matches(post, filter))
            .collect();
        matching.sort_by(|a, b| {
            b.created_at
                .cmp(&a.created_at)
                .then(i64::from(b.id).cmp(&i64::from(a.id)))
        });
        matching
            .into_iter()
            .skip(offset as usize)
            .take(limit as usize)
            .map(|post| state.record(post))
            .collect()
    }

    async fn available_ids(&self) -> DomainResult<Vec<PostId>> {
        let state = self.state.lock().unwrap();
        Ok(state
            .posts
            .iter()
            .filter(|post| post.available)
            .map(|post| post.id)
            .collect())
    }
}

#[async_trait]
impl CategoryRepository for InMemoryCatalog {
    async fn insert(&self, category: NewCategory) -> DomainResult<Category> {
        let mut state = self.state.lock().unwrap();
        if state.categories.iter().any(|c| c.slug == category.slug) {
            return Err(DomainError::Conflict("category slug already exists".into()));
        }
        let created = Category {
            id: CategoryId::new(state.next_id())?,
            name: category.name,
            slug: category.slug,
        };
        state.categories.push(created.clone());
        Ok(created)
    }

    async fn find_by_id(&self, id: CategoryId) -> DomainResult<Option<Category>> {
        let state = self.state.lock().unwrap();
        Ok(state.categories.iter().find(|c| c.id == id).cloned())
    }

    async fn find_by_slug(&self, slug: &Slug) -> DomainResult<Option<Category>> {
        let state = self.state.lock().unwrap();
        Ok(state.categories.iter().find(|c| c.slug == *slug).cloned())
    }

    async fn list_all(&self) -> DomainResult<Vec<Category>> {
        Ok(self.state.lock().unwrap().categories.clone())
    }
}

#[async_trait]
impl TagRepository for InMemoryCatalog {
    async fn insert(&self, tag: NewTag) -> DomainResult<Tag> {
        let mut state = self.state.lock().unwrap();
        if state.tags.iter().any(|t| t.slug == tag.slug) {
            return Err(DomainError::Conflict("tag slug already exists".into()));
        }
        let created = Tag {
            id: TagId::new(state.next_id())?,
            name: tag.name,
            slug: tag.slug,
        };
        state.tags.push(created.clone());
        Ok(created)
    }

    async fn find_by_slug(&self, slug: &Slug) -> DomainResult<Option<Tag>> {
        let state = self.state.lock().unwrap();
        Ok(state.tags.iter().find(|t| t.slug == *slug).cloned())
    }

    async fn find_many(&self, ids: &[TagId]) -> DomainResult<Vec<Tag>> {
        let state = self.state.lock().unwrap();
        Ok(state
            .tags
            .iter()
            .filter(|tag| ids.contains(&tag.id))
            .cloned()
            .collect())
    }

    async fn list_all(&self) -> DomainResult<Vec<Tag>> {
        Ok(self.state.lock().unwrap().tags.clone())
    }
}

#[async_trait]
impl CommentRepository for InMemoryCatalog {
    async fn insert(&self, comment: NewComment) -> DomainResult<Comment> {
        let mut state = self.state.lock().unwrap();
        if !state.posts.iter().any(|post| post.id == comment.post_id) {
            return Err(DomainError::NotFound("post not found".into()));
        }
        let created = Comment {
            id: CommentId::new(state.next_id())?,
            post_id: comment.post_id,
            author_id: comment.author_id,
            content: comment.content,
            created_at: comment.created_at,
            available: true,
        };
        state.comments.push(created.clone());
        Ok(created)
    }

    async fn latest_for_post(
        &self,
        post_id: PostId,
        limit: u32,
    ) -> DomainResult<Vec<CommentRecord>> {
        let state = self.state.lock().unwrap();
        let mut comments: Vec<&Comment> = state
            .comments
            .iter()
            .filter(|comment| comment.post_id == post_id && comment.available)
            .collect();
        comments.sort_by(|a, b| {
            b.created_at
                .cmp(&a.created_at)
                .then(i64::from(b.id).cmp(&i64::from(a.id)))
        });
        comments
            .into_iter()
            .take(limit as usize)
            .map(|comment| {
                let author_username = state
                    .users
                    .iter()
                    .find(|user| user.id == comment.author_id)
                    .map(|user| user.username.clone())
                    .ok_or_else(|| DomainError::Persistence("dangling author".into()))?;
                Ok(CommentRecord {
                    comment: comment.clone(),
                    author_username,
                })
            })
            .collect()
    }
}

#[async_trait]
impl HitCountRepository for InMemoryCatalog {
    async fn find_by_address(&self, address: &ClientAddress) -> DomainResult<Option<HitCount>> {
        let state = self.state.lock().unwrap();
        Ok(state
            .hits
            .iter()
            .find(|hit| hit.address == *address)
            .cloned())
    }

    async fn insert(&self, address: &ClientAddress) -> DomainResult<HitCount> {
        let mut state = self.state.lock().unwrap();
        if let Some(existing) = state.hits.iter().find(|hit| hit.address == *address) {
            return Ok(existing.clone());
        }
        let hit = HitCount {
            id: HitCountId::new(state.next_id())?,
            address: address.clone(),
        };
        state.hits.push(hit.clone());
        Ok(hit)
    }

    async fn attach(&self, post_id: PostId, hit_id: HitCountId) -> DomainResult<()> {
        let mut state = self.state.lock().unwrap();
        state.post_views.insert((i64::from(post_id), hit_id.0));
        Ok(())
    }

    async fn view_counts(&self, scope: &PopularityScope) -> DomainResult<Vec<PostViewCount>> {
        let state = self.state.lock().unwrap();
        let mut posts: Vec<&Post> = state
            .posts
            .iter()
            .filter(|post| post.available)
            .filter(|post| scope.category_id.is_none_or(|id| id == post.category_id))
            .collect();
        posts.sort_by_key(|post| i64::from(post.id));
        Ok(posts
            .into_iter()
            .map(|post| PostViewCount {
                post_id: post.id,
                views: state.views_of(post.id),
            })
            .collect())
    }
}
