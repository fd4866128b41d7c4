// src/application/services/mod.rs
use std::sync::Arc;

use crate::{
    application::{
        ApplicationResult,
        commands::{
            contact::ContactService, posts::PostCommandService, taxonomy::TaxonomyCommandService,
            users::UserCommandService,
        },
        dto::AuthenticatedUser,
        error::ApplicationError,
        ports::{
            mail::Mailer,
            media::MediaStorage,
            random::Sampler,
            security::{PasswordHasher, TokenManager},
            session_revocation::SessionRevocationStore,
            time::Clock,
            util::SlugGenerator,
        },
        queries::{posts::PostQueryService, users::UserQueryService},
    },
    domain::{
        comment::CommentRepository,
        hit::{HitCountRepository, ViewTracker},
        post::{PostReadRepository, PostSlugService, PostWriteRepository},
        slug::UniqueSlugService,
        taxonomy::{CategoryRepository, TagRepository},
        user::UserRepository,
    },
};

/// Repositories the services are assembled from.
pub struct Repositories {
    pub users: Arc<dyn UserRepository>,
    pub post_writes: Arc<dyn PostWriteRepository>,
    pub post_reads: Arc<dyn PostReadRepository>,
    pub categories: Arc<dyn CategoryRepository>,
    pub tags: Arc<dyn TagRepository>,
    pub comments: Arc<dyn CommentRepository>,
    pub hits: Arc<dyn HitCountRepository>,
}

/// Infrastructure adapters behind the application ports.
pub struct Adapters {
    pub password_hasher: Arc<dyn PasswordHasher>,
    pub token_manager: Arc<dyn TokenManager>,
    pub session_revocation_store: Arc<dyn SessionRevocationStore>,
    pub mailer: Arc<dyn Mailer>,
    pub media: Arc<dyn MediaStorage>,
    pub sampler: Arc<dyn Sampler>,
    pub clock: Arc<dyn Clock>,
    pub slugger: Arc<dyn SlugGenerator>,
    /// Mailbox receiving contact-form messages.
    pub contact_recipient: String,
}

pub struct ApplicationServices {
    pub user_commands: Arc<UserCommandService>,
    pub user_queries: Arc<UserQueryService>,
    pub post_commands: Arc<PostCommandService>,
    pub post_queries: Arc<PostQueryService>,
    pub taxonomy_commands: Arc<TaxonomyCommandService>,
    pub contact: Arc<ContactService>,
    token_manager: Arc<dyn TokenManager>,
    session_revocation_store: Arc<dyn SessionRevocationStore>,
}

impl ApplicationServices {
    pub fn new(repos: Repositories, adapters: Adapters) -> Self {
        let slugs = Arc::new(UniqueSlugService::new(Arc::clone(&adapters.slugger)));

        let user_commands = Arc::new(UserCommandService::new(
            Arc::clone(&repos.users),
            Arc::clone(&adapters.password_hasher),
            Arc::clone(&adapters.token_manager),
            Arc::clone(&adapters.session_revocation_store),
            Arc::clone(&adapters.media),
            Arc::clone(&adapters.clock),
        ));

        let slug_service = Arc::new(PostSlugService::new(
            Arc::clone(&repos.post_reads),
            Arc::clone(&slugs),
        ));

        let post_commands = Arc::new(PostCommandService::new(
            Arc::clone(&repos.post_writes),
            Arc::clone(&repos.post_reads),
            Arc::clone(&repos.categories),
            Arc::clone(&repos.tags),
            Arc::clone(&repos.comments),
            slug_service,
            Arc::clone(&adapters.media),
            Arc::clone(&adapters.clock),
        ));

        let view_tracker = Arc::new(ViewTracker::new(Arc::clone(&repos.hits)));
        let post_queries = Arc::new(PostQueryService::new(
            Arc::clone(&repos.post_reads),
            Arc::clone(&repos.categories),
            Arc::clone(&repos.tags),
            Arc::clone(&repos.comments),
            view_tracker,
            Arc::clone(&adapters.sampler),
        ));

        let user_queries = Arc::new(UserQueryService::new(
            Arc::clone(&repos.users),
            Arc::clone(&post_queries),
        ));

        let taxonomy_commands = Arc::new(TaxonomyCommandService::new(
            Arc::clone(&repos.categories),
            Arc::clone(&repos.tags),
            slugs,
            Arc::clone(&adapters.clock),
        ));

        let contact = Arc::new(ContactService::new(
            Arc::clone(&adapters.mailer),
            adapters.contact_recipient,
        ));

        Self {
            user_commands,
            user_queries,
            post_commands,
            post_queries,
            taxonomy_commands,
            contact,
            token_manager: adapters.token_manager,
            session_revocation_store: adapters.session_revocation_store,
        }
    }

    pub fn token_manager(&self) -> Arc<dyn TokenManager> {
        Arc::clone(&self.token_manager)
    }

    pub fn session_revocation_store(&self) -> Arc<dyn SessionRevocationStore> {
        Arc::clone(&self.session_revocation_store)
    }

    /// Authenticate a raw bearer token and reject sessions that were logged out.
    pub async fn authenticate(&self, token: &str) -> ApplicationResult<AuthenticatedUser> {
        let user = self.token_manager.authenticate(token).await?;

        if self
            .session_revocation_store
            .is_revoked(&user.session_id)
            .await?
        {
            return Err(ApplicationError::unauthorized("session revoked"));
        }

        Ok(user)
    }
}
