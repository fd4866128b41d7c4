use anyhow::{Context, Result};
use quill_core::{
    application::{
        ports::{
            mail::Mailer, session_revocation::SessionRevocationStore,
        },
        services::{Adapters, ApplicationServices, Repositories},
    },
    config::AppConfig,
    infrastructure::{
        database,
        mail::{NoopMailer, SmtpMailer},
        media::LocalMediaStorage,
        random::RandSampler,
        repositories::{
            PostgresCategoryRepository, PostgresCommentRepository, PostgresHitCountRepository,
            PostgresPostReadRepository, PostgresPostWriteRepository, PostgresTagRepository,
            PostgresUserRepository,
        },
        security::{
            password::Argon2PasswordHasher, redis_session_store::RedisSessionRevocationStore,
            session_store::InMemorySessionRevocationStore, token::BiscuitTokenManager,
        },
        time::SystemClock,
        util::DefaultSlugGenerator,
    },
    presentation::http::{
        routes::{RouterSettings, build_router},
        state::HttpState,
    },
};
use axum::{ServiceExt, extract::Request};
use std::{net::SocketAddr, sync::Arc};
use tokio::signal;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    if let Err(err) = bootstrap().await {
        tracing::error!(error = %err, "fatal error");
        eprintln!("fatal error: {err:#}");
        std::process::exit(1);
    }
}

async fn bootstrap() -> Result<()> {
    init_tracing();

    let config = AppConfig::from_env()?;

    let pool = database::init_pool(config.database_url())
        .await
        .context("connecting to postgres")?;
    database::run_migrations(&pool)
        .await
        .context("running migrations")?;

    let repos = Repositories {
        users: Arc::new(PostgresUserRepository::new(pool.clone())),
        post_writes: Arc::new(PostgresPostWriteRepository::new(pool.clone())),
        post_reads: Arc::new(PostgresPostReadRepository::new(pool.clone())),
        categories: Arc::new(PostgresCategoryRepository::new(pool.clone())),
        tags: Arc::new(PostgresTagRepository::new(pool.clone())),
        comments: Arc::new(PostgresCommentRepository::new(pool.clone())),
        hits: Arc::new(PostgresHitCountRepository::new(pool)),
    };

    let session_revocation_store: Arc<dyn SessionRevocationStore> =
        if let Some(url) = config.redis_url() {
            tracing::info!("using redis session revocation store");
            Arc::new(RedisSessionRevocationStore::from_url(url, config.token_ttl())?)
        } else {
            tracing::info!("using in-memory session revocation store");
            Arc::new(InMemorySessionRevocationStore::new())
        };

    let mailer: Arc<dyn Mailer> = if let Some(smtp) = config.smtp() {
        Arc::new(SmtpMailer::new(smtp)?)
    } else {
        tracing::warn!("SMTP_HOST not configured; contact mail will be logged and dropped");
        Arc::new(NoopMailer)
    };

    let adapters = Adapters {
        password_hasher: Arc::new(Argon2PasswordHasher),
        token_manager: Arc::new(BiscuitTokenManager::new(
            config.biscuit_private_key(),
            config.token_ttl(),
        )?),
        session_revocation_store,
        mailer,
        media: Arc::new(LocalMediaStorage::new(config.media_root())),
        sampler: Arc::new(RandSampler),
        clock: Arc::new(SystemClock),
        slugger: Arc::new(DefaultSlugGenerator),
        contact_recipient: config.contact_recipient().to_string(),
    };

    let services = Arc::new(ApplicationServices::new(repos, adapters));
    let state = HttpState::new(services);

    let settings = RouterSettings {
        rate_limit: config.rate_limit_enabled(),
        allowed_origins: config.allowed_origins().to_vec(),
        media_root: config.media_root().clone(),
        media_url_prefix: config.media_url_prefix().to_string(),
    };
    let app = build_router(state, &settings);
    let service = ServiceExt::<Request>::into_make_service_with_connect_info::<SocketAddr>(app);

    let listener = tokio::net::TcpListener::bind(config.listen_addr()).await?;
    let address: SocketAddr = listener.local_addr()?;
    tracing::info!("listening on {address}");

    axum::serve(listener, service)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

fn init_tracing() {
    let env_filter = std::env::var("RUST_LOG")
        .ok()
        .unwrap_or_else(|| "info,tower_http=info,sqlx=warn".to_string());

    let subscriber = tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(env_filter))
        .with(tracing_subscriber::fmt::layer());

    if subscriber.try_init().is_err() {
        tracing::warn!("tracing subscriber already initialised");
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = signal::ctrl_c().await {
            tracing::error!(error = %err, "failed to listen for CTRL+C");
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(err) => {
                tracing::error!(error = %err, "failed to install terminate handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {}
        () = terminate => {}
    }
    tracing::info!("shutdown signal received");
}
