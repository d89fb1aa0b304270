// src/app.rs
//! Wires configuration, persistence and services into the HTTP router.

use crate::application::{
    ports::{
        security::{PasswordHasher, TokenManager},
        storage::MediaStorage,
        time::Clock,
        util::SlugGenerator,
    },
    services::{ApplicationServices, ServiceDependencies},
};
use crate::config::AppConfig;
use crate::domain::{
    article::{ArticleReadRepository, ArticleWriteRepository},
    category::CategoryRepository,
    user::{ProfileRepository, UserRepository},
};
use crate::infrastructure::{
    database,
    repositories::{
        SqliteArticleReadRepository, SqliteArticleWriteRepository, SqliteCategoryRepository,
        SqliteProfileRepository, SqliteUserRepository,
    },
    security::{password::Argon2PasswordHasher, token::BiscuitTokenManager},
    storage::LocalMediaStorage,
    util::DefaultSlugGenerator,
};
use crate::presentation::http::{HttpState, WebSettings, build_router};
use anyhow::{Context, Result};
use axum::Router;
use sqlx::SqlitePool;
use std::sync::Arc;

/// Opens the database, applies migrations and builds the router.
pub async fn build_app(config: &AppConfig, clock: Arc<dyn Clock>) -> Result<Router> {
    let pool = database::init_pool(config.database_url(), config.database_max_connections())
        .await
        .with_context(|| format!("failed to open database {}", config.database_url()))?;
    database::run_migrations(&pool)
        .await
        .context("failed to apply migrations")?;

    tokio::fs::create_dir_all(config.media_root())
        .await
        .with_context(|| format!("failed to create media root {}", config.media_root().display()))?;

    if config.secret_key().is_none() {
        tracing::warn!("SECRET_KEY not set; sessions will not survive a restart");
    }

    let services = build_services(Arc::new(pool), config, clock)?;
    let state = HttpState {
        services: Arc::new(services),
        web: Arc::new(WebSettings {
            allowed_hosts: config.allowed_hosts().to_vec(),
            trusted_origins: config.trusted_origins().to_vec(),
            secure_cookies: config.secure_cookies(),
        }),
    };

    Ok(build_router(state, config.media_root(), config.static_root()))
}

fn build_services(
    pool: Arc<SqlitePool>,
    config: &AppConfig,
    clock: Arc<dyn Clock>,
) -> Result<ApplicationServices> {
    let user_repo: Arc<dyn UserRepository> = Arc::new(SqliteUserRepository::new(Arc::clone(&pool)));
    let profile_repo: Arc<dyn ProfileRepository> =
        Arc::new(SqliteProfileRepository::new(Arc::clone(&pool)));
    let article_write_repo: Arc<dyn ArticleWriteRepository> =
        Arc::new(SqliteArticleWriteRepository::new(Arc::clone(&pool)));
    let article_read_repo: Arc<dyn ArticleReadRepository> =
        Arc::new(SqliteArticleReadRepository::new(Arc::clone(&pool)));
    let category_repo: Arc<dyn CategoryRepository> =
        Arc::new(SqliteCategoryRepository::new(Arc::clone(&pool)));

    let password_hasher: Arc<dyn PasswordHasher> = Arc::new(Argon2PasswordHasher);
    let token_manager: Arc<dyn TokenManager> = Arc::new(
        BiscuitTokenManager::new(config.secret_key(), config.session_ttl())
            .context("invalid SECRET_KEY")?,
    );
    let media: Arc<dyn MediaStorage> = Arc::new(LocalMediaStorage::new(config.media_root()));
    let slugger: Arc<dyn SlugGenerator> = Arc::new(DefaultSlugGenerator);

    Ok(ApplicationServices::new(ServiceDependencies {
        user_repo,
        profile_repo,
        article_write_repo,
        article_read_repo,
        category_repo,
        password_hasher,
        token_manager,
        media,
        clock,
        slugger,
    }))
}
