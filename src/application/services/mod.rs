// src/application/services/mod.rs
use std::sync::Arc;

use crate::{
    application::{
        ApplicationResult,
        commands::{
            articles::ArticleCommandService, categories::CategoryCommandService,
            users::UserCommandService,
        },
        dto::AuthenticatedUser,
        ports::{
            security::{PasswordHasher, TokenManager},
            storage::MediaStorage,
            time::Clock,
            util::SlugGenerator,
        },
        queries::{
            articles::ArticleQueryService, categories::CategoryQueryService,
            users::UserQueryService,
        },
    },
    domain::{
        article::{ArticleReadRepository, ArticleWriteRepository, services::SlugAssigner},
        category::CategoryRepository,
        user::{ProfileRepository, UserRepository},
    },
};

/// Repositories and adapters the services are assembled from.
pub struct ServiceDependencies {
    pub user_repo: Arc<dyn UserRepository>,
    pub profile_repo: Arc<dyn ProfileRepository>,
    pub article_write_repo: Arc<dyn ArticleWriteRepository>,
    pub article_read_repo: Arc<dyn ArticleReadRepository>,
    pub category_repo: Arc<dyn CategoryRepository>,
    pub password_hasher: Arc<dyn PasswordHasher>,
    pub token_manager: Arc<dyn TokenManager>,
    pub media: Arc<dyn MediaStorage>,
    pub clock: Arc<dyn Clock>,
    pub slugger: Arc<dyn SlugGenerator>,
}

pub struct ApplicationServices {
    pub user_commands: Arc<UserCommandService>,
    pub article_commands: Arc<ArticleCommandService>,
    pub category_commands: Arc<CategoryCommandService>,
    pub article_queries: Arc<ArticleQueryService>,
    pub category_queries: Arc<CategoryQueryService>,
    pub user_queries: Arc<UserQueryService>,
    token_manager: Arc<dyn TokenManager>,
}

impl ApplicationServices {
    pub fn new(deps: ServiceDependencies) -> Self {
        let slugs = Arc::new(SlugAssigner::new(Arc::clone(&deps.slugger)));

        let user_commands = Arc::new(UserCommandService::new(
            Arc::clone(&deps.user_repo),
            Arc::clone(&deps.profile_repo),
            Arc::clone(&deps.password_hasher),
            Arc::clone(&deps.token_manager),
            Arc::clone(&deps.media),
            Arc::clone(&deps.clock),
        ));

        let article_commands = Arc::new(ArticleCommandService::new(
            Arc::clone(&deps.article_write_repo),
            Arc::clone(&deps.article_read_repo),
            Arc::clone(&deps.category_repo),
            Arc::clone(&slugs),
            Arc::clone(&deps.media),
            Arc::clone(&deps.clock),
        ));

        let category_commands = Arc::new(CategoryCommandService::new(
            Arc::clone(&deps.category_repo),
            slugs,
        ));

        let article_queries = Arc::new(ArticleQueryService::new(
            Arc::clone(&deps.article_read_repo),
            Arc::clone(&deps.article_write_repo),
            Arc::clone(&deps.category_repo),
        ));
        let category_queries = Arc::new(CategoryQueryService::new(Arc::clone(&deps.category_repo)));
        let user_queries = Arc::new(UserQueryService::new(
            Arc::clone(&deps.user_repo),
            Arc::clone(&deps.profile_repo),
        ));

        Self {
            user_commands,
            article_commands,
            category_commands,
            article_queries,
            category_queries,
            user_queries,
            token_manager: deps.token_manager,
        }
    }

    /// Resolves the session token carried by a request.
    pub async fn authenticate(&self, token: &str) -> ApplicationResult<AuthenticatedUser> {
        self.token_manager.authenticate(token).await
    }
}
