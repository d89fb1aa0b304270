use crate::domain::article::entity::{Article, ArticleContent, ArticleView, NewArticle};
use crate::domain::article::filter::ArticleFilter;
use crate::domain::article::services::SlugIndex;
use crate::domain::article::status::ArticleStatus;
use crate::domain::article::value_objects::{ArticleId, ArticleSlug};
use crate::domain::errors::DomainResult;
use async_trait::async_trait;
use chrono::{DateTime, Utc};

#[async_trait]
pub trait ArticleWriteRepository: Send + Sync {
    async fn insert(&self, article: NewArticle) -> DomainResult<Article>;

    async fn update_content(
        &self,
        id: ArticleId,
        content: &ArticleContent,
        updated_at: DateTime<Utc>,
    ) -> DomainResult<Article>;

    /// Set-based status change. `published_at`, when given, is written as well.
    /// Returns the number of rows touched.
    async fn set_status(
        &self,
        ids: &[ArticleId],
        status: ArticleStatus,
        published_at: Option<DateTime<Utc>>,
        updated_at: DateTime<Utc>,
    ) -> DomainResult<u64>;

    async fn set_featured(
        &self,
        ids: &[ArticleId],
        featured: bool,
        updated_at: DateTime<Utc>,
    ) -> DomainResult<u64>;

    /// Atomically bumps the view counter and returns the new value.
    async fn increment_views(&self, id: ArticleId) -> DomainResult<u64>;
}

#[async_trait]
pub trait ArticleReadRepository: SlugIndex {
    async fn find_by_id(&self, id: ArticleId) -> DomainResult<Option<ArticleView>>;
    async fn find_by_slug(&self, slug: &ArticleSlug) -> DomainResult<Option<ArticleView>>;
    async fn list(&self, filter: &ArticleFilter) -> DomainResult<Vec<ArticleView>>;
}
