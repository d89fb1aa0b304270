use super::ArticleQueryService;
use crate::{
    application::{
        dto::{ArticleDetailPage, ArticleDto},
        error::{ApplicationError, ApplicationResult},
    },
    domain::article::{ArticleFilter, ArticleSlug},
};

pub const RELATED_LIMIT: u32 = 3;

impl ArticleQueryService {
    /// Public detail page. Counts one view per call.
    pub async fn open_article(&self, slug: &str) -> ApplicationResult<ArticleDetailPage> {
        let not_found = || ApplicationError::not_found("article not found");
        let slug = ArticleSlug::new(slug).map_err(|_| not_found())?;

        let mut view = self
            .read_repo
            .find_by_slug(&slug)
            .await?
            .filter(|view| view.article.status.is_public())
            .ok_or_else(not_found)?;

        view.article.views = self.write_repo.increment_views(view.article.id).await?;

        let related = self
            .read_repo
            .list(
                &ArticleFilter::published()
                    .with_kind(view.article.content.article_type)
                    .excluding(view.article.id)
                    .limit(RELATED_LIMIT),
            )
            .await?;

        Ok(ArticleDetailPage {
            article: ArticleDto::from(view),
            related: related.into_iter().map(Into::into).collect(),
        })
    }
}
