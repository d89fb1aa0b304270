use super::ArticleQueryService;
use crate::{
    application::{
        dto::{ArticleDto, AuthenticatedUser},
        error::ApplicationResult,
    },
    domain::article::ArticleFilter,
};

impl ArticleQueryService {
    /// Every article the actor wrote, whatever its status.
    pub async fn dashboard(&self, actor: &AuthenticatedUser) -> ApplicationResult<Vec<ArticleDto>> {
        let articles = self.read_repo.list(&ArticleFilter::owned_by(actor.id)).await?;
        Ok(articles.into_iter().map(Into::into).collect())
    }
}
