// src/application/commands/articles/submit.rs
use super::{ArticleCommandService, ArticleInput, capability::ensure_capability};
use crate::{
    application::{
        dto::{ArticleDto, AuthenticatedUser},
        error::{ApplicationError, ApplicationResult},
    },
    domain::article::{ArticleSlug, NewArticle},
};

pub struct SubmitArticleCommand {
    pub input: ArticleInput,
}

impl ArticleCommandService {
    /// Creates an article owned by `actor`, waiting for moderation.
    pub async fn submit_article(
        &self,
        actor: &AuthenticatedUser,
        command: SubmitArticleCommand,
    ) -> ApplicationResult<ArticleDto> {
        ensure_capability(actor, "articles", "create")?;

        let content = self.clean_input(command.input, None).await?;
        let slug = self
            .slugs
            .assign(content.title.as_str(), "article", self.read_repo.as_ref())
            .await?;
        let slug = ArticleSlug::new(slug)?;
        let now = self.clock.now();

        let created = self
            .write_repo
            .insert(NewArticle::submitted(slug, actor.id, content, now))
            .await?;
        tracing::info!(
            article_id = created.id.0,
            slug = %created.slug,
            author = %actor.username,
            "article submitted for review"
        );

        let view = self
            .read_repo
            .find_by_id(created.id)
            .await?
            .ok_or_else(|| ApplicationError::infrastructure("submitted article vanished"))?;
        Ok(view.into())
    }
}
