// src/application/commands/articles/edit.rs
use super::{ArticleCommandService, ArticleInput, capability::ensure_capability};
use crate::{
    application::{
        dto::{ArticleDto, AuthenticatedUser},
        error::{ApplicationError, ApplicationResult},
    },
    domain::article::{
        ArticleSlug, ArticleView,
        specifications::{CanEditArticleSpec, EditRefusal},
    },
};

pub const PUBLISHED_EDIT_REFUSAL: &str = "Published articles cannot be edited.";

pub struct EditArticleCommand {
    pub slug: String,
    pub input: ArticleInput,
}

impl ArticleCommandService {
    /// The article behind the edit form, if `actor` may still edit it.
    ///
    /// Articles owned by someone else are reported as missing; published ones
    /// yield `Forbidden` carrying the message shown to the author.
    pub async fn article_for_edit(
        &self,
        actor: &AuthenticatedUser,
        slug: &str,
    ) -> ApplicationResult<ArticleView> {
        ensure_capability(actor, "articles", "update:own")?;

        let not_found = || ApplicationError::not_found("article not found");
        let slug = ArticleSlug::new(slug).map_err(|_| not_found())?;
        let view = self
            .read_repo
            .find_by_slug(&slug)
            .await?
            .ok_or_else(not_found)?;

        match CanEditArticleSpec::new(&view.article, actor.id).check() {
            Ok(()) => Ok(view),
            Err(EditRefusal::NotOwner) => Err(not_found()),
            Err(EditRefusal::AlreadyPublished) => {
                Err(ApplicationError::forbidden(PUBLISHED_EDIT_REFUSAL))
            }
        }
    }

    pub async fn edit_article(
        &self,
        actor: &AuthenticatedUser,
        command: EditArticleCommand,
    ) -> ApplicationResult<ArticleDto> {
        let view = self.article_for_edit(actor, &command.slug).await?;
        let mut article = view.article;

        let content = self
            .clean_input(command.input, Some(&article.content.cover))
            .await?;
        let now = self.clock.now();
        article.revise(content, now);

        let updated = self
            .write_repo
            .update_content(article.id, &article.content, article.updated_at)
            .await?;
        tracing::info!(article_id = updated.id.0, slug = %updated.slug, "article updated");

        let view = self
            .read_repo
            .find_by_id(updated.id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("article not found"))?;
        Ok(view.into())
    }
}
