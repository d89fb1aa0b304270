// src/application/commands/categories/mod.rs
use std::sync::Arc;

use crate::{
    application::{
        commands::articles::ensure_capability,
        dto::{AuthenticatedUser, CategoryDto},
        error::{ApplicationError, ApplicationResult, FieldErrors},
    },
    domain::{
        article::services::SlugAssigner,
        category::{CategoryName, CategoryRepository, CategorySlug, MediaType, NewCategory},
    },
};

/// Raw values of the category form.
#[derive(Debug, Clone, Default)]
pub struct CreateCategoryCommand {
    pub name: String,
    /// Blank to derive one from the name.
    pub slug: String,
    pub media_type: String,
}

impl CreateCategoryCommand {
    pub const FIELDS: [&'static str; 3] = ["name", "slug", "media_type"];
}

pub struct CategoryCommandService {
    repo: Arc<dyn CategoryRepository>,
    slugs: Arc<SlugAssigner>,
}

impl CategoryCommandService {
    pub fn new(repo: Arc<dyn CategoryRepository>, slugs: Arc<SlugAssigner>) -> Self {
        Self { repo, slugs }
    }

    pub async fn create_category(
        &self,
        actor: &AuthenticatedUser,
        command: CreateCategoryCommand,
    ) -> ApplicationResult<CategoryDto> {
        ensure_capability(actor, "categories", "manage")?;

        let mut errors = FieldErrors::new();
        let name = errors.collect(CategoryName::new(command.name.trim()));
        let media_type = if command.media_type.trim().is_empty() {
            errors.add("media_type", "This field is required.");
            None
        } else {
            errors.collect(command.media_type.trim().parse::<MediaType>())
        };

        let explicit = command.slug.trim();
        let slug = if explicit.is_empty() {
            None
        } else {
            match errors.collect(CategorySlug::new(explicit)) {
                Some(slug) if self.repo.slug_taken(slug.as_str()).await? => {
                    errors.add("slug", "Category with this Slug already exists.");
                    None
                }
                other => other,
            }
        };
        errors.into_result()?;

        let (Some(name), Some(media_type)) = (name, media_type) else {
            return Err(ApplicationError::validation("category form is incomplete"));
        };
        let slug = match slug {
            Some(slug) => slug,
            None => CategorySlug::new(
                self.slugs
                    .assign(name.as_str(), "category", self.repo.as_ref())
                    .await?,
            )?,
        };

        let created = self
            .repo
            .insert(NewCategory {
                name,
                slug,
                media_type,
            })
            .await?;
        tracing::info!(category = %created.slug, "category created");
        Ok(created.into())
    }

    pub async fn delete_category(
        &self,
        actor: &AuthenticatedUser,
        slug: &str,
    ) -> ApplicationResult<()> {
        ensure_capability(actor, "categories", "manage")?;
        let not_found = || ApplicationError::not_found("category not found");
        let slug = CategorySlug::new(slug).map_err(|_| not_found())?;
        let category = self
            .repo
            .find_by_slug(&slug)
            .await?
            .ok_or_else(not_found)?;
        self.repo.delete(category.id).await?;
        tracing::info!(category = %category.slug, "category deleted");
        Ok(())
    }
}
