// src/application/commands/articles/input.rs
use super::ArticleCommandService;
use crate::{
    application::{
        error::{ApplicationError, ApplicationResult, FieldErrors},
        ports::storage::{MediaFolder, Upload},
    },
    domain::{
        article::{
            ArticleBody, ArticleContent, ArticleExcerpt, ArticleKind, ArticleTitle, Cover,
            CoverUrl, Rating, Subject,
        },
        category::CategoryId,
        errors::{DomainError, DomainResult},
    },
};

const IMAGE_EXTENSIONS: [&str; 5] = ["jpg", "jpeg", "png", "gif", "webp"];

/// Raw values of the article form, exactly as submitted.
#[derive(Debug, Clone, Default)]
pub struct ArticleInput {
    pub title: String,
    pub article_type: String,
    /// Category id, blank for none.
    pub category: String,
    pub subject_title: String,
    pub subject_year: String,
    pub director: String,
    pub rating: String,
    pub excerpt: String,
    pub body: String,
    pub cover_image: Option<Upload>,
    pub cover_image_clear: bool,
    pub cover_image_url: String,
}

impl ArticleInput {
    pub const FIELDS: [&'static str; 11] = [
        "title",
        "article_type",
        "category",
        "subject_title",
        "subject_year",
        "director",
        "rating",
        "excerpt",
        "body",
        "cover_image",
        "cover_image_url",
    ];
}

pub(super) fn clean_title(raw: &str) -> DomainResult<ArticleTitle> {
    ArticleTitle::new(raw.trim())
}

pub(super) fn clean_article_type(raw: &str) -> DomainResult<ArticleKind> {
    if raw.trim().is_empty() {
        return Err(DomainError::invalid_field("article_type", "This field is required."));
    }
    raw.trim().parse()
}

pub(super) fn clean_rating(raw: &str) -> DomainResult<Option<Rating>> {
    if raw.trim().is_empty() {
        return Ok(None);
    }
    Rating::parse(raw).map(Some)
}

pub(super) fn clean_excerpt(raw: &str) -> DomainResult<ArticleExcerpt> {
    ArticleExcerpt::new(raw.trim())
}

pub(super) fn clean_body(raw: &str) -> DomainResult<ArticleBody> {
    ArticleBody::new(raw.trim())
}

pub(super) fn clean_subject(title: &str, year: &str, director: &str) -> DomainResult<Subject> {
    Subject::new(title.trim(), year.trim(), director.trim())
}

pub(super) fn clean_cover_url(raw: &str) -> DomainResult<Option<CoverUrl>> {
    if raw.trim().is_empty() {
        return Ok(None);
    }
    CoverUrl::parse(raw).map(Some)
}

/// Only the file name is checked; the bytes are stored as received.
pub(crate) fn clean_image(field: &'static str, upload: Option<&Upload>) -> DomainResult<()> {
    let Some(upload) = upload else {
        return Ok(());
    };
    if upload.is_empty() {
        return Err(DomainError::invalid_field(field, "The submitted file is empty."));
    }
    let extension = upload
        .file_name
        .rsplit_once('.')
        .map(|(_, ext)| ext.to_ascii_lowercase())
        .unwrap_or_default();
    if !IMAGE_EXTENSIONS.contains(&extension.as_str()) {
        return Err(DomainError::invalid_field(
            field,
            "Upload a valid image. The file you uploaded was either not an image or a corrupted image.",
        ));
    }
    Ok(())
}

impl ArticleCommandService {
    async fn clean_category(&self, raw: &str) -> DomainResult<Option<CategoryId>> {
        let raw = raw.trim();
        if raw.is_empty() {
            return Ok(None);
        }
        let invalid = || {
            DomainError::invalid_field(
                "category",
                "Select a valid choice. That choice is not one of the available choices.",
            )
        };
        let id = raw
            .parse::<i64>()
            .ok()
            .and_then(|id| CategoryId::new(id).ok())
            .ok_or_else(invalid)?;
        match self.category_repo.find_by_id(id).await? {
            Some(category) => Ok(Some(category.id)),
            None => Err(invalid()),
        }
    }

    /// Validates every field, collecting all errors, then stores a new cover upload.
    /// Nothing is written when any field fails.
    pub(super) async fn clean_input(
        &self,
        input: ArticleInput,
        current_cover: Option<&Cover>,
    ) -> ApplicationResult<ArticleContent> {
        let mut errors = FieldErrors::new();

        let title = errors.collect(clean_title(&input.title));
        let article_type = errors.collect(clean_article_type(&input.article_type));
        let category_id = match self.clean_category(&input.category).await {
            Err(DomainError::Persistence(msg)) => {
                return Err(DomainError::Persistence(msg).into());
            }
            other => errors.collect(other),
        };
        let subject = errors.collect(clean_subject(
            &input.subject_title,
            &input.subject_year,
            &input.director,
        ));
        let rating = errors.collect(clean_rating(&input.rating));
        let excerpt = errors.collect(clean_excerpt(&input.excerpt));
        let body = errors.collect(clean_body(&input.body));
        let cover_url = errors.collect(clean_cover_url(&input.cover_image_url));
        errors.collect(clean_image("cover_image", input.cover_image.as_ref()));

        if !errors.is_empty() {
            return Err(ApplicationError::InvalidInput(errors));
        }

        let (
            Some(title),
            Some(article_type),
            Some(category_id),
            Some(subject),
            Some(rating),
            Some(excerpt),
            Some(body),
            Some(cover_url),
        ) = (
            title,
            article_type,
            category_id,
            subject,
            rating,
            excerpt,
            body,
            cover_url,
        )
        else {
            return Err(ApplicationError::validation("article form is incomplete"));
        };

        let image = match input.cover_image {
            Some(upload) => Some(self.media.store(MediaFolder::Covers, upload).await?),
            None if input.cover_image_clear => None,
            None => current_cover.and_then(|cover| cover.image.clone()),
        };

        Ok(ArticleContent {
            title,
            article_type,
            category_id,
            subject,
            rating,
            excerpt,
            body,
            cover: Cover {
                image,
                url: cover_url,
            },
        })
    }
}
