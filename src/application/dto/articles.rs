use crate::application::ports::storage::MEDIA_URL;
use crate::domain::article::ArticleView;
use chrono::{DateTime, Utc};
use serde::Serialize;

use super::CategoryDto;

#[derive(Debug, Clone, Serialize)]
pub struct ArticleDto {
    pub id: i64,
    pub slug: String,
    pub title: String,
    pub article_type: &'static str,
    pub article_type_label: &'static str,
    pub category: Option<CategoryDto>,
    pub author_id: i64,
    pub author_username: String,
    /// Uploaded image if present, otherwise the external URL.
    pub cover_url: Option<String>,
    pub cover_image: Option<String>,
    pub cover_image_url: Option<String>,
    pub excerpt: String,
    pub body: String,
    pub subject_title: String,
    pub subject_year: String,
    pub director: String,
    pub rating: Option<String>,
    pub status: &'static str,
    pub status_label: &'static str,
    pub editable: bool,
    pub featured: bool,
    pub views: u64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub published_at: Option<DateTime<Utc>>,
}

impl From<ArticleView> for ArticleDto {
    fn from(view: ArticleView) -> Self {
        let ArticleView {
            article,
            author_username,
            category,
        } = view;
        let content = article.content;
        let cover_url = content.cover.display_url(MEDIA_URL);

        Self {
            id: article.id.into(),
            slug: article.slug.into_inner(),
            title: content.title.into_inner(),
            article_type: content.article_type.as_str(),
            article_type_label: content.article_type.label(),
            category: category.map(CategoryDto::from),
            author_id: article.author_id.into(),
            author_username,
            cover_url,
            cover_image: content.cover.image,
            cover_image_url: content.cover.url.map(|url| url.as_str().to_string()),
            excerpt: content.excerpt.into_inner(),
            body: content.body.into_inner(),
            subject_title: content.subject.title,
            subject_year: content.subject.year,
            director: content.subject.director,
            rating: content.rating.map(|rating| rating.to_string()),
            status: article.status.as_str(),
            status_label: article.status.label(),
            editable: article.status.allows_author_edit(),
            featured: article.featured,
            views: article.views,
            created_at: article.created_at,
            updated_at: article.updated_at,
            published_at: article.published_at,
        }
    }
}
