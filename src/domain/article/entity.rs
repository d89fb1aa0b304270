// src/domain/article/entity.rs
use crate::domain::article::status::ArticleStatus;
use crate::domain::article::value_objects::{
    ArticleBody, ArticleExcerpt, ArticleId, ArticleKind, ArticleSlug, ArticleTitle, Cover, Rating,
    Subject,
};
use crate::domain::category::{Category, CategoryId};
use crate::domain::user::UserId;
use chrono::{DateTime, Utc};

/// Fields an author controls through the submission form.
#[derive(Debug, Clone)]
pub struct ArticleContent {
    pub title: ArticleTitle,
    pub article_type: ArticleKind,
    pub category_id: Option<CategoryId>,
    pub subject: Subject,
    pub rating: Option<Rating>,
    pub excerpt: ArticleExcerpt,
    pub body: ArticleBody,
    pub cover: Cover,
}

#[derive(Debug, Clone)]
pub struct Article {
    pub id: ArticleId,
    pub slug: ArticleSlug,
    pub author_id: UserId,
    pub content: ArticleContent,
    pub status: ArticleStatus,
    pub featured: bool,
    pub views: u64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub published_at: Option<DateTime<Utc>>,
}

impl Article {
    pub fn is_owned_by(&self, user_id: UserId) -> bool {
        self.author_id == user_id
    }

    /// Replaces the editable content. The slug never changes after creation.
    pub fn revise(&mut self, content: ArticleContent, now: DateTime<Utc>) {
        self.content = content;
        self.updated_at = now;
    }
}

#[derive(Debug, Clone)]
pub struct NewArticle {
    pub slug: ArticleSlug,
    pub author_id: UserId,
    pub content: ArticleContent,
    pub status: ArticleStatus,
    pub created_at: DateTime<Utc>,
}

impl NewArticle {
    pub fn submitted(
        slug: ArticleSlug,
        author_id: UserId,
        content: ArticleContent,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            slug,
            author_id,
            content,
            status: ArticleStatus::on_submission(),
            created_at,
        }
    }
}

/// An article joined with the rows pages display alongside it.
#[derive(Debug, Clone)]
pub struct ArticleView {
    pub article: Article,
    pub author_username: String,
    pub category: Option<Category>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn content(title: &str) -> ArticleContent {
        ArticleContent {
            title: ArticleTitle::new(title).unwrap(),
            article_type: ArticleKind::Review,
            category_id: None,
            subject: Subject::default(),
            rating: None,
            excerpt: ArticleExcerpt::new("excerpt").unwrap(),
            body: ArticleBody::new("body").unwrap(),
            cover: Cover::default(),
        }
    }

    fn sample_article() -> Article {
        let now = Utc::now();
        Article {
            id: ArticleId::new(1).unwrap(),
            slug: ArticleSlug::new("first-look").unwrap(),
            author_id: UserId::new(1).unwrap(),
            content: content("First look"),
            status: ArticleStatus::Pending,
            featured: false,
            views: 0,
            created_at: now,
            updated_at: now,
            published_at: None,
        }
    }

    #[test]
    fn new_submission_is_pending() {
        let new = NewArticle::submitted(
            ArticleSlug::new("x").unwrap(),
            UserId::new(2).unwrap(),
            content("x"),
            Utc::now(),
        );
        assert_eq!(new.status, ArticleStatus::Pending);
    }

    #[test]
    fn revise_keeps_slug() {
        let mut article = sample_article();
        let later = article.updated_at + Duration::seconds(30);
        article.revise(content("A different title"), later);
        assert_eq!(article.slug.as_str(), "first-look");
        assert_eq!(article.content.title.as_str(), "A different title");
        assert_eq!(article.updated_at, later);
    }

    #[test]
    fn ownership_check() {
        let article = sample_article();
        assert!(article.is_owned_by(UserId::new(1).unwrap()));
        assert!(!article.is_owned_by(UserId::new(7).unwrap()));
    }
}
