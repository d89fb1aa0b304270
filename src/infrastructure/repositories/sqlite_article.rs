use super::map_sqlx;
use crate::domain::article::{
    Article, ArticleBody, ArticleContent, ArticleExcerpt, ArticleFilter, ArticleId, ArticleKind,
    ArticleOrder, ArticleReadRepository, ArticleSlug, ArticleStatus, ArticleTitle, ArticleView,
    ArticleWriteRepository, Cover, CoverUrl, NewArticle, Rating, SearchScope, Subject, fold_case,
    services::SlugIndex,
};
use crate::domain::category::{Category, CategoryId, CategoryName, CategorySlug};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::user::UserId;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, QueryBuilder, Sqlite, SqlitePool};
use std::sync::Arc;

const ARTICLE_COLUMNS: &str = "id, title, slug, author_id, category_id, article_type, cover_image, \
     cover_image_url, excerpt, body, subject_title, subject_year, director, rating_tenths, status, \
     featured, views, created_at, updated_at, published_at";

const VIEW_SELECT: &str = "SELECT a.id, a.title, a.slug, a.author_id, a.category_id, a.article_type, \
     a.cover_image, a.cover_image_url, a.excerpt, a.body, a.subject_title, a.subject_year, \
     a.director, a.rating_tenths, a.status, a.featured, a.views, a.created_at, a.updated_at, \
     a.published_at, u.username AS author_username, c.name AS category_name, \
     c.slug AS category_slug, c.media_type AS category_media_type \
     FROM articles a \
     JOIN users u ON u.id = a.author_id \
     LEFT JOIN categories c ON c.id = a.category_id";

#[derive(Clone)]
pub struct SqliteArticleWriteRepository {
    pool: Arc<SqlitePool>,
}

impl SqliteArticleWriteRepository {
    pub fn new(pool: Arc<SqlitePool>) -> Self {
        Self { pool }
    }
}

#[derive(Clone)]
pub struct SqliteArticleReadRepository {
    pool: Arc<SqlitePool>,
}

impl SqliteArticleReadRepository {
    pub fn new(pool: Arc<SqlitePool>) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct ArticleRow {
    id: i64,
    title: String,
    slug: String,
    author_id: i64,
    category_id: Option<i64>,
    article_type: String,
    cover_image: Option<String>,
    cover_image_url: Option<String>,
    excerpt: String,
    body: String,
    subject_title: String,
    subject_year: String,
    director: String,
    rating_tenths: Option<i64>,
    status: String,
    featured: bool,
    views: i64,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    published_at: Option<DateTime<Utc>>,
}

impl TryFrom<ArticleRow> for Article {
    type Error = DomainError;

    fn try_from(row: ArticleRow) -> Result<Self, Self::Error> {
        let content = ArticleContent {
            title: ArticleTitle::new(row.title)?,
            article_type: row.article_type.parse::<ArticleKind>()?,
            category_id: row.category_id.map(CategoryId::new).transpose()?,
            subject: Subject::new(row.subject_title, row.subject_year, row.director)?,
            rating: row.rating_tenths.map(Rating::from_tenths).transpose()?,
            excerpt: ArticleExcerpt::new(row.excerpt)?,
            body: ArticleBody::new(row.body)?,
            cover: Cover {
                image: row.cover_image.filter(|path| !path.is_empty()),
                url: row
                    .cover_image_url
                    .filter(|url| !url.is_empty())
                    .map(|url| CoverUrl::parse(&url))
                    .transpose()?,
            },
        };
        Ok(Article {
            id: ArticleId::new(row.id)?,
            slug: ArticleSlug::new(row.slug)?,
            author_id: UserId::new(row.author_id)?,
            content,
            status: row.status.parse::<ArticleStatus>()?,
            featured: row.featured,
            views: u64::try_from(row.views).unwrap_or_default(),
            created_at: row.created_at,
            updated_at: row.updated_at,
            published_at: row.published_at,
        })
    }
}

#[derive(Debug, FromRow)]
struct ArticleViewRow {
    #[sqlx(flatten)]
    article: ArticleRow,
    author_username: String,
    category_name: Option<String>,
    category_slug: Option<String>,
    category_media_type: Option<String>,
}

impl TryFrom<ArticleViewRow> for ArticleView {
    type Error = DomainError;

    fn try_from(row: ArticleViewRow) -> Result<Self, Self::Error> {
        let category = match (
            row.article.category_id,
            row.category_name,
            row.category_slug,
            row.category_media_type,
        ) {
            (Some(id), Some(name), Some(slug), Some(media_type)) => Some(Category {
                id: CategoryId::new(id)?,
                name: CategoryName::new(name)?,
                slug: CategorySlug::new(slug)?,
                media_type: media_type.parse()?,
            }),
            _ => None,
        };
        Ok(ArticleView {
            article: Article::try_from(row.article)?,
            author_username: row.author_username,
            category,
        })
    }
}

fn push_id_list<'a>(builder: &mut QueryBuilder<'a, Sqlite>, ids: &[ArticleId]) {
    builder.push(" WHERE id IN (");
    let mut separated = builder.separated(", ");
    for id in ids {
        separated.push_bind(id.0);
    }
    separated.push_unseparated(")");
}

#[async_trait]
impl ArticleWriteRepository for SqliteArticleWriteRepository {
    async fn insert(&self, article: NewArticle) -> DomainResult<Article> {
        let NewArticle {
            slug,
            author_id,
            content,
            status,
            created_at,
        } = article;

        let row = sqlx::query_as::<_, ArticleRow>(&format!(
            "INSERT INTO articles (title, slug, author_id, category_id, article_type, cover_image, \
             cover_image_url, excerpt, body, subject_title, subject_year, director, rating_tenths, \
             status, featured, views, created_at, updated_at, title_folded, body_folded, \
             subject_title_folded) \
             VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, 0, 0, ?, ?, ?, ?, ?) \
             RETURNING {ARTICLE_COLUMNS}"
        ))
        .bind(content.title.as_str())
        .bind(slug.as_str())
        .bind(i64::from(author_id))
        .bind(content.category_id.map(i64::from))
        .bind(content.article_type.as_str())
        .bind(content.cover.image.as_deref())
        .bind(content.cover.url.as_ref().map(CoverUrl::as_str))
        .bind(content.excerpt.as_str())
        .bind(content.body.as_str())
        .bind(content.subject.title.as_str())
        .bind(content.subject.year.as_str())
        .bind(content.subject.director.as_str())
        .bind(content.rating.map(|rating| i64::from(rating.tenths())))
        .bind(status.as_str())
        .bind(created_at)
        .bind(created_at)
        .bind(fold_case(content.title.as_str()))
        .bind(fold_case(content.body.as_str()))
        .bind(fold_case(&content.subject.title))
        .fetch_one(&*self.pool)
        .await
        .map_err(map_sqlx)?;

        Article::try_from(row)
    }

    async fn update_content(
        &self,
        id: ArticleId,
        content: &ArticleContent,
        updated_at: DateTime<Utc>,
    ) -> DomainResult<Article> {
        let row = sqlx::query_as::<_, ArticleRow>(&format!(
            "UPDATE articles SET title = ?, category_id = ?, article_type = ?, cover_image = ?, \
             cover_image_url = ?, excerpt = ?, body = ?, subject_title = ?, subject_year = ?, \
             director = ?, rating_tenths = ?, updated_at = ?, title_folded = ?, body_folded = ?, \
             subject_title_folded = ? WHERE id = ? RETURNING {ARTICLE_COLUMNS}"
        ))
        .bind(content.title.as_str())
        .bind(content.category_id.map(i64::from))
        .bind(content.article_type.as_str())
        .bind(content.cover.image.as_deref())
        .bind(content.cover.url.as_ref().map(CoverUrl::as_str))
        .bind(content.excerpt.as_str())
        .bind(content.body.as_str())
        .bind(content.subject.title.as_str())
        .bind(content.subject.year.as_str())
        .bind(content.subject.director.as_str())
        .bind(content.rating.map(|rating| i64::from(rating.tenths())))
        .bind(updated_at)
        .bind(fold_case(content.title.as_str()))
        .bind(fold_case(content.body.as_str()))
        .bind(fold_case(&content.subject.title))
        .bind(id.0)
        .fetch_optional(&*self.pool)
        .await
        .map_err(map_sqlx)?
        .ok_or_else(|| DomainError::NotFound("article not found".into()))?;

        Article::try_from(row)
    }

    async fn set_status(
        &self,
        ids: &[ArticleId],
        status: ArticleStatus,
        published_at: Option<DateTime<Utc>>,
        updated_at: DateTime<Utc>,
    ) -> DomainResult<u64> {
        if ids.is_empty() {
            return Ok(0);
        }
        let mut builder: QueryBuilder<Sqlite> = QueryBuilder::new("UPDATE articles SET status = ");
        builder.push_bind(status.as_str());
        builder.push(", updated_at = ");
        builder.push_bind(updated_at);
        builder.push(", published_at = COALESCE(");
        builder.push_bind(published_at);
        builder.push(", published_at)");
        push_id_list(&mut builder, ids);

        let result = builder
            .build()
            .execute(&*self.pool)
            .await
            .map_err(map_sqlx)?;
        Ok(result.rows_affected())
    }

    async fn set_featured(
        &self,
        ids: &[ArticleId],
        featured: bool,
        updated_at: DateTime<Utc>,
    ) -> DomainResult<u64> {
        if ids.is_empty() {
            return Ok(0);
        }
        let mut builder: QueryBuilder<Sqlite> = QueryBuilder::new("UPDATE articles SET featured = ");
        builder.push_bind(featured);
        builder.push(", updated_at = ");
        builder.push_bind(updated_at);
        push_id_list(&mut builder, ids);

        let result = builder
            .build()
            .execute(&*self.pool)
            .await
            .map_err(map_sqlx)?;
        Ok(result.rows_affected())
    }

    async fn increment_views(&self, id: ArticleId) -> DomainResult<u64> {
        let views: i64 =
            sqlx::query_scalar("UPDATE articles SET views = views + 1 WHERE id = ? RETURNING views")
                .bind(id.0)
                .fetch_optional(&*self.pool)
                .await
                .map_err(map_sqlx)?
                .ok_or_else(|| DomainError::NotFound("article not found".into()))?;
        Ok(u64::try_from(views).unwrap_or_default())
    }
}

/// Appends the WHERE clause for `filter`. Every criterion is ANDed.
fn apply_filter<'a>(builder: &mut QueryBuilder<'a, Sqlite>, filter: &'a ArticleFilter, pattern: Option<&'a str>) {
    builder.push(" WHERE 1 = 1");

    if let Some(status) = filter.status {
        builder.push(" AND a.status = ");
        builder.push_bind(status.as_str());
    }
    if let Some(author) = filter.author {
        builder.push(" AND a.author_id = ");
        builder.push_bind(author.0);
    }
    if let Some(pattern) = pattern {
        let columns: &[&str] = match filter.search_scope {
            SearchScope::Public => &[
                "a.title_folded",
                "a.body_folded",
                "a.subject_title_folded",
                "u.username_folded",
            ],
            SearchScope::Moderation => &[
                "a.title_folded",
                "u.username_folded",
                "a.subject_title_folded",
            ],
        };
        builder.push(" AND (");
        for (index, column) in columns.iter().enumerate() {
            if index > 0 {
                builder.push(" OR ");
            }
            builder.push(*column);
            builder.push(" LIKE ");
            builder.push_bind(pattern);
            builder.push(" ESCAPE '\\'");
        }
        builder.push(")");
    }
    if let Some(category) = &filter.category {
        builder.push(" AND c.slug = ");
        builder.push_bind(category.as_str());
    }
    if let Some(media_type) = filter.media_type {
        builder.push(" AND c.media_type = ");
        builder.push_bind(media_type.as_str());
    }
    if let Some(kind) = filter.kind {
        builder.push(" AND a.article_type = ");
        builder.push_bind(kind.as_str());
    }
    if let Some(featured) = filter.featured {
        builder.push(" AND a.featured = ");
        builder.push_bind(featured);
    }
    if let Some(exclude) = filter.exclude {
        builder.push(" AND a.id <> ");
        builder.push_bind(exclude.0);
    }
}

impl SqliteArticleReadRepository {
    async fn find_one(&self, column: &str, value: ViewKey<'_>) -> DomainResult<Option<ArticleView>> {
        let sql = format!("{VIEW_SELECT} WHERE a.{column} = ?");
        let query = sqlx::query_as::<_, ArticleViewRow>(&sql);
        let query = match value {
            ViewKey::Id(id) => query.bind(id),
            ViewKey::Slug(slug) => query.bind(slug),
        };
        let row = query.fetch_optional(&*self.pool).await.map_err(map_sqlx)?;
        row.map(ArticleView::try_from).transpose()
    }
}

enum ViewKey<'a> {
    Id(i64),
    Slug(&'a str),
}

#[async_trait]
impl SlugIndex for SqliteArticleReadRepository {
    async fn slug_taken(&self, candidate: &str) -> DomainResult<bool> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(1) FROM articles WHERE slug = ?")
            .bind(candidate)
            .fetch_one(&*self.pool)
            .await
            .map(|count| count > 0)
            .map_err(map_sqlx)
    }
}

#[async_trait]
impl ArticleReadRepository for SqliteArticleReadRepository {
    async fn find_by_id(&self, id: ArticleId) -> DomainResult<Option<ArticleView>> {
        self.find_one("id", ViewKey::Id(id.0)).await
    }

    async fn find_by_slug(&self, slug: &ArticleSlug) -> DomainResult<Option<ArticleView>> {
        self.find_one("slug", ViewKey::Slug(slug.as_str())).await
    }

    async fn list(&self, filter: &ArticleFilter) -> DomainResult<Vec<ArticleView>> {
        let pattern = filter.search_pattern();
        let mut builder: QueryBuilder<Sqlite> = QueryBuilder::new(VIEW_SELECT);
        apply_filter(&mut builder, filter, pattern.as_deref());

        builder.push(match filter.order {
            ArticleOrder::Publication => {
                " ORDER BY a.published_at DESC, a.created_at DESC, a.id DESC"
            }
            ArticleOrder::Newest => " ORDER BY a.created_at DESC, a.id DESC",
        });
        if let Some(limit) = filter.limit {
            builder.push(" LIMIT ");
            builder.push_bind(i64::from(limit));
        }

        let rows = builder
            .build_query_as::<ArticleViewRow>()
            .fetch_all(&*self.pool)
            .await
            .map_err(map_sqlx)?;

        rows.into_iter()
            .map(ArticleView::try_from)
            .collect::<Result<Vec<_>, _>>()
    }
}
