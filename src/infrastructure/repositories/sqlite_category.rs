use super::map_sqlx;
use crate::domain::article::services::SlugIndex;
use crate::domain::category::{
    Category, CategoryId, CategoryName, CategoryRepository, CategorySlug, NewCategory,
};
use crate::domain::errors::{DomainError, DomainResult};
use async_trait::async_trait;
use sqlx::{FromRow, SqlitePool};
use std::sync::Arc;

#[derive(Clone)]
pub struct SqliteCategoryRepository {
    pool: Arc<SqlitePool>,
}

impl SqliteCategoryRepository {
    pub fn new(pool: Arc<SqlitePool>) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct CategoryRow {
    id: i64,
    name: String,
    slug: String,
    media_type: String,
}

impl TryFrom<CategoryRow> for Category {
    type Error = DomainError;

    fn try_from(row: CategoryRow) -> Result<Self, Self::Error> {
        Ok(Category {
            id: CategoryId::new(row.id)?,
            name: CategoryName::new(row.name)?,
            slug: CategorySlug::new(row.slug)?,
            media_type: row.media_type.parse()?,
        })
    }
}

#[async_trait]
impl SlugIndex for SqliteCategoryRepository {
    async fn slug_taken(&self, candidate: &str) -> DomainResult<bool> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(1) FROM categories WHERE slug = ?")
            .bind(candidate)
            .fetch_one(&*self.pool)
            .await
            .map(|count| count > 0)
            .map_err(map_sqlx)
    }
}

#[async_trait]
impl CategoryRepository for SqliteCategoryRepository {
    async fn insert(&self, category: NewCategory) -> DomainResult<Category> {
        let row = sqlx::query_as::<_, CategoryRow>(
            "INSERT INTO categories (name, slug, media_type) VALUES (?, ?, ?) RETURNING id, name, slug, media_type",
        )
        .bind(category.name.as_str())
        .bind(category.slug.as_str())
        .bind(category.media_type.as_str())
        .fetch_one(&*self.pool)
        .await
        .map_err(map_sqlx)?;

        Category::try_from(row)
    }

    async fn find_by_id(&self, id: CategoryId) -> DomainResult<Option<Category>> {
        let row = sqlx::query_as::<_, CategoryRow>(
            "SELECT id, name, slug, media_type FROM categories WHERE id = ?",
        )
        .bind(id.0)
        .fetch_optional(&*self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(Category::try_from).transpose()
    }

    async fn find_by_slug(&self, slug: &CategorySlug) -> DomainResult<Option<Category>> {
        let row = sqlx::query_as::<_, CategoryRow>(
            "SELECT id, name, slug, media_type FROM categories WHERE slug = ?",
        )
        .bind(slug.as_str())
        .fetch_optional(&*self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(Category::try_from).transpose()
    }

    async fn list(&self) -> DomainResult<Vec<Category>> {
        let rows = sqlx::query_as::<_, CategoryRow>(
            "SELECT id, name, slug, media_type FROM categories ORDER BY name, id",
        )
        .fetch_all(&*self.pool)
        .await
        .map_err(map_sqlx)?;

        rows.into_iter().map(Category::try_from).collect()
    }

    async fn delete(&self, id: CategoryId) -> DomainResult<()> {
        let result = sqlx::query("DELETE FROM categories WHERE id = ?")
            .bind(id.0)
            .execute(&*self.pool)
            .await
            .map_err(map_sqlx)?;
        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound("category not found".into()));
        }
        Ok(())
    }
}
