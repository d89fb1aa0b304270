use crate::domain::article::services::SlugIndex;
use crate::domain::category::entity::{Category, NewCategory};
use crate::domain::category::value_objects::{CategoryId, CategorySlug};
use crate::domain::errors::DomainResult;
use async_trait::async_trait;

#[async_trait]
pub trait CategoryRepository: SlugIndex {
    async fn insert(&self, category: NewCategory) -> DomainResult<Category>;
    async fn find_by_id(&self, id: CategoryId) -> DomainResult<Option<Category>>;
    async fn find_by_slug(&self, slug: &CategorySlug) -> DomainResult<Option<Category>>;
    /// All categories ordered by name.
    async fn list(&self) -> DomainResult<Vec<Category>>;
    /// Articles in the category keep existing with no category.
    async fn delete(&self, id: CategoryId) -> DomainResult<()>;
}
