use crate::domain::category::value_objects::{CategoryId, CategoryName, CategorySlug, MediaType};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    pub id: CategoryId,
    pub name: CategoryName,
    pub slug: CategorySlug,
    pub media_type: MediaType,
}

#[derive(Debug, Clone)]
pub struct NewCategory {
    pub name: CategoryName,
    pub slug: CategorySlug,
    pub media_type: MediaType,
}
