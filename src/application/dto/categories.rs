use crate::domain::category::Category;
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct CategoryDto {
    pub id: i64,
    pub name: String,
    pub slug: String,
    pub media_type: &'static str,
    pub media_type_label: &'static str,
}

impl From<Category> for CategoryDto {
    fn from(category: Category) -> Self {
        Self {
            id: category.id.into(),
            name: category.name.as_str().to_string(),
            slug: category.slug.as_str().to_string(),
            media_type: category.media_type.as_str(),
            media_type_label: category.media_type.label(),
        }
    }
}
