use serde::Serialize;

use super::{ArticleDto, CategoryDto};

#[derive(Debug, Clone, Serialize)]
pub struct HomePage {
    pub featured: Option<ArticleDto>,
    pub recent: Vec<ArticleDto>,
    pub film_articles: Vec<ArticleDto>,
    pub tv_articles: Vec<ArticleDto>,
    pub categories: Vec<CategoryDto>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ArticleDetailPage {
    pub article: ArticleDto,
    pub related: Vec<ArticleDto>,
}

/// Listing plus the criteria it was built from, echoed back into the filter form.
#[derive(Debug, Clone, Serialize)]
pub struct ArticleListPage {
    pub articles: Vec<ArticleDto>,
    pub categories: Vec<CategoryDto>,
    pub q: String,
    pub selected_category: String,
    pub selected_type: String,
    pub selected_kind: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct ModerationPage {
    pub articles: Vec<ArticleDto>,
    pub categories: Vec<CategoryDto>,
    pub q: String,
    pub selected_status: String,
    pub selected_kind: String,
    pub selected_featured: String,
    pub selected_category: String,
}
