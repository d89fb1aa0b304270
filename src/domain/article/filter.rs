// src/domain/article/filter.rs
use crate::domain::article::status::ArticleStatus;
use crate::domain::article::value_objects::{ArticleId, ArticleKind};
use crate::domain::category::{CategorySlug, MediaType};
use crate::domain::user::UserId;

/// Fields a free-text query is matched against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SearchScope {
    /// Title, body, subject title and author username.
    #[default]
    Public,
    /// Title, author username and subject title.
    Moderation,
}

/// Ordering applied to a listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ArticleOrder {
    /// Most recently published first, then most recently created.
    #[default]
    Publication,
    /// Most recently created first.
    Newest,
}

/// Conjunction of optional criteria. An unset criterion does not filter.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArticleFilter {
    pub status: Option<ArticleStatus>,
    pub author: Option<UserId>,
    pub search: Option<String>,
    pub search_scope: SearchScope,
    pub category: Option<CategorySlug>,
    pub media_type: Option<MediaType>,
    pub kind: Option<ArticleKind>,
    pub featured: Option<bool>,
    pub exclude: Option<ArticleId>,
    pub order: ArticleOrder,
    pub limit: Option<u32>,
}

impl ArticleFilter {
    /// Everything readers are allowed to see.
    pub fn published() -> Self {
        Self::default().with_status(ArticleStatus::Published)
    }

    /// Every article an author owns, newest first, in any state.
    pub fn owned_by(author: UserId) -> Self {
        Self {
            author: Some(author),
            order: ArticleOrder::Newest,
            ..Self::default()
        }
    }

    pub fn with_status(mut self, status: ArticleStatus) -> Self {
        self.status = Some(status);
        self
    }

    /// Blank queries are ignored.
    pub fn with_search(mut self, query: &str, scope: SearchScope) -> Self {
        let trimmed = query.trim();
        self.search = (!trimmed.is_empty()).then(|| trimmed.to_string());
        self.search_scope = scope;
        self
    }

    pub fn with_category(mut self, category: CategorySlug) -> Self {
        self.category = Some(category);
        self
    }

    pub fn with_media_type(mut self, media_type: MediaType) -> Self {
        self.media_type = Some(media_type);
        self
    }

    pub fn with_kind(mut self, kind: ArticleKind) -> Self {
        self.kind = Some(kind);
        self
    }

    pub fn with_featured(mut self, featured: bool) -> Self {
        self.featured = Some(featured);
        self
    }

    pub fn excluding(mut self, id: ArticleId) -> Self {
        self.exclude = Some(id);
        self
    }

    pub fn limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    /// The `%…%` LIKE pattern for the folded search term with wildcards escaped by `\`.
    pub fn search_pattern(&self) -> Option<String> {
        self.search.as_deref().map(|term| {
            let term = fold_case(term);
            let mut escaped = String::with_capacity(term.len() + 2);
            escaped.push('%');
            for c in term.chars() {
                if matches!(c, '%' | '_' | '\\') {
                    escaped.push('\\');
                }
                escaped.push(c);
            }
            escaped.push('%');
            escaped
        })
    }
}

/// Folding applied to searchable text when stored and to search terms when matched.
/// SQLite's own `LIKE` only folds ASCII.
pub fn fold_case(text: &str) -> String {
    text.to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_search_is_a_no_op() {
        let filter = ArticleFilter::published().with_search("   ", SearchScope::Public);
        assert_eq!(filter, ArticleFilter::published());
    }

    #[test]
    fn search_pattern_escapes_wildcards() {
        let filter = ArticleFilter::published().with_search("100%_a\\b", SearchScope::Public);
        assert_eq!(filter.search_pattern().as_deref(), Some("%100\\%\\_a\\\\b%"));
    }

    #[test]
    fn search_pattern_folds_non_ascii_case() {
        let filter = ArticleFilter::published().with_search("ÉTÉ Indien", SearchScope::Public);
        assert_eq!(filter.search_pattern().as_deref(), Some("%été indien%"));
        assert_eq!(fold_case("Amélie"), "amélie");
    }

    #[test]
    fn owned_by_orders_newest_first_without_status() {
        let filter = ArticleFilter::owned_by(UserId::new(3).unwrap());
        assert_eq!(filter.order, ArticleOrder::Newest);
        assert!(filter.status.is_none());
    }

    #[test]
    fn builders_compose() {
        let filter = ArticleFilter::published()
            .with_kind(ArticleKind::Review)
            .with_media_type(MediaType::Film)
            .limit(4);
        assert_eq!(filter.status, Some(ArticleStatus::Published));
        assert_eq!(filter.kind, Some(ArticleKind::Review));
        assert_eq!(filter.media_type, Some(MediaType::Film));
        assert_eq!(filter.limit, Some(4));
    }
}
