use super::{
    ArticleQueryService,
    criteria::{Criterion, parse_flag},
};
use crate::{
    application::{
        commands::articles::ensure_capability,
        dto::{AuthenticatedUser, ModerationPage},
        error::ApplicationResult,
    },
    domain::{
        article::{ArticleFilter, ArticleKind, ArticleOrder, ArticleStatus, SearchScope},
        category::CategorySlug,
    },
};

/// Query string of the moderation console.
#[derive(Debug, Clone, Default)]
pub struct ModerationListQuery {
    pub q: String,
    pub status: String,
    pub kind: String,
    pub featured: String,
    pub category: String,
}

impl ArticleQueryService {
    pub async fn moderation_list(
        &self,
        actor: &AuthenticatedUser,
        query: ModerationListQuery,
    ) -> ApplicationResult<ModerationPage> {
        ensure_capability(actor, "articles", "moderate")?;

        let status = Criterion::<ArticleStatus>::parse(&query.status);
        let kind = Criterion::<ArticleKind>::parse(&query.kind);
        let featured = Criterion::parse_with(&query.featured, parse_flag);
        let category = Criterion::parse_with(&query.category, |raw| CategorySlug::new(raw));

        let articles = if status.is_unsatisfiable()
            || kind.is_unsatisfiable()
            || featured.is_unsatisfiable()
            || category.is_unsatisfiable()
        {
            Vec::new()
        } else {
            let mut filter = ArticleFilter {
                order: ArticleOrder::Newest,
                ..ArticleFilter::default()
            }
            .with_search(&query.q, SearchScope::Moderation);
            if let Some(status) = status.into_option() {
                filter = filter.with_status(status);
            }
            if let Some(kind) = kind.into_option() {
                filter = filter.with_kind(kind);
            }
            if let Some(featured) = featured.into_option() {
                filter = filter.with_featured(featured);
            }
            if let Some(category) = category.into_option() {
                filter = filter.with_category(category);
            }
            self.read_repo.list(&filter).await?
        };

        Ok(ModerationPage {
            articles: articles.into_iter().map(Into::into).collect(),
            categories: self
                .category_repo
                .list()
                .await?
                .into_iter()
                .map(Into::into)
                .collect(),
            q: query.q.trim().to_string(),
            selected_status: query.status,
            selected_kind: query.kind,
            selected_featured: query.featured,
            selected_category: query.category,
        })
    }
}
