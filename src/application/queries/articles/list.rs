use super::{ArticleQueryService, criteria::Criterion};
use crate::{
    application::{dto::ArticleListPage, error::ApplicationResult},
    domain::{
        article::{ArticleFilter, ArticleKind, SearchScope},
        category::{CategorySlug, MediaType},
    },
};

/// Query string of the public article list.
#[derive(Debug, Clone, Default)]
pub struct ListPublishedQuery {
    pub q: String,
    pub category: String,
    /// Media type of the article's category.
    pub media_type: String,
    pub kind: String,
}

impl ArticleQueryService {
    pub async fn list_published(
        &self,
        query: ListPublishedQuery,
    ) -> ApplicationResult<ArticleListPage> {
        let category = Criterion::parse_with(&query.category, |raw| CategorySlug::new(raw));
        let media_type = Criterion::<MediaType>::parse(&query.media_type);
        let kind = Criterion::<ArticleKind>::parse(&query.kind);

        let articles = if category.is_unsatisfiable()
            || media_type.is_unsatisfiable()
            || kind.is_unsatisfiable()
        {
            Vec::new()
        } else {
            let mut filter = ArticleFilter::published().with_search(&query.q, SearchScope::Public);
            if let Some(category) = category.into_option() {
                filter = filter.with_category(category);
            }
            if let Some(media_type) = media_type.into_option() {
                filter = filter.with_media_type(media_type);
            }
            if let Some(kind) = kind.into_option() {
                filter = filter.with_kind(kind);
            }
            self.read_repo.list(&filter).await?
        };

        Ok(ArticleListPage {
            articles: articles.into_iter().map(Into::into).collect(),
            categories: self
                .category_repo
                .list()
                .await?
                .into_iter()
                .map(Into::into)
                .collect(),
            q: query.q.trim().to_string(),
            selected_category: query.category,
            selected_type: query.media_type,
            selected_kind: query.kind,
        })
    }
}
