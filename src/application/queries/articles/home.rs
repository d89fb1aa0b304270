use super::ArticleQueryService;
use crate::{
    application::{
        dto::{ArticleDto, HomePage},
        error::ApplicationResult,
    },
    domain::{
        article::{ArticleFilter, ArticleKind},
        category::MediaType,
    },
};

pub const RECENT_LIMIT: u32 = 8;
pub const FILM_TV_LIMIT: u32 = 4;

fn to_dtos<T: Into<ArticleDto>>(items: Vec<T>) -> Vec<ArticleDto> {
    items.into_iter().map(Into::into).collect()
}

impl ArticleQueryService {
    pub async fn home(&self) -> ApplicationResult<HomePage> {
        let featured = self
            .read_repo
            .list(&ArticleFilter::published().with_featured(true).limit(1))
            .await?
            .into_iter()
            .next()
            .map(ArticleDto::from);

        let recent = self
            .read_repo
            .list(
                &ArticleFilter::published()
                    .with_featured(false)
                    .limit(RECENT_LIMIT),
            )
            .await?;

        let reviews_for = |media_type| {
            ArticleFilter::published()
                .with_kind(ArticleKind::Review)
                .with_media_type(media_type)
                .limit(FILM_TV_LIMIT)
        };
        let film = self.read_repo.list(&reviews_for(MediaType::Film)).await?;
        let tv = self.read_repo.list(&reviews_for(MediaType::Tv)).await?;

        Ok(HomePage {
            featured,
            recent: to_dtos(recent),
            film_articles: to_dtos(film),
            tv_articles: to_dtos(tv),
            categories: self
                .category_repo
                .list()
                .await?
                .into_iter()
                .map(Into::into)
                .collect(),
        })
    }
}
