pub mod entity;
pub mod filter;
pub mod repository;
pub mod services;
pub mod specifications;
pub mod status;
pub mod value_objects;

pub use entity::{Article, ArticleContent, ArticleView, NewArticle};
pub use filter::{ArticleFilter, ArticleOrder, SearchScope, fold_case};
pub use repository::{ArticleReadRepository, ArticleWriteRepository};
pub use status::{ArticleStatus, ModerationAction};
pub use value_objects::{
    ArticleBody, ArticleExcerpt, ArticleId, ArticleKind, ArticleSlug, ArticleTitle, Cover,
    CoverUrl, Rating, Subject,
};
