mod criteria;
mod dashboard;
mod detail;
mod home;
mod list;
mod moderation;
mod service;

pub use detail::RELATED_LIMIT;
pub use home::{FILM_TV_LIMIT, RECENT_LIMIT};
pub use list::ListPublishedQuery;
pub use moderation::ModerationListQuery;
pub use service::ArticleQueryService;
