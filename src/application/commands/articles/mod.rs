// src/application/commands/articles/mod.rs
mod capability;
mod edit;
mod input;
mod moderate;
mod service;
mod submit;

pub(crate) use capability::ensure_capability;
pub(crate) use input::clean_image;
pub use edit::{EditArticleCommand, PUBLISHED_EDIT_REFUSAL};
pub use input::ArticleInput;
pub use moderate::{ModerateArticlesCommand, ModerationOutcome, SetFeaturedCommand};
pub use service::ArticleCommandService;
pub use submit::SubmitArticleCommand;
