use crate::domain::article::entity::Article;
use crate::domain::user::value_objects::UserId;

/// Why an author may not edit an article.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditRefusal {
    NotOwner,
    AlreadyPublished,
}

pub struct CanEditArticleSpec<'a> {
    article: &'a Article,
    user_id: UserId,
}

impl<'a> CanEditArticleSpec<'a> {
    pub fn new(article: &'a Article, user_id: UserId) -> Self {
        Self { article, user_id }
    }

    pub fn check(&self) -> Result<(), EditRefusal> {
        if !self.article.is_owned_by(self.user_id) {
            return Err(EditRefusal::NotOwner);
        }
        if !self.article.status.allows_author_edit() {
            return Err(EditRefusal::AlreadyPublished);
        }
        Ok(())
    }
}
