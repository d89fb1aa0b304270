use std::sync::Arc;

use crate::domain::{
    article::{ArticleReadRepository, ArticleWriteRepository},
    category::CategoryRepository,
};

pub struct ArticleQueryService {
    pub(super) read_repo: Arc<dyn ArticleReadRepository>,
    /// Only used for the view counter.
    pub(super) write_repo: Arc<dyn ArticleWriteRepository>,
    pub(super) category_repo: Arc<dyn CategoryRepository>,
}

impl ArticleQueryService {
    pub fn new(
        read_repo: Arc<dyn ArticleReadRepository>,
        write_repo: Arc<dyn ArticleWriteRepository>,
        category_repo: Arc<dyn CategoryRepository>,
    ) -> Self {
        Self {
            read_repo,
            write_repo,
            category_repo,
        }
    }
}
