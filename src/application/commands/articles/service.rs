// src/application/commands/articles/service.rs
use std::sync::Arc;

use crate::{
    application::ports::{storage::MediaStorage, time::Clock},
    domain::{
        article::{ArticleReadRepository, ArticleWriteRepository, services::SlugAssigner},
        category::CategoryRepository,
    },
};

pub struct ArticleCommandService {
    pub(super) write_repo: Arc<dyn ArticleWriteRepository>,
    pub(super) read_repo: Arc<dyn ArticleReadRepository>,
    pub(super) category_repo: Arc<dyn CategoryRepository>,
    pub(super) slugs: Arc<SlugAssigner>,
    pub(super) media: Arc<dyn MediaStorage>,
    pub(super) clock: Arc<dyn Clock>,
}

impl ArticleCommandService {
    pub fn new(
        write_repo: Arc<dyn ArticleWriteRepository>,
        read_repo: Arc<dyn ArticleReadRepository>,
        category_repo: Arc<dyn CategoryRepository>,
        slugs: Arc<SlugAssigner>,
        media: Arc<dyn MediaStorage>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            write_repo,
            read_repo,
            category_repo,
            slugs,
            media,
            clock,
        }
    }
}
