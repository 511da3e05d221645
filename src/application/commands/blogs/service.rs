// src/application/commands/blogs/service.rs
use std::sync::Arc;

use crate::{
    application::ports::time::Clock,
    domain::blog::{BlogPostReadRepository, BlogPostWriteRepository, services::BlogSlugService},
};

/// Extra insert attempts made when a generated slug loses a race at commit time.
pub const DEFAULT_CONFLICT_RETRIES: u32 = 3;

pub struct BlogCommandService {
    pub(super) write_repo: Arc<dyn BlogPostWriteRepository>,
    pub(super) read_repo: Arc<dyn BlogPostReadRepository>,
    pub(super) slug_service: Arc<BlogSlugService>,
    pub(super) clock: Arc<dyn Clock>,
    pub(super) conflict_retries: u32,
}

impl BlogCommandService {
    pub fn new(
        write_repo: Arc<dyn BlogPostWriteRepository>,
        read_repo: Arc<dyn BlogPostReadRepository>,
        slug_service: Arc<BlogSlugService>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            write_repo,
            read_repo,
            slug_service,
            clock,
            conflict_retries: DEFAULT_CONFLICT_RETRIES,
        }
    }

    pub fn with_conflict_retries(mut self, retries: u32) -> Self {
        self.conflict_retries = retries;
        self
    }
}
