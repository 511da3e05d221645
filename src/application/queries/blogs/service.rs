use std::sync::Arc;

use crate::domain::blog::BlogPostReadRepository;

pub struct BlogQueryService {
    pub(super) read_repo: Arc<dyn BlogPostReadRepository>,
}

impl BlogQueryService {
    pub fn new(read_repo: Arc<dyn BlogPostReadRepository>) -> Self {
        Self { read_repo }
    }
}
