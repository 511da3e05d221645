// src/application/services/mod.rs
use std::sync::Arc;

use crate::{
    application::{
        commands::blogs::{BlogCommandService, DEFAULT_CONFLICT_RETRIES},
        ports::{
            time::Clock,
            util::{IdGenerator, SlugGenerator},
        },
        queries::blogs::BlogQueryService,
    },
    domain::blog::{
        BlogPostReadRepository, BlogPostWriteRepository, BlogSlugLookup,
        services::{BlogSlugService, DEFAULT_MAX_SLUG_ATTEMPTS},
    },
};

/// Tunables for slug assignment and the create workflow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlogServiceOptions {
    pub max_slug_attempts: u32,
    pub conflict_retries: u32,
}

impl Default for BlogServiceOptions {
    fn default() -> Self {
        Self {
            max_slug_attempts: DEFAULT_MAX_SLUG_ATTEMPTS,
            conflict_retries: DEFAULT_CONFLICT_RETRIES,
        }
    }
}

pub struct ApplicationServices {
    pub blog_commands: Arc<BlogCommandService>,
    pub blog_queries: Arc<BlogQueryService>,
}

impl ApplicationServices {
    pub fn new(
        write_repo: Arc<dyn BlogPostWriteRepository>,
        read_repo: Arc<dyn BlogPostReadRepository>,
        slug_lookup: Arc<dyn BlogSlugLookup>,
        clock: Arc<dyn Clock>,
        slugger: Arc<dyn SlugGenerator>,
        id_generator: Arc<dyn IdGenerator>,
        options: BlogServiceOptions,
    ) -> Self {
        let slug_service = Arc::new(
            BlogSlugService::new(slug_lookup, slugger, id_generator)
                .with_max_attempts(options.max_slug_attempts),
        );

        let blog_commands = Arc::new(
            BlogCommandService::new(
                write_repo,
                Arc::clone(&read_repo),
                slug_service,
                clock,
            )
            .with_conflict_retries(options.conflict_retries),
        );

        let blog_queries = Arc::new(BlogQueryService::new(read_repo));

        Self {
            blog_commands,
            blog_queries,
        }
    }
}
