// tests/support/helpers.rs
use std::sync::Arc;

use blog_core::application::commands::blogs::CreateBlogCommand;
use blog_core::application::services::{ApplicationServices, BlogServiceOptions};
use blog_core::infrastructure::util::AsciiSlugGenerator;

use super::mocks::{InMemoryBlogRepo, SequenceIds, StepClock};

pub fn build_services(repo: Arc<InMemoryBlogRepo>) -> ApplicationServices {
    build_services_with(repo, BlogServiceOptions::default())
}

pub fn build_services_with(
    repo: Arc<InMemoryBlogRepo>,
    options: BlogServiceOptions,
) -> ApplicationServices {
    blog_core::telemetry::init_tracing();

    ApplicationServices::new(
        repo.clone(),
        repo.clone(),
        repo,
        Arc::new(StepClock::default()),
        Arc::new(AsciiSlugGenerator),
        Arc::new(SequenceIds::default()),
        options,
    )
}

/// A create command that passes validation; tweak fields per test.
pub fn create_command(title: &str) -> CreateBlogCommand {
    CreateBlogCommand::builder()
        .title(title)
        .description("A short summary")
        .content("The full article body.")
        .category("Strategy")
        .thumbnail("cover.png")
        .build()
}
