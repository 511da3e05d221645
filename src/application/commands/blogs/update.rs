// src/application/commands/blogs/update.rs
use super::BlogCommandService;
use crate::{
    application::{
        dto::BlogPostDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::{
        blog::{BlogId, BlogPostPatch},
        errors::DomainError,
    },
};
use tracing::info;

/// Partial update. The slug only changes when one is given explicitly; a
/// new title never regenerates it.
#[derive(Default)]
pub struct UpdateBlogCommand {
    pub id: i64,
    pub title: Option<String>,
    pub slug: Option<String>,
    pub description: Option<String>,
    pub content: Option<String>,
    pub category: Option<String>,
    pub thumbnail: Option<String>,
    pub thumbnail_type: Option<String>,
}

impl BlogCommandService {
    pub async fn update_blog(&self, command: UpdateBlogCommand) -> ApplicationResult<BlogPostDto> {
        let id = BlogId::new(command.id)?;
        let post = self
            .read_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("blog post not found"))?;

        let UpdateBlogCommand {
            id: _,
            title,
            slug,
            description,
            content,
            category,
            thumbnail,
            thumbnail_type,
        } = command;
        let patch = BlogPostPatch {
            title,
            slug,
            description,
            content,
            category,
            thumbnail,
            thumbnail_type,
        };

        if patch.is_empty() {
            return Ok(post.into());
        }

        let update = patch.validate(id, self.clock.now())?;

        match self.write_repo.update(update).await {
            Ok(updated) => {
                info!(id = %updated.id, slug = %updated.slug, "blog post updated");
                Ok(updated.into())
            }
            Err(DomainError::Conflict(msg)) => Err(ApplicationError::conflict(msg)),
            Err(DomainError::NotFound(_)) => Err(ApplicationError::not_found("blog post not found")),
            Err(other) => Err(other.into()),
        }
    }
}
