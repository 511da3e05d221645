// src/application/commands/blogs/create.rs
use super::BlogCommandService;
use crate::{
    application::{
        dto::BlogPostDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::{
        blog::{BlogPostDraft, BlogSlug, NewBlogPost},
        errors::DomainError,
    },
};
use tracing::{info, warn};

pub struct CreateBlogCommand {
    pub title: String,
    pub slug: Option<String>,
    pub description: String,
    pub content: String,
    pub category: String,
    pub thumbnail: String,
    pub thumbnail_type: Option<String>,
}

impl CreateBlogCommand {
    pub fn builder() -> CreateBlogCommandBuilder {
        CreateBlogCommandBuilder::default()
    }

    fn into_draft(self) -> BlogPostDraft {
        BlogPostDraft {
            title: Some(self.title),
            slug: self.slug,
            description: Some(self.description),
            content: Some(self.content),
            category: Some(self.category),
            thumbnail: Some(self.thumbnail),
            thumbnail_type: self.thumbnail_type,
        }
    }
}

/// Missing fields are left empty so validation can report all of them at once.
#[derive(Default)]
pub struct CreateBlogCommandBuilder {
    title: Option<String>,
    slug: Option<String>,
    description: Option<String>,
    content: Option<String>,
    category: Option<String>,
    thumbnail: Option<String>,
    thumbnail_type: Option<String>,
}

impl CreateBlogCommandBuilder {
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn slug(mut self, slug: impl Into<String>) -> Self {
        self.slug = Some(slug.into());
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.content = Some(content.into());
        self
    }

    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn thumbnail(mut self, thumbnail: impl Into<String>) -> Self {
        self.thumbnail = Some(thumbnail.into());
        self
    }

    pub fn thumbnail_type(mut self, thumbnail_type: impl Into<String>) -> Self {
        self.thumbnail_type = Some(thumbnail_type.into());
        self
    }

    pub fn build(self) -> CreateBlogCommand {
        CreateBlogCommand {
            title: self.title.unwrap_or_default(),
            slug: self.slug,
            description: self.description.unwrap_or_default(),
            content: self.content.unwrap_or_default(),
            category: self.category.unwrap_or_default(),
            thumbnail: self.thumbnail.unwrap_or_default(),
            thumbnail_type: self.thumbnail_type,
        }
    }
}

impl BlogCommandService {
    /// Validates the command, assigns a slug, and inserts the post.
    ///
    /// When the slug was generated here and the insert hits the unique
    /// constraint, a fresh slug is assigned and the insert retried. A
    /// caller-supplied slug that collides is returned as a conflict.
    pub async fn create_blog(&self, command: CreateBlogCommand) -> ApplicationResult<BlogPostDto> {
        let validated = command.into_draft().validate()?;
        let supplied_slug = validated.slug.as_ref().map(BlogSlug::as_str);
        let now = self.clock.now();
        let mut retries = 0u32;

        loop {
            let slug = self
                .slug_service
                .assign_slug_if_absent(Some(validated.title.as_str()), supplied_slug)
                .await?;

            let new_post = NewBlogPost {
                title: validated.title.clone(),
                slug,
                description: validated.description.clone(),
                content: validated.content.clone(),
                category: validated.category,
                thumbnail: validated.thumbnail.clone(),
                thumbnail_type: validated.thumbnail_type,
                created_at: now,
                updated_at: now,
            };

            match self.write_repo.insert(new_post).await {
                Ok(created) => {
                    info!(id = %created.id, slug = %created.slug, "blog post created");
                    return Ok(created.into());
                }
                Err(DomainError::Conflict(msg))
                    if supplied_slug.is_none() && retries < self.conflict_retries =>
                {
                    retries += 1;
                    warn!(retries, reason = %msg, "generated slug taken at insert, reassigning");
                }
                Err(DomainError::Conflict(msg)) => return Err(ApplicationError::conflict(msg)),
                Err(other) => return Err(other.into()),
            }
        }
    }
}
