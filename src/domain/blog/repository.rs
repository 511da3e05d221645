// src/domain/blog/repository.rs
use crate::domain::blog::cursor::BlogListCursor;
use crate::domain::blog::entity::{BlogPost, BlogPostUpdate, NewBlogPost};
use crate::domain::blog::value_objects::{BlogCategory, BlogId, BlogSlug};
use crate::domain::errors::DomainResult;
use async_trait::async_trait;

/// Exact-match existence check used by the slug service before insertion.
#[async_trait]
pub trait BlogSlugLookup: Send + Sync {
    async fn slug_exists(&self, slug: &str) -> DomainResult<bool>;
}

/// Storage must enforce slug uniqueness itself and report a violation as
/// `DomainError::Conflict`.
#[async_trait]
pub trait BlogPostWriteRepository: Send + Sync {
    async fn insert(&self, post: NewBlogPost) -> DomainResult<BlogPost>;
    async fn update(&self, update: BlogPostUpdate) -> DomainResult<BlogPost>;
    async fn delete(&self, id: BlogId) -> DomainResult<()>;
}

#[async_trait]
pub trait BlogPostReadRepository: Send + Sync {
    async fn find_by_id(&self, id: BlogId) -> DomainResult<Option<BlogPost>>;
    async fn find_by_slug(&self, slug: &BlogSlug) -> DomainResult<Option<BlogPost>>;
    async fn list_page(
        &self,
        category: Option<BlogCategory>,
        limit: u32,
        cursor: Option<BlogListCursor>,
    ) -> DomainResult<(Vec<BlogPost>, Option<BlogListCursor>)>;
}
