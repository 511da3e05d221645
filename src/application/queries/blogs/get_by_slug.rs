use super::BlogQueryService;
use crate::{
    application::{
        dto::BlogPostDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::blog::BlogSlug,
};

pub struct GetBlogBySlugQuery {
    pub slug: String,
}

impl BlogQueryService {
    pub async fn get_blog_by_slug(
        &self,
        query: GetBlogBySlugQuery,
    ) -> ApplicationResult<BlogPostDto> {
        let slug = BlogSlug::new(query.slug)?;
        self.read_repo
            .find_by_slug(&slug)
            .await?
            .map(Into::into)
            .ok_or_else(|| ApplicationError::not_found("blog post not found"))
    }
}
