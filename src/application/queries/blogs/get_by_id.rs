use super::BlogQueryService;
use crate::{
    application::{
        dto::BlogPostDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::blog::BlogId,
};

pub struct GetBlogByIdQuery {
    pub id: i64,
}

impl BlogQueryService {
    pub async fn get_blog_by_id(&self, query: GetBlogByIdQuery) -> ApplicationResult<BlogPostDto> {
        let id = BlogId::new(query.id)?;
        self.read_repo
            .find_by_id(id)
            .await?
            .map(Into::into)
            .ok_or_else(|| ApplicationError::not_found("blog post not found"))
    }
}
