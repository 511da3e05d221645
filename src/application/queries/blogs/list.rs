use super::BlogQueryService;
use crate::{
    application::{
        dto::{BlogPostDto, CursorPage},
        error::{ApplicationError, ApplicationResult},
    },
    domain::{
        blog::{BlogCategory, BlogListCursor},
        errors::DomainError,
    },
};

pub const DEFAULT_LIMIT: u32 = 20;
pub const MAX_LIMIT: u32 = 100;

/// Newest-first listing, optionally restricted to one category.
#[derive(Debug, Default)]
pub struct ListBlogsQuery {
    pub category: Option<String>,
    pub limit: u32,
    pub cursor: Option<String>,
}

impl BlogQueryService {
    pub async fn list_blogs(
        &self,
        query: ListBlogsQuery,
    ) -> ApplicationResult<CursorPage<BlogPostDto>> {
        let category = query
            .category
            .as_deref()
            .map(str::parse::<BlogCategory>)
            .transpose()
            .map_err(into_validation)?;
        let limit = normalize_limit(query.limit);
        let cursor = query
            .cursor
            .as_deref()
            .map(BlogListCursor::decode)
            .transpose()
            .map_err(into_validation)?;

        let (records, next_cursor) = self.read_repo.list_page(category, limit, cursor).await?;

        let items = records.into_iter().map(Into::into).collect();
        Ok(CursorPage::new(
            items,
            next_cursor.map(|cursor| cursor.encode()),
        ))
    }
}

fn normalize_limit(limit: u32) -> u32 {
    if limit == 0 {
        DEFAULT_LIMIT
    } else {
        limit.min(MAX_LIMIT)
    }
}

fn into_validation(err: DomainError) -> ApplicationError {
    match err {
        DomainError::Validation(msg) => ApplicationError::validation(msg),
        other => ApplicationError::from(other),
    }
}
