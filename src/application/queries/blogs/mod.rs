mod get_by_id;
mod get_by_slug;
mod list;
mod service;

pub use get_by_id::GetBlogByIdQuery;
pub use get_by_slug::GetBlogBySlugQuery;
pub use list::{DEFAULT_LIMIT, ListBlogsQuery, MAX_LIMIT};
pub use service::BlogQueryService;
