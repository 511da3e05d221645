pub mod cursor;
pub mod entity;
pub mod repository;
pub mod services;
pub mod thumbnail;
pub mod validation;
pub mod value_objects;

pub use cursor::BlogListCursor;
pub use entity::{BlogPost, BlogPostUpdate, NewBlogPost};
pub use repository::{BlogPostReadRepository, BlogPostWriteRepository, BlogSlugLookup};
pub use thumbnail::{UPLOADS_PREFIX, resolve_thumbnail_url};
pub use validation::{BlogPostDraft, BlogPostPatch, ValidatedBlogPost};
pub use value_objects::{
    BlogCategory, BlogContent, BlogDescription, BlogId, BlogSlug, BlogTitle, Thumbnail,
    ThumbnailType,
};
