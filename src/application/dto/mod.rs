pub mod blogs;
pub mod pagination;

pub use blogs::BlogPostDto;
pub use pagination::CursorPage;
