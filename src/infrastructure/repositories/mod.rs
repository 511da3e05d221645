mod error;
mod postgres_blog;

pub use error::map_sqlx;
pub use postgres_blog::{PostgresBlogPostReadRepository, PostgresBlogPostWriteRepository};
