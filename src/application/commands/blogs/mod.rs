// src/application/commands/blogs/mod.rs
mod create;
mod delete;
mod service;
mod update;

pub use create::{CreateBlogCommand, CreateBlogCommandBuilder};
pub use delete::DeleteBlogCommand;
pub use service::{BlogCommandService, DEFAULT_CONFLICT_RETRIES};
pub use update::UpdateBlogCommand;
