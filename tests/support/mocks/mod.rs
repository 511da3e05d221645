// tests/support/mocks/mod.rs
pub mod blog_repo;
pub mod util;

pub use blog_repo::InMemoryBlogRepo;
pub use util::{SequenceIds, StepClock, fixed_now};
