use super::BlogCommandService;
use crate::{
    application::error::{ApplicationError, ApplicationResult},
    domain::{blog::BlogId, errors::DomainError},
};
use tracing::info;

pub struct DeleteBlogCommand {
    pub id: i64,
}

impl BlogCommandService {
    pub async fn delete_blog(&self, command: DeleteBlogCommand) -> ApplicationResult<()> {
        let id = BlogId::new(command.id)?;
        match self.write_repo.delete(id).await {
            Ok(()) => {
                info!(%id, "blog post deleted");
                Ok(())
            }
            Err(DomainError::NotFound(_)) => Err(ApplicationError::not_found("blog post not found")),
            Err(other) => Err(other.into()),
        }
    }
}
