use crate::domain::errors::DomainError;

const CNT_BLOG_SLUG: &str = "blogs_slug_key";
const CNT_BLOG_CATEGORY_CHECK: &str = "blogs_category_check";
const CNT_BLOG_THUMBNAIL_TYPE_CHECK: &str = "blogs_thumbnail_type_check";

pub fn map_sqlx(err: sqlx::Error) -> DomainError {
    match &err {
        sqlx::Error::Database(db_err) => {
            if let Some(constraint) = db_err.constraint() {
                return match constraint {
                    CNT_BLOG_SLUG => DomainError::Conflict("slug already exists".into()),
                    CNT_BLOG_CATEGORY_CHECK => DomainError::Validation("Invalid category".into()),
                    CNT_BLOG_THUMBNAIL_TYPE_CHECK => DomainError::Validation(
                        "Thumbnail type must be 'file' or 'url'".into(),
                    ),
                    other => {
                        DomainError::Persistence(format!("database constraint violation: {other}"))
                    }
                };
            }

            if let Some(code) = db_err.code() {
                match code.as_ref() {
                    "23505" => {
                        return DomainError::Conflict("unique constraint violated".into());
                    }
                    "23514" => {
                        return DomainError::Validation("check constraint violated".into());
                    }
                    _ => {}
                }
            }

            DomainError::Persistence(db_err.message().to_string())
        }
        _ => DomainError::Persistence(err.to_string()),
    }
}
