// src/domain/blog/thumbnail.rs
use crate::domain::blog::value_objects::ThumbnailType;

pub const UPLOADS_PREFIX: &str = "/uploads/";

/// Returns the URL a client should use to fetch a post's thumbnail.
///
/// Uploaded files are served from [`UPLOADS_PREFIX`]; the stored value is
/// appended as-is. External thumbnails are already absolute URLs.
pub fn resolve_thumbnail_url(thumbnail: &str, thumbnail_type: ThumbnailType) -> String {
    match thumbnail_type {
        ThumbnailType::File => format!("{UPLOADS_PREFIX}{thumbnail}"),
        ThumbnailType::Url => thumbnail.to_string(),
    }
}
