use crate::domain::blog::{BlogCategory, BlogPost, ThumbnailType};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A blog post as handed to consumers, with its thumbnail URL resolved.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BlogPostDto {
    pub id: i64,
    pub title: String,
    pub slug: String,
    pub description: String,
    pub content: String,
    pub category: BlogCategory,
    pub thumbnail: String,
    pub thumbnail_type: ThumbnailType,
    pub thumbnail_url: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<BlogPost> for BlogPostDto {
    fn from(post: BlogPost) -> Self {
        let thumbnail_url = post.thumbnail_url();
        Self {
            id: post.id.into(),
            title: post.title.into_inner(),
            slug: post.slug.into_inner(),
            description: post.description.into_inner(),
            content: post.content.into_inner(),
            category: post.category,
            thumbnail: post.thumbnail.into_inner(),
            thumbnail_type: post.thumbnail_type,
            thumbnail_url,
            created_at: post.created_at,
            updated_at: post.updated_at,
        }
    }
}
