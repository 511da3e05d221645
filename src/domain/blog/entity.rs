// src/domain/blog/entity.rs
use crate::domain::blog::thumbnail::resolve_thumbnail_url;
use crate::domain::blog::value_objects::{
    BlogCategory, BlogContent, BlogDescription, BlogId, BlogSlug, BlogTitle, Thumbnail,
    ThumbnailType,
};
use chrono::{DateTime, Utc};

#[derive(Debug, Clone)]
pub struct BlogPost {
    pub id: BlogId,
    pub title: BlogTitle,
    pub slug: BlogSlug,
    pub description: BlogDescription,
    pub content: BlogContent,
    pub category: BlogCategory,
    pub thumbnail: Thumbnail,
    pub thumbnail_type: ThumbnailType,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl BlogPost {
    pub fn thumbnail_url(&self) -> String {
        resolve_thumbnail_url(self.thumbnail.as_str(), self.thumbnail_type)
    }
}

/// A post ready for insertion: its slug has already been assigned.
#[derive(Debug, Clone)]
pub struct NewBlogPost {
    pub title: BlogTitle,
    pub slug: BlogSlug,
    pub description: BlogDescription,
    pub content: BlogContent,
    pub category: BlogCategory,
    pub thumbnail: Thumbnail,
    pub thumbnail_type: ThumbnailType,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct BlogPostUpdate {
    pub id: BlogId,
    pub title: Option<BlogTitle>,
    pub slug: Option<BlogSlug>,
    pub description: Option<BlogDescription>,
    pub content: Option<BlogContent>,
    pub category: Option<BlogCategory>,
    pub thumbnail: Option<Thumbnail>,
    pub thumbnail_type: Option<ThumbnailType>,
    pub updated_at: DateTime<Utc>,
}

impl BlogPostUpdate {
    pub fn new(id: BlogId, updated_at: DateTime<Utc>) -> Self {
        Self {
            id,
            title: None,
            slug: None,
            description: None,
            content: None,
            category: None,
            thumbnail: None,
            thumbnail_type: None,
            updated_at,
        }
    }

    pub fn with_title(mut self, title: BlogTitle) -> Self {
        self.title = Some(title);
        self
    }

    pub fn with_slug(mut self, slug: BlogSlug) -> Self {
        self.slug = Some(slug);
        self
    }

    pub fn with_description(mut self, description: BlogDescription) -> Self {
        self.description = Some(description);
        self
    }

    pub fn with_content(mut self, content: BlogContent) -> Self {
        self.content = Some(content);
        self
    }

    pub fn with_category(mut self, category: BlogCategory) -> Self {
        self.category = Some(category);
        self
    }

    pub fn with_thumbnail(mut self, thumbnail: Thumbnail) -> Self {
        self.thumbnail = Some(thumbnail);
        self
    }

    pub fn with_thumbnail_type(mut self, thumbnail_type: ThumbnailType) -> Self {
        self.thumbnail_type = Some(thumbnail_type);
        self
    }

    /// Applies the changed fields to an in-memory copy of the post.
    pub fn apply_to(&self, post: &mut BlogPost) {
        if let Some(title) = &self.title {
            post.title = title.clone();
        }
        if let Some(slug) = &self.slug {
            post.slug = slug.clone();
        }
        if let Some(description) = &self.description {
            post.description = description.clone();
        }
        if let Some(content) = &self.content {
            post.content = content.clone();
        }
        if let Some(category) = self.category {
            post.category = category;
        }
        if let Some(thumbnail) = &self.thumbnail {
            post.thumbnail = thumbnail.clone();
        }
        if let Some(thumbnail_type) = self.thumbnail_type {
            post.thumbnail_type = thumbnail_type;
        }
        post.updated_at = self.updated_at;
    }
}
