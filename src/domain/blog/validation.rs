// src/domain/blog/validation.rs
//! Field validation for create and update input.
//!
//! Every offending field is reported at once so callers can show all the
//! problems with a submission in one round trip.
use crate::domain::blog::entity::BlogPostUpdate;
use crate::domain::blog::value_objects::{
    BlogCategory, BlogContent, BlogDescription, BlogId, BlogSlug, BlogTitle, Thumbnail,
    ThumbnailType,
};
use crate::domain::errors::{DomainError, DomainResult, FieldViolation};
use chrono::{DateTime, Utc};

/// Raw input for a new post, before any field has been checked.
#[derive(Debug, Clone, Default)]
pub struct BlogPostDraft {
    pub title: Option<String>,
    pub slug: Option<String>,
    pub description: Option<String>,
    pub content: Option<String>,
    pub category: Option<String>,
    pub thumbnail: Option<String>,
    pub thumbnail_type: Option<String>,
}

/// A draft whose fields all passed validation. The slug stays optional until
/// the slug service assigns one.
#[derive(Debug, Clone)]
pub struct ValidatedBlogPost {
    pub title: BlogTitle,
    pub slug: Option<BlogSlug>,
    pub description: BlogDescription,
    pub content: BlogContent,
    pub category: BlogCategory,
    pub thumbnail: Thumbnail,
    pub thumbnail_type: ThumbnailType,
}

/// Raw partial update. `None` leaves the stored value untouched.
#[derive(Debug, Clone, Default)]
pub struct BlogPostPatch {
    pub title: Option<String>,
    pub slug: Option<String>,
    pub description: Option<String>,
    pub content: Option<String>,
    pub category: Option<String>,
    pub thumbnail: Option<String>,
    pub thumbnail_type: Option<String>,
}

#[derive(Default)]
struct Violations(Vec<FieldViolation>);

impl Violations {
    fn check<T>(&mut self, field: &'static str, result: DomainResult<T>) -> Option<T> {
        match result {
            Ok(value) => Some(value),
            Err(DomainError::Validation(message)) => {
                self.0.push(FieldViolation::new(field, message));
                None
            }
            Err(other) => {
                self.0.push(FieldViolation::new(field, other.to_string()));
                None
            }
        }
    }

    fn require<T>(
        &mut self,
        field: &'static str,
        value: Option<String>,
        missing: &str,
        parse: impl FnOnce(String) -> DomainResult<T>,
    ) -> Option<T> {
        match value {
            Some(value) => self.check(field, parse(value)),
            None => {
                self.0.push(FieldViolation::new(field, missing));
                None
            }
        }
    }

    fn optional<T>(
        &mut self,
        field: &'static str,
        value: Option<String>,
        parse: impl FnOnce(String) -> DomainResult<T>,
    ) -> Option<Option<T>> {
        match value {
            Some(value) => self.check(field, parse(value)).map(Some),
            None => Some(None),
        }
    }

    fn finish(self) -> DomainResult<()> {
        if self.0.is_empty() {
            Ok(())
        } else {
            Err(DomainError::InvalidFields(self.0))
        }
    }
}

fn parse_category(value: String) -> DomainResult<BlogCategory> {
    if value.trim().is_empty() {
        return Err(DomainError::Validation("Category is required".into()));
    }
    value.parse()
}

fn parse_thumbnail_type(value: String) -> DomainResult<ThumbnailType> {
    value.parse()
}

impl BlogPostDraft {
    pub fn validate(self) -> DomainResult<ValidatedBlogPost> {
        let mut violations = Violations::default();

        let title = violations.require("title", self.title, "Title is required", BlogTitle::new);
        // Only an absent or empty slug is left for assignment.
        let slug = violations
            .optional("slug", self.slug.filter(|slug| !slug.is_empty()), BlogSlug::new)
            .flatten();
        let description = violations.require(
            "description",
            self.description,
            "Description is required",
            BlogDescription::new,
        );
        let content = violations.require(
            "content",
            self.content,
            "Content is required",
            BlogContent::new,
        );
        let category = violations.require(
            "category",
            self.category,
            "Category is required",
            parse_category,
        );
        let thumbnail = violations.require(
            "thumbnail",
            self.thumbnail,
            "Thumbnail is required",
            Thumbnail::new,
        );
        let thumbnail_type = violations
            .optional("thumbnail_type", self.thumbnail_type, parse_thumbnail_type)
            .map(Option::unwrap_or_default);

        violations.finish()?;

        match (title, description, content, category, thumbnail, thumbnail_type) {
            (
                Some(title),
                Some(description),
                Some(content),
                Some(category),
                Some(thumbnail),
                Some(thumbnail_type),
            ) => Ok(ValidatedBlogPost {
                title,
                slug,
                description,
                content,
                category,
                thumbnail,
                thumbnail_type,
            }),
            _ => Err(DomainError::Validation("incomplete blog post".into())),
        }
    }
}

impl BlogPostPatch {
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.slug.is_none()
            && self.description.is_none()
            && self.content.is_none()
            && self.category.is_none()
            && self.thumbnail.is_none()
            && self.thumbnail_type.is_none()
    }

    pub fn validate(self, id: BlogId, updated_at: DateTime<Utc>) -> DomainResult<BlogPostUpdate> {
        let mut violations = Violations::default();

        let title = violations.optional("title", self.title, BlogTitle::new);
        let slug = violations.optional("slug", self.slug, BlogSlug::new);
        let description = violations.optional("description", self.description, BlogDescription::new);
        let content = violations.optional("content", self.content, BlogContent::new);
        let category = violations.optional("category", self.category, parse_category);
        let thumbnail = violations.optional("thumbnail", self.thumbnail, Thumbnail::new);
        let thumbnail_type =
            violations.optional("thumbnail_type", self.thumbnail_type, parse_thumbnail_type);

        violations.finish()?;

        let mut update = BlogPostUpdate::new(id, updated_at);
        if let Some(title) = title.flatten() {
            update = update.with_title(title);
        }
        if let Some(slug) = slug.flatten() {
            update = update.with_slug(slug);
        }
        if let Some(description) = description.flatten() {
            update = update.with_description(description);
        }
        if let Some(content) = content.flatten() {
            update = update.with_content(content);
        }
        if let Some(category) = category.flatten() {
            update = update.with_category(category);
        }
        if let Some(thumbnail) = thumbnail.flatten() {
            update = update.with_thumbnail(thumbnail);
        }
        if let Some(thumbnail_type) = thumbnail_type.flatten() {
            update = update.with_thumbnail_type(thumbnail_type);
        }
        Ok(update)
    }
}
