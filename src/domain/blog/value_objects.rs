// src/domain/blog/value_objects.rs
use crate::domain::errors::{DomainError, DomainResult};
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

pub const TITLE_MAX_CHARS: usize = 200;
pub const DESCRIPTION_MAX_CHARS: usize = 5000;
pub const SLUG_MAX_CHARS: usize = 255;
pub const THUMBNAIL_MAX_CHARS: usize = 255;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BlogId(pub i64);

impl BlogId {
    pub fn new(id: i64) -> DomainResult<Self> {
        if id <= 0 {
            Err(DomainError::Validation("blog id must be positive".into()))
        } else {
            Ok(Self(id))
        }
    }
}

impl From<BlogId> for i64 {
    fn from(value: BlogId) -> Self {
        value.0
    }
}

impl fmt::Display for BlogId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

fn required(value: &str, message: &str) -> DomainResult<()> {
    if value.trim().is_empty() {
        return Err(DomainError::Validation(message.into()));
    }
    Ok(())
}

fn at_most(value: &str, max_chars: usize, message: &str) -> DomainResult<()> {
    if value.chars().count() > max_chars {
        return Err(DomainError::Validation(message.into()));
    }
    Ok(())
}

macro_rules! text_value_object {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash)]
        pub struct $name(String);

        impl $name {
            pub fn as_str(&self) -> &str {
                &self.0
            }

            pub fn into_inner(self) -> String {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<$name> for String {
            fn from(value: $name) -> Self {
                value.0
            }
        }
    };
}

text_value_object!(BlogTitle);
text_value_object!(
    /// URL-safe identifier, unique across all blog posts.
    BlogSlug
);
text_value_object!(BlogDescription);
text_value_object!(BlogContent);
text_value_object!(
    /// A stored file name or an absolute URL, depending on [`ThumbnailType`].
    Thumbnail
);

impl BlogTitle {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        required(&value, "Title is required")?;
        at_most(
            &value,
            TITLE_MAX_CHARS,
            "Title must be at most 200 characters",
        )?;
        Ok(Self(value))
    }
}

impl BlogSlug {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        required(&value, "Slug is required")?;
        at_most(
            &value,
            SLUG_MAX_CHARS,
            "Slug must be at most 255 characters",
        )?;
        Ok(Self(value))
    }
}

impl BlogDescription {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        required(&value, "Description is required")?;
        at_most(
            &value,
            DESCRIPTION_MAX_CHARS,
            "Description must be at most 5000 characters",
        )?;
        Ok(Self(value))
    }
}

impl BlogContent {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        required(&value, "Content is required")?;
        Ok(Self(value))
    }
}

impl Thumbnail {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        required(&value, "Thumbnail is required")?;
        at_most(
            &value,
            THUMBNAIL_MAX_CHARS,
            "Thumbnail must be at most 255 characters",
        )?;
        Ok(Self(value))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BlogCategory {
    Strategy,
    #[serde(rename = "Marketing and Sales")]
    MarketingAndSales,
    Finance,
    Mindset,
    Communication,
}

impl BlogCategory {
    pub const ALL: [BlogCategory; 5] = [
        BlogCategory::Strategy,
        BlogCategory::MarketingAndSales,
        BlogCategory::Finance,
        BlogCategory::Mindset,
        BlogCategory::Communication,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            BlogCategory::Strategy => "Strategy",
            BlogCategory::MarketingAndSales => "Marketing and Sales",
            BlogCategory::Finance => "Finance",
            BlogCategory::Mindset => "Mindset",
            BlogCategory::Communication => "Communication",
        }
    }
}

impl fmt::Display for BlogCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BlogCategory {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|category| category.as_str() == s)
            .ok_or_else(|| DomainError::Validation("Invalid category".into()))
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThumbnailType {
    #[default]
    File,
    Url,
}

impl ThumbnailType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ThumbnailType::File => "file",
            ThumbnailType::Url => "url",
        }
    }
}

impl fmt::Display for ThumbnailType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ThumbnailType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "file" => Ok(ThumbnailType::File),
            "url" => Ok(ThumbnailType::Url),
            _ => Err(DomainError::Validation(
                "Thumbnail type must be 'file' or 'url'".into(),
            )),
        }
    }
}
