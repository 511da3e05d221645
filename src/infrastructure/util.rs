use crate::application::ports::util::{IdGenerator, SlugGenerator};
use uuid::Uuid;

/// Lowercases the input, collapses every run of characters outside
/// `[a-z0-9]` into one hyphen, and trims hyphens from both ends.
#[derive(Debug, Default, Clone, Copy)]
pub struct AsciiSlugGenerator;

impl SlugGenerator for AsciiSlugGenerator {
    fn slugify(&self, input: &str) -> String {
        let mut slug = String::with_capacity(input.len());
        let mut pending_hyphen = false;

        for ch in input.chars().flat_map(char::to_lowercase) {
            if ch.is_ascii_lowercase() || ch.is_ascii_digit() {
                if pending_hyphen && !slug.is_empty() {
                    slug.push('-');
                }
                pending_hyphen = false;
                slug.push(ch);
            } else {
                pending_hyphen = true;
            }
        }

        slug
    }
}

/// Transliterates non-ASCII letters before slugifying ("Café" becomes "cafe").
#[derive(Debug, Default, Clone, Copy)]
pub struct TransliteratingSlugGenerator;

impl SlugGenerator for TransliteratingSlugGenerator {
    fn slugify(&self, input: &str) -> String {
        slug::slugify(input)
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct UuidGenerator;

impl IdGenerator for UuidGenerator {
    fn generate(&self) -> String {
        Uuid::new_v4().to_string()
    }
}
