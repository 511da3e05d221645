// src/application/ports/util.rs
pub trait SlugGenerator: Send + Sync {
    /// Normalises free text into a base slug. May return an empty string when
    /// the input has no usable characters.
    fn slugify(&self, input: &str) -> String;
}

pub trait IdGenerator: Send + Sync {
    /// Produces a collision-resistant identifier in its textual form.
    fn generate(&self) -> String;
}
