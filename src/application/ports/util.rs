// src/application/ports/util.rs

/// Turns free text into a lowercase, hyphenated, URL-safe string.
pub trait SlugGenerator: Send + Sync {
    fn slugify(&self, input: &str) -> String;
}
