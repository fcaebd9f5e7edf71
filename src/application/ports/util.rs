// src/application/ports/util.rs
pub trait SlugGenerator: Send + Sync {
    /// Turns a drama title into a URL-safe slug.
    fn slugify(&self, input: &str) -> String;
}
