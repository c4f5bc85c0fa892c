/// Logging port of the wishlist core. Adapters decide where messages go.
pub trait Logger: Send + Sync {
    fn info(&self, message: &str);
    fn warn(&self, message: &str);
    fn error(&self, message: &str);
    /// Cache hits and evictions.
    fn debug(&self, message: &str);
}
