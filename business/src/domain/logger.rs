/// Logging port used by the catalog service.
///
/// Keeps the business crate free of any concrete logging backend; the
/// `logger` infrastructure crate provides the `tracing` adapter.
pub trait Logger: Send + Sync {
    fn info(&self, message: &str);
    fn warn(&self, message: &str);
    fn error(&self, message: &str);
    fn debug(&self, message: &str);
}
