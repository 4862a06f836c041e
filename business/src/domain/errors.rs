/// Repository errors for domain layer.
///
/// Messages are surfaced to HTTP clients unchanged, so they stay short and
/// never carry driver-level detail.
#[derive(Debug, PartialEq, thiserror::Error)]
pub enum RepositoryError {
    #[error("product does not exist")]
    NotFound,
    #[error("product already exists")]
    Duplicated,
    #[error("database unavailable")]
    DatabaseError,
    /// Adapter-defined failure, reported verbatim.
    #[error("{0}")]
    Persistence(String),
}

impl RepositoryError {
    pub fn persistence(message: impl Into<String>) -> Self {
        RepositoryError::Persistence(message.into())
    }
}
