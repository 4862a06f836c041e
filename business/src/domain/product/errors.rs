#[derive(Debug, PartialEq, thiserror::Error)]
pub enum ProductError {
    /// The repository handed back a record without an identifier.
    #[error("product creation failed")]
    CreationFailed,
    #[error(transparent)]
    Repository(#[from] crate::domain::errors::RepositoryError),
}
