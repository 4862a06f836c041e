use async_trait::async_trait;

use crate::domain::errors::RepositoryError;

use super::model::{CreateProductParams, Product, UpdateProductParams};

/// Persistence port for catalog products.
///
/// Implementations are shared across every request, so they must be safe
/// to call concurrently.
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// Persists a new product and returns it with its assigned id.
    async fn create(&self, params: &CreateProductParams) -> Result<Product, RepositoryError>;
    /// Applies the changes to the addressed product and returns the result.
    async fn update(&self, params: &UpdateProductParams) -> Result<Product, RepositoryError>;
    /// Removes a product and returns the record as it was before deletion.
    async fn delete(&self, id: i64) -> Result<Product, RepositoryError>;
    /// Returns up to `limit` products, skipping the first `offset`, ordered by id.
    async fn find(&self, limit: u32, offset: u32) -> Result<Vec<Product>, RepositoryError>;
    async fn find_one(&self, id: i64) -> Result<Product, RepositoryError>;
}
