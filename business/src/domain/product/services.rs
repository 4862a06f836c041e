use async_trait::async_trait;

use super::errors::ProductError;
use super::model::{CreateProductParams, Product, UpdateProductParams};

/// Service port for catalog operations.
///
/// Sits between the HTTP handlers and the [`ProductRepository`]: every call
/// is forwarded to the repository, failures come back unchanged.
///
/// [`ProductRepository`]: super::repository::ProductRepository
#[async_trait]
pub trait CatalogService: Send + Sync {
    /// Creates a product. Fails with [`ProductError::CreationFailed`] when the
    /// repository returns a record without an id.
    async fn create_product(&self, params: CreateProductParams) -> Result<Product, ProductError>;

    async fn update_product(&self, params: UpdateProductParams) -> Result<Product, ProductError>;

    /// Returns a page of products. `limit` and `offset` reach the repository
    /// untouched.
    async fn get_products(&self, limit: u32, offset: u32) -> Result<Vec<Product>, ProductError>;

    async fn get_product(&self, id: i64) -> Result<Product, ProductError>;

    /// Deletes a product and returns the removed record.
    async fn delete_product(&self, id: i64) -> Result<Product, ProductError>;
}
