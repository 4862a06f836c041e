use std::collections::BTreeMap;
use std::sync::atomic::{AtomicI64, Ordering};

use async_trait::async_trait;
use tokio::sync::RwLock;

use business::domain::errors::RepositoryError;
use business::domain::product::model::{CreateProductParams, Product, UpdateProductParams};
use business::domain::product::repository::ProductRepository;

/// Process-local product store, used when no database is configured.
///
/// Ids start at 1 and are never reused.
#[derive(Debug)]
pub struct InMemoryProductRepository {
    products: RwLock<BTreeMap<i64, Product>>,
    next_id: AtomicI64,
}

impl InMemoryProductRepository {
    pub fn new() -> Self {
        Self {
            products: RwLock::new(BTreeMap::new()),
            next_id: AtomicI64::new(1),
        }
    }
}

impl Default for InMemoryProductRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ProductRepository for InMemoryProductRepository {
    async fn create(&self, params: &CreateProductParams) -> Result<Product, RepositoryError> {
        let mut products = self.products.write().await;

        if products.values().any(|p| p.name == params.name) {
            return Err(RepositoryError::Duplicated);
        }

        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        let product = Product::from_params(id, params.clone());
        products.insert(id, product.clone());

        Ok(product)
    }

    async fn update(&self, params: &UpdateProductParams) -> Result<Product, RepositoryError> {
        let mut products = self.products.write().await;

        if let Some(name) = &params.changes.name {
            if products
                .values()
                .any(|p| p.id != params.id && &p.name == name)
            {
                return Err(RepositoryError::Duplicated);
            }
        }

        let product = products
            .get_mut(&params.id)
            .ok_or(RepositoryError::NotFound)?;
        product.apply(&params.changes);

        Ok(product.clone())
    }

    async fn delete(&self, id: i64) -> Result<Product, RepositoryError> {
        self.products
            .write()
            .await
            .remove(&id)
            .ok_or(RepositoryError::NotFound)
    }

    async fn find(&self, limit: u32, offset: u32) -> Result<Vec<Product>, RepositoryError> {
        let products = self.products.read().await;

        Ok(products
            .values()
            .skip(offset as usize)
            .take(limit as usize)
            .cloned()
            .collect())
    }

    async fn find_one(&self, id: i64) -> Result<Product, RepositoryError> {
        self.products
            .read()
            .await
            .get(&id)
            .cloned()
            .ok_or(RepositoryError::NotFound)
    }
}
