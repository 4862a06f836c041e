use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::model::{CreateProductParams, Product, UpdateProductParams};
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::services::CatalogService;

pub struct CatalogServiceImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub logger: Arc<dyn Logger>,
}

impl CatalogServiceImpl {
    pub fn new(repository: Arc<dyn ProductRepository>, logger: Arc<dyn Logger>) -> Self {
        Self { repository, logger }
    }
}

#[async_trait]
impl CatalogService for CatalogServiceImpl {
    async fn create_product(&self, params: CreateProductParams) -> Result<Product, ProductError> {
        self.logger.info(&format!("Creating product: {}", params.name));

        let product = self.repository.create(&params).await?;

        if !product.is_persisted() {
            self.logger.error(&format!("Repository returned no id for product: {}", params.name));
            return Err(ProductError::CreationFailed);
        }

        self.logger.info(&format!("Product created with id: {}", product.id));
        Ok(product)
    }

    async fn update_product(&self, params: UpdateProductParams) -> Result<Product, ProductError> {
        self.logger.info(&format!("Updating product: {}", params.id));

        let product = self.repository.update(&params).await?;
        // TODO: publish a product-updated event so the search index can reindex this record.

        self.logger.info(&format!("Product updated: {}", product.id));
        Ok(product)
    }

    async fn get_products(&self, limit: u32, offset: u32) -> Result<Vec<Product>, ProductError> {
        self.logger.debug(&format!(
            "Fetching products with limit {} and offset {}",
            limit, offset
        ));
        let products = self.repository.find(limit, offset).await?;
        self.logger.debug(&format!("Found {} products", products.len()));
        Ok(products)
    }

    async fn get_product(&self, id: i64) -> Result<Product, ProductError> {
        self.logger.debug(&format!("Fetching product: {}", id));
        Ok(self.repository.find_one(id).await?)
    }

    async fn delete_product(&self, id: i64) -> Result<Product, ProductError> {
        self.logger.info(&format!("Deleting product: {}", id));

        let product = self.repository.delete(id).await?;
        // TODO: drop the record from the search index once product events are published.

        self.logger.info(&format!("Product deleted: {}", id));
        Ok(product)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::RepositoryError;
    use mockall::mock;
    use mockall::predicate::eq;
    use proptest::prelude::*;

    use crate::domain::product::model::ProductChanges;

    mock! {
        pub ProductRepo {}

        #[async_trait]
        impl ProductRepository for ProductRepo {
            async fn create(&self, params: &CreateProductParams) -> Result<Product, RepositoryError>;
            async fn update(&self, params: &UpdateProductParams) -> Result<Product, RepositoryError>;
            async fn delete(&self, id: i64) -> Result<Product, RepositoryError>;
            async fn find(&self, limit: u32, offset: u32) -> Result<Vec<Product>, RepositoryError>;
            async fn find_one(&self, id: i64) -> Result<Product, RepositoryError>;
        }
    }

    mock! {
        pub Log {}

        impl Logger for Log {
            fn info(&self, message: &str);
            fn warn(&self, message: &str);
            fn error(&self, message: &str);
            fn debug(&self, message: &str);
        }
    }

    fn mock_logger() -> Arc<dyn Logger> {
        let mut logger = MockLog::new();
        logger.expect_info().returning(|_| ());
        logger.expect_warn().returning(|_| ());
        logger.expect_error().returning(|_| ());
        logger.expect_debug().returning(|_| ());
        Arc::new(logger)
    }

    fn service(repository: MockProductRepo) -> CatalogServiceImpl {
        CatalogServiceImpl::new(Arc::new(repository), mock_logger())
    }

    fn create_params() -> CreateProductParams {
        CreateProductParams {
            name: "Walnut Cutting Board".to_string(),
            description: "Hand oiled".to_string(),
            stock: 40,
            price: 65,
        }
    }

    fn product(id: i64) -> Product {
        Product {
            id,
            name: format!("Product {}", id),
            description: "Catalog item".to_string(),
            stock: 100 + id,
            price: 10 + id,
        }
    }

    #[tokio::test]
    async fn should_create_product_when_repository_assigns_id() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo
            .expect_create()
            .times(1)
            .returning(|params| Ok(Product::from_params(123, params.clone())));

        let result = service(mock_repo).create_product(create_params()).await;

        let product = result.unwrap();
        assert_eq!(product.id, 123);
        assert_eq!(product.name, "Walnut Cutting Board");
        assert_eq!(product.description, "Hand oiled");
        assert_eq!(product.stock, 40);
        assert_eq!(product.price, 65);
    }

    #[tokio::test]
    async fn should_fail_creation_when_repository_returns_no_id() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo
            .expect_create()
            .returning(|params| Ok(Product::from_params(0, params.clone())));

        let result = service(mock_repo).create_product(create_params()).await;

        let err = result.unwrap_err();
        assert_eq!(err, ProductError::CreationFailed);
        assert_eq!(err.to_string(), "product creation failed");
    }

    #[tokio::test]
    async fn should_propagate_duplicate_error_on_create() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo
            .expect_create()
            .returning(|_| Err(RepositoryError::Duplicated));

        let result = service(mock_repo).create_product(create_params()).await;

        assert_eq!(result.unwrap_err().to_string(), "product already exists");
    }

    #[tokio::test]
    async fn should_update_product_with_merged_id() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo
            .expect_update()
            .withf(|params| params.id == 42 && params.changes.price == Some(99))
            .times(1)
            .returning(|params| {
                let mut updated = product(params.id);
                updated.apply(&params.changes);
                Ok(updated)
            });

        let result = service(mock_repo)
            .update_product(UpdateProductParams {
                id: 42,
                changes: ProductChanges {
                    price: Some(99),
                    ..Default::default()
                },
            })
            .await;

        let updated = result.unwrap();
        assert_eq!(updated.id, 42);
        assert_eq!(updated.price, 99);
    }

    #[tokio::test]
    async fn should_propagate_missing_product_on_update() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo
            .expect_update()
            .returning(|_| Err(RepositoryError::NotFound));

        let result = service(mock_repo)
            .update_product(UpdateProductParams {
                id: 5,
                changes: ProductChanges::default(),
            })
            .await;

        assert_eq!(result.unwrap_err().to_string(), "product does not exist");
    }

    #[tokio::test]
    async fn should_return_product_by_id() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo
            .expect_find_one()
            .with(eq(123))
            .times(1)
            .returning(|id| Ok(product(id)));

        let result = service(mock_repo).get_product(123).await;

        assert_eq!(result.unwrap(), product(123));
    }

    #[tokio::test]
    async fn should_return_deleted_product() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo
            .expect_delete()
            .with(eq(8))
            .times(1)
            .returning(|id| Ok(product(id)));

        let result = service(mock_repo).delete_product(8).await;

        assert_eq!(result.unwrap().id, 8);
    }

    #[tokio::test]
    async fn should_propagate_repository_message_on_delete() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo
            .expect_delete()
            .returning(|_| Err(RepositoryError::persistence("delete product failed")));

        let result = service(mock_repo).delete_product(8).await;

        assert_eq!(result.unwrap_err().to_string(), "delete product failed");
    }

    proptest! {
        #[test]
        fn should_pass_range_through_to_repository(limit in 0u32..50, offset in 0u32..1_000) {
            let mut mock_repo = MockProductRepo::new();
            mock_repo
                .expect_find()
                .with(eq(limit), eq(offset))
                .times(1)
                .returning(|limit, offset| {
                    Ok((0..limit)
                        .map(|i| product(i64::from(offset) + i64::from(i) + 1))
                        .collect())
                });

            let runtime = tokio::runtime::Builder::new_current_thread()
                .build()
                .unwrap();
            let products = runtime
                .block_on(service(mock_repo).get_products(limit, offset))
                .unwrap();

            prop_assert_eq!(products.len(), limit as usize);
        }
    }
}
