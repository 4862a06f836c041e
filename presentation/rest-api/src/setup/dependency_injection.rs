use std::sync::Arc;

use business::application::product::catalog::CatalogServiceImpl;
use business::domain::product::repository::ProductRepository;
use logger::TracingLogger;

use crate::api::health::routes::HealthApi;
use crate::api::product::routes::ProductApi;

pub struct DependencyContainer {
    pub health_api: HealthApi,
    pub product_api: ProductApi,
}

impl DependencyContainer {
    /// Wires the catalog service around the given repository.
    ///
    /// The repository is the only state shared between requests.
    pub fn new(product_repository: Arc<dyn ProductRepository>) -> Self {
        let logger = Arc::new(TracingLogger::new("catalog"));

        let catalog_service = Arc::new(CatalogServiceImpl::new(product_repository, logger));

        Self {
            health_api: HealthApi,
            product_api: ProductApi::new(catalog_service),
        }
    }
}
