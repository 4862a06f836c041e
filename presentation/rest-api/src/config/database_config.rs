use std::env;
use std::sync::Arc;

use business::domain::product::repository::ProductRepository;
use persistence::db::{DatabaseConfig, create_postgres_pool, run_migrations};
use persistence::product::in_memory::InMemoryProductRepository;
use persistence::product::repository::ProductRepositoryPostgres;

/// Storage selection read from the environment
#[derive(Debug, Clone, Default)]
pub struct DatabaseSettings {
    pub url: Option<String>,
}

impl DatabaseSettings {
    /// Environment variables:
    /// - DATABASE_URL: PostgreSQL connection string (optional)
    pub fn from_env() -> Self {
        Self {
            url: env::var("DATABASE_URL")
                .ok()
                .filter(|url| !url.trim().is_empty()),
        }
    }
}

/// Builds the product repository shared by every request
///
/// Connects to PostgreSQL and applies migrations when a database URL is
/// configured, otherwise falls back to the in-memory store.
///
/// # Errors
/// Returns error if the connection or the migrations fail
pub async fn init_repository(
    settings: &DatabaseSettings,
) -> anyhow::Result<Arc<dyn ProductRepository>> {
    match &settings.url {
        Some(url) => {
            let pool = create_postgres_pool(&DatabaseConfig::new(url.clone())).await?;
            run_migrations(&pool).await?;
            tracing::info!("Using PostgreSQL product repository");
            Ok(Arc::new(ProductRepositoryPostgres::new(pool)))
        }
        None => {
            tracing::warn!("DATABASE_URL not set, products are kept in memory");
            Ok(Arc::new(InMemoryProductRepository::new()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn should_fall_back_to_in_memory_repository() {
        let repository = init_repository(&DatabaseSettings::default())
            .await
            .unwrap();

        assert!(repository.find(10, 0).await.unwrap().is_empty());
    }
}
