use async_trait::async_trait;
use sqlx::PgPool;

use business::domain::errors::RepositoryError;
use business::domain::product::model::{CreateProductParams, Product, UpdateProductParams};
use business::domain::product::repository::ProductRepository;

use super::entity::ProductEntity;

const UNIQUE_VIOLATION: &str = "23505";

pub struct ProductRepositoryPostgres {
    pool: PgPool,
}

impl ProductRepositoryPostgres {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn map_sqlx_error(err: sqlx::Error) -> RepositoryError {
    match &err {
        sqlx::Error::RowNotFound => RepositoryError::NotFound,
        sqlx::Error::Database(db_err) if db_err.code().as_deref() == Some(UNIQUE_VIOLATION) => {
            RepositoryError::Duplicated
        }
        _ => {
            tracing::error!(error = %err, "product query failed");
            RepositoryError::DatabaseError
        }
    }
}

#[async_trait]
impl ProductRepository for ProductRepositoryPostgres {
    async fn create(&self, params: &CreateProductParams) -> Result<Product, RepositoryError> {
        let entity = sqlx::query_as::<_, ProductEntity>(
            "INSERT INTO products (name, description, stock, price) VALUES ($1, $2, $3, $4) RETURNING id, name, description, stock, price",
        )
        .bind(&params.name)
        .bind(&params.description)
        .bind(params.stock)
        .bind(params.price)
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        Ok(entity.into_domain())
    }

    async fn update(&self, params: &UpdateProductParams) -> Result<Product, RepositoryError> {
        let changes = &params.changes;
        let entity = sqlx::query_as::<_, ProductEntity>(
            r#"UPDATE products SET
                name = COALESCE($2, name),
                description = COALESCE($3, description),
                stock = COALESCE($4, stock),
                price = COALESCE($5, price)
            WHERE id = $1
            RETURNING id, name, description, stock, price"#,
        )
        .bind(params.id)
        .bind(&changes.name)
        .bind(&changes.description)
        .bind(changes.stock)
        .bind(changes.price)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx_error)?
        .ok_or(RepositoryError::NotFound)?;

        Ok(entity.into_domain())
    }

    async fn delete(&self, id: i64) -> Result<Product, RepositoryError> {
        let entity = sqlx::query_as::<_, ProductEntity>(
            "DELETE FROM products WHERE id = $1 RETURNING id, name, description, stock, price",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx_error)?
        .ok_or(RepositoryError::NotFound)?;

        Ok(entity.into_domain())
    }

    async fn find(&self, limit: u32, offset: u32) -> Result<Vec<Product>, RepositoryError> {
        let entities = sqlx::query_as::<_, ProductEntity>(
            "SELECT id, name, description, stock, price FROM products ORDER BY id LIMIT $1 OFFSET $2",
        )
        .bind(i64::from(limit))
        .bind(i64::from(offset))
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        Ok(entities.into_iter().map(|e| e.into_domain()).collect())
    }

    async fn find_one(&self, id: i64) -> Result<Product, RepositoryError> {
        let entity = sqlx::query_as::<_, ProductEntity>(
            "SELECT id, name, description, stock, price FROM products WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx_error)?
        .ok_or(RepositoryError::NotFound)?;

        Ok(entity.into_domain())
    }
}
