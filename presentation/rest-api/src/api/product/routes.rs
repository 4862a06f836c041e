use std::sync::Arc;

use poem_openapi::{
    OpenApi,
    param::{Path, Query},
    payload::Json,
};

use business::domain::product::model::UpdateProductParams;
use business::domain::product::services::CatalogService;
use business::domain::product::validation::{validate_create, validate_update};

use crate::api::error::{ErrorMessage, IntoErrorMessage, ValidationMessages, rejected_request};
use crate::api::product::dto::{ProductResponse, parse_product_id};
use crate::api::tags::ApiTags;

/// Page size used when a listing request carries no `limit`.
pub const DEFAULT_LIMIT: u32 = 10;

pub struct ProductApi {
    catalog_service: Arc<dyn CatalogService>,
}

impl ProductApi {
    pub fn new(catalog_service: Arc<dyn CatalogService>) -> Self {
        Self { catalog_service }
    }
}

/// Product catalog API
///
/// Endpoints for creating, reading, updating, and deleting catalog products.
#[OpenApi]
impl ProductApi {
    /// Create a new product
    ///
    /// Requires `name`, `stock` and `price`; `description` is optional.
    #[oai(path = "/products", method = "post", tag = "ApiTags::Products")]
    async fn create_product(&self, body: Json<serde_json::Value>) -> CreateProductResponse {
        let params = match validate_create(&body.0) {
            Ok(params) => params,
            Err(errors) => return CreateProductResponse::BadRequest(Json(errors.into_messages())),
        };

        match self.catalog_service.create_product(params).await {
            Ok(product) => CreateProductResponse::Created(Json(product.into())),
            Err(err) => CreateProductResponse::InternalError(err.into_error_message()),
        }
    }

    /// Update a product
    ///
    /// Replaces only the fields present in the body. A non-numeric id
    /// addresses product `0`.
    #[oai(path = "/products/:id", method = "patch", tag = "ApiTags::Products")]
    async fn update_product(
        &self,
        id: Path<String>,
        body: Json<serde_json::Value>,
    ) -> UpdateProductResponse {
        let changes = match validate_update(&body.0) {
            Ok(changes) => changes,
            Err(errors) => return UpdateProductResponse::BadRequest(Json(errors.into_messages())),
        };

        let params = UpdateProductParams {
            id: parse_product_id(&id.0),
            changes,
        };

        match self.catalog_service.update_product(params).await {
            Ok(product) => UpdateProductResponse::Ok(Json(product.into())),
            Err(err) => UpdateProductResponse::InternalError(err.into_error_message()),
        }
    }

    /// List products
    ///
    /// Returns a page of products. `limit` defaults to 10 and `offset` to 0;
    /// both must be non-negative integers when given.
    #[oai(path = "/products", method = "get", tag = "ApiTags::Products")]
    async fn get_products(
        &self,
        limit: Query<Option<u32>>,
        offset: Query<Option<u32>>,
    ) -> GetProductsResponse {
        let limit = limit.0.unwrap_or(DEFAULT_LIMIT);
        let offset = offset.0.unwrap_or(0);

        match self.catalog_service.get_products(limit, offset).await {
            Ok(products) => {
                let responses: Vec<ProductResponse> =
                    products.into_iter().map(|p| p.into()).collect();
                GetProductsResponse::Ok(Json(responses))
            }
            Err(err) => GetProductsResponse::InternalError(err.into_error_message()),
        }
    }

    /// Get a product by ID
    #[oai(path = "/products/:id", method = "get", tag = "ApiTags::Products")]
    async fn get_product(&self, id: Path<String>) -> GetProductResponse {
        match self
            .catalog_service
            .get_product(parse_product_id(&id.0))
            .await
        {
            Ok(product) => GetProductResponse::Ok(Json(product.into())),
            Err(err) => GetProductResponse::InternalError(err.into_error_message()),
        }
    }

    /// Delete a product
    ///
    /// Returns the record as it was before removal.
    #[oai(path = "/products/:id", method = "delete", tag = "ApiTags::Products")]
    async fn delete_product(&self, id: Path<String>) -> DeleteProductResponse {
        match self
            .catalog_service
            .delete_product(parse_product_id(&id.0))
            .await
        {
            Ok(product) => DeleteProductResponse::Ok(Json(product.into())),
            Err(err) => DeleteProductResponse::InternalError(err.into_error_message()),
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
#[oai(bad_request_handler = "create_bad_request")]
pub enum CreateProductResponse {
    #[oai(status = 201)]
    Created(Json<ProductResponse>),
    #[oai(status = 400)]
    BadRequest(ValidationMessages),
    #[oai(status = 500)]
    InternalError(ErrorMessage),
}

fn create_bad_request(err: poem::Error) -> CreateProductResponse {
    CreateProductResponse::BadRequest(rejected_request(&err))
}

#[derive(poem_openapi::ApiResponse)]
#[oai(bad_request_handler = "update_bad_request")]
pub enum UpdateProductResponse {
    #[oai(status = 200)]
    Ok(Json<ProductResponse>),
    #[oai(status = 400)]
    BadRequest(ValidationMessages),
    #[oai(status = 500)]
    InternalError(ErrorMessage),
}

fn update_bad_request(err: poem::Error) -> UpdateProductResponse {
    UpdateProductResponse::BadRequest(rejected_request(&err))
}

#[derive(poem_openapi::ApiResponse)]
#[oai(bad_request_handler = "list_bad_request")]
pub enum GetProductsResponse {
    #[oai(status = 200)]
    Ok(Json<Vec<ProductResponse>>),
    #[oai(status = 400)]
    BadRequest(ValidationMessages),
    #[oai(status = 500)]
    InternalError(ErrorMessage),
}

fn list_bad_request(err: poem::Error) -> GetProductsResponse {
    GetProductsResponse::BadRequest(rejected_request(&err))
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetProductResponse {
    #[oai(status = 200)]
    Ok(Json<ProductResponse>),
    #[oai(status = 500)]
    InternalError(ErrorMessage),
}

#[derive(poem_openapi::ApiResponse)]
pub enum DeleteProductResponse {
    #[oai(status = 200)]
    Ok(Json<ProductResponse>),
    #[oai(status = 500)]
    InternalError(ErrorMessage),
}
