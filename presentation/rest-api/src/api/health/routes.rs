use chrono::Utc;
use poem_openapi::{Object, OpenApi, payload::Json};
use serde::{Deserialize, Serialize};

use crate::api::tags::ApiTags;

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize, Object)]
pub struct HealthCheckResponse {
    /// Always "healthy" while the process serves requests
    pub status: String,
    /// Server time in RFC 3339 format
    pub timestamp: String,
    /// Crate version of the running binary
    pub version: String,
}

/// Liveness check for container orchestrators and load balancers.
pub struct HealthApi;

#[OpenApi]
impl HealthApi {
    /// Health check endpoint
    ///
    /// Does not touch the repository, so it stays green while storage is down.
    #[oai(path = "/health", method = "get", tag = "ApiTags::Health")]
    async fn health_check(&self) -> Json<HealthCheckResponse> {
        Json(HealthCheckResponse {
            status: "healthy".to_string(),
            timestamp: Utc::now().to_rfc3339(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use poem::Route;
    use poem::test::TestClient;
    use poem_openapi::OpenApiService;

    #[tokio::test]
    async fn should_report_healthy_status() {
        let api = OpenApiService::new(HealthApi, "Catalog", "test");
        let cli = TestClient::new(Route::new().nest("/", api));

        let resp = cli.get("/health").send().await;

        resp.assert_status_is_ok();
        let body = resp.json().await;
        body.value().object().get("status").assert_string("healthy");
    }
}
