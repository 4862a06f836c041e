use poem::{
    Endpoint, EndpointExt, Route, Server as PoemServer,
    listener::{Listener, TcpAcceptor, TcpListener},
    middleware::Tracing,
};
use poem_openapi::OpenApiService;

use crate::{config::app_config::AppConfig, setup::dependency_injection::DependencyContainer};

pub struct Server;

impl Server {
    /// Builds the routed application: API, Swagger UI and the OpenAPI document.
    pub fn app(container: DependencyContainer, public_url: &str) -> impl Endpoint + use<> {
        let api_service = OpenApiService::new(
            (container.health_api, container.product_api),
            "Catalog Service API",
            env!("CARGO_PKG_VERSION"),
        )
        .server(public_url);
        let ui = api_service.swagger_ui();
        let spec = api_service.spec_endpoint();

        Route::new()
            .nest("/", api_service)
            .nest("/docs", ui)
            .nest("/openapi.json", spec)
            .with(Tracing)
    }

    /// Claims the socket; fails when the address is taken or invalid.
    pub async fn bind(addr: &str) -> anyhow::Result<TcpAcceptor> {
        Ok(TcpListener::bind(addr.to_string()).into_acceptor().await?)
    }

    pub async fn run(config: AppConfig, container: DependencyContainer) -> anyhow::Result<()> {
        let addr = config.server.bind_address();
        let app = Self::app(container, &format!("http://{}", addr));

        let acceptor = Self::bind(&addr).await?;
        tracing::info!(port = config.server.port, "Listening on {}", addr);
        tracing::info!("Swagger UI at http://{}/docs", addr);

        PoemServer::new_with_acceptor(acceptor).run(app).await?;
        Ok(())
    }
}
