use poem::{
    Endpoint, EndpointExt, Route, Server as PoemServer,
    listener::TcpListener,
    middleware::{Cors, Tracing},
};
use poem_openapi::OpenApiService;

use crate::api::fallback::{
    invalid_content_type, invalid_payload, method_not_allowed, route_not_found,
};
use crate::{config::app_config::AppConfig, setup::dependency_injection::DependencyContainer};

pub struct Server;

impl Server {
    /// Builds the full endpoint tree with docs, JSON error bodies, CORS and tracing.
    pub fn app(container: DependencyContainer, cors: Cors, server_url: String) -> impl Endpoint {
        let api_service = OpenApiService::new(
            container.product_api,
            "Product Catalog API",
            env!("CARGO_PKG_VERSION"),
        )
        .server(server_url);
        let ui = api_service.swagger_ui();
        let spec = api_service.spec_endpoint();

        Route::new()
            .nest("/", api_service)
            .nest("/docs", ui)
            .nest("/openapi.json", spec)
            .catch_error(route_not_found)
            .catch_error(method_not_allowed)
            .catch_error(invalid_payload)
            .catch_error(invalid_content_type)
            .with(cors)
            .with(Tracing)
    }

    pub async fn run(config: AppConfig, container: DependencyContainer) -> anyhow::Result<()> {
        let addr = config.server.bind_address();
        let app = Self::app(container, config.cors, format!("http://{}", addr));

        tracing::info!("Server running at http://{}", addr);
        tracing::info!("Swagger UI at http://{}/docs", addr);
        tracing::info!("OpenAPI JSON at http://{}/openapi.json", addr);
        PoemServer::new(TcpListener::bind(&addr)).run(app).await?;
        Ok(())
    }
}
