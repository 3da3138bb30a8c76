use poem::endpoint::StaticFilesEndpoint;
use poem::{EndpointExt, Route, Server as PoemServer, listener::TcpListener, middleware::Tracing};
use poem_openapi::OpenApiService;
use tracing::info;

use crate::{config::server_config::ServerConfig, setup::dependency_injection::DependencyContainer};
use poem::middleware::Cors;

pub struct Server;

impl Server {
    pub async fn run(
        server: ServerConfig,
        cors: Cors,
        assets_dir: String,
        container: DependencyContainer,
    ) -> anyhow::Result<()> {
        let addr = server.bind_address();
        let api_service = OpenApiService::new(
            (
                container.health_api,
                container.food_item_api,
                container.cart_api,
                container.storefront_api,
            ),
            "Food Storefront API",
            env!("CARGO_PKG_VERSION"),
        )
        .server(format!("http://{}", addr));
        let ui = api_service.swagger_ui();
        let spec = api_service.spec_endpoint();
        let app = Route::new()
            .nest("/", api_service)
            .nest("/docs", ui)
            .nest("/openapi.json", spec)
            .nest("/images", StaticFilesEndpoint::new(&assets_dir))
            .with(cors)
            .with(Tracing);
        info!("Server running at http://{}", addr);
        info!("Swagger UI at http://{}/docs", addr);
        info!("OpenAPI JSON at http://{}/openapi.json", addr);
        info!("Serving images from {}", assets_dir);
        PoemServer::new(TcpListener::bind(&addr)).run(app).await?;
        Ok(())
    }
}
