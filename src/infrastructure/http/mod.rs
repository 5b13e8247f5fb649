use axum::{
    extract::DefaultBodyLimit,
    middleware,
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::controllers::{
    dubbing::{self, DubbingController},
    health, home,
};
use crate::infrastructure::config::Config;
use crate::infrastructure::middleware::{cors_layer, request_id_middleware};

mod openapi;

pub use openapi::{ApiDoc, OPENAPI_JSON_PATH, SWAGGER_UI_PATH};

/// Transcripts can be long; axum's 2 MiB default is too small for them
const MAX_UPLOAD_BYTES: usize = 50 * 1024 * 1024;

/// Build the application router with all routes and middleware
pub fn build_router(config: &Config, dubbing_controller: Arc<DubbingController>) -> Router {
    let upload_routes = Router::new()
        .route("/upload-csv/", post(dubbing::upload_csv))
        .route("/upload-csv", post(dubbing::upload_csv))
        .with_state(dubbing_controller)
        .layer(DefaultBodyLimit::max(MAX_UPLOAD_BYTES));

    Router::new()
        .route("/", get(home::homepage))
        .route("/health", get(health::health))
        .merge(upload_routes)
        .merge(SwaggerUi::new(SWAGGER_UI_PATH).url(OPENAPI_JSON_PATH, ApiDoc::openapi()))
        .layer(cors_layer(&config.allowed_origins()))
        .layer(middleware::from_fn(request_id_middleware))
        .layer(TraceLayer::new_for_http())
}

/// Start the HTTP server with all routes configured
pub async fn start_http_server(
    config: Arc<Config>,
    dubbing_controller: Arc<DubbingController>,
) -> Result<(), Box<dyn std::error::Error>> {
    let app = build_router(&config, dubbing_controller);

    let listener =
        tokio::net::TcpListener::bind(format!("{}:{}", config.host, config.port)).await?;

    tracing::info!("Server listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await?;

    Ok(())
}
