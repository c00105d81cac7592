// File: services/calport_backend/src/main.rs
use axum::{routing::get, Router};
use calport_common::{config_error, logging, CalportError, Context};
use calport_config::load_config;
use calport_gcal::routes as gcal_routes;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), CalportError> {
    logging::init();

    let config = Arc::new(load_config().map_err(config_error)?);

    let gcal_router = gcal_routes::routes(config.clone())?;

    let api_router = Router::new().nest(
        "/api",
        Router::new()
            .route("/", get(|| async { "Welcome to Calport API!" }))
            .merge(calport_common::routes())
            .merge(gcal_router),
    );

    #[allow(unused_mut)] // for the features it needs to be mutable
    let mut app = api_router;

    // Conditionally add Swagger UI and JSON endpoint if openapi feature enabled
    #[cfg(feature = "openapi")]
    {
        use calport_gcal::doc::GcalApiDoc;
        use utoipa::OpenApi;
        use utoipa_swagger_ui::SwaggerUi;

        // Define the Merged OpenAPI Documentation struct
        #[derive(OpenApi)]
        #[openapi(
            info(
                title = "Calport API",
                version = "0.1.0",
                description = "Calport calendar import API docs",
                license(name = "MIT", url = "https://opensource.org/licenses/MIT")
            ),
            components(),
            tags( (name = "Calport", description = "Core service endpoints")),
            servers( (url = "/api", description = "Main API Prefix")),
        )]
        struct ApiDoc;

        let mut openapi_doc = ApiDoc::openapi();
        openapi_doc.merge(GcalApiDoc::openapi());
        info!("Adding Swagger UI at /api/docs");

        let swagger_ui = SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", openapi_doc);
        app = app.merge(swagger_ui);
    }

    let app = app.layer(TraceLayer::new_for_http());

    // Bind and serve
    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    info!("Starting server at http://{}", addr);
    info!("API endpoints available at http://{}/api", addr);

    axum::serve(listener, app.into_make_service())
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    Ok(())
}

/// Resolves on Ctrl+C.
async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_ok() {
        info!("Shutdown signal received");
    }
}
