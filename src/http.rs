use std::sync::Arc;

use axum::{
    http::{header, StatusCode},
    response::IntoResponse,
    routing::get,
    Router,
};
use rust_embed::Embed;

use crate::handlers::{search, Ctx};

// Embedded home page and static assets.
#[derive(Embed)]
#[folder = "static/"]
struct StaticFiles;

/// Initialize HTTP routes.
pub fn init_handlers(ctx: Arc<Ctx>) -> Router {
    Router::new()
        .route("/", get(serve_index))
        .route("/static/{*path}", get(serve_static))
        .route("/api/search", get(search::search))
        .route("/api/search/recommendations", get(search::recommendations))
        .with_state(ctx)
}

/// Wait for SIGINT or SIGTERM so axum can drain in-flight requests.
pub async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            log::error!("error installing SIGINT handler: {}", e);
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => log::error!("error installing SIGTERM handler: {}", e),
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    log::info!("shutdown signal received");
}

/// Serve the embedded home page.
async fn serve_index() -> impl IntoResponse {
    serve_embedded("index.html")
}

/// Serve embedded static files.
async fn serve_static(axum::extract::Path(path): axum::extract::Path<String>) -> impl IntoResponse {
    serve_embedded(path.trim_start_matches('/'))
}

fn serve_embedded(path: &str) -> axum::response::Response {
    match StaticFiles::get(path) {
        Some(content) => {
            let mime = mime_guess::from_path(path)
                .first_or_octet_stream()
                .to_string();
            (
                StatusCode::OK,
                [(header::CONTENT_TYPE, mime)],
                content.data.to_vec(),
            )
                .into_response()
        }
        None => (StatusCode::NOT_FOUND, "not found").into_response(),
    }
}
