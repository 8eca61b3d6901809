//! satsboard Web Server
//!
//! Axum-based REST API for the satsboard event payment dashboard. The
//! polling front-end hits `/api/stats`; everything else is plumbing.
//!
//! The server holds no state across requests: every `/api/stats` call
//! fetches a fresh transaction snapshot from the configured source and
//! recomputes the report.

use std::sync::Arc;

use axum::{
    http::{header, HeaderValue, Method, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use chrono::{DateTime, Utc};
use tower_http::{cors::CorsLayer, services::ServeDir, trace::TraceLayer};
use tracing::{error, info};

use satsboard_core::models::MerchantMap;
use satsboard_core::source::TransactionSource;

mod handlers;

/// Server configuration
#[derive(Clone, Default)]
pub struct ServerConfig {
    /// Allowed CORS origins (empty = same-origin only)
    pub allowed_origins: Vec<String>,
}

/// Shared application state
pub struct AppState {
    /// Where transaction snapshots come from (Galoy in production)
    pub source: Arc<dyn TransactionSource>,
    /// Memo -> merchant display name mapping
    pub merchants: MerchantMap,
    /// Event start; the report's cutoff instant
    pub event_start: DateTime<Utc>,
}

/// Create the application router
pub fn create_router(
    source: Arc<dyn TransactionSource>,
    merchants: MerchantMap,
    event_start: DateTime<Utc>,
    static_dir: Option<&str>,
    config: ServerConfig,
) -> Router {
    let state = Arc::new(AppState {
        source,
        merchants,
        event_start,
    });

    let api_routes = Router::new()
        .route("/stats", get(handlers::get_stats))
        .route("/merchants", get(handlers::list_merchants))
        .route("/health", get(handlers::get_health));

    let cors = if config.allowed_origins.is_empty() {
        CorsLayer::new()
            .allow_methods([Method::GET, Method::OPTIONS])
            .allow_headers([header::CONTENT_TYPE])
    } else {
        let origins: Vec<HeaderValue> = config
            .allowed_origins
            .iter()
            .filter_map(|o| o.parse().ok())
            .collect();
        CorsLayer::new()
            .allow_origin(origins)
            .allow_methods([Method::GET, Method::OPTIONS])
            .allow_headers([header::CONTENT_TYPE])
    };

    let mut app = Router::new()
        .nest("/api", api_routes)
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(cors);

    // Serve the dashboard front-end if a directory is provided
    if let Some(dir) = static_dir {
        app = app.fallback_service(ServeDir::new(dir));
    }

    app
}

/// Start the server
pub async fn serve(
    source: Arc<dyn TransactionSource>,
    merchants: MerchantMap,
    event_start: DateTime<Utc>,
    host: &str,
    port: u16,
    static_dir: Option<&str>,
    config: ServerConfig,
) -> anyhow::Result<()> {
    let app = create_router(source, merchants, event_start, static_dir, config);
    let addr = format!("{}:{}", host, port);

    info!("Starting server at http://{}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

// ============================================================================
// Error Handling
// ============================================================================

/// Application error type with proper HTTP status codes
pub struct AppError {
    status: StatusCode,
    message: String,
    internal: Option<anyhow::Error>,
}

impl AppError {
    pub fn bad_gateway(msg: &str, internal: anyhow::Error) -> Self {
        Self {
            status: StatusCode::BAD_GATEWAY,
            message: msg.to_string(),
            internal: Some(internal),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // Log the full internal error if present
        if let Some(err) = &self.internal {
            error!(error = %err, "Internal error");
        }

        let body = Json(serde_json::json!({
            "error": self.message
        }));

        (self.status, body).into_response()
    }
}

impl<E> From<E> for AppError
where
    E: Into<anyhow::Error>,
{
    fn from(err: E) -> Self {
        let err = err.into();
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            // Return generic message to client
            message: "An internal error occurred".to_string(),
            // Keep full error for logging
            internal: Some(err),
        }
    }
}
