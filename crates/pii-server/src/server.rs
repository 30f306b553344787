use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use std::sync::Arc;

use pii_core::Error;
use pii_engine::{MaskRequest, MaskingService, SpanMaskRequest};
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tracing::{error, info};

pub struct MaskServer;

impl MaskServer {
    pub async fn serve(service: Arc<MaskingService>, host: &str, port: u16) -> anyhow::Result<()> {
        let app = router(service);

        let addr = format!("{}:{}", host, port);
        let listener = TcpListener::bind(&addr).await?;

        info!("Masking service listening on {}", addr);

        axum::serve(listener, app).await?;

        Ok(())
    }
}

/// Build the application router
pub fn router(service: Arc<MaskingService>) -> Router {
    // Add CORS layer to allow connections from any origin
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(handle_health))
        .route("/mask", post(handle_mask))
        .route("/mask/spans", post(handle_mask_spans))
        .layer(cors)
        .with_state(service)
}

/// GET /health
async fn handle_health() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "healthy",
        "service": "pii-masking",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

/// POST /mask - detect entities, then mask them
async fn handle_mask(
    State(service): State<Arc<MaskingService>>,
    Json(req): Json<MaskRequest>,
) -> Response {
    match service.mask(req).await {
        Ok(response) => Json(response).into_response(),
        Err(e) => error_response(e),
    }
}

/// POST /mask/spans - mask with caller-supplied spans
async fn handle_mask_spans(
    State(service): State<Arc<MaskingService>>,
    Json(req): Json<SpanMaskRequest>,
) -> Response {
    match service.mask_spans(&req) {
        Ok(outcome) => Json(outcome).into_response(),
        Err(e) => error_response(e),
    }
}

fn error_response(e: Error) -> Response {
    let status = match e {
        Error::UnsupportedMode(_) => StatusCode::BAD_REQUEST,
        _ => {
            error!("Masking request failed: {}", e);
            StatusCode::INTERNAL_SERVER_ERROR
        }
    };

    (status, Json(serde_json::json!({ "detail": e.to_string() }))).into_response()
}
