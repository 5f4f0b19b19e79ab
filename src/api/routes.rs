/*
* Machine Sentry API Routes
* -------------------------
* The HTTP face of the maintenance agent, powered by Axum.
*
* Architecture Overview:
* --------------------
* A small REST API around one pure pipeline: sensor readings go in,
* anomalies and maintenance recommendations come out. The working set of
* readings lives in shared state behind Arc<Mutex<T>>; every report is
* recomputed from it on request, nothing is persisted.
*
* API Endpoints:
* ------------
* GET  /api/v1/health    - Liveness probe
* GET  /api/v1/readings  - The current working set (most recent 100 rows)
* GET  /api/v1/report    - Anomalies + recommendations + all_clear flag
* POST /api/v1/analyze   - Run the pipeline on a supplied JSON batch
* POST /api/v1/upload    - Replace the working set with an uploaded CSV
*
* Technical Implementation Details:
* ------------------------------
* - Thread-safe state management with Arc<Mutex<T>>
* - Upload route is rate limited and body-size capped
* - Tracing layer logs every request (because println! is so 2021)
* - Malformed uploads come back as 422 with a JSON error body
*/

use axum::{
    body::Bytes,
    error_handling::HandleErrorLayer,
    extract::State,
    http::{StatusCode, Uri},
    response::{IntoResponse, Response},
    routing::{get, post},
    BoxError, Json, Router,
};
use serde_json::json;
use std::sync::Arc;
use tokio::sync::Mutex;
use tower::{buffer::BufferLayer, ServiceBuilder};
use tower_http::{limit::RequestBodyLimitLayer, trace::TraceLayer};
use tracing::{error, info, warn};

use crate::analysis::{self, AnalysisReport};
use crate::api::error::{ErrorNumber, ErrorResponse};
use crate::api::middleware::rate_limit::{RateLimitConfig, RateLimitExceeded};
use crate::config::{RateLimitSettings, Settings};
use crate::telemetry::loader::{load_file, parse_csv, tail_recent};
use crate::telemetry::record::SensorRecord;

const MAX_UPLOAD_BYTES: usize = 2 * 1024 * 1024;

#[derive(Clone)]
pub struct AppState {
    pub readings: Arc<Mutex<Vec<SensorRecord>>>,
}

impl AppState {
    pub fn new(readings: Vec<SensorRecord>) -> Self {
        Self {
            readings: Arc::new(Mutex::new(readings)),
        }
    }

    /// Seeds the working set from the configured default CSV. A missing or
    /// unreadable file is not fatal, the server just starts empty.
    pub fn from_settings(settings: &Settings) -> Self {
        let readings = match load_file(&settings.telemetry.data_path) {
            Ok(records) => records,
            Err(e) => {
                warn!("No initial sensor data loaded: {}", e);
                Vec::new()
            }
        };
        Self::new(readings)
    }
}

pub fn create_router(app_state: Arc<AppState>, limits: &RateLimitSettings) -> Router {
    let rate_limit = RateLimitConfig::from(limits);

    let upload_router = Router::new()
        .route("/api/v1/upload", post(upload_csv))
        .layer(
            ServiceBuilder::new()
                .layer(HandleErrorLayer::new(handle_middleware_error))
                .layer(BufferLayer::new(64))
                .layer(rate_limit.layer()),
        )
        .layer(RequestBodyLimitLayer::new(MAX_UPLOAD_BYTES));

    let main_router = Router::new()
        .route("/api/v1/health", get(health))
        .route("/api/v1/readings", get(get_readings))
        .route("/api/v1/report", get(get_report))
        .route("/api/v1/analyze", post(analyze_records));

    // Main router
    Router::new()
        .merge(upload_router)
        .merge(main_router)
        .fallback(fallback_handler)
        .with_state(app_state)
        .layer(TraceLayer::new_for_http())
}

async fn handle_middleware_error(err: BoxError) -> Response {
    error!("Middleware error: {}", err);
    RateLimitExceeded.into_response()
}

async fn health() -> impl IntoResponse {
    Json(json!({ "status": "ok" }))
}

async fn get_readings(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let readings = state.readings.lock().await;
    Json(readings.clone())
}

async fn get_report(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let readings = state.readings.lock().await;
    let report = analysis::analyze_readings(&readings);
    if report.all_clear {
        info!("Report requested: all machines within safe parameters");
    } else {
        info!("Report requested: {} anomalies flagged", report.anomalies.len());
    }
    Json(report)
}

/// Runs the pipeline on a caller-supplied batch without touching the
/// working set. The recent-rows truncation applies here too.
async fn analyze_records(Json(records): Json<Vec<SensorRecord>>) -> Json<AnalysisReport> {
    let recent = tail_recent(records);
    Json(analysis::analyze_readings(&recent))
}

async fn upload_csv(
    State(state): State<Arc<AppState>>,
    body: Bytes,
) -> Result<Json<AnalysisReport>, ErrorResponse> {
    let records = parse_csv(body.as_ref())
        .map_err(|e| ErrorResponse::new(ErrorNumber::MalformedUpload, e.to_string()))?;

    let recent = tail_recent(records);
    let report = analysis::analyze_readings(&recent);

    let mut readings = state.readings.lock().await;
    info!(
        "Accepted upload of {} recent readings ({} anomalies)",
        recent.len(),
        report.anomalies.len()
    );
    *readings = recent;

    Ok(Json(report))
}

async fn fallback_handler(uri: Uri) -> impl IntoResponse {
    error!("No route for {}", uri);
    StatusCode::NOT_FOUND
}
