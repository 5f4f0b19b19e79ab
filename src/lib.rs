pub mod analysis;
pub mod api;
pub mod cli;
pub mod config;
pub mod dashboard;
pub mod errors;
pub mod telemetry;

// Re-exports
pub use analysis::detector::{detect_anomalies, Anomaly, Issue};
pub use analysis::recommend::recommend_maintenance;
pub use analysis::AnalysisReport;
pub use api::routes::{create_router, AppState};
pub use api::run_server;
pub use dashboard::start_dashboard;
pub use errors::{SentryError, SentryResult, TelemetryError};
pub use telemetry::loader::CachedLoader;
pub use telemetry::record::SensorRecord;
pub type AsyncMutex<T> = tokio::sync::Mutex<T>;
