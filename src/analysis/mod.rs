pub mod detector;
pub mod recommend;

use serde::Serialize;

pub use detector::{detect_anomalies, Anomaly, Issue};
pub use recommend::recommend_maintenance;

use crate::telemetry::record::SensorRecord;

/// The outcome of one full detection pass, as handed to presentation layers.
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisReport {
    pub anomalies: Vec<Anomaly>,
    pub recommendations: Vec<String>,
    pub all_clear: bool,
}

/// Runs the full pipeline over a set of readings: detect, then format.
/// `all_clear` marks the defined success outcome of zero anomalies.
pub fn analyze_readings(records: &[SensorRecord]) -> AnalysisReport {
    let anomalies = detect_anomalies(records);
    let recommendations = recommend_maintenance(&anomalies);
    let all_clear = anomalies.is_empty();

    AnalysisReport {
        anomalies,
        recommendations,
        all_clear,
    }
}
