use std::fmt;

use serde::{Deserialize, Serialize};

use crate::telemetry::record::SensorRecord;

/// Readings strictly above these values are unsafe. Values exactly at the
/// limit are safe. Fixed by the maintenance playbook, not configuration.
pub const TEMPERATURE_LIMIT_C: f64 = 85.0;
pub const VIBRATION_LIMIT: f64 = 0.9;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Issue {
    Overheating,
    HighVibration,
}

impl fmt::Display for Issue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Issue::Overheating => write!(f, "Overheating"),
            Issue::HighVibration => write!(f, "High Vibration"),
        }
    }
}

/// A reading classified as unsafe, carrying its source fields verbatim.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Anomaly {
    pub machine_id: String,
    pub timestamp: String,
    pub temperature: f64,
    pub vibration: f64,
    pub issue: Issue,
}

/// Scans readings in order and keeps exactly those violating a limit.
/// When both limits are violated the temperature check wins and the
/// anomaly is classified as overheating.
pub fn detect_anomalies(records: &[SensorRecord]) -> Vec<Anomaly> {
    records
        .iter()
        .filter_map(|r| {
            let overheating = r.temperature > TEMPERATURE_LIMIT_C;
            let high_vibration = r.vibration > VIBRATION_LIMIT;

            if overheating || high_vibration {
                Some(Anomaly {
                    machine_id: r.machine_id.clone(),
                    timestamp: r.timestamp.clone(),
                    temperature: r.temperature,
                    vibration: r.vibration,
                    issue: if overheating {
                        Issue::Overheating
                    } else {
                        Issue::HighVibration
                    },
                })
            } else {
                None
            }
        })
        .collect()
}
