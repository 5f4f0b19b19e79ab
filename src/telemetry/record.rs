use serde::{Deserialize, Serialize};

/// Column names the ingestion layer expects in every sensor CSV.
pub const REQUIRED_COLUMNS: [&str; 4] = ["machine_id", "timestamp", "temperature", "vibration"];

/// One timestamped reading from one machine. The timestamp is an opaque
/// ISO-like string; nothing downstream parses it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SensorRecord {
    pub machine_id: String,
    pub timestamp: String,
    pub temperature: f64,
    pub vibration: f64,
}
