use crate::analysis::detector::Anomaly;

/// Formats one maintenance message per anomaly, order preserved.
/// Each message names the issue, the machine, the timestamp and both
/// readings, in that order.
pub fn recommend_maintenance(anomalies: &[Anomaly]) -> Vec<String> {
    anomalies
        .iter()
        .map(|a| {
            format!(
                "{} on {} at {} (Temp: {}°C, Vibration: {}).",
                a.issue, a.machine_id, a.timestamp, a.temperature, a.vibration
            )
        })
        .collect()
}
