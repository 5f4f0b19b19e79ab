// Anomaly Detector Test Suite - the thresholds are strict and so are we

use machine_sentry::analysis::detector::{
    detect_anomalies, Issue, TEMPERATURE_LIMIT_C, VIBRATION_LIMIT,
};
use machine_sentry::SensorRecord;
use rand::Rng;

fn reading(machine_id: &str, timestamp: &str, temperature: f64, vibration: f64) -> SensorRecord {
    SensorRecord {
        machine_id: machine_id.into(),
        timestamp: timestamp.into(),
        temperature,
        vibration,
    }
}

// Soundness: readings at or below both limits never produce an anomaly
#[test]
fn test_safe_readings_produce_no_anomalies() {
    let records = vec![
        reading("M1", "2024-01-01T00:00", 80.0, 0.5),
        reading("M2", "2024-01-01T00:05", 20.0, 0.0),
        reading("M3", "2024-01-01T00:10", 84.99, 0.89),
    ];

    assert!(detect_anomalies(&records).is_empty());
}

// Boundary values exactly at the limits are safe, the comparison is strict
#[test]
fn test_boundary_values_are_safe() {
    let records = vec![
        reading("M1", "2024-01-01T00:00", TEMPERATURE_LIMIT_C, 0.2),
        reading("M2", "2024-01-01T00:05", 70.0, VIBRATION_LIMIT),
        reading("M3", "2024-01-01T00:10", TEMPERATURE_LIMIT_C, VIBRATION_LIMIT),
    ];

    assert!(detect_anomalies(&records).is_empty());
}

#[test]
fn test_overheating_flagged() {
    let records = vec![reading("M1", "2024-01-01T00:00", 90.0, 0.2)];

    let anomalies = detect_anomalies(&records);
    assert_eq!(anomalies.len(), 1);
    assert_eq!(anomalies[0].issue, Issue::Overheating);
}

#[test]
fn test_high_vibration_flagged() {
    let records = vec![reading("M1", "2024-01-01T00:00", 80.0, 0.95)];

    let anomalies = detect_anomalies(&records);
    assert_eq!(anomalies.len(), 1);
    assert_eq!(anomalies[0].issue, Issue::HighVibration);
}

// Tie-break law: both limits violated classifies as overheating
#[test]
fn test_tie_break_prefers_overheating() {
    let records = vec![reading("M1", "2024-01-01T00:00", 90.0, 0.95)];

    let anomalies = detect_anomalies(&records);
    assert_eq!(anomalies.len(), 1);
    assert_eq!(anomalies[0].issue, Issue::Overheating);
}

#[test]
fn test_empty_input_yields_empty_output() {
    assert!(detect_anomalies(&[]).is_empty());
}

// Traceability: flagged rows keep their source fields verbatim and stay
// in input order
#[test]
fn test_order_and_traceability_preserved() {
    let records = vec![
        reading("M3", "2024-01-01T00:00", 91.0, 0.1),
        reading("M1", "2024-01-01T00:05", 50.0, 0.2),
        reading("M2", "2024-01-01T00:10", 60.0, 1.4),
        reading("M3", "2024-01-01T00:15", 88.5, 0.3),
    ];

    let anomalies = detect_anomalies(&records);
    assert_eq!(anomalies.len(), 3);

    assert_eq!(anomalies[0].machine_id, "M3");
    assert_eq!(anomalies[0].timestamp, "2024-01-01T00:00");
    assert_eq!(anomalies[0].temperature, 91.0);
    assert_eq!(anomalies[0].vibration, 0.1);

    assert_eq!(anomalies[1].machine_id, "M2");
    assert_eq!(anomalies[1].issue, Issue::HighVibration);

    assert_eq!(anomalies[2].machine_id, "M3");
    assert_eq!(anomalies[2].timestamp, "2024-01-01T00:15");
}

// Length law over a randomized batch: never more anomalies than readings,
// and exactly one per violating row
#[test]
fn test_anomaly_count_matches_violations() {
    let mut rng = rand::thread_rng();
    let records: Vec<SensorRecord> = (0..100)
        .map(|i| {
            reading(
                &format!("M{}", (i % 7) + 1),
                &format!("2024-01-01T{:02}:{:02}", i / 60, i % 60),
                rng.gen_range(60.0..95.0),
                rng.gen_range(0.2..1.1),
            )
        })
        .collect();

    let anomalies = detect_anomalies(&records);
    assert!(anomalies.len() <= records.len());

    let expected = records
        .iter()
        .filter(|r| r.temperature > TEMPERATURE_LIMIT_C || r.vibration > VIBRATION_LIMIT)
        .count();
    assert_eq!(anomalies.len(), expected);
}
