// API Route Test Suite - exercised in-process via tower::ServiceExt

use anyhow::Result;
use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use machine_sentry::config::RateLimitSettings;
use machine_sentry::{create_router, AppState, SensorRecord};
use serde_json::{json, Value};
use std::sync::Arc;
use tower::ServiceExt;

fn reading(machine_id: &str, timestamp: &str, temperature: f64, vibration: f64) -> SensorRecord {
    SensorRecord {
        machine_id: machine_id.into(),
        timestamp: timestamp.into(),
        temperature,
        vibration,
    }
}

fn test_app(records: Vec<SensorRecord>) -> axum::Router {
    create_router(Arc::new(AppState::new(records)), &RateLimitSettings::default())
}

async fn body_json(response: axum::response::Response) -> Result<Value> {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await?;
    Ok(serde_json::from_slice(&bytes)?)
}

#[tokio::test]
async fn test_health_endpoint() -> Result<()> {
    let app = test_app(Vec::new());

    let response = app
        .oneshot(Request::builder().uri("/api/v1/health").body(Body::empty())?)
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    Ok(())
}

#[tokio::test]
async fn test_report_is_all_clear_without_anomalies() -> Result<()> {
    let app = test_app(vec![reading("M1", "2024-01-01T00:00", 70.0, 0.5)]);

    let response = app
        .oneshot(Request::builder().uri("/api/v1/report").body(Body::empty())?)
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let report = body_json(response).await?;
    assert_eq!(report["all_clear"], json!(true));
    assert_eq!(report["anomalies"].as_array().unwrap().len(), 0);
    Ok(())
}

#[tokio::test]
async fn test_report_flags_seeded_anomaly() -> Result<()> {
    let app = test_app(vec![
        reading("M1", "2024-01-01T00:00", 92.0, 0.5),
        reading("M2", "2024-01-01T00:05", 70.0, 0.5),
    ]);

    let response = app
        .oneshot(Request::builder().uri("/api/v1/report").body(Body::empty())?)
        .await
        .unwrap();

    let report = body_json(response).await?;
    assert_eq!(report["all_clear"], json!(false));
    assert_eq!(report["anomalies"][0]["machine_id"], json!("M1"));
    assert_eq!(report["anomalies"][0]["issue"], json!("overheating"));
    assert_eq!(report["recommendations"].as_array().unwrap().len(), 1);
    Ok(())
}

#[tokio::test]
async fn test_analyze_endpoint_round_trip() -> Result<()> {
    let app = test_app(Vec::new());

    let batch = json!([
        { "machine_id": "M1", "timestamp": "2024-01-01T00:00", "temperature": 90.0, "vibration": 0.2 },
        { "machine_id": "M2", "timestamp": "2024-01-01T00:05", "temperature": 80.0, "vibration": 0.95 },
        { "machine_id": "M3", "timestamp": "2024-01-01T00:10", "temperature": 80.0, "vibration": 0.5 }
    ]);

    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/v1/analyze")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(batch.to_string()))?,
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let report = body_json(response).await?;
    assert_eq!(report["anomalies"].as_array().unwrap().len(), 2);
    assert_eq!(report["anomalies"][0]["issue"], json!("overheating"));
    assert_eq!(report["anomalies"][1]["issue"], json!("high_vibration"));
    Ok(())
}

#[tokio::test]
async fn test_upload_replaces_working_set() -> Result<()> {
    let app = test_app(Vec::new());

    let csv = "machine_id,timestamp,temperature,vibration\n\
               M7,2024-01-01T00:00,91.0,0.4\n\
               M8,2024-01-01T00:05,70.0,0.3\n";

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/v1/upload")
                .body(Body::from(csv))?,
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let report = body_json(response).await?;
    assert_eq!(report["anomalies"][0]["machine_id"], json!("M7"));

    // The uploaded rows become the working set served by /readings
    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/v1/readings")
                .body(Body::empty())?,
        )
        .await
        .unwrap();

    let readings = body_json(response).await?;
    assert_eq!(readings.as_array().unwrap().len(), 2);
    assert_eq!(readings[0]["machine_id"], json!("M7"));
    Ok(())
}

#[tokio::test]
async fn test_upload_malformed_csv_is_rejected() -> Result<()> {
    let app = test_app(Vec::new());

    let csv = "machine_id,timestamp,temperature,vibration\n\
               M1,2024-01-01T00:00,not-a-number,0.4\n";

    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/v1/upload")
                .body(Body::from(csv))?,
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body = body_json(response).await?;
    assert!(body["message"].as_str().unwrap().contains("row 2"));
    Ok(())
}

#[tokio::test]
async fn test_unknown_route_is_404() -> Result<()> {
    let app = test_app(Vec::new());

    let response = app
        .oneshot(Request::builder().uri("/api/v1/nope").body(Body::empty())?)
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    Ok(())
}
