use anyhow::Result;
use machine_sentry::config::Settings;
use machine_sentry::start_dashboard;
use std::path::PathBuf;

#[tokio::main]
async fn main() -> Result<()> {
    let source = std::env::args().nth(1).map(PathBuf::from).unwrap_or_else(|| {
        Settings::new()
            .map(|s| s.telemetry.data_path)
            .unwrap_or_else(|_| PathBuf::from("data/simulated_sensor_data.csv"))
    });

    start_dashboard(source).await
}
