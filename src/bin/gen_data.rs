// Writes a simulated sensor CSV so analyze and the dashboard work out of
// the box. Roughly one row in six trips a threshold.

use anyhow::Result;
use chrono::{Duration, Utc};
use machine_sentry::SensorRecord;
use rand::Rng;
use std::path::PathBuf;

const ROWS: usize = 150;
const MACHINES: usize = 5;

fn main() -> Result<()> {
    let out = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("data/simulated_sensor_data.csv"));

    if let Some(dir) = out.parent() {
        std::fs::create_dir_all(dir)?;
    }

    let mut rng = rand::thread_rng();
    let start = Utc::now() - Duration::hours(13);
    let mut wtr = csv::Writer::from_path(&out)?;

    for i in 0..ROWS {
        let machine_id = format!("M{}", (i % MACHINES) + 1);
        let timestamp = (start + Duration::minutes(5 * i as i64))
            .format("%Y-%m-%dT%H:%M")
            .to_string();
        let temperature = (rng.gen_range(60.0..95.0_f64) * 10.0).round() / 10.0;
        let vibration = (rng.gen_range(0.2..1.1_f64) * 100.0).round() / 100.0;

        wtr.serialize(SensorRecord {
            machine_id,
            timestamp,
            temperature,
            vibration,
        })?;
    }

    wtr.flush()?;
    println!("Wrote {} simulated readings to {}", ROWS, out.display());
    Ok(())
}
