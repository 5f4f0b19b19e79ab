use std::collections::HashMap;
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

use tracing::{debug, info};

use crate::errors::TelemetryError;
use crate::telemetry::record::{SensorRecord, REQUIRED_COLUMNS};

/// Only the most recent rows of a source are ever analyzed.
pub const MAX_RECENT_ROWS: usize = 100;

/// Parses a CSV stream into sensor records. Header order does not matter,
/// but all required columns must be present. Any row that fails to
/// deserialize aborts the whole parse with its row number.
pub fn parse_csv<R: Read>(reader: R) -> Result<Vec<SensorRecord>, TelemetryError> {
    let mut rdr = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    let headers = rdr
        .headers()
        .map_err(|e| TelemetryError::MalformedRecord {
            row: 1,
            reason: e.to_string(),
        })?
        .clone();

    for column in REQUIRED_COLUMNS {
        if !headers.iter().any(|h| h == column) {
            return Err(TelemetryError::MissingColumn {
                column: column.to_string(),
            });
        }
    }

    let mut records = Vec::new();
    for (idx, row) in rdr.deserialize::<SensorRecord>().enumerate() {
        // Header occupies row 1, first data row is row 2
        let record = row.map_err(|e| TelemetryError::MalformedRecord {
            row: idx + 2,
            reason: e.to_string(),
        })?;
        records.push(record);
    }

    Ok(records)
}

/// Keeps the last `MAX_RECENT_ROWS` records, order preserved.
pub fn tail_recent(mut records: Vec<SensorRecord>) -> Vec<SensorRecord> {
    if records.len() > MAX_RECENT_ROWS {
        records.split_off(records.len() - MAX_RECENT_ROWS)
    } else {
        records
    }
}

/// Reads and parses a sensor CSV file, truncated to the recent tail.
pub fn load_file(path: &Path) -> Result<Vec<SensorRecord>, TelemetryError> {
    let file = File::open(path).map_err(|e| TelemetryError::Io {
        path: path.display().to_string(),
        source: e,
    })?;
    let records = parse_csv(file)?;
    info!("Loaded {} sensor records from {}", records.len(), path.display());
    Ok(tail_recent(records))
}

struct CacheEntry {
    modified: SystemTime,
    records: Vec<SensorRecord>,
}

/// Memoizing wrapper around `load_file`, keyed by source identity
/// (path + file modification time). Re-serves the parsed tail without
/// touching the file again until the source changes on disk.
pub struct CachedLoader {
    cache: HashMap<PathBuf, CacheEntry>,
}

impl CachedLoader {
    pub fn new() -> Self {
        Self {
            cache: HashMap::new(),
        }
    }

    pub fn load(&mut self, path: &Path) -> Result<Vec<SensorRecord>, TelemetryError> {
        let modified = std::fs::metadata(path)
            .and_then(|m| m.modified())
            .map_err(|e| TelemetryError::Io {
                path: path.display().to_string(),
                source: e,
            })?;

        if let Some(entry) = self.cache.get(path) {
            if entry.modified == modified {
                debug!("Cache hit for {}", path.display());
                return Ok(entry.records.clone());
            }
        }

        let records = load_file(path)?;
        self.cache.insert(
            path.to_path_buf(),
            CacheEntry {
                modified,
                records: records.clone(),
            },
        );
        Ok(records)
    }
}

impl Default for CachedLoader {
    fn default() -> Self {
        Self::new()
    }
}
