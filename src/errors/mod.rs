use thiserror::Error;

#[derive(Error, Debug)]
pub enum SentryError {
    #[error("Telemetry error: {0}")]
    Telemetry(#[from] TelemetryError),

    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Error, Debug)]
pub enum TelemetryError {
    #[error("Malformed record at row {row}: {reason}")]
    MalformedRecord { row: usize, reason: String },

    #[error("Missing required column: {column}")]
    MissingColumn { column: String },

    #[error("Failed to read sensor data from {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

// Result type alias for convenience
pub type SentryResult<T> = Result<T, SentryError>;
