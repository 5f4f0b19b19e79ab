/*
* Machine Sentry Configuration
* ----------------------------
* Hierarchical configuration with multiple layers of overrides.
*
* Configuration Hierarchy (from lowest to highest priority):
* -----------------------------------------------------
* 1. Hardcoded defaults
* 2. config/default.toml (base configuration)
* 3. config/local.toml (environment-specific overrides, optional)
* 4. Environment variables with the SENTRY_ prefix
*
* Core Components:
* --------------
* 1. ServerSettings:
*    - host/port: where the report API listens
*    - api_prefix: in case /api/v1 stops being fashionable
*
* 2. TelemetrySettings:
*    - data_path: the default sensor CSV analyzed when nothing is uploaded
*
* 3. RateLimitSettings:
*    - upload_requests_per_minute: cap on CSV uploads
*
* Detection thresholds are deliberately NOT configuration. The limits are
* fixed by the maintenance playbook and live as constants next to the
* detector, where nobody can "tune" them from an env var on a Friday.
*/

use config::{Config, ConfigError, File};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::info;

#[derive(Debug, Serialize, Deserialize)]
pub struct Settings {
    pub server: ServerSettings,
    pub telemetry: TelemetrySettings,
    pub rate_limits: RateLimitSettings,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
    pub api_prefix: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct TelemetrySettings {
    pub data_path: PathBuf,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct RateLimitSettings {
    pub upload_requests_per_minute: u32,
}

impl Default for RateLimitSettings {
    fn default() -> Self {
        Self {
            upload_requests_per_minute: 30,
        }
    }
}

impl Settings {
    pub fn new() -> Result<Self, ConfigError> {
        let config_path = std::env::var("CONFIG_PATH").unwrap_or_else(|_| "config".to_string());

        info!("Loading configuration from path: {}", config_path);

        let config = Config::builder()
            // Start with default settings
            .set_default("server.host", "127.0.0.1")?
            .set_default("server.port", 3000)?
            .set_default("server.api_prefix", "/api/v1")?
            .set_default("telemetry.data_path", "data/simulated_sensor_data.csv")?
            .set_default("rate_limits.upload_requests_per_minute", 30)?
            // Add configuration from files
            .add_source(File::with_name(&format!("{}/default", config_path)).required(false))
            .add_source(File::with_name(&format!("{}/local", config_path)).required(false))
            // Add environment variables with prefix "SENTRY_"
            .add_source(config::Environment::with_prefix("SENTRY").separator("__"))
            .build()?;

        config.try_deserialize()
    }

    pub fn new_from_file(path: &Path) -> Result<Self, ConfigError> {
        let config = Config::builder()
            .add_source(File::from(path))
            .build()?;
        config.try_deserialize()
    }
}

pub fn generate_default_config() -> Settings {
    Settings {
        server: ServerSettings {
            host: "127.0.0.1".to_string(),
            port: 3000,
            api_prefix: "/api/v1".to_string(),
        },
        telemetry: TelemetrySettings {
            data_path: PathBuf::from("data/simulated_sensor_data.csv"),
        },
        rate_limits: RateLimitSettings {
            upload_requests_per_minute: 30,
        },
    }
}
