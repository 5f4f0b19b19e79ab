mod settings;

pub use settings::{
    generate_default_config, RateLimitSettings, ServerSettings, Settings, TelemetrySettings,
};
