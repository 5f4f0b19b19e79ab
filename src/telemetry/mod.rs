pub mod loader;
pub mod record;

pub use loader::{load_file, parse_csv, tail_recent, CachedLoader, MAX_RECENT_ROWS};
pub use record::{SensorRecord, REQUIRED_COLUMNS};
