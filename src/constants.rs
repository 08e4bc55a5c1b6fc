use chrono::{DateTime, Utc};
use once_cell::sync::Lazy;

/// Set on first access; `main` touches it at startup.
pub static START_TIME: Lazy<DateTime<Utc>> = Lazy::new(Utc::now);

/// Upper bound on accepted JSON bodies. Contact messages are small.
pub const JSON_PAYLOAD_LIMIT: usize = 16 * 1024;
