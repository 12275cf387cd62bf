//! Time sources and the two timestamp formats Zenith writes.
//!
//! The reducer never calls `Local::now()` itself; it asks the `Clock` stored
//! in `App` so tests can pin or advance time.

use std::sync::Arc;

use chrono::{DateTime, Local, SecondsFormat, Utc};

/// Shared time source.
pub type Clock = Arc<dyn Fn() -> DateTime<Local> + Send + Sync>;

pub fn system_clock() -> Clock {
    Arc::new(Local::now)
}

/// `[YYYY-MM-DD HH:MM:SS TZ]`, used for creation timestamps and the `date` command.
pub fn entry_timestamp(at: &DateTime<Local>) -> String {
    at.format("[%Y-%m-%d %H:%M:%S %Z]").to_string()
}

/// ISO-8601 in UTC with millisecond precision, used for `lastModified`.
pub fn iso_timestamp(at: &DateTime<Local>) -> String {
    at.with_timezone(&Utc)
        .to_rfc3339_opts(SecondsFormat::Millis, true)
}
