//! Wall-clock helpers.

use std::time::Duration;

use chrono::{DateTime, Local, Utc};

/// Human-readable timestamp layout used in progress output.
pub const DISPLAY_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Wall-clock instant `offset` from now, saturating at the far future.
pub fn utc_after(offset: Duration) -> DateTime<Utc> {
    let now = Utc::now();
    chrono::Duration::from_std(offset)
        .ok()
        .and_then(|delta| now.checked_add_signed(delta))
        .unwrap_or(DateTime::<Utc>::MAX_UTC)
}

/// Format a UTC timestamp in the local timezone for display.
pub fn display_local(at: DateTime<Utc>) -> String {
    at.with_timezone(&Local).format(DISPLAY_FORMAT).to_string()
}
