//! Labels and timestamps for action logging/analytics
//!
//! Every [`ActionKey`] already carries a variant-derived label; this module
//! adds the wall-clock side: a `yyyy-MM-dd HH:mm:ss.SSS` timestamp and a
//! one-line tracing event combining the two. Pure functions, no persisted
//! state, no failure modes.

use std::time::{SystemTime, UNIX_EPOCH};

use crate::key::ActionKey;

/// Current wall-clock time (UTC), formatted `yyyy-MM-dd HH:mm:ss.SSS`.
pub fn timestamp() -> String {
    format_timestamp(SystemTime::now())
}

/// Format a point in time as `yyyy-MM-dd HH:mm:ss.SSS` (UTC).
///
/// Times before the unix epoch clamp to the epoch.
pub fn format_timestamp(at: SystemTime) -> String {
    let duration = at.duration_since(UNIX_EPOCH).unwrap_or_default();
    let secs = duration.as_secs();
    let (year, month, day) = civil_from_days((secs / 86_400) as i64);
    let tod = secs % 86_400;
    format!(
        "{:04}-{:02}-{:02} {:02}:{:02}:{:02}.{:03}",
        year,
        month,
        day,
        tod / 3600,
        (tod / 60) % 60,
        tod % 60,
        duration.subsec_millis()
    )
}

/// Emit one analytics event for an action (a tap, a navigation, a fetch).
pub fn trace_action<K: ActionKey>(key: K) {
    tracing::info!(action = %key.label(), at = %timestamp(), "Action performed");
}

/// Days since 1970-01-01 to a (year, month, day) civil date.
fn civil_from_days(days: i64) -> (i64, u64, u64) {
    let z = days + 719_468;
    let era = if z >= 0 { z } else { z - 146_096 } / 146_097;
    let doe = (z - era * 146_097) as u64; // [0, 146096]
    let yoe = (doe - doe / 1_460 + doe / 36_524 - doe / 146_096) / 365; // [0, 399]
    let doy = doe - (365 * yoe + yoe / 4 - yoe / 100); // [0, 365]
    let mp = (5 * doy + 2) / 153; // [0, 11]
    let day = doy - (153 * mp + 2) / 5 + 1;
    let month = if mp < 10 { mp + 3 } else { mp - 9 };
    let year = yoe as i64 + era * 400 + i64::from(month <= 2);
    (year, month, day)
}
