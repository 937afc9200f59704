//! Unix ↔ WebKit timestamp conversion.
//!
//! Chrome stores `visits.visit_time` as microseconds since the WebKit
//! epoch, 1601-01-01 00:00:00 UTC. Every retention comparison must convert
//! the Unix-based threshold into that unit first.

/// Seconds between the WebKit epoch (1601-01-01) and the Unix epoch (1970-01-01).
pub const WEBKIT_EPOCH_OFFSET_SECS: i64 = 11_644_473_600;

const MICROS_PER_SEC: i64 = 1_000_000;
const SECS_PER_DAY: i64 = 86_400;

/// Converts a Unix timestamp in seconds to WebKit microseconds.
pub fn unix_to_webkit_micros(unix_secs: i64) -> i64 {
    (unix_secs + WEBKIT_EPOCH_OFFSET_SECS) * MICROS_PER_SEC
}

/// Converts WebKit microseconds back to a Unix timestamp in seconds,
/// truncating sub-second precision.
pub fn webkit_micros_to_unix(micros: i64) -> i64 {
    micros / MICROS_PER_SEC - WEBKIT_EPOCH_OFFSET_SECS
}

/// Returns the WebKit-epoch cutoff for "`now` minus `days`".
///
/// Visits with `visit_time` strictly below the returned value fall outside
/// the retention window. A zero-day window yields "now", so every visit
/// recorded before the call is prunable.
pub fn retention_threshold(now_unix_secs: i64, days: u64) -> i64 {
    unix_to_webkit_micros(now_unix_secs - days as i64 * SECS_PER_DAY)
}
