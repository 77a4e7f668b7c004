//! Time-related utilities.

use chrono::{DateTime, FixedOffset, TimeZone, Utc};

/// JST is UTC+9
const JST_OFFSET_SECS: i32 = 9 * 3600;

fn jst() -> FixedOffset {
    FixedOffset::east_opt(JST_OFFSET_SECS).expect("JST offset is within bounds")
}

/// Get current Unix timestamp (milliseconds), observed in JST
pub fn get_jst_timestamp() -> i64 {
    let now_jst: DateTime<FixedOffset> = Utc::now().with_timezone(&jst());
    now_jst.timestamp_millis()
}

/// Convert Unix timestamp (milliseconds) to JST RFC 3339 format
///
/// Out-of-range timestamps fall back to the Unix epoch.
pub fn timestamp_to_jst_rfc3339(timestamp_millis: i64) -> String {
    let seconds = timestamp_millis.div_euclid(1000);
    let nanos = (timestamp_millis.rem_euclid(1000) * 1_000_000) as u32;
    match jst().timestamp_opt(seconds, nanos).single() {
        Some(dt) => dt.to_rfc3339(),
        None => jst()
            .timestamp_opt(0, 0)
            .single()
            .map(|dt| dt.to_rfc3339())
            .unwrap_or_default(),
    }
}
