use chrono::{DateTime, Utc};

/// Current time, pinned by `BRAD_FIXED_TIME` (RFC 3339) for reproducible reports.
pub fn now_utc() -> DateTime<Utc> {
    if let Ok(value) = std::env::var("BRAD_FIXED_TIME") {
        if let Ok(dt) = DateTime::parse_from_rfc3339(&value) {
            return dt.with_timezone(&Utc);
        }
    }
    Utc::now()
}
