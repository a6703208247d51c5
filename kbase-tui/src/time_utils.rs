use time::{OffsetDateTime, UtcOffset};

pub fn to_local_time(dt: OffsetDateTime) -> OffsetDateTime {
    if let Ok(local_offset) = UtcOffset::current_local_offset() {
        dt.to_offset(local_offset)
    } else {
        dt
    }
}

/// Milliseconds since the Unix epoch; new entries use this as their id.
pub fn now_millis() -> i64 {
    (OffsetDateTime::now_utc().unix_timestamp_nanos() / 1_000_000) as i64
}

/// Local creation time encoded in an entry id.
pub fn created_at(id: i64) -> Option<OffsetDateTime> {
    OffsetDateTime::from_unix_timestamp_nanos(i128::from(id) * 1_000_000)
        .ok()
        .map(to_local_time)
}

/// `YYYY-MM-DD HH:MM`, or an empty string for ids outside the representable range.
pub fn format_created(id: i64) -> String {
    match created_at(id) {
        Some(dt) => format!(
            "{:04}-{:02}-{:02} {:02}:{:02}",
            dt.year(),
            dt.month() as u8,
            dt.day(),
            dt.hour(),
            dt.minute()
        ),
        None => String::new(),
    }
}
