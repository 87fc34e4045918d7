use chrono::{DateTime, TimeZone, Utc};

#[must_use]
pub fn datetime_to_unix_seconds(time: DateTime<Utc>) -> f64 {
    time.timestamp_millis() as f64 / 1000.0
}

/// Inverse of [`datetime_to_unix_seconds`], saturating at the representable range.
#[must_use]
pub fn unix_seconds_to_datetime(seconds: f64) -> DateTime<Utc> {
    if seconds.is_nan() || seconds == f64::NEG_INFINITY {
        return DateTime::<Utc>::MIN_UTC;
    }
    if seconds == f64::INFINITY {
        return DateTime::<Utc>::MAX_UTC;
    }
    let millis = (seconds * 1000.0).round();
    if millis >= i64::MAX as f64 {
        return DateTime::<Utc>::MAX_UTC;
    }
    if millis <= i64::MIN as f64 {
        return DateTime::<Utc>::MIN_UTC;
    }
    Utc.timestamp_millis_opt(millis as i64)
        .single()
        .unwrap_or(if millis < 0.0 {
            DateTime::<Utc>::MIN_UTC
        } else {
            DateTime::<Utc>::MAX_UTC
        })
}
