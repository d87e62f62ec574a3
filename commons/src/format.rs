use chrono::{LocalResult, TimeZone};
use std::fmt::Display;

const BYTE_UNITS: [&str; 7] = ["B", "KB", "MB", "GB", "TB", "PB", "EB"];

/// Java-style `Date::toString` layout, e.g. `Tue Nov 14 22:13:20 UTC 2023`.
pub const TIMESTAMP_FORMAT: &str = "%a %b %d %H:%M:%S %Z %Y";

/// Renders `value` with at most `places` fractional digits.
/// Extra digits are cut, not rounded. Trailing zeros and a dangling point are dropped.
pub fn limit_decimal(value: f64, places: usize) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }

    let mut rendered = value.to_string();
    if let Some(point) = rendered.find('.') {
        rendered.truncate((point + 1 + places).min(rendered.len()));
        let trimmed = rendered.trim_end_matches('0').trim_end_matches('.').len();
        rendered.truncate(trimmed);
    }

    if rendered == "-0" {
        rendered = "0".to_string();
    }
    rendered
}

/// Humanized byte count in binary units: `70 B`, `953.67 MB`, `1.5 GB`.
pub fn byte_desc(bytes: i64) -> String {
    let magnitude = bytes.unsigned_abs();
    let mut unit = 0;
    while unit + 1 < BYTE_UNITS.len() && magnitude >= 1u64 << (10 * (unit + 1)) {
        unit += 1;
    }

    let value = bytes as f64 / (1u64 << (10 * unit)) as f64;
    format!("{} {}", limit_decimal(value, 2), BYTE_UNITS[unit])
}

/// Renders milliseconds since the Unix epoch in `tz`.
/// Instants chrono cannot represent fall back to the raw millisecond count.
pub fn render_timestamp<Tz>(millis: i64, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    match tz.timestamp_millis_opt(millis) {
        LocalResult::Single(time) | LocalResult::Ambiguous(time, _) => {
            time.format(TIMESTAMP_FORMAT).to_string()
        }
        LocalResult::None => millis.to_string(),
    }
}
