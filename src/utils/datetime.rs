use jiff::Timestamp;
use jiff::civil::DateTime;
use jiff::fmt::strtime;
use jiff::tz::TimeZone;

use crate::internal::messages;

const DISPLAY_FORMAT: &str = "%d/%m/%Y %H:%M";

/// Format a backend `created_at` string (ISO-8601, typically without an
/// offset, e.g. "2026-08-24T14:03:27.511908") into "24/08/2026 14:03".
/// Unparseable input renders as the fixed invalid-date string.
pub fn format_created_at(raw: &str) -> String {
    // The in-memory backend emits naive local datetimes; newer deployments
    // may attach an offset, so try both shapes.
    if let Ok(dt) = raw.trim().parse::<DateTime>()
        && let Ok(formatted) = strtime::format(DISPLAY_FORMAT, dt)
    {
        return formatted;
    }

    if let Ok(ts) = raw.trim().parse::<Timestamp>()
        && let Ok(formatted) = strtime::format(DISPLAY_FORMAT, ts.to_zoned(TimeZone::UTC).datetime())
    {
        return formatted;
    }

    messages::INVALID_DATE.to_string()
}

#[cfg(test)]
mod tests {
    use super::format_created_at;

    #[test]
    fn formats_naive_isoformat() {
        assert_eq!(format_created_at("2026-08-24T14:03:27.511908"), "24/08/2026 14:03");
        assert_eq!(format_created_at("2025-01-02T03:04:05"), "02/01/2025 03:04");
    }

    #[test]
    fn formats_offset_timestamps() {
        assert_eq!(format_created_at("2026-08-24T14:03:27Z"), "24/08/2026 14:03");
    }

    #[test]
    fn rejects_garbage() {
        assert_eq!(format_created_at("yesterday"), "Data inválida");
        assert_eq!(format_created_at(""), "Data inválida");
    }
}
