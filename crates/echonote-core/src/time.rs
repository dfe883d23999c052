//! Relative timestamp formatting for note cards.

const MINUTE_MS: i64 = 60_000;
const HOUR_MS: i64 = 60 * MINUTE_MS;
const DAY_MS: i64 = 24 * HOUR_MS;
const WEEK_MS: i64 = 7 * DAY_MS;
const MONTH_MS: i64 = 30 * DAY_MS;
const YEAR_MS: i64 = 365 * DAY_MS;

/// Format a timestamp as a short relative-time string ("just now", "5m ago").
///
/// Future timestamps clamp to "just now".
#[must_use]
pub fn format_relative_time(timestamp_ms: i64, now_ms: i64) -> String {
    let diff = now_ms.saturating_sub(timestamp_ms);

    let units = [
        (YEAR_MS, "y"),
        (MONTH_MS, "mo"),
        (WEEK_MS, "w"),
        (DAY_MS, "d"),
        (HOUR_MS, "h"),
        (MINUTE_MS, "m"),
    ];

    for (unit_ms, suffix) in units {
        if diff >= unit_ms {
            return format!("{}{suffix} ago", diff / unit_ms);
        }
    }
    "just now".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn format_relative_time_units() {
        let now = 1_700_000_000_000;
        assert_eq!(format_relative_time(now - 30_000, now), "just now");
        assert_eq!(format_relative_time(now - 120_000, now), "2m ago");
        assert_eq!(format_relative_time(now - 2 * HOUR_MS, now), "2h ago");
        assert_eq!(format_relative_time(now - 3 * DAY_MS, now), "3d ago");
        assert_eq!(format_relative_time(now - 2 * WEEK_MS, now), "2w ago");
        assert_eq!(format_relative_time(now - 4 * MONTH_MS, now), "4mo ago");
        assert_eq!(format_relative_time(now - 2 * YEAR_MS, now), "2y ago");
    }

    #[test]
    fn future_timestamps_clamp_to_just_now() {
        let now = 1_700_000_000_000;
        assert_eq!(format_relative_time(now + HOUR_MS, now), "just now");
    }
}
