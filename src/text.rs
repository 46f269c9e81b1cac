//! Display text helpers shared by the CLI output and the TUI.

use jiff::Timestamp;

/// Compact relative age: "now", "5m", "2h", "3d".
pub fn relative_time(then: Timestamp, now: Timestamp) -> String {
    let secs = now.as_second().saturating_sub(then.as_second());
    if secs < 60 {
        return "now".to_string();
    }
    let mins = secs / 60;
    if mins < 60 {
        return format!("{mins}m");
    }
    let hours = mins / 60;
    if hours < 24 {
        return format!("{hours}h");
    }
    format!("{}d", hours / 24)
}

/// Compact count: "950", "2.4k", "1.2m". One decimal, truncated not rounded.
pub fn compact_count(n: u64) -> String {
    if n < 1_000 {
        return n.to_string();
    }
    let (tenths, suffix) = if n < 1_000_000 {
        (n / 100, "k")
    } else {
        (n / 100_000, "m")
    };
    if tenths % 10 == 0 {
        format!("{}{suffix}", tenths / 10)
    } else {
        format!("{}.{}{suffix}", tenths / 10, tenths % 10)
    }
}

/// Minutes:seconds label for voice message durations.
pub fn mmss(secs: u16) -> String {
    format!("{}:{:02}", secs / 60, secs % 60)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ts(second: i64) -> Timestamp {
        Timestamp::new(second, 0).unwrap()
    }

    #[test]
    fn relative_time_buckets() {
        let now = ts(1_000_000_000);

        let cases = [
            (now, "now"),
            (ts(1_000_000_000 - 59), "now"),
            (ts(1_000_000_000 - 60), "1m"),
            (ts(1_000_000_000 - 15 * 60), "15m"),
            (ts(1_000_000_000 - 2 * 3600), "2h"),
            (ts(1_000_000_000 - 3 * 86_400), "3d"),
        ];
        for (then, expected) in cases {
            assert_eq!(relative_time(then, now), expected);
        }
    }

    #[test]
    fn relative_time_future_is_now() {
        let now = ts(1_000_000_000);
        assert_eq!(relative_time(ts(1_000_000_300), now), "now");
    }

    #[test]
    fn compact_count_buckets() {
        let cases = [
            (0, "0"),
            (950, "950"),
            (1_000, "1k"),
            (2_453, "2.4k"),
            (12_500, "12.5k"),
            (1_000_000, "1m"),
            (1_250_000, "1.2m"),
        ];
        for (n, expected) in cases {
            assert_eq!(compact_count(n), expected);
        }
    }

    #[test]
    fn mmss_pads_seconds() {
        assert_eq!(mmss(12), "0:12");
        assert_eq!(mmss(94), "1:34");
    }
}
