//! Human-readable formatting for counts, ages and subreddit names.

const SUFFIXES: [&str; 5] = ["", "k", "M", "B", "T"];

const MINUTE: i64 = 60;
const HOUR: i64 = 60 * MINUTE;
const DAY: i64 = 24 * HOUR;

/// Compact rendering of a count: `1500` → `"1.5k"`, `2_300_000` → `"2.3M"`.
///
/// Values under 1000 are printed as plain integers. Larger values keep one
/// decimal, dropping a trailing `.0`.
pub fn format_large_number(value: i64) -> String {
    if value.unsigned_abs() < 1000 {
        return value.to_string();
    }

    let last_unit = SUFFIXES.len() - 1;
    let mut magnitude = value.unsigned_abs() as f64;
    let mut unit = 0;
    while magnitude >= 1000.0 && unit < last_unit {
        magnitude /= 1000.0;
        unit += 1;
    }
    // 999_950 would otherwise print as "1000k"
    if (magnitude * 10.0).round() / 10.0 >= 1000.0 && unit < last_unit {
        magnitude /= 1000.0;
        unit += 1;
    }

    let rendered = format!("{:.1}", magnitude);
    let rendered = rendered.strip_suffix(".0").unwrap_or(&rendered);
    let sign = if value < 0 { "-" } else { "" };
    format!("{}{}{}", sign, rendered, SUFFIXES[unit])
}

/// Relative age of `timestamp` as seen at `now`, in the coarsest whole unit.
pub fn time_ago(timestamp: i64, now: i64) -> String {
    let elapsed = now.saturating_sub(timestamp);
    if elapsed <= 0 {
        return "just now".to_string();
    }

    let (amount, unit) = if elapsed < MINUTE {
        (elapsed, "second")
    } else if elapsed < HOUR {
        (elapsed / MINUTE, "minute")
    } else if elapsed < DAY {
        (elapsed / HOUR, "hour")
    } else {
        (elapsed / DAY, "day")
    };

    if amount == 1 {
        format!("1 {} ago", unit)
    } else {
        format!("{} {}s ago", amount, unit)
    }
}

/// Normalizes user input such as `" /r/Rust/ "` to `"rust"`.
pub fn sanitize_subreddit(name: &str) -> String {
    let name = name.trim().to_lowercase();
    let name = name
        .strip_prefix("/r/")
        .or_else(|| name.strip_prefix("r/"))
        .unwrap_or(&name);
    name.trim_matches('/').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_large_number() {
        assert_eq!(format_large_number(42), "42");
        assert_eq!(format_large_number(999), "999");
        assert_eq!(format_large_number(1000), "1k");
        assert_eq!(format_large_number(1500), "1.5k");
        assert_eq!(format_large_number(2_300_000), "2.3M");
        assert_eq!(format_large_number(7_000_000_000), "7B");
        assert_eq!(format_large_number(-12_345), "-12.3k");
        assert_eq!(format_large_number(0), "0");
    }

    #[test]
    fn test_format_large_number_unit_rollover() {
        assert_eq!(format_large_number(999_949), "999.9k");
        assert_eq!(format_large_number(999_950), "1M");
        assert_eq!(format_large_number(5_000_000_000_000_000), "5000T");
    }

    #[test]
    fn test_time_ago() {
        let now = 1_700_000_000;
        assert_eq!(time_ago(now, now), "just now");
        assert_eq!(time_ago(now + 30, now), "just now");
        assert_eq!(time_ago(now - 1, now), "1 second ago");
        assert_eq!(time_ago(now - 59, now), "59 seconds ago");
        assert_eq!(time_ago(now - 60, now), "1 minute ago");
        assert_eq!(time_ago(now - 3_599, now), "59 minutes ago");
        assert_eq!(time_ago(now - 7_300, now), "2 hours ago");
        assert_eq!(time_ago(now - 86_400, now), "1 day ago");
        assert_eq!(time_ago(now - 10 * 86_400 - 5, now), "10 days ago");
    }

    #[test]
    fn test_sanitize_subreddit() {
        assert_eq!(sanitize_subreddit("rust"), "rust");
        assert_eq!(sanitize_subreddit(" r/Rust "), "rust");
        assert_eq!(sanitize_subreddit("/r/rust/"), "rust");
        assert_eq!(sanitize_subreddit("programming/"), "programming");
        assert_eq!(sanitize_subreddit(""), "");
    }
}
