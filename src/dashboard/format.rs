use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

pub const NEVER: &str = "Never";
const DISPLAY_FORMAT: &str = "%Y-%m-%d %H:%M UTC";

const NAIVE_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
];

const OFFSET_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S%.f%:z",
    "%Y-%m-%d %H:%M:%S%.f%:z",
    "%Y-%m-%dT%H:%M%:z",
    "%Y-%m-%d %H:%M%:z",
];

pub fn format_cost(cost: f64) -> String {
    if cost < 0.01 {
        format!("${cost:.6}")
    } else if cost < 1.0 {
        format!("${cost:.4}")
    } else {
        format!("${cost:.2}")
    }
}

pub fn format_number(n: u64) -> String {
    if n >= 1_000_000 {
        format!("{:.1}M", n as f64 / 1_000_000.0)
    } else if n >= 10_000 {
        format!("{:.1}K", n as f64 / 1_000.0)
    } else {
        group_thousands(n)
    }
}

fn group_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (idx, ch) in digits.chars().enumerate() {
        if idx > 0 && (digits.len() - idx) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    // Surrounding whitespace is not ISO-8601; such input passes through.
    if raw.trim() != raw {
        return None;
    }
    let normalized = raw.replace('Z', "+00:00");
    // Offset-bearing input is shifted to UTC, not printed as local wall-clock time.
    if let Ok(dt) = DateTime::parse_from_rfc3339(&normalized) {
        return Some(dt.with_timezone(&Utc));
    }
    for fmt in OFFSET_FORMATS {
        if let Ok(dt) = DateTime::parse_from_str(&normalized, fmt) {
            return Some(dt.with_timezone(&Utc));
        }
    }
    for fmt in NAIVE_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(&normalized, fmt) {
            return Some(naive.and_utc());
        }
    }
    NaiveDate::parse_from_str(&normalized, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

/// Render an ISO-8601 timestamp as `YYYY-MM-DD HH:MM UTC`. Blank input and
/// the `Never` marker render as `Never`; anything unparseable is returned as-is.
pub fn format_datetime(raw: &str) -> String {
    if raw.is_empty() || raw == NEVER {
        return NEVER.to_string();
    }
    match parse_timestamp(raw) {
        Some(dt) => dt.format(DISPLAY_FORMAT).to_string(),
        None => raw.to_string(),
    }
}

pub fn format_last_run(last_run: Option<&str>) -> String {
    format_datetime(last_run.unwrap_or(NEVER))
}

pub fn generation_stamp(now: DateTime<Utc>) -> String {
    now.format(DISPLAY_FORMAT).to_string()
}

pub fn truncate_with_ellipsis(input: &str, max_chars: usize) -> String {
    if input.chars().count() > max_chars {
        let mut s: String = input.chars().take(max_chars).collect();
        s.push_str("...");
        s
    } else {
        input.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn cost_precision_depends_on_magnitude() {
        assert_eq!(format_cost(0.0001), "$0.000100");
        assert_eq!(format_cost(0.0), "$0.000000");
        assert_eq!(format_cost(0.5), "$0.5000");
        assert_eq!(format_cost(12.3), "$12.30");
    }

    #[test]
    fn numbers_switch_to_suffixes_at_thresholds() {
        assert_eq!(format_number(0), "0");
        assert_eq!(format_number(999), "999");
        assert_eq!(format_number(9_999), "9,999");
        assert_eq!(format_number(10_500), "10.5K");
        assert_eq!(format_number(2_300_000), "2.3M");
    }

    #[test]
    fn group_thousands_inserts_separators() {
        assert_eq!(group_thousands(1_234), "1,234");
        assert_eq!(group_thousands(100), "100");
        assert_eq!(group_thousands(1_000_000), "1,000,000");
    }

    #[test]
    fn zulu_timestamp_renders_as_utc() {
        assert_eq!(format_datetime("2024-01-15T10:30:00Z"), "2024-01-15 10:30 UTC");
    }

    #[test]
    fn offset_and_naive_timestamps_render() {
        assert_eq!(
            format_datetime("2024-01-15T12:30:00+02:00"),
            "2024-01-15 10:30 UTC"
        );
        assert_eq!(
            format_datetime("2024-01-15T10:30:00.123456"),
            "2024-01-15 10:30 UTC"
        );
        assert_eq!(format_datetime("2024-01-15"), "2024-01-15 00:00 UTC");
    }

    #[test]
    fn offset_timestamps_without_seconds_render() {
        assert_eq!(
            format_datetime("2024-01-15T10:30+02:00"),
            "2024-01-15 08:30 UTC"
        );
        assert_eq!(
            format_datetime("2024-01-15 10:30-01:00"),
            "2024-01-15 11:30 UTC"
        );
    }

    #[test]
    fn padded_timestamp_passes_through_unchanged() {
        assert_eq!(
            format_datetime(" 2024-01-15T10:30:00Z"),
            " 2024-01-15T10:30:00Z"
        );
        assert_eq!(
            format_datetime("2024-01-15T10:30:00Z\n"),
            "2024-01-15T10:30:00Z\n"
        );
    }

    #[test]
    fn never_and_blank_render_as_never() {
        assert_eq!(format_datetime("Never"), "Never");
        assert_eq!(format_datetime(""), "Never");
        assert_eq!(format_last_run(None), "Never");
    }

    #[test]
    fn garbage_timestamp_passes_through() {
        assert_eq!(format_datetime("yesterday-ish"), "yesterday-ish");
        assert_eq!(format_datetime("2024-13-45T99:00:00Z"), "2024-13-45T99:00:00Z");
    }

    #[test]
    fn generation_stamp_uses_display_format() {
        let now = Utc.with_ymd_and_hms(2025, 6, 1, 8, 5, 59).unwrap();
        assert_eq!(generation_stamp(now), "2025-06-01 08:05 UTC");
    }

    #[test]
    fn titles_over_limit_are_cut_with_ellipsis() {
        let long = "a".repeat(61);
        assert_eq!(truncate_with_ellipsis(&long, 60), format!("{}...", "a".repeat(60)));
        let exact = "b".repeat(60);
        assert_eq!(truncate_with_ellipsis(&exact, 60), exact);
        assert_eq!(truncate_with_ellipsis("short", 60), "short");
    }

    #[test]
    fn truncation_counts_characters_not_bytes() {
        let title = "é".repeat(61);
        let cut = truncate_with_ellipsis(&title, 60);
        assert_eq!(cut.chars().count(), 63);
    }
}
