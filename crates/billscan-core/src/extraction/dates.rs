use chrono::NaiveDate;
use regex::Regex;
use std::sync::LazyLock;

static DATE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?-u:\b)([0-9]{1,2})[-/]([0-9]{1,2})[-/]([0-9]{2,4})(?-u:\b)")
        .expect("date pattern is a valid regex")
});

/// Find the date of service as `YYYY-MM-DD`.
///
/// Only the first `M/D/Y` (or `M-D-Y`) shaped substring is considered. If it
/// is not a real calendar date the result is empty, even when a later match
/// would have parsed.
pub fn extract_date_of_service(text: &str) -> String {
    DATE_RE
        .captures(text)
        .and_then(|caps| {
            let month: u32 = caps[1].parse().ok()?;
            let day: u32 = caps[2].parse().ok()?;
            let year = expand_year(&caps[3])?;
            NaiveDate::from_ymd_opt(year, month, day)
        })
        .map(|date| date.format("%Y-%m-%d").to_string())
        .unwrap_or_default()
}

/// Two-digit years pivot at 50: `24` is 2024, `87` is 1987.
fn expand_year(raw: &str) -> Option<i32> {
    let year: i32 = raw.parse().ok()?;
    Some(match raw.len() {
        2 if year < 50 => 2000 + year,
        2 => 1900 + year,
        _ => year,
    })
}
