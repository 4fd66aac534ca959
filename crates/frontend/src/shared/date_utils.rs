//! Utilities for date and time formatting
//!
//! Calendar dates come from `chrono`; "today" is the browser's local date.

use chrono::{DateTime, Local, NaiveDate, Utc};
use contracts::shared::filters::DateWindow;

pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// "15 Jan"
pub fn format_day_month(date: NaiveDate) -> String {
    date.format("%-d %b").to_string()
}

/// "15 Jan 2024"
pub fn format_date(date: NaiveDate) -> String {
    date.format("%-d %b %Y").to_string()
}

/// "2024-01-15", the value format of `<input type="date">`
pub fn format_iso(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

pub fn parse_iso(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").ok()
}

/// "Jan 1, 2024 - Jan 15, 2024"
pub fn format_window(window: DateWindow) -> String {
    format!(
        "{} - {}",
        window.start.format("%b %-d, %Y"),
        window.end.format("%b %-d, %Y")
    )
}

fn plural(n: i64, unit: &str) -> String {
    if n == 1 {
        format!("1 {}", unit)
    } else {
        format!("{} {}s", n, unit)
    }
}

/// Distance from `timestamp` to `now` in words, e.g. "about 3 hours ago"
pub fn format_relative(timestamp: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let seconds = (now - timestamp).num_seconds();
    if seconds < 0 {
        return "just now".to_string();
    }

    let minutes = (seconds as f64 / 60.0).round() as i64;
    let hours = (minutes as f64 / 60.0).round() as i64;
    let days = (hours as f64 / 24.0).round() as i64;

    let distance = if minutes < 1 {
        "less than a minute".to_string()
    } else if minutes < 45 {
        plural(minutes, "minute")
    } else if minutes < 90 {
        "about 1 hour".to_string()
    } else if hours < 24 {
        format!("about {}", plural(hours, "hour"))
    } else if days < 30 {
        plural(days, "day")
    } else if days < 365 {
        plural((days as f64 / 30.0).round() as i64, "month")
    } else {
        format!("about {}", plural(days / 365, "year"))
    };

    format!("{} ago", distance)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn at(h: u32, m: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, 15, h, m, 0).unwrap()
    }

    #[test]
    fn test_format_dates() {
        let date = NaiveDate::from_ymd_opt(2024, 1, 5).unwrap();
        assert_eq!(format_day_month(date), "5 Jan");
        assert_eq!(format_date(date), "5 Jan 2024");
        assert_eq!(format_iso(date), "2024-01-05");
        assert_eq!(parse_iso(" 2024-01-05 "), Some(date));
        assert_eq!(parse_iso("05/01/2024"), None);
        let window = DateWindow::new(date, NaiveDate::from_ymd_opt(2024, 1, 15).unwrap());
        assert_eq!(format_window(window), "Jan 5, 2024 - Jan 15, 2024");
    }

    #[test]
    fn test_format_relative() {
        let now = at(12, 0);
        assert_eq!(format_relative(at(11, 59), now), "1 minute ago");
        assert_eq!(format_relative(at(11, 30), now), "30 minutes ago");
        assert_eq!(format_relative(at(11, 0), now), "about 1 hour ago");
        assert_eq!(format_relative(at(9, 0), now), "about 3 hours ago");
        assert_eq!(format_relative(now - Duration::days(3), now), "3 days ago");
        assert_eq!(format_relative(now - Duration::days(65), now), "2 months ago");
        assert_eq!(format_relative(now, now), "less than a minute ago");
        assert_eq!(format_relative(now + Duration::minutes(5), now), "just now");
    }
}
