// Shared display formatters

use chrono::{DateTime, Datelike, Utc};

/// Format a large number with commas for readability
pub fn format_number(n: u64) -> String {
    let s = n.to_string();
    let mut result = String::new();

    for (count, ch) in s.chars().rev().enumerate() {
        if count > 0 && count % 3 == 0 {
            result.insert(0, ',');
        }
        result.insert(0, ch);
    }

    result
}

/// "Oct 15, 2023"
pub fn format_date(dt: DateTime<Utc>) -> String {
    dt.format("%b %-d, %Y").to_string()
}

/// "10:00 AM"
pub fn format_time(dt: DateTime<Utc>) -> String {
    dt.format("%-I:%M %p").to_string()
}

/// "Sunday, October 15, 2023"
pub fn format_long_date(dt: DateTime<Utc>) -> String {
    dt.format("%A, %B %-d, %Y").to_string()
}

/// Three-letter month name for chart axes, 1-based
pub fn month_abbrev(month: u32) -> &'static str {
    match month {
        1 => "Jan",
        2 => "Feb",
        3 => "Mar",
        4 => "Apr",
        5 => "May",
        6 => "Jun",
        7 => "Jul",
        8 => "Aug",
        9 => "Sep",
        10 => "Oct",
        11 => "Nov",
        12 => "Dec",
        _ => "?",
    }
}

/// Month index (0-11) of a timestamp, for bucketing registrations
pub fn month_index(dt: DateTime<Utc>) -> usize {
    (dt.month() - 1) as usize
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn numbers_get_thousands_separators() {
        assert_eq!(format_number(42), "42");
        assert_eq!(format_number(1234), "1,234");
        assert_eq!(format_number(1234567), "1,234,567");
    }

    #[test]
    fn date_formats() {
        let dt = Utc.with_ymd_and_hms(2023, 10, 15, 10, 0, 0).unwrap();
        assert_eq!(format_date(dt), "Oct 15, 2023");
        assert_eq!(format_time(dt), "10:00 AM");
        assert_eq!(format_long_date(dt), "Sunday, October 15, 2023");
        assert_eq!(month_index(dt), 9);
        assert_eq!(month_abbrev(10), "Oct");
    }
}
