//! Capture timestamp token: `HHMMSS.mmm-AM|PM-DD-Mon-YYYY`.

use chrono::{NaiveDate, NaiveDateTime};

const MONTHS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Parse a capture time token.
///
/// Returns `None` when any component is missing, non-numeric, or names an
/// unknown month, or when the resulting date does not exist.
pub fn parse_capture_time(token: &str) -> Option<NaiveDateTime> {
    let mut parts = token.split('-');
    let time_part = parts.next()?;
    let period = parts.next()?;
    let day: u32 = parts.next()?.parse().ok()?;
    let month = month_number(parts.next()?)?;
    let year: i32 = parts.next()?.trim().parse().ok()?;

    // Milliseconds are optional.
    let (hhmmss, millis) = match time_part.split_once('.') {
        Some((hms, ms)) => (hms, ms.parse::<u32>().ok()?),
        None => (time_part, 0),
    };
    if millis > 999 {
        return None;
    }

    let mut hours: u32 = hhmmss.get(0..2)?.parse().ok()?;
    let minutes: u32 = hhmmss.get(2..4)?.parse().ok()?;
    let seconds: u32 = hhmmss.get(4..6)?.parse().ok()?;

    match period {
        "PM" if hours < 12 => hours += 12,
        "AM" if hours == 12 => hours = 0,
        _ => {}
    }

    NaiveDate::from_ymd_opt(year, month, day)?.and_hms_milli_opt(hours, minutes, seconds, millis)
}

/// Format as `HH:MM:SS DD/MM/YY`.
pub fn format_capture_time(time: &NaiveDateTime) -> String {
    time.format("%H:%M:%S %d/%m/%y").to_string()
}

/// 1-based month number for a three-letter abbreviation.
fn month_number(abbrev: &str) -> Option<u32> {
    MONTHS
        .iter()
        .position(|m| *m == abbrev)
        .map(|idx| idx as u32 + 1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, Timelike};

    #[test]
    fn pm_afternoon_converts_to_24h() {
        let time = parse_capture_time("111407.893-PM-25-Aug-2025").unwrap();
        assert_eq!(format_capture_time(&time), "23:14:07 25/08/25");
        assert_eq!(time.nanosecond() / 1_000_000, 893);
    }

    #[test]
    fn noon_and_midnight() {
        let noon = parse_capture_time("120000.000-PM-01-Jan-2024").unwrap();
        assert_eq!(noon.hour(), 12);

        let midnight = parse_capture_time("120501.000-AM-01-Jan-2024").unwrap();
        assert_eq!(format_capture_time(&midnight), "00:05:01 01/01/24");
    }

    #[test]
    fn morning_hours_unchanged() {
        let time = parse_capture_time("093000.5-AM-09-Dec-2009").unwrap();
        assert_eq!(format_capture_time(&time), "09:30:00 09/12/09");
        assert_eq!(time.month(), 12);
    }

    #[test]
    fn missing_millis_is_zero() {
        let time = parse_capture_time("010203-AM-02-Feb-2020").unwrap();
        assert_eq!(format_capture_time(&time), "01:02:03 02/02/20");
    }

    #[test]
    fn unknown_month_fails_date_only() {
        assert!(parse_capture_time("111407.893-PM-25-Foo-2025").is_none());
    }

    #[test]
    fn malformed_tokens_are_rejected() {
        assert!(parse_capture_time("").is_none());
        assert!(parse_capture_time("1114-PM-25-Aug-2025").is_none());
        assert!(parse_capture_time("111407.893-PM-xx-Aug-2025").is_none());
        assert!(parse_capture_time("111407.893-PM-25-Aug").is_none());
        assert!(parse_capture_time("111407.893-PM-31-Feb-2025").is_none());
        assert!(parse_capture_time("117007.893-PM-25-Aug-2025").is_none());
    }

    #[test]
    fn out_of_range_millis_are_rejected() {
        assert!(parse_capture_time("115959.1500-PM-31-Dec-2025").is_none());
        assert!(parse_capture_time("115959.1000-PM-31-Dec-2025").is_none());

        let last = parse_capture_time("115959.999-PM-31-Dec-2025").unwrap();
        assert_eq!(format_capture_time(&last), "23:59:59 31/12/25");
        assert_eq!(last.nanosecond() / 1_000_000, 999);
    }
}
