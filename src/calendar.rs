use chrono::{DateTime, Local, NaiveDate, TimeZone};

pub const INVALID_DATE: &str = "Invalid Date";

/// Reads a route date as either `YYYY-MM-DD` or an RFC 3339 timestamp.
///
/// Timestamps resolve to their calendar date in local time. Anything else is
/// treated as an invalid date rather than rejected.
pub fn parse_day(raw: &str) -> Option<NaiveDate> {
    let trimmed = raw.trim();
    if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        return Some(date);
    }

    DateTime::parse_from_rfc3339(trimmed)
        .ok()
        .map(|timestamp| timestamp.with_timezone(&Local).date_naive())
}

/// True once the last millisecond of `day` lies strictly before `now`.
pub fn is_date_in_past_at<Tz: TimeZone>(day: Option<NaiveDate>, now: &DateTime<Tz>) -> bool {
    let Some(end_of_day) = day.and_then(|day| day.and_hms_milli_opt(23, 59, 59, 999)) else {
        return false;
    };
    end_of_day < now.naive_local()
}

pub fn day_of_week(day: Option<NaiveDate>) -> String {
    format_or_invalid(day, "%A")
}

pub fn day_and_month(day: Option<NaiveDate>) -> String {
    format_or_invalid(day, "%d/%m")
}

pub fn today_string() -> String {
    Local::now().date_naive().to_string()
}

fn format_or_invalid(day: Option<NaiveDate>, pattern: &str) -> String {
    match day {
        Some(day) => day.format(pattern).to_string(),
        None => INVALID_DATE.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, Utc};

    #[test]
    fn parses_plain_dates_and_timestamps() {
        let expected = NaiveDate::from_ymd_opt(2024, 1, 10);
        assert_eq!(parse_day("2024-01-10"), expected);
        assert_eq!(parse_day(" 2024-01-10 "), expected);
        assert_eq!(parse_day("2024-01-10T12:00:00+00:00"), expected);
    }

    #[test]
    fn malformed_dates_are_invalid() {
        assert_eq!(parse_day("tomorrow"), None);
        assert_eq!(parse_day("2024-13-45"), None);
        assert_eq!(day_of_week(None), INVALID_DATE);
        assert_eq!(day_and_month(None), INVALID_DATE);
        assert!(!is_date_in_past_at(None, &Local::now()));
    }

    #[test]
    fn labels_follow_the_calendar() {
        let day = NaiveDate::from_ymd_opt(2024, 1, 10);
        assert_eq!(day_of_week(day), "Wednesday");
        assert_eq!(day_and_month(day), "10/01");
    }

    #[test]
    fn yesterday_is_past_and_tomorrow_is_not() {
        let now = Local::now();
        let today = now.date_naive();

        assert!(is_date_in_past_at(Some(today - Duration::days(1)), &now));
        assert!(!is_date_in_past_at(Some(today), &now));
        assert!(!is_date_in_past_at(Some(today + Duration::days(1)), &now));
    }

    #[test]
    fn day_ends_at_its_last_millisecond() {
        let day = NaiveDate::from_ymd_opt(2024, 1, 10).unwrap();
        let last_moment = Utc.with_ymd_and_hms(2024, 1, 10, 23, 59, 59).unwrap();
        let next_morning = Utc.with_ymd_and_hms(2024, 1, 11, 0, 0, 0).unwrap();

        assert!(!is_date_in_past_at(Some(day), &last_moment));
        assert!(is_date_in_past_at(Some(day), &next_morning));
    }
}
