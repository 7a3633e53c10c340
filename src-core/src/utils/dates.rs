//! Date helpers shared by the record parsers and the progress aggregator.
//!
//! Persisted records carry ISO strings: either a bare calendar date
//! (`2024-01-05`), an RFC 3339 timestamp (`2024-01-05T18:30:00+02:00`) or a
//! naive ISO datetime (`2024-01-05T18:30:00.000`). Everything is reduced to a
//! [`NaiveDate`] for day-granular work or to a UTC instant for ordering.

use chrono::{DateTime, Datelike, Months, NaiveDate, NaiveDateTime, Utc};

use crate::errors::ValidationError;

pub const DATE_FORMAT: &str = "%Y-%m-%d";
const NAIVE_DATETIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.f";

/// Calendar day of an ISO date or timestamp, time-of-day discarded.
///
/// Timestamps keep the day as written in their own offset, so a workout
/// logged at 23:30 local time stays on that local day.
pub fn parse_calendar_day(value: &str) -> Result<NaiveDate, ValidationError> {
    let value = value.trim();
    if let Ok(date) = NaiveDate::parse_from_str(value, DATE_FORMAT) {
        return Ok(date);
    }
    if let Ok(timestamp) = DateTime::parse_from_rfc3339(value) {
        return Ok(timestamp.date_naive());
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(value, NAIVE_DATETIME_FORMAT) {
        return Ok(naive.date());
    }
    Err(ValidationError::InvalidInput(format!(
        "'{}' is not a valid date",
        value
    )))
}

/// UTC instant of an ISO date or timestamp. A bare date is midnight UTC.
pub fn parse_timestamp(value: &str) -> Result<DateTime<Utc>, ValidationError> {
    let value = value.trim();
    if let Ok(timestamp) = DateTime::parse_from_rfc3339(value) {
        return Ok(timestamp.with_timezone(&Utc));
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(value, NAIVE_DATETIME_FORMAT) {
        return Ok(naive.and_utc());
    }
    if let Ok(date) = NaiveDate::parse_from_str(value, DATE_FORMAT) {
        if let Some(midnight) = date.and_hms_opt(0, 0, 0) {
            return Ok(midnight.and_utc());
        }
    }
    Err(ValidationError::InvalidInput(format!(
        "'{}' is not a valid timestamp",
        value
    )))
}

/// First day of the month containing `date`.
pub fn first_day_of_month(date: NaiveDate) -> NaiveDate {
    date.with_day(1).unwrap_or(date)
}

/// First day of the month `months` calendar months before `date`'s month.
pub fn months_before(date: NaiveDate, months: u32) -> Option<NaiveDate> {
    first_day_of_month(date).checked_sub_months(Months::new(months))
}

/// Short English month name used as a chart label (`Jan`, `Feb`, ...).
pub fn short_month_label(date: NaiveDate) -> String {
    date.format("%b").to_string()
}

pub fn format_day(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn parses_bare_dates_and_timestamps_to_days() {
        assert_eq!(parse_calendar_day("2024-01-05").unwrap(), ymd(2024, 1, 5));
        assert_eq!(
            parse_calendar_day("2024-01-05T23:30:00+02:00").unwrap(),
            ymd(2024, 1, 5)
        );
        assert_eq!(
            parse_calendar_day("2024-01-05T08:15:00.123Z").unwrap(),
            ymd(2024, 1, 5)
        );
        assert_eq!(
            parse_calendar_day("2024-01-05T08:15:00").unwrap(),
            ymd(2024, 1, 5)
        );
        assert_eq!(parse_calendar_day(" 2024-01-05 ").unwrap(), ymd(2024, 1, 5));
    }

    #[test]
    fn rejects_garbage_and_impossible_dates() {
        assert!(parse_calendar_day("").is_err());
        assert!(parse_calendar_day("yesterday").is_err());
        assert!(parse_calendar_day("2024-02-30").is_err());
        assert!(parse_timestamp("not a time").is_err());
    }

    #[test]
    fn timestamps_are_normalized_to_utc() {
        let ts = parse_timestamp("2024-03-01T01:00:00+02:00").unwrap();
        assert_eq!(ts.date_naive(), ymd(2024, 2, 29));

        let midnight = parse_timestamp("2024-03-01").unwrap();
        assert_eq!(midnight.to_rfc3339(), "2024-03-01T00:00:00+00:00");
    }

    #[test]
    fn month_arithmetic_crosses_years() {
        assert_eq!(months_before(ymd(2024, 2, 29), 0), Some(ymd(2024, 2, 1)));
        assert_eq!(months_before(ymd(2024, 2, 29), 3), Some(ymd(2023, 11, 1)));
        assert_eq!(short_month_label(ymd(2023, 11, 1)), "Nov");
        assert_eq!(format_day(ymd(2023, 11, 1)), "2023-11-01");
    }
}
