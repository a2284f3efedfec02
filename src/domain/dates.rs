//! Date parsing and formatting shared by loaders and forms.
//!
//! The upstream policy-management exports deliver dates in several shapes
//! (ISO, US slashes, timestamps). Whatever arrives, the forms always carry
//! `YYYY-MM-DD`.

use chrono::{Datelike, NaiveDate, NaiveDateTime};

/// Canonical date representation used across every form field.
pub const FORM_DATE_FORMAT: &str = "%Y-%m-%d";

const ACCEPTED_FORMATS: [&str; 4] = ["%Y-%m-%d", "%m/%d/%Y", "%d-%m-%Y", "%Y/%m/%d"];

/// Parses a date from any of the accepted input shapes.
///
/// Timestamps are accepted by truncating the time component. Returns `None`
/// for empty or unparseable input.
pub fn parse_date_input(value: &str) -> Option<NaiveDate> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }

    for format in ACCEPTED_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(trimmed, format) {
            return Some(date);
        }
    }

    // ISO timestamps ("2024-03-01T00:00:00" or with a space separator).
    for format in ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M:%S"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(trimmed, format) {
            return Some(dt.date());
        }
    }

    None
}

/// Formats a date in the canonical `YYYY-MM-DD` form; `None` becomes `""`.
pub fn format_form_date(date: Option<NaiveDate>) -> String {
    date.map(|d| d.format(FORM_DATE_FORMAT).to_string())
        .unwrap_or_default()
}

/// Advances a date by exactly one calendar year.
///
/// February 29th is clamped to the 28th on non-leap targets.
pub fn add_one_year(date: NaiveDate) -> NaiveDate {
    let year = date.year() + 1;
    if let Some(advanced) = date.with_year(year) {
        return advanced;
    }
    NaiveDate::from_ymd_opt(year, 2, 28).unwrap_or(date)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_all_accepted_shapes() {
        let expected = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
        assert_eq!(parse_date_input("2024-03-01"), Some(expected));
        assert_eq!(parse_date_input("03/01/2024"), Some(expected));
        assert_eq!(parse_date_input("01-03-2024"), Some(expected));
        assert_eq!(parse_date_input("2024-03-01T00:00:00"), Some(expected));
        assert_eq!(parse_date_input(""), None);
        assert_eq!(parse_date_input("not a date"), None);
    }

    #[test]
    fn formats_none_as_empty_string() {
        assert_eq!(format_form_date(None), "");
        assert_eq!(
            format_form_date(NaiveDate::from_ymd_opt(2024, 12, 31)),
            "2024-12-31"
        );
    }

    #[test]
    fn one_year_advance_keeps_month_and_day() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
        assert_eq!(
            add_one_year(date),
            NaiveDate::from_ymd_opt(2025, 3, 1).unwrap()
        );
    }

    #[test]
    fn leap_day_clamps_to_end_of_february() {
        let date = NaiveDate::from_ymd_opt(2024, 2, 29).unwrap();
        assert_eq!(
            add_one_year(date),
            NaiveDate::from_ymd_opt(2025, 2, 28).unwrap()
        );
    }
}
