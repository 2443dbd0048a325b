//! Parsing of the date strings produced by HTML date and time inputs.

use chrono::{Local, NaiveDate, NaiveDateTime};

/// Time suffix appended to a date to mark the start of the day.
pub const START_OF_DAY: &str = "T00:00:00";

/// Time suffix appended to a date to mark the end of the day.
pub const END_OF_DAY: &str = "T23:59:59";

/// Today's date in the local time zone.
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Parse `YYYY-MM-DD`, or the date part of an ISO datetime.
pub fn parse_date(value: &str) -> Option<NaiveDate> {
    let value = value.trim();
    let date_part = value.split_once('T').map_or(value, |(date, _)| date);
    NaiveDate::parse_from_str(date_part, "%Y-%m-%d").ok()
}

/// Parse an ISO datetime as emitted by the forms.
///
/// Accepts `YYYY-MM-DDTHH:MM:SS` (optionally with fractional seconds),
/// `YYYY-MM-DDTHH:MM`, and a bare `YYYY-MM-DD` which is read as midnight.
pub fn parse_datetime(value: &str) -> Option<NaiveDateTime> {
    let value = value.trim();
    NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S%.f")
        .or_else(|_| NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M"))
        .ok()
        .or_else(|| {
            NaiveDate::parse_from_str(value, "%Y-%m-%d")
                .ok()
                .and_then(|d| d.and_hms_opt(0, 0, 0))
        })
}

/// Whole years elapsed between `birth` and `today`, counting a birthday
/// only once its month and day have been reached.
pub fn age_on(birth: NaiveDate, today: NaiveDate) -> i32 {
    use chrono::Datelike;

    let mut years = today.year() - birth.year();
    if (today.month(), today.day()) < (birth.month(), birth.day()) {
        years -= 1;
    }
    years
}
