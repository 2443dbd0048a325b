//! Mission period validation.

use chrono::{NaiveDate, NaiveDateTime};

use crate::dates;

use super::result::ValidationResult;

pub const START_DATE: &str = "startDate";
pub const END_DATE: &str = "endDate";

/// Validate a mission period against the local date.
///
/// See [`validate_mission_dates_on`].
pub fn validate_mission_dates(
    start: Option<&str>,
    end: Option<&str>,
    allow_past_dates: bool,
) -> ValidationResult {
    validate_mission_dates_on(start, end, allow_past_dates, dates::today())
}

/// Validate a mission period: both bounds are required, parseable, not
/// before `today` unless `allow_past_dates` is set (time of day ignored),
/// and ordered. An inverted period flags both `startDate` and `endDate`.
pub fn validate_mission_dates_on(
    start: Option<&str>,
    end: Option<&str>,
    allow_past_dates: bool,
    today: NaiveDate,
) -> ValidationResult {
    let mut result = check_period(start, end, allow_past_dates, today);

    if present(start).is_none() {
        result.insert(START_DATE, "La date de début est obligatoire.");
    }
    if present(end).is_none() {
        result.insert(END_DATE, "La date de fin est obligatoire.");
    }

    result
}

/// Range checks for whichever bounds are present. Absent bounds are not
/// an error here; the search filter allows an open range.
pub(crate) fn check_period(
    start: Option<&str>,
    end: Option<&str>,
    allow_past_dates: bool,
    today: NaiveDate,
) -> ValidationResult {
    let mut result = ValidationResult::new();

    let start = present(start).map(|raw| {
        check_bound(
            &mut result,
            START_DATE,
            raw,
            allow_past_dates,
            today,
            BoundLabels {
                invalid: "Format de date de début invalide.",
                past: "La date de début ne peut pas être dans le passé.",
            },
        )
    });
    let end = present(end).map(|raw| {
        check_bound(
            &mut result,
            END_DATE,
            raw,
            allow_past_dates,
            today,
            BoundLabels {
                invalid: "Format de date de fin invalide.",
                past: "La date de fin ne peut pas être dans le passé.",
            },
        )
    });

    if let (Some(Some(start)), Some(Some(end))) = (start, end) {
        if start > end {
            result.insert(
                START_DATE,
                "La date de début doit être antérieure à la date de fin.",
            );
            result.insert(
                END_DATE,
                "La date de fin doit être postérieure à la date de début.",
            );
        }
    }

    result
}

struct BoundLabels {
    invalid: &'static str,
    past: &'static str,
}

fn present(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

/// Parse one bound, recording format and past-date errors. Returns the
/// parsed value when it is usable for the ordering check.
fn check_bound(
    result: &mut ValidationResult,
    key: &str,
    raw: &str,
    allow_past_dates: bool,
    today: NaiveDate,
    labels: BoundLabels,
) -> Option<NaiveDateTime> {
    let Some(parsed) = dates::parse_datetime(raw) else {
        result.insert(key, labels.invalid);
        return None;
    };
    if !allow_past_dates && parsed.date() < today {
        result.insert(key, labels.past);
    }
    Some(parsed)
}
