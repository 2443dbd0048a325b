//! Mission lifecycle status and period display.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::dates;

/// Where a mission stands relative to a point in time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MissionStatus {
    Upcoming,
    InProgress,
    Finished,
    /// A bound is missing or unparseable.
    Unknown,
}

impl MissionStatus {
    /// Status of the period `[start, end]` at `now`. Both bounds are
    /// inclusive.
    pub fn at(start: &str, end: &str, now: NaiveDateTime) -> Self {
        let (Some(start), Some(end)) = (dates::parse_datetime(start), dates::parse_datetime(end))
        else {
            return Self::Unknown;
        };
        if now < start {
            Self::Upcoming
        } else if now <= end {
            Self::InProgress
        } else {
            Self::Finished
        }
    }

    /// Label shown on mission cards.
    pub fn label(self) -> &'static str {
        match self {
            Self::Upcoming => "À venir",
            Self::InProgress => "En cours",
            Self::Finished => "Terminée",
            Self::Unknown => "Inconnu",
        }
    }
}

/// Render a period as `dd/mm/yyyy - dd/mm/yyyy`. Empty when either bound
/// is missing or unparseable.
pub fn format_date_range(start: &str, end: &str) -> String {
    match (dates::parse_date(start), dates::parse_date(end)) {
        (Some(start), Some(end)) => format!(
            "{} - {}",
            start.format("%d/%m/%Y"),
            end.format("%d/%m/%Y")
        ),
        _ => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(s: &str) -> NaiveDateTime {
        dates::parse_datetime(s).unwrap()
    }

    #[test]
    fn status_follows_the_clock() {
        let (start, end) = ("2026-06-01T09:00:00", "2026-06-01T17:00:00");
        assert_eq!(
            MissionStatus::at(start, end, at("2026-06-01T08:59:59")),
            MissionStatus::Upcoming
        );
        assert_eq!(
            MissionStatus::at(start, end, at("2026-06-01T09:00:00")),
            MissionStatus::InProgress
        );
        assert_eq!(
            MissionStatus::at(start, end, at("2026-06-01T17:00:00")),
            MissionStatus::InProgress
        );
        assert_eq!(
            MissionStatus::at(start, end, at("2026-06-02T00:00:00")),
            MissionStatus::Finished
        );
        assert_eq!(
            MissionStatus::at("", end, at("2026-06-01T10:00:00")).label(),
            "Inconnu"
        );
    }

    #[test]
    fn date_range_uses_french_order() {
        assert_eq!(
            format_date_range("2026-06-01T09:00:00", "2026-06-15"),
            "01/06/2026 - 15/06/2026"
        );
        assert_eq!(format_date_range("", "2026-06-15"), "");
    }
}
