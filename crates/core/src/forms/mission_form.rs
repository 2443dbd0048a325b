//! Mission creation form state.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::dates::START_OF_DAY;
use crate::types::{Address, AddressField, DbId, SkillType};
use crate::validation::primitives::validate_required_text;
use crate::validation::{validate_address, validate_mission_dates_on, ValidationResult};

/// Mission period as sent to the backend. Bounds are ISO datetimes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MissionPeriod {
    pub period_id: Option<DbId>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
}

/// Which bound of the period an input edits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PeriodBound {
    Start,
    End,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MissionForm {
    pub title: String,
    pub description: String,
    pub volunteer_count: String,
    pub address: Address,
    /// Merged `YYYY-MM-DDTHH:MM:SS` values, empty until a date is picked.
    pub start_date: String,
    pub end_date: String,
    pub skills: Vec<SkillType>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MissionAction {
    SetTitle(String),
    SetDescription(String),
    SetVolunteerCount(String),
    SetAddressField(AddressField, String),
    /// Value of a date input (`YYYY-MM-DD`).
    SetDate(PeriodBound, String),
    /// Value of a time input (`HH:MM` or `HH:MM:SS`).
    SetTime(PeriodBound, String),
    /// Add a required skill; ignored if the id is already listed.
    AddSkill(SkillType),
    RemoveSkill(DbId),
    Reset,
}

/// Validated mission ready for `POST /mission`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MissionDraft {
    pub title: String,
    pub description: String,
    pub mission_skills_type_list: Vec<SkillType>,
    pub nb_volunteer_search: u32,
    // Backend field name.
    #[serde(rename = "adress")]
    pub address: Address,
    pub period: MissionPeriod,
}

impl MissionForm {
    pub fn reduce(mut self, action: MissionAction) -> Self {
        match action {
            MissionAction::SetTitle(title) => self.title = title,
            MissionAction::SetDescription(description) => self.description = description,
            MissionAction::SetVolunteerCount(count) => self.volunteer_count = count,
            MissionAction::SetAddressField(field, value) => *self.address.field_mut(field) = value,
            MissionAction::SetDate(bound, date) => {
                let slot = self.bound_mut(bound);
                *slot = merge_date_time(slot, Some(&date), None);
            }
            MissionAction::SetTime(bound, time) => {
                let slot = self.bound_mut(bound);
                *slot = merge_date_time(slot, None, Some(&time));
            }
            MissionAction::AddSkill(skill) => {
                if !self.skills.iter().any(|s| s.id == skill.id) {
                    self.skills.push(skill);
                }
            }
            MissionAction::RemoveSkill(id) => self.skills.retain(|s| s.id != id),
            MissionAction::Reset => return Self::default(),
        }
        self
    }

    fn bound_mut(&mut self, bound: PeriodBound) -> &mut String {
        match bound {
            PeriodBound::Start => &mut self.start_date,
            PeriodBound::End => &mut self.end_date,
        }
    }

    /// Validate the form and build the submission. Past periods are
    /// rejected relative to `today`.
    pub fn submission(&self, today: NaiveDate) -> Result<MissionDraft, ValidationResult> {
        let mut errors = ValidationResult::new();

        errors.record(
            "title",
            validate_required_text(&self.title, "Le titre", None),
        );
        errors.record(
            "description",
            validate_required_text(&self.description, "La description", None),
        );

        let volunteers = match self.volunteer_count.trim().parse::<u32>() {
            Ok(n) if n > 0 => n,
            _ => {
                errors.insert(
                    "nbVolunteerSearch",
                    "Le nombre de bénévoles doit être un entier positif.",
                );
                0
            }
        };

        errors.merge_prefixed("address", validate_address(&self.address));

        let period = MissionPeriod {
            period_id: None,
            start_date: Some(self.start_date.clone()).filter(|s| !s.is_empty()),
            end_date: Some(self.end_date.clone()).filter(|s| !s.is_empty()),
        };
        errors.merge_prefixed(
            "period",
            validate_mission_dates_on(
                period.start_date.as_deref(),
                period.end_date.as_deref(),
                false,
                today,
            ),
        );

        errors.into_result(MissionDraft {
            title: self.title.trim().to_string(),
            description: self.description.trim().to_string(),
            mission_skills_type_list: self.skills.clone(),
            nb_volunteer_search: volunteers,
            address: self.address.clone(),
            period,
        })
    }
}

/// Combine a stored `date T time` value with a new date or time part.
///
/// A five-character time gains `:00` seconds; a date without a time is
/// pinned to the start of the day; no date yields an empty value.
pub fn merge_date_time(current: &str, date: Option<&str>, time: Option<&str>) -> String {
    let (current_date, current_time) = current.split_once('T').unwrap_or((current, ""));

    let date = date.unwrap_or(current_date);
    let time = match time {
        Some(t) if t.len() == 5 => format!("{t}:00"),
        Some(t) => t.to_string(),
        None => current_time.to_string(),
    };

    match (date.is_empty(), time.is_empty()) {
        (true, _) => String::new(),
        (false, true) => format!("{date}{START_OF_DAY}"),
        (false, false) => format!("{date}T{time}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 6, 1).unwrap()
    }

    fn skill(id: DbId, label: &str) -> SkillType {
        SkillType {
            id,
            label: label.into(),
        }
    }

    fn filled() -> MissionForm {
        MissionForm::default()
            .reduce(MissionAction::SetTitle("Distribution alimentaire".into()))
            .reduce(MissionAction::SetDescription("Tri et distribution".into()))
            .reduce(MissionAction::SetVolunteerCount("4".into()))
            .reduce(MissionAction::SetAddressField(AddressField::StreetNumber, "5".into()))
            .reduce(MissionAction::SetAddressField(
                AddressField::StreetName,
                "rue de la Paix".into(),
            ))
            .reduce(MissionAction::SetAddressField(AddressField::PostalCode, "75002".into()))
            .reduce(MissionAction::SetAddressField(AddressField::City, "Paris".into()))
            .reduce(MissionAction::SetDate(PeriodBound::Start, "2026-06-10".into()))
            .reduce(MissionAction::SetTime(PeriodBound::Start, "09:30".into()))
            .reduce(MissionAction::SetDate(PeriodBound::End, "2026-06-10".into()))
            .reduce(MissionAction::SetTime(PeriodBound::End, "17:00".into()))
    }

    #[test]
    fn merge_date_and_time_parts() {
        assert_eq!(merge_date_time("", Some("2026-06-10"), None), "2026-06-10T00:00:00");
        assert_eq!(
            merge_date_time("2026-06-10T00:00:00", None, Some("09:30")),
            "2026-06-10T09:30:00"
        );
        assert_eq!(
            merge_date_time("2026-06-10T09:30:00", Some("2026-06-11"), None),
            "2026-06-11T09:30:00"
        );
        assert_eq!(merge_date_time("", None, Some("09:30")), "");
        assert_eq!(
            merge_date_time("2026-06-10T09:30:00", Some(""), None),
            ""
        );
    }

    #[test]
    fn skills_are_deduplicated_by_id() {
        let form = MissionForm::default()
            .reduce(MissionAction::AddSkill(skill(1, "Logistique")))
            .reduce(MissionAction::AddSkill(skill(1, "Logistique")))
            .reduce(MissionAction::AddSkill(skill(2, "Cuisine")))
            .reduce(MissionAction::RemoveSkill(1));
        assert_eq!(form.skills, [skill(2, "Cuisine")]);
    }

    #[test]
    fn filled_form_builds_draft() {
        let draft = filled()
            .reduce(MissionAction::AddSkill(skill(3, "Accueil")))
            .submission(today())
            .unwrap();
        assert_eq!(draft.nb_volunteer_search, 4);
        assert_eq!(draft.period.start_date.as_deref(), Some("2026-06-10T09:30:00"));
        assert_eq!(draft.period.end_date.as_deref(), Some("2026-06-10T17:00:00"));

        let json = serde_json::to_value(&draft).unwrap();
        assert_eq!(json["adress"]["postalCode"], "75002");
        assert_eq!(json["missionSkillsTypeList"][0]["label"], "Accueil");
        assert!(json["period"]["periodId"].is_null());
    }

    #[test]
    fn submission_reports_nested_errors() {
        let form = filled()
            .reduce(MissionAction::SetVolunteerCount("0".into()))
            .reduce(MissionAction::SetAddressField(AddressField::City, String::new()))
            .reduce(MissionAction::SetTime(PeriodBound::End, "08:00".into()));
        let errors = form.submission(today()).unwrap_err();
        assert!(errors.contains("nbVolunteerSearch"));
        assert!(errors.contains("address.city"));
        assert!(errors.contains("period.startDate"));
        assert!(errors.contains("period.endDate"));
        assert!(!errors.contains("title"));
    }

    #[test]
    fn empty_form_requires_period() {
        let errors = MissionForm::default().submission(today()).unwrap_err();
        assert!(errors.get("period.startDate").unwrap().contains("obligatoire"));
        assert!(errors.contains("title"));
        assert!(errors.contains("description"));
    }

    #[test]
    fn reset_clears_everything() {
        assert_eq!(filled().reduce(MissionAction::Reset), MissionForm::default());
    }
}
