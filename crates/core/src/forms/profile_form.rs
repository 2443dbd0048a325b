//! Personal space forms: profile update and skill entry.

use serde::{Deserialize, Serialize};

use crate::types::{Address, AddressField, DbId};
use crate::validation::primitives::{
    validate_confirm_password, validate_french_phone, validate_password, validate_required_text,
    DEFAULT_PASSWORD_MAX_LEN,
};
use crate::validation::{validate_address, ValidationResult};

// ---------------------------------------------------------------------------
// Profile
// ---------------------------------------------------------------------------

/// Editable part of the user profile. The password is only changed when
/// a new one is typed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProfileForm {
    pub phone_number: String,
    pub password: String,
    pub password_confirmation: String,
    pub address: Address,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProfileAction {
    SetPhoneNumber(String),
    SetPassword(String),
    SetPasswordConfirmation(String),
    SetAddressField(AddressField, String),
}

/// Body of the profile update request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileUpdate {
    pub phone_number: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    // Backend field name.
    #[serde(rename = "userAdressList")]
    pub addresses: Vec<Address>,
}

impl ProfileForm {
    /// Prefill from the loaded profile and its first address.
    pub fn from_profile(phone_number: &str, address: Option<&Address>) -> Self {
        Self {
            phone_number: phone_number.to_string(),
            address: address.cloned().unwrap_or_default(),
            ..Self::default()
        }
    }

    pub fn reduce(mut self, action: ProfileAction) -> Self {
        match action {
            ProfileAction::SetPhoneNumber(phone) => self.phone_number = phone,
            ProfileAction::SetPassword(password) => self.password = password,
            ProfileAction::SetPasswordConfirmation(confirmation) => {
                self.password_confirmation = confirmation
            }
            ProfileAction::SetAddressField(field, value) => *self.address.field_mut(field) = value,
        }
        self
    }

    pub fn update_request(&self) -> Result<ProfileUpdate, ValidationResult> {
        let mut errors = ValidationResult::new();

        errors.record("phoneNumber", validate_french_phone(&self.phone_number));

        let changes_password = !self.password.is_empty() || !self.password_confirmation.is_empty();
        if changes_password {
            errors.record(
                "password",
                validate_password(&self.password, DEFAULT_PASSWORD_MAX_LEN),
            );
            errors.record(
                "passwordConfirmation",
                validate_confirm_password(&self.password, &self.password_confirmation),
            );
        }

        errors.merge_prefixed("address", validate_address(&self.address));

        errors.into_result(ProfileUpdate {
            phone_number: self.phone_number.clone(),
            password: changes_password.then(|| self.password.clone()),
            addresses: vec![self.address.clone()],
        })
    }
}

// ---------------------------------------------------------------------------
// Skills
// ---------------------------------------------------------------------------

/// A skill a volunteer declares: free label, grade and catalog type.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillDraft {
    pub label_skill: String,
    pub grade: String,
    pub skill_type_label: String,
    pub volunteer_id: DbId,
}

impl SkillDraft {
    /// All three fields are required. When `grades` is non-empty the
    /// grade must be one of them.
    pub fn validate(&self, grades: &[String]) -> ValidationResult {
        let mut errors = ValidationResult::new();
        errors.record(
            "labelSkill",
            validate_required_text(&self.label_skill, "L'intitulé", None),
        );
        errors.record(
            "grade",
            validate_required_text(&self.grade, "Le niveau", None),
        );
        errors.record(
            "skillTypeLabel",
            validate_required_text(&self.skill_type_label, "Le type de compétence", None),
        );
        if !errors.contains("grade") && !grades.is_empty() && !grades.contains(&self.grade) {
            errors.insert("grade", "Niveau inconnu.");
        }
        errors
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn address() -> Address {
        Address {
            street_number: "8".into(),
            street_name: "quai des Chartrons".into(),
            postal_code: "33000".into(),
            city: "Bordeaux".into(),
        }
    }

    #[test]
    fn update_without_password_change() {
        let update = ProfileForm::from_profile("0556000000", Some(&address()))
            .update_request()
            .unwrap();
        assert_eq!(update.password, None);
        let json = serde_json::to_value(&update).unwrap();
        assert!(json.get("password").is_none());
        assert_eq!(json["userAdressList"][0]["city"], "Bordeaux");
    }

    #[test]
    fn password_change_needs_matching_confirmation() {
        let form = ProfileForm::from_profile("0556000000", Some(&address()))
            .reduce(ProfileAction::SetPassword("Nouveau1".into()));
        let errors = form.clone().update_request().unwrap_err();
        assert!(errors.contains("passwordConfirmation"));
        assert_eq!(errors.len(), 1);

        let update = form
            .reduce(ProfileAction::SetPasswordConfirmation("Nouveau1".into()))
            .update_request()
            .unwrap();
        assert_eq!(update.password.as_deref(), Some("Nouveau1"));
    }

    #[test]
    fn confirmation_alone_flags_missing_password() {
        let errors = ProfileForm::from_profile("0556000000", Some(&address()))
            .reduce(ProfileAction::SetPasswordConfirmation("x".into()))
            .update_request()
            .unwrap_err();
        assert!(errors.contains("password"));
    }

    #[test]
    fn phone_and_address_are_validated() {
        let errors = ProfileForm::from_profile("12", None)
            .reduce(ProfileAction::SetAddressField(AddressField::City, "Nantes".into()))
            .update_request()
            .unwrap_err();
        assert!(errors.contains("phoneNumber"));
        assert!(errors.contains("address.postalCode"));
        assert!(!errors.contains("address.city"));
    }

    #[test]
    fn skill_draft_requires_all_fields() {
        let grades = vec!["Débutant".to_string(), "Expert".to_string()];
        let draft = SkillDraft {
            label_skill: "Permis poids lourd".into(),
            grade: "Expert".into(),
            skill_type_label: "Logistique".into(),
            volunteer_id: 12,
        };
        assert!(draft.validate(&grades).is_valid());

        let unknown_grade = SkillDraft {
            grade: "Maître".into(),
            ..draft.clone()
        };
        assert_eq!(
            unknown_grade.validate(&grades).get("grade"),
            Some("Niveau inconnu.")
        );
        assert!(unknown_grade.validate(&[]).is_valid());

        assert_eq!(SkillDraft::default().validate(&grades).len(), 3);
    }
}
