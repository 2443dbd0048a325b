//! Account registration validation.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::dates;
use crate::types::{Address, Role};

use super::address::validate_address;
use super::primitives::{
    validate_confirm_password, validate_email, validate_french_phone, validate_majority_on,
    validate_password, validate_required_text, validate_rna, DEFAULT_EMAIL_MAX_LEN,
    DEFAULT_PASSWORD_MAX_LEN,
};
use super::result::ValidationResult;

/// Maximum length of the display name (person or association).
pub const NAME_MAX_LEN: usize = 120;

/// Key of the confirmation error; the register form names the input
/// `confirmationPassword`.
pub const CONFIRMATION_KEY: &str = "confirmationPassword";

/// Prefix for address errors in the registration result.
pub const ADDRESS_PREFIX: &str = "address";

/// Fields submitted by the registration form.
///
/// `birth_date` only matters for volunteers and `rna` only for
/// organizations; the other one is ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RegistrationFields {
    pub email: String,
    pub password: String,
    #[serde(rename = "confirmationPassword", alias = "passwordConfirmation")]
    pub password_confirmation: String,
    pub phone_number: String,
    pub name: String,
    pub birth_date: Option<String>,
    pub rna: Option<String>,
    pub address: Address,
}

/// Validate a registration against the local date.
pub fn validate_registration(fields: &RegistrationFields, role: Role) -> ValidationResult {
    validate_registration_on(fields, role, dates::today())
}

/// Validate a registration. Volunteers must be of age; organizations must
/// supply an RNA number. Address errors are keyed `address.<field>`.
pub fn validate_registration_on(
    fields: &RegistrationFields,
    role: Role,
    today: NaiveDate,
) -> ValidationResult {
    let mut result = ValidationResult::new();

    result.record("email", validate_email(&fields.email, DEFAULT_EMAIL_MAX_LEN));
    result.record(
        "password",
        validate_password(&fields.password, DEFAULT_PASSWORD_MAX_LEN),
    );
    result.record(
        CONFIRMATION_KEY,
        validate_confirm_password(&fields.password, &fields.password_confirmation),
    );
    result.record("phoneNumber", validate_french_phone(&fields.phone_number));
    result.record(
        "name",
        validate_required_text(&fields.name, "Le nom", Some(NAME_MAX_LEN)),
    );

    match role {
        Role::Volunteer => result.record(
            "birthDate",
            validate_majority_on(
                fields.birth_date.as_deref().unwrap_or_default(),
                "La date de naissance",
                today,
            ),
        ),
        Role::Organization => {
            result.record("rna", validate_rna(fields.rna.as_deref().unwrap_or_default()))
        }
    }

    result.merge_prefixed(ADDRESS_PREFIX, validate_address(&fields.address));

    result
}
