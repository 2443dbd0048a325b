//! Postal address validation.

use crate::types::{Address, AddressField};

use super::primitives::{validate_postal_code, validate_required_text};
use super::result::ValidationResult;

/// Maximum length of the street number ("12B", "3 bis").
pub const STREET_NUMBER_MAX_LEN: usize = 10;

/// Maximum length of the street name.
pub const STREET_NAME_MAX_LEN: usize = 60;

/// Maximum length of the city name.
pub const CITY_MAX_LEN: usize = 50;

/// Check all four fields of an address.
///
/// Every field is evaluated so the form can show all errors at once.
/// Keys are the bare field names (`streetNumber`, `postalCode`, ...).
pub fn validate_address(address: &Address) -> ValidationResult {
    let mut result = ValidationResult::new();

    result.record(
        AddressField::StreetNumber.key(),
        validate_required_text(
            &address.street_number,
            "Le numéro de rue",
            Some(STREET_NUMBER_MAX_LEN),
        ),
    );
    result.record(
        AddressField::StreetName.key(),
        validate_required_text(
            &address.street_name,
            "Le nom de la rue",
            Some(STREET_NAME_MAX_LEN),
        ),
    );
    result.record(
        AddressField::PostalCode.key(),
        validate_postal_code(&address.postal_code),
    );
    result.record(
        AddressField::City.key(),
        validate_required_text(&address.city, "La ville", Some(CITY_MAX_LEN)),
    );

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid() -> Address {
        Address {
            street_number: "3 bis".into(),
            street_name: "Place de la Victoire".into(),
            postal_code: "33000".into(),
            city: "Bordeaux".into(),
        }
    }

    #[test]
    fn complete_address_is_valid() {
        assert!(validate_address(&valid()).is_valid());
    }

    #[test]
    fn single_empty_field_reports_only_that_field() {
        for field in [
            AddressField::StreetNumber,
            AddressField::StreetName,
            AddressField::PostalCode,
            AddressField::City,
        ] {
            let mut address = valid();
            address.field_mut(field).clear();
            let result = validate_address(&address);
            assert_eq!(result.len(), 1, "{field:?}");
            assert!(result.contains(field.key()), "{field:?}");
        }
    }

    #[test]
    fn all_failures_are_reported_together() {
        let result = validate_address(&Address::default());
        let fields: Vec<&str> = result.fields().collect();
        assert_eq!(fields, ["city", "postalCode", "streetName", "streetNumber"]);
    }

    #[test]
    fn length_limits_apply() {
        let mut address = valid();
        address.street_number = "12345678901".into();
        address.city = "x".repeat(CITY_MAX_LEN + 1);
        let result = validate_address(&address);
        assert!(result.get("streetNumber").unwrap().contains("10 caractères"));
        assert!(result.get("city").unwrap().contains("50 caractères"));
        assert!(!result.contains("streetName"));
    }
}
