//! Records exchanged between the forms, the validators and the backend.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Backend primary keys.
pub type DbId = i64;

// ---------------------------------------------------------------------------
// Address
// ---------------------------------------------------------------------------

/// A postal address as typed into a profile, registration or mission form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Address {
    pub street_number: String,
    pub street_name: String,
    pub postal_code: String,
    pub city: String,
}

impl Address {
    /// Free-text query sent to the geocoder, e.g. `12 rue Victor Hugo, 69002 Lyon`.
    pub fn search_query(&self) -> String {
        format!(
            "{} {}, {} {}",
            self.street_number, self.street_name, self.postal_code, self.city
        )
    }

    /// Mutable access to one field, used by form reducers.
    pub fn field_mut(&mut self, field: AddressField) -> &mut String {
        match field {
            AddressField::StreetNumber => &mut self.street_number,
            AddressField::StreetName => &mut self.street_name,
            AddressField::PostalCode => &mut self.postal_code,
            AddressField::City => &mut self.city,
        }
    }
}

/// The four editable address fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum AddressField {
    StreetNumber,
    StreetName,
    PostalCode,
    City,
}

impl AddressField {
    /// Key used in validation results and form field names.
    pub fn key(self) -> &'static str {
        match self {
            Self::StreetNumber => "streetNumber",
            Self::StreetName => "streetName",
            Self::PostalCode => "postalCode",
            Self::City => "city",
        }
    }
}

/// An address already stored on the user's account, with the coordinates
/// the backend resolved when it was saved.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredAddress {
    #[serde(alias = "id")]
    pub address_id: DbId,
    #[serde(flatten)]
    pub address: Address,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

impl StoredAddress {
    /// Coordinates as `(latitude, longitude)`, when both are known.
    pub fn coordinates(&self) -> Option<(f64, f64)> {
        match (self.latitude, self.longitude) {
            (Some(lat), Some(lon)) => Some((lat, lon)),
            _ => None,
        }
    }
}

// ---------------------------------------------------------------------------
// Accounts
// ---------------------------------------------------------------------------

/// Account kind chosen at registration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    Volunteer,
    Organization,
}

impl Role {
    /// Parse the role name used by the backend.
    pub fn parse(s: &str) -> Result<Self, CoreError> {
        match s {
            "VOLUNTEER" => Ok(Self::Volunteer),
            "ORGANIZATION" => Ok(Self::Organization),
            _ => Err(CoreError::UnknownVariant {
                kind: "role",
                value: s.to_string(),
            }),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Volunteer => "VOLUNTEER",
            Self::Organization => "ORGANIZATION",
        }
    }
}

// ---------------------------------------------------------------------------
// Skills
// ---------------------------------------------------------------------------

/// An entry of the skill type catalog (e.g. "Logistique").
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillType {
    #[serde(alias = "idSkillType")]
    pub id: DbId,
    pub label: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Address {
        Address {
            street_number: "12".into(),
            street_name: "rue Victor Hugo".into(),
            postal_code: "69002".into(),
            city: "Lyon".into(),
        }
    }

    #[test]
    fn search_query_separates_street_and_town() {
        assert_eq!(sample().search_query(), "12 rue Victor Hugo, 69002 Lyon");
    }

    #[test]
    fn role_round_trips_through_backend_name() {
        for role in [Role::Volunteer, Role::Organization] {
            assert_eq!(Role::parse(role.as_str()).unwrap(), role);
        }
        assert!(Role::parse("ADMIN").is_err());
    }

    #[test]
    fn stored_address_accepts_either_id_key() {
        let json = serde_json::json!({
            "id": 4,
            "streetNumber": "1",
            "streetName": "place Bellecour",
            "postalCode": "69002",
            "city": "Lyon",
            "latitude": 45.757,
            "longitude": 4.832
        });
        let stored: StoredAddress = serde_json::from_value(json).unwrap();
        assert_eq!(stored.address_id, 4);
        assert_eq!(stored.coordinates(), Some((45.757, 4.832)));
        assert_eq!(stored.address.city, "Lyon");
    }

    #[test]
    fn skill_type_accepts_catalog_key() {
        let skill: SkillType =
            serde_json::from_value(serde_json::json!({"idSkillType": 3, "label": "Cuisine"}))
                .unwrap();
        assert_eq!(skill.id, 3);
    }
}
