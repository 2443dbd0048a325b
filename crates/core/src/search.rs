//! Mission search: filter validation and criteria normalization.
//!
//! The search form collects loosely typed filter values (strings from
//! inputs, a location sub-form with two modes). [`build_search_criteria`]
//! turns them into the payload the `/search/filter` endpoint expects, or
//! reports every problem at once. It refuses to build criteria with no
//! discriminating filter so the backend never receives a match-all query.

use serde::{Deserialize, Serialize};

use crate::dates::{self, END_OF_DAY, START_OF_DAY};
use crate::types::{DbId, SkillType, StoredAddress};
use crate::validation::mission::check_period;
use crate::validation::primitives::validate_postal_code;
use crate::validation::ValidationResult;

// ---------------------------------------------------------------------------
// Limits and keys
// ---------------------------------------------------------------------------

/// Smallest accepted search radius, in kilometres.
pub const MIN_RADIUS_KM: u32 = 1;

/// Largest accepted search radius, in kilometres.
pub const MAX_RADIUS_KM: u32 = 100;

/// Key for errors that concern the filter set as a whole.
pub const GLOBAL_KEY: &str = "global";

/// Prefix for location sub-form errors (`location.radius`).
pub const LOCATION_PREFIX: &str = "location";

// ---------------------------------------------------------------------------
// Raw filter state
// ---------------------------------------------------------------------------

/// How the user anchors a proximity search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum LocationMode {
    /// Postal code + city typed by hand.
    City,
    /// One of the user's stored addresses.
    MyAddress,
}

/// Location sub-form. Only the fields of the active mode are meaningful.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LocationFilter {
    #[serde(rename = "type")]
    pub mode: Option<LocationMode>,
    pub postal_code: String,
    pub city: String,
    /// Stored address id, as selected in the dropdown.
    pub selected_address: String,
    pub radius_km: String,
}

/// Raw search form values.
///
/// `skill_type` is a single id even though the API takes a list: the form
/// only offers single selection.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SearchFilters {
    pub skill_type: String,
    pub start_date: String,
    pub end_date: String,
    pub use_end_date: bool,
    pub location: LocationFilter,
}

// ---------------------------------------------------------------------------
// Normalized criteria
// ---------------------------------------------------------------------------

/// Payload for the mission search endpoint.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchCriteria {
    pub skill_type_ids: Vec<DbId>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub postal_code: Option<String>,
    pub radius_km: Option<u32>,
    pub user_latitude: Option<f64>,
    pub user_longitude: Option<f64>,
}

impl SearchCriteria {
    /// Whether at least one skill, date or location constraint is set.
    pub fn is_searchable(&self) -> bool {
        let has_location = self.radius_km.is_some()
            && (self.postal_code.is_some()
                || (self.user_latitude.is_some() && self.user_longitude.is_some()));
        !self.skill_type_ids.is_empty()
            || self.start_date.is_some()
            || self.end_date.is_some()
            || has_location
    }
}

/// A location filter that passed validation.
#[derive(Debug, Clone, PartialEq)]
enum ResolvedLocation {
    PostalCode { postal_code: String, radius_km: u32 },
    Coordinates { latitude: f64, longitude: f64, radius_km: u32 },
}

// ---------------------------------------------------------------------------
// Field checks
// ---------------------------------------------------------------------------

/// Parse and bound-check a radius typed as text.
pub fn validate_radius(raw: &str, min_km: u32, max_km: u32) -> Result<u32, String> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err("Le rayon est requis.".into());
    }
    let value: f64 = raw
        .parse()
        .map_err(|_| "Le rayon doit être un nombre.".to_string())?;
    if !value.is_finite() {
        return Err("Le rayon doit être un nombre.".into());
    }
    if value < f64::from(min_km) {
        return Err(format!("Le rayon minimum est de {min_km} km."));
    }
    if value > f64::from(max_km) {
        return Err(format!("Le rayon maximum est de {max_km} km."));
    }
    if value.fract() != 0.0 {
        return Err("Le rayon doit être un nombre entier.".into());
    }
    Ok(value as u32)
}

/// Check a list of skill type ids: all positive and, when a catalog is
/// given, all known.
pub fn validate_skill_type_ids(ids: &[DbId], catalog: &[SkillType]) -> Option<String> {
    if ids.iter().any(|&id| id <= 0) {
        return Some("Les identifiants de compétence doivent être positifs.".into());
    }
    if catalog.is_empty() {
        return None;
    }
    let unknown: Vec<String> = ids
        .iter()
        .filter(|id| !catalog.iter().any(|skill| skill.id == **id))
        .map(ToString::to_string)
        .collect();
    if unknown.is_empty() {
        None
    } else {
        Some(format!(
            "Types de compétences inconnus : {}.",
            unknown.join(", ")
        ))
    }
}

/// Validate the location sub-form for its active mode. Keys are bare
/// (`radius`, `postalCode`, `city`, `selectedAddress`).
pub fn validate_location(
    location: &LocationFilter,
    address_book: &[StoredAddress],
) -> ValidationResult {
    resolve_location(location, address_book).err().unwrap_or_default()
}

fn resolve_location(
    location: &LocationFilter,
    address_book: &[StoredAddress],
) -> Result<ResolvedLocation, ValidationResult> {
    let mut errors = ValidationResult::new();
    let Some(mode) = location.mode else {
        errors.insert("type", "Type de recherche requis.");
        return Err(errors);
    };

    let radius = match validate_radius(&location.radius_km, MIN_RADIUS_KM, MAX_RADIUS_KM) {
        Ok(radius_km) => Some(radius_km),
        Err(message) => {
            errors.insert("radius", message);
            None
        }
    };

    match mode {
        LocationMode::City => {
            errors.record("postalCode", validate_postal_code(&location.postal_code));
            if location.city.trim().is_empty() {
                errors.insert("city", "La ville est requise.");
            }
            match radius {
                Some(radius_km) if errors.is_valid() => Ok(ResolvedLocation::PostalCode {
                    postal_code: location.postal_code.trim().to_string(),
                    radius_km,
                }),
                _ => Err(errors),
            }
        }
        LocationMode::MyAddress => {
            let coordinates = match stored_coordinates(&location.selected_address, address_book) {
                Ok(coordinates) => Some(coordinates),
                Err(message) => {
                    errors.insert("selectedAddress", message);
                    None
                }
            };
            match (radius, coordinates) {
                (Some(radius_km), Some((latitude, longitude))) => {
                    Ok(ResolvedLocation::Coordinates {
                        latitude,
                        longitude,
                        radius_km,
                    })
                }
                _ => Err(errors),
            }
        }
    }
}

fn stored_coordinates(
    selected: &str,
    address_book: &[StoredAddress],
) -> Result<(f64, f64), &'static str> {
    let selected = selected.trim();
    if selected.is_empty() {
        return Err("Une adresse doit être sélectionnée.");
    }
    let id: DbId = selected
        .parse()
        .map_err(|_| "L'adresse sélectionnée n'est pas valide.")?;
    let stored = address_book
        .iter()
        .find(|a| a.address_id == id)
        .ok_or("L'adresse sélectionnée n'est pas valide.")?;
    stored
        .coordinates()
        .ok_or("L'adresse sélectionnée n'a pas été géolocalisée.")
}

// ---------------------------------------------------------------------------
// Normalizer
// ---------------------------------------------------------------------------

/// Build the search payload from raw filters.
///
/// - The single skill id becomes a one-element list.
/// - Without an explicit end date the search covers the start day only.
/// - Dates are widened to `T00:00:00` / `T23:59:59`.
/// - A location mode, when chosen, must validate completely.
/// - At least one of skill, start date, explicit end date or location
///   must be set.
///
/// Past dates are accepted so finished missions stay searchable.
pub fn build_search_criteria(
    filters: &SearchFilters,
    address_book: &[StoredAddress],
) -> Result<SearchCriteria, ValidationResult> {
    let mut errors = ValidationResult::new();
    let mut criteria = SearchCriteria::default();

    let skill = filters.skill_type.trim();
    if !skill.is_empty() {
        match skill.parse::<DbId>() {
            Ok(id) if id > 0 => criteria.skill_type_ids = vec![id],
            _ => errors.insert("skillType", "Type de compétence invalide."),
        }
    }

    let start = non_empty(&filters.start_date);
    let explicit_end = if filters.use_end_date {
        non_empty(&filters.end_date)
    } else {
        None
    };
    let period_errors = check_period(
        start.map(day_part),
        explicit_end.map(day_part),
        true,
        dates::today(),
    );
    let period_ok = period_errors.is_valid();
    errors.merge(period_errors);
    if period_ok {
        criteria.start_date = start.and_then(|s| day_bound(s, START_OF_DAY));
        criteria.end_date = explicit_end
            .or(start)
            .and_then(|e| day_bound(e, END_OF_DAY));
    }

    let mut has_location = false;
    if filters.location.mode.is_some() {
        match resolve_location(&filters.location, address_book) {
            Ok(ResolvedLocation::PostalCode {
                postal_code,
                radius_km,
            }) => {
                criteria.postal_code = Some(postal_code);
                criteria.radius_km = Some(radius_km);
                has_location = true;
            }
            Ok(ResolvedLocation::Coordinates {
                latitude,
                longitude,
                radius_km,
            }) => {
                criteria.user_latitude = Some(latitude);
                criteria.user_longitude = Some(longitude);
                criteria.radius_km = Some(radius_km);
                has_location = true;
            }
            Err(location_errors) => errors.merge_prefixed(LOCATION_PREFIX, location_errors),
        }
    }

    if skill.is_empty() && start.is_none() && explicit_end.is_none() && !has_location {
        errors.insert(
            GLOBAL_KEY,
            "Veuillez spécifier au moins un critère de recherche.",
        );
    }

    errors.into_result(criteria)
}

/// Non-blocking hints about filter combinations likely to return poor
/// results.
pub fn search_warnings(filters: &SearchFilters) -> Vec<&'static str> {
    let has_skill = !filters.skill_type.trim().is_empty();
    let has_dates = non_empty(&filters.start_date).is_some()
        || (filters.use_end_date && non_empty(&filters.end_date).is_some());
    let has_location = filters.location.mode.is_some();

    let mut warnings = Vec::new();
    if has_skill && !has_dates {
        warnings.push("Ajouter des dates peut améliorer la pertinence des résultats.");
    }
    if has_dates && !has_location {
        warnings.push("Ajouter une localisation peut réduire les résultats.");
    }
    warnings
}

fn non_empty(value: &str) -> Option<&str> {
    Some(value.trim()).filter(|v| !v.is_empty())
}

/// Date part of a well-formed datetime. The criteria cover whole days,
/// so times must not take part in the ordering check. Malformed input is
/// returned unchanged for the format check to reject.
fn day_part(value: &str) -> &str {
    match dates::parse_datetime(value) {
        Some(_) => value.split_once('T').map_or(value, |(date, _)| date),
        None => value,
    }
}

fn day_bound(value: &str, suffix: &str) -> Option<String> {
    dates::parse_date(value).map(|d| format!("{}{suffix}", d.format("%Y-%m-%d")))
}
