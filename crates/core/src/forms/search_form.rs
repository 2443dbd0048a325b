//! Mission search form state.

use crate::search::{
    build_search_criteria, LocationFilter, LocationMode, SearchCriteria, SearchFilters,
};
use crate::types::StoredAddress;
use crate::validation::ValidationResult;

/// Length of a complete postal code; shorter or longer input invalidates
/// the chosen city.
const POSTAL_CODE_LEN: usize = 5;

/// Search form: raw filters plus the city names offered for the typed
/// postal code.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchForm {
    pub filters: SearchFilters,
    pub city_choices: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchAction {
    SetSkillType(String),
    SetStartDate(String),
    SetEndDate(String),
    UseEndDate(bool),
    /// Switch location mode. Clears the fields of both modes.
    SetLocationMode(Option<LocationMode>),
    SetPostalCode(String),
    /// Result of the city lookup for `postal_code`. Ignored when the
    /// postal code has changed since the lookup was issued.
    CityChoicesLoaded {
        postal_code: String,
        cities: Vec<String>,
    },
    SetCity(String),
    SelectAddress(String),
    SetRadius(String),
    Reset,
}

impl SearchForm {
    pub fn reduce(self, action: SearchAction) -> Self {
        let Self {
            mut filters,
            mut city_choices,
        } = self;

        match action {
            SearchAction::SetSkillType(skill) => filters.skill_type = skill,
            SearchAction::SetStartDate(date) => filters.start_date = date,
            SearchAction::SetEndDate(date) => filters.end_date = date,
            SearchAction::UseEndDate(enabled) => filters.use_end_date = enabled,
            SearchAction::SetLocationMode(mode) => {
                filters.location = LocationFilter {
                    mode,
                    radius_km: filters.location.radius_km,
                    ..LocationFilter::default()
                };
                city_choices.clear();
            }
            SearchAction::SetPostalCode(code) => {
                // The city must come from a lookup on the new code.
                if code != filters.location.postal_code {
                    filters.location.city.clear();
                    city_choices.clear();
                }
                filters.location.postal_code = code;
            }
            SearchAction::CityChoicesLoaded {
                postal_code,
                cities,
            } => {
                if postal_code == filters.location.postal_code {
                    city_choices = dedup_in_order(cities);
                    if !city_choices.contains(&filters.location.city) {
                        filters.location.city.clear();
                    }
                }
            }
            SearchAction::SetCity(city) => filters.location.city = city,
            SearchAction::SelectAddress(id) => filters.location.selected_address = id,
            SearchAction::SetRadius(radius) => filters.location.radius_km = radius,
            SearchAction::Reset => return Self::default(),
        }

        Self {
            filters,
            city_choices,
        }
    }

    /// Postal code to look cities up for, when the form is in city mode
    /// and the code is complete.
    pub fn pending_city_lookup(&self) -> Option<&str> {
        let location = &self.filters.location;
        (location.mode == Some(LocationMode::City)
            && location.postal_code.chars().count() == POSTAL_CODE_LEN)
            .then_some(location.postal_code.as_str())
    }

    pub fn criteria(
        &self,
        address_book: &[StoredAddress],
    ) -> Result<SearchCriteria, ValidationResult> {
        build_search_criteria(&self.filters, address_book)
    }
}

fn dedup_in_order(cities: Vec<String>) -> Vec<String> {
    let mut unique: Vec<String> = Vec::with_capacity(cities.len());
    for city in cities {
        if !unique.contains(&city) {
            unique.push(city);
        }
    }
    unique
}
