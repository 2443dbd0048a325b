//! Municipalities behind a postal code, for the city dropdowns.

use crate::error::GeoError;
use crate::lookup::{AddressLookup, SearchParams};

/// Distinct city names for a complete postal code, in the geocoder's
/// order. Returns an empty list without querying when the code is not
/// five digits.
pub async fn cities_for_postal_code<L>(
    lookup: &L,
    postal_code: &str,
    limit: u32,
) -> Result<Vec<String>, GeoError>
where
    L: AddressLookup + ?Sized,
{
    let code = postal_code.trim();
    if code.len() != 5 || !code.bytes().all(|b| b.is_ascii_digit()) {
        return Ok(Vec::new());
    }

    let response = lookup
        .search(code, SearchParams::municipalities(limit))
        .await?;

    let mut cities: Vec<String> = Vec::new();
    for feature in response.features {
        let props = feature.properties;
        if let Some(city) = props.city.or(props.name) {
            if !cities.contains(&city) {
                cities.push(city);
            }
        }
    }

    tracing::debug!(postal_code = code, count = cities.len(), "Cities resolved");
    Ok(cities)
}
