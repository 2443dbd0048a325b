//! GeoJSON response returned by the address search endpoint.

use serde::{Deserialize, Serialize};

/// `FeatureCollection` returned by `/search/`. Only the fields the forms
/// use are modelled.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GeocodeResponse {
    #[serde(default)]
    pub features: Vec<Feature>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Feature {
    #[serde(default)]
    pub properties: FeatureProperties,
    pub geometry: Option<Geometry>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FeatureProperties {
    /// Full formatted address, e.g. `8 Boulevard du Port 80000 Amiens`.
    pub label: String,
    pub city: Option<String>,
    /// Municipality name, used when `city` is absent.
    pub name: Option<String>,
    pub postcode: Option<String>,
}

/// GeoJSON point; coordinates are `[longitude, latitude]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Geometry {
    #[serde(default)]
    pub coordinates: Vec<f64>,
}

/// Coordinates and locality of the best match.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedLocation {
    pub latitude: f64,
    pub longitude: f64,
    pub city: Option<String>,
    pub postal_code: Option<String>,
}

impl GeocodeResponse {
    /// Extract the location of the first feature, or a user-facing
    /// message explaining why none is usable.
    pub fn first_location(&self) -> Result<ResolvedLocation, String> {
        let feature = self
            .features
            .first()
            .ok_or_else(|| "Aucun résultat trouvé pour cette localisation.".to_string())?;

        let coordinates = feature
            .geometry
            .as_ref()
            .map(|g| g.coordinates.as_slice())
            .unwrap_or_default();
        let [longitude, latitude] = coordinates else {
            return Err("Coordonnées manquantes dans la réponse.".into());
        };
        if !latitude.is_finite() || !longitude.is_finite() {
            return Err("Coordonnées invalides.".into());
        }

        let props = &feature.properties;
        Ok(ResolvedLocation {
            latitude: *latitude,
            longitude: *longitude,
            city: props.city.clone().or_else(|| props.name.clone()),
            postal_code: props.postcode.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(value: serde_json::Value) -> GeocodeResponse {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn first_location_reads_lon_lat_order() {
        let response = parse(serde_json::json!({
            "type": "FeatureCollection",
            "features": [{
                "type": "Feature",
                "geometry": {"type": "Point", "coordinates": [2.347, 48.859]},
                "properties": {"label": "Paris", "name": "Paris", "postcode": "75001", "score": 0.9}
            }]
        }));
        let location = response.first_location().unwrap();
        assert_eq!(location.latitude, 48.859);
        assert_eq!(location.longitude, 2.347);
        assert_eq!(location.city.as_deref(), Some("Paris"));
        assert_eq!(location.postal_code.as_deref(), Some("75001"));
    }

    #[test]
    fn missing_features_means_no_result() {
        let response = parse(serde_json::json!({"type": "FeatureCollection"}));
        assert!(response.first_location().unwrap_err().contains("Aucun résultat"));
    }

    #[test]
    fn missing_coordinates_are_reported() {
        let response = parse(serde_json::json!({
            "features": [{"properties": {"label": "x"}}]
        }));
        assert!(response.first_location().unwrap_err().contains("manquantes"));

        let response = parse(serde_json::json!({
            "features": [{"properties": {}, "geometry": {"coordinates": [2.3]}}]
        }));
        assert!(response.first_location().is_err());
    }
}
