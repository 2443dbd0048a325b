//! Seam between the address checks and the geocoder.

use async_trait::async_trait;

use crate::error::GeoError;
use crate::model::GeocodeResponse;

/// Query options for one search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchParams {
    /// Maximum number of features returned.
    pub limit: u32,
    /// Restrict results to municipalities instead of street addresses.
    pub municipalities_only: bool,
}

impl SearchParams {
    /// Best single match, any result type.
    pub fn best_match() -> Self {
        Self {
            limit: 1,
            municipalities_only: false,
        }
    }

    pub fn municipalities(limit: u32) -> Self {
        Self {
            limit,
            municipalities_only: true,
        }
    }
}

/// Free-text address search.
#[async_trait]
pub trait AddressLookup: Send + Sync {
    async fn search(&self, query: &str, params: SearchParams) -> Result<GeocodeResponse, GeoError>;
}
