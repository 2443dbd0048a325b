//! HTTP client for the address search API.

use async_trait::async_trait;

use crate::config::GeoConfig;
use crate::error::GeoError;
use crate::lookup::{AddressLookup, SearchParams};
use crate::model::GeocodeResponse;

/// Client for one geocoder instance.
pub struct GeoApi {
    client: reqwest::Client,
    base_url: String,
}

impl GeoApi {
    /// Build a client whose requests are bounded by `config.timeout`.
    pub fn new(config: &GeoConfig) -> Result<Self, GeoError> {
        let client = reqwest::Client::builder().timeout(config.timeout).build()?;
        Ok(Self::with_client(client, config.base_url.clone()))
    }

    /// Reuse an existing [`reqwest::Client`].
    pub fn with_client(client: reqwest::Client, base_url: String) -> Self {
        Self { client, base_url }
    }

    /// `GET /search/?q=<query>&limit=<n>[&type=municipality]`.
    pub async fn search_addresses(
        &self,
        query: &str,
        params: SearchParams,
    ) -> Result<GeocodeResponse, GeoError> {
        let limit = params.limit.to_string();
        let mut query_pairs = vec![("q", query), ("limit", limit.as_str())];
        if params.municipalities_only {
            query_pairs.push(("type", "municipality"));
        }

        tracing::debug!(query, limit = params.limit, "Geocoding search");

        let response = self
            .client
            .get(format!("{}/search/", self.base_url))
            .query(&query_pairs)
            .send()
            .await?;

        Self::parse_response(response).await
    }

    // ---- private helpers ----

    async fn parse_response(response: reqwest::Response) -> Result<GeocodeResponse, GeoError> {
        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<unreadable body>".to_string());
            return Err(GeoError::Status {
                status: status.as_u16(),
                body,
            });
        }
        Ok(response.json::<GeocodeResponse>().await?)
    }
}

#[async_trait]
impl AddressLookup for GeoApi {
    async fn search(&self, query: &str, params: SearchParams) -> Result<GeocodeResponse, GeoError> {
        self.search_addresses(query, params).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_applies_config() {
        let api = GeoApi::new(&GeoConfig::default()).expect("client should build");
        assert_eq!(api.base_url, "https://api-adresse.data.gouv.fr");
    }
}
