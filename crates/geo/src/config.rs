use std::time::Duration;

use crate::error::GeoError;

/// Default geocoder base URL.
pub const DEFAULT_BASE_URL: &str = "https://api-adresse.data.gouv.fr";

/// Default time allowed for one lookup.
pub const DEFAULT_TIMEOUT_SECS: u64 = 5;

/// Default number of municipalities requested per postal code.
pub const DEFAULT_CITY_LOOKUP_LIMIT: u32 = 10;

/// Geocoder settings loaded from environment variables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeoConfig {
    /// Base URL without trailing slash.
    pub base_url: String,
    /// Upper bound on one lookup; a timeout counts as an inconclusive check.
    pub timeout: Duration,
    /// `limit` sent with city lookups.
    pub city_lookup_limit: u32,
}

impl Default for GeoConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            city_lookup_limit: DEFAULT_CITY_LOOKUP_LIMIT,
        }
    }
}

impl GeoConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                  | Default                            |
    /// |--------------------------|------------------------------------|
    /// | `GEOCODING_BASE_URL`     | `https://api-adresse.data.gouv.fr` |
    /// | `GEOCODING_TIMEOUT_SECS` | `5`                                |
    /// | `CITY_LOOKUP_LIMIT`      | `10`                               |
    pub fn from_env() -> Result<Self, GeoError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary variable source.
    pub fn from_lookup(var: impl Fn(&str) -> Option<String>) -> Result<Self, GeoError> {
        let base_url = var("GEOCODING_BASE_URL")
            .map(|url| url.trim().trim_end_matches('/').to_string())
            .filter(|url| !url.is_empty())
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

        let timeout_secs: u64 = parse_var(&var, "GEOCODING_TIMEOUT_SECS", DEFAULT_TIMEOUT_SECS)?;
        if timeout_secs == 0 {
            return Err(GeoError::Config(
                "GEOCODING_TIMEOUT_SECS must be at least 1".into(),
            ));
        }

        let city_lookup_limit: u32 =
            parse_var(&var, "CITY_LOOKUP_LIMIT", DEFAULT_CITY_LOOKUP_LIMIT)?;

        Ok(Self {
            base_url,
            timeout: Duration::from_secs(timeout_secs),
            city_lookup_limit,
        })
    }
}

fn parse_var<T: std::str::FromStr>(
    var: &impl Fn(&str) -> Option<String>,
    key: &str,
    default: T,
) -> Result<T, GeoError> {
    match var(key) {
        None => Ok(default),
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|_| GeoError::Config(format!("{key} must be a number, got '{raw}'"))),
    }
}
