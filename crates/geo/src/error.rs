/// Errors from the geocoding layer.
#[derive(Debug, thiserror::Error)]
pub enum GeoError {
    /// The HTTP request itself failed (network, DNS, TLS, body decoding).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The geocoder returned a non-2xx status code.
    #[error("Geocoding API error ({status}): {body}")]
    Status { status: u16, body: String },

    /// No answer within the configured timeout.
    #[error("Geocoding lookup timed out after {0} ms")]
    Timeout(u128),

    /// An environment variable holds an unusable value.
    #[error("Invalid configuration: {0}")]
    Config(String),
}
