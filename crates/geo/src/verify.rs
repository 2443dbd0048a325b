//! Existence check for a typed address.

use std::time::Duration;

use serde::Serialize;

use benevosons_core::types::Address;

use crate::error::GeoError;
use crate::lookup::{AddressLookup, SearchParams};

/// Outcome of [`verify_address_exists`].
///
/// Three classes the caller must treat differently: the address is
/// confirmed, the geocoder knows a different address, or nothing
/// conclusive could be learned (no result, network failure, timeout).
/// An inconclusive check must not be presented as an invalid address.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum AddressVerification {
    /// The best match is the typed address.
    Confirmed,
    /// The best match differs; `suggestion` is the geocoder's label.
    Mismatch { suggestion: String },
    /// The geocoder returned no result.
    NotFound,
    /// The lookup failed or timed out.
    LookupFailed { reason: String },
}

impl AddressVerification {
    /// `Some(true)` when confirmed, `Some(false)` on a mismatch, `None`
    /// when inconclusive.
    pub fn exists(&self) -> Option<bool> {
        match self {
            Self::Confirmed => Some(true),
            Self::Mismatch { .. } => Some(false),
            Self::NotFound | Self::LookupFailed { .. } => None,
        }
    }

    /// Message to show the user for an inconclusive check.
    pub fn message(&self) -> Option<&'static str> {
        match self {
            Self::Confirmed | Self::Mismatch { .. } => None,
            Self::NotFound => {
                Some("Adresse non reconnue. Veuillez vérifier les informations saisies.")
            }
            Self::LookupFailed { .. } => Some("Erreur lors de la vérification de l'adresse."),
        }
    }
}

/// Look the address up and compare the best match with what was typed.
///
/// The comparison ignores case, commas and runs of whitespace. The lookup
/// is abandoned after `timeout`.
pub async fn verify_address_exists<L>(
    lookup: &L,
    address: &Address,
    timeout: Duration,
) -> AddressVerification
where
    L: AddressLookup + ?Sized,
{
    let query = address.search_query();

    let search = lookup.search(&query, SearchParams::best_match());
    let response = match tokio::time::timeout(timeout, search).await {
        Ok(Ok(response)) => response,
        Ok(Err(e)) => {
            tracing::warn!(query = %query, error = %e, "Address verification lookup failed");
            return AddressVerification::LookupFailed {
                reason: e.to_string(),
            };
        }
        Err(_) => {
            let e = GeoError::Timeout(timeout.as_millis());
            tracing::warn!(query = %query, error = %e, "Address verification lookup timed out");
            return AddressVerification::LookupFailed {
                reason: e.to_string(),
            };
        }
    };

    let Some(feature) = response.features.first() else {
        tracing::debug!(query = %query, "Address not found");
        return AddressVerification::NotFound;
    };

    let returned = &feature.properties.label;
    if normalize_label(returned) == normalize_label(&query) {
        AddressVerification::Confirmed
    } else {
        tracing::debug!(query = %query, returned = %returned, "Address differs from best match");
        AddressVerification::Mismatch {
            suggestion: returned.clone(),
        }
    }
}

/// Lower-case, drop commas, collapse whitespace.
pub fn normalize_label(label: &str) -> String {
    label
        .to_lowercase()
        .replace(',', " ")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}
