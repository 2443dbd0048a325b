//! Field → message map returned by every composite validator.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Validation outcome for one record: an entry per failing field.
///
/// An empty result means the record is valid. Serializes as a flat JSON
/// object so the UI can look errors up by form field name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ValidationResult {
    errors: BTreeMap<String, String>,
}

impl ValidationResult {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Error message for `field`, if any.
    pub fn get(&self, field: &str) -> Option<&str> {
        self.errors.get(field).map(String::as_str)
    }

    pub fn contains(&self, field: &str) -> bool {
        self.errors.contains_key(field)
    }

    /// Set the message for `field`, replacing any earlier one.
    pub fn insert(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.errors.insert(field.into(), message.into());
    }

    /// Record the outcome of a primitive validator.
    pub fn record(&mut self, field: &str, outcome: Option<String>) {
        if let Some(message) = outcome {
            self.insert(field, message);
        }
    }

    /// Merge another result, keys unchanged.
    pub fn merge(&mut self, other: ValidationResult) {
        self.errors.extend(other.errors);
    }

    /// Merge a nested record's result under `prefix.` so errors route back
    /// to the nested form fields (`address.postalCode`).
    pub fn merge_prefixed(&mut self, prefix: &str, other: ValidationResult) {
        for (field, message) in other.errors {
            self.errors.insert(format!("{prefix}.{field}"), message);
        }
    }

    /// Field names with an error, in sorted order.
    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.errors.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.errors.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// `Ok(value)` when valid, otherwise `Err(self)`.
    pub fn into_result<T>(self, value: T) -> Result<T, Self> {
        if self.is_valid() {
            Ok(value)
        } else {
            Err(self)
        }
    }
}
