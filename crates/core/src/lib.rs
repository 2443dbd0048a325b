//! Validation and form reconciliation for the BenevOsons volunteer platform.
//!
//! Pure logic only: field validators, composite record validators, the
//! mission search normalizer and reducer-style form state. Network lookups
//! live in `benevosons-geo`.

pub mod dates;
pub mod error;
pub mod forms;
pub mod mission_status;
pub mod search;
pub mod types;
pub mod validation;
