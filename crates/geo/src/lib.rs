//! Address geocoding for the BenevOsons forms.
//!
//! Talks to the national address search API (`/search/?q=...`) to confirm
//! that a typed address exists and to list the municipalities behind a
//! postal code. The [`lookup::AddressLookup`] trait is the seam between the
//! checks and the HTTP client.

pub mod api;
pub mod cities;
pub mod config;
pub mod error;
pub mod lookup;
pub mod model;
pub mod verify;

pub use api::GeoApi;
pub use config::GeoConfig;
pub use error::GeoError;
pub use lookup::{AddressLookup, SearchParams};
pub use verify::{verify_address_exists, AddressVerification};
