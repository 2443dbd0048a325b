//! Field and record validation.
//!
//! Primitive validators check one value; composite validators run every
//! check on a record and collect all failures into a [`ValidationResult`].

pub mod address;
pub mod mission;
pub mod password_strength;
pub mod primitives;
pub mod registration;
pub mod result;

pub use address::validate_address;
pub use mission::{validate_mission_dates, validate_mission_dates_on};
pub use registration::{validate_registration, validate_registration_on, RegistrationFields};
pub use result::ValidationResult;
