//! Form state as immutable values.
//!
//! Each form is a plain struct updated by `reduce(state, action) -> state`.
//! Cross-field rules that used to live in event handlers (clearing the
//! city when the postal code changes, merging date and time inputs into one
//! ISO datetime) are applied in the reducer, so the state is always
//! consistent before validation runs.

pub mod mission_form;
pub mod profile_form;
pub mod search_form;

pub use mission_form::{MissionAction, MissionDraft, MissionForm, PeriodBound};
pub use profile_form::{ProfileAction, ProfileForm, ProfileUpdate, SkillDraft};
pub use search_form::{SearchAction, SearchForm};
