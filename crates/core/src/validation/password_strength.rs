//! Password strength hints shown while the user types.
//!
//! Advisory only: registration accepts any non-empty password within the
//! length limit.

use serde::Serialize;

/// Minimum length for the length criterion.
pub const STRONG_MIN_LEN: usize = 8;

/// One criterion and whether the password meets it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StrengthCriterion {
    pub requirement: &'static str,
    pub met: bool,
}

/// Evaluate every strength criterion. Empty when nothing was typed yet.
pub fn password_strength(password: &str) -> Vec<StrengthCriterion> {
    if password.is_empty() {
        return Vec::new();
    }
    vec![
        StrengthCriterion {
            requirement: "Au moins 8 caractères",
            met: password.chars().count() >= STRONG_MIN_LEN,
        },
        StrengthCriterion {
            requirement: "Au moins une majuscule",
            met: password.chars().any(|c| c.is_ascii_uppercase()),
        },
        StrengthCriterion {
            requirement: "Au moins un chiffre",
            met: password.chars().any(|c| c.is_ascii_digit()),
        },
    ]
}

/// Whether every criterion is met.
pub fn is_strong(password: &str) -> bool {
    let criteria = password_strength(password);
    !criteria.is_empty() && criteria.iter().all(|c| c.met)
}
