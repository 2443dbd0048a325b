//! Single-field validators.
//!
//! Each validator returns `None` when the value is acceptable and a
//! user-facing message otherwise. They never panic and never short-circuit
//! a surrounding record check.
//!
//! Postal codes use the strict policy: exactly five digits after trimming,
//! and the leading two digits must name a real department group
//! (01–95, 97 overseas, 98 Monaco and Pacific territories).

use std::sync::LazyLock;

use chrono::NaiveDate;
use regex::Regex;
use validator::ValidateLength;

use crate::dates;

// ---------------------------------------------------------------------------
// Limits
// ---------------------------------------------------------------------------

/// Default maximum email length.
pub const DEFAULT_EMAIL_MAX_LEN: usize = 250;

/// Default maximum password length.
pub const DEFAULT_PASSWORD_MAX_LEN: usize = 120;

/// Minimum age to register as a volunteer.
pub const MAJORITY_AGE: i32 = 18;

// ---------------------------------------------------------------------------
// Patterns
// ---------------------------------------------------------------------------

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid email pattern"));

static PHONE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^0[1-9][0-9]{8}$").expect("valid phone pattern"));

static POSTAL_CODE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{5}$").expect("valid postal code pattern"));

static RNA_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^W[0-9]{9}$").expect("valid RNA pattern"));

fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

fn exceeds(value: &str, max_len: usize) -> bool {
    !value.validate_length(None, Some(max_len as u64), None)
}

// ---------------------------------------------------------------------------
// Account fields
// ---------------------------------------------------------------------------

pub fn validate_email(email: &str, max_len: usize) -> Option<String> {
    if is_blank(email) {
        return Some("L'email est requis.".into());
    }
    if !EMAIL_RE.is_match(email) {
        return Some("Format d'email invalide.".into());
    }
    if exceeds(email, max_len) {
        return Some(format!(
            "L'email ne doit pas dépasser {max_len} caractères."
        ));
    }
    None
}

pub fn validate_password(password: &str, max_len: usize) -> Option<String> {
    if password.is_empty() {
        return Some("Le mot de passe est requis.".into());
    }
    if exceeds(password, max_len) {
        return Some(format!(
            "Le mot de passe ne doit pas dépasser {max_len} caractères."
        ));
    }
    None
}

pub fn validate_confirm_password(password: &str, confirmation: &str) -> Option<String> {
    if confirmation.is_empty() {
        return Some("La confirmation du mot de passe est requise.".into());
    }
    if password != confirmation {
        return Some("Les mots de passe ne correspondent pas.".into());
    }
    None
}

/// French phone number: ten digits, leading `0`, second digit 1–9.
/// Whitespace between digit groups is ignored.
pub fn validate_french_phone(phone: &str) -> Option<String> {
    if is_blank(phone) {
        return Some("Le numéro de téléphone est requis.".into());
    }
    let compact: String = phone.chars().filter(|c| !c.is_whitespace()).collect();
    if !PHONE_RE.is_match(&compact) {
        return Some(
            "Format de téléphone invalide (10 chiffres commençant par 0).".into(),
        );
    }
    None
}

/// Required free text, with `label` interpolated into the message
/// (e.g. "Le nom de la rue").
pub fn validate_required_text(value: &str, label: &str, max_len: Option<usize>) -> Option<String> {
    if is_blank(value) {
        return Some(format!("{label} est obligatoire."));
    }
    match max_len {
        Some(max) if exceeds(value, max) => {
            Some(format!("{label} ne doit pas dépasser {max} caractères."))
        }
        _ => None,
    }
}

/// Birth date of someone at least [`MAJORITY_AGE`] years old, relative to
/// the local date.
pub fn validate_majority(date: &str, label: &str) -> Option<String> {
    validate_majority_on(date, label, dates::today())
}

/// [`validate_majority`] against an explicit `today`.
pub fn validate_majority_on(date: &str, label: &str, today: NaiveDate) -> Option<String> {
    if is_blank(date) {
        return Some(format!("{label} est obligatoire."));
    }
    let Some(birth) = dates::parse_date(date) else {
        return Some(format!("{label} n'est pas une date valide."));
    };
    if dates::age_on(birth, today) < MAJORITY_AGE {
        return Some(format!(
            "Vous devez avoir au moins {MAJORITY_AGE} ans pour vous inscrire."
        ));
    }
    None
}

// ---------------------------------------------------------------------------
// Identifiers
// ---------------------------------------------------------------------------

pub fn validate_postal_code(postal_code: &str) -> Option<String> {
    let code = postal_code.trim();
    if code.is_empty() {
        return Some("Le code postal est requis.".into());
    }
    if !POSTAL_CODE_RE.is_match(code) {
        return Some("Le code postal doit contenir exactement 5 chiffres.".into());
    }
    // The pattern guarantees two leading ASCII digits.
    let department: u8 = code[..2].parse().unwrap_or(0);
    if !matches!(department, 1..=95 | 97 | 98) {
        return Some("Code postal français non valide.".into());
    }
    None
}

/// Répertoire National des Associations number: `W` then nine digits.
pub fn validate_rna(rna: &str) -> Option<String> {
    if is_blank(rna) {
        return Some("Le numéro RNA est requis.".into());
    }
    if !RNA_RE.is_match(rna.trim()) {
        return Some("Le format du RNA doit être 'W' suivi de 9 chiffres.".into());
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn email_distinguishes_required_format_and_length() {
        assert!(validate_email("", 250).unwrap().contains("requis"));
        assert!(validate_email("marie@", 250).unwrap().contains("invalide"));
        assert!(validate_email("marie@example", 250).is_some());
        assert!(validate_email("marie@example.fr", 10)
            .unwrap()
            .contains("10 caractères"));
        assert_eq!(validate_email("marie@example.fr", DEFAULT_EMAIL_MAX_LEN), None);
    }

    #[test]
    fn password_checks_presence_and_length() {
        assert!(validate_password("", 120).is_some());
        assert!(validate_password("abcdef", 5).unwrap().contains("5 caractères"));
        assert_eq!(validate_password("secret", DEFAULT_PASSWORD_MAX_LEN), None);
    }

    #[test]
    fn confirmation_must_match() {
        assert!(validate_confirm_password("a", "").unwrap().contains("requise"));
        assert!(validate_confirm_password("a", "b")
            .unwrap()
            .contains("correspondent"));
        assert_eq!(validate_confirm_password("a", "a"), None);
    }

    #[test]
    fn phone_ignores_spaces() {
        assert_eq!(validate_french_phone("06 12 34 56 78"), None);
        assert_eq!(validate_french_phone("0612345678"), None);
        assert!(validate_french_phone("0012345678").is_some());
        assert!(validate_french_phone("061234567").is_some());
        assert!(validate_french_phone("+33612345678").is_some());
        assert!(validate_french_phone("").unwrap().contains("requis"));
    }

    #[test]
    fn required_text_interpolates_label() {
        assert_eq!(
            validate_required_text("", "La ville", Some(50)).as_deref(),
            Some("La ville est obligatoire.")
        );
        assert_eq!(
            validate_required_text("abcdef", "Le numéro de rue", Some(5)).as_deref(),
            Some("Le numéro de rue ne doit pas dépasser 5 caractères.")
        );
        assert_eq!(validate_required_text("abcdef", "Le nom", None), None);
    }

    #[test]
    fn required_text_counts_characters_not_bytes() {
        assert_eq!(validate_required_text("élève", "Le nom", Some(5)), None);
    }

    #[test]
    fn majority_is_reached_on_eighteenth_birthday() {
        let today = d(2026, 5, 10);
        assert_eq!(validate_majority_on("2008-05-10", "La date de naissance", today), None);
        assert!(validate_majority_on("2008-05-11", "La date de naissance", today)
            .unwrap()
            .contains("18 ans"));
        assert!(validate_majority_on("", "La date de naissance", today)
            .unwrap()
            .contains("obligatoire"));
        assert!(validate_majority_on("10/05/2000", "La date de naissance", today)
            .unwrap()
            .contains("pas une date valide"));
    }

    #[test]
    fn postal_code_strict_policy() {
        for ok in ["75001", "01000", "20000", "95100", "97400", "98000", " 69002 "] {
            assert_eq!(validate_postal_code(ok), None, "{ok} should pass");
        }
        for bad_format in ["7500", "750011", "75A01", "7 001"] {
            assert!(validate_postal_code(bad_format)
                .unwrap()
                .contains("5 chiffres"));
        }
        for bad_department in ["00100", "96000", "99000"] {
            assert!(validate_postal_code(bad_department)
                .unwrap()
                .contains("non valide"));
        }
        assert!(validate_postal_code("").unwrap().contains("requis"));
    }

    #[test]
    fn rna_is_w_and_nine_digits() {
        assert_eq!(validate_rna("W123456789"), None);
        assert!(validate_rna("W12345678").is_some());
        assert!(validate_rna("w123456789").is_some());
        assert!(validate_rna("X123456789").is_some());
        assert!(validate_rna("").unwrap().contains("requis"));
    }
}
