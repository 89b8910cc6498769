//! Chilean mobile phone validation and normalization.

use std::sync::LazyLock;

use regex::Regex;

use obstetra_model::Verdict;

/// Full international form: `+569` followed by 8 digits.
static PHONE_INTERNATIONAL_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\+569\d{8}$").expect("phone regex must compile"));

/// Bare local form: 9 digits starting with `9`.
static PHONE_LOCAL_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^9\d{8}$").expect("phone regex must compile"));

/// Validate a Chilean mobile number.
///
/// Internal spaces are stripped before matching, so `+56 9 1234 5678`
/// and `9 1234 5678` are accepted alongside the compact forms.
pub fn validate_phone(raw: &str) -> Verdict {
    let cleaned: String = raw.chars().filter(|ch| *ch != ' ').collect();
    if PHONE_INTERNATIONAL_REGEX.is_match(&cleaned) || PHONE_LOCAL_REGEX.is_match(&cleaned) {
        return Verdict::pass("Valid phone number");
    }
    Verdict::fail("Invalid phone format. Use: +56912345678 or 912345678")
}

/// Normalize a phone number to the `+56XXXXXXXXX` form.
///
/// Returns `None` when the number does not validate.
pub fn normalize_phone(raw: &str) -> Option<String> {
    if !validate_phone(raw).valid {
        return None;
    }
    let cleaned: String = raw.chars().filter(|ch| *ch != ' ' && *ch != '-').collect();
    if cleaned.starts_with("+56") {
        return Some(cleaned);
    }
    if cleaned.starts_with('9') {
        return Some(format!("+56{cleaned}"));
    }
    None
}
