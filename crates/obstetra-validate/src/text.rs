//! Free-text and email validators.

use std::sync::LazyLock;

use regex::Regex;

use obstetra_model::Verdict;

/// Default length bounds for clinical descriptions.
pub const DESCRIPTION_MIN: usize = 5;
pub const DESCRIPTION_MAX: usize = 500;

static EMAIL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$")
        .expect("email regex must compile")
});

/// Validate a free-text description against length bounds.
///
/// The text is trimmed before counting; empty input is invalid
/// regardless of the bounds.
pub fn validate_description(text: &str, min: usize, max: usize) -> Verdict {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Verdict::fail("Description is required");
    }
    let length = trimmed.chars().count();
    if length < min {
        return Verdict::fail(format!("Description must be at least {min} characters"));
    }
    if length > max {
        return Verdict::fail(format!("Description cannot exceed {max} characters"));
    }
    Verdict::pass("Valid description")
}

/// Validate an email address against the `local@domain.tld` shape.
pub fn validate_email(raw: &str) -> Verdict {
    if EMAIL_REGEX.is_match(raw) {
        return Verdict::pass("Valid email");
    }
    Verdict::fail("Invalid email")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn description_trims_before_counting() {
        assert!(!validate_description("hi", DESCRIPTION_MIN, DESCRIPTION_MAX).valid);
        // Trims to exactly five characters.
        assert!(validate_description("  hello  ", DESCRIPTION_MIN, DESCRIPTION_MAX).valid);
        assert!(!validate_description("   ", DESCRIPTION_MIN, DESCRIPTION_MAX).valid);
        assert!(!validate_description("", DESCRIPTION_MIN, DESCRIPTION_MAX).valid);
    }

    #[test]
    fn description_respects_custom_bounds() {
        let long = "x".repeat(101);
        assert!(!validate_description(&long, 1, 100).valid);
        assert!(validate_description("x", 1, 100).valid);
    }

    #[test]
    fn email_shapes() {
        assert!(validate_email("maria.gonzalez@hospital.cl").valid);
        assert!(validate_email("a+b_c%d@sub.domain.org").valid);
        assert!(!validate_email("no-at-sign").valid);
        assert!(!validate_email("user@domain").valid);
        assert!(!validate_email("user@domain.c").valid);
        assert!(!validate_email("").valid);
    }
}
