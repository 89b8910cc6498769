//! Chilean RUT validation, normalization, and display formatting.
//!
//! A RUT is 7-8 digits plus a trailing check character (a digit or `K`)
//! computed with the Modulus-11 weighted checksum. Three forms exist:
//!
//! - raw: whatever the user typed, with arbitrary `.`/`-` separators
//! - canonical: separators stripped, uppercased (`123456785`)
//! - display: zero-padded and grouped (`12.345.678-5`)
//!
//! Uniqueness against stored records is a persistence concern and is not
//! checked here.

use std::sync::LazyLock;

use regex::Regex;

use obstetra_model::Verdict;

/// Canonical RUT shape: 7-8 digits followed by a digit or `K`.
static RUT_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{7,8}[0-9K]$").expect("RUT regex must compile"));

/// Strip `.` and `-` separators and uppercase. Performs no validation.
pub fn normalize_rut(raw: &str) -> String {
    raw.chars()
        .filter(|ch| *ch != '.' && *ch != '-')
        .map(|ch| ch.to_ascii_uppercase())
        .collect()
}

/// Validate a RUT's shape and check character.
///
/// Accepts formatted (`12.345.678-5`) and bare (`123456785`) input.
pub fn validate_rut(raw: &str) -> Verdict {
    let cleaned = normalize_rut(raw);
    if !RUT_REGEX.is_match(&cleaned) {
        return Verdict::fail("Invalid RUT format. Use: XX.XXX.XXX-K");
    }

    let (digits, check) = cleaned.split_at(cleaned.len() - 1);
    let expected = check_character(digits);
    if check.chars().next() != Some(expected) {
        return Verdict::fail("Incorrect check digit");
    }

    Verdict::pass("Valid RUT")
}

/// Format a RUT for display as `XX.XXX.XXX-C`.
///
/// The numeric portion is left-zero-padded to 8 digits. Returns `None`
/// when the cleaned value is too short to format.
pub fn format_rut(raw: &str) -> Option<String> {
    let cleaned = normalize_rut(raw);
    let chars: Vec<char> = cleaned.chars().collect();
    if chars.len() < 8 {
        return None;
    }

    let number: String = chars[..chars.len() - 1].iter().collect();
    let check = chars[chars.len() - 1];
    let padded: Vec<char> = format!("{number:0>8}").chars().collect();
    Some(format!(
        "{}.{}.{}-{check}",
        padded[..2].iter().collect::<String>(),
        padded[2..5].iter().collect::<String>(),
        padded[5..8].iter().collect::<String>(),
    ))
}

/// Expected Modulus-11 check character for the numeric portion of a RUT.
///
/// Digits are weighted right to left with the cyclic sequence 2..=7;
/// a remainder of 11 maps to `'0'` and 10 maps to `'K'`.
fn check_character(digits: &str) -> char {
    const WEIGHTS: [u32; 6] = [2, 3, 4, 5, 6, 7];
    let sum: u32 = digits
        .bytes()
        .rev()
        .enumerate()
        .map(|(idx, byte)| u32::from(byte - b'0') * WEIGHTS[idx % WEIGHTS.len()])
        .sum();
    match 11 - (sum % 11) {
        11 => '0',
        10 => 'K',
        remainder => char::from_digit(remainder, 10).expect("remainder is a single digit"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_good_rut_validates() {
        assert!(validate_rut("12.345.678-5").valid);
        assert!(validate_rut("123456785").valid);
        assert!(validate_rut("12345678-5").valid);
    }

    #[test]
    fn wrong_check_digit_is_rejected() {
        let verdict = validate_rut("12.345.678-9");
        assert!(!verdict.valid);
        assert_eq!(verdict.message, "Incorrect check digit");
    }

    #[test]
    fn k_check_character_is_accepted() {
        // 20.347.878 has check character K.
        assert!(validate_rut("20.347.878-K").valid);
        assert!(validate_rut("20347878k").valid);
    }

    #[test]
    fn malformed_input_fails_format_check() {
        for raw in ["", "...---", "abc", "123456", "1-9", "123456789012-3"] {
            let verdict = validate_rut(raw);
            assert!(!verdict.valid, "expected {raw:?} to be invalid");
            assert!(verdict.message.contains("format"));
        }
    }

    #[test]
    fn normalize_strips_separators_and_uppercases() {
        assert_eq!(normalize_rut("12.345.678-k"), "12345678K");
        assert_eq!(normalize_rut("123456785"), "123456785");
    }

    #[test]
    fn format_pads_and_groups() {
        assert_eq!(format_rut("123456785").as_deref(), Some("12.345.678-5"));
        assert_eq!(format_rut("12.345.678-5").as_deref(), Some("12.345.678-5"));
        // 7-digit number gets a leading zero.
        assert_eq!(format_rut("7654321-6").as_deref(), Some("07.654.321-6"));
    }

    #[test]
    fn format_rejects_short_values() {
        assert_eq!(format_rut("1234567"), None);
        assert_eq!(format_rut(""), None);
    }
}
