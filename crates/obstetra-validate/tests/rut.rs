//! Integration tests for RUT validation and formatting.

use obstetra_validate::{format_rut, normalize_rut, validate_rut};
use proptest::prelude::*;

const CHECK_CANDIDATES: &str = "0123456789K";

#[test]
fn known_checksum_examples() {
    assert!(validate_rut("12.345.678-5").valid);

    let wrong = validate_rut("12.345.678-9");
    assert!(!wrong.valid);
    assert!(wrong.message.contains("check digit"));
}

#[test]
fn validation_is_idempotent() {
    for raw in ["12.345.678-5", "12.345.678-9", "garbage", ""] {
        assert_eq!(validate_rut(raw), validate_rut(raw));
    }
}

proptest! {
    /// For every 7-8 digit number exactly one of the eleven candidate
    /// check characters yields a valid RUT.
    #[test]
    fn exactly_one_check_character_validates(number in 1_000_000u32..=99_999_999) {
        let valid: Vec<char> = CHECK_CANDIDATES
            .chars()
            .filter(|ch| validate_rut(&format!("{number}{ch}")).valid)
            .collect();
        prop_assert_eq!(valid.len(), 1, "number {} had valid set {:?}", number, valid);
    }

    /// Formatting is stable under separator normalization.
    #[test]
    fn format_is_stable_under_normalization(number in 1_000_000u32..=99_999_999) {
        for ch in CHECK_CANDIDATES.chars() {
            let raw = format!("{number}-{ch}");
            prop_assert_eq!(format_rut(&normalize_rut(&raw)), format_rut(&raw));
        }
    }

    /// The display form of a valid RUT still validates.
    #[test]
    fn formatting_preserves_validity(number in 1_000_000u32..=99_999_999) {
        for ch in CHECK_CANDIDATES.chars() {
            let bare = format!("{number}{ch}");
            if validate_rut(&bare).valid {
                let display = format_rut(&bare).expect("valid RUT is formattable");
                prop_assert!(validate_rut(&display).valid);
            }
        }
    }
}
