//! Numeric range validators for clinical measurements.
//!
//! Input arrives as text (form fields, CSV cells) and is parsed here;
//! anything that does not parse degrades to an invalid verdict rather
//! than an error. Bounds are inclusive.
//!
//! - age: 12-60 years
//! - blood pressure: systolic 60-220 mmHg, diastolic 40-140 mmHg,
//!   diastolic strictly below systolic
//! - glucemia: hard bounds 0-500 mg/dL, soft band 70-150 mg/dL
//! - weight: 30-200 kg
//! - gestational weeks: 1-42

use obstetra_model::{GlucemiaVerdict, Verdict};

fn parse_int(value: &str) -> Option<i64> {
    value.trim().parse::<i64>().ok()
}

fn parse_float(value: &str) -> Option<f64> {
    value.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Validate a maternal age in years.
pub fn validate_age(value: &str) -> Verdict {
    let Some(age) = parse_int(value) else {
        return Verdict::fail("Age must be a number");
    };
    if age < 12 {
        return Verdict::fail("Minimum age is 12 years");
    }
    if age > 60 {
        return Verdict::fail("Maximum age is 60 years");
    }
    Verdict::pass("Valid age")
}

/// Validate a blood pressure pair.
///
/// Both readings must be in range and the diastolic reading must be
/// strictly below the systolic one.
pub fn validate_blood_pressure(systolic: &str, diastolic: &str) -> Verdict {
    let (Some(systolic), Some(diastolic)) = (parse_int(systolic), parse_int(diastolic)) else {
        return Verdict::fail("Blood pressure readings must be numbers");
    };
    if !(60..=220).contains(&systolic) {
        return Verdict::fail("Systolic pressure must be between 60-220 mmHg");
    }
    if !(40..=140).contains(&diastolic) {
        return Verdict::fail("Diastolic pressure must be between 40-140 mmHg");
    }
    if diastolic >= systolic {
        return Verdict::fail("Diastolic pressure must be lower than systolic");
    }
    Verdict::pass("Valid blood pressure")
}

/// Validate a capillary glucemia reading in mg/dL.
///
/// Readings outside 0-500 are invalid. Readings inside the hard bounds
/// but outside the 70-150 band are valid with `warning` set.
pub fn validate_glucemia(value: &str) -> GlucemiaVerdict {
    let Some(glucemia) = parse_float(value) else {
        return GlucemiaVerdict::fail("Glucemia must be a number");
    };
    if !(0.0..=500.0).contains(&glucemia) {
        return GlucemiaVerdict::fail("Glucemia out of range (0-500 mg/dL)");
    }
    if !(70.0..=150.0).contains(&glucemia) {
        return GlucemiaVerdict::atypical("Glucemia within accepted range");
    }
    GlucemiaVerdict::normal("Normal glucemia")
}

/// Validate a weight in kilograms.
pub fn validate_weight(value: &str) -> Verdict {
    let Some(weight) = parse_float(value) else {
        return Verdict::fail("Weight must be a number");
    };
    if !(30.0..=200.0).contains(&weight) {
        return Verdict::fail("Weight must be between 30-200 kg");
    }
    Verdict::pass("Valid weight")
}

/// Validate gestational weeks.
pub fn validate_gestational_weeks(value: &str) -> Verdict {
    let Some(weeks) = parse_int(value) else {
        return Verdict::fail("Gestational weeks must be a number");
    };
    if !(1..=42).contains(&weeks) {
        return Verdict::fail("Gestational weeks must be between 1-42");
    }
    Verdict::pass("Valid gestational weeks")
}

/// Generic inclusive range check, parameterized by field name for
/// message interpolation.
pub fn validate_range(value: &str, min: f64, max: f64, field_name: &str) -> Verdict {
    let Some(value) = parse_float(value) else {
        return Verdict::fail(format!("{field_name} must be a number"));
    };
    if value < min || value > max {
        return Verdict::fail(format!("{field_name} must be between {min}-{max}"));
    }
    Verdict::pass(format!("Valid {field_name}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn age_boundaries() {
        assert!(!validate_age("11").valid);
        assert!(validate_age("12").valid);
        assert!(validate_age("60").valid);
        assert!(!validate_age("61").valid);
        assert!(!validate_age("twelve").valid);
        assert_eq!(validate_age("x").message, "Age must be a number");
    }

    #[test]
    fn blood_pressure_pair_rules() {
        assert!(validate_blood_pressure("120", "80").valid);
        // Diastolic >= systolic is a cross-field failure even when both
        // readings are individually in range.
        let swapped = validate_blood_pressure("80", "120").message;
        assert!(swapped.contains("lower than systolic"));
        assert!(!validate_blood_pressure("59", "40").valid);
        assert!(!validate_blood_pressure("120", "141").valid);
        assert!(!validate_blood_pressure("", "80").valid);
    }

    #[test]
    fn glucemia_soft_warning_band() {
        let normal = validate_glucemia("100");
        assert!(normal.valid && !normal.warning);

        let high = validate_glucemia("160");
        assert!(high.valid && high.warning);

        let low = validate_glucemia("60");
        assert!(low.valid && low.warning);

        let out = validate_glucemia("600");
        assert!(!out.valid && !out.warning);

        let not_a_number = validate_glucemia("high");
        assert!(!not_a_number.valid);
    }

    #[test]
    fn glucemia_rejects_non_finite_input() {
        assert!(!validate_glucemia("NaN").valid);
        assert!(!validate_glucemia("inf").valid);
    }

    #[test]
    fn weight_bounds() {
        assert!(validate_weight("65.5").valid);
        assert!(validate_weight("30").valid);
        assert!(validate_weight("200").valid);
        assert!(!validate_weight("29.9").valid);
        assert!(!validate_weight("201").valid);
        assert!(!validate_weight("heavy").valid);
    }

    #[test]
    fn gestational_weeks_bounds() {
        assert!(validate_gestational_weeks("1").valid);
        assert!(validate_gestational_weeks("42").valid);
        assert!(!validate_gestational_weeks("0").valid);
        assert!(!validate_gestational_weeks("43").valid);
        assert!(!validate_gestational_weeks("12.5").valid);
    }

    #[test]
    fn generic_range_interpolates_field_name() {
        let verdict = validate_range("250", 40.0, 200.0, "Heart rate");
        assert!(!verdict.valid);
        assert_eq!(verdict.message, "Heart rate must be between 40-200");

        assert!(validate_range("72", 40.0, 200.0, "Heart rate").valid);
        assert_eq!(
            validate_range("fast", 40.0, 200.0, "Heart rate").message,
            "Heart rate must be a number"
        );
    }
}
