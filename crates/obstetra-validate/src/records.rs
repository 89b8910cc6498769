//! Record-level validation.
//!
//! Applies the field validators over a whole intake, prenatal control,
//! or staff profile record and collects the outcomes into a
//! [`RecordReport`]. Hard failures become `Error` issues; the glucemia
//! soft warning becomes a `Warning` issue. Uniqueness of a RUT against
//! stored records is a persistence concern and is not checked here.

use chrono::NaiveDate;

use obstetra_model::{
    FieldIssue, PatientIntake, PrenatalControl, RecordReport, StaffProfile, StaffRole, Verdict,
};

use crate::dates::{validate_birth_date, validate_control_date};
use crate::phone::validate_phone;
use crate::ranges::{
    validate_age, validate_blood_pressure, validate_gestational_weeks, validate_glucemia,
    validate_range, validate_weight,
};
use crate::rut::{normalize_rut, validate_rut};
use crate::text::{DESCRIPTION_MAX, DESCRIPTION_MIN, validate_description, validate_email};

/// Maximum length for specialty and department fields.
const STAFF_FIELD_MAX: usize = 100;

/// Validate a patient intake record.
///
/// `today` is the reference date for the birth-date check.
pub fn validate_patient_intake(intake: &PatientIntake, today: NaiveDate) -> RecordReport {
    let mut issues = Vec::new();

    push_if_invalid(&mut issues, "rut", validate_rut(&intake.rut));
    require(&mut issues, "first_name", "First name", &intake.first_name);
    require(
        &mut issues,
        "paternal_surname",
        "Paternal surname",
        &intake.paternal_surname,
    );
    require(
        &mut issues,
        "maternal_surname",
        "Maternal surname",
        &intake.maternal_surname,
    );
    push_if_invalid(&mut issues, "age", validate_age(&intake.age));

    if let Some(text) = present(&intake.birth_date) {
        match parse_iso_date(text) {
            Some(birth) => {
                push_if_invalid(&mut issues, "birth_date", validate_birth_date(birth, today));
            }
            None => issues.push(FieldIssue::error(
                "birth_date",
                "Birth date must be an ISO date (YYYY-MM-DD)",
            )),
        }
    }
    if let Some(phone) = present(&intake.phone) {
        push_if_invalid(&mut issues, "phone", validate_phone(phone));
    }
    if let Some(email) = present(&intake.email) {
        push_if_invalid(&mut issues, "email", validate_email(email));
    }

    RecordReport {
        record_id: normalize_rut(&intake.rut),
        issues,
    }
}

/// Validate a prenatal control record.
pub fn validate_prenatal_control(control: &PrenatalControl, today: NaiveDate) -> RecordReport {
    let mut issues = Vec::new();

    push_if_invalid(&mut issues, "rut", validate_rut(&control.rut));
    if let Some(text) = present(&control.control_date) {
        match parse_iso_date(text) {
            Some(date) => {
                push_if_invalid(&mut issues, "control_date", validate_control_date(date, today));
            }
            None => issues.push(FieldIssue::error(
                "control_date",
                "Control date must be an ISO date (YYYY-MM-DD)",
            )),
        }
    }
    push_if_invalid(
        &mut issues,
        "gestational_weeks",
        validate_gestational_weeks(&control.gestational_weeks),
    );
    push_if_invalid(&mut issues, "weight_kg", validate_weight(&control.weight_kg));
    push_if_invalid(
        &mut issues,
        "blood_pressure",
        validate_blood_pressure(&control.systolic, &control.diastolic),
    );
    if let Some(heart_rate) = present(&control.heart_rate) {
        push_if_invalid(
            &mut issues,
            "heart_rate",
            validate_range(heart_rate, 40.0, 200.0, "Heart rate"),
        );
    }
    if let Some(glucemia) = present(&control.glucemia) {
        let verdict = validate_glucemia(glucemia);
        if !verdict.valid {
            issues.push(FieldIssue::error("glucemia", verdict.message));
        } else if verdict.warning {
            issues.push(FieldIssue::warning(
                "glucemia",
                "Glucemia outside the 70-150 mg/dL normal band",
            ));
        }
    }
    if let Some(notes) = present(&control.notes) {
        push_if_invalid(
            &mut issues,
            "notes",
            validate_description(notes, DESCRIPTION_MIN, DESCRIPTION_MAX),
        );
    }

    RecordReport {
        record_id: normalize_rut(&control.rut),
        issues,
    }
}

/// Validate a staff profile record.
pub fn validate_staff_profile(profile: &StaffProfile) -> RecordReport {
    let mut issues = Vec::new();

    let record_id = match profile.role.parse::<StaffRole>() {
        Ok(role) => role.as_str().to_string(),
        Err(error) => {
            issues.push(FieldIssue::error("role", error.to_string()));
            profile.role.trim().to_lowercase()
        }
    };

    for (field, label, value) in [
        ("specialty", "Specialty", &profile.specialty),
        ("department", "Department", &profile.department),
    ] {
        if let Some(text) = present(value)
            && text.chars().count() > STAFF_FIELD_MAX
        {
            issues.push(FieldIssue::error(
                field,
                format!("{label} cannot exceed {STAFF_FIELD_MAX} characters"),
            ));
        }
    }
    if let Some(phone) = present(&profile.phone) {
        push_if_invalid(&mut issues, "phone", validate_phone(phone));
    }

    RecordReport { record_id, issues }
}

fn push_if_invalid(issues: &mut Vec<FieldIssue>, field: &str, verdict: Verdict) {
    if !verdict.valid {
        issues.push(FieldIssue::error(field, verdict.message));
    }
}

fn require(issues: &mut Vec<FieldIssue>, field: &str, label: &str, value: &str) {
    if value.trim().is_empty() {
        issues.push(FieldIssue::error(field, format!("{label} is required")));
    }
}

/// Trimmed value of an optional field, treating blanks as absent.
fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}

fn parse_iso_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d").ok()
}
