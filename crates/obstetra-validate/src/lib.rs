//! Field validation for obstetric clinical records.
//!
//! Every validator is a pure function from input text to a structured
//! verdict with a display-ready message:
//!
//! - **RUT**: 7-8 digits plus a Modulus-11 check character → **Error**
//!   on format or checksum failure
//! - **Ranges**: age, blood pressure, weight, gestational weeks →
//!   **Error** outside the clinical bounds
//! - **Glucemia**: hard bounds 0-500 mg/dL → **Error**; outside the
//!   70-150 band but in bounds → valid with **Warning**
//! - **Phone/email/description**: lexical shape and length checks
//!
//! Malformed input never panics or returns `Err`; it degrades to an
//! invalid verdict. All functions are stateless and safe to call
//! concurrently.

mod dates;
mod phone;
mod ranges;
mod records;
mod rut;
mod text;

pub use dates::{validate_birth_date, validate_control_date};
pub use phone::{normalize_phone, validate_phone};
pub use ranges::{
    validate_age, validate_blood_pressure, validate_gestational_weeks, validate_glucemia,
    validate_range, validate_weight,
};
pub use records::{validate_patient_intake, validate_prenatal_control, validate_staff_profile};
pub use rut::{format_rut, normalize_rut, validate_rut};
pub use text::{DESCRIPTION_MAX, DESCRIPTION_MIN, validate_description, validate_email};

use std::path::{Path, PathBuf};

use anyhow::Result;
use chrono::Utc;
use serde::Serialize;

use obstetra_model::{FieldIssue, RecordReport};

const REPORT_SCHEMA: &str = "obstetra.validation-report";
const REPORT_SCHEMA_VERSION: u32 = 1;

#[derive(Debug, Serialize)]
pub struct ValidationReportPayload {
    pub schema: &'static str,
    pub schema_version: u32,
    pub generated_at: String,
    pub source: String,
    pub reports: Vec<RecordReportSummary>,
}

#[derive(Debug, Serialize)]
pub struct RecordReportSummary {
    pub record: String,
    pub error_count: usize,
    pub warning_count: usize,
    pub issues: Vec<FieldIssue>,
}

pub fn has_validation_errors(reports: &[RecordReport]) -> bool {
    reports.iter().any(RecordReport::has_errors)
}

/// Write a versioned JSON validation report to `output_dir`.
///
/// Returns the path of the written file.
pub fn write_validation_report_json(
    output_dir: &Path,
    source: &str,
    reports: &[RecordReport],
) -> Result<PathBuf> {
    std::fs::create_dir_all(output_dir)?;
    let output_path = output_dir.join("validation_report.json");
    let payload = ValidationReportPayload {
        schema: REPORT_SCHEMA,
        schema_version: REPORT_SCHEMA_VERSION,
        generated_at: Utc::now().to_rfc3339(),
        source: source.to_string(),
        reports: reports
            .iter()
            .map(|report| RecordReportSummary {
                record: report.record_id.clone(),
                error_count: report.error_count(),
                warning_count: report.warning_count(),
                issues: report.issues.clone(),
            })
            .collect(),
    };
    let json = serde_json::to_string_pretty(&payload)?;
    std::fs::write(&output_path, format!("{json}\n"))?;
    Ok(output_path)
}
