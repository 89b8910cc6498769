//! Transient record values as captured from a form or CSV row.
//!
//! All fields arrive as text; validation parses and judges them without
//! mutating the record. None of these types has persistence semantics.

use serde::{Deserialize, Serialize};

/// Patient intake fields.
///
/// Optional fields deserialize from empty CSV cells as `None`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PatientIntake {
    pub rut: String,
    pub first_name: String,
    pub paternal_surname: String,
    pub maternal_surname: String,
    /// ISO date (`YYYY-MM-DD`), checked against the reference date.
    pub birth_date: Option<String>,
    pub age: String,
    pub phone: Option<String>,
    pub email: Option<String>,
}

/// A prenatal control visit's measurements.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PrenatalControl {
    /// RUT of the patient the control belongs to.
    pub rut: String,
    /// ISO date of the visit (`YYYY-MM-DD`).
    pub control_date: Option<String>,
    pub gestational_weeks: String,
    pub weight_kg: String,
    pub systolic: String,
    pub diastolic: String,
    /// Heart rate in bpm.
    pub heart_rate: Option<String>,
    /// Capillary glucemia in mg/dL.
    pub glucemia: Option<String>,
    pub notes: Option<String>,
}

/// Staff profile fields, as submitted when creating or editing a profile.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StaffProfile {
    pub role: String,
    pub specialty: Option<String>,
    pub department: Option<String>,
    pub phone: Option<String>,
}
