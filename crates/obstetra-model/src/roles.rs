//! Staff roles and their clinical permissions.
//!
//! The care team is modeled as four fixed roles. Permission checks are
//! plain enumerated mappings owned by this layer; authentication and
//! session handling stay with the host application.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ModelError;

/// Staff role within the obstetric care unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StaffRole {
    /// Administrative staff: general system management.
    Administrative,
    /// Midwife: obstetric nursing professional.
    Midwife,
    /// Physician: specialist doctor.
    Physician,
    /// Nursing technician (TENS).
    NursingTechnician,
}

/// Clinical actions gated by role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ClinicalAction {
    CreatePatient,
    ViewRecord,
    EditHistory,
    Diagnose,
    RecordProcedure,
    AdministerMedication,
}

impl StaffRole {
    pub const ALL: [StaffRole; 4] = [
        StaffRole::Administrative,
        StaffRole::Midwife,
        StaffRole::Physician,
        StaffRole::NursingTechnician,
    ];

    /// Canonical lowercase key, as stored in profile records.
    pub fn as_str(&self) -> &'static str {
        match self {
            StaffRole::Administrative => "administrative",
            StaffRole::Midwife => "midwife",
            StaffRole::Physician => "physician",
            StaffRole::NursingTechnician => "tens",
        }
    }

    /// Formal title for display.
    pub fn formal_title(&self) -> &'static str {
        match self {
            StaffRole::Administrative => "Administrative Staff",
            StaffRole::Midwife => "Midwife",
            StaffRole::Physician => "Physician",
            StaffRole::NursingTechnician => "Nursing Technician (TENS)",
        }
    }

    /// Whether this role is allowed to perform a clinical action.
    ///
    /// Record-keeping actions are restricted to administrative staff,
    /// midwives, and physicians; procedure and medication logging is
    /// additionally open to nursing technicians.
    pub fn may_perform(&self, action: ClinicalAction) -> bool {
        match action {
            ClinicalAction::CreatePatient
            | ClinicalAction::ViewRecord
            | ClinicalAction::EditHistory
            | ClinicalAction::Diagnose => !matches!(self, StaffRole::NursingTechnician),
            ClinicalAction::RecordProcedure | ClinicalAction::AdministerMedication => true,
        }
    }

    /// Actions this role may perform, in declaration order.
    pub fn permitted_actions(&self) -> Vec<ClinicalAction> {
        ClinicalAction::ALL
            .into_iter()
            .filter(|action| self.may_perform(*action))
            .collect()
    }
}

impl ClinicalAction {
    pub const ALL: [ClinicalAction; 6] = [
        ClinicalAction::CreatePatient,
        ClinicalAction::ViewRecord,
        ClinicalAction::EditHistory,
        ClinicalAction::Diagnose,
        ClinicalAction::RecordProcedure,
        ClinicalAction::AdministerMedication,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ClinicalAction::CreatePatient => "create patient",
            ClinicalAction::ViewRecord => "view record",
            ClinicalAction::EditHistory => "edit history",
            ClinicalAction::Diagnose => "diagnose",
            ClinicalAction::RecordProcedure => "record procedure",
            ClinicalAction::AdministerMedication => "administer medication",
        }
    }
}

impl fmt::Display for StaffRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Display for ClinicalAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for StaffRole {
    type Err = ModelError;

    /// Parse a role string (case-insensitive). Accepts the canonical key
    /// and the legacy Spanish choice values found in older profile data.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "administrative" | "administrativo" | "admin" => Ok(StaffRole::Administrative),
            "midwife" | "matrona" => Ok(StaffRole::Midwife),
            "physician" | "medico" | "médico" => Ok(StaffRole::Physician),
            "tens" | "nursing technician" | "technician" => Ok(StaffRole::NursingTechnician),
            _ => Err(ModelError::UnknownRole(s.trim().to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_parsing_accepts_legacy_values() {
        assert_eq!("matrona".parse::<StaffRole>().unwrap(), StaffRole::Midwife);
        assert_eq!(
            "Administrativo".parse::<StaffRole>().unwrap(),
            StaffRole::Administrative
        );
        assert_eq!(
            "TENS".parse::<StaffRole>().unwrap(),
            StaffRole::NursingTechnician
        );
        assert!("janitor".parse::<StaffRole>().is_err());
    }

    #[test]
    fn technician_permissions_are_limited() {
        let tens = StaffRole::NursingTechnician;
        assert!(!tens.may_perform(ClinicalAction::CreatePatient));
        assert!(!tens.may_perform(ClinicalAction::Diagnose));
        assert!(tens.may_perform(ClinicalAction::RecordProcedure));
        assert!(tens.may_perform(ClinicalAction::AdministerMedication));
    }

    #[test]
    fn clinical_staff_have_full_permissions() {
        for role in [
            StaffRole::Administrative,
            StaffRole::Midwife,
            StaffRole::Physician,
        ] {
            assert_eq!(role.permitted_actions().len(), ClinicalAction::ALL.len());
        }
    }
}
