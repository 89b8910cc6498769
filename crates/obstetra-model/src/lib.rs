pub mod error;
pub mod record;
pub mod report;
pub mod roles;
pub mod verdict;

pub use error::{ModelError, Result};
pub use record::{PatientIntake, PrenatalControl, StaffProfile};
pub use report::{FieldIssue, IssueSeverity, RecordReport};
pub use roles::{ClinicalAction, StaffRole};
pub use verdict::{GlucemiaVerdict, Verdict};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_report_counts() {
        let report = RecordReport {
            record_id: "123456785".to_string(),
            issues: vec![
                FieldIssue::error("age", "Age must be a number"),
                FieldIssue::warning("glucemia", "Glucemia within accepted range"),
            ],
        };
        assert_eq!(report.error_count(), 1);
        assert_eq!(report.warning_count(), 1);
        assert!(report.has_errors());
    }

    #[test]
    fn report_serializes() {
        let report = RecordReport {
            record_id: "123456785".to_string(),
            issues: vec![FieldIssue::error("rut", "Incorrect check digit")],
        };
        let json = serde_json::to_string(&report).expect("serialize report");
        assert!(json.contains("\"record\":\"123456785\""));
        assert!(json.contains("\"severity\":\"error\""));
        let round: RecordReport = serde_json::from_str(&json).expect("deserialize report");
        assert_eq!(round.record_id, "123456785");
        assert_eq!(round.issues.len(), 1);
    }

    #[test]
    fn intake_deserializes_with_missing_optionals() {
        let json = r#"{
            "rut": "12.345.678-5",
            "first_name": "Maria",
            "paternal_surname": "Gonzalez",
            "maternal_surname": "Rojas",
            "age": "29"
        }"#;
        let intake: PatientIntake = serde_json::from_str(json).expect("deserialize intake");
        assert_eq!(intake.phone, None);
        assert_eq!(intake.email, None);
        assert_eq!(intake.age, "29");
    }
}
