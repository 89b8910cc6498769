//! Integration tests for CSV ingest and batch validation.

use chrono::NaiveDate;

use obstetra_cli::ingest::{read_control_records, read_intake_records};
use obstetra_validate::{validate_patient_intake, validate_prenatal_control};

const INTAKE_CSV: &str = "\
rut,first_name,paternal_surname,maternal_surname,birth_date,age,phone,email
12.345.678-5,Maria,Gonzalez,Rojas,1997-03-14,29,+56912345678,maria.gonzalez@hospital.cl
7654321-6,Ana,Perez,Soto,,31,,
";

const CONTROLS_CSV: &str = "\
rut,control_date,gestational_weeks,weight_kg,systolic,diastolic,heart_rate,glucemia,notes
12.345.678-5,2026-08-01,24,68.5,120,80,78,95,Routine visit without findings
12.345.678-5,2026-08-01,24,68.5,120,80,,160,
";

fn as_of() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 8, 5).expect("valid test date")
}

#[test]
fn intake_rows_deserialize_with_blank_optionals() {
    let records = read_intake_records(INTAKE_CSV.as_bytes()).expect("parse intake csv");
    assert_eq!(records.len(), 2);
    assert_eq!(records[0].first_name, "Maria");
    assert_eq!(records[0].phone.as_deref(), Some("+56912345678"));
    assert_eq!(records[1].birth_date, None);
    assert_eq!(records[1].phone, None);
    assert_eq!(records[1].email, None);
}

#[test]
fn intake_rows_validate_cleanly() {
    let records = read_intake_records(INTAKE_CSV.as_bytes()).expect("parse intake csv");
    for record in &records {
        let report = validate_patient_intake(record, as_of());
        assert!(report.issues.is_empty(), "issues: {:?}", report.issues);
    }
}

#[test]
fn control_rows_carry_glucemia_warning() {
    let records = read_control_records(CONTROLS_CSV.as_bytes()).expect("parse controls csv");
    assert_eq!(records.len(), 2);

    let clean = validate_prenatal_control(&records[0], as_of());
    assert!(clean.issues.is_empty(), "issues: {:?}", clean.issues);

    let flagged = validate_prenatal_control(&records[1], as_of());
    assert!(!flagged.has_errors());
    assert_eq!(flagged.warning_count(), 1);
}

#[test]
fn missing_required_column_is_an_error() {
    let csv = "rut,first_name\n12.345.678-5,Maria\n";
    assert!(read_intake_records(csv.as_bytes()).is_err());
}

#[test]
fn malformed_rows_surface_the_row_number() {
    let csv = "\
rut,first_name,paternal_surname,maternal_surname,birth_date,age,phone,email
12.345.678-5,Maria,Gonzalez,Rojas,1997-03-14,29,+56912345678
";
    let error = read_intake_records(csv.as_bytes()).expect_err("short row must fail");
    assert!(format!("{error:#}").contains("row 1"));
}
