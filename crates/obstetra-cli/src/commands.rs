use anyhow::{Context, Result, bail};
use chrono::{Local, NaiveDate};
use comfy_table::Table;
use tracing::{error, info, warn};

use obstetra_cli::ingest::{read_controls_csv, read_intake_csv};
use obstetra_cli::logging::redact_value;
use obstetra_model::{IssueSeverity, RecordReport, StaffRole, Verdict};
use obstetra_validate::{
    DESCRIPTION_MAX, DESCRIPTION_MIN, format_rut, has_validation_errors, normalize_phone,
    validate_age, validate_blood_pressure, validate_description, validate_email,
    validate_gestational_weeks, validate_glucemia, validate_patient_intake, validate_phone,
    validate_prenatal_control, validate_rut, validate_weight, write_validation_report_json,
};

use crate::cli::{BatchArgs, CheckArgs, FieldArg};
use crate::summary::apply_table_style;
use crate::types::BatchResult;

/// Validate a single field value. Returns whether the value passed.
pub fn run_check(args: &CheckArgs) -> Result<bool> {
    let value = args.values[0].as_str();
    let verdict = match args.field {
        FieldArg::Rut => validate_rut(value),
        FieldArg::Age => validate_age(value),
        FieldArg::Phone => validate_phone(value),
        FieldArg::Email => validate_email(value),
        FieldArg::Pressure => {
            let Some(diastolic) = args.values.get(1) else {
                bail!("blood pressure takes two values: SYSTOLIC DIASTOLIC");
            };
            validate_blood_pressure(value, diastolic)
        }
        FieldArg::Glucemia => {
            let glucemia = validate_glucemia(value);
            if glucemia.valid && glucemia.warning {
                warn!("glucemia outside the 70-150 mg/dL normal band");
            }
            Verdict {
                valid: glucemia.valid,
                message: glucemia.message,
            }
        }
        FieldArg::Weight => validate_weight(value),
        FieldArg::Weeks => validate_gestational_weeks(value),
        FieldArg::Description => validate_description(value, DESCRIPTION_MIN, DESCRIPTION_MAX),
    };

    println!("{}", verdict.message);
    if verdict.valid && args.normalize {
        let normalized = match args.field {
            FieldArg::Rut => format_rut(value),
            FieldArg::Phone => normalize_phone(value),
            _ => None,
        };
        if let Some(normalized) = normalized {
            println!("{normalized}");
        }
    }
    Ok(verdict.valid)
}

/// Validate a CSV batch of patient intake rows.
pub fn run_intake(args: &BatchArgs) -> Result<BatchResult> {
    let as_of = reference_date(args)?;
    let records = read_intake_csv(&args.input)
        .with_context(|| format!("read intake file {}", args.input.display()))?;
    info!(rows = records.len(), "validating intake records");

    let reports: Vec<RecordReport> = records
        .iter()
        .map(|record| validate_patient_intake(record, as_of))
        .collect();
    finish_batch(args, reports)
}

/// Validate a CSV batch of prenatal control rows.
pub fn run_controls(args: &BatchArgs) -> Result<BatchResult> {
    let as_of = reference_date(args)?;
    let records = read_controls_csv(&args.input)
        .with_context(|| format!("read controls file {}", args.input.display()))?;
    info!(rows = records.len(), "validating prenatal control records");

    let reports: Vec<RecordReport> = records
        .iter()
        .map(|record| validate_prenatal_control(record, as_of))
        .collect();
    finish_batch(args, reports)
}

/// Print the role/permission table.
pub fn run_roles() {
    let mut table = Table::new();
    table.set_header(vec!["Role", "Title", "Permitted actions"]);
    apply_table_style(&mut table);
    for role in StaffRole::ALL {
        let actions: Vec<String> = role
            .permitted_actions()
            .iter()
            .map(ToString::to_string)
            .collect();
        table.add_row(vec![
            role.as_str().to_string(),
            role.formal_title().to_string(),
            actions.join(", "),
        ]);
    }
    println!("{table}");
}

fn finish_batch(args: &BatchArgs, reports: Vec<RecordReport>) -> Result<BatchResult> {
    for (idx, report) in reports.iter().enumerate() {
        let row = idx + 1;
        for issue in &report.issues {
            match issue.severity {
                IssueSeverity::Error => {
                    error!(
                        row,
                        record = redact_value(&report.record_id),
                        field = %issue.field,
                        "{}",
                        issue.message
                    );
                }
                IssueSeverity::Warning => {
                    warn!(
                        row,
                        record = redact_value(&report.record_id),
                        field = %issue.field,
                        "{}",
                        issue.message
                    );
                }
            }
        }
    }

    let source_name = args
        .input
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| args.input.display().to_string());
    let report_path = match &args.report_dir {
        Some(dir) => Some(
            write_validation_report_json(dir, &source_name, &reports)
                .context("write validation report")?,
        ),
        None => None,
    };

    let has_errors = has_validation_errors(&reports);
    Ok(BatchResult {
        source: args.input.clone(),
        reports,
        report_path,
        has_errors,
    })
}

fn reference_date(args: &BatchArgs) -> Result<NaiveDate> {
    match &args.as_of {
        Some(text) => NaiveDate::parse_from_str(text, "%Y-%m-%d")
            .with_context(|| format!("invalid --as-of date: {text}")),
        None => Ok(Local::now().date_naive()),
    }
}
