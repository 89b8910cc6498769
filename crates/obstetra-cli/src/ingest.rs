//! CSV ingest for intake and prenatal-control batches.
//!
//! Files must carry a header row naming the record fields; blank cells
//! in optional columns become `None`.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result};
use serde::de::DeserializeOwned;

use obstetra_model::{PatientIntake, PrenatalControl};

pub fn read_intake_csv(path: &Path) -> Result<Vec<PatientIntake>> {
    let file = File::open(path).with_context(|| format!("open {}", path.display()))?;
    read_intake_records(file)
}

/// Read patient intake rows from any CSV source.
pub fn read_intake_records<R: Read>(reader: R) -> Result<Vec<PatientIntake>> {
    read_records(reader)
}

pub fn read_controls_csv(path: &Path) -> Result<Vec<PrenatalControl>> {
    let file = File::open(path).with_context(|| format!("open {}", path.display()))?;
    read_control_records(file)
}

/// Read prenatal control rows from any CSV source.
pub fn read_control_records<R: Read>(reader: R) -> Result<Vec<PrenatalControl>> {
    read_records(reader)
}

fn read_records<R: Read, T: DeserializeOwned>(reader: R) -> Result<Vec<T>> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut records = Vec::new();
    for (idx, record) in csv_reader.deserialize().enumerate() {
        let record: T = record.with_context(|| format!("parse CSV row {}", idx + 1))?;
        records.push(record);
    }
    Ok(records)
}
