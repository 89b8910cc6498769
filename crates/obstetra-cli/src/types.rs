use std::path::PathBuf;

use obstetra_model::RecordReport;

#[derive(Debug)]
pub struct BatchResult {
    pub source: PathBuf,
    pub reports: Vec<RecordReport>,
    pub report_path: Option<PathBuf>,
    pub has_errors: bool,
}
