use gradle_depdiff::prelude::*;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

/// Mock ReportReader backed by an in-memory map of path to report
#[derive(Default, Clone)]
pub struct MockReportReader {
    reports: HashMap<PathBuf, Report>,
    pub reads: Arc<Mutex<Vec<PathBuf>>>,
}

#[allow(dead_code)]
impl MockReportReader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_report(mut self, path: impl Into<PathBuf>, report: Report) -> Self {
        self.reports.insert(path.into(), report);
        self
    }

    pub fn read_count(&self) -> usize {
        self.reads.lock().unwrap().len()
    }
}

impl ReportReader for MockReportReader {
    fn read_report(&self, path: &Path) -> Result<Report> {
        self.reads.lock().unwrap().push(path.to_path_buf());
        self.reports.get(path).cloned().ok_or_else(|| {
            DepDiffError::ReportReadError {
                path: path.to_path_buf(),
                details: "not in mock".to_string(),
            }
            .into()
        })
    }
}
