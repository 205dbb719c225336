use crate::application::read_models::ComparisonView;
use std::path::PathBuf;

/// CompareRequest - two stored reports to diff
#[derive(Debug, Clone)]
pub struct CompareRequest {
    pub old_report: PathBuf,
    pub new_report: PathBuf,
    /// `group:name` patterns removed from both sides before diffing
    pub exclude_patterns: Vec<String>,
}

impl CompareRequest {
    pub fn new(old_report: PathBuf, new_report: PathBuf, exclude_patterns: Vec<String>) -> Self {
        Self {
            old_report,
            new_report,
            exclude_patterns,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CompareResponse {
    pub comparison: ComparisonView,
}

impl CompareResponse {
    pub fn has_changes(&self) -> bool {
        !self.comparison.diff.is_empty()
    }
}
