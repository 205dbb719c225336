use crate::dependency_analysis::domain::{DependencyDiff, Report};
use std::path::Path;

/// One side of a comparison
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SnapshotView {
    /// Version name, short commit, or file name of the report
    pub label: String,
    /// Dependencies considered after exclusions
    pub total: usize,
}

impl SnapshotView {
    pub fn from_report(report: &Report, path: &Path, total: usize) -> Self {
        let label = report.label().unwrap_or_else(|| {
            path.file_name()
                .map(|name| name.to_string_lossy().into_owned())
                .unwrap_or_else(|| path.display().to_string())
        });
        Self { label, total }
    }
}

/// Everything a formatter needs to render a comparison
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComparisonView {
    pub old: SnapshotView,
    pub new: SnapshotView,
    pub diff: DependencyDiff,
}

impl ComparisonView {
    /// `old...new` heading used by every format
    pub fn title(&self) -> String {
        format!("{}...{}", self.old.label, self.new.label)
    }
}
