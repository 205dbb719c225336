use crate::dependency_analysis::domain::Report;
use crate::ports::outbound::{DependencyOutputReader, InputSource, ReportReader};
use crate::shared::error::DepDiffError;
use crate::shared::security::{read_regular_file, MAX_FILE_SIZE};
use crate::shared::Result;
use std::io::{self, Read};
use std::path::Path;

/// FileSystemReader adapter for dependency dumps and report files
///
/// Implements both reading ports. Files are read through the shared
/// security checks (no symlinks, regular files only, size limit).
#[derive(Debug, Clone, Copy, Default)]
pub struct FileSystemReader;

impl FileSystemReader {
    pub fn new() -> Self {
        Self
    }

    fn read_stdin(&self) -> Result<String> {
        let mut content = String::new();
        io::stdin()
            .lock()
            .take(MAX_FILE_SIZE + 1)
            .read_to_string(&mut content)
            .map_err(|e| anyhow::anyhow!("Failed to read dependency output from stdin: {}", e))?;

        if content.len() as u64 > MAX_FILE_SIZE {
            anyhow::bail!(
                "Security: dependency output on stdin exceeds {} bytes",
                MAX_FILE_SIZE
            );
        }
        Ok(content)
    }
}

impl DependencyOutputReader for FileSystemReader {
    fn read_dependency_output(&self, source: &InputSource) -> Result<String> {
        match source {
            InputSource::Stdin => self.read_stdin(),
            InputSource::File(path) => {
                if !path.exists() {
                    return Err(DepDiffError::InputNotFound { path: path.clone() }.into());
                }
                read_regular_file(path, "dependency output")
            }
        }
    }
}

impl ReportReader for FileSystemReader {
    fn read_report(&self, path: &Path) -> Result<Report> {
        let content = read_regular_file(path, "report").map_err(|e| {
            DepDiffError::ReportReadError {
                path: path.to_path_buf(),
                details: e.to_string(),
            }
        })?;

        let report: Report =
            serde_json::from_str(&content).map_err(|e| DepDiffError::ReportParseError {
                path: path.to_path_buf(),
                details: e.to_string(),
            })?;

        tracing::debug!(
            path = %path.display(),
            dependencies = report.compile_dependencies().len(),
            "loaded report"
        );
        Ok(report)
    }
}
