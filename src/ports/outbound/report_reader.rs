use crate::dependency_analysis::domain::Report;
use crate::shared::Result;
use std::path::Path;

/// ReportReader port for loading stored report files
///
/// Implementations must be shareable across threads; both sides of a
/// comparison are loaded concurrently.
pub trait ReportReader: Send + Sync {
    /// Loads and deserializes one report file
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or is not a valid report
    fn read_report(&self, path: &Path) -> Result<Report>;
}
