use crate::application::dto::{CompareRequest, CompareResponse};
use crate::application::read_models::{ComparisonView, SnapshotView};
use crate::dependency_analysis::domain::Report;
use crate::dependency_analysis::services::{DependencyDiffer, DependencyFilter};
use crate::ports::outbound::{ProgressReporter, ReportReader};
use crate::shared::error::DepDiffError;
use crate::shared::Result;
use std::path::PathBuf;
use std::sync::Arc;

/// CompareReportsUseCase - diffs the compile dependencies of two reports
///
/// # Type Parameters
/// * `RR` - ReportReader implementation, shared with the loading tasks
/// * `PR` - ProgressReporter implementation
pub struct CompareReportsUseCase<RR, PR> {
    report_reader: Arc<RR>,
    progress_reporter: PR,
}

impl<RR, PR> CompareReportsUseCase<RR, PR>
where
    RR: ReportReader + 'static,
    PR: ProgressReporter,
{
    pub fn new(report_reader: RR, progress_reporter: PR) -> Self {
        Self {
            report_reader: Arc::new(report_reader),
            progress_reporter,
        }
    }

    /// Loads both reports concurrently, applies exclusions and diffs them.
    pub async fn execute(&self, request: CompareRequest) -> Result<CompareResponse> {
        // Validate patterns before touching the filesystem
        let filter = DependencyFilter::new(request.exclude_patterns).map_err(|e| {
            DepDiffError::Validation {
                message: e.to_string(),
            }
        })?;

        self.progress_reporter.start_task("📖 Loading reports...");
        let (old_report, new_report) = futures::try_join!(
            self.load(request.old_report.clone()),
            self.load(request.new_report.clone())
        )?;

        for (path, report) in [
            (&request.old_report, &old_report),
            (&request.new_report, &new_report),
        ] {
            if report.compile_dependencies().is_empty() {
                tracing::warn!(path = %path.display(), "report lists no compile dependencies");
            }
        }

        let old_deps = filter.filter(old_report.compile_dependencies().to_vec());
        let new_deps = filter.filter(new_report.compile_dependencies().to_vec());

        for pattern in filter.unmatched_patterns() {
            self.progress_reporter.report_warning(&format!(
                "⚠️  Warning: Exclude pattern '{}' did not match any dependencies.",
                pattern
            ));
        }

        let old = SnapshotView::from_report(&old_report, &request.old_report, old_deps.len());
        let new = SnapshotView::from_report(&new_report, &request.new_report, new_deps.len());

        self.progress_reporter
            .report(&format!("🔍 Comparing releases {}...{}", old.label, new.label));

        let diff = DependencyDiffer::diff(&old_deps, &new_deps);

        Ok(CompareResponse {
            comparison: ComparisonView { old, new, diff },
        })
    }

    async fn load(&self, path: PathBuf) -> Result<Report> {
        let reader = Arc::clone(&self.report_reader);
        tokio::task::spawn_blocking(move || reader.read_report(&path))
            .await
            .map_err(|e| anyhow::anyhow!("Task join error while loading report: {}", e))?
    }
}
