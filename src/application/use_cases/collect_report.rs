use crate::application::dto::{CollectRequest, CollectResponse};
use crate::dependency_analysis::parser::parse_tree_from_section;
use crate::dependency_analysis::services::ReportBuilder;
use crate::ports::outbound::{DependencyOutputReader, ProgressReporter};
use crate::shared::Result;
use anyhow::Context;

/// CollectReportUseCase - turns a saved dependency dump into a report
///
/// # Type Parameters
/// * `DR` - DependencyOutputReader implementation
/// * `PR` - ProgressReporter implementation
pub struct CollectReportUseCase<DR, PR> {
    output_reader: DR,
    progress_reporter: PR,
}

impl<DR, PR> CollectReportUseCase<DR, PR>
where
    DR: DependencyOutputReader,
    PR: ProgressReporter,
{
    pub fn new(output_reader: DR, progress_reporter: PR) -> Self {
        Self {
            output_reader,
            progress_reporter,
        }
    }

    /// Reads the dump, extracts the requested configuration and builds a report.
    ///
    /// A configuration without dependencies yields a report with an empty
    /// compile list and a warning; any other parse failure is an error.
    pub fn execute(&self, request: CollectRequest) -> Result<CollectResponse> {
        self.progress_reporter.report(&format!(
            "📖 Reading dependency output from: {}",
            request.input
        ));

        let raw = self.output_reader.read_dependency_output(&request.input)?;

        let (compile, tree_size) = match parse_tree_from_section(&raw, &request.configuration) {
            Ok(tree) => {
                let compile = ReportBuilder::flatten_summary(&tree);
                if compile.is_empty() {
                    self.progress_reporter.report_warning(&format!(
                        "⚠️  Warning: '{}' has no resolved {{strictly ...}} entries; the report lists no dependencies.",
                        request.configuration
                    ));
                }
                (compile, tree.node_count())
            }
            Err(e) if e.is_empty_input() => {
                self.progress_reporter.report_warning(&format!(
                    "⚠️  Warning: '{}' has no dependencies.",
                    request.configuration
                ));
                (Vec::new(), 0)
            }
            Err(e) => {
                return Err(e).with_context(|| {
                    format!("Failed to parse dependency output from {}", request.input)
                });
            }
        };

        tracing::debug!(
            configuration = %request.configuration,
            tree_size,
            compile = compile.len(),
            "collected dependencies"
        );
        self.progress_reporter.report(&format!(
            "✅ Found {} resolved dependencies in {}",
            compile.len(),
            request.configuration
        ));

        let report = ReportBuilder::build_report(
            compile,
            request.labels.build_segment(&request.variant),
            request.labels.git_segment(),
        );

        Ok(CollectResponse { report, tree_size })
    }
}
