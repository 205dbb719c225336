use crate::application::dto::{TreeRequest, TreeResponse};
use crate::dependency_analysis::parser::parse_tree_from_section;
use crate::ports::outbound::{DependencyOutputReader, ProgressReporter};
use crate::shared::Result;
use anyhow::Context;

/// InspectTreeUseCase - reconstructs one configuration's tree for display
pub struct InspectTreeUseCase<DR, PR> {
    output_reader: DR,
    progress_reporter: PR,
}

impl<DR, PR> InspectTreeUseCase<DR, PR>
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

    pub fn execute(&self, request: TreeRequest) -> Result<TreeResponse> {
        self.progress_reporter.report(&format!(
            "📖 Reading dependency output from: {}",
            request.input
        ));

        let raw = self.output_reader.read_dependency_output(&request.input)?;
        let tree = parse_tree_from_section(&raw, &request.configuration).with_context(|| {
            format!(
                "Failed to reconstruct '{}' from {}",
                request.configuration, request.input
            )
        })?;

        self.progress_reporter.report(&format!(
            "🌳 {} dependencies, depth {}, {} resolved constraints",
            tree.node_count(),
            tree.depth(),
            tree.summary().len()
        ));

        Ok(TreeResponse { tree })
    }
}
