use crate::application::read_models::ComparisonView;
use crate::dependency_analysis::domain::DependencyTree;
use crate::shared::Result;

/// ComparisonFormatter port for rendering a comparison of two reports
pub trait ComparisonFormatter {
    /// Formats the comparison
    ///
    /// # Errors
    /// Returns an error if serialization fails
    fn format(&self, comparison: &ComparisonView) -> Result<String>;
}

/// TreeFormatter port for rendering a parsed dependency tree
pub trait TreeFormatter {
    fn format_tree(&self, tree: &DependencyTree) -> Result<String>;
}
