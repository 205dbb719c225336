use crate::application::read_models::ComparisonView;
use crate::dependency_analysis::domain::{DependencyTree, FlatDependency, VersionChange};
use crate::dependency_analysis::parser::render_tree;
use crate::ports::outbound::{ComparisonFormatter, TreeFormatter};
use crate::shared::Result;

const DEPENDENCY_TABLE_HEADER: &str = "| Dependency | Version |\n";
const DEPENDENCY_TABLE_SEPARATOR: &str = "|------------|---------|\n";

const CHANGE_TABLE_HEADER: &str = "| Dependency | Before | After |\n";
const CHANGE_TABLE_SEPARATOR: &str = "|------------|--------|-------|\n";

/// MarkdownFormatter adapter, suited to pull request comments and CI summaries
pub struct MarkdownFormatter;

impl MarkdownFormatter {
    pub fn new() -> Self {
        Self
    }

    /// Escapes pipe characters and newlines for safe Markdown table rendering
    fn escape_cell(text: &str) -> String {
        text.replace('|', "\\|").replace('\n', " ")
    }

    fn render_totals(output: &mut String, comparison: &ComparisonView) {
        output.push_str(&format!(
            "| | {} | {} |\n|---|---|---|\n| Total dependencies | {} | {} |\n\n",
            Self::escape_cell(&comparison.old.label),
            Self::escape_cell(&comparison.new.label),
            comparison.old.total,
            comparison.new.total
        ));
    }

    fn render_dependencies(output: &mut String, title: &str, deps: &[FlatDependency]) {
        if deps.is_empty() {
            return;
        }
        output.push_str(&format!("## {} ({})\n\n", title, deps.len()));
        output.push_str(DEPENDENCY_TABLE_HEADER);
        output.push_str(DEPENDENCY_TABLE_SEPARATOR);
        for dep in deps {
            output.push_str(&format!(
                "| `{}:{}` | {} |\n",
                dep.group,
                dep.name,
                Self::escape_cell(&dep.version)
            ));
        }
        output.push('\n');
    }

    fn render_changes(output: &mut String, changes: &[VersionChange]) {
        if changes.is_empty() {
            return;
        }
        output.push_str(&format!("## Changed ({})\n\n", changes.len()));
        output.push_str(CHANGE_TABLE_HEADER);
        output.push_str(CHANGE_TABLE_SEPARATOR);
        for change in changes {
            output.push_str(&format!(
                "| `{}` | {} | {} |\n",
                change.coordinate,
                Self::escape_cell(&change.previous_version),
                Self::escape_cell(&change.new_version)
            ));
        }
        output.push('\n');
    }
}

impl Default for MarkdownFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl ComparisonFormatter for MarkdownFormatter {
    fn format(&self, comparison: &ComparisonView) -> Result<String> {
        let mut output = String::new();
        output.push_str(&format!(
            "# Dependency changes: {}\n\n",
            Self::escape_cell(&comparison.title())
        ));
        Self::render_totals(&mut output, comparison);

        let diff = &comparison.diff;
        if diff.is_empty() {
            output.push_str("No dependency changes.\n");
            return Ok(output);
        }

        Self::render_dependencies(&mut output, "Added", &diff.added);
        Self::render_dependencies(&mut output, "Removed", &diff.removed);
        Self::render_changes(&mut output, &diff.changed);
        Ok(output)
    }
}

impl TreeFormatter for MarkdownFormatter {
    fn format_tree(&self, tree: &DependencyTree) -> Result<String> {
        let mut output = String::from("# Dependency tree\n\n");
        output.push_str(&format!(
            "{} dependencies, depth {}, {} resolved constraints.\n\n",
            tree.node_count(),
            tree.depth(),
            tree.summary().len()
        ));
        output.push_str("```\n");
        output.push_str(&render_tree(tree));
        output.push_str("```\n");
        Ok(output)
    }
}
