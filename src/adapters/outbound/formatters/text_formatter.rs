use crate::application::read_models::ComparisonView;
use crate::dependency_analysis::domain::DependencyTree;
use crate::dependency_analysis::parser::render_tree;
use crate::ports::outbound::{ComparisonFormatter, TreeFormatter};
use crate::shared::Result;
use owo_colors::OwoColorize;

/// TextFormatter adapter for terminal output
///
/// Colors added, removed and changed entries unless `plain` is set.
pub struct TextFormatter {
    plain: bool,
}

impl TextFormatter {
    pub fn new(plain: bool) -> Self {
        Self { plain }
    }

    fn added(&self, text: &str) -> String {
        if self.plain {
            text.to_string()
        } else {
            text.green().to_string()
        }
    }

    fn removed(&self, text: &str) -> String {
        if self.plain {
            text.to_string()
        } else {
            text.red().to_string()
        }
    }

    fn changed(&self, text: &str) -> String {
        if self.plain {
            text.to_string()
        } else {
            text.yellow().to_string()
        }
    }

    fn heading(&self, text: &str) -> String {
        if self.plain {
            text.to_string()
        } else {
            text.bold().to_string()
        }
    }
}

impl ComparisonFormatter for TextFormatter {
    fn format(&self, comparison: &ComparisonView) -> Result<String> {
        let diff = &comparison.diff;
        let mut lines = vec![
            self.heading(&format!("Comparing releases {}", comparison.title())),
            format!(
                "Total dependencies: {} -> {}",
                comparison.old.total, comparison.new.total
            ),
        ];

        if diff.is_empty() {
            lines.push(String::new());
            lines.push("No dependency changes.".to_string());
        }

        if !diff.added.is_empty() {
            lines.push(String::new());
            lines.push(self.heading(&format!("Added ({}):", diff.added.len())));
            lines.extend(diff.added.iter().map(|dep| self.added(&format!("  + {}", dep))));
        }

        if !diff.removed.is_empty() {
            lines.push(String::new());
            lines.push(self.heading(&format!("Removed ({}):", diff.removed.len())));
            lines.extend(
                diff.removed
                    .iter()
                    .map(|dep| self.removed(&format!("  - {}", dep))),
            );
        }

        if !diff.changed.is_empty() {
            lines.push(String::new());
            lines.push(self.heading(&format!("Changed ({}):", diff.changed.len())));
            lines.extend(diff.changed.iter().map(|change| {
                self.changed(&format!(
                    "  ~ {} {} -> {}",
                    change.coordinate, change.previous_version, change.new_version
                ))
            }));
        }

        let mut output = lines.join("\n");
        output.push('\n');
        Ok(output)
    }
}

impl TreeFormatter for TextFormatter {
    fn format_tree(&self, tree: &DependencyTree) -> Result<String> {
        Ok(render_tree(tree))
    }
}
