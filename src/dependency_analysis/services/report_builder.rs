use crate::dependency_analysis::domain::{
    BuildSegment, ContextSegment, DependencyTree, FlatDependency, GitSegment, Report, ToolSegment,
    REPORT_SCHEMA_VERSION,
};
use chrono::Utc;

const TOOL_NAME: &str = "gradle-depdiff";

/// ReportBuilder service assembling report files from parsed trees
///
/// Pure apart from reading the clock for the generation timestamp.
pub struct ReportBuilder;

impl ReportBuilder {
    /// Flattens a tree's resolved summary into report entries.
    ///
    /// Module references are skipped. The result is sorted by group, then
    /// name, then version, so reports of the same build are byte-identical.
    pub fn flatten_summary(tree: &DependencyTree) -> Vec<FlatDependency> {
        let mut deps: Vec<FlatDependency> = tree
            .summary()
            .iter()
            .filter_map(FlatDependency::from_node)
            .collect();
        deps.sort();
        deps
    }

    /// Builds a report stamped with this tool's name, version and the current time
    ///
    /// # Arguments
    /// * `compile` - Flattened compile dependencies
    /// * `build` - Build labels; its dependency list is replaced by `compile`
    /// * `git` - Source control labels
    pub fn build_report(compile: Vec<FlatDependency>, build: BuildSegment, git: GitSegment) -> Report {
        Self::build_report_with_tool(TOOL_NAME, env!("CARGO_PKG_VERSION"), compile, build, git)
    }

    pub fn build_report_with_tool(
        tool_name: &str,
        tool_version: &str,
        compile: Vec<FlatDependency>,
        mut build: BuildSegment,
        git: GitSegment,
    ) -> Report {
        build.dependencies.compile = compile;

        Report {
            version: REPORT_SCHEMA_VERSION.to_string(),
            context: ContextSegment {
                tool: ToolSegment {
                    name: tool_name.to_string(),
                    version: tool_version.to_string(),
                    ..ToolSegment::default()
                },
                git,
                generation_time: Utc::now().to_rfc3339(),
            },
            build,
        }
    }
}
