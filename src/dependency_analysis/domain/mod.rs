pub mod coordinate;
pub mod dependency_diff;
pub mod dependency_tree;
pub mod flat_dependency;
pub mod report;

pub use coordinate::DependencyCoordinate;
pub use dependency_diff::{DependencyDiff, VersionChange};
pub use dependency_tree::{DependencyNode, DependencyTree};
pub use flat_dependency::FlatDependency;
pub use report::{
    BuildSegment, ContextSegment, DependenciesSegment, GitSegment, Report, ToolSegment,
    REPORT_SCHEMA_VERSION,
};
