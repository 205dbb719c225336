mod dependency_differ;
mod dependency_filter;
mod report_builder;

pub use dependency_differ::DependencyDiffer;
pub use dependency_filter::DependencyFilter;
pub use report_builder::ReportBuilder;
