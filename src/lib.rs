//! gradle-depdiff - Gradle dependency tree parsing and report comparison
//!
//! Reconstructs the ASCII dependency trees printed by `./gradlew <module>:dependencies`
//! into typed trees, stores a build's resolved dependencies as a flat JSON report,
//! and diffs two reports into added, removed and version-changed dependencies.
//!
//! # Architecture
//!
//! - **Domain Layer** (`dependency_analysis`): parser, tree model, diff engine; no I/O
//! - **Application Layer** (`application`): use cases, DTOs and factories
//! - **Ports** (`ports`): interface definitions for infrastructure
//! - **Adapters** (`adapters`): filesystem, console and formatter implementations
//! - **Shared** (`shared`): error types, exit codes, file safety checks
//!
//! # Example
//!
//! ```
//! use gradle_depdiff::prelude::*;
//!
//! let dump = "\
//! releaseCompileClasspath - Compile classpath for '/release'.
//! +--- com.google.dagger:hilt-android:2.56
//! |    \\--- javax.inject:javax.inject:1 -> 2.1.2
//! \\--- javax.inject:javax.inject:{strictly 2.1.2} (c)
//! ";
//!
//! let tree = parse_tree_from_section(dump, "releaseCompileClasspath").unwrap();
//! assert_eq!(tree.node_count(), 2);
//!
//! let before = ReportBuilder::flatten_summary(&tree);
//! let after = vec![FlatDependency::new("javax.inject", "javax.inject", "2.2.0")];
//! let diff = DependencyDiffer::diff(&before, &after);
//! assert_eq!(diff.changed.len(), 1);
//! ```

pub mod adapters;
pub mod application;
pub mod config;
pub mod dependency_analysis;
pub mod ports;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::console::StderrProgressReporter;
    pub use crate::adapters::outbound::filesystem::{
        FileSystemReader, FileSystemWriter, StdoutPresenter,
    };
    pub use crate::adapters::outbound::formatters::{JsonFormatter, MarkdownFormatter, TextFormatter};
    pub use crate::application::dto::{
        CollectRequest, CollectResponse, CompareRequest, CompareResponse, OutputFormat,
        ReportLabels, TreeRequest, TreeResponse,
    };
    pub use crate::application::use_cases::{
        CollectReportUseCase, CompareReportsUseCase, InspectTreeUseCase,
    };
    pub use crate::dependency_analysis::domain::{
        DependencyCoordinate, DependencyDiff, DependencyNode, DependencyTree, FlatDependency,
        Report, VersionChange,
    };
    pub use crate::dependency_analysis::parser::{
        extract_section, parse_line, parse_tree, parse_tree_from_section, render_tree,
    };
    pub use crate::dependency_analysis::services::{
        DependencyDiffer, DependencyFilter, ReportBuilder,
    };
    pub use crate::ports::outbound::{
        ComparisonFormatter, DependencyOutputReader, InputSource, OutputPresenter,
        ProgressReporter, ReportReader, TreeFormatter,
    };
    pub use crate::shared::error::{DepDiffError, ExitCode, TreeParseError};
    pub use crate::shared::Result;
}
