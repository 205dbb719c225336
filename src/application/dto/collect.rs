use crate::dependency_analysis::domain::{BuildSegment, GitSegment, Report};
use crate::ports::outbound::InputSource;

/// Optional labels stamped into a collected report
///
/// None of these are derived from the dependency dump; they are whatever
/// the caller knows about the build.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReportLabels {
    pub app_name: Option<String>,
    pub application_id: Option<String>,
    pub version_name: Option<String>,
    pub version_code: Option<String>,
    pub git_commit: Option<String>,
    pub git_branch: Option<String>,
    pub git_tag: Option<String>,
}

impl ReportLabels {
    pub(crate) fn build_segment(&self, build_variant: &str) -> BuildSegment {
        BuildSegment {
            app_name: self.app_name.clone().unwrap_or_default(),
            application_id: self.application_id.clone().unwrap_or_default(),
            version_name: self.version_name.clone().unwrap_or_default(),
            version_code: self.version_code.clone().unwrap_or_default(),
            build_variant: build_variant.to_string(),
            ..BuildSegment::default()
        }
    }

    pub(crate) fn git_segment(&self) -> GitSegment {
        GitSegment {
            commit: self.git_commit.clone().unwrap_or_default(),
            branch: self.git_branch.clone().unwrap_or_default(),
            tag: self.git_tag.clone().unwrap_or_default(),
        }
    }
}

/// CollectRequest - turns one saved dependency dump into a report
#[derive(Debug, Clone)]
pub struct CollectRequest {
    pub input: InputSource,
    /// Build variant recorded in the report, e.g. `release`
    pub variant: String,
    /// Section to read, e.g. `releaseCompileClasspath`
    pub configuration: String,
    pub labels: ReportLabels,
}

impl CollectRequest {
    /// Gradle's name for a variant's compile classpath
    pub fn compile_classpath(variant: &str) -> String {
        format!("{}CompileClasspath", variant)
    }
}

#[derive(Debug, Clone)]
pub struct CollectResponse {
    pub report: Report,
    /// Number of dependencies in the reconstructed tree, summary excluded
    pub tree_size: usize,
}
