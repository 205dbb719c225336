//! Report file schema.
//!
//! A report is a flat JSON mapping. Field names are PascalCase (with the schema
//! version under `v`) so reports written by earlier releases of the collector
//! stay readable. Everything but the compile dependency list is informational.

use super::FlatDependency;
use serde::{Deserialize, Deserializer, Serialize};

pub const REPORT_SCHEMA_VERSION: &str = "stats/0.0.1";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Report {
    #[serde(rename = "v", default)]
    pub version: String,
    #[serde(default)]
    pub context: ContextSegment,
    #[serde(default)]
    pub build: BuildSegment,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct ContextSegment {
    pub tool: ToolSegment,
    pub git: GitSegment,
    pub generation_time: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct ToolSegment {
    pub name: String,
    pub version: String,
    /// Only written when known; older reports may carry an empty value
    #[serde(skip_serializing_if = "String::is_empty")]
    pub website: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct GitSegment {
    pub commit: String,
    pub branch: String,
    pub tag: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct BuildSegment {
    pub app_name: String,
    pub application_id: String,
    pub version_name: String,
    pub version_code: String,
    pub build_variant: String,
    pub dependencies: DependenciesSegment,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct DependenciesSegment {
    #[serde(deserialize_with = "null_as_empty")]
    pub compile: Vec<FlatDependency>,
}

/// Older collectors wrote `null` for an empty list.
fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<FlatDependency>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<FlatDependency>>::deserialize(deserializer)?.unwrap_or_default())
}

impl Report {
    pub fn compile_dependencies(&self) -> &[FlatDependency] {
        &self.build.dependencies.compile
    }

    /// Human label for a report: version name, else short git commit, else `None`.
    pub fn label(&self) -> Option<String> {
        if !self.build.version_name.is_empty() {
            return Some(self.build.version_name.clone());
        }
        let commit = self.context.git.commit.as_str();
        if !commit.is_empty() {
            return Some(commit.chars().take(10).collect());
        }
        None
    }
}
