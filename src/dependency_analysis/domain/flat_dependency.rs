use super::{DependencyCoordinate, DependencyNode};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Minimal identity + version triple used for diffing and persisted in reports.
///
/// Serialized with the field names of the report file (`Group`, `Name`, `Version`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct FlatDependency {
    pub group: String,
    pub name: String,
    pub version: String,
}

impl FlatDependency {
    pub fn new(
        group: impl Into<String>,
        name: impl Into<String>,
        version: impl Into<String>,
    ) -> Self {
        Self {
            group: group.into(),
            name: name.into(),
            version: version.into(),
        }
    }

    /// Identity key: group and name, version excluded.
    pub fn coordinate(&self) -> DependencyCoordinate {
        DependencyCoordinate::new(self.group.clone(), self.name.clone())
    }

    /// Flattens an external node to its resolved version. Module references
    /// have no coordinate to flatten and yield `None`.
    pub fn from_node(node: &DependencyNode) -> Option<Self> {
        if node.is_module() {
            return None;
        }
        Some(Self::new(
            node.group(),
            node.artifact(),
            node.resolved_version(),
        ))
    }
}

impl fmt::Display for FlatDependency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.group, self.name, self.version)
    }
}
