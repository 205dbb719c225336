use super::{DependencyCoordinate, FlatDependency};
use serde::Serialize;

/// A dependency present in both snapshots whose version string differs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VersionChange {
    pub coordinate: DependencyCoordinate,
    pub previous_version: String,
    pub new_version: String,
}

/// Outcome of comparing two flat dependency lists.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DependencyDiff {
    /// In the new list's order
    pub added: Vec<FlatDependency>,
    /// In the old list's order
    pub removed: Vec<FlatDependency>,
    /// In the new list's order
    pub changed: Vec<VersionChange>,
}

impl DependencyDiff {
    pub fn is_empty(&self) -> bool {
        self.added.is_empty() && self.removed.is_empty() && self.changed.is_empty()
    }

    pub fn total_changes(&self) -> usize {
        self.added.len() + self.removed.len() + self.changed.len()
    }
}
