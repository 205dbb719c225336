use crate::dependency_analysis::domain::{
    DependencyCoordinate, DependencyDiff, FlatDependency, VersionChange,
};
use std::collections::HashMap;

/// DependencyDiffer service comparing two dependency snapshots
///
/// Dependencies are matched by coordinate (group + name); versions are
/// compared as plain strings, with no judgement on which one is newer.
pub struct DependencyDiffer;

impl DependencyDiffer {
    /// Computes added, removed and version-changed dependencies.
    ///
    /// A coordinate listed more than once in the same snapshot is looked up
    /// by its last occurrence.
    pub fn diff(old: &[FlatDependency], new: &[FlatDependency]) -> DependencyDiff {
        let old_index = Self::index(old);
        let new_index = Self::index(new);

        let mut diff = DependencyDiff::default();

        for dep in new {
            match old_index.get(&dep.coordinate()) {
                None => diff.added.push(dep.clone()),
                Some(previous) if previous.version != dep.version => {
                    diff.changed.push(VersionChange {
                        coordinate: dep.coordinate(),
                        previous_version: previous.version.clone(),
                        new_version: dep.version.clone(),
                    });
                }
                Some(_) => {}
            }
        }

        diff.removed = old
            .iter()
            .filter(|dep| !new_index.contains_key(&dep.coordinate()))
            .cloned()
            .collect();

        tracing::debug!(
            added = diff.added.len(),
            removed = diff.removed.len(),
            changed = diff.changed.len(),
            "compared dependency snapshots"
        );

        diff
    }

    /// Coordinate lookup; later entries overwrite earlier ones.
    fn index(deps: &[FlatDependency]) -> HashMap<DependencyCoordinate, &FlatDependency> {
        deps.iter().map(|dep| (dep.coordinate(), dep)).collect()
    }
}
