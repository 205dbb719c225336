use crate::application::read_models::{ComparisonView, SnapshotView};
use crate::dependency_analysis::domain::{DependencyNode, DependencyTree, FlatDependency};
use crate::ports::outbound::{ComparisonFormatter, TreeFormatter};
use crate::shared::Result;
use serde::Serialize;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct Comparison<'a> {
    old: Snapshot<'a>,
    new: Snapshot<'a>,
    summary: Summary,
    added: Vec<Dependency<'a>>,
    removed: Vec<Dependency<'a>>,
    changed: Vec<Change<'a>>,
}

#[derive(Debug, Serialize)]
struct Snapshot<'a> {
    label: &'a str,
    total: usize,
}

#[derive(Debug, Serialize)]
struct Summary {
    added: usize,
    removed: usize,
    changed: usize,
}

#[derive(Debug, Serialize)]
struct Dependency<'a> {
    group: &'a str,
    name: &'a str,
    version: &'a str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct Change<'a> {
    group: &'a str,
    name: &'a str,
    previous_version: &'a str,
    new_version: &'a str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct Tree<'a> {
    node_count: usize,
    depth: usize,
    dependencies: &'a [DependencyNode],
    summary: &'a [DependencyNode],
}

impl<'a> From<&'a SnapshotView> for Snapshot<'a> {
    fn from(view: &'a SnapshotView) -> Self {
        Self {
            label: &view.label,
            total: view.total,
        }
    }
}

impl<'a> From<&'a FlatDependency> for Dependency<'a> {
    fn from(dep: &'a FlatDependency) -> Self {
        Self {
            group: &dep.group,
            name: &dep.name,
            version: &dep.version,
        }
    }
}

/// JsonFormatter adapter producing pretty-printed JSON
pub struct JsonFormatter;

impl JsonFormatter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for JsonFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl ComparisonFormatter for JsonFormatter {
    fn format(&self, comparison: &ComparisonView) -> Result<String> {
        let diff = &comparison.diff;
        let document = Comparison {
            old: (&comparison.old).into(),
            new: (&comparison.new).into(),
            summary: Summary {
                added: diff.added.len(),
                removed: diff.removed.len(),
                changed: diff.changed.len(),
            },
            added: diff.added.iter().map(Dependency::from).collect(),
            removed: diff.removed.iter().map(Dependency::from).collect(),
            changed: diff
                .changed
                .iter()
                .map(|change| Change {
                    group: change.coordinate.group(),
                    name: change.coordinate.artifact(),
                    previous_version: &change.previous_version,
                    new_version: &change.new_version,
                })
                .collect(),
        };
        Ok(serde_json::to_string_pretty(&document)? + "\n")
    }
}

impl TreeFormatter for JsonFormatter {
    fn format_tree(&self, tree: &DependencyTree) -> Result<String> {
        let document = Tree {
            node_count: tree.node_count(),
            depth: tree.depth(),
            dependencies: tree.top_level(),
            summary: tree.summary(),
        };
        Ok(serde_json::to_string_pretty(&document)? + "\n")
    }
}
