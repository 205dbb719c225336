use super::DependencyCoordinate;
use serde::Serialize;
use std::fmt;

/// One reported occurrence of a dependency in a Gradle dependency tree.
///
/// External dependencies carry a coordinate and versions. Module references
/// (`project :feature:home`) carry only the module path, stored as the
/// coordinate's artifact with an empty group and no versions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DependencyNode {
    #[serde(flatten)]
    coordinate: DependencyCoordinate,
    resolved_version: String,
    requested_version: String,
    is_module: bool,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    children: Vec<DependencyNode>,
}

impl DependencyNode {
    /// Creates a node for an external `group:artifact` dependency.
    ///
    /// `requested_version` is empty unless the source line showed a `->`
    /// substitution or a `strictly` constraint.
    pub fn external(
        coordinate: DependencyCoordinate,
        requested_version: impl Into<String>,
        resolved_version: impl Into<String>,
    ) -> Self {
        Self {
            coordinate,
            resolved_version: resolved_version.into(),
            requested_version: requested_version.into(),
            is_module: false,
            children: Vec::new(),
        }
    }

    /// Creates a node for an internal project module such as `:feature:home`.
    pub fn module(path: impl Into<String>) -> Self {
        Self {
            coordinate: DependencyCoordinate::new(String::new(), path),
            resolved_version: String::new(),
            requested_version: String::new(),
            is_module: true,
            children: Vec::new(),
        }
    }

    /// Synthetic level-0 node every tree hangs from.
    pub(crate) fn synthetic_root() -> Self {
        Self::module(String::new())
    }

    pub fn with_children(mut self, children: Vec<DependencyNode>) -> Self {
        self.children = children;
        self
    }

    pub fn coordinate(&self) -> &DependencyCoordinate {
        &self.coordinate
    }

    pub fn group(&self) -> &str {
        self.coordinate.group()
    }

    pub fn artifact(&self) -> &str {
        self.coordinate.artifact()
    }

    /// The module path for module references, same as [`artifact`](Self::artifact).
    pub fn module_path(&self) -> Option<&str> {
        self.is_module.then(|| self.coordinate.artifact())
    }

    pub fn resolved_version(&self) -> &str {
        &self.resolved_version
    }

    pub fn requested_version(&self) -> &str {
        &self.requested_version
    }

    pub fn is_module(&self) -> bool {
        self.is_module
    }

    /// Whether conflict resolution or a constraint picked a version other than
    /// the one that was asked for.
    pub fn is_substituted(&self) -> bool {
        !self.requested_version.is_empty() && self.requested_version != self.resolved_version
    }

    pub fn children(&self) -> &[DependencyNode] {
        &self.children
    }
}

impl fmt::Display for DependencyNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_module {
            return write!(f, "project {}", self.coordinate.artifact());
        }
        write!(f, "{}:{}", self.coordinate, self.resolved_version)
    }
}

/// A reconstructed dependency tree plus the flat catalogue of `strictly`
/// resolutions that Gradle prints alongside it.
///
/// Built once per parse call; immutable afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DependencyTree {
    root: DependencyNode,
    summary: Vec<DependencyNode>,
}

impl DependencyTree {
    pub fn new(root: DependencyNode, summary: Vec<DependencyNode>) -> Self {
        Self { root, summary }
    }

    /// The synthetic root. Its children are the level-1 dependencies.
    pub fn root(&self) -> &DependencyNode {
        &self.root
    }

    /// Level-1 dependencies, in source order.
    pub fn top_level(&self) -> &[DependencyNode] {
        self.root.children()
    }

    pub fn summary(&self) -> &[DependencyNode] {
        &self.summary
    }

    /// Number of tree edges (every node except the synthetic root).
    pub fn node_count(&self) -> usize {
        let mut count = 0;
        let mut stack: Vec<&DependencyNode> = self.root.children().iter().collect();
        while let Some(node) = stack.pop() {
            count += 1;
            stack.extend(node.children());
        }
        count
    }

    /// Deepest level present in the tree; 0 for a tree with no edges.
    pub fn depth(&self) -> usize {
        let mut deepest = 0;
        let mut stack: Vec<(&DependencyNode, usize)> =
            self.root.children().iter().map(|n| (n, 1)).collect();
        while let Some((node, level)) = stack.pop() {
            deepest = deepest.max(level);
            stack.extend(node.children().iter().map(|child| (child, level + 1)));
        }
        deepest
    }
}
