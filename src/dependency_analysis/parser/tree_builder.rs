use super::line_classifier::{parse_line, LineEntry};
use crate::dependency_analysis::domain::{DependencyNode, DependencyTree};
use crate::shared::error::TreeParseError;

/// Index of the synthetic root in the arena.
const ROOT: usize = 0;

/// Node storage used while the tree is being assembled.
///
/// Children only ever point at larger indices, because a child's line comes
/// after its parent's.
struct ArenaNode {
    node: DependencyNode,
    children: Vec<usize>,
}

/// Reconstructs a dependency tree from one configuration's section of
/// Gradle's `dependencies` output.
///
/// Single left-to-right pass. `spine[d]` holds the node most recently placed
/// at depth `d`; Gradle lists every child right after its parent, so that node
/// is the only one that can still receive children at depth `d + 1`.
pub fn parse_tree(section: &str) -> Result<DependencyTree, TreeParseError> {
    // Line numbers count from the first non-blank line
    let lines: Vec<&str> = section
        .lines()
        .skip_while(|line| line.trim().is_empty())
        .collect();
    if lines.is_empty() {
        return Err(TreeParseError::EmptyInput);
    }
    let indent = common_indent(&lines);

    let mut arena = vec![ArenaNode {
        node: DependencyNode::synthetic_root(),
        children: Vec::new(),
    }];
    let mut spine = vec![ROOT];
    let mut summary = Vec::new();

    for (index, line) in lines.iter().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        let line_number = index + 1;
        let line = line.get(indent..).unwrap_or_else(|| line.trim_start());
        let parsed = parse_line(line).map_err(|e| e.at_line(line_number))?;

        if let LineEntry::SummaryEntry { .. } = parsed.entry {
            summary.push(parsed.into_node());
            continue;
        }

        let level = parsed.level;
        if level == 0 {
            return Err(TreeParseError::MalformedLine {
                line_number,
                line: line.trim().to_string(),
                reason: "line is not part of a dependency tree".to_string(),
            });
        }
        if level > spine.len() {
            return Err(TreeParseError::MissingParent { line_number, level });
        }

        let parent = spine[level - 1];
        let id = arena.len();
        arena.push(ArenaNode {
            node: parsed.into_node(),
            children: Vec::new(),
        });
        arena[parent].children.push(id);

        spine.truncate(level);
        spine.push(id);
    }

    tracing::debug!(
        nodes = arena.len() - 1,
        summary = summary.len(),
        "reconstructed dependency tree"
    );

    Ok(DependencyTree::new(fold_arena(arena), summary))
}

/// Leading whitespace shared by every non-blank line, in bytes.
fn common_indent(lines: &[&str]) -> usize {
    lines
        .iter()
        .filter(|line| !line.trim().is_empty())
        .map(|line| line.len() - line.trim_start().len())
        .min()
        .unwrap_or(0)
}

/// Turns the arena into owned nodes, children before parents, without recursion.
fn fold_arena(arena: Vec<ArenaNode>) -> DependencyNode {
    let mut built: Vec<Option<DependencyNode>> = Vec::with_capacity(arena.len());
    built.resize_with(arena.len(), || None);

    for (id, entry) in arena.into_iter().enumerate().rev() {
        let children = entry
            .children
            .iter()
            .filter_map(|child| built[*child].take())
            .collect();
        built[id] = Some(entry.node.with_children(children));
    }

    built
        .into_iter()
        .next()
        .flatten()
        .unwrap_or_else(DependencyNode::synthetic_root)
}
