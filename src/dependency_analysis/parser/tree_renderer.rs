use crate::dependency_analysis::domain::{DependencyNode, DependencyTree};

/// Writes a tree back in Gradle's line grammar.
///
/// Summary entries follow the tree as level-1 `{strictly ...}` lines. Parsing
/// the output again yields an equal tree.
pub fn render_tree(tree: &DependencyTree) -> String {
    let mut output = String::new();

    // (node, ancestors' "has a later sibling" flags, is last child)
    let mut stack: Vec<(&DependencyNode, Vec<bool>, bool)> = Vec::new();
    push_children(&mut stack, tree.top_level(), &[]);

    while let Some((node, continuations, is_last)) = stack.pop() {
        for continues in &continuations {
            output.push_str(if *continues { "|    " } else { "     " });
        }
        output.push_str(if is_last { "\\--- " } else { "+--- " });
        output.push_str(&render_edge(node));
        output.push('\n');

        let mut child_prefix = continuations;
        child_prefix.push(!is_last);
        push_children(&mut stack, node.children(), &child_prefix);
    }

    let summary = tree.summary();
    for (index, node) in summary.iter().enumerate() {
        let glyph = if index + 1 == summary.len() {
            "\\--- "
        } else {
            "+--- "
        };
        output.push_str(glyph);
        output.push_str(&render_summary(node));
        output.push_str(" (c)\n");
    }

    output
}

fn push_children<'a>(
    stack: &mut Vec<(&'a DependencyNode, Vec<bool>, bool)>,
    children: &'a [DependencyNode],
    prefix: &[bool],
) {
    // Reversed so the first child is popped first
    for (index, child) in children.iter().enumerate().rev() {
        stack.push((child, prefix.to_vec(), index + 1 == children.len()));
    }
}

fn render_edge(node: &DependencyNode) -> String {
    if let Some(path) = node.module_path() {
        return format!("project {}", path);
    }
    let coordinate = node.coordinate();
    match (node.requested_version(), node.resolved_version()) {
        ("", "") => coordinate.to_string(),
        ("", resolved) => format!("{}:{}", coordinate, resolved),
        (requested, resolved) => format!("{}:{} -> {}", coordinate, requested, resolved),
    }
}

fn render_summary(node: &DependencyNode) -> String {
    let base = format!(
        "{}:{{strictly {}}}",
        node.coordinate(),
        node.requested_version()
    );
    if node.is_substituted() {
        format!("{} -> {}", base, node.resolved_version())
    } else {
        base
    }
}
