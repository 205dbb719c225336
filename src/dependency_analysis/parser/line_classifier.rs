//! Classifies one line of Gradle's `dependencies` output.
//!
//! ```text
//! +--- com.google.dagger:hilt-android:2.56
//! |    +--- javax.inject:javax.inject:1 -> 2.1.2
//! |    \--- project :core:model
//! +--- org.jetbrains.kotlin:kotlin-stdlib:{strictly 1.0.10} -> 2.1.10 (c)
//! ```

use crate::dependency_analysis::domain::{DependencyCoordinate, DependencyNode};
use crate::shared::error::TreeParseError;

/// Gradle draws one tree cell per nesting level, five columns wide (`|    `).
const TREE_CELL_WIDTH: usize = 5;

const MODULE_KEYWORD: &str = "project";
const RESOLUTION_ARROW: &str = "->";
const STRICTLY_PREFIX: &str = "{strictly ";

/// What a dependency line describes, decided once by the classifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineEntry {
    /// An ordinary edge of the dependency tree
    TreeEdge {
        coordinate: DependencyCoordinate,
        requested_version: String,
        resolved_version: String,
    },
    /// A `{strictly ...}` resolution, catalogued outside the tree
    SummaryEntry {
        coordinate: DependencyCoordinate,
        requested_version: String,
        resolved_version: String,
    },
    /// A reference to another module of the same build
    ModuleRef { path: String },
}

/// One classified line: its nesting depth (1 for top-level entries) and what it names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedLine {
    pub level: usize,
    pub entry: LineEntry,
}

impl ParsedLine {
    /// True for `{strictly ...}` lines, which belong to the summary catalogue.
    pub fn is_summary(&self) -> bool {
        matches!(self.entry, LineEntry::SummaryEntry { .. })
    }

    /// True for `project :path` references.
    pub fn is_module(&self) -> bool {
        matches!(self.entry, LineEntry::ModuleRef { .. })
    }

    /// Converts the entry into a childless tree node.
    pub fn into_node(self) -> DependencyNode {
        match self.entry {
            LineEntry::TreeEdge {
                coordinate,
                requested_version,
                resolved_version,
            }
            | LineEntry::SummaryEntry {
                coordinate,
                requested_version,
                resolved_version,
            } => DependencyNode::external(coordinate, requested_version, resolved_version),
            LineEntry::ModuleRef { path } => DependencyNode::module(path),
        }
    }
}

pub fn is_tree_marker(token: &str) -> bool {
    matches!(token, "|" | "+---" | "\\---")
}

fn is_branch_marker(token: &str) -> bool {
    matches!(token, "+---" | "\\---")
}

/// Parses a single line into its nesting level and entry.
///
/// Errors carry line number 0; the tree builder fills in the real one.
pub fn parse_line(line: &str) -> Result<ParsedLine, TreeParseError> {
    let line = line.trim_end();
    let malformed = |reason: &str| TreeParseError::MalformedLine {
        line_number: 0,
        line: line.trim().to_string(),
        reason: reason.to_string(),
    };

    // `{strictly 1.0}` spans two tokens; fold it into the colon segment
    let is_summary = line.contains(&format!(":{}", STRICTLY_PREFIX));
    let normalized = if is_summary {
        line.replacen(STRICTLY_PREFIX, "", 1)
    } else {
        line.to_string()
    };

    let tokens = tokenize(&normalized);
    let marker_count = tokens
        .iter()
        .take_while(|(_, token)| is_tree_marker(token))
        .count();
    let level = marker_count.max(grid_level(&tokens[..marker_count]));

    let mut rest = tokens[marker_count..].iter().map(|(_, token)| *token);
    let artifact_token = rest
        .next()
        .ok_or_else(|| malformed("line has no dependency after the tree markers"))?;

    if artifact_token == MODULE_KEYWORD {
        let path = rest
            .next()
            .ok_or_else(|| malformed("project reference has no module path"))?;
        return Ok(ParsedLine {
            level,
            entry: LineEntry::ModuleRef {
                path: path.to_string(),
            },
        });
    }

    let mut segments = artifact_token.split(':');
    let group = segments.next().unwrap_or_default();
    let artifact = segments
        .next()
        .ok_or_else(|| malformed("expected at least group:artifact"))?;
    if group.is_empty() || artifact.is_empty() {
        return Err(malformed("group and artifact must not be empty"));
    }
    let stated_version = segments
        .next()
        .map(|version| version.trim_end_matches('}'))
        .unwrap_or_default();

    let arrow_target = rest
        .skip_while(|token| *token != RESOLUTION_ARROW)
        .nth(1);

    let (requested_version, resolved_version) = match arrow_target {
        Some(resolved) => (stated_version, resolved),
        None if is_summary => (stated_version, stated_version),
        None => ("", stated_version),
    };

    let coordinate = DependencyCoordinate::new(group, artifact);
    let requested_version = requested_version.to_string();
    let resolved_version = resolved_version.to_string();
    let entry = if is_summary {
        LineEntry::SummaryEntry {
            coordinate,
            requested_version,
            resolved_version,
        }
    } else {
        LineEntry::TreeEdge {
            coordinate,
            requested_version,
            resolved_version,
        }
    };

    Ok(ParsedLine { level, entry })
}

/// Splits on whitespace runs, keeping each token's byte offset.
fn tokenize(line: &str) -> Vec<(usize, &str)> {
    let mut tokens = Vec::new();
    let mut start = None;
    for (offset, ch) in line.char_indices() {
        match (ch.is_whitespace(), start) {
            (true, Some(begin)) => {
                tokens.push((begin, &line[begin..offset]));
                start = None;
            }
            (false, None) => start = Some(offset),
            _ => {}
        }
    }
    if let Some(begin) = start {
        tokens.push((begin, &line[begin..]));
    }
    tokens
}

/// Level implied by the column of the branch glyph.
///
/// Below a last child Gradle pads with blank cells instead of `|`, so counting
/// markers alone would under-count those lines. Only applies when every marker
/// starts on a cell boundary; any other spacing falls back to the marker count.
fn grid_level(markers: &[(usize, &str)]) -> usize {
    let on_grid = markers
        .iter()
        .all(|(offset, _)| offset % TREE_CELL_WIDTH == 0);
    match markers.last() {
        Some((offset, token)) if on_grid && is_branch_marker(token) => {
            offset / TREE_CELL_WIDTH + 1
        }
        _ => 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn external(line: &ParsedLine) -> (&DependencyCoordinate, &str, &str) {
        match &line.entry {
            LineEntry::TreeEdge {
                coordinate,
                requested_version,
                resolved_version,
            }
            | LineEntry::SummaryEntry {
                coordinate,
                requested_version,
                resolved_version,
            } => (
                coordinate,
                requested_version.as_str(),
                resolved_version.as_str(),
            ),
            LineEntry::ModuleRef { .. } => panic!("expected an external dependency"),
        }
    }

    #[test]
    fn test_plain_dependency_at_level_three() {
        let parsed = parse_line("|    |    +--- javax.inject:javax.inject:1.2.3").unwrap();
        assert_eq!(parsed.level, 3);
        assert!(!parsed.is_summary());
        assert!(!parsed.is_module());

        let (coordinate, requested, resolved) = external(&parsed);
        assert_eq!(coordinate.group(), "javax.inject");
        assert_eq!(coordinate.artifact(), "javax.inject");
        assert_eq!(resolved, "1.2.3");
        assert_eq!(requested, "");
    }

    #[test]
    fn test_arrow_splits_requested_and_resolved() {
        let parsed = parse_line("|    +--- javax.inject:javax.inject:1.2.3 -> 2.1.2").unwrap();
        assert_eq!(parsed.level, 2);
        let (_, requested, resolved) = external(&parsed);
        assert_eq!(requested, "1.2.3");
        assert_eq!(resolved, "2.1.2");
    }

    #[test]
    fn test_strictly_constraint_is_summary() {
        let parsed =
            parse_line("+--- org.jetbrains.kotlin:kotlin-stdlib:{strictly 1.0.10} -> 2.1.10 (c)")
                .unwrap();
        assert!(parsed.is_summary());
        assert_eq!(parsed.level, 1);
        let (coordinate, requested, resolved) = external(&parsed);
        assert_eq!(coordinate.to_string(), "org.jetbrains.kotlin:kotlin-stdlib");
        assert_eq!(requested, "1.0.10");
        assert_eq!(resolved, "2.1.10");
    }

    #[test]
    fn test_strictly_without_arrow_resolves_to_constraint() {
        let parsed = parse_line("\\--- androidx.core:core:{strictly 1.13.0} (c)").unwrap();
        assert!(parsed.is_summary());
        let (_, requested, resolved) = external(&parsed);
        assert_eq!(requested, "1.13.0");
        assert_eq!(resolved, "1.13.0");
    }

    #[test]
    fn test_module_reference() {
        let parsed = parse_line("+--- project :feature:interests").unwrap();
        assert_eq!(parsed.level, 1);
        assert!(parsed.is_module());
        assert!(!parsed.is_summary());
        assert_eq!(
            parsed.entry,
            LineEntry::ModuleRef {
                path: ":feature:interests".to_string()
            }
        );
    }

    #[test]
    fn test_module_reference_with_collapsed_marker() {
        let parsed = parse_line("|    \\--- project :core:model (*)").unwrap();
        assert_eq!(parsed.level, 2);
        assert_eq!(parsed.into_node().module_path(), Some(":core:model"));
    }

    #[test]
    fn test_arrow_without_stated_version() {
        let parsed = parse_line("+--- androidx.compose:compose-bom -> 2024.09.00").unwrap();
        let (_, requested, resolved) = external(&parsed);
        assert_eq!(requested, "");
        assert_eq!(resolved, "2024.09.00");
    }

    #[test]
    fn test_trailing_annotations_are_ignored() {
        let collapsed = parse_line("|    +--- com.google.dagger:dagger:2.56 (*)").unwrap();
        let constraint = parse_line("+--- androidx.annotation:annotation:1.8.0 (c)").unwrap();
        assert_eq!(external(&collapsed).2, "2.56");
        assert_eq!(external(&constraint).2, "1.8.0");
        assert!(!constraint.is_summary());
    }

    #[test]
    fn test_dangling_arrow_keeps_stated_version() {
        let parsed = parse_line("+--- g:a:1.0 ->").unwrap();
        let (_, requested, resolved) = external(&parsed);
        assert_eq!(requested, "");
        assert_eq!(resolved, "1.0");
    }

    #[test]
    fn test_blank_cells_below_last_child_count_as_levels() {
        let parsed = parse_line("     \\--- org.jspecify:jspecify:1.0.0").unwrap();
        assert_eq!(parsed.level, 2);

        let parsed = parse_line("|         +--- org.jspecify:jspecify:1.0.0").unwrap();
        assert_eq!(parsed.level, 3);
    }

    #[test]
    fn test_trimmed_line_uses_marker_count() {
        let parsed = parse_line("| | +--- g:a:1").unwrap();
        assert_eq!(parsed.level, 3);
    }

    #[test]
    fn test_wide_spacing_off_the_grid_uses_marker_count() {
        let parsed = parse_line("|          +--- g:a:1").unwrap();
        assert_eq!(parsed.level, 2);

        let parsed = parse_line("  +--- g:a:1").unwrap();
        assert_eq!(parsed.level, 1);
    }

    #[test]
    fn test_single_segment_is_malformed() {
        let err = parse_line("+--- nonsense").unwrap_err();
        match err {
            TreeParseError::MalformedLine { line, reason, .. } => {
                assert_eq!(line, "+--- nonsense");
                assert!(reason.contains("group:artifact"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_empty_group_is_malformed() {
        assert!(matches!(
            parse_line("+--- :artifact:1.0"),
            Err(TreeParseError::MalformedLine { .. })
        ));
    }

    #[test]
    fn test_markers_only_is_malformed() {
        assert!(matches!(
            parse_line("|    +---"),
            Err(TreeParseError::MalformedLine { .. })
        ));
    }

    #[test]
    fn test_project_without_path_is_malformed() {
        let err = parse_line("+--- project").unwrap_err();
        assert!(err.to_string().contains("no module path"));
    }

    #[test]
    fn test_line_without_markers_is_level_zero() {
        let parsed = parse_line("com.squareup.okio:okio:3.9.0").unwrap();
        assert_eq!(parsed.level, 0);
    }

    #[test]
    fn test_tokenize_keeps_offsets() {
        assert_eq!(
            tokenize("|    +--- a:b"),
            vec![(0, "|"), (5, "+---"), (10, "a:b")]
        );
        assert!(tokenize("   ").is_empty());
    }
}
