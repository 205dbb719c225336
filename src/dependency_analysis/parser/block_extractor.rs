use super::tree_builder::parse_tree;
use crate::dependency_analysis::domain::DependencyTree;
use crate::shared::error::TreeParseError;

/// What Gradle prints under a configuration that resolved nothing.
const NO_DEPENDENCIES_MARKER: &str = "No dependencies";

/// Returns the lines that belong to `configuration` in a full
/// `gradlew <module>:dependencies` dump.
///
/// The section starts on the line after the first line beginning with the
/// configuration name and ends before the next blank line (or at the end of
/// the input).
pub fn extract_section<'a>(raw: &'a str, configuration: &str) -> Result<&'a str, TreeParseError> {
    let mut offset = 0;
    let mut start = None;
    for line in raw.split_inclusive('\n') {
        offset += line.len();
        if line.starts_with(configuration) {
            start = Some(offset);
            break;
        }
    }

    let start = start.ok_or_else(|| TreeParseError::SectionNotFound {
        configuration: configuration.to_string(),
    })?;

    let body = &raw[start..];
    let mut end = 0;
    for line in body.split_inclusive('\n') {
        if line.trim().is_empty() {
            break;
        }
        end += line.len();
    }

    Ok(body[..end].trim_end())
}

/// Extracts one configuration's section and reconstructs its tree.
pub fn parse_tree_from_section(
    raw: &str,
    configuration: &str,
) -> Result<DependencyTree, TreeParseError> {
    let section = extract_section(raw, configuration)?;
    if section.trim() == NO_DEPENDENCIES_MARKER {
        return Err(TreeParseError::EmptyInput);
    }
    parse_tree(section)
}

#[cfg(test)]
mod tests {
    use super::*;

    const GRADLE_OUTPUT: &str = "\
> Task :app:dependencies

------------------------------------------------------------
Project ':app'
------------------------------------------------------------

debugCompileClasspath - Compile classpath for '/debug'.
+--- androidx.core:core-ktx:1.13.1
\\--- com.squareup.leakcanary:leakcanary-android:2.14

releaseCompileClasspath - Compile classpath for '/release'.
+--- androidx.core:core-ktx:1.13.1
|    \\--- androidx.annotation:annotation:1.8.0
\\--- org.jetbrains.kotlin:kotlin-stdlib:{strictly 2.0.21} (c)

releaseRuntimeClasspath - Runtime classpath of '/release'.
No dependencies

(c) - A dependency constraint, not a dependency. The dependency affected by the constraint occurs elsewhere in the tree.
";

    #[test]
    fn test_extracts_named_section_only() {
        let section = extract_section(GRADLE_OUTPUT, "releaseCompileClasspath").unwrap();
        assert_eq!(
            section,
            "+--- androidx.core:core-ktx:1.13.1\n\
             |    \\--- androidx.annotation:annotation:1.8.0\n\
             \\--- org.jetbrains.kotlin:kotlin-stdlib:{strictly 2.0.21} (c)"
        );
    }

    #[test]
    fn test_first_matching_header_wins() {
        let section = extract_section(GRADLE_OUTPUT, "debug").unwrap();
        assert!(section.contains("leakcanary"));
        assert!(!section.contains("annotation"));
    }

    #[test]
    fn test_section_at_end_of_input_without_blank_line() {
        let raw = "releaseCompileClasspath\n+--- g:a:1\n\\--- g:b:2";
        let section = extract_section(raw, "releaseCompileClasspath").unwrap();
        assert_eq!(section, "+--- g:a:1\n\\--- g:b:2");
    }

    #[test]
    fn test_handles_crlf_line_endings() {
        let raw = "releaseCompileClasspath\r\n+--- g:a:1\r\n\r\nother\r\n";
        let tree = parse_tree_from_section(raw, "releaseCompileClasspath").unwrap();
        assert_eq!(tree.top_level()[0].resolved_version(), "1");
    }

    #[test]
    fn test_missing_section() {
        let err = extract_section(GRADLE_OUTPUT, "stagingCompileClasspath").unwrap_err();
        assert_eq!(
            err,
            TreeParseError::SectionNotFound {
                configuration: "stagingCompileClasspath".to_string()
            }
        );
    }

    #[test]
    fn test_header_on_last_line_gives_empty_section() {
        let section = extract_section("releaseCompileClasspath", "releaseCompileClasspath").unwrap();
        assert_eq!(section, "");
        assert_eq!(
            parse_tree_from_section("releaseCompileClasspath", "releaseCompileClasspath"),
            Err(TreeParseError::EmptyInput)
        );
    }

    #[test]
    fn test_no_dependencies_section_is_empty_input() {
        assert_eq!(
            parse_tree_from_section(GRADLE_OUTPUT, "releaseRuntimeClasspath"),
            Err(TreeParseError::EmptyInput)
        );
    }

    #[test]
    fn test_parse_tree_from_section() {
        let tree = parse_tree_from_section(GRADLE_OUTPUT, "releaseCompileClasspath").unwrap();
        assert_eq!(tree.top_level().len(), 1);
        assert_eq!(tree.top_level()[0].children().len(), 1);
        assert_eq!(tree.summary().len(), 1);
        assert_eq!(tree.summary()[0].artifact(), "kotlin-stdlib");
    }
}
