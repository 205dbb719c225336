use crate::dependency_analysis::domain::FlatDependency;
use crate::shared::Result;
use std::cell::Cell;

/// Maximum number of exclude patterns
const MAX_EXCLUDE_PATTERNS: usize = 64;

/// Maximum length of a single exclude pattern
const MAX_PATTERN_LENGTH: usize = 255;

/// DependencyFilter - Drops dependencies whose `group:name` matches a pattern
///
/// Supports `*` wildcards matching zero or more characters, e.g.
/// `androidx.compose.*`, `*:kotlin-stdlib*`, `com.google.firebase:*-ktx`.
/// Patterns are case-sensitive.
#[derive(Debug)]
pub struct DependencyFilter {
    patterns: Vec<ExcludePattern>,
}

impl DependencyFilter {
    /// Creates a new DependencyFilter from raw pattern strings
    ///
    /// # Errors
    /// - Too many patterns (> MAX_EXCLUDE_PATTERNS)
    /// - Invalid pattern format (empty, too long, bad characters, only wildcards)
    pub fn new(patterns: Vec<String>) -> Result<Self> {
        if patterns.len() > MAX_EXCLUDE_PATTERNS {
            anyhow::bail!(
                "Too many exclusion patterns: {} (maximum: {})",
                patterns.len(),
                MAX_EXCLUDE_PATTERNS
            );
        }

        let patterns = patterns
            .into_iter()
            .map(ExcludePattern::new)
            .collect::<Result<Vec<_>>>()?;

        Ok(Self { patterns })
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    /// Keeps only dependencies that match no exclusion pattern
    pub fn filter(&self, deps: Vec<FlatDependency>) -> Vec<FlatDependency> {
        deps.into_iter()
            .filter(|dep| !self.matches(&format!("{}:{}", dep.group, dep.name)))
            .collect()
    }

    fn matches(&self, key: &str) -> bool {
        // Every pattern is tried so each one records whether it was used
        self.patterns
            .iter()
            .fold(false, |matched, pattern| pattern.matches(key) || matched)
    }

    /// Patterns that have not matched anything so far
    pub fn unmatched_patterns(&self) -> Vec<String> {
        self.patterns
            .iter()
            .filter(|p| !p.matched.get())
            .map(|p| p.original.clone())
            .collect()
    }
}

#[derive(Debug)]
struct ExcludePattern {
    original: String,
    matcher: PatternMatcher,
    matched: Cell<bool>,
}

impl ExcludePattern {
    fn new(pattern: String) -> Result<Self> {
        validate_pattern(&pattern)?;
        let matcher = compile_pattern(&pattern);
        Ok(Self {
            original: pattern,
            matcher,
            matched: Cell::new(false),
        })
    }

    fn matches(&self, key: &str) -> bool {
        let is_match = self.matcher.matches(key);
        if is_match {
            self.matched.set(true);
        }
        is_match
    }
}

#[derive(Debug)]
enum PatternMatcher {
    /// `androidx.core:core`
    Exact(String),
    /// `*-ktx`
    EndsWith(String),
    /// `androidx.compose.*`
    StartsWith(String),
    /// `*firebase*`
    Contains(String),
    /// `com.google.*:*-ktx`; pieces must appear in order, first and last anchored
    Pieces {
        pieces: Vec<String>,
        anchored_start: bool,
        anchored_end: bool,
    },
}

impl PatternMatcher {
    fn matches(&self, key: &str) -> bool {
        match self {
            PatternMatcher::Exact(s) => key == s,
            PatternMatcher::EndsWith(suffix) => key.ends_with(suffix.as_str()),
            PatternMatcher::StartsWith(prefix) => key.starts_with(prefix.as_str()),
            PatternMatcher::Contains(middle) => key.contains(middle.as_str()),
            PatternMatcher::Pieces {
                pieces,
                anchored_start,
                anchored_end,
            } => match_pieces(key, pieces, *anchored_start, *anchored_end),
        }
    }
}

fn match_pieces(key: &str, pieces: &[String], anchored_start: bool, anchored_end: bool) -> bool {
    let mut rest = key;
    let last = pieces.len().saturating_sub(1);

    for (index, piece) in pieces.iter().enumerate() {
        if index == 0 && anchored_start {
            match rest.strip_prefix(piece.as_str()) {
                Some(stripped) => rest = stripped,
                None => return false,
            }
        } else if index == last && anchored_end {
            return rest.len() >= piece.len() && rest.ends_with(piece.as_str());
        } else {
            match rest.find(piece.as_str()) {
                Some(pos) => rest = &rest[pos + piece.len()..],
                None => return false,
            }
        }
    }
    true
}

fn validate_pattern(pattern: &str) -> Result<()> {
    if pattern.is_empty() {
        anyhow::bail!("Exclusion pattern cannot be empty");
    }

    if pattern.len() > MAX_PATTERN_LENGTH {
        anyhow::bail!(
            "Exclusion pattern is too long: '{}' ({} chars). Maximum: {} chars",
            pattern,
            pattern.len(),
            MAX_PATTERN_LENGTH
        );
    }

    if let Some(ch) = pattern.chars().find(|c| !is_valid_pattern_char(*c)) {
        anyhow::bail!(
            "Exclusion pattern contains invalid character '{}' in pattern '{}'. \
             Only alphanumeric, hyphens, underscores, dots, colons, and asterisks (*) are allowed.",
            ch,
            pattern
        );
    }

    if pattern.chars().all(|c| c == '*') {
        anyhow::bail!(
            "Exclusion pattern cannot contain only wildcards: '{}'",
            pattern
        );
    }

    Ok(())
}

fn is_valid_pattern_char(c: char) -> bool {
    c.is_alphanumeric() || matches!(c, '-' | '_' | '.' | ':' | '*')
}

fn compile_pattern(pattern: &str) -> PatternMatcher {
    let starts_wild = pattern.starts_with('*');
    let ends_wild = pattern.ends_with('*');
    let pieces: Vec<String> = pattern
        .split('*')
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect();

    match (pieces.as_slice(), starts_wild, ends_wild) {
        ([only], false, false) => PatternMatcher::Exact(only.clone()),
        ([only], true, false) => PatternMatcher::EndsWith(only.clone()),
        ([only], false, true) => PatternMatcher::StartsWith(only.clone()),
        ([only], true, true) => PatternMatcher::Contains(only.clone()),
        _ => PatternMatcher::Pieces {
            pieces,
            anchored_start: !starts_wild,
            anchored_end: !ends_wild,
        },
    }
}
