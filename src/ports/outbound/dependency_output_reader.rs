use crate::shared::Result;
use std::fmt;
use std::path::PathBuf;

/// Where a saved `gradlew <module>:dependencies` dump comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    File(PathBuf),
    Stdin,
}

impl InputSource {
    /// `-` selects stdin, anything else is a file path
    pub fn from_arg(arg: &str) -> Self {
        if arg == "-" {
            InputSource::Stdin
        } else {
            InputSource::File(PathBuf::from(arg))
        }
    }
}

impl fmt::Display for InputSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputSource::File(path) => write!(f, "{}", path.display()),
            InputSource::Stdin => write!(f, "<stdin>"),
        }
    }
}

/// DependencyOutputReader port for reading raw dependency dumps
///
/// This port abstracts where the text printed by Gradle's `dependencies`
/// task is read from.
pub trait DependencyOutputReader {
    /// Reads the whole dump as text
    ///
    /// # Errors
    /// Returns an error if:
    /// - The file does not exist
    /// - The file is a symlink, too large, or not UTF-8
    fn read_dependency_output(&self, source: &InputSource) -> Result<String>;
}
