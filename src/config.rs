//! Configuration file support.
//!
//! Reads `gradle-depdiff.config.yml`, either auto-discovered in the working
//! directory or passed with `--config`. Command-line flags override it.

use anyhow::{bail, Context};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;
use std::str::FromStr;

use crate::application::dto::OutputFormat;
use crate::shared::Result;

pub const CONFIG_FILENAME: &str = "gradle-depdiff.config.yml";

/// Top-level configuration file schema.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    /// Build variant whose compile classpath is collected, e.g. `release`
    pub variant: Option<String>,
    /// Explicit configuration name; wins over `variant`
    pub configuration: Option<String>,
    pub format: Option<String>,
    pub exclude_dependencies: Option<Vec<String>>,
    pub plain_output: Option<bool>,
    pub fail_on_changes: Option<bool>,
    /// Captures unknown fields for warnings.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_yaml_ng::Value>,
}

/// Load config from an explicit path. Returns an error if the file is not found.
pub fn load_config_from_path(path: &Path) -> Result<ConfigFile> {
    let content = std::fs::read_to_string(path).with_context(|| {
        format!(
            "Failed to read config file: {}\n\n💡 Hint: Check that the file exists and is readable.",
            path.display()
        )
    })?;

    let config: ConfigFile = serde_yaml_ng::from_str(&content).with_context(|| {
        format!(
            "Failed to parse config file: {}\n\n💡 Hint: Ensure the file contains valid YAML syntax.",
            path.display()
        )
    })?;

    validate_config(&config)?;
    warn_unknown_fields(&config);

    tracing::debug!(path = %path.display(), "loaded config file");
    Ok(config)
}

/// Auto-discover config in a directory. Returns `None` silently if not found.
pub fn discover_config(dir: &Path) -> Result<Option<ConfigFile>> {
    let config_path = dir.join(CONFIG_FILENAME);

    if !config_path.exists() {
        return Ok(None);
    }

    load_config_from_path(&config_path).map(Some)
}

fn validate_config(config: &ConfigFile) -> Result<()> {
    if let Some(ref patterns) = config.exclude_dependencies {
        for (i, pattern) in patterns.iter().enumerate() {
            if pattern.trim().is_empty() {
                bail!(
                    "Invalid config: exclude_dependencies[{}] must not be empty.\n\n\
                     💡 Hint: Use group:name patterns such as \"androidx.compose.*\".",
                    i
                );
            }
        }
    }

    if let Some(ref format) = config.format {
        if let Err(e) = OutputFormat::from_str(format) {
            bail!("Invalid config: {}", e);
        }
    }

    for (field, value) in [
        ("variant", &config.variant),
        ("configuration", &config.configuration),
    ] {
        if let Some(value) = value {
            if value.trim().is_empty() || value.contains(char::is_whitespace) {
                bail!(
                    "Invalid config: {} must be a single non-empty word, got '{}'.",
                    field,
                    value
                );
            }
        }
    }
    Ok(())
}

fn warn_unknown_fields(config: &ConfigFile) {
    for key in config.unknown_fields.keys() {
        eprintln!("⚠️  Warning: Unknown config field '{}' will be ignored.", key);
    }
}
