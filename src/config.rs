//! Runtime configuration for the command-line caller.
//!
//! Precedence, lowest first: built-in defaults, the YAML file named by
//! `ELC_CONFIG`, then `ELC_BASE_URL` / `ELC_FORMAT` / `ELC_REQUIRE_COMPLETE`.
//! Command-line flags are applied on top by [`crate::cli`].

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{ElcError, Result};

pub const DEFAULT_BASE_URL: &str = "http://localhost:3000";

/// How `elc score` prints its report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Json,
    Yaml,
    Text,
}

impl FromStr for OutputFormat {
    type Err = ElcError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "json" => Ok(Self::Json),
            "yaml" | "yml" => Ok(Self::Yaml),
            "text" => Ok(Self::Text),
            other => Err(ElcError::Usage(format!("unknown output format '{}'", other))),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Json => write!(f, "json"),
            Self::Yaml => write!(f, "yaml"),
            Self::Text => write!(f, "text"),
        }
    }
}

/// Settings for `elc`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ElcConfig {
    /// Origin that result links are built under.
    pub base_url: String,
    pub format: OutputFormat,
    /// Refuse answer sets with fewer than 27 answers.
    pub require_complete: bool,
}

impl Default for ElcConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            format: OutputFormat::Json,
            require_complete: false,
        }
    }
}

impl ElcConfig {
    /// Load from the process environment.
    pub fn load() -> Result<Self> {
        Self::load_with(|key| std::env::var(key).ok())
    }

    /// Load using `lookup` in place of `std::env::var`.
    pub fn load_with<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = match lookup("ELC_CONFIG") {
            Some(path) => Self::from_yaml_file(path)?,
            None => Self::default(),
        };
        config.apply_env(&lookup)?;
        Ok(config)
    }

    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        log::debug!("loaded config from {}", path.as_ref().display());
        Ok(serde_yaml::from_str(&content)?)
    }

    fn apply_env<F>(&mut self, lookup: &F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(url) = lookup("ELC_BASE_URL") {
            self.base_url = url;
        }
        if let Some(format) = lookup("ELC_FORMAT") {
            self.format = format.parse()?;
        }
        if let Some(flag) = lookup("ELC_REQUIRE_COMPLETE") {
            self.require_complete = parse_bool(&flag)?;
        }
        Ok(())
    }
}

fn parse_bool(raw: &str) -> Result<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" | "" => Ok(false),
        other => Err(ElcError::Usage(format!("expected a boolean, got '{}'", other))),
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::io::Write;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = ElcConfig::load_with(env(&[])).unwrap();
        assert_eq!(config, ElcConfig::default());
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.format, OutputFormat::Json);
        assert!(!config.require_complete);
    }

    #[test]
    fn test_env_overrides() {
        let config = ElcConfig::load_with(env(&[
            ("ELC_BASE_URL", "https://elc.example"),
            ("ELC_FORMAT", "TEXT"),
            ("ELC_REQUIRE_COMPLETE", "yes"),
        ]))
        .unwrap();
        assert_eq!(config.base_url, "https://elc.example");
        assert_eq!(config.format, OutputFormat::Text);
        assert!(config.require_complete);
    }

    #[test]
    fn test_bad_env_values() {
        assert!(ElcConfig::load_with(env(&[("ELC_FORMAT", "xml")])).is_err());
        assert!(ElcConfig::load_with(env(&[("ELC_REQUIRE_COMPLETE", "maybe")])).is_err());
    }

    #[test]
    fn test_yaml_file_then_env() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "base_url: https://from-file.example\nformat: yaml").unwrap();
        let path = file.path().to_str().unwrap().to_string();

        let config = ElcConfig::load_with(env(&[("ELC_CONFIG", path.as_str())])).unwrap();
        assert_eq!(config.base_url, "https://from-file.example");
        assert_eq!(config.format, OutputFormat::Yaml);
        assert!(!config.require_complete);

        let config = ElcConfig::load_with(env(&[
            ("ELC_CONFIG", path.as_str()),
            ("ELC_BASE_URL", "https://from-env.example"),
        ]))
        .unwrap();
        assert_eq!(config.base_url, "https://from-env.example");
        assert_eq!(config.format, OutputFormat::Yaml);
    }

    #[test]
    fn test_missing_config_file() {
        let err = ElcConfig::load_with(env(&[("ELC_CONFIG", "/nonexistent/elc.yaml")])).unwrap_err();
        assert!(matches!(err, ElcError::Io(_)));
    }
}
