//! CLI configuration

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::output::OutputFormat;

/// Get default config file path
pub fn default_config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("maxpath")
        .join("config.toml")
}

/// Configuration for the CLI, stored as TOML
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Reject malformed node labels while parsing
    pub strict: bool,
    /// Print only the first `limit` paths per start node
    pub enforce_limit: bool,
    /// Default output format
    pub format: OutputFormat,
    /// Worker threads for parallel counting (all cores when unset)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub threads: Option<usize>,
}

impl Config {
    /// Load config from `path`, falling back to defaults
    pub fn load(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(config) => config,
                Err(e) => {
                    tracing::warn!("Ignoring invalid config file {}: {}", path.display(), e);
                    Self::default()
                }
            },
            Err(_) => {
                tracing::debug!("No config file at {}, using defaults", path.display());
                Self::default()
            }
        }
    }

    pub fn save(&self, path: &Path) -> anyhow::Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, toml::to_string_pretty(self)?)?;
        Ok(())
    }

    pub fn keys() -> &'static [&'static str] {
        &["strict", "enforce_limit", "format", "threads"]
    }

    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "strict" => Some(self.strict.to_string()),
            "enforce_limit" => Some(self.enforce_limit.to_string()),
            "format" => Some(self.format.to_string()),
            "threads" => Some(
                self.threads
                    .map_or_else(|| "auto".to_string(), |n| n.to_string()),
            ),
            _ => None,
        }
    }

    pub fn set(&mut self, key: &str, value: &str) -> anyhow::Result<()> {
        match key {
            "strict" => self.strict = parse_bool(value)?,
            "enforce_limit" => self.enforce_limit = parse_bool(value)?,
            "format" => self.format = value.parse().map_err(anyhow::Error::msg)?,
            "threads" => {
                self.threads = match value {
                    "auto" => None,
                    n => match n.parse::<usize>()? {
                        0 => anyhow::bail!("threads must be at least 1 (or 'auto')"),
                        n => Some(n),
                    },
                }
            }
            _ => anyhow::bail!(
                "Unknown config key: {} (available: {})",
                key,
                Self::keys().join(", ")
            ),
        }
        Ok(())
    }
}

fn parse_bool(value: &str) -> anyhow::Result<bool> {
    match value.to_lowercase().as_str() {
        "true" | "yes" | "on" | "1" => Ok(true),
        "false" | "no" | "off" | "0" => Ok(false),
        _ => anyhow::bail!("Expected a boolean, got '{}'", value),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_and_get() {
        let mut config = Config::default();
        config.set("strict", "yes").unwrap();
        config.set("format", "json").unwrap();
        config.set("threads", "4").unwrap();

        assert_eq!(config.get("strict").as_deref(), Some("true"));
        assert_eq!(config.get("format").as_deref(), Some("json"));
        assert_eq!(config.get("threads").as_deref(), Some("4"));
        assert_eq!(config.get("missing"), None);

        config.set("threads", "auto").unwrap();
        assert_eq!(config.threads, None);
    }

    #[test]
    fn test_set_rejects_bad_values() {
        let mut config = Config::default();
        assert!(config.set("strict", "maybe").is_err());
        assert!(config.set("threads", "0").is_err());
        assert!(config.set("colour", "red").is_err());
    }

    #[test]
    fn test_save_and_load_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let mut config = Config::default();
        config.set("enforce_limit", "true").unwrap();
        config.save(&path).unwrap();

        assert_eq!(Config::load(&path), config);
    }

    #[test]
    fn test_load_missing_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(Config::load(&dir.path().join("absent.toml")), Config::default());
    }
}
