//! Configuration module for vpc-forge
//!
//! Handles loading and merging configuration from multiple sources:
//! - Default values
//! - System configuration (/etc/vpc-forge/vpc-forge.toml)
//! - User configuration (~/.vpc-forge.toml)
//! - Project configuration (./vpc-forge.toml)
//! - Environment variables
//! - Command-line arguments

use crate::scope::SynthesisOptions;
use crate::template::TemplateFormat;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Default settings
    pub defaults: Defaults,

    /// Synthesis settings
    pub synthesis: SynthesisConfig,

    /// Logging settings
    pub logging: LoggingConfig,

    /// Colors and output settings
    pub colors: ColorsConfig,
}

/// Default configuration values
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Defaults {
    /// Default template output format
    pub format: TemplateFormat,

    /// Description used when a layout does not carry one
    pub description: Option<String>,

    /// Default layout path
    pub layout: Option<PathBuf>,
}

impl Default for Defaults {
    fn default() -> Self {
        Self {
            format: TemplateFormat::Json,
            description: None,
            layout: None,
        }
    }
}

/// Synthesis settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SynthesisConfig {
    /// Fail synthesis on warnings
    pub strict: bool,

    /// Check logical ids against the CloudFormation naming rule
    pub validate_logical_ids: bool,
}

impl Default for SynthesisConfig {
    fn default() -> Self {
        Self {
            strict: false,
            validate_logical_ids: true,
        }
    }
}

/// Logging settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level used when neither `-v` nor `RUST_LOG` is given
    pub log_level: String,

    /// Log format: "pretty" or "json"
    pub log_format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            log_level: "warn".to_string(),
            log_format: "pretty".to_string(),
        }
    }
}

/// Colors configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ColorsConfig {
    /// Enable colors
    pub enabled: bool,
}

impl Default for ColorsConfig {
    fn default() -> Self {
        Self { enabled: true }
    }
}

impl Config {
    /// Load configuration from all sources
    pub fn load(config_path: Option<&PathBuf>) -> Result<Self> {
        let mut config = Config::default();

        for path in Self::get_config_paths(config_path) {
            if path.exists() {
                config = config.merge_from_file(&path)?;
            }
        }

        config.apply_env_overrides();

        Ok(config)
    }

    /// Get the list of configuration file paths to check
    fn get_config_paths(explicit_path: Option<&PathBuf>) -> Vec<PathBuf> {
        let mut paths = Vec::new();

        // Explicit path takes priority
        if let Some(path) = explicit_path {
            paths.push(path.clone());
            return paths;
        }

        // System-wide config
        paths.push(PathBuf::from("/etc/vpc-forge/vpc-forge.toml"));

        // User config
        if let Some(home) = dirs::home_dir() {
            paths.push(home.join(".vpc-forge.toml"));
            paths.push(home.join(".vpc-forge/config.toml"));
        }

        // Project config (current directory)
        paths.push(PathBuf::from("vpc-forge.toml"));

        paths
    }

    /// Merge configuration from a file
    fn merge_from_file(&self, path: &PathBuf) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let extension = path.extension().and_then(|e| e.to_str()).unwrap_or("");

        let file_config: Config = match extension {
            "yml" | "yaml" => serde_yaml::from_str(&content)?,
            "json" => serde_json::from_str(&content)?,
            "toml" => toml::from_str(&content)?,
            _ => toml::from_str(&content)
                .or_else(|_| serde_yaml::from_str(&content))
                .with_context(|| format!("Failed to parse config file: {}", path.display()))?,
        };

        Ok(self.merge(file_config))
    }

    /// Merge another config into this one
    ///
    /// Scalars only override when `other` moves them off their default, so a
    /// later file that omits a setting keeps the earlier value.
    fn merge(&self, other: Config) -> Config {
        let defaults = Config::default();
        Config {
            defaults: Defaults {
                format: overriding(
                    other.defaults.format,
                    self.defaults.format,
                    defaults.defaults.format,
                ),
                description: other
                    .defaults
                    .description
                    .or_else(|| self.defaults.description.clone()),
                layout: other
                    .defaults
                    .layout
                    .or_else(|| self.defaults.layout.clone()),
            },
            synthesis: SynthesisConfig {
                strict: overriding(
                    other.synthesis.strict,
                    self.synthesis.strict,
                    defaults.synthesis.strict,
                ),
                validate_logical_ids: overriding(
                    other.synthesis.validate_logical_ids,
                    self.synthesis.validate_logical_ids,
                    defaults.synthesis.validate_logical_ids,
                ),
            },
            logging: LoggingConfig {
                log_level: overriding(
                    other.logging.log_level,
                    self.logging.log_level.clone(),
                    defaults.logging.log_level,
                ),
                log_format: overriding(
                    other.logging.log_format,
                    self.logging.log_format.clone(),
                    defaults.logging.log_format,
                ),
            },
            colors: ColorsConfig {
                enabled: overriding(
                    other.colors.enabled,
                    self.colors.enabled,
                    defaults.colors.enabled,
                ),
            },
        }
    }

    /// Apply environment variable overrides
    fn apply_env_overrides(&mut self) {
        // VPC_FORGE_FORMAT
        if let Ok(format) = std::env::var("VPC_FORGE_FORMAT") {
            if let Ok(format) = format.parse() {
                self.defaults.format = format;
            }
        }

        // VPC_FORGE_LAYOUT
        if let Ok(layout) = std::env::var("VPC_FORGE_LAYOUT") {
            self.defaults.layout = Some(PathBuf::from(layout));
        }

        // VPC_FORGE_STRICT
        if let Ok(strict) = std::env::var("VPC_FORGE_STRICT") {
            self.synthesis.strict = !matches!(strict.as_str(), "0" | "false" | "no");
        }

        // VPC_FORGE_LOG_LEVEL
        if let Ok(level) = std::env::var("VPC_FORGE_LOG_LEVEL") {
            self.logging.log_level = level;
        }

        // VPC_FORGE_LOG_FORMAT
        if let Ok(format) = std::env::var("VPC_FORGE_LOG_FORMAT") {
            self.logging.log_format = format;
        }

        // NO_COLOR
        if std::env::var("NO_COLOR").is_ok() || std::env::var("VPC_FORGE_NO_COLOR").is_ok() {
            self.colors.enabled = false;
        }
    }

    /// Synthesis options derived from this configuration
    pub fn synthesis_options(&self) -> SynthesisOptions {
        SynthesisOptions {
            strict: self.synthesis.strict,
            validate_logical_ids: self.synthesis.validate_logical_ids,
        }
    }

    /// Check if JSON log output is requested
    pub fn json_logs(&self) -> bool {
        self.logging.log_format.eq_ignore_ascii_case("json")
    }

    /// Load from a specific file
    pub fn from_file(path: impl AsRef<std::path::Path>) -> Result<Self> {
        let path_buf = path.as_ref().to_path_buf();
        Config::default().merge_from_file(&path_buf)
    }
}

/// `value` when it differs from `default`, otherwise `current`.
fn overriding<T: PartialEq>(value: T, current: T, default: T) -> T {
    if value == default {
        current
    } else {
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.defaults.format, TemplateFormat::Json);
        assert!(!config.synthesis.strict);
        assert!(config.synthesis.validate_logical_ids);
        assert_eq!(config.logging.log_level, "warn");
        assert!(config.colors.enabled);
    }

    #[test]
    fn test_config_merge() {
        let base = Config {
            defaults: Defaults {
                description: Some("base".to_string()),
                ..Defaults::default()
            },
            ..Config::default()
        };
        let other = Config {
            synthesis: SynthesisConfig {
                strict: true,
                ..SynthesisConfig::default()
            },
            ..Config::default()
        };

        let merged = base.merge(other);
        assert!(merged.synthesis.strict);
        assert_eq!(merged.defaults.description.as_deref(), Some("base"));
    }

    #[test]
    fn test_config_paths_end_with_project_file() {
        let paths = Config::get_config_paths(None);
        assert_eq!(paths.first(), Some(&PathBuf::from("/etc/vpc-forge/vpc-forge.toml")));
        assert_eq!(paths.last(), Some(&PathBuf::from("vpc-forge.toml")));

        let explicit = PathBuf::from("/tmp/explicit.toml");
        assert_eq!(Config::get_config_paths(Some(&explicit)), vec![explicit]);
    }

    #[test]
    fn test_merge_keeps_settings_a_later_config_omits() {
        let system = Config {
            defaults: Defaults {
                format: TemplateFormat::Yaml,
                ..Defaults::default()
            },
            synthesis: SynthesisConfig {
                strict: true,
                validate_logical_ids: false,
            },
            logging: LoggingConfig {
                log_level: "debug".to_string(),
                log_format: "json".to_string(),
            },
            colors: ColorsConfig { enabled: false },
        };
        let user = Config {
            defaults: Defaults {
                description: Some("mine".to_string()),
                ..Defaults::default()
            },
            ..Config::default()
        };

        let merged = system.merge(user);
        assert_eq!(merged.defaults.format, TemplateFormat::Yaml);
        assert_eq!(merged.defaults.description.as_deref(), Some("mine"));
        assert!(merged.synthesis.strict);
        assert!(!merged.synthesis.validate_logical_ids);
        assert_eq!(merged.logging.log_level, "debug");
        assert!(merged.json_logs());
        assert!(!merged.colors.enabled);
    }

    #[test]
    fn test_synthesis_options() {
        let mut config = Config::default();
        config.synthesis.strict = true;
        config.synthesis.validate_logical_ids = false;

        let options = config.synthesis_options();
        assert!(options.strict);
        assert!(!options.validate_logical_ids);
    }
}
