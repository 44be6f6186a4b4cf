//! Top-level Stratum configuration with layered resolution.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::{LayoutConfig, ParseFailurePolicy, ScanConfig, ViewConfig};
use crate::constants::PROJECT_CONFIG_FILE;
use crate::errors::ConfigError;
use crate::types::passport::LayerType;

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. Caller overrides (applied via `apply_overrides`)
/// 2. Environment variables (`STRATUM_*`)
/// 3. Project config (`stratum.toml` in project root)
/// 4. User config (`~/.stratum/config.toml`)
/// 5. Compiled defaults
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct StratumConfig {
    pub scan: ScanConfig,
    pub layout: LayoutConfig,
    pub view: ViewConfig,
}

/// Override values supplied by the calling front end.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub max_file_size: Option<u64>,
    pub source_dir: Option<String>,
    pub view_depth: Option<u32>,
    pub on_parse_error: Option<ParseFailurePolicy>,
}

impl StratumConfig {
    /// Load configuration with layered resolution rooted at `root`.
    pub fn load(root: &Path, overrides: Option<&ConfigOverrides>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        // Lowest priority: user config. Parse errors are fatal, unreadable files are not.
        if let Some(user_config_path) = Self::user_config_path() {
            if user_config_path.exists() {
                match Self::merge_toml_file(&mut config, &user_config_path) {
                    Ok(()) => {}
                    Err(e @ ConfigError::Malformed { .. }) => return Err(e),
                    Err(e) => {
                        tracing::warn!(error = %e, "ignoring unreadable user config");
                    }
                }
            }
        }

        let project_config_path = root.join(PROJECT_CONFIG_FILE);
        if project_config_path.exists() {
            Self::merge_toml_file(&mut config, &project_config_path)?;
        }

        Self::apply_env_overrides(&mut config);

        if let Some(overrides) = overrides {
            Self::apply_overrides(&mut config, overrides);
        }

        Self::validate(&config)?;

        Ok(config)
    }

    /// Load configuration from a TOML string.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(toml_str).map_err(|e| ConfigError::Malformed {
            origin: "<inline>".to_string(),
            message: e.to_string(),
        })?;
        Self::validate(&config)?;
        Ok(config)
    }

    /// Validate the configuration values.
    pub fn validate(config: &StratumConfig) -> Result<(), ConfigError> {
        if config.scan.max_file_size == Some(0) {
            return Err(ConfigError::ZeroLimit {
                field: "scan.max_file_size",
            });
        }
        if let Some(ref dir) = config.layout.source_dir {
            if dir.trim().is_empty() {
                return Err(ConfigError::EmptyDirectory {
                    field: "layout.source_dir",
                });
            }
        }
        for layer in &config.view.layers {
            if LayerType::from_name(layer).is_none() {
                return Err(ConfigError::UnknownLayer {
                    layer: layer.clone(),
                });
            }
        }
        Ok(())
    }

    /// Returns the user config path: `~/.stratum/config.toml`.
    fn user_config_path() -> Option<PathBuf> {
        home_dir().map(|h| h.join(".stratum").join("config.toml"))
    }

    /// Merge a TOML file into the existing config.
    /// Unknown keys are silently ignored.
    fn merge_toml_file(config: &mut StratumConfig, path: &Path) -> Result<(), ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Unreadable {
            path: path.to_path_buf(),
            source,
        })?;

        let file_config: StratumConfig =
            toml::from_str(&content).map_err(|e| ConfigError::Malformed {
                origin: path.display().to_string(),
                message: e.to_string(),
            })?;

        Self::merge(config, &file_config);
        Ok(())
    }

    /// Merge `other` into `base`; `other` wins wherever it carries a value.
    fn merge(base: &mut StratumConfig, other: &StratumConfig) {
        // Scan
        if !other.scan.excluded_dirs.is_empty() {
            base.scan.excluded_dirs = other.scan.excluded_dirs.clone();
        }
        if !other.scan.ignored_files.is_empty() {
            base.scan.ignored_files = other.scan.ignored_files.clone();
        }
        if other.scan.max_file_size.is_some() {
            base.scan.max_file_size = other.scan.max_file_size;
        }
        if other.scan.on_parse_error.is_some() {
            base.scan.on_parse_error = other.scan.on_parse_error;
        }

        // Layout
        if other.layout.source_dir.is_some() {
            base.layout.source_dir = other.layout.source_dir.clone();
        }
        if other.layout.tests_dir.is_some() {
            base.layout.tests_dir = other.layout.tests_dir.clone();
        }
        if other.layout.docs_dir.is_some() {
            base.layout.docs_dir = other.layout.docs_dir.clone();
        }
        if other.layout.root_package.is_some() {
            base.layout.root_package = other.layout.root_package.clone();
        }

        // View
        if other.view.depth.is_some() {
            base.view.depth = other.view.depth;
        }
        if other.view.include_assets.is_some() {
            base.view.include_assets = other.view.include_assets;
        }
        if !other.view.contexts.is_empty() {
            base.view.contexts = other.view.contexts.clone();
        }
        if !other.view.layers.is_empty() {
            base.view.layers = other.view.layers.clone();
        }
    }

    /// Apply environment variable overrides.
    /// Pattern: `STRATUM_SCAN_MAX_FILE_SIZE`, `STRATUM_VIEW_DEPTH`, etc.
    fn apply_env_overrides(config: &mut StratumConfig) {
        if let Ok(val) = std::env::var("STRATUM_SCAN_MAX_FILE_SIZE") {
            if let Ok(v) = val.parse::<u64>() {
                config.scan.max_file_size = Some(v);
            }
        }
        if let Ok(val) = std::env::var("STRATUM_ON_PARSE_ERROR") {
            if let Ok(v) = val.parse::<ParseFailurePolicy>() {
                config.scan.on_parse_error = Some(v);
            }
        }
        if let Ok(val) = std::env::var("STRATUM_SOURCE_DIR") {
            if !val.trim().is_empty() {
                config.layout.source_dir = Some(val);
            }
        }
        if let Ok(val) = std::env::var("STRATUM_VIEW_DEPTH") {
            if let Ok(v) = val.parse::<u32>() {
                config.view.depth = Some(v);
            }
        }
    }

    /// Apply caller overrides (highest priority).
    fn apply_overrides(config: &mut StratumConfig, overrides: &ConfigOverrides) {
        if let Some(v) = overrides.max_file_size {
            config.scan.max_file_size = Some(v);
        }
        if let Some(ref v) = overrides.source_dir {
            config.layout.source_dir = Some(v.clone());
        }
        if let Some(v) = overrides.view_depth {
            config.view.depth = Some(v);
        }
        if let Some(v) = overrides.on_parse_error {
            config.scan.on_parse_error = Some(v);
        }
    }

    /// Serialize the config back to TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::Serialize {
            message: e.to_string(),
        })
    }
}

/// Cross-platform home directory resolution.
fn home_dir() -> Option<PathBuf> {
    std::env::var_os("HOME")
        .or_else(|| std::env::var_os("USERPROFILE"))
        .map(PathBuf::from)
}
