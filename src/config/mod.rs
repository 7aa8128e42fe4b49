pub mod paths;
pub mod validation;

pub use paths::{config_dir, project_config_path, user_config_path};

use clap::Subcommand;
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::core::constants::tools;
use crate::core::errors::ConfigError;
use crate::core::{ExportConfig, ExportFormat, SortBy, DEFAULT_ICON_HEAVY_THRESHOLD};

/// Configuration actions for figbridge
#[derive(Debug, Clone, Subcommand)]
pub enum ConfigAction {
    /// Initialize configuration file
    Init,
    /// Show current configuration
    Show,
}

/// Unified configuration for figbridge.
///
/// Consolidates output, classification, and naming settings into a single
/// TOML-backed structure. A project-local `.figbridge.toml` takes precedence
/// over the user-level config file; absence of both means defaults.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FigBridgeConfig {
    /// Document rendering settings
    pub output: OutputConfig,
    /// Component classification and supplementation settings
    pub classification: ClassificationConfig,
    /// Token naming settings
    pub naming: NamingConfig,
}

/// Document rendering settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub format: ExportFormat,
    pub include_summary: bool,
    pub include_scaffolds: bool,
    pub max_icons_shown: usize,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: ExportFormat::Markdown,
            include_summary: true,
            include_scaffolds: true,
            max_icons_shown: 5,
        }
    }
}

/// Component classification and supplementation settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ClassificationConfig {
    /// Icon share above which canonical UI patterns are supplemented
    pub icon_heavy_threshold: f32,
    /// Disable to keep icon-heavy extractions as-is
    pub supplement_patterns: bool,
}

impl Default for ClassificationConfig {
    fn default() -> Self {
        Self {
            icon_heavy_threshold: DEFAULT_ICON_HEAVY_THRESHOLD,
            supplement_patterns: true,
        }
    }
}

/// Token naming settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct NamingConfig {
    /// Target tool preset used when `--tool` is not given
    pub default_tool: String,
}

impl Default for NamingConfig {
    fn default() -> Self {
        Self {
            default_tool: tools::BOLT.to_string(),
        }
    }
}

impl Default for FigBridgeConfig {
    fn default() -> Self {
        Self {
            output: OutputConfig::default(),
            classification: ClassificationConfig::default(),
            naming: NamingConfig::default(),
        }
    }
}

impl FigBridgeConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from file, falling back to defaults if the file
    /// doesn't exist.
    pub async fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path).await
        } else {
            Ok(Self::new())
        }
    }

    /// Load configuration from a TOML file
    pub async fn load(path: &Path) -> Result<Self, ConfigError> {
        let content =
            tokio::fs::read_to_string(path)
                .await
                .map_err(|source| ConfigError::ReadFailed {
                    path: path.to_path_buf(),
                    source,
                })?;

        let config: Self = toml::from_str(&content).map_err(|source| ConfigError::Toml {
            context: path.display().to_string(),
            message: source.to_string(),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Save configuration to a TOML file
    pub async fn save(&self, path: &Path) -> Result<(), ConfigError> {
        self.validate()?;

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                tokio::fs::create_dir_all(parent).await.map_err(|source| {
                    ConfigError::WriteFailed {
                        path: parent.to_path_buf(),
                        source,
                    }
                })?;
            }
        }

        let content =
            toml::to_string_pretty(self).map_err(|source| ConfigError::TomlSerialize {
                message: source.to_string(),
                source,
            })?;
        tokio::fs::write(path, content)
            .await
            .map_err(|source| ConfigError::WriteFailed {
                path: path.to_path_buf(),
                source,
            })
    }

    /// Resolve the active configuration: project-local file first, then the
    /// user-level file, then defaults.
    pub async fn discover() -> Result<Self, ConfigError> {
        let project = paths::project_config_path();
        if project.exists() {
            return Self::load(&project).await;
        }

        if let Ok(user) = paths::user_config_path() {
            if user.exists() {
                return Self::load(&user).await;
            }
        }

        Ok(Self::new())
    }

    /// Project the output section onto the renderer's export settings.
    pub fn export_config(&self) -> ExportConfig {
        ExportConfig {
            format: self.output.format,
            include_summary: self.output.include_summary,
            include_scaffolds: self.output.include_scaffolds,
            max_icons_shown: self.output.max_icons_shown,
            sort_by: SortBy::Priority,
        }
    }
}
