//! Configuration validation for figbridge

use crate::core::constants::tools;
use crate::core::errors::ConfigError;
use crate::naming::TargetTool;

use super::FigBridgeConfig;

impl FigBridgeConfig {
    /// Validate configuration values.
    ///
    /// Runs on every load and before every save, so a config file on disk
    /// is never silently out of range.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let threshold = self.classification.icon_heavy_threshold;
        if !(0.0..=1.0).contains(&threshold) {
            return Err(ConfigError::InvalidValue {
                field: "classification.icon_heavy_threshold".to_string(),
                value: threshold.to_string(),
                reason: "must be between 0.0 and 1.0".to_string(),
            });
        }

        if self.output.max_icons_shown == 0 {
            return Err(ConfigError::InvalidValue {
                field: "output.max_icons_shown".to_string(),
                value: "0".to_string(),
                reason: "must be at least 1".to_string(),
            });
        }

        if self.naming.default_tool.parse::<TargetTool>().is_err() {
            return Err(ConfigError::InvalidValue {
                field: "naming.default_tool".to_string(),
                value: self.naming.default_tool.clone(),
                reason: format!("must be one of: {}", tools::ALL.join(", ")),
            });
        }

        Ok(())
    }
}
