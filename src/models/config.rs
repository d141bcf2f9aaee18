use serde::Deserialize;
use std::path::Path;

use crate::error::ConfigError;
use crate::models::LayoutSpec;

/// Environment variable naming a YAML configuration file.
pub const CONFIG_ENV_VAR: &str = "PALETTE_ENGINE_CONFIG";

/// Engine configuration loaded from YAML
#[derive(Debug, Deserialize, Clone, Default, PartialEq)]
pub struct EngineConfig {
    /// Canvas geometry
    #[serde(default)]
    pub layout: LayoutSpec,

    /// Input cardinality caps
    #[serde(default)]
    pub limits: InputLimits,
}

/// Caps on how many colors callers may pass to each operation
#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(default)]
pub struct InputLimits {
    /// Most seed colors for shade and tint palettes
    pub max_source_colors: usize,

    /// Most colors that can be mixed at once
    pub max_mix: usize,

    /// Fewest colors that can be mixed
    pub min_mix: usize,
}

impl Default for InputLimits {
    fn default() -> Self {
        Self {
            max_source_colors: 10,
            max_mix: 3,
            min_mix: 2,
        }
    }
}

impl EngineConfig {
    /// Parse and validate a YAML document
    pub fn from_yaml_str(content: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_yaml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a YAML file
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path.as_ref())?;
        Self::from_yaml_str(&content)
    }

    /// Load from the file named by `PALETTE_ENGINE_CONFIG`.
    ///
    /// Falls back to defaults when the variable is unset or the file cannot
    /// be used; failures are logged, never returned.
    pub fn load() -> Self {
        let Some(path) = std::env::var_os(CONFIG_ENV_VAR) else {
            tracing::debug!("No {} set, using defaults", CONFIG_ENV_VAR);
            return Self::default();
        };

        match Self::load_from_file(&path) {
            Ok(config) => {
                tracing::info!(
                    path = %Path::new(&path).display(),
                    width = config.layout.width,
                    height = config.layout.height,
                    "Loaded configuration"
                );
                config
            }
            Err(e) => {
                tracing::warn!(
                    path = %Path::new(&path).display(),
                    %e,
                    "Failed to load config, using defaults"
                );
                Self::default()
            }
        }
    }

    /// Check layout geometry and limit ordering
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.layout.validate()?;
        if self.limits.min_mix == 0 || self.limits.min_mix > self.limits.max_mix {
            return Err(ConfigError::Invalid(format!(
                "mix limits {}..={} are empty",
                self.limits.min_mix, self.limits.max_mix
            )));
        }
        if self.limits.max_source_colors == 0 {
            return Err(ConfigError::Invalid(
                "max_source_colors must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}
