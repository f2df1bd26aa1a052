//! Application configuration
//!
//! Configuration is loaded from multiple sources with the following priority (lowest to highest):
//! 1. `config/default.toml` (version controlled)
//! 2. `config/user.toml` (gitignored, user overrides)
//! 3. Environment variables (`G3D_SECTION__KEY`)

use figment::{Figment, providers::{Format, Toml, Env}};
use serde::{Serialize, Deserialize};
use std::path::Path;

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Scene object settings
    #[serde(default)]
    pub scene: SceneSettings,
    /// Debug configuration
    #[serde(default)]
    pub debug: DebugConfig,
}

impl AppConfig {
    /// Load configuration from default locations
    ///
    /// Priority (lowest to highest):
    /// 1. `config/default.toml`
    /// 2. `config/user.toml`
    /// 3. Environment variables (`G3D_*`)
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from("config")
    }

    /// Load configuration from a specific config directory
    pub fn load_from<P: AsRef<Path>>(config_dir: P) -> Result<Self, ConfigError> {
        let config_dir = config_dir.as_ref();
        let default_path = config_dir.join("default.toml");
        let user_path = config_dir.join("user.toml");

        let mut figment = Figment::new();

        if default_path.exists() {
            figment = figment.merge(Toml::file(&default_path));
        } else {
            log::debug!("No {} found, using built-in defaults", default_path.display());
        }

        if user_path.exists() {
            figment = figment.merge(Toml::file(&user_path));
        }

        // G3D_SCENE__AXES_SIZE=10 -> scene.axes_size = 10
        figment = figment.merge(Env::prefixed("G3D_").split("__"));

        let config: Self = figment.extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Check values that deserialize fine but cannot be used
    pub fn validate(&self) -> Result<(), ConfigError> {
        let size = self.scene.axes_size;
        if !size.is_finite() || size <= 0.0 {
            return Err(ConfigError::invalid(format!(
                "scene.axes_size must be a positive number, got {}",
                size
            )));
        }
        Ok(())
    }
}

/// Settings for the objects placed in the scene
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneSettings {
    /// Length of each axis line of the axes helper
    pub axes_size: f32,
    /// Attach the axes helper to the scene
    pub show_axes: bool,
}

impl Default for SceneSettings {
    fn default() -> Self {
        Self {
            axes_size: 5.0,
            show_axes: true,
        }
    }
}

/// Debug configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DebugConfig {
    /// Log level (error, warn, info, debug, trace)
    pub log_level: String,
}

impl Default for DebugConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}

/// Configuration error
#[derive(Debug)]
pub struct ConfigError {
    message: String,
}

impl ConfigError {
    fn invalid(message: String) -> Self {
        ConfigError { message }
    }
}

impl From<figment::Error> for ConfigError {
    fn from(e: figment::Error) -> Self {
        ConfigError {
            message: e.to_string(),
        }
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Configuration error: {}", self.message)
    }
}

impl std::error::Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.scene.axes_size, 5.0);
        assert!(config.scene.show_axes);
        assert_eq!(config.debug.log_level, "info");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_serialization() {
        let config = AppConfig::default();
        let toml = toml::to_string(&config).unwrap();
        assert!(toml.contains("axes_size"));
        assert!(toml.contains("log_level"));
    }

    #[test]
    fn test_partial_section_keeps_defaults() {
        let config: AppConfig = toml::from_str("[scene]\naxes_size = 2.0\n").unwrap();
        assert_eq!(config.scene.axes_size, 2.0);
        assert!(config.scene.show_axes);
    }

    #[test]
    fn test_validate_rejects_bad_sizes() {
        for size in [0.0, -1.0, f32::NAN, f32::INFINITY] {
            let mut config = AppConfig::default();
            config.scene.axes_size = size;
            let err = config.validate().unwrap_err();
            assert!(err.to_string().contains("axes_size"));
        }
    }
}
