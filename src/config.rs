use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::calculator::DEFAULT_DECIMAL_PLACES;
use crate::error::EphCalcError;
use crate::locale::Language;
use crate::logging::LogConfig;
use crate::models::CalculationMode;

/// Most decimals a result may be rendered with
pub const MAX_DECIMAL_PLACES: usize = 10;

/// Main application configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Application metadata
    pub metadata: ConfigMetadata,

    /// Display and calculation preferences
    #[serde(default)]
    pub settings: AppSettings,

    /// Logging preferences
    #[serde(default)]
    pub logging: LogConfig,
}

/// Configuration metadata
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConfigMetadata {
    /// Configuration format version
    pub version: String,

    /// Creation timestamp
    pub created_at: DateTime<Utc>,

    /// Last modification timestamp
    pub updated_at: DateTime<Utc>,
}

/// General application settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppSettings {
    /// Language for labels and messages
    pub language: Language,

    /// Mode used by the interactive session when none is chosen
    pub default_mode: CalculationMode,

    /// Decimals shown for EP and EpH results
    pub decimal_places: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        let now = Utc::now();

        AppConfig {
            metadata: ConfigMetadata {
                version: "1.0".to_string(),
                created_at: now,
                updated_at: now,
            },
            settings: AppSettings::default(),
            logging: LogConfig::default(),
        }
    }
}

impl Default for AppSettings {
    fn default() -> Self {
        AppSettings {
            language: Language::default(),
            default_mode: CalculationMode::Eph,
            decimal_places: DEFAULT_DECIMAL_PLACES,
        }
    }
}

/// Configuration management implementation
impl AppConfig {
    /// Load configuration from TOML file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {}", path.as_ref().display()))?;

        let config: AppConfig = toml::from_str(&content)
            .with_context(|| "Failed to parse TOML configuration")?;

        config.validate()?;
        Ok(config)
    }

    /// Save configuration to TOML file
    pub fn save_to_file<P: AsRef<Path>>(&mut self, path: P) -> Result<()> {
        self.metadata.updated_at = Utc::now();

        if let Some(parent) = path.as_ref().parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create config directory: {}", parent.display()))?;
        }

        let toml_content = toml::to_string_pretty(self)
            .with_context(|| "Failed to serialize configuration to TOML")?;

        fs::write(&path, toml_content)
            .with_context(|| format!("Failed to write config file: {}", path.as_ref().display()))?;

        Ok(())
    }

    /// Get default configuration file path
    pub fn default_config_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".ephcalc")
            .join("config.toml")
    }

    /// Load an explicit file, or the default file when it exists
    ///
    /// A missing default file yields the defaults; a missing explicit file
    /// is an error.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        match explicit {
            Some(path) => Self::load_from_file(path),
            None => {
                let path = Self::default_config_path();
                if path.exists() {
                    Self::load_from_file(&path)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }

    /// Reject settings no front end can honor
    pub fn validate(&self) -> std::result::Result<(), EphCalcError> {
        if self.settings.decimal_places > MAX_DECIMAL_PLACES {
            return Err(EphCalcError::Configuration(format!(
                "decimal_places must be at most {} (got {})",
                MAX_DECIMAL_PLACES, self.settings.decimal_places
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logging::LogLevel;
    use tempfile::tempdir;

    #[test]
    fn test_config_serialization() {
        let config = AppConfig::default();
        let toml_str = toml::to_string(&config).unwrap();
        let deserialized: AppConfig = toml::from_str(&toml_str).unwrap();

        assert_eq!(config.metadata.version, deserialized.metadata.version);
        assert_eq!(config.settings, deserialized.settings);
        assert_eq!(config.logging, deserialized.logging);
    }

    #[test]
    fn test_config_file_io() {
        let temp_dir = tempdir().unwrap();
        let config_path = temp_dir.path().join("nested").join("config.toml");

        let mut original_config = AppConfig::default();
        original_config.settings.language = Language::En;
        original_config.settings.decimal_places = 3;
        original_config.logging.level = LogLevel::Debug;

        original_config.save_to_file(&config_path).unwrap();
        let loaded_config = AppConfig::load_from_file(&config_path).unwrap();

        assert_eq!(loaded_config.settings.language, Language::En);
        assert_eq!(loaded_config.settings.decimal_places, 3);
        assert_eq!(loaded_config.logging.level, LogLevel::Debug);
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let temp_dir = tempdir().unwrap();
        let config_path = temp_dir.path().join("config.toml");
        fs::write(
            &config_path,
            r#"
[metadata]
version = "1.0"
created_at = "2024-01-01T00:00:00Z"
updated_at = "2024-01-01T00:00:00Z"

[settings]
language = "en"
"#,
        )
        .unwrap();

        let config = AppConfig::load(Some(config_path.as_path())).unwrap();
        assert_eq!(config.settings.language, Language::En);
        assert_eq!(config.settings.default_mode, CalculationMode::Eph);
        assert_eq!(config.settings.decimal_places, DEFAULT_DECIMAL_PLACES);
    }

    #[test]
    fn test_invalid_decimal_places_rejected() {
        let mut config = AppConfig::default();
        config.settings.decimal_places = 42;
        assert!(matches!(config.validate(), Err(EphCalcError::Configuration(_))));
    }

    #[test]
    fn test_missing_explicit_file_is_error() {
        let temp_dir = tempdir().unwrap();
        let missing = temp_dir.path().join("absent.toml");
        assert!(AppConfig::load(Some(missing.as_path())).is_err());
    }
}
