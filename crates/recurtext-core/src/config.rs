use anyhow::Result;
use config::Config;
use serde::Deserialize;

use crate::error::{CoreError, CoreResult};

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub language: LanguageConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LanguageConfig {
    /// Code of the profile used when a caller does not pick one (`en`, `es`).
    pub default: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
}

impl Settings {
    /// ## Summary
    /// Loads configuration from environment variables and `recurtext.toml` into a `Settings`.
    /// `RECURTEXT_`-prefixed environment variables take precedence over file values.
    ///
    /// ## Errors
    /// Returns an error if building the configuration, deserializing it, or validating it fails.
    pub fn load() -> Result<Self> {
        let settings = Config::builder()
            .set_default("language.default", "en")?
            .set_default("logging.level", "info")?
            // TOML file
            .add_source(config::File::with_name("recurtext.toml").required(false))
            // Env
            .add_source(
                config::Environment::with_prefix("RECURTEXT")
                    .prefix_separator("_")
                    .separator("_")
                    .ignore_empty(true)
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize::<Settings>()?;

        settings.validate()?;
        Ok(settings)
    }

    /// ## Summary
    /// Checks the values that deserialization alone cannot reject.
    ///
    /// ## Errors
    /// Returns `CoreError::ConfigError` if the default language code is blank.
    pub fn validate(&self) -> CoreResult<()> {
        if self.language.default.trim().is_empty() {
            return Err(CoreError::ConfigError(
                "language.default must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}

/// ## Summary
/// Loads configuration from environment variables and `.env` file.
///
/// ## Errors
/// Returns an error if loading or deserializing the configuration fails.
pub fn load_config() -> Result<Settings> {
    dotenvy::dotenv().ok();

    let settings = Settings::load()?;
    tracing::debug!(language = %settings.language.default, "Configuration loaded");
    Ok(settings)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test_log::test]
    fn load_uses_defaults() {
        let settings = Settings::load().unwrap();
        assert!(!settings.language.default.is_empty());
        assert!(!settings.logging.level.is_empty());
    }

    #[test]
    fn validate_rejects_blank_language() {
        let settings = Settings {
            language: LanguageConfig {
                default: "  ".to_string(),
            },
            logging: LoggingConfig {
                level: "debug".to_string(),
            },
        };
        assert!(matches!(settings.validate(), Err(CoreError::ConfigError(_))));
    }

    #[test]
    fn settings_clone() {
        let settings = Settings {
            language: LanguageConfig {
                default: "es".to_string(),
            },
            logging: LoggingConfig {
                level: "trace".to_string(),
            },
        };
        let cloned = settings.clone();
        assert_eq!(cloned.language.default, "es");
        assert_eq!(cloned.logging.level, "trace");
    }
}
