//! Configuration settings for pugg.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Root configuration structure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub general: GeneralSettings,
    pub youtube: YoutubeSettings,
    pub study: StudySettings,
}

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralSettings {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,
}

impl Default for GeneralSettings {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}

/// YouTube-specific settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct YoutubeSettings {
    /// YouTube Data API v3 key.
    pub api_key: Option<String>,
    /// Default region code for trending lookups (ISO 3166-1 alpha-2).
    pub region: String,
}

impl Default for YoutubeSettings {
    fn default() -> Self {
        Self {
            api_key: None,
            region: "US".to_string(),
        }
    }
}

/// Study material generation settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StudySettings {
    /// Default maximum number of flash cards per deck.
    pub default_max_cards: usize,
}

impl Default for StudySettings {
    fn default() -> Self {
        Self {
            default_max_cards: 10,
        }
    }
}

impl Settings {
    /// Load settings from the default configuration file.
    pub fn load() -> crate::error::Result<Self> {
        Self::load_from(None)
    }

    /// Load settings from a specific path, or default location if None.
    pub fn load_from(path: Option<&PathBuf>) -> crate::error::Result<Self> {
        let config_path = match path {
            Some(p) => p.clone(),
            None => Self::default_config_path(),
        };

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            let settings: Settings = toml::from_str(&content)?;
            Ok(settings)
        } else {
            Ok(Settings::default())
        }
    }

    /// Save settings to the default configuration file.
    pub fn save(&self) -> crate::error::Result<()> {
        self.save_to(&Self::default_config_path())
    }

    /// Save settings to a specific path.
    pub fn save_to(&self, path: &PathBuf) -> crate::error::Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)
            .map_err(|e| crate::error::PuggError::Config(e.to_string()))?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Get the default configuration file path.
    pub fn default_config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("pugg")
            .join("config.toml")
    }

    /// Resolve the YouTube API key from config or environment.
    pub fn api_key(&self) -> crate::error::Result<String> {
        if let Some(key) = &self.youtube.api_key {
            if !key.is_empty() {
                return Ok(key.clone());
            }
        }
        match std::env::var("YOUTUBE_API_KEY") {
            Ok(key) if !key.is_empty() => Ok(key),
            _ => Err(crate::error::PuggError::MissingApiKey),
        }
    }

    /// Set a configuration value by dotted key.
    pub fn set_value(&mut self, key: &str, value: &str) -> crate::error::Result<()> {
        match key {
            "general.log_level" => self.general.log_level = value.to_string(),
            "youtube.api_key" => self.youtube.api_key = Some(value.to_string()),
            "youtube.region" => self.youtube.region = value.to_uppercase(),
            "study.default_max_cards" => {
                self.study.default_max_cards = value.parse().map_err(|_| {
                    crate::error::PuggError::Config(format!(
                        "study.default_max_cards must be a number, got '{}'",
                        value
                    ))
                })?;
            }
            _ => {
                return Err(crate::error::PuggError::Config(format!(
                    "Unknown configuration key: {}",
                    key
                )))
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.general.log_level, "info");
        assert_eq!(settings.youtube.region, "US");
        assert_eq!(settings.study.default_max_cards, 10);
        assert!(settings.youtube.api_key.is_none());
    }

    #[test]
    fn test_set_value() {
        let mut settings = Settings::default();
        settings.set_value("youtube.region", "no").unwrap();
        assert_eq!(settings.youtube.region, "NO");

        settings.set_value("study.default_max_cards", "25").unwrap();
        assert_eq!(settings.study.default_max_cards, 25);

        assert!(settings.set_value("study.default_max_cards", "lots").is_err());
        assert!(settings.set_value("nonsense.key", "1").is_err());
    }

    #[test]
    fn test_partial_toml() {
        let settings: Settings = toml::from_str(
            r#"
            [youtube]
            api_key = "AIzaTest"
            "#,
        )
        .unwrap();
        assert_eq!(settings.youtube.api_key.as_deref(), Some("AIzaTest"));
        assert_eq!(settings.youtube.region, "US");
        assert_eq!(settings.general.log_level, "info");
    }
}
