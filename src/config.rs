use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::constants::{DEFAULT_ENDPOINT, DEFAULT_MAX_TOKENS, DEFAULT_MODEL, DEFAULT_TIMEOUT_SECS};
use crate::prompt::{Temperature, Tone};

/// Application configuration
///
/// Every field has a default, so a missing or partial config file is fine.
/// The API key is entered in the form and is never part of the config.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub completion: CompletionConfig,
    /// Initial selections for the form's choice fields
    #[serde(default)]
    pub form: FormConfig,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UiConfig {
    #[serde(default)]
    pub keybinding_mode: KeybindingMode,
    #[serde(default)]
    pub theme: ThemeVariant,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum KeybindingMode {
    #[default]
    Vim,
    Arrows,
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ThemeVariant {
    #[default]
    Dark,
    #[serde(rename = "high-contrast")]
    HighContrast,
}

/// Completion service settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompletionConfig {
    /// Full URL of the text-completion endpoint
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
    #[serde(default = "default_model")]
    pub model: String,
    /// Maximum tokens generated per request
    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,
    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for CompletionConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            model: default_model(),
            max_tokens: default_max_tokens(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FormConfig {
    #[serde(default)]
    pub tone: Tone,
    #[serde(default)]
    pub temperature: Temperature,
}

fn default_endpoint() -> String {
    DEFAULT_ENDPOINT.to_string()
}

fn default_model() -> String {
    DEFAULT_MODEL.to_string()
}

fn default_max_tokens() -> u32 {
    DEFAULT_MAX_TOKENS
}

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

impl Config {
    pub fn config_dir() -> Result<PathBuf> {
        let dir = dirs::config_dir()
            .context("Could not find config directory")?
            .join("mailprompt");
        Ok(dir)
    }

    pub fn config_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    /// Load the config from the default location, falling back to defaults
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!("No config at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).context("Failed to serialize config")
    }

    pub fn ensure_dirs() -> Result<()> {
        let dir = Self::config_dir()?;
        fs::create_dir_all(&dir)
            .with_context(|| format!("Failed to create config directory: {}", dir.display()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_parse_full_config() {
        let toml = r#"
            [ui]
            keybinding_mode = "arrows"
            theme = "high-contrast"

            [completion]
            endpoint = "http://localhost:8080/v1/completions"
            model = "local-instruct"
            max_tokens = 128
            timeout_secs = 5

            [form]
            tone = "Friendly"
            temperature = "Creative"
        "#;

        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.ui.keybinding_mode, KeybindingMode::Arrows);
        assert_eq!(config.ui.theme, ThemeVariant::HighContrast);
        assert_eq!(config.completion.endpoint, "http://localhost:8080/v1/completions");
        assert_eq!(config.completion.model, "local-instruct");
        assert_eq!(config.completion.max_tokens, 128);
        assert_eq!(config.completion.timeout_secs, 5);
        assert_eq!(config.form.tone, Tone::Friendly);
        assert_eq!(config.form.temperature, Temperature::Creative);
    }

    #[test]
    fn test_form_tone_uses_display_label() {
        let toml = r#"
            [form]
            tone = "Direct and witty"
        "#;
        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.form.tone, Tone::DirectAndWitty);

        let text = config.to_toml().unwrap();
        assert!(text.contains("tone = \"Direct and witty\""), "{}", text);
    }

    #[test]
    fn test_empty_config_uses_defaults() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.ui.keybinding_mode, KeybindingMode::Vim);
        assert_eq!(config.completion.model, "gpt-3.5-turbo-instruct");
        assert_eq!(config.completion.max_tokens, 400);
        assert_eq!(config.completion.endpoint, DEFAULT_ENDPOINT);
        assert_eq!(config.form.tone, Tone::Professional);
        assert_eq!(config.form.temperature, Temperature::Deterministic);
    }

    #[test]
    fn test_partial_section_fills_remaining_fields() {
        let toml = r#"
            [completion]
            model = "other-model"
        "#;
        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.completion.model, "other-model");
        assert_eq!(config.completion.max_tokens, DEFAULT_MAX_TOKENS);
        assert_eq!(config.completion.timeout_secs, DEFAULT_TIMEOUT_SECS);
    }

    #[test]
    fn test_load_missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load_from(&dir.path().join("config.toml")).unwrap();
        assert_eq!(config.completion.model, DEFAULT_MODEL);
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[ui]\nkeybinding_mode = \"arrows\"").unwrap();

        let config = Config::load_from(file.path()).unwrap();
        assert_eq!(config.ui.keybinding_mode, KeybindingMode::Arrows);
    }

    #[test]
    fn test_invalid_file_reports_path() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[ui\nbroken").unwrap();

        let err = Config::load_from(file.path()).unwrap_err();
        assert!(format!("{}", err).contains("Failed to parse config file"));
    }

    #[test]
    fn test_round_trip_through_toml() {
        let config = Config::default();
        let text = config.to_toml().unwrap();
        assert!(text.contains("gpt-3.5-turbo-instruct"));
        let parsed: Config = toml::from_str(&text).unwrap();
        assert_eq!(parsed.completion.max_tokens, config.completion.max_tokens);
    }
}
