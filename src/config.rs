// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration file support for faqmatch
//!
//! Loads configuration from .faqmatchrc.toml in current directory or ~/.config/faqmatch/config.toml

use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::engine::EngineConfig;

pub const LOCAL_CONFIG_FILE: &str = ".faqmatchrc.toml";
pub const DEFAULT_BIND: &str = "127.0.0.1:3000";

/// Output format for results (mirrored from cli for library use)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ConfigOutputFormat {
    #[default]
    Text,
    Json,
    Json2,
}

/// Configuration loaded from .faqmatchrc.toml or ~/.config/faqmatch/config.toml
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// FAQ corpus file (JSON array of question/answer objects)
    pub faq_path: Option<PathBuf>,
    /// Socket address for `faqmatch serve`
    pub bind: Option<String>,
    /// Maximum related questions attached to an unmatched answer
    pub suggestion_limit: Option<usize>,
    /// Leading questions offered when no question relates to the intent
    pub fallback_suggestions: Option<usize>,
    /// Default output format (text, json or json2)
    pub default_format: Option<String>,
}

impl Config {
    /// Load configuration from files
    ///
    /// Precedence (highest to lowest):
    /// 1. .faqmatchrc.toml in current directory
    /// 2. ~/.config/faqmatch/config.toml
    pub fn load() -> Self {
        if let Some(config) = Self::load_from_path(Path::new(LOCAL_CONFIG_FILE)) {
            return config;
        }

        if let Some(home) = dirs::home_dir() {
            let config_path = home.join(".config").join("faqmatch").join("config.toml");
            if let Some(config) = Self::load_from_path(&config_path) {
                return config;
            }
        }

        Self::default()
    }

    pub fn load_from_path(path: &Path) -> Option<Self> {
        let content = std::fs::read_to_string(path).ok()?;
        match toml::from_str(&content) {
            Ok(config) => Some(config),
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "failed to parse config, using defaults");
                None
            }
        }
    }

    /// Get output format from config, parsing the string to ConfigOutputFormat
    pub fn output_format(&self) -> Option<ConfigOutputFormat> {
        self.default_format.as_ref().and_then(|s| match s.to_lowercase().as_str() {
            "json" => Some(ConfigOutputFormat::Json),
            "json2" => Some(ConfigOutputFormat::Json2),
            "text" => Some(ConfigOutputFormat::Text),
            _ => None,
        })
    }

    /// Merge CLI options with config (CLI wins)
    pub fn merge_faq_path(&self, cli_value: Option<PathBuf>) -> Option<PathBuf> {
        cli_value.or_else(|| self.faq_path.clone())
    }

    pub fn merge_bind(&self, cli_value: Option<String>) -> String {
        cli_value
            .or_else(|| self.bind.clone())
            .unwrap_or_else(|| DEFAULT_BIND.to_string())
    }

    /// Engine settings with config values over the built-in defaults.
    pub fn engine_config(&self) -> EngineConfig {
        let defaults = EngineConfig::default();
        EngineConfig {
            suggestion_limit: self.suggestion_limit.unwrap_or(defaults.suggestion_limit),
            fallback_suggestions: self
                .fallback_suggestions
                .unwrap_or(defaults.fallback_suggestions),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn parses_all_fields() {
        let dir = TempDir::new().expect("tempdir");
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            "faq_path = \"faq.json\"\nbind = \"0.0.0.0:8080\"\nsuggestion_limit = 3\ndefault_format = \"JSON\"\n",
        )
        .expect("write");

        let config = Config::load_from_path(&path).expect("config");
        assert_eq!(config.faq_path, Some(PathBuf::from("faq.json")));
        assert_eq!(config.output_format(), Some(ConfigOutputFormat::Json));
        assert_eq!(config.merge_bind(None), "0.0.0.0:8080");
        let engine = config.engine_config();
        assert_eq!(engine.suggestion_limit, 3);
        assert_eq!(engine.fallback_suggestions, 3);
    }

    #[test]
    fn invalid_toml_is_skipped() {
        let dir = TempDir::new().expect("tempdir");
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "suggestion_limit = [").expect("write");
        assert!(Config::load_from_path(&path).is_none());
    }

    #[test]
    fn cli_values_win() {
        let config = Config {
            faq_path: Some(PathBuf::from("from-config.json")),
            bind: Some("0.0.0.0:1".to_string()),
            ..Config::default()
        };
        assert_eq!(
            config.merge_faq_path(Some(PathBuf::from("cli.json"))),
            Some(PathBuf::from("cli.json"))
        );
        assert_eq!(config.merge_bind(Some("127.0.0.1:9".to_string())), "127.0.0.1:9");
    }

    #[test]
    fn defaults_without_config() {
        let config = Config::default();
        assert_eq!(config.merge_faq_path(None), None);
        assert_eq!(config.merge_bind(None), DEFAULT_BIND);
        assert_eq!(config.engine_config(), EngineConfig::default());
        assert_eq!(config.output_format(), None);
    }
}
