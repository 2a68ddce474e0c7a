//! Client configuration
//!
//! Loaded in order of precedence:
//! 1. Environment variables (highest priority)
//! 2. Config file (~/.config/shakesearch/config.toml)
//! 3. Built-in defaults (lowest priority)

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Backend started without `PORT` listens on 3001
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:3001";

/// Where the context viewer takes the term it highlights from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HighlightSource {
    /// The query whose results produced the clicked card
    #[default]
    Submitted,
    /// Whatever the search field holds when the context arrives
    Live,
}

impl std::str::FromStr for HighlightSource {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "submitted" => Ok(HighlightSource::Submitted),
            "live" => Ok(HighlightSource::Live),
            _ => Err(ConfigError::InvalidValue {
                key: "highlight_term",
                value: s.to_string(),
            }),
        }
    }
}

/// Effective configuration
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Config {
    /// Search backend root, without trailing slash
    pub base_url: String,

    /// Percent-encode `q` values; `false` sends them as raw literals
    pub encode_query: bool,

    pub highlight_term: HighlightSource,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            encode_query: true,
            highlight_term: HighlightSource::default(),
        }
    }
}

/// Config file contents, every key optional
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    pub base_url: Option<String>,
    pub encode_query: Option<bool>,
    pub highlight_term: Option<HighlightSource>,
}

impl Config {
    /// ~/.config/shakesearch/config.toml
    pub fn config_path() -> Option<PathBuf> {
        dirs::home_dir().map(|p| p.join(".config").join("shakesearch").join("config.toml"))
    }

    /// Load file config if it exists. A missing file is not an error.
    fn load_file_config() -> Result<FileConfig, ConfigError> {
        let Some(path) = Self::config_path() else {
            return Ok(FileConfig::default());
        };

        match std::fs::read_to_string(&path) {
            Ok(contents) => {
                toml::from_str(&contents).map_err(|source| ConfigError::Parse { path, source })
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(FileConfig::default()),
            Err(source) => Err(ConfigError::Read { path, source }),
        }
    }

    /// Load configuration: env vars -> file -> defaults
    pub fn load() -> Result<Self, ConfigError> {
        let file = Self::load_file_config()?;
        Self::resolve(file, |key| std::env::var(key).ok())
    }

    /// Merge file values and environment lookups over the defaults
    pub fn resolve(
        file: FileConfig,
        env: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let base_url = env("SHAKESEARCH_URL")
            .or(file.base_url)
            .unwrap_or(defaults.base_url)
            .trim_end_matches('/')
            .to_string();

        if base_url.is_empty() {
            return Err(ConfigError::InvalidValue {
                key: "base_url",
                value: base_url,
            });
        }

        let encode_query = match env("SHAKESEARCH_ENCODE_QUERY") {
            Some(v) => parse_bool("encode_query", &v)?,
            None => file.encode_query.unwrap_or(defaults.encode_query),
        };

        let highlight_term = match env("SHAKESEARCH_HIGHLIGHT") {
            Some(v) => v.parse()?,
            None => file.highlight_term.unwrap_or(defaults.highlight_term),
        };

        Ok(Self {
            base_url,
            encode_query,
            highlight_term,
        })
    }

    /// Render as TOML, in the shape the config file accepts
    pub fn to_toml(&self) -> String {
        toml::to_string_pretty(self).unwrap_or_default()
    }
}

fn parse_bool(key: &'static str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::InvalidValue {
            key,
            value: value.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn no_env(_: &str) -> Option<String> {
        None
    }

    #[test]
    fn test_defaults() {
        let config = Config::resolve(FileConfig::default(), no_env).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.base_url, "http://127.0.0.1:3001");
        assert!(config.encode_query);
        assert_eq!(config.highlight_term, HighlightSource::Submitted);
    }

    #[test]
    fn test_file_values() {
        let file: FileConfig = toml::from_str(
            r#"
            base_url = "http://search.local:8080/"
            encode_query = false
            highlight_term = "live"
            "#,
        )
        .unwrap();

        let config = Config::resolve(file, no_env).unwrap();
        assert_eq!(config.base_url, "http://search.local:8080");
        assert!(!config.encode_query);
        assert_eq!(config.highlight_term, HighlightSource::Live);
    }

    #[test]
    fn test_env_overrides_file() {
        let file: FileConfig = toml::from_str(r#"base_url = "http://file:1""#).unwrap();
        let env = |key: &str| match key {
            "SHAKESEARCH_URL" => Some("http://env:2".to_string()),
            "SHAKESEARCH_ENCODE_QUERY" => Some("no".to_string()),
            "SHAKESEARCH_HIGHLIGHT" => Some("LIVE".to_string()),
            _ => None,
        };

        let config = Config::resolve(file, env).unwrap();
        assert_eq!(config.base_url, "http://env:2");
        assert!(!config.encode_query);
        assert_eq!(config.highlight_term, HighlightSource::Live);
    }

    #[test]
    fn test_rejects_bad_values() {
        let env = |key: &str| (key == "SHAKESEARCH_ENCODE_QUERY").then(|| "maybe".to_string());
        assert!(matches!(
            Config::resolve(FileConfig::default(), env),
            Err(ConfigError::InvalidValue { key: "encode_query", .. })
        ));

        assert!(toml::from_str::<FileConfig>("highlight_term = \"sometimes\"").is_err());
        assert!(toml::from_str::<FileConfig>("colour = \"red\"").is_err());
    }

    #[test]
    fn test_to_toml_round_trips_through_file_config() {
        let config = Config {
            base_url: "http://x:9".to_string(),
            encode_query: false,
            highlight_term: HighlightSource::Live,
        };
        let file: FileConfig = toml::from_str(&config.to_toml()).unwrap();
        assert_eq!(Config::resolve(file, no_env).unwrap(), config);
    }
}
