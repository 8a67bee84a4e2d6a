use crate::constants::CORS_ALLOWED_ORIGINS_KEY;
use crate::origin_list::OriginList;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Markers of template values that must be replaced before deploying.
const PLACEHOLDER_MARKERS: [&str; 5] = [
    "REPLACE_WITH",
    "PLACEHOLDER",
    "CHANGE-ME",
    "CHANGE_ME",
    "YOUR-",
];

/// Typed CORS configuration, read once at startup.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CorsConfig {
    /// Raw comma-separated allow-list; empty disables CORS.
    pub allowed_origins: String,
}

#[derive(Debug, Default, Deserialize)]
struct ConfigFile {
    #[serde(default)]
    chatbox: ChatboxSection,
}

#[derive(Debug, Default, Deserialize)]
struct ChatboxSection {
    #[serde(default)]
    cors_allowed_origins: String,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("configuration file {path} could not be read")]
    Unavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("configuration is not valid TOML")]
    Parse(#[from] toml::de::Error),
    #[error("{key} contains placeholder value {value:?}; set actual origins before deploying")]
    Placeholder { key: &'static str, value: String },
}

impl CorsConfig {
    pub fn new<S: Into<String>>(allowed_origins: S) -> Self {
        Self {
            allowed_origins: allowed_origins.into(),
        }
    }

    /// Parses the `[chatbox]` table of a TOML document and validates it.
    /// A missing table or key means CORS is disabled.
    pub fn from_toml_str(raw: &str) -> Result<Self, ConfigError> {
        let file: ConfigFile = toml::from_str(raw)?;
        let config = Self::new(file.chatbox.cors_allowed_origins);
        config.validate()?;
        Ok(config)
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path).map_err(|source| ConfigError::Unavailable {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::debug!(path = %path.display(), "loaded CORS configuration");
        Self::from_toml_str(&raw)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if contains_placeholder(&self.allowed_origins) {
            return Err(ConfigError::Placeholder {
                key: CORS_ALLOWED_ORIGINS_KEY,
                value: self.allowed_origins.clone(),
            });
        }
        Ok(())
    }

    pub fn origin_list(&self) -> OriginList {
        OriginList::parse(&self.allowed_origins)
    }
}

fn contains_placeholder(value: &str) -> bool {
    let upper = value.to_ascii_uppercase();
    PLACEHOLDER_MARKERS
        .iter()
        .any(|marker| upper.contains(marker))
}

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;
