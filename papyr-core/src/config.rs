//! Site configuration loaded from `papyr.yml`.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config {}: {source}", path.display())]
    Yaml {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },
}

/// Site-wide presentation fields
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteConfig {
    #[serde(default = "default_site_title")]
    pub title: String,
    #[serde(default)]
    pub author: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: default_site_title(),
            author: None,
            description: None,
            url: None,
        }
    }
}

/// Filesystem layout, relative paths resolve against the config file
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PathsConfig {
    #[serde(default = "default_content_path")]
    pub content: PathBuf,
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            content: default_content_path(),
        }
    }
}

/// Top-level configuration
///
/// Every field has a default, so a minimal `papyr.yml` only needs the
/// values it wants to override.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub site: SiteConfig,
    #[serde(default)]
    pub paths: PathsConfig,
    #[serde(default = "default_locale")]
    pub default_locale: String,
    #[serde(default = "default_excerpt_length")]
    pub excerpt_length: usize,
    #[serde(default = "default_words_per_minute")]
    pub words_per_minute: u32,
    #[serde(skip)]
    base_dir: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            site: SiteConfig::default(),
            paths: PathsConfig::default(),
            default_locale: default_locale(),
            excerpt_length: default_excerpt_length(),
            words_per_minute: default_words_per_minute(),
            base_dir: PathBuf::new(),
        }
    }
}

impl Config {
    /// Parse a config file, remembering its directory for path resolution
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let raw = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let mut config: Config =
            serde_yaml::from_str(&raw).map_err(|source| ConfigError::Yaml {
                path: path.to_path_buf(),
                source,
            })?;
        config.base_dir = path.parent().map(Path::to_path_buf).unwrap_or_default();
        debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Like [`from_file`](Config::from_file), but a missing file yields
    /// the defaults anchored at the file's directory
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            debug!("No config at {}, using defaults", path.display());
            return Ok(Config {
                base_dir: path.parent().map(Path::to_path_buf).unwrap_or_default(),
                ..Config::default()
            });
        }
        Self::from_file(path)
    }

    /// The content directory, resolved against the config location
    pub fn content_dir(&self) -> PathBuf {
        if self.paths.content.is_absolute() {
            self.paths.content.clone()
        } else {
            self.base_dir.join(&self.paths.content)
        }
    }
}

fn default_site_title() -> String {
    "My Blog".to_string()
}

fn default_content_path() -> PathBuf {
    PathBuf::from("content")
}

fn default_locale() -> String {
    "en".to_string()
}

fn default_excerpt_length() -> usize {
    150
}

fn default_words_per_minute() -> u32 {
    200
}
