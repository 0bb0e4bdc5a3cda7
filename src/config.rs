//! Runtime configuration: backend deployment, startup city, log file

use std::fs;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::state::DEFAULT_CITY;

/// Production backend deployment
pub const DEFAULT_BASE_URL: &str = "https://havadurumu-production.up.railway.app/api";

#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config file {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse config file {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}

/// Settings read from `config.toml`. Every key is optional.
///
/// ```toml
/// base_url = "http://localhost:3001/api"
/// default_city = "Ankara"
/// log_file = "/tmp/weather-view.log"
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub base_url: String,
    pub default_city: String,
    pub log_file: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            default_city: DEFAULT_CITY.to_string(),
            log_file: None,
        }
    }
}

/// Command-line values that take precedence over the file
#[derive(Clone, Debug, Default)]
pub struct Overrides {
    pub base_url: Option<String>,
    pub city: Option<String>,
    pub log_file: Option<PathBuf>,
}

impl Config {
    /// Load from an explicit path (must exist), else from the platform
    /// config file if there is one, else defaults.
    pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        match explicit {
            Some(path) => Self::from_file(path),
            None => match Self::default_path() {
                Some(path) if path.exists() => Self::from_file(&path),
                _ => Ok(Self::default()),
            },
        }
    }

    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&contents).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn parse(contents: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(contents)
    }

    /// `<platform config dir>/weather-view/config.toml`
    pub fn default_path() -> Option<PathBuf> {
        ProjectDirs::from("dev", "weather-view", "weather-view")
            .map(|dirs| dirs.config_dir().join("config.toml"))
    }

    pub fn apply(mut self, overrides: Overrides) -> Self {
        if let Some(base_url) = overrides.base_url {
            self.base_url = base_url;
        }
        if let Some(city) = overrides.city {
            self.default_city = city;
        }
        if overrides.log_file.is_some() {
            self.log_file = overrides.log_file;
        }
        self.base_url = self.base_url.trim_end_matches('/').to_string();
        self
    }
}
