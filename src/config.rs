use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

pub const DEFAULT_LISTEN_ADDR: &str = "0.0.0.0:4221";
pub const DEFAULT_DIRECTORY: &str = ".";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Read {
        path: String,
        source: std::io::Error,
    },
    #[error("invalid config file {path}: {source}")]
    Parse {
        path: String,
        source: serde_yaml::Error,
    },
}

/// Server settings, fixed for the lifetime of the process.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    pub listen_addr: String,
    /// Root for the `/files/` routes, used verbatim as a path prefix
    pub directory: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            listen_addr: DEFAULT_LISTEN_ADDR.to_string(),
            directory: DEFAULT_DIRECTORY.to_string(),
        }
    }
}

impl Config {
    /// Defaults overridden by the `LISTEN` and `DIRECTORY` environment variables.
    pub fn load() -> Self {
        Self::default().with_env()
    }

    /// Parse a YAML document. Missing keys keep their defaults.
    pub fn from_yaml(yaml: &str) -> Result<Self, serde_yaml::Error> {
        serde_yaml::from_str(yaml)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let display = path.display().to_string();

        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: display.clone(),
            source,
        })?;

        Self::from_yaml(&contents).map_err(|source| ConfigError::Parse {
            path: display,
            source,
        })
    }

    pub fn with_env(mut self) -> Self {
        if let Ok(listen_addr) = std::env::var("LISTEN") {
            self.listen_addr = listen_addr;
        }
        if let Ok(directory) = std::env::var("DIRECTORY") {
            self.directory = directory;
        }
        self
    }
}
