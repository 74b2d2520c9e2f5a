use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{ConfigError, Result};

/// Root configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub analyze: AnalyzeConfig,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalyzeConfig {
    /// Paths to skip, added before any given on the command line
    pub ignore: Vec<String>,
    /// Treat the analyzed root as relative to the working directory
    pub local_root: bool,
    /// Match ignore entries against full paths instead of scan-relative ones
    pub absolute_ignore: bool,
    /// Report unreadable directories on stderr
    pub show_errors: bool,
    /// Largest directories first
    pub reverse: bool,
}

impl Config {
    /// Load configuration from `path`, or from the default location when
    /// none is given. A missing default file yields the defaults.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let config = match path {
            Some(path) => Self::from_file(path)?,
            None => match Self::default_path() {
                Some(path) if path.exists() => Self::from_file(&path)?,
                _ => Self::default(),
            },
        };

        config.validate()?;
        Ok(config)
    }

    /// `$XDG_CONFIG_HOME/dirtally/config.toml`
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("dirtally").join("config.toml"))
    }

    fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::ReadError {
            path: path.to_path_buf(),
            source,
        })?;

        let config = toml::from_str(&content).map_err(|source| ConfigError::ParseError {
            path: path.to_path_buf(),
            source,
        })?;

        tracing::debug!(path = %path.display(), "Read configuration file");
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if self.analyze.ignore.iter().any(|p| p.trim().is_empty()) {
            return Err(ConfigError::Invalid("ignore entries must not be empty".into()).into());
        }
        Ok(())
    }
}
