use std::error::Error;
use std::fmt;
use std::path::{Path, PathBuf};

use serde::Deserialize;

pub const DEFAULT_DB_PATH: &str = ".liftlog/state.sqlite";
pub const DEFAULT_CONFIG_PATH: &str = ".liftlog/config.toml";
pub const DEFAULT_LOG_LEVEL: &str = "warn";
pub const DEFAULT_SUGGESTION_LIMIT: usize = 10;

/// Optional settings read from `config.toml`.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    #[serde(default)]
    pub db_path: Option<String>,
    #[serde(default)]
    pub log_level: Option<String>,
    #[serde(default)]
    pub suggestion_limit: Option<usize>,
}

impl FileConfig {
    pub fn parse(raw: &str, origin: &Path) -> Result<Self, ConfigError> {
        let parsed: FileConfig = toml::from_str(raw).map_err(|source| ConfigError::Parse {
            path: origin.to_path_buf(),
            source,
        })?;
        if parsed.suggestion_limit == Some(0) {
            return Err(ConfigError::Invalid(
                "suggestion_limit must be at least 1".to_string(),
            ));
        }
        Ok(parsed)
    }

    /// Reads `explicit` when given (a missing file is an error), otherwise the
    /// default location if it exists.
    pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        let (path, required) = match explicit {
            Some(path) => (path.to_path_buf(), true),
            None => (PathBuf::from(DEFAULT_CONFIG_PATH), false),
        };
        if !required && !path.exists() {
            return Ok(FileConfig::default());
        }
        let raw = std::fs::read_to_string(&path).map_err(|source| ConfigError::Io {
            path: path.clone(),
            source,
        })?;
        FileConfig::parse(&raw, &path)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub db_path: String,
    pub log_level: String,
    pub suggestion_limit: usize,
}

impl Settings {
    /// Flag/env values win over the file, the file wins over defaults.
    pub fn resolve(file: FileConfig, db_flag: Option<String>, log_flag: Option<String>) -> Self {
        Self {
            db_path: db_flag
                .or(file.db_path)
                .unwrap_or_else(|| DEFAULT_DB_PATH.to_string()),
            log_level: log_flag
                .or(file.log_level)
                .unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string()),
            suggestion_limit: file.suggestion_limit.unwrap_or(DEFAULT_SUGGESTION_LIMIT),
        }
    }
}

#[derive(Debug)]
pub enum ConfigError {
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
    Invalid(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io { path, source } => {
                write!(f, "failed to read config {}: {}", path.display(), source)
            }
            ConfigError::Parse { path, source } => {
                write!(f, "failed to parse config {}: {}", path.display(), source)
            }
            ConfigError::Invalid(message) => write!(f, "invalid config: {}", message),
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            ConfigError::Io { source, .. } => Some(source),
            ConfigError::Parse { source, .. } => Some(source),
            ConfigError::Invalid(_) => None,
        }
    }
}
