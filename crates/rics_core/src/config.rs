//! Catalog configuration.
//!
//! # Responsibility
//! - Locate the five category source documents.
//! - Carry logging settings for process bootstrap.
//!
//! # Invariants
//! - Every field has a default; an empty JSON object is a valid config.
//! - Source file names stay inside the data directory.

use crate::logging::{normalize_level, LoggingConfig};
use crate::model::category::Category;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::{Path, PathBuf};

const DEFAULT_DATA_DIR: &str = "data";

/// Configuration load/validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Config file could not be read.
    Io { path: PathBuf, message: String },
    /// Config text is not a valid config document.
    Parse(String),
    /// Source file name for a category is empty.
    EmptyFileName(Category),
    /// Source file name would leave the data directory.
    UnsafeFileName { category: Category, file_name: String },
    /// Log level is not one of the supported names.
    InvalidLogLevel(String),
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io { path, message } => {
                write!(f, "failed to read config `{}`: {message}", path.display())
            }
            Self::Parse(message) => write!(f, "invalid config: {message}"),
            Self::EmptyFileName(category) => {
                write!(f, "source file name for {category} must not be empty")
            }
            Self::UnsafeFileName {
                category,
                file_name,
            } => write!(
                f,
                "source file name for {category} must be a plain file name, got `{file_name}`"
            ),
            Self::InvalidLogLevel(message) => write!(f, "{message}"),
        }
    }
}

impl Error for ConfigError {}

/// Per-category source file names, relative to the data directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SourceFiles {
    pub items: String,
    pub events: String,
    pub weather: String,
    pub traits: String,
    pub races: String,
}

impl Default for SourceFiles {
    fn default() -> Self {
        Self {
            items: "StoreItems.json".to_string(),
            events: "Incidents.json".to_string(),
            weather: "Weather.json".to_string(),
            traits: "Traits.json".to_string(),
            races: "RaceSettings.json".to_string(),
        }
    }
}

impl SourceFiles {
    pub fn file_name(&self, category: Category) -> &str {
        match category {
            Category::Items => &self.items,
            Category::Events => &self.events,
            Category::Weather => &self.weather,
            Category::Traits => &self.traits,
            Category::Races => &self.races,
        }
    }
}

/// Top-level catalog configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    pub data_dir: PathBuf,
    pub sources: SourceFiles,
    pub logging: LoggingConfig,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from(DEFAULT_DATA_DIR),
            sources: SourceFiles::default(),
            logging: LoggingConfig::default(),
        }
    }
}

impl CatalogConfig {
    /// Default configuration rooted at `data_dir`.
    pub fn with_data_dir(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
            ..Self::default()
        }
    }

    /// Parses and validates a JSON config document.
    pub fn from_json_str(text: &str) -> Result<Self, ConfigError> {
        let config: Self =
            serde_json::from_str(text).map_err(|err| ConfigError::Parse(err.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Reads, parses and validates a JSON config file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|err| ConfigError::Io {
            path: path.to_path_buf(),
            message: err.to_string(),
        })?;
        Self::from_json_str(&text)
    }

    /// Checks source file names and log level.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for category in Category::ALL {
            let file_name = self.sources.file_name(category).trim();
            if file_name.is_empty() {
                return Err(ConfigError::EmptyFileName(category));
            }
            if !is_plain_file_name(file_name) {
                return Err(ConfigError::UnsafeFileName {
                    category,
                    file_name: file_name.to_string(),
                });
            }
        }
        normalize_level(&self.logging.level).map_err(ConfigError::InvalidLogLevel)?;
        Ok(())
    }

    /// Full path of the source document for `category`.
    pub fn source_path(&self, category: Category) -> PathBuf {
        self.data_dir
            .join(self.sources.file_name(category).trim())
    }
}

fn is_plain_file_name(value: &str) -> bool {
    value != "." && value != ".." && !value.contains(['/', '\\'])
}
