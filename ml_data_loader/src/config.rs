//! Loader configuration file support.
//!
//! Datasets live under a data root split into the usual pipeline stages:
//! `raw/`, `interim/` and `processed/`. The root and the default reader
//! options come from a TOML file:
//!
//! ```toml
//! [data]
//! root = "data"
//!
//! [options]
//! n_rows = 1000
//!
//! [options.csv]
//! separator = ";"
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use crate::error::{LoaderError, LoaderResult};
use crate::options::LoadOptions;

/// File name searched for by [`LoaderConfig::from_default_location`].
pub const CONFIG_FILE_NAME: &str = "ml_data_loader.toml";

/// Pipeline stage a dataset belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DataStage {
    Raw,
    Interim,
    Processed,
}

impl DataStage {
    pub fn dir_name(&self) -> &'static str {
        match self {
            DataStage::Raw => "raw",
            DataStage::Interim => "interim",
            DataStage::Processed => "processed",
        }
    }
}

impl fmt::Display for DataStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.dir_name())
    }
}

impl FromStr for DataStage {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "raw" => Ok(DataStage::Raw),
            "interim" => Ok(DataStage::Interim),
            "processed" => Ok(DataStage::Processed),
            _ => Err(format!(
                "Unknown data stage: {} (expected raw, interim or processed)",
                s
            )),
        }
    }
}

/// Loader configuration from file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoaderConfig {
    pub data: DataSettings,
    #[serde(default)]
    pub options: LoadOptions,
}

/// Data folder settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataSettings {
    pub root: PathBuf,
}

impl LoaderConfig {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            data: DataSettings { root: root.into() },
            options: LoadOptions::default(),
        }
    }

    /// Load loader configuration from a TOML file.
    ///
    /// A relative `data.root` is kept as written, so it resolves against the
    /// process working directory rather than the config file's directory.
    pub fn from_file<P: AsRef<Path>>(path: P) -> LoaderResult<Self> {
        let content = fs::read_to_string(path.as_ref()).map_err(|e| {
            LoaderError::Configuration(format!(
                "Failed to read config file {}: {}",
                path.as_ref().display(),
                e
            ))
        })?;

        let config = Self::from_toml_str(&content)?;
        log::debug!(
            "Loaded loader config from {} (data root {})",
            path.as_ref().display(),
            config.data.root.display()
        );
        Ok(config)
    }

    pub fn from_toml_str(content: &str) -> LoaderResult<Self> {
        toml::from_str(content).map_err(|e| {
            LoaderError::Configuration(format!("Failed to parse config file: {}", e))
        })
    }

    /// Load loader configuration from the default location.
    ///
    /// Searches for `ml_data_loader.toml` in:
    /// 1. Current directory
    /// 2. `config/` directory
    /// 3. Parent directory
    pub fn from_default_location() -> LoaderResult<Self> {
        Self::search(&[
            PathBuf::from(CONFIG_FILE_NAME),
            Path::new("config").join(CONFIG_FILE_NAME),
            Path::new("..").join(CONFIG_FILE_NAME),
        ])
    }

    fn search(candidates: &[PathBuf]) -> LoaderResult<Self> {
        for path in candidates {
            if path.is_file() {
                return Self::from_file(path);
            }
        }

        Err(LoaderError::Configuration(format!(
            "No {} found in standard locations",
            CONFIG_FILE_NAME
        )))
    }

    pub fn stage_dir(&self, stage: DataStage) -> PathBuf {
        self.data.root.join(stage.dir_name())
    }

    /// `<root>/<stage>/<file_name>`
    pub fn path_for(&self, stage: DataStage, file_name: impl AsRef<Path>) -> PathBuf {
        self.stage_dir(stage).join(file_name)
    }
}
