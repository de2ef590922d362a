//! Supported tabular formats and format resolution.
//!
//! A [`DataFormat`] is either given explicitly by the caller or inferred from
//! the file extension. Both routes are case-insensitive. When an explicit
//! format disagrees with the extension the resolution still succeeds and a
//! [`FormatMismatch`] is returned alongside the format.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use std::str::FromStr;

use crate::error::{LoaderError, LoaderResult};

/// Tabular file formats the loader can decode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DataFormat {
    Csv,
    Json,
    Parquet,
}

impl DataFormat {
    pub const ALL: [DataFormat; 3] = [DataFormat::Csv, DataFormat::Json, DataFormat::Parquet];

    pub fn as_str(&self) -> &'static str {
        match self {
            DataFormat::Csv => "csv",
            DataFormat::Json => "json",
            DataFormat::Parquet => "parquet",
        }
    }

    /// Infer the format from a path's extension.
    pub fn from_path(path: &Path) -> LoaderResult<Self> {
        match file_extension(path) {
            Some(ext) => ext.parse(),
            None => Err(LoaderError::UnsupportedFormat(String::new())),
        }
    }
}

impl fmt::Display for DataFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DataFormat {
    type Err = LoaderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.to_lowercase();
        match name.as_str() {
            "csv" => Ok(DataFormat::Csv),
            "json" => Ok(DataFormat::Json),
            "parquet" => Ok(DataFormat::Parquet),
            _ => Err(LoaderError::UnsupportedFormat(name)),
        }
    }
}

/// An explicit format that does not match the file's extension.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormatMismatch {
    pub declared: DataFormat,
    pub extension: String,
}

impl fmt::Display for FormatMismatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "declared format '{}' does not match file extension '{}'",
            self.declared, self.extension
        )
    }
}

/// Lower-cased extension without the leading dot.
pub fn file_extension(path: &Path) -> Option<String> {
    path.extension()
        .and_then(|ext| ext.to_str())
        .filter(|ext| !ext.is_empty())
        .map(|ext| ext.to_lowercase())
}

/// Resolve the format for `path`, preferring `explicit` when given.
pub fn resolve_format(
    path: &Path,
    explicit: Option<&str>,
) -> LoaderResult<(DataFormat, Option<FormatMismatch>)> {
    let extension = file_extension(path);

    let format = match explicit {
        Some(name) => name.parse::<DataFormat>()?,
        None => return Ok((DataFormat::from_path(path)?, None)),
    };

    let mismatch = extension
        .filter(|ext| ext != format.as_str())
        .map(|extension| FormatMismatch {
            declared: format,
            extension,
        });

    Ok((format, mismatch))
}
