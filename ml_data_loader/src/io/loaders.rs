use polars::prelude::*;
use std::fs::File;
use std::io::Cursor;
use std::path::{Path, PathBuf};

use crate::config::{DataStage, LoaderConfig};
use crate::error::{LoaderError, LoaderResult};
use crate::format::{resolve_format, DataFormat, FormatMismatch};
use crate::io::remote;
use crate::options::LoadOptions;
use crate::parsing;

/// Format assumed by [`load_data`] when none is given.
pub const DEFAULT_FORMAT: DataFormat = DataFormat::Csv;

/// Load a dataset from `path` as `format` (CSV when `None`).
///
/// Unlike [`DataLoader`], this never looks at the file extension.
#[deprecated(
    since = "0.1.0",
    note = "use `DataLoader`, which infers the format from the file extension"
)]
pub fn load_data(
    path: impl AsRef<Path>,
    format: Option<&str>,
    options: &LoadOptions,
) -> LoaderResult<DataFrame> {
    let path = path.as_ref();
    ensure_exists(path)?;

    let format = match format {
        Some(name) => name.parse::<DataFormat>()?,
        None => DEFAULT_FORMAT,
    };

    read_file(path, format, options)
}

/// Loader for a single file whose format is resolved up front.
///
/// The path is checked and the format resolved in [`DataLoader::new`];
/// [`DataLoader::load`] consumes the loader, so each instance reads at most
/// once.
#[derive(Debug, Clone)]
pub struct DataLoader {
    path: PathBuf,
    format: DataFormat,
    options: LoadOptions,
    mismatch: Option<FormatMismatch>,
}

impl DataLoader {
    /// Validate `path` and resolve its format.
    ///
    /// `format` wins over the extension when given. If the two disagree the
    /// loader is still built and the mismatch is logged and kept in
    /// [`DataLoader::warnings`].
    pub fn new(
        path: impl AsRef<Path>,
        format: Option<&str>,
        options: LoadOptions,
    ) -> LoaderResult<Self> {
        let path = path.as_ref();

        if let Some(uri) = path.to_str() {
            remote::ensure_local(uri)?;
        }
        ensure_exists(path)?;

        let (format, mismatch) = resolve_format(path, format)?;
        log::debug!("Resolved {} as {}", path.display(), format);

        if let Some(mismatch) = &mismatch {
            log::warn!("{}: {}", path.display(), mismatch);
        }

        Ok(Self {
            path: path.to_path_buf(),
            format,
            options,
            mismatch,
        })
    }

    /// Build a loader for `file_name` inside the configured `stage` folder,
    /// using the configured default options.
    pub fn from_config(
        config: &LoaderConfig,
        stage: DataStage,
        file_name: impl AsRef<Path>,
        format: Option<&str>,
    ) -> LoaderResult<Self> {
        Self::new(
            config.path_for(stage, file_name),
            format,
            config.options.clone(),
        )
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn format(&self) -> DataFormat {
        self.format
    }

    pub fn options(&self) -> &LoadOptions {
        &self.options
    }

    /// Non-fatal problems found while resolving the format.
    pub fn warnings(&self) -> &[FormatMismatch] {
        self.mismatch.as_slice()
    }

    /// Decode the file with the resolved format's reader.
    pub fn load(self) -> LoaderResult<DataFrame> {
        read_file(&self.path, self.format, &self.options)
    }

    /// Decode an in-memory buffer.
    pub fn load_from_bytes(
        bytes: impl Into<Vec<u8>>,
        format: &str,
        options: &LoadOptions,
    ) -> LoaderResult<DataFrame> {
        let format = format.parse::<DataFormat>()?;
        let df = parsing::read_table(format, Cursor::new(bytes.into()), options)?;
        Ok(df)
    }

    /// Decode CSV or JSON text.
    pub fn load_from_str(
        text: &str,
        format: &str,
        options: &LoadOptions,
    ) -> LoaderResult<DataFrame> {
        Self::load_from_bytes(text.as_bytes(), format, options)
    }
}

fn ensure_exists(path: &Path) -> LoaderResult<()> {
    if path.is_file() {
        Ok(())
    } else {
        Err(LoaderError::NotFound(path.to_path_buf()))
    }
}

fn read_file(path: &Path, format: DataFormat, options: &LoadOptions) -> LoaderResult<DataFrame> {
    let file = File::open(path).map_err(|source| LoaderError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let df = parsing::read_table(format, file, options)?;
    log::info!(
        "Loaded {} as {}: {} rows x {} columns",
        path.display(),
        format,
        df.height(),
        df.width()
    );

    Ok(df)
}
