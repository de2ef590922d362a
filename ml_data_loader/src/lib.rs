//! Load tabular datasets (CSV, JSON, Parquet) into polars DataFrames.
//!
//! The format is taken from the caller or inferred from the file extension,
//! and decoding is delegated to the matching polars reader.
//!
//! ```no_run
//! use ml_data_loader::{DataLoader, LoadOptions};
//!
//! let loader = DataLoader::new("data/processed/features.parquet", None, LoadOptions::default())?;
//! for warning in loader.warnings() {
//!     eprintln!("{}", warning);
//! }
//! let df = loader.load()?;
//! println!("{:?}", df.shape());
//! # Ok::<(), ml_data_loader::LoaderError>(())
//! ```

pub mod config;
pub mod error;
pub mod format;
pub mod io;
pub mod options;
pub mod parsing;

pub use config::{DataStage, LoaderConfig};
pub use error::{LoaderError, LoaderResult};
pub use format::{DataFormat, FormatMismatch};
#[allow(deprecated)]
pub use io::load_data;
pub use io::DataLoader;
pub use options::{CsvOptions, JsonOptions, LoadOptions, ParquetOptions};
