//! Decoders for the supported tabular formats.
//!
//! Each decoder is a thin adapter over a polars reader: it translates its
//! section of [`LoadOptions`] into reader settings and hands back the
//! resulting [`DataFrame`]. Reader errors are returned unchanged.
//!
//! # Decoders
//!
//! - [`csv_parser`]: delimited text via `CsvReadOptions`
//! - [`json_parser`]: JSON arrays of records or NDJSON via `JsonReader`
//! - [`parquet_parser`]: Parquet via `ParquetReader`
//!
//! # Example
//!
//! ```no_run
//! use ml_data_loader::format::DataFormat;
//! use ml_data_loader::options::LoadOptions;
//! use ml_data_loader::parsing::read_table;
//! use std::fs::File;
//!
//! let file = File::open("data/raw/train.parquet").expect("open");
//! let df = read_table(DataFormat::Parquet, file, &LoadOptions::default())
//!     .expect("decode");
//! println!("{:?}", df.shape());
//! ```

pub mod csv_parser;
pub mod json_parser;
pub mod parquet_parser;

#[cfg(test)]
mod json_parser_tests;

use polars::io::mmap::MmapBytesReader;
use polars::prelude::*;

use crate::format::DataFormat;
use crate::options::LoadOptions;

/// Decode `reader` as `format`, then apply the common projection and row limit.
pub fn read_table<R: MmapBytesReader>(
    format: DataFormat,
    reader: R,
    options: &LoadOptions,
) -> PolarsResult<DataFrame> {
    log::debug!("Decoding {} input", format);

    let df = match format {
        DataFormat::Csv => csv_parser::read_csv(reader, options)?,
        DataFormat::Json => json_parser::read_json(reader, options)?,
        DataFormat::Parquet => parquet_parser::read_parquet(reader, options)?,
    };

    apply_common_options(df, options)
}

/// Select `columns` (in the requested order) and cap the height at `n_rows`.
pub(crate) fn apply_common_options(
    mut df: DataFrame,
    options: &LoadOptions,
) -> PolarsResult<DataFrame> {
    if let Some(columns) = &options.columns {
        df = df.select(columns.iter().map(String::as_str))?;
    }

    if let Some(n_rows) = options.n_rows {
        if df.height() > n_rows {
            df = df.head(Some(n_rows));
        }
    }

    Ok(df)
}
