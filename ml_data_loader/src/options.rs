//! Reader options forwarded to the polars decoders.
//!
//! The loader never inspects these; each decoder in [`crate::parsing`] reads
//! its own section plus the common projection and row limit.

use serde::{Deserialize, Serialize};

/// Options for a single load.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoadOptions {
    /// Keep only these columns, in this order.
    pub columns: Option<Vec<String>>,
    /// Read at most this many rows.
    pub n_rows: Option<usize>,
    pub csv: CsvOptions,
    pub json: JsonOptions,
    pub parquet: ParquetOptions,
}

impl LoadOptions {
    pub fn with_columns<I, S>(mut self, columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.columns = Some(columns.into_iter().map(Into::into).collect());
        self
    }

    pub fn with_n_rows(mut self, n_rows: usize) -> Self {
        self.n_rows = Some(n_rows);
        self
    }

    pub fn with_csv(mut self, csv: CsvOptions) -> Self {
        self.csv = csv;
        self
    }

    pub fn with_json(mut self, json: JsonOptions) -> Self {
        self.json = json;
        self
    }

    pub fn with_parquet(mut self, parquet: ParquetOptions) -> Self {
        self.parquet = parquet;
        self
    }
}

/// CSV reader settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CsvOptions {
    pub separator: char,
    pub has_header: bool,
    pub skip_rows: usize,
    pub quote_char: Option<char>,
    /// Rows scanned for type inference. `None` scans the whole file and
    /// `Some(0)` skips inference, reading every column as a string.
    pub infer_schema_length: Option<usize>,
    pub try_parse_dates: bool,
}

impl Default for CsvOptions {
    fn default() -> Self {
        Self {
            separator: ',',
            has_header: true,
            skip_rows: 0,
            quote_char: Some('"'),
            infer_schema_length: Some(100),
            try_parse_dates: false,
        }
    }
}

impl CsvOptions {
    pub fn with_separator(mut self, separator: char) -> Self {
        self.separator = separator;
        self
    }

    pub fn with_has_header(mut self, has_header: bool) -> Self {
        self.has_header = has_header;
        self
    }

    pub fn with_skip_rows(mut self, skip_rows: usize) -> Self {
        self.skip_rows = skip_rows;
        self
    }
}

/// JSON reader settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct JsonOptions {
    /// Newline-delimited records instead of a single array.
    pub lines: bool,
    /// Records scanned for type inference. `None` and `Some(0)` both scan
    /// every record; the JSON reader has no all-string mode.
    pub infer_schema_length: Option<usize>,
}

impl Default for JsonOptions {
    fn default() -> Self {
        Self {
            lines: false,
            infer_schema_length: Some(100),
        }
    }
}

/// Parquet reader settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParquetOptions {
    pub low_memory: bool,
    /// Merge the decoded row groups into a single contiguous chunk.
    pub rechunk: bool,
    /// Let polars decode row groups or columns in parallel.
    pub parallel: bool,
}

impl Default for ParquetOptions {
    fn default() -> Self {
        Self {
            low_memory: false,
            rechunk: false,
            parallel: true,
        }
    }
}
