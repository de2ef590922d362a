use polars::io::mmap::MmapBytesReader;
use polars::prelude::*;

use crate::options::{CsvOptions, LoadOptions};

/// Parse delimited text into a Polars DataFrame
pub fn read_csv<R: MmapBytesReader>(reader: R, options: &LoadOptions) -> PolarsResult<DataFrame> {
    let csv = &options.csv;

    CsvReadOptions::default()
        .with_has_header(csv.has_header)
        .with_skip_rows(csv.skip_rows)
        .with_n_rows(options.n_rows)
        .with_infer_schema_length(csv.infer_schema_length)
        .with_parse_options(parse_options(csv)?)
        .into_reader_with_file_handle(reader)
        .finish()
}

fn parse_options(csv: &CsvOptions) -> PolarsResult<CsvParseOptions> {
    let quote_char = csv
        .quote_char
        .map(|c| ascii_byte(c, "quote_char"))
        .transpose()?;

    Ok(CsvParseOptions::default()
        .with_separator(ascii_byte(csv.separator, "separator")?)
        .with_quote_char(quote_char)
        .with_try_parse_dates(csv.try_parse_dates))
}

/// The CSV reader works on bytes, so single-character settings must be ASCII.
fn ascii_byte(c: char, setting: &str) -> PolarsResult<u8> {
    if c.is_ascii() {
        Ok(c as u8)
    } else {
        Err(PolarsError::InvalidOperation(
            format!("CSV {} must be an ASCII character, got {:?}", setting, c).into(),
        ))
    }
}
