use polars::io::mmap::MmapBytesReader;
use polars::prelude::*;
use std::num::NonZeroUsize;

use crate::options::LoadOptions;

/// Parse a JSON array of records (or NDJSON when `json.lines` is set)
pub fn read_json<R: MmapBytesReader>(reader: R, options: &LoadOptions) -> PolarsResult<DataFrame> {
    let json = &options.json;
    let format = if json.lines {
        JsonFormat::JsonLines
    } else {
        JsonFormat::Json
    };

    JsonReader::new(reader)
        .with_json_format(format)
        .infer_schema_len(json.infer_schema_length.and_then(NonZeroUsize::new))
        .finish()
}
