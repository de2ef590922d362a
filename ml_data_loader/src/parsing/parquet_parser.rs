use polars::io::mmap::MmapBytesReader;
use polars::prelude::*;

use crate::options::LoadOptions;

/// Read a Parquet file into a Polars DataFrame
///
/// The projection and row limit are pushed into the reader so skipped
/// columns and row groups are never decoded. The caller still reorders the
/// result to the requested column order.
pub fn read_parquet<R: MmapBytesReader>(reader: R, options: &LoadOptions) -> PolarsResult<DataFrame> {
    let parquet = &options.parquet;

    ParquetReader::new(reader)
        .with_columns(projection(options.columns.as_deref()))
        .with_slice(options.n_rows.map(|n| (0, n)))
        .set_low_memory(parquet.low_memory)
        .set_rechunk(parquet.rechunk)
        .read_parallel(parallel_strategy(parquet.parallel))
        .finish()
}

/// Requested columns with repeats removed, first occurrence wins.
fn projection(columns: Option<&[String]>) -> Option<Vec<String>> {
    columns.map(|columns| {
        let mut unique: Vec<String> = Vec::with_capacity(columns.len());
        for name in columns {
            if !unique.contains(name) {
                unique.push(name.clone());
            }
        }
        unique
    })
}

fn parallel_strategy(parallel: bool) -> ParallelStrategy {
    if parallel {
        ParallelStrategy::Auto
    } else {
        ParallelStrategy::None
    }
}
