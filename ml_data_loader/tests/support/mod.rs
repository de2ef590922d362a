#![allow(dead_code)]

use log::{Level, LevelFilter, Log, Metadata, Record};
use polars::prelude::*;
use std::fs::{self, File};
use std::path::{Path, PathBuf};
use std::sync::{Mutex, Once};

/// `id,value` with rows (1,a), (2,b), (3,c).
pub const CSV_CONTENT: &str = "id,value\n1,a\n2,b\n3,c\n";

pub const JSON_CONTENT: &str =
    r#"[{"id":1,"value":"a"},{"id":2,"value":"b"},{"id":3,"value":"c"}]"#;

pub fn sample_frame() -> DataFrame {
    df!(
        "id" => [1i64, 2, 3],
        "value" => ["a", "b", "c"],
    )
    .expect("sample frame")
}

pub fn write_csv(dir: &Path, name: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, CSV_CONTENT).expect("write csv fixture");
    path
}

pub fn write_json(dir: &Path, name: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, JSON_CONTENT).expect("write json fixture");
    path
}

pub fn write_parquet(dir: &Path, name: &str) -> PathBuf {
    let path = dir.join(name);
    let file = File::create(&path).expect("create parquet fixture");
    let mut df = sample_frame();
    ParquetWriter::new(file)
        .finish(&mut df)
        .expect("write parquet fixture");
    path
}

pub fn column_names(df: &DataFrame) -> Vec<String> {
    df.get_column_names()
        .iter()
        .map(|s| s.to_string())
        .collect()
}

/// Logger that keeps every record so tests can assert on emitted warnings.
struct CaptureLogger {
    records: Mutex<Vec<(Level, String)>>,
}

impl Log for CaptureLogger {
    fn enabled(&self, _metadata: &Metadata) -> bool {
        true
    }

    fn log(&self, record: &Record) {
        if let Ok(mut records) = self.records.lock() {
            records.push((record.level(), record.args().to_string()));
        }
    }

    fn flush(&self) {}
}

static LOGGER: CaptureLogger = CaptureLogger {
    records: Mutex::new(Vec::new()),
};
static INIT: Once = Once::new();

/// Install the capturing logger (once per test binary).
pub fn init_capture_logger() {
    INIT.call_once(|| {
        log::set_logger(&LOGGER).expect("logger already installed");
        log::set_max_level(LevelFilter::Trace);
    });
}

/// Warnings logged so far whose message contains `needle`.
///
/// Tests run in parallel and share the logger, so filter on something unique
/// to the test such as its temp directory.
pub fn warnings_containing(needle: &str) -> Vec<String> {
    LOGGER
        .records
        .lock()
        .expect("logger poisoned")
        .iter()
        .filter(|(level, msg)| *level == Level::Warn && msg.contains(needle))
        .map(|(_, msg)| msg.clone())
        .collect()
}
