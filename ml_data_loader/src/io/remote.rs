//! Remote storage extension point.
//!
//! Object stores are not supported yet. [`RemoteStorage`] describes what a
//! backend would have to provide; [`backend_for`] is where backends get
//! registered and currently knows none, so remote URIs are rejected with
//! [`LoaderError::NotImplemented`] before any filesystem access.

use polars::prelude::DataFrame;
use std::fmt;

use crate::error::{LoaderError, LoaderResult};
use crate::format::DataFormat;
use crate::options::LoadOptions;

/// Object store schemes recognised in load paths.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RemoteScheme {
    S3,
    Gcs,
}

impl RemoteScheme {
    /// Detect a remote URI such as `s3://bucket/key.csv` or `gs://bucket/key.csv`.
    pub fn detect(path: &str) -> Option<Self> {
        let (scheme, _) = path.split_once("://")?;
        match scheme.to_lowercase().as_str() {
            "s3" | "s3a" => Some(RemoteScheme::S3),
            "gs" | "gcs" => Some(RemoteScheme::Gcs),
            _ => None,
        }
    }
}

impl fmt::Display for RemoteScheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RemoteScheme::S3 => f.write_str("s3"),
            RemoteScheme::Gcs => f.write_str("gcs"),
        }
    }
}

/// Loading from object stores. No implementations exist yet.
pub trait RemoteStorage: Send + Sync {
    fn load_from_s3(
        &self,
        uri: &str,
        format: DataFormat,
        options: &LoadOptions,
    ) -> LoaderResult<DataFrame>;

    fn load_from_gcs(
        &self,
        uri: &str,
        format: DataFormat,
        options: &LoadOptions,
    ) -> LoaderResult<DataFrame>;
}

/// The registered backend for `scheme`, if any.
pub fn backend_for(_scheme: RemoteScheme) -> Option<&'static dyn RemoteStorage> {
    None
}

/// Reject `uri` when it names a remote scheme without a registered backend.
pub fn ensure_local(uri: &str) -> LoaderResult<()> {
    match RemoteScheme::detect(uri) {
        Some(scheme) if backend_for(scheme).is_none() => Err(LoaderError::NotImplemented(
            format!("loading from {} remote storage ({})", scheme, uri),
        )),
        _ => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_schemes() {
        assert_eq!(RemoteScheme::detect("s3://bucket/a.csv"), Some(RemoteScheme::S3));
        assert_eq!(RemoteScheme::detect("S3A://bucket/a.csv"), Some(RemoteScheme::S3));
        assert_eq!(RemoteScheme::detect("gs://bucket/a.csv"), Some(RemoteScheme::Gcs));
        assert_eq!(RemoteScheme::detect("gcs://bucket/a.csv"), Some(RemoteScheme::Gcs));
        assert_eq!(RemoteScheme::detect("data/raw/a.csv"), None);
        assert_eq!(RemoteScheme::detect("file:///tmp/a.csv"), None);
    }

    #[test]
    fn test_no_backends_registered() {
        assert!(backend_for(RemoteScheme::S3).is_none());
        assert!(backend_for(RemoteScheme::Gcs).is_none());
    }

    #[test]
    fn test_ensure_local_rejects_remote() {
        let err = ensure_local("s3://bucket/train.parquet").unwrap_err();
        assert!(err.is_not_implemented());
        assert!(err.to_string().contains("s3"));

        let err = ensure_local("gs://bucket/train.parquet").unwrap_err();
        assert!(err.is_not_implemented());
        assert!(err.to_string().contains("gcs"));
    }

    #[test]
    fn test_ensure_local_accepts_paths() {
        assert!(ensure_local("data/raw/train.csv").is_ok());
        assert!(ensure_local("/abs/path/train.csv").is_ok());
    }
}
