//! High-level data loading.
//!
//! [`DataLoader`] checks the path, resolves the format once and then decodes
//! the file on [`DataLoader::load`]. [`load_data`] is the older single-call
//! form kept for existing callers. Remote object stores are declared in
//! [`remote`] but not implemented.
//!
//! # Example
//!
//! ```no_run
//! use ml_data_loader::io::DataLoader;
//! use ml_data_loader::options::LoadOptions;
//!
//! let loader = DataLoader::new("data/raw/train.csv", None, LoadOptions::default())
//!     .expect("Failed to resolve dataset");
//! let df = loader.load().expect("Failed to load");
//! println!("Loaded {} rows", df.height());
//! ```

pub mod loaders;
pub mod remote;


#[allow(deprecated)]
pub use loaders::load_data;
pub use loaders::{DataLoader, DEFAULT_FORMAT};
pub use remote::{RemoteScheme, RemoteStorage};
