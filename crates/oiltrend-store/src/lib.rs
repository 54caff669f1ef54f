//! # oiltrend-store
//!
//! Durable representation of the measurement table: a CSV backing file
//! that is fully loaded at startup and fully rewritten on every append,
//! plus an in-memory export buffer for downloads.

pub mod csv_file;
pub mod export;

pub use csv_file::CsvStore;
pub use export::{export_csv, EXPORT_FILENAME, EXPORT_MIME};

use thiserror::Error;

/// Store failure modes. A missing backing file is not one of them: load
/// treats it as an empty dataset.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("I/O error on data file: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed data file: {0}")]
    Malformed(#[from] csv::Error),

    #[error("data file columns {found:?} do not match the expected schema {expected:?}")]
    SchemaMismatch {
        expected: Vec<String>,
        found: Vec<String>,
    },

    #[error("could not replace data file: {0}")]
    Replace(#[from] tempfile::PersistError),
}
