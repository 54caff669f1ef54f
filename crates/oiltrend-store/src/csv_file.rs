//! CSV backing file: load and full-rewrite persist.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;

use oiltrend_core::schema::COLUMNS;
use oiltrend_core::{Dataset, Record};

use crate::StoreError;

/// Handle on the backing CSV file. Owns only the path; the dataset
/// itself lives with the caller.
#[derive(Debug, Clone)]
pub struct CsvStore {
    path: PathBuf,
}

impl CsvStore {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the backing file into a dataset.
    ///
    /// A missing file yields an empty dataset with the fixed schema.
    /// Any other failure (unreadable file, header mismatch, malformed
    /// row) is an error; masking corruption as "no data" would silently
    /// discard measurements.
    pub fn load(&self) -> Result<Dataset, StoreError> {
        let file = match std::fs::File::open(&self.path) {
            Ok(f) => f,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::debug!(path = %self.path.display(), "no data file yet, starting empty");
                return Ok(Dataset::new());
            }
            Err(e) => return Err(e.into()),
        };

        let mut reader = csv::Reader::from_reader(file);

        let found: Vec<String> = reader.headers()?.iter().map(str::to_owned).collect();
        let expected: Vec<String> = COLUMNS.iter().map(|&c| c.to_owned()).collect();
        if found != expected {
            return Err(StoreError::SchemaMismatch { expected, found });
        }

        let mut records = Vec::new();
        for row in reader.deserialize::<Record>() {
            records.push(row?);
        }

        tracing::debug!(rows = records.len(), "loaded data file");
        Ok(Dataset::from_records(records))
    }

    /// Overwrite the backing file with the full dataset, fixed column
    /// order, no index column.
    ///
    /// Writes to a temp file in the target directory and renames it over
    /// the old file, so a failed write never truncates existing data.
    /// The temp file is removed on any early return.
    pub fn persist(&self, dataset: &Dataset) -> Result<(), StoreError> {
        let dir = self.path.parent().filter(|p| !p.as_os_str().is_empty());
        let tmp = match dir {
            Some(dir) => NamedTempFile::new_in(dir)?,
            None => NamedTempFile::new_in(".")?,
        };

        // Header is written explicitly so an empty dataset still
        // produces a file with the full schema.
        let mut writer = csv::WriterBuilder::new().has_headers(false).from_writer(tmp);
        writer.write_record(COLUMNS)?;
        for record in dataset.records() {
            writer.serialize(record)?;
        }
        let tmp = writer.into_inner().map_err(|e| e.into_error())?;

        tmp.persist(&self.path)?;
        tracing::debug!(rows = dataset.len(), path = %self.path.display(), "persisted data file");
        Ok(())
    }
}
