//! Full-dataset export buffer.
//!
//! Independent of the on-disk backing file: the whole dataset is
//! serialized into memory and offered as a named download.

use oiltrend_core::schema::COLUMNS;
use oiltrend_core::Dataset;

use crate::StoreError;

/// Fixed download filename for the export.
pub const EXPORT_FILENAME: &str = "all_data.csv";

/// MIME type identifying the export as a spreadsheet-style table.
pub const EXPORT_MIME: &str = "text/csv";

/// Serialize the entire dataset (not just the recent subset) into a
/// CSV byte buffer with the fixed column order.
pub fn export_csv(dataset: &Dataset) -> Result<Vec<u8>, StoreError> {
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(Vec::new());
    writer.write_record(COLUMNS)?;
    for record in dataset.records() {
        writer.serialize(record)?;
    }
    Ok(writer.into_inner().map_err(|e| e.into_error())?)
}
