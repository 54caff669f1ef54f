//! Configured normal ranges per field.
//!
//! Advisory only: the ranges drive the shaded reference band in the
//! charts and are never used to validate or reject entries.

use crate::schema::Field;

/// Acceptable `(low, high)` band for one field.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NormalRange {
    pub low: f64,
    pub high: f64,
}

/// The configured normal range for a field. Fixed for the process
/// lifetime.
#[must_use]
pub fn normal_range(field: Field) -> NormalRange {
    let (low, high) = match field {
        Field::KoperTrekolieFat => (14.0, 16.0),
        Field::KoperGloeierFat => (1.0, 1.5),
        Field::AluminumTrekolieFat => (22.0, 24.0),
        Field::AluminumGloeierFat => (3.0, 3.5),
        Field::KoperTrekoliePh
        | Field::KoperGloeierPh
        | Field::AluminumTrekoliePh
        | Field::AluminumGloeierPh => (8.5, 9.0),
    };
    NormalRange { low, high }
}
