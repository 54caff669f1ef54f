//! Fixed column schema for the measurement table.
//!
//! The column set and order are part of the file format: the backing CSV
//! and the export buffer both carry exactly these nine columns.

/// Number of numeric measurement fields.
pub const FIELD_COUNT: usize = 8;

/// Header name of the date column.
pub const DATE_COLUMN: &str = "Date";

/// All column headers, in file order: the date plus the eight fields.
pub const COLUMNS: [&str; FIELD_COUNT + 1] = [
    DATE_COLUMN,
    "KoperTrekolieFat",
    "KoperGloeierFat",
    "KoperTrekoliePh",
    "KoperGloeierPh",
    "AluminumTrekolieFat",
    "AluminumGloeierFat",
    "AluminumTrekoliePh",
    "AluminumGloeierPh",
];

/// One measurement field (column) of the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    KoperTrekolieFat,
    KoperGloeierFat,
    KoperTrekoliePh,
    KoperGloeierPh,
    AluminumTrekolieFat,
    AluminumGloeierFat,
    AluminumTrekoliePh,
    AluminumGloeierPh,
}

impl Field {
    /// All fields in declared (file and chart) order.
    pub const ALL: [Field; FIELD_COUNT] = [
        Field::KoperTrekolieFat,
        Field::KoperGloeierFat,
        Field::KoperTrekoliePh,
        Field::KoperGloeierPh,
        Field::AluminumTrekolieFat,
        Field::AluminumGloeierFat,
        Field::AluminumTrekoliePh,
        Field::AluminumGloeierPh,
    ];

    /// Column header name.
    #[must_use]
    pub fn name(self) -> &'static str {
        COLUMNS[self.index() + 1]
    }

    /// Position among the numeric fields (0-based, file order).
    #[must_use]
    pub fn index(self) -> usize {
        match self {
            Field::KoperTrekolieFat => 0,
            Field::KoperGloeierFat => 1,
            Field::KoperTrekoliePh => 2,
            Field::KoperGloeierPh => 3,
            Field::AluminumTrekolieFat => 4,
            Field::AluminumGloeierFat => 5,
            Field::AluminumTrekoliePh => 6,
            Field::AluminumGloeierPh => 7,
        }
    }

    /// Metal group the field belongs to, for form layout.
    #[must_use]
    pub fn group(self) -> &'static str {
        match self {
            Field::KoperTrekolieFat
            | Field::KoperGloeierFat
            | Field::KoperTrekoliePh
            | Field::KoperGloeierPh => "Koper",
            _ => "Aluminum",
        }
    }

    /// Short human label for input controls.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Field::KoperTrekolieFat => "Trekolie Fat CU %",
            Field::KoperGloeierFat => "Gloeier Fat CU %",
            Field::KoperTrekoliePh => "Trekolie pH",
            Field::KoperGloeierPh => "Gloeier pH",
            Field::AluminumTrekolieFat => "Trekolie Fat AL %",
            Field::AluminumGloeierFat => "Gloeier Fat AL %",
            Field::AluminumTrekoliePh => "Trekolie pH",
            Field::AluminumGloeierPh => "Gloeier pH",
        }
    }
}
