//! Measurement records and the ordered dataset.

use chrono::Local;
use serde::{Deserialize, Serialize};

use crate::schema::{Field, FIELD_COUNT};

/// One dated measurement snapshot: a calendar date plus the eight
/// numeric readings, serialized under the fixed column headers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    #[serde(rename = "Date")]
    pub date: String,
    #[serde(rename = "KoperTrekolieFat")]
    pub koper_trekolie_fat: f64,
    #[serde(rename = "KoperGloeierFat")]
    pub koper_gloeier_fat: f64,
    #[serde(rename = "KoperTrekoliePh")]
    pub koper_trekolie_ph: f64,
    #[serde(rename = "KoperGloeierPh")]
    pub koper_gloeier_ph: f64,
    #[serde(rename = "AluminumTrekolieFat")]
    pub aluminum_trekolie_fat: f64,
    #[serde(rename = "AluminumGloeierFat")]
    pub aluminum_gloeier_fat: f64,
    #[serde(rename = "AluminumTrekoliePh")]
    pub aluminum_trekolie_ph: f64,
    #[serde(rename = "AluminumGloeierPh")]
    pub aluminum_gloeier_ph: f64,
}

impl Record {
    /// Build a record from a date string and the field values in
    /// declared order.
    #[must_use]
    pub fn new(date: impl Into<String>, values: [f64; FIELD_COUNT]) -> Self {
        Self {
            date: date.into(),
            koper_trekolie_fat: values[0],
            koper_gloeier_fat: values[1],
            koper_trekolie_ph: values[2],
            koper_gloeier_ph: values[3],
            aluminum_trekolie_fat: values[4],
            aluminum_gloeier_fat: values[5],
            aluminum_trekolie_ph: values[6],
            aluminum_gloeier_ph: values[7],
        }
    }

    /// Build a record dated with the local wall-clock date (date only).
    #[must_use]
    pub fn dated_today(values: [f64; FIELD_COUNT]) -> Self {
        let date = Local::now().format("%Y-%m-%d").to_string();
        Self::new(date, values)
    }

    /// Value of a single field.
    #[must_use]
    pub fn value(&self, field: Field) -> f64 {
        match field {
            Field::KoperTrekolieFat => self.koper_trekolie_fat,
            Field::KoperGloeierFat => self.koper_gloeier_fat,
            Field::KoperTrekoliePh => self.koper_trekolie_ph,
            Field::KoperGloeierPh => self.koper_gloeier_ph,
            Field::AluminumTrekolieFat => self.aluminum_trekolie_fat,
            Field::AluminumGloeierFat => self.aluminum_gloeier_fat,
            Field::AluminumTrekoliePh => self.aluminum_trekolie_ph,
            Field::AluminumGloeierPh => self.aluminum_gloeier_ph,
        }
    }

    /// All field values in declared order.
    #[must_use]
    pub fn values(&self) -> [f64; FIELD_COUNT] {
        let mut out = [0.0; FIELD_COUNT];
        for (slot, field) in out.iter_mut().zip(Field::ALL) {
            *slot = self.value(field);
        }
        out
    }
}

/// The full ordered collection of records. Rows are only ever appended;
/// insertion order is chronological by construction.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dataset {
    records: Vec<Record>,
}

impl Dataset {
    /// Empty dataset with the fixed schema.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Dataset from already-ordered records.
    #[must_use]
    pub fn from_records(records: Vec<Record>) -> Self {
        Self { records }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// All records in insertion order.
    #[must_use]
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// New dataset with `record` appended; `self` is untouched, so a
    /// caller can keep its copy if persisting the new one fails.
    #[must_use]
    pub fn append(&self, record: Record) -> Dataset {
        let mut records = self.records.clone();
        records.push(record);
        Self { records }
    }

    /// The most recent `n` records in insertion order (all of them when
    /// the dataset is smaller).
    #[must_use]
    pub fn recent(&self, n: usize) -> &[Record] {
        let start = self.records.len().saturating_sub(n);
        &self.records[start..]
    }
}
