//! # oiltrend-core
//!
//! Core data model for the oiltrend QC logger: the fixed measurement
//! schema, the ordered dataset with its pure append operation, the
//! configured normal ranges, and the chart math used by the trend views.

pub mod constants;
pub mod dataset;
pub mod plot;
pub mod ranges;
pub mod schema;

// Re-exports
pub use constants::{GRID_COLS, GRID_ROWS, RECENT_WINDOW};
pub use dataset::{Dataset, Record};
pub use plot::{tick_stride, y_limits, FieldChart};
pub use ranges::{normal_range, NormalRange};
pub use schema::{Field, COLUMNS, FIELD_COUNT};
