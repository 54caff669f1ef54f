//! oiltrend library — application logic for the QC measurement logger.

pub mod app;
pub mod config;
