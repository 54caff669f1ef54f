//! # oiltrend-tui
//!
//! Interactive TUI for measurement entry and trend charts, using
//! ratatui with Elm architecture.

pub mod charts;
pub mod entry;
pub mod footer;
pub mod form;
pub mod keymap;
pub mod model;
pub mod sidebar;
pub mod styles;

pub use form::{EntryForm, FieldInput};
pub use keymap::{map_key, KeyAction};
pub use model::{App, StatusKind, StatusLine, View};
pub use styles::ColorTheme;
