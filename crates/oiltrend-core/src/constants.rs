//! Shared constants.

/// How many of the most recent records the trend charts show.
pub const RECENT_WINDOW: usize = 10;

/// Chart grid rows in the visualization view.
pub const GRID_ROWS: usize = 2;

/// Chart grid columns in the visualization view.
pub const GRID_COLS: usize = 4;

/// Target number of x-axis tick labels per chart.
pub const TICK_TARGET: usize = 6;
