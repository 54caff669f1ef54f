//! Pure chart math for the trend views.
//!
//! Everything here is geometry over the recent subset: axis bounds,
//! tick selection, and the reference-band raster. Rendering itself
//! lives in the TUI crate.

use crate::constants::TICK_TARGET;
use crate::dataset::Record;
use crate::ranges::{normal_range, NormalRange};
use crate::schema::Field;

/// Y-axis limits for a chart: `0.8 * min(data_min, low)` to
/// `1.2 * max(data_max, high)`, so the band and every data point stay
/// visible with margin.
#[must_use]
pub fn y_limits(values: &[f64], range: NormalRange) -> (f64, f64) {
    let data_min = values.iter().copied().fold(f64::INFINITY, f64::min);
    let data_max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let lower = 0.8 * data_min.min(range.low);
    let upper = 1.2 * data_max.max(range.high);
    (lower, upper)
}

/// Stride between displayed x-axis tick labels for a subset of `len`
/// points: every `max(1, len / 6)`-th date is shown.
#[must_use]
pub fn tick_stride(len: usize) -> usize {
    (len / TICK_TARGET).max(1)
}

/// Indices of the dates that get a tick label.
#[must_use]
pub fn tick_indices(len: usize) -> Vec<usize> {
    (0..len).step_by(tick_stride(len)).collect()
}

/// Dot raster filling the band between `low` and `high` across the full
/// x-range, for shading the normal region on a scatter-capable canvas.
#[must_use]
pub fn band_raster(
    x_max: f64,
    range: NormalRange,
    x_samples: usize,
    y_levels: usize,
) -> Vec<(f64, f64)> {
    if x_samples == 0 || y_levels == 0 || x_max < 0.0 {
        return Vec::new();
    }
    let mut points = Vec::with_capacity(x_samples * y_levels);
    for xi in 0..x_samples {
        #[allow(clippy::cast_precision_loss)]
        let x = if x_samples == 1 {
            0.0
        } else {
            x_max * xi as f64 / (x_samples - 1) as f64
        };
        for yi in 0..y_levels {
            #[allow(clippy::cast_precision_loss)]
            let y = if y_levels == 1 {
                range.low
            } else {
                range.low + (range.high - range.low) * yi as f64 / (y_levels - 1) as f64
            };
            points.push((x, y));
        }
    }
    points
}

/// Everything one chart cell needs, computed from the recent subset.
#[derive(Debug, Clone)]
pub struct FieldChart {
    /// Chart title (the column name).
    pub title: &'static str,
    /// Series points, x = subset index, y = field value.
    pub points: Vec<(f64, f64)>,
    /// Configured normal range for the field.
    pub band: NormalRange,
    /// X-axis bounds.
    pub x_bounds: (f64, f64),
    /// Y-axis bounds from [`y_limits`].
    pub y_bounds: (f64, f64),
    /// Tick labels: the subset dates at stride positions.
    pub x_labels: Vec<String>,
}

impl FieldChart {
    /// Build the chart data for `field` over `subset` (the recent
    /// records, in insertion order).
    #[must_use]
    pub fn build(field: Field, subset: &[Record]) -> Self {
        let values: Vec<f64> = subset.iter().map(|r| r.value(field)).collect();
        #[allow(clippy::cast_precision_loss)]
        let points: Vec<(f64, f64)> = values
            .iter()
            .enumerate()
            .map(|(i, &v)| (i as f64, v))
            .collect();

        let band = normal_range(field);
        let y_bounds = y_limits(&values, band);
        #[allow(clippy::cast_precision_loss)]
        let x_max = subset.len().saturating_sub(1).max(1) as f64;
        let x_labels = tick_indices(subset.len())
            .into_iter()
            .map(|i| subset[i].date.clone())
            .collect();

        Self {
            title: field.name(),
            points,
            band,
            x_bounds: (0.0, x_max),
            y_bounds,
            x_labels,
        }
    }
}
