//! Trend chart grid.
//!
//! One chart per field in a 2x4 grid over the recent subset. The
//! normal range is drawn as a dot raster between two guide lines, so
//! in-range and out-of-range points are visually distinct without any
//! per-point pass/fail computation.

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::symbols;
use ratatui::widgets::{Axis, Block, Borders, Chart, Dataset as Series, GraphType, Paragraph};
use ratatui::Frame;

use oiltrend_core::plot::band_raster;
use oiltrend_core::schema::Field;
use oiltrend_core::{Dataset, FieldChart, GRID_COLS, GRID_ROWS, RECENT_WINDOW};

use crate::styles::ColorTheme;

/// Dot raster density for the shaded band.
const BAND_X_SAMPLES: usize = 48;
const BAND_Y_LEVELS: usize = 8;

/// Render the visualization view: warning when empty, otherwise the
/// full chart grid over the last [`RECENT_WINDOW`] records.
pub fn render_charts(frame: &mut Frame, area: Rect, dataset: &Dataset, theme: &ColorTheme) {
    if dataset.is_empty() {
        let warning = Paragraph::new("No data available to visualize.")
            .style(theme.warning_style())
            .block(Block::default().borders(Borders::ALL).title(" Visualization "));
        frame.render_widget(warning, area);
        return;
    }

    let subset = dataset.recent(RECENT_WINDOW);
    let cells = grid_rects(area, GRID_ROWS, GRID_COLS);

    // Cells beyond the populated charts stay blank.
    for (field, cell) in Field::ALL.into_iter().zip(cells) {
        let chart = FieldChart::build(field, subset);
        render_field_chart(frame, cell, &chart, theme);
    }
}

/// Split `area` into `rows` x `cols` equal cells, row-major.
#[must_use]
pub fn grid_rects(area: Rect, rows: usize, cols: usize) -> Vec<Rect> {
    #[allow(clippy::cast_possible_truncation)]
    let row_pct = (100 / rows.max(1)) as u16;
    #[allow(clippy::cast_possible_truncation)]
    let col_pct = (100 / cols.max(1)) as u16;

    let row_areas = Layout::default()
        .direction(Direction::Vertical)
        .constraints(vec![Constraint::Percentage(row_pct); rows])
        .split(area);

    let mut cells = Vec::with_capacity(rows * cols);
    for row in row_areas.iter() {
        let cols_areas = Layout::default()
            .direction(Direction::Horizontal)
            .constraints(vec![Constraint::Percentage(col_pct); cols])
            .split(*row);
        cells.extend(cols_areas.iter().copied());
    }
    cells
}

fn render_field_chart(frame: &mut Frame, area: Rect, chart: &FieldChart, theme: &ColorTheme) {
    let band_points = band_raster(chart.x_bounds.1, chart.band, BAND_X_SAMPLES, BAND_Y_LEVELS);
    let low_line = [(0.0, chart.band.low), (chart.x_bounds.1, chart.band.low)];
    let high_line = [(0.0, chart.band.high), (chart.x_bounds.1, chart.band.high)];

    let series = vec![
        Series::default()
            .marker(symbols::Marker::Dot)
            .graph_type(GraphType::Scatter)
            .style(theme.muted_style())
            .data(&band_points),
        Series::default()
            .marker(symbols::Marker::Braille)
            .graph_type(GraphType::Line)
            .style(ratatui::style::Style::default().fg(theme.band))
            .data(&low_line),
        Series::default()
            .marker(symbols::Marker::Braille)
            .graph_type(GraphType::Line)
            .style(ratatui::style::Style::default().fg(theme.band))
            .data(&high_line),
        Series::default()
            .marker(symbols::Marker::Braille)
            .graph_type(GraphType::Line)
            .style(ratatui::style::Style::default().fg(theme.series))
            .data(&chart.points),
        Series::default()
            .marker(symbols::Marker::Dot)
            .graph_type(GraphType::Scatter)
            .style(ratatui::style::Style::default().fg(theme.series))
            .data(&chart.points),
    ];

    let (y_lo, y_hi) = chart.y_bounds;
    let y_labels = vec![
        format!("{y_lo:.1}"),
        format!("{:.1}", (y_lo + y_hi) / 2.0),
        format!("{y_hi:.1}"),
    ];

    let widget = Chart::new(series)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!(" {} ", chart.title)),
        )
        .x_axis(
            Axis::default()
                .title("Date")
                .style(theme.muted_style())
                .bounds([chart.x_bounds.0, chart.x_bounds.1])
                .labels(chart.x_labels.clone()),
        )
        .y_axis(
            Axis::default()
                .title("Value")
                .style(theme.muted_style())
                .bounds([y_lo, y_hi])
                .labels(y_labels),
        );

    frame.render_widget(widget, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use oiltrend_core::Record;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    fn dataset_with(rows: usize) -> Dataset {
        let mut ds = Dataset::new();
        for i in 0..rows {
            #[allow(clippy::cast_precision_loss)]
            let v = 14.0 + i as f64 * 0.1;
            ds = ds.append(Record::new(
                format!("2024-01-{:02}", i % 28 + 1),
                [v; 8],
            ));
        }
        ds
    }

    fn render_to_text(dataset: &Dataset, width: u16, height: u16) -> String {
        let backend = TestBackend::new(width, height);
        let mut terminal = Terminal::new(backend).unwrap();
        let theme = ColorTheme::default();
        let buf = terminal
            .draw(|frame| {
                let area = frame.area();
                render_charts(frame, area, dataset, &theme);
            })
            .unwrap();

        let mut content = String::new();
        for y in 0..buf.area.height {
            for x in 0..buf.area.width {
                content.push_str(buf.buffer[(x, y)].symbol());
            }
            content.push('\n');
        }
        content
    }

    #[test]
    fn empty_dataset_shows_warning_only() {
        let content = render_to_text(&Dataset::new(), 160, 48);
        assert!(content.contains("No data available"));
        assert!(!content.contains("KoperTrekolieFat"));
    }

    #[test]
    fn all_eight_charts_rendered() {
        let content = render_to_text(&dataset_with(12), 200, 60);
        for field in Field::ALL {
            assert!(content.contains(field.name()), "missing {}", field.name());
        }
    }

    #[test]
    fn single_row_dataset_renders() {
        let content = render_to_text(&dataset_with(1), 160, 48);
        assert!(content.contains("KoperTrekolieFat"));
    }

    #[test]
    fn tiny_terminal_does_not_panic() {
        let _ = render_to_text(&dataset_with(5), 40, 10);
    }

    #[test]
    fn grid_rects_counts() {
        let area = Rect::new(0, 0, 200, 60);
        let cells = grid_rects(area, GRID_ROWS, GRID_COLS);
        assert_eq!(cells.len(), GRID_ROWS * GRID_COLS);
        for cell in &cells {
            assert!(cell.width > 0);
            assert!(cell.height > 0);
        }
    }

    #[test]
    fn grid_rects_degenerate() {
        let area = Rect::new(0, 0, 10, 4);
        assert_eq!(grid_rects(area, 1, 1).len(), 1);
    }
}
