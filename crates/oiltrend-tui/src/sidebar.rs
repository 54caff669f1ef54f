//! Navigation sidebar with the company banner.

use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use crate::model::View;
use crate::styles::ColorTheme;

const BANNER: [&str; 2] = [" OILTREND", " ========"];

/// Render the sidebar: banner on top, navigation entries below.
pub fn render_sidebar(frame: &mut Frame, area: Rect, view: View, theme: &ColorTheme) {
    let mut lines: Vec<Line> = BANNER
        .iter()
        .map(|l| Line::styled(*l, theme.header_style()))
        .collect();
    lines.push(Line::styled(" oil QC trends", theme.muted_style()));
    lines.push(Line::raw(""));
    lines.push(Line::styled(" Navigation", theme.header_style()));
    lines.push(nav_item("Data Entry", view == View::DataEntry, theme));
    lines.push(nav_item("Visualization", view == View::Visualization, theme));

    let block = Block::default().borders(Borders::RIGHT);
    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn nav_item<'a>(label: &'a str, active: bool, theme: &ColorTheme) -> Line<'a> {
    if active {
        Line::from(vec![
            Span::styled(" > ", theme.focus_style()),
            Span::styled(label, theme.focus_style()),
        ])
    } else {
        Line::from(vec![Span::raw("   "), Span::styled(label, theme.text_style())])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    fn render(view: View) -> String {
        let backend = TestBackend::new(24, 12);
        let mut terminal = Terminal::new(backend).unwrap();
        let theme = ColorTheme::default();
        let buf = terminal
            .draw(|frame| {
                let area = frame.area();
                render_sidebar(frame, area, view, &theme);
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
    fn shows_both_navigation_targets() {
        let content = render(View::DataEntry);
        assert!(content.contains("Data Entry"));
        assert!(content.contains("Visualization"));
    }

    #[test]
    fn marks_the_active_view() {
        let content = render(View::Visualization);
        assert!(content.contains("> Visualization"));
        assert!(!content.contains("> Data Entry"));
    }

    #[test]
    fn small_area_does_not_panic() {
        let backend = TestBackend::new(10, 3);
        let mut terminal = Terminal::new(backend).unwrap();
        let theme = ColorTheme::default();
        terminal
            .draw(|frame| {
                let area = frame.area();
                render_sidebar(frame, area, View::DataEntry, &theme);
            })
            .unwrap();
    }
}
