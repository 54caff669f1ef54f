//! TUI footer panel with keyboard shortcuts.

use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use crate::model::View;

/// Render the footer with the shortcuts of the active view.
pub fn render_footer(frame: &mut Frame, area: Rect, view: View) {
    let key = |k: &'static str| Span::styled(k, Style::default().fg(Color::Yellow));

    let text = match view {
        View::DataEntry => vec![Line::from(vec![
            key("Tab"),
            Span::raw(": next field | "),
            key("Up/Down"),
            Span::raw(": step 0.1 | "),
            key("Enter"),
            Span::raw(": save | "),
            key("v"),
            Span::raw(": charts | "),
            key("q"),
            Span::raw(": quit"),
        ])],
        View::Visualization => vec![Line::from(vec![
            key("e"),
            Span::raw(": export all data | "),
            key("d"),
            Span::raw(": data entry | "),
            key("q"),
            Span::raw(": quit"),
        ])],
    };

    let block = Block::default().borders(Borders::TOP);
    frame.render_widget(Paragraph::new(text).block(block), area);
}
