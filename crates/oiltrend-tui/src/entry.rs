//! Data-entry form panel.
//!
//! Two columns, Koper left and Aluminum right, mirroring the paper QC
//! sheet. The focused input shows its raw edit buffer; the others show
//! their value with two decimals.

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use oiltrend_core::schema::Field;

use crate::form::EntryForm;
use crate::model::{StatusKind, StatusLine};
use crate::styles::ColorTheme;

/// Render the entry form with its status line.
pub fn render_entry(
    frame: &mut Frame,
    area: Rect,
    form: &EntryForm,
    status: Option<&StatusLine>,
    theme: &ColorTheme,
) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(14),   // form columns
            Constraint::Length(3), // status line
        ])
        .split(area);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(rows[0]);

    let (koper, aluminum): (Vec<Field>, Vec<Field>) =
        Field::ALL.into_iter().partition(|f| f.group() == "Koper");
    render_column(frame, columns[0], "Koper", &koper, form, theme);
    render_column(frame, columns[1], "Aluminum", &aluminum, form, theme);

    render_status(frame, rows[1], status, theme);
}

fn render_column(
    frame: &mut Frame,
    area: Rect,
    group: &str,
    fields: &[Field],
    form: &EntryForm,
    theme: &ColorTheme,
) {
    let mut constraints = vec![Constraint::Length(1)];
    constraints.extend(fields.iter().map(|_| Constraint::Length(3)));
    constraints.push(Constraint::Min(0));

    let slots = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(area);

    frame.render_widget(
        Paragraph::new(format!(" {group}")).style(theme.header_style()),
        slots[0],
    );

    for (i, &field) in fields.iter().enumerate() {
        render_input(frame, slots[i + 1], field, form, theme);
    }
}

fn render_input(frame: &mut Frame, area: Rect, field: Field, form: &EntryForm, theme: &ColorTheme) {
    let focused = form.selected() == field.index();
    let input = form.input(field);

    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!(" {} ", field.label()))
        .border_style(if focused {
            theme.focus_style()
        } else {
            theme.muted_style()
        });

    let text = if focused {
        // Raw buffer plus a cursor marker while editing
        format!("{}_", input.text())
    } else {
        input.display()
    };

    let style = if focused {
        theme.focus_style()
    } else {
        theme.text_style()
    };
    frame.render_widget(Paragraph::new(text).style(style).block(block), area);
}

fn render_status(frame: &mut Frame, area: Rect, status: Option<&StatusLine>, theme: &ColorTheme) {
    let block = Block::default().borders(Borders::ALL).title(" Status ");
    let paragraph = match status {
        Some(line) => {
            let style = match line.kind {
                StatusKind::Info => theme.muted_style(),
                StatusKind::Success => theme.success_style(),
                StatusKind::Error => theme.error_style(),
            };
            Paragraph::new(line.text.as_str()).style(style)
        }
        None => Paragraph::new("Enter measurements, then press Enter to save")
            .style(theme.muted_style()),
    };
    frame.render_widget(paragraph.block(block), area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    fn render_to_text(form: &EntryForm, status: Option<&StatusLine>) -> String {
        let backend = TestBackend::new(100, 20);
        let mut terminal = Terminal::new(backend).unwrap();
        let theme = ColorTheme::default();
        let buf = terminal
            .draw(|frame| {
                let area = frame.area();
                render_entry(frame, area, form, status, &theme);
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
    fn shows_both_metal_groups() {
        let content = render_to_text(&EntryForm::new(), None);
        assert!(content.contains("Koper"));
        assert!(content.contains("Aluminum"));
    }

    #[test]
    fn shows_default_values() {
        let content = render_to_text(&EntryForm::new(), None);
        assert!(content.contains("0.00"));
    }

    #[test]
    fn shows_status_text() {
        let status = StatusLine {
            kind: StatusKind::Success,
            text: "Entry saved (3 records total)".to_string(),
        };
        let content = render_to_text(&EntryForm::new(), Some(&status));
        assert!(content.contains("Entry saved"));
    }

    #[test]
    fn shows_error_status() {
        let status = StatusLine {
            kind: StatusKind::Error,
            text: "Save failed: disk full".to_string(),
        };
        let content = render_to_text(&EntryForm::new(), Some(&status));
        assert!(content.contains("Save failed"));
    }

    #[test]
    fn focused_field_shows_cursor() {
        let mut form = EntryForm::new();
        form.input_char('5');
        let content = render_to_text(&form, None);
        assert!(content.contains("0.005_"));
    }

    #[test]
    fn small_area_does_not_panic() {
        let backend = TestBackend::new(30, 6);
        let mut terminal = Terminal::new(backend).unwrap();
        let theme = ColorTheme::default();
        terminal
            .draw(|frame| {
                let area = frame.area();
                render_entry(frame, area, &EntryForm::new(), None, &theme);
            })
            .unwrap();
    }
}
