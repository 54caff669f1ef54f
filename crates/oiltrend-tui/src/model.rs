//! TUI application model (Elm architecture).

use std::io;
use std::time::Duration;

use crossterm::event::{self, Event};
use crossterm::terminal::{self, EnterAlternateScreen, LeaveAlternateScreen};
use crossterm::{event::DisableMouseCapture, event::EnableMouseCapture, execute};
use ratatui::backend::CrosstermBackend;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::Terminal;

use oiltrend_core::{Dataset, Record};
use oiltrend_store::{export_csv, CsvStore, EXPORT_FILENAME};

use crate::charts::render_charts;
use crate::entry::render_entry;
use crate::footer::render_footer;
use crate::form::EntryForm;
use crate::keymap::{map_key, KeyAction};
use crate::sidebar::render_sidebar;
use crate::styles::ColorTheme;

/// Active view. Data entry is the default on startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    #[default]
    DataEntry,
    Visualization,
}

/// Severity of the status line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    Info,
    Success,
    Error,
}

/// One-line feedback shown under the entry form.
#[derive(Debug, Clone)]
pub struct StatusLine {
    pub kind: StatusKind,
    pub text: String,
}

/// TUI application state (Elm Model).
pub struct App {
    /// Whether the app should quit.
    pub should_quit: bool,
    /// Active view.
    pub view: View,
    /// Entry form state.
    pub form: EntryForm,
    /// Last submission/export outcome.
    pub status: Option<StatusLine>,
    theme: ColorTheme,
    dataset: Dataset,
    store: CsvStore,
}

impl App {
    /// Create the app from the store handle and the dataset it loaded.
    #[must_use]
    pub fn new(store: CsvStore, dataset: Dataset) -> Self {
        Self {
            should_quit: false,
            view: View::default(),
            form: EntryForm::new(),
            status: None,
            theme: ColorTheme::default(),
            dataset,
            store,
        }
    }

    /// The in-memory dataset (always the last successfully persisted
    /// state plus nothing else).
    #[must_use]
    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    /// Handle a keyboard action (Elm Update).
    pub fn handle_key_action(&mut self, action: KeyAction) {
        match action {
            KeyAction::Quit => self.should_quit = true,
            KeyAction::ShowEntry => self.view = View::DataEntry,
            KeyAction::ShowCharts => self.view = View::Visualization,
            KeyAction::NextField => self.form.next_field(),
            KeyAction::PrevField => self.form.prev_field(),
            KeyAction::StepUp => self.form.step_up(),
            KeyAction::StepDown => self.form.step_down(),
            KeyAction::InputChar(c) => self.form.input_char(c),
            KeyAction::Backspace => self.form.backspace(),
            KeyAction::Submit => self.submit(),
            KeyAction::Export => self.export(),
            KeyAction::None => {}
        }
    }

    /// Submit the form: append a dated record and persist the whole
    /// table. The in-memory dataset is only replaced after persist
    /// succeeds, so a failed write never shows unsaved rows. Inputs are
    /// deliberately not cleared.
    fn submit(&mut self) {
        let record = Record::dated_today(self.form.values());
        let candidate = self.dataset.append(record);

        match self.store.persist(&candidate) {
            Ok(()) => {
                self.dataset = candidate;
                tracing::info!(rows = self.dataset.len(), "entry saved");
                self.status = Some(StatusLine {
                    kind: StatusKind::Success,
                    text: format!("Entry saved ({} records total)", self.dataset.len()),
                });
            }
            Err(e) => {
                tracing::error!(error = %e, "persist failed");
                self.status = Some(StatusLine {
                    kind: StatusKind::Error,
                    text: format!("Save failed: {e}"),
                });
            }
        }
    }

    /// Write the full-dataset export next to the working directory.
    fn export(&mut self) {
        if self.dataset.is_empty() {
            self.status = Some(StatusLine {
                kind: StatusKind::Info,
                text: "Nothing to export".to_string(),
            });
            return;
        }

        let outcome = export_csv(&self.dataset)
            .map_err(|e| e.to_string())
            .and_then(|bytes| std::fs::write(EXPORT_FILENAME, bytes).map_err(|e| e.to_string()));

        match outcome {
            Ok(()) => {
                tracing::info!(file = EXPORT_FILENAME, "export written");
                self.status = Some(StatusLine {
                    kind: StatusKind::Success,
                    text: format!("Exported all data to {EXPORT_FILENAME}"),
                });
            }
            Err(e) => {
                tracing::error!(error = %e, "export failed");
                self.status = Some(StatusLine {
                    kind: StatusKind::Error,
                    text: format!("Export failed: {e}"),
                });
            }
        }
    }

    /// Compute the sidebar/content/footer layout.
    #[must_use]
    pub fn compute_layout(area: Rect) -> (Rect, Rect, Rect) {
        let outer = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Length(24), // sidebar
                Constraint::Min(30),    // content
            ])
            .split(area);

        let right = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(5),    // view content
                Constraint::Length(2), // footer
            ])
            .split(outer[1]);

        (outer[0], right[0], right[1])
    }

    /// Render the full TUI view.
    pub fn render(&self, frame: &mut ratatui::Frame) {
        let (sidebar_area, content_area, footer_area) = Self::compute_layout(frame.area());

        render_sidebar(frame, sidebar_area, self.view, &self.theme);

        match self.view {
            View::DataEntry => render_entry(
                frame,
                content_area,
                &self.form,
                self.status.as_ref(),
                &self.theme,
            ),
            View::Visualization => {
                render_charts(frame, content_area, &self.dataset, &self.theme);
            }
        }

        render_footer(frame, footer_area, self.view);
    }

    /// Set up the terminal for TUI mode.
    pub fn setup_terminal() -> io::Result<Terminal<CrosstermBackend<io::Stdout>>> {
        terminal::enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
        let backend = CrosstermBackend::new(stdout);
        Terminal::new(backend)
    }

    /// Tear down the terminal, restoring normal mode.
    pub fn teardown_terminal(
        terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    ) -> io::Result<()> {
        terminal::disable_raw_mode()?;
        execute!(
            terminal.backend_mut(),
            LeaveAlternateScreen,
            DisableMouseCapture
        )?;
        terminal.show_cursor()?;
        Ok(())
    }

    /// Run the TUI event loop: render, poll for key events, update.
    pub fn run(&mut self) -> io::Result<()> {
        let mut terminal = Self::setup_terminal()?;

        let tick_rate = Duration::from_millis(250);

        loop {
            terminal.draw(|frame| {
                self.render(frame);
            })?;

            if self.should_quit {
                break;
            }

            if event::poll(tick_rate)? {
                match event::read()? {
                    Event::Key(key_event) => {
                        let action = map_key(self.view, key_event);
                        self.handle_key_action(action);
                    }
                    Event::Resize(_, _) => {
                        // next draw recomputes the layout
                    }
                    _ => {}
                }
            }
        }

        Self::teardown_terminal(&mut terminal)?;
        Ok(())
    }
}
