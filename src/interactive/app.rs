//! TUI application state and logic

use super::rendering::{self, GridView};
use crate::core::ROW_WIDTH;
use crate::service::{Outcome, Request, ServiceError, SolverService, spawn_request};
use crate::session::Session;
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend, layout::Rect};
use std::io;
use std::sync::{Arc, mpsc};
use std::time::Duration;

/// How long to wait for input before checking on the pending request
const POLL_INTERVAL: Duration = Duration::from_millis(100);

/// Application state
pub struct App {
    pub session: Session,
    pub service: Arc<dyn SolverService>,
    pub cursor: Cursor,
    pub messages: Vec<Message>,
    pub should_quit: bool,
    /// Outcome channel of the outstanding request
    pub pending: Option<mpsc::Receiver<Outcome>>,
    /// Area of the last drawn frame, for mouse hit tests
    pub frame_area: Rect,
    pub tick: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Cursor {
    pub row: usize,
    pub col: usize,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

impl App {
    #[must_use]
    pub fn new(service: Arc<dyn SolverService>) -> Self {
        Self {
            session: Session::new(),
            service,
            cursor: Cursor::default(),
            messages: vec![
                Message {
                    text: "Type your guesses, then Space/Tab or click to color each cell."
                        .to_string(),
                    style: MessageStyle::Info,
                },
                Message {
                    text: "Enter finds solutions; Ctrl-O suggests opening words.".to_string(),
                    style: MessageStyle::Info,
                },
            ],
            should_quit: false,
            pending: None,
            frame_area: Rect::default(),
            tick: 0,
        }
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only last 5 messages
        if self.messages.len() > 5 {
            self.messages.remove(0);
        }
    }

    #[must_use]
    pub const fn is_loading(&self) -> bool {
        self.session.results.in_flight
    }

    fn clamp_cursor(&mut self) {
        self.cursor.row = self.cursor.row.min(self.session.grid.len() - 1);
        self.cursor.col = self.cursor.col.min(ROW_WIDTH - 1);
    }

    pub fn move_cursor(&mut self, d_row: isize, d_col: isize) {
        let max_row = self.session.grid.len() - 1;
        self.cursor.row = self.cursor.row.saturating_add_signed(d_row).min(max_row);
        self.cursor.col = self.cursor.col.saturating_add_signed(d_col).min(ROW_WIDTH - 1);
    }

    /// Type a letter into the cursor cell and advance
    ///
    /// A filled final cell of the last row is kept; the player has to clear
    /// it or add a row first.
    pub fn type_letter(&mut self, c: char) {
        let Cursor { row, col } = self.cursor;
        let last_cell = col + 1 == ROW_WIDTH && row + 1 == self.session.grid.len();
        if last_cell
            && self
                .session
                .grid
                .cell(row, col)
                .is_some_and(|cell| cell.has_letter())
        {
            self.add_message(
                "Row full: press + for a new row or Backspace to change the letter.",
                MessageStyle::Info,
            );
            return;
        }
        self.session.set_letter(row, col, &c.to_string());
        if col + 1 < ROW_WIDTH {
            self.cursor.col += 1;
        } else if row + 1 < self.session.grid.len() {
            self.cursor = Cursor { row: row + 1, col: 0 };
        }
    }

    /// Clear the cursor cell, or step back and clear when it is already empty
    pub fn backspace(&mut self) {
        let Cursor { row, col } = self.cursor;
        let filled = self
            .session
            .grid
            .cell(row, col)
            .is_some_and(|cell| cell.has_letter());

        if !filled {
            if col > 0 {
                self.cursor.col -= 1;
            } else if row > 0 {
                self.cursor = Cursor {
                    row: row - 1,
                    col: ROW_WIDTH - 1,
                };
            }
        }
        let Cursor { row, col } = self.cursor;
        self.session.set_letter(row, col, "");
    }

    pub fn cycle_color(&mut self) {
        let Cursor { row, col } = self.cursor;
        self.session.cycle_color(row, col);
    }

    /// Cycle backwards by going three steps around the four-color cycle
    pub fn cycle_color_back(&mut self) {
        let Cursor { row, col } = self.cursor;
        self.session.edit(|grid| {
            for _ in 0..3 {
                grid.cycle_color(row, col);
            }
        });
    }

    pub fn append_row(&mut self) {
        self.session.append_row();
        self.cursor = Cursor {
            row: self.session.grid.len() - 1,
            col: 0,
        };
        tracing::debug!(rows = self.session.grid.len(), "row appended");
    }

    pub fn remove_last_row(&mut self) {
        if self.session.remove_last_row() {
            self.clamp_cursor();
            tracing::debug!(rows = self.session.grid.len(), "row removed");
        } else {
            self.add_message("The grid always keeps one row.", MessageStyle::Error);
        }
    }

    pub fn undo_last(&mut self) {
        if self.session.undo() {
            self.clamp_cursor();
            self.add_message("Undone!", MessageStyle::Info);
        } else {
            self.add_message("Nothing to undo!", MessageStyle::Error);
        }
    }

    pub fn reset(&mut self) {
        if self.session.reset() {
            self.cursor = Cursor::default();
            self.add_message("Grid cleared. Ctrl-Z brings it back.", MessageStyle::Info);
        }
    }

    /// Ask the service for solutions and next guesses
    pub fn submit_solve(&mut self) {
        match self.session.prepare_solve() {
            Some(request) => self.start(request),
            None => self.add_message("Still solving, please wait.", MessageStyle::Error),
        }
    }

    /// Ask the service for opening words, ignoring the grid
    pub fn request_opening(&mut self) {
        match self.session.prepare_opening() {
            Some(request) => self.start(request),
            None => self.add_message("Still solving, please wait.", MessageStyle::Error),
        }
    }

    fn start(&mut self, request: Request) {
        self.pending = Some(spawn_request(Arc::clone(&self.service), request));
    }

    /// Collect the pending outcome if it has arrived
    pub fn poll_pending(&mut self) {
        let Some(rx) = &self.pending else {
            return;
        };

        match rx.try_recv() {
            Ok(outcome) => {
                self.pending = None;
                self.finish_request(outcome);
            }
            Err(mpsc::TryRecvError::Empty) => {}
            Err(mpsc::TryRecvError::Disconnected) => {
                self.pending = None;
                self.finish_request(Err(ServiceError::transport(io::Error::other(
                    "request worker stopped",
                ))));
            }
        }
    }

    /// Record a finished request and report it
    pub fn finish_request(&mut self, outcome: Outcome) {
        self.session.finish(outcome);

        let results = &self.session.results;
        if let Some(error) = results.error.clone() {
            self.add_message(&error, MessageStyle::Error);
        } else if results.is_empty_result() {
            self.add_message("No results.", MessageStyle::Info);
        } else if results.solutions.is_empty() {
            let count = results.suggestions.len();
            self.add_message(&format!("{count} suggestions"), MessageStyle::Success);
        } else {
            let count = results.count();
            self.add_message(&format!("{count} solutions found"), MessageStyle::Success);
        }
    }

    /// Apply a key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            match key.code {
                KeyCode::Char('c' | 'q') => self.should_quit = true,
                KeyCode::Char('n') => self.append_row(),
                KeyCode::Char('d') => self.remove_last_row(),
                KeyCode::Char('z' | 'u') => self.undo_last(),
                KeyCode::Char('r') => self.reset(),
                KeyCode::Char('o') => self.request_opening(),
                _ => {}
            }
            return;
        }

        match key.code {
            KeyCode::Esc => self.should_quit = true,
            KeyCode::Enter => self.submit_solve(),
            KeyCode::Char(' ') | KeyCode::Tab => self.cycle_color(),
            KeyCode::BackTab => self.cycle_color_back(),
            KeyCode::Char('+') => self.append_row(),
            KeyCode::Char('-') => self.remove_last_row(),
            KeyCode::Char(c) if c.is_ascii_alphabetic() => self.type_letter(c),
            KeyCode::Backspace => self.backspace(),
            KeyCode::Delete => {
                let Cursor { row, col } = self.cursor;
                self.session.set_letter(row, col, "");
            }
            KeyCode::Left => self.move_cursor(0, -1),
            KeyCode::Right => self.move_cursor(0, 1),
            KeyCode::Up => self.move_cursor(-1, 0),
            KeyCode::Down => self.move_cursor(1, 0),
            KeyCode::Home => self.cursor.col = 0,
            KeyCode::End => self.cursor.col = ROW_WIDTH - 1,
            _ => {}
        }
    }

    /// A left click on a cell selects it and cycles its color
    pub fn handle_mouse(&mut self, mouse: MouseEvent) {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return;
        }

        let view = GridView::new(
            rendering::grid_area(self.frame_area),
            self.session.grid.len(),
            self.cursor.row,
        );
        if let Some((row, col)) = view.cell_at(mouse.column, mouse.row) {
            self.cursor = Cursor { row, col };
            self.cycle_color();
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        tracing::error!(error = %err, "TUI stopped");
        eprintln!("Error: {err}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        let frame = terminal.draw(|f| rendering::ui(f, &app))?;
        app.frame_area = frame.area;

        if event::poll(POLL_INTERVAL)? {
            match event::read()? {
                // Only process key press events (fixes Windows double-input bug)
                Event::Key(key) if key.kind == KeyEventKind::Press => app.handle_key(key),
                Event::Mouse(mouse) => app.handle_mouse(mouse),
                _ => {}
            }
        }

        app.poll_pending();
        app.tick = app.tick.wrapping_add(1);

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
