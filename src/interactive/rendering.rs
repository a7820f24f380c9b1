//! TUI rendering with ratatui
//!
//! Grid editor, constraint preview, and result panels.

use super::app::{App, MessageStyle};
use crate::core::{Cell, Color as CellColor, Constraints, ROW_WIDTH, extract_guesses};
use crate::output::formatters::{best_score, score_bar, solutions_heading};
use crate::session::ResultMode;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Position, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, Paragraph, Wrap},
};

/// Width of the row-number column in the grid panel
const LABEL_WIDTH: u16 = 4;
/// Width of one rendered cell
const CELL_WIDTH: u16 = 3;
/// Horizontal distance between cell starts
const CELL_STEP: u16 = CELL_WIDTH + 1;

const SPINNER: [&str; 4] = ["⠋", "⠙", "⠹", "⠸"];

struct Areas {
    header: Rect,
    grid: Rect,
    constraints: Rect,
    solutions: Rect,
    suggestions: Rect,
    messages: Rect,
    status: Rect,
}

fn areas(frame: Rect) -> Areas {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Main content
            Constraint::Length(3), // Status bar
        ])
        .split(frame);

    let main = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
        .split(chunks[1]);

    let left = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(5), Constraint::Length(7)])
        .split(main[0]);

    let right = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(35),
            Constraint::Percentage(40),
            Constraint::Percentage(25),
        ])
        .split(main[1]);

    Areas {
        header: chunks[0],
        grid: left[0],
        constraints: left[1],
        solutions: right[0],
        suggestions: right[1],
        messages: right[2],
        status: chunks[2],
    }
}

/// Area of the grid panel within a frame
#[must_use]
pub fn grid_area(frame: Rect) -> Rect {
    areas(frame).grid
}

/// Visible slice of the grid inside its bordered panel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridView {
    inner: Rect,
    /// First visible row
    offset: usize,
    rows: usize,
}

impl GridView {
    /// Scrolls so the cursor row is always visible
    #[must_use]
    pub fn new(panel: Rect, rows: usize, cursor_row: usize) -> Self {
        let inner = Rect {
            x: panel.x.saturating_add(1),
            y: panel.y.saturating_add(1),
            width: panel.width.saturating_sub(2),
            height: panel.height.saturating_sub(2),
        };
        let visible = usize::from(inner.height).max(1);
        let offset = (cursor_row + 1).saturating_sub(visible);
        Self {
            inner,
            offset,
            rows,
        }
    }

    /// Grid row indices drawn in this view
    #[must_use]
    pub fn visible_rows(&self) -> std::ops::Range<usize> {
        let end = (self.offset + usize::from(self.inner.height)).min(self.rows);
        self.offset..end.max(self.offset)
    }

    /// The (row, column) drawn at a screen position, if any
    #[must_use]
    pub fn cell_at(&self, x: u16, y: u16) -> Option<(usize, usize)> {
        if !self.inner.contains(Position { x, y }) {
            return None;
        }

        let row = self.offset + usize::from(y - self.inner.y);
        let rel = (x - self.inner.x).checked_sub(LABEL_WIDTH)?;
        let col = usize::from(rel / CELL_STEP);

        (row < self.rows && col < ROW_WIDTH && rel % CELL_STEP < CELL_WIDTH).then_some((row, col))
    }
}

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let areas = areas(f.area());

    render_header(f, areas.header);
    render_grid(f, app, areas.grid);
    render_constraints(f, app, areas.constraints);
    render_solutions(f, app, areas.solutions);
    render_suggestions(f, app, areas.suggestions);
    render_messages(f, app, areas.messages);
    render_status(f, app, areas.status);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("🟩 WORDLE HELPER - Record your guesses 🟨")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

fn cell_style(cell: &Cell, selected: bool) -> Style {
    let style = match cell.color {
        CellColor::Blank => Style::default().fg(Color::White),
        CellColor::Gray => Style::default().fg(Color::White).bg(Color::DarkGray),
        CellColor::Yellow => Style::default()
            .fg(Color::Black)
            .bg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
        CellColor::Green => Style::default()
            .fg(Color::Black)
            .bg(Color::Green)
            .add_modifier(Modifier::BOLD),
    };
    if selected {
        style.add_modifier(Modifier::REVERSED | Modifier::UNDERLINED)
    } else {
        style
    }
}

fn render_grid(f: &mut Frame, app: &App, area: Rect) {
    let grid = &app.session.grid;
    let view = GridView::new(area, grid.len(), app.cursor.row);

    let lines: Vec<Line> = view
        .visible_rows()
        .map(|r| {
            let row = &grid.rows()[r];
            let mut spans = vec![Span::styled(
                format!("{:>3} ", r + 1),
                Style::default().fg(Color::DarkGray),
            )];
            for (c, cell) in row.cells().iter().enumerate() {
                let letter = cell.letter.map_or('·', |l| l.to_ascii_uppercase());
                let selected = app.cursor.row == r && app.cursor.col == c;
                spans.push(Span::styled(format!(" {letter} "), cell_style(cell, selected)));
                spans.push(Span::raw(" "));
            }
            Line::from(spans)
        })
        .collect();

    let title = format!(" Guesses ({} rows) ", grid.len());
    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(paragraph, area);
}

fn render_constraints(f: &mut Frame, app: &App, area: Rect) {
    let constraints = Constraints::from_grid(&app.session.grid);
    let guesses = extract_guesses(&app.session.grid);

    let join = |items: &[String]| {
        if items.is_empty() {
            "-".to_string()
        } else {
            items.join(" ")
        }
    };

    let content = vec![
        Line::from(vec![
            Span::raw("Green:   "),
            Span::styled(join(&constraints.green), Style::default().fg(Color::Green)),
        ]),
        Line::from(vec![
            Span::raw("Yellow:  "),
            Span::styled(join(&constraints.yellow), Style::default().fg(Color::Yellow)),
        ]),
        Line::from(vec![
            Span::raw("Gray:    "),
            Span::styled(
                join(&constraints.gray_strings()),
                Style::default().fg(Color::DarkGray),
            ),
        ]),
        Line::from(vec![
            Span::raw("Guesses: "),
            Span::raw(join(&guesses).to_uppercase()),
        ]),
    ];

    let paragraph = Paragraph::new(content)
        .block(
            Block::default()
                .title(" Constraints ")
                .borders(Borders::ALL),
        )
        .wrap(Wrap { trim: false });
    f.render_widget(paragraph, area);
}

fn render_solutions(f: &mut Frame, app: &App, area: Rect) {
    let results = &app.session.results;

    let content: Vec<Line> = if app.is_loading() {
        vec![Line::from(format!(
            "{} Solving...",
            SPINNER[app.tick % SPINNER.len()]
        ))]
    } else if let Some(error) = &results.error {
        vec![Line::from(Span::styled(
            format!("⚠ {error}"),
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ))]
    } else if !results.has_response {
        vec![Line::from(
            "No solutions yet. Enter your clues above to get started!",
        )]
    } else if results.is_empty_result() {
        vec![Line::from("No results.")]
    } else if results.solutions.is_empty() {
        let note = match results.mode {
            ResultMode::BestOpening => "Opening words are listed below.",
            ResultMode::NextBestGuess => "No solution list returned; see suggested guesses.",
        };
        vec![Line::from(Span::styled(
            note,
            Style::default().fg(Color::DarkGray),
        ))]
    } else {
        let words: Vec<String> = results.solutions.iter().map(|w| w.to_uppercase()).collect();
        vec![Line::from(words.join("  "))]
    };

    let paragraph = Paragraph::new(content)
        .block(
            Block::default()
                .title(format!(" {} ", solutions_heading(results.count())))
                .borders(Borders::ALL)
                .style(Style::default().fg(Color::Green)),
        )
        .wrap(Wrap { trim: true });
    f.render_widget(paragraph, area);
}

fn render_suggestions(f: &mut Frame, app: &App, area: Rect) {
    let results = &app.session.results;
    let best = best_score(results.suggestions.iter().map(|s| &s.score));

    let items: Vec<ListItem> = results
        .suggestions
        .iter()
        .enumerate()
        .map(|(i, s)| {
            let word_style = if s.is_possible_solution {
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::White)
            };
            ListItem::new(Line::from(vec![
                Span::raw(format!("{:>2}. ", i + 1)),
                Span::styled(format!("{:<5}", s.word.to_uppercase()), word_style),
                Span::styled(
                    format!(" {} ", score_bar(s.score, best, 10)),
                    Style::default().fg(Color::Cyan),
                ),
                Span::raw(format!(
                    "{:.2} (info {:.2}, strat {:.2})",
                    s.score, s.information_gain, s.strategic_score
                )),
                Span::styled(
                    if s.is_possible_solution { " ✓" } else { "" },
                    Style::default().fg(Color::Green),
                ),
            ]))
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .title(format!(" {} ", results.mode.title()))
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(list, area);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .take(10)
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(20),
            Constraint::Percentage(15),
            Constraint::Percentage(65),
        ])
        .split(area);

    let mode_text = if app.is_loading() {
        "Solving...".to_string()
    } else {
        format!("Mode: {}", app.session.results.mode.title())
    };
    let mode = Paragraph::new(mode_text).alignment(Alignment::Center);
    f.render_widget(mode, chunks[0]);

    let cell_text = format!("Cell {},{}", app.cursor.row + 1, app.cursor.col + 1);
    let cell = Paragraph::new(cell_text).alignment(Alignment::Center);
    f.render_widget(cell, chunks[1]);

    let help = Paragraph::new(
        "Space/Tab: Color | Enter: Solve | ^O: Openers | +/-: Row | ^Z: Undo | ^R: Reset | Esc: Quit",
    )
    .alignment(Alignment::Center)
    .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[2]);
}
