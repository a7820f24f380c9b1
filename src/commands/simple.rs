//! Simple interactive CLI mode
//!
//! Text-based grid editor without TUI

use crate::core::{Constraints, ROW_WIDTH, Row};
use crate::output::{print_constraints, print_grid, print_results};
use crate::service::{Request, SolverService};
use crate::session::Session;
use anyhow::Result;
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use std::io::{self, BufRead, Write};
use std::time::Duration;

/// A parsed REPL command; row and column numbers are 1-based
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Overwrite row N, or append when N is one past the end
    Row(usize, Row),
    /// Append a row (blank when no notation is given)
    Add(Option<Row>),
    Remove,
    SetLetter(usize, usize, String),
    Cycle(usize, usize),
    Undo,
    Reset,
    Show,
    Solve,
    Opening,
    Help,
    Quit,
}

/// Parse one line of input
///
/// # Errors
///
/// Returns a message describing what was wrong with the line.
pub fn parse_command(line: &str) -> Result<Command, String> {
    let mut parts = line.split_whitespace();
    let Some(head) = parts.next() else {
        return Err("Empty command".to_string());
    };
    let args: Vec<&str> = parts.collect();

    match (head.to_lowercase().as_str(), args.as_slice()) {
        ("row" | "r", [n, notation]) => Ok(Command::Row(
            index(n)?,
            Row::parse(notation).map_err(|e| e.to_string())?,
        )),
        ("add" | "a" | "+", []) => Ok(Command::Add(None)),
        ("add" | "a" | "+", [notation]) => Ok(Command::Add(Some(
            Row::parse(notation).map_err(|e| e.to_string())?,
        ))),
        ("remove" | "rm" | "-", []) => Ok(Command::Remove),
        ("set" | "s", [row, col, letter]) => {
            Ok(Command::SetLetter(index(row)?, index(col)?, (*letter).to_string()))
        }
        ("set" | "s", [row, col]) => Ok(Command::SetLetter(index(row)?, index(col)?, String::new())),
        ("cycle" | "c", [row, col]) => Ok(Command::Cycle(index(row)?, index(col)?)),
        ("undo" | "u", []) => Ok(Command::Undo),
        ("reset" | "new" | "n", []) => Ok(Command::Reset),
        ("show" | "grid", []) => Ok(Command::Show),
        ("solve" | "go", []) => Ok(Command::Solve),
        ("open" | "opening", []) => Ok(Command::Opening),
        ("help" | "h" | "?", []) => Ok(Command::Help),
        ("quit" | "q" | "exit", []) => Ok(Command::Quit),
        // A bare row notation appends it
        (_, []) => Row::parse(head)
            .map(|row| Command::Add(Some(row)))
            .map_err(|_| format!("Unknown command '{head}' (type 'help')")),
        _ => Err(format!("Wrong arguments for '{head}' (type 'help')")),
    }
}

fn index(s: &str) -> Result<usize, String> {
    match s.parse::<usize>() {
        Ok(n) if n > 0 => Ok(n),
        _ => Err(format!("'{s}' is not a row/column number (counting from 1)")),
    }
}

/// Apply a grid-editing command; returns a status line
///
/// Out-of-range cells are reported, never indexed.
fn apply_edit(session: &mut Session, command: Command) -> Result<String, String> {
    let rows = session.grid.len();
    let check = |row: usize, col: usize| -> Result<(usize, usize), String> {
        if row == 0 || col == 0 || row > rows || col > ROW_WIDTH {
            Err(format!(
                "No cell at row {row}, column {col} (grid is {rows}×{ROW_WIDTH})"
            ))
        } else {
            Ok((row - 1, col - 1))
        }
    };

    match command {
        Command::Row(n, row) => {
            if n > rows + 1 {
                return Err(format!("Row {n} does not exist; next new row is {}", rows + 1));
            }
            session.set_row(n - 1, row);
            Ok(format!("Row {n} set"))
        }
        Command::Add(row) => {
            match row {
                Some(row) => session.set_row(rows, row),
                None => session.append_row(),
            };
            Ok(format!("Row {} added", rows + 1))
        }
        Command::Remove => {
            if session.remove_last_row() {
                Ok(format!("Row {rows} removed"))
            } else {
                Err("Can't remove the only row".to_string())
            }
        }
        Command::SetLetter(row, col, letter) => {
            let (r, c) = check(row, col)?;
            session.set_letter(r, c, &letter);
            Ok(format!("Cell {row},{col} set"))
        }
        Command::Cycle(row, col) => {
            let (r, c) = check(row, col)?;
            session.cycle_color(r, c);
            let color = session.grid.cell(r, c).map(|cell| cell.color);
            Ok(format!(
                "Cell {row},{col} is now {}",
                color.map_or("?", |c| c.name())
            ))
        }
        Command::Undo => {
            if session.undo() {
                Ok("Undone!".to_string())
            } else {
                Err("Nothing to undo!".to_string())
            }
        }
        Command::Reset => {
            session.reset();
            Ok("Grid cleared".to_string())
        }
        _ => Ok(String::new()),
    }
}

/// Dispatch a request with a spinner and record the outcome in the session
pub fn run_request(service: &dyn SolverService, session: &mut Session, request: &Request) {
    let spinner = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::with_template("{spinner:.cyan} {msg}") {
        spinner.set_style(style);
    }
    spinner.set_message(match request {
        Request::Solve(_) => "Solving...",
        Request::BestOpening => "Finding best opening words...",
    });
    spinner.enable_steady_tick(Duration::from_millis(100));

    let outcome = service.dispatch(request);

    spinner.finish_and_clear();
    session.finish(outcome);
}

fn request_and_print(service: &dyn SolverService, session: &mut Session, request: Option<Request>) {
    if let Some(request) = request {
        run_request(service, session, &request);
    }
    print_results(&session.results);
    println!();
}

fn print_help() {
    println!("Commands (rows and columns count from 1):");
    println!("  crane:-Y--G        append a row (letters, '.' for empty; colors G/Y/-/.)");
    println!("  row N crane:-Y--G  overwrite row N");
    println!("  add | remove       append a blank row / remove the last row");
    println!("  set R C X          set the letter at row R, column C (omit X to clear)");
    println!("  cycle R C          cycle the color at row R, column C");
    println!("  undo | reset       undo the last edit / start over");
    println!("  show               print the grid and its constraints");
    println!("  solve              ask the solver for solutions and next guesses");
    println!("  open               ask the solver for the best opening words");
    println!("  quit               exit\n");
}

/// Run the simple interactive CLI mode on stdin
///
/// # Errors
///
/// Returns an error if there's an I/O error reading user input.
pub fn run_simple(service: &dyn SolverService) -> Result<()> {
    let stdin = io::stdin();
    run_session(service, &mut Session::new(), stdin.lock())
}

/// Drive a session from any line source
///
/// # Errors
///
/// Returns an error if reading input or flushing stdout fails.
pub fn run_session(
    service: &dyn SolverService,
    session: &mut Session,
    mut input: impl BufRead,
) -> Result<()> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║               Wordle Helper - Interactive Mode               ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");
    print_help();

    loop {
        print!("{} ", ">".bright_cyan().bold());
        io::stdout().flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            println!();
            return Ok(());
        }
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let command = match parse_command(line) {
            Ok(command) => command,
            Err(message) => {
                println!("❌ {message}\n");
                continue;
            }
        };

        match command {
            Command::Quit => {
                println!("\n👋 Good luck!\n");
                return Ok(());
            }
            Command::Help => print_help(),
            Command::Show => {
                print_grid(&session.grid);
                print_constraints(&Constraints::from_grid(&session.grid));
            }
            Command::Solve => {
                let request = session.prepare_solve();
                request_and_print(service, session, request);
            }
            Command::Opening => {
                let request = session.prepare_opening();
                request_and_print(service, session, request);
            }
            edit => match apply_edit(session, edit) {
                Ok(status) => {
                    tracing::debug!(%status, "grid edit");
                    print_grid(&session.grid);
                    println!("✓ {status}\n");
                }
                Err(message) => println!("❌ {message}\n"),
            },
        }
    }
}
