//! Display functions for grids, constraints, and service results

use super::formatters::{best_score, row_to_emoji, score_bar, solutions_heading};
use crate::core::{Cell, Color as CellColor, Constraints, Grid};
use crate::session::ResultState;
use crate::service::Suggestion;
use colored::{ColoredString, Colorize};

/// Print the grid, one row per line, with row numbers
pub fn print_grid(grid: &Grid) {
    println!("\n{}", "─".repeat(40).cyan());
    for (i, row) in grid.rows().iter().enumerate() {
        let tiles: Vec<String> = row.cells().iter().map(|c| tile(c).to_string()).collect();
        println!(
            "  {} {}   {}",
            format!("{:>2}.", i + 1).bright_black(),
            tiles.join(" "),
            row_to_emoji(row)
        );
    }
    println!("{}", "─".repeat(40).cyan());
}

fn tile(cell: &Cell) -> ColoredString {
    let text = format!(" {} ", cell.letter.map_or('·', |c| c.to_ascii_uppercase()));
    match cell.color {
        CellColor::Blank => text.white(),
        CellColor::Gray => text.white().on_bright_black(),
        CellColor::Yellow => text.black().on_yellow().bold(),
        CellColor::Green => text.black().on_green().bold(),
    }
}

/// Print the derived constraint structure
pub fn print_constraints(constraints: &Constraints) {
    println!("\n📐 {}", "Constraints:".bright_cyan().bold());
    if constraints.is_empty() {
        println!("   (none)");
        return;
    }
    println!("   Green:  {}", list(&constraints.green).green());
    println!("   Yellow: {}", list(&constraints.yellow).yellow());
    println!(
        "   Gray:   {}",
        list(&constraints.gray_strings()).bright_black()
    );
}

fn list(items: &[String]) -> String {
    if items.is_empty() {
        "-".to_string()
    } else {
        items.join(" ")
    }
}

/// Print whatever the last request produced: an error, results, or "no results"
pub fn print_results(results: &ResultState) {
    if let Some(error) = &results.error {
        println!("\n{} {}", "⚠️".red(), error.red().bold());
        return;
    }

    if !results.has_response {
        println!("\nNo solutions yet. Enter your clues to get started!");
        return;
    }

    if results.is_empty_result() {
        println!("\n{}", "No results.".yellow());
        return;
    }

    if !results.solutions.is_empty() {
        print_solutions(&results.solutions, results.count());
    }

    if !results.suggestions.is_empty() {
        print_suggestions(results.mode.title(), &results.suggestions);
    }
}

/// Print solutions in received order, uppercased, several per line
pub fn print_solutions(solutions: &[String], count: usize) {
    println!("\n🔎 {}", solutions_heading(count).bright_cyan().bold());
    for chunk in solutions.chunks(8) {
        let line: Vec<String> = chunk.iter().map(|w| w.to_uppercase()).collect();
        println!("   {}", line.join("  "));
    }
}

/// Print a suggestion table in received order
pub fn print_suggestions(title: &str, suggestions: &[Suggestion]) {
    println!("\n📊 {}", title.bright_cyan().bold());
    println!(
        "   {:>3}  {:<5}  {:>7}  {:>9}  {:>9}  {:<12}",
        "#".bright_black(),
        "Word".bright_black(),
        "Score".bright_black(),
        "Info gain".bright_black(),
        "Strategic".bright_black(),
        ""
    );

    let best = best_score(suggestions.iter().map(|s| &s.score));
    for (i, suggestion) in suggestions.iter().enumerate() {
        let word = suggestion.word.to_uppercase();
        let word = if suggestion.is_possible_solution {
            word.bright_green().bold()
        } else {
            word.bright_white()
        };
        println!(
            "   {:>3}  {:<5}  {:>7.3}  {:>9.3}  {:>9.3}  {}{}",
            i + 1,
            word,
            suggestion.score,
            suggestion.information_gain,
            suggestion.strategic_score,
            score_bar(suggestion.score, best, 12).green(),
            if suggestion.is_possible_solution {
                " ✓ possible answer"
            } else {
                ""
            }
        );
    }
}
