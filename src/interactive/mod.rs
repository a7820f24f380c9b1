//! Interactive TUI
//!
//! Grid editor with live constraint preview and background solver requests.

mod app;
mod rendering;

pub use app::{App, Cursor, Message, MessageStyle, run_tui};
pub use rendering::{GridView, grid_area};
