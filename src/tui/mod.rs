//! Terminal User Interface module
//!
//! This module runs the demo setup wizard in the terminal using ratatui:
//! event pump, key/mouse routing, layout, status bar and help overlay.

pub mod app;
pub mod event;
pub mod handler;
pub mod terminal;

// Views
pub mod views;

// Widgets
pub mod widgets;

// Dialogs
pub mod dialogs;

// Layout
pub mod layout;

// Keybindings
pub mod keybindings;

pub use app::{App, Outcome};
pub use terminal::run_tui;
