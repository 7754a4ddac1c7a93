//! Terminal setup and teardown
//!
//! This module handles initializing and restoring the terminal state,
//! including setting up the panic hook to restore the terminal on crash.

use anyhow::Result;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout};
use std::panic;
use std::time::Duration;
use tracing::info;

use crate::config::settings::{Settings, WizardOptions};
use crate::setup::SetupAnswers;

use super::app::{App, Outcome};
use super::event::EventHandler;
use super::handler::handle_event;

/// Type alias for our terminal
pub type Tui = Terminal<CrosstermBackend<Stdout>>;

/// Initialize the terminal for TUI mode
pub fn init_terminal() -> Result<Tui> {
    // Set up panic hook to restore terminal on panic
    let original_hook = panic::take_hook();
    panic::set_hook(Box::new(move |panic_info| {
        // Restore terminal before printing panic info
        let _ = restore_terminal_impl();
        original_hook(panic_info);
    }));

    // Enable raw mode and enter alternate screen
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;

    // Create terminal
    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend)?;

    Ok(terminal)
}

/// Restore the terminal to its original state
pub fn restore_terminal() -> Result<()> {
    restore_terminal_impl()?;
    Ok(())
}

/// Internal implementation of terminal restoration
fn restore_terminal_impl() -> Result<()> {
    disable_raw_mode()?;
    execute!(io::stdout(), DisableMouseCapture, LeaveAlternateScreen)?;
    Ok(())
}

/// Run the demo wizard until it is finished or cancelled
pub fn run_tui(
    settings: &Settings,
    options: &WizardOptions,
    plain: bool,
) -> Result<(Outcome, SetupAnswers)> {
    // Build the app before touching the terminal so config errors print normally
    let mut app = App::new(options, plain)?;

    let mut terminal = init_terminal()?;
    info!(steps = app.wizard.step_count(), "TUI started");

    let result = run_loop(&mut terminal, &mut app, settings.tick_rate_ms);

    // Restore terminal even if the loop failed
    restore_terminal()?;
    result?;

    info!(outcome = ?app.outcome, "TUI stopped");
    Ok((app.outcome, app.answers()))
}

/// Main event loop
fn run_loop(terminal: &mut Tui, app: &mut App, tick_rate_ms: u64) -> Result<()> {
    let events = EventHandler::new(Duration::from_millis(tick_rate_ms.max(10)));

    loop {
        // Render
        terminal.draw(|frame| {
            super::views::render(frame, app);
        })?;

        // Handle events
        let event = events.next()?;
        handle_event(app, event)?;

        // Check if we should quit
        if app.should_quit() {
            break;
        }
    }

    Ok(())
}
