//! TUI Views module
//!
//! Draws the wizard panel, the status bar and the help overlay.

pub mod status_bar;

use ratatui::Frame;

use super::app::App;
use super::dialogs;
use super::layout::AppLayout;

/// Render the entire application
pub fn render(frame: &mut Frame, app: &mut App) {
    let layout = AppLayout::new(frame.area());

    // Remember where the wizard went so mouse clicks can be mapped back
    app.wizard_area = layout.wizard;
    frame.render_widget(&app.wizard, layout.wizard);

    status_bar::render(frame, app, layout.status_bar);

    if app.show_help {
        dialogs::help::render(frame);
    }
}
