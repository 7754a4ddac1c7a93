//! Layout definitions for the TUI
//!
//! Defines the overall layout structure: wizard panel and status bar.

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Widest the wizard panel gets
pub const MAX_WIZARD_WIDTH: u16 = 90;

/// Tallest the wizard panel gets
pub const MAX_WIZARD_HEIGHT: u16 = 20;

/// Layout regions for the TUI
pub struct AppLayout {
    /// Wizard panel, centered in the space above the status bar
    pub wizard: Rect,
    /// Status bar at the bottom
    pub status_bar: Rect,
}

impl AppLayout {
    /// Calculate layout from available area
    pub fn new(area: Rect) -> Self {
        let vertical = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(3),    // Main area
                Constraint::Length(1), // Status bar
            ])
            .split(area);

        Self {
            wizard: centered_rect_fixed(MAX_WIZARD_WIDTH, MAX_WIZARD_HEIGHT, vertical[0]),
            status_bar: vertical[1],
        }
    }
}

/// Create a centered rect for dialogs
pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

/// Create a fixed-size centered rect, shrunk to fit `r`
pub fn centered_rect_fixed(width: u16, height: u16, r: Rect) -> Rect {
    let width = width.min(r.width);
    let height = height.min(r.height);
    let x = r.x + (r.width - width) / 2;
    let y = r.y + (r.height - height) / 2;
    Rect::new(x, y, width, height)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_layout() {
        let layout = AppLayout::new(Rect::new(0, 0, 120, 40));
        assert_eq!(layout.status_bar, Rect::new(0, 39, 120, 1));
        assert_eq!(layout.wizard.width, MAX_WIZARD_WIDTH);
        assert_eq!(layout.wizard.height, MAX_WIZARD_HEIGHT);
        assert_eq!(layout.wizard.x, 15);
    }

    #[test]
    fn test_small_terminal_shrinks_wizard() {
        let layout = AppLayout::new(Rect::new(0, 0, 40, 12));
        assert_eq!(layout.wizard, Rect::new(0, 0, 40, 11));
    }
}
