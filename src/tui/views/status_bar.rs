//! Status bar view
//!
//! Shows the step position, validity, status message and key hints

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::tui::app::App;

/// Render the status bar
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    frame.render_widget(Paragraph::new(status_line(app, area.width)), area);
}

/// Build the status line for a bar `width` cells wide
pub fn status_line(app: &App, width: u16) -> Line<'static> {
    let wizard = &app.wizard;
    let mut spans = vec![];

    spans.push(Span::styled(
        format!(" Step {}/{} ", wizard.active_step() + 1, wizard.step_count()),
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    ));

    spans.push(Span::raw("│ "));
    let (validity, color) = if wizard.is_step_valid() {
        ("valid", Color::Green)
    } else {
        ("incomplete", Color::Red)
    };
    spans.push(Span::styled(validity, Style::default().fg(color)));

    if let Some(ref message) = app.status_message {
        spans.push(Span::raw(" │ "));
        spans.push(Span::styled(
            message.clone(),
            Style::default().fg(Color::Yellow),
        ));
    }

    // Key hints (right-aligned)
    let hints = " Esc:Quit  F1:Help  ←/→:Prev/Next ";

    let left_len: usize = spans.iter().map(|s| s.content.chars().count()).sum();
    let hints_len = hints.chars().count();
    if left_len + hints_len < width as usize {
        let padding = " ".repeat(width as usize - left_len - hints_len);
        spans.push(Span::raw(padding));
        spans.push(Span::styled(hints, Style::default().fg(Color::White)));
    }

    Line::from(spans)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::settings::WizardOptions;

    fn text(line: &Line) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn test_status_line() {
        let mut app = App::new(&WizardOptions::default(), false).unwrap();
        app.set_status("hello");

        let line = text(&status_line(&app, 100));
        assert!(line.starts_with(" Step 1/4 "));
        assert!(line.contains("incomplete"));
        assert!(line.contains("hello"));
        assert!(line.ends_with("F1:Help  ←/→:Prev/Next "));
        assert_eq!(line.chars().count(), 100);
    }

    #[test]
    fn test_narrow_status_line_drops_hints() {
        let app = App::new(&WizardOptions::default(), false).unwrap();
        let line = text(&status_line(&app, 30));
        assert!(!line.contains("F1:Help"));
    }
}
