//! Confirmation step
//!
//! Shows the collected answers; valid once the user confirms them.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::setup::{format_summary, SharedAnswers};
use crate::wizard::{Step, StepSignal};

/// Final review step
pub struct ConfirmStep {
    answers: SharedAnswers,
    signal: Option<StepSignal>,
}

impl ConfirmStep {
    /// Create the step
    pub fn new(answers: SharedAnswers) -> Self {
        Self {
            answers,
            signal: None,
        }
    }

    fn set_confirmed(&mut self, confirmed: bool) {
        self.answers.borrow_mut().confirmed = confirmed;
        if let Some(signal) = &self.signal {
            signal.valid(confirmed);
        }
    }
}

impl Step for ConfirmStep {
    fn title(&self) -> Option<String> {
        Some("Confirm".to_string())
    }

    fn attach(&mut self, signal: StepSignal) {
        self.signal = Some(signal);
    }

    fn on_activate(&mut self) {
        let confirmed = self.answers.borrow().confirmed;
        if let Some(signal) = &self.signal {
            signal.valid(confirmed);
        }
    }

    fn handle_key(&mut self, key: KeyEvent) -> bool {
        match key.code {
            KeyCode::Char('y') | KeyCode::Char('Y') => self.set_confirmed(true),
            KeyCode::Char('n') | KeyCode::Char('N') if key.modifiers.is_empty() => {
                self.set_confirmed(false)
            }
            KeyCode::Char(' ') => {
                let confirmed = !self.answers.borrow().confirmed;
                self.set_confirmed(confirmed);
            }
            _ => return false,
        }
        true
    }

    fn render(&self, area: Rect, buf: &mut Buffer) {
        let answers = self.answers.borrow();

        let mut lines: Vec<Line> = format_summary(&answers)
            .into_iter()
            .map(Line::from)
            .collect();
        lines.push(Line::from(""));

        let (mark, style) = if answers.confirmed {
            ("[x]", Style::default().fg(Color::Green).add_modifier(Modifier::BOLD))
        } else {
            ("[ ]", Style::default().fg(Color::Yellow))
        };
        lines.push(Line::from(vec![
            Span::styled(mark, style),
            Span::raw(" Create the project with these settings (y/n)"),
        ]));
        if answers.confirmed {
            lines.push(Line::styled(
                "Press Enter to finish.",
                Style::default().fg(Color::DarkGray),
            ));
        }

        Paragraph::new(lines).render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;
    use std::sync::mpsc;

    #[test]
    fn test_confirm_toggles_validity() {
        let answers = SharedAnswers::default();
        let (tx, rx) = mpsc::channel();
        let mut step = ConfirmStep::new(answers.clone());
        step.attach(StepSignal::new(tx));

        step.on_activate();
        assert!(!rx.try_recv().unwrap().is_valid);

        assert!(step.handle_key(KeyEvent::new(KeyCode::Char('y'), KeyModifiers::NONE)));
        assert!(rx.try_recv().unwrap().is_valid);
        assert!(answers.borrow().confirmed);

        assert!(step.handle_key(KeyEvent::new(KeyCode::Char(' '), KeyModifiers::NONE)));
        assert!(!rx.try_recv().unwrap().is_valid);

        // Ctrl-n is left for the wizard
        assert!(!step.handle_key(KeyEvent::new(KeyCode::Char('n'), KeyModifiers::CONTROL)));
    }
}
