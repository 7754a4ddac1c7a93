//! Project name step
//!
//! Valid once the name contains something other than whitespace.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    text::Line,
    widgets::{Paragraph, Widget},
};

use crate::setup::SharedAnswers;
use crate::tui::widgets::TextInput;
use crate::wizard::{Step, StepSignal};

/// Name entry step
pub struct NameStep {
    input: TextInput,
    answers: SharedAnswers,
    signal: Option<StepSignal>,
}

impl NameStep {
    /// Create the step
    pub fn new(answers: SharedAnswers) -> Self {
        Self {
            input: TextInput::new()
                .label("Name")
                .placeholder("my-project")
                .focused(true),
            answers,
            signal: None,
        }
    }

    fn is_valid(&self) -> bool {
        !self.input.value().trim().is_empty()
    }

    fn changed(&mut self) {
        self.answers.borrow_mut().name = self.input.value().trim().to_string();
        if let Some(signal) = &self.signal {
            signal.valid(self.is_valid());
        }
    }
}

impl Step for NameStep {
    fn title(&self) -> Option<String> {
        Some("Name".to_string())
    }

    fn attach(&mut self, signal: StepSignal) {
        self.signal = Some(signal);
    }

    fn on_activate(&mut self) {
        if let Some(signal) = &self.signal {
            signal.valid(self.is_valid());
        }
    }

    fn handle_key(&mut self, key: KeyEvent) -> bool {
        if key
            .modifiers
            .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
        {
            return false;
        }

        match key.code {
            KeyCode::Char(c) => self.input.insert(c),
            KeyCode::Backspace => self.input.backspace(),
            KeyCode::Delete => self.input.delete(),
            KeyCode::Home => {
                self.input.move_start();
                return true;
            }
            KeyCode::End => {
                self.input.move_end();
                return true;
            }
            _ => return false,
        }

        self.changed();
        true
    }

    fn render(&self, area: Rect, buf: &mut Buffer) {
        let prompt = Paragraph::new(vec![
            Line::from("What is your project called?"),
            Line::styled(
                "The name cannot be empty.",
                Style::default().fg(Color::DarkGray),
            ),
        ]);
        prompt.render(area, buf);

        if area.height > 3 {
            let input_area = Rect::new(area.x, area.y + 3, area.width, 1);
            self.input.render(input_area, buf);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::mpsc;

    fn press(step: &mut NameStep, code: KeyCode) -> bool {
        step.handle_key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    #[test]
    fn test_reports_validity_as_name_changes() {
        let answers = SharedAnswers::default();
        let (tx, rx) = mpsc::channel();
        let mut step = NameStep::new(answers.clone());
        step.attach(StepSignal::new(tx));

        step.on_activate();
        assert!(!rx.try_recv().unwrap().is_valid);

        assert!(press(&mut step, KeyCode::Char(' ')));
        assert!(!rx.try_recv().unwrap().is_valid);

        assert!(press(&mut step, KeyCode::Char('x')));
        assert!(rx.try_recv().unwrap().is_valid);
        assert_eq!(answers.borrow().name, "x");

        assert!(press(&mut step, KeyCode::Backspace));
        assert!(!rx.try_recv().unwrap().is_valid);
    }

    #[test]
    fn test_navigation_keys_pass_through() {
        let mut step = NameStep::new(SharedAnswers::default());
        assert!(!press(&mut step, KeyCode::Right));
        assert!(!press(&mut step, KeyCode::Tab));
        assert!(!step.handle_key(KeyEvent::new(KeyCode::Char('n'), KeyModifiers::CONTROL)));
        assert!(!step.handle_key(KeyEvent::new(KeyCode::Char('2'), KeyModifiers::ALT)));
    }
}
