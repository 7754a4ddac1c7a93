//! Single-choice step
//!
//! Shows a list of options; valid once one has been picked with Space or Enter.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::setup::SharedAnswers;
use crate::wizard::{Step, StepSignal};

/// Pick-one-of-many step
pub struct ChoiceStep {
    title: String,
    prompt: String,
    options: Vec<String>,
    cursor: usize,
    selected: Option<usize>,
    answers: SharedAnswers,
    signal: Option<StepSignal>,
}

impl ChoiceStep {
    /// Create the step
    pub fn new(title: &str, prompt: &str, options: &[&str], answers: SharedAnswers) -> Self {
        Self {
            title: title.to_string(),
            prompt: prompt.to_string(),
            options: options.iter().map(|o| o.to_string()).collect(),
            cursor: 0,
            selected: None,
            answers,
            signal: None,
        }
    }

    /// The picked option, if any
    pub fn selected(&self) -> Option<&str> {
        self.selected
            .and_then(|i| self.options.get(i))
            .map(String::as_str)
    }

    fn select(&mut self) {
        if self.options.is_empty() {
            return;
        }
        self.selected = Some(self.cursor);
        self.answers
            .borrow_mut()
            .choices
            .insert(self.title.clone(), self.options[self.cursor].clone());
        if let Some(signal) = &self.signal {
            signal.valid(true);
        }
    }
}

impl Step for ChoiceStep {
    fn title(&self) -> Option<String> {
        Some(self.title.clone())
    }

    fn attach(&mut self, signal: StepSignal) {
        self.signal = Some(signal);
    }

    fn on_activate(&mut self) {
        if let Some(signal) = &self.signal {
            signal.valid(self.selected.is_some());
        }
    }

    fn handle_key(&mut self, key: KeyEvent) -> bool {
        if !key.modifiers.is_empty() && key.modifiers != KeyModifiers::SHIFT {
            return false;
        }

        match key.code {
            KeyCode::Up | KeyCode::Char('k') => {
                self.cursor = self.cursor.saturating_sub(1);
            }
            KeyCode::Down | KeyCode::Char('j') => {
                if self.cursor + 1 < self.options.len() {
                    self.cursor += 1;
                }
            }
            KeyCode::Char(' ') | KeyCode::Enter => self.select(),
            _ => return false,
        }
        true
    }

    fn render(&self, area: Rect, buf: &mut Buffer) {
        let mut lines = vec![Line::from(self.prompt.as_str()), Line::from("")];

        for (i, option) in self.options.iter().enumerate() {
            let mark = if self.selected == Some(i) { "(*)" } else { "( )" };
            let style = if i == self.cursor {
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            let pointer = if i == self.cursor { "> " } else { "  " };
            lines.push(Line::from(vec![
                Span::styled(pointer, style),
                Span::styled(format!("{} {}", mark, option), style),
            ]));
        }

        Paragraph::new(lines).render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::mpsc;

    fn press(step: &mut ChoiceStep, code: KeyCode) -> bool {
        step.handle_key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    #[test]
    fn test_select_reports_valid() {
        let answers = SharedAnswers::default();
        let (tx, rx) = mpsc::channel();
        let mut step = ChoiceStep::new("License", "Pick one", &["MIT", "Apache-2.0"], answers.clone());
        step.attach(StepSignal::new(tx));

        step.on_activate();
        assert!(!rx.try_recv().unwrap().is_valid);

        assert!(press(&mut step, KeyCode::Down));
        assert!(press(&mut step, KeyCode::Down));
        assert!(press(&mut step, KeyCode::Char(' ')));
        assert!(rx.try_recv().unwrap().is_valid);
        assert_eq!(step.selected(), Some("Apache-2.0"));
        assert_eq!(answers.borrow().choices["License"], "Apache-2.0");

        step.on_activate();
        assert!(rx.try_recv().unwrap().is_valid);
    }

    #[test]
    fn test_cursor_stays_in_bounds() {
        let mut step = ChoiceStep::new("T", "P", &["a", "b"], SharedAnswers::default());
        press(&mut step, KeyCode::Up);
        press(&mut step, KeyCode::Enter);
        assert_eq!(step.selected(), Some("a"));
        assert!(!press(&mut step, KeyCode::Right));
    }
}
