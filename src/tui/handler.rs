//! Event handler for the TUI
//!
//! Routes keyboard and mouse events to the help overlay, the app-level keys,
//! or the wizard.

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use super::app::App;
use super::event::Event;

/// Handle an incoming event
pub fn handle_event(app: &mut App, event: Event) -> Result<()> {
    match event {
        Event::Key(key) => handle_key_event(app, key),
        Event::Mouse(mouse) => {
            let area = app.wizard_area;
            if app.wizard.handle_mouse(mouse, area) {
                app.clear_status();
            }
            Ok(())
        }
        Event::Tick => {
            app.wizard.process_signals();
            Ok(())
        }
        Event::Resize(_, _) => Ok(()),
    }
}

/// Handle a key event
fn handle_key_event(app: &mut App, key: KeyEvent) -> Result<()> {
    // Some platforms report releases too
    if key.kind != KeyEventKind::Press {
        return Ok(());
    }

    // Any key closes the help overlay
    if app.show_help {
        app.toggle_help();
        return Ok(());
    }

    match key.code {
        KeyCode::Esc => {
            app.quit();
            return Ok(());
        }
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.quit();
            return Ok(());
        }
        KeyCode::F(1) => {
            app.toggle_help();
            return Ok(());
        }
        KeyCode::Enter if app.wizard.is_last_step() => {
            if !app.try_finish() {
                app.set_status("Confirm the summary first (press y)");
            }
            return Ok(());
        }
        _ => {}
    }

    let before = app.wizard.active_step();
    let handled = app.wizard.handle_key(key);

    if app.wizard.active_step() != before {
        app.clear_status();
    } else if !handled && is_navigation_key(&key) {
        app.set_status("Finish the current step first");
    }

    Ok(())
}

/// Keys that would move the wizard if the move were allowed
fn is_navigation_key(key: &KeyEvent) -> bool {
    match key.code {
        KeyCode::Right | KeyCode::Tab => true,
        KeyCode::Char('n') | KeyCode::Char('p') => key.modifiers.contains(KeyModifiers::CONTROL),
        KeyCode::Char(c) => key.modifiers.contains(KeyModifiers::ALT) && c.is_ascii_digit(),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::settings::WizardOptions;
    use crate::tui::app::Outcome;

    fn press(app: &mut App, code: KeyCode) {
        handle_event(app, Event::Key(KeyEvent::new(code, KeyModifiers::NONE))).unwrap();
    }

    fn type_str(app: &mut App, text: &str) {
        for c in text.chars() {
            press(app, KeyCode::Char(c));
        }
    }

    #[test]
    fn test_full_run() {
        let mut app = App::new(&WizardOptions::default(), false).unwrap();

        // Empty name blocks navigation
        press(&mut app, KeyCode::Right);
        assert_eq!(app.wizard.active_step(), 0);
        assert!(app.status_message.is_some());

        type_str(&mut app, "demo");
        press(&mut app, KeyCode::Right);
        assert_eq!(app.wizard.active_step(), 1);
        assert!(app.status_message.is_none());

        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Enter);
        press(&mut app, KeyCode::Tab);
        assert_eq!(app.wizard.active_step(), 2);

        press(&mut app, KeyCode::Char(' '));
        press(&mut app, KeyCode::Right);
        assert_eq!(app.wizard.active_step(), 3);

        press(&mut app, KeyCode::Enter);
        assert_eq!(app.outcome, Outcome::Running);

        press(&mut app, KeyCode::Char('y'));
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.outcome, Outcome::Completed);

        let answers = app.answers();
        assert_eq!(answers.name, "demo");
        assert_eq!(answers.choices["Template"], "Command-line tool");
        assert_eq!(answers.choices["License"], "MIT");
        assert_eq!(app.advances.get(), 3);
    }

    #[test]
    fn test_escape_quits_and_help_swallows_keys() {
        let mut app = App::new(&WizardOptions::default(), false).unwrap();

        press(&mut app, KeyCode::F(1));
        assert!(app.show_help);
        press(&mut app, KeyCode::Esc);
        assert!(!app.show_help);
        assert_eq!(app.outcome, Outcome::Running);

        press(&mut app, KeyCode::Esc);
        assert_eq!(app.outcome, Outcome::Cancelled);
    }

    #[test]
    fn test_release_events_ignored() {
        let mut app = App::new(&WizardOptions::default(), false).unwrap();
        let mut key = KeyEvent::new(KeyCode::Char('a'), KeyModifiers::NONE);
        key.kind = KeyEventKind::Release;
        handle_event(&mut app, Event::Key(key)).unwrap();
        assert_eq!(app.answers().name, "");
    }
}
