//! Application state for the TUI
//!
//! The App struct holds all state needed for rendering and handling events:
//! the wizard itself, the answers its steps collect, and the demo chrome
//! (status message, help overlay, last drawn wizard area).

use std::cell::Cell;
use std::rc::Rc;

use ratatui::layout::Rect;
use tracing::info;

use crate::config::settings::WizardOptions;
use crate::error::MultiStepResult;
use crate::setup::{demo_steps, SetupAnswers, SharedAnswers};
use crate::wizard::{MultiStep, MultiStepStyles};

/// How the demo ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Outcome {
    /// Still running
    #[default]
    Running,
    /// User finished the last step
    Completed,
    /// User quit early
    Cancelled,
}

/// Main application state
pub struct App {
    /// The wizard being shown
    pub wizard: MultiStep,

    /// Answers written by the steps
    pub answers: SharedAnswers,

    /// How the session ended, if it has
    pub outcome: Outcome,

    /// Whether the help overlay is shown
    pub show_help: bool,

    /// Status message to display
    pub status_message: Option<String>,

    /// Area the wizard was last drawn in, for mouse hit-testing
    pub wizard_area: Rect,

    /// Times the wizard advanced, counted by the `on_next` hook
    pub advances: Rc<Cell<usize>>,

    /// Times the wizard went back, counted by the `on_prev` hook
    pub retreats: Rc<Cell<usize>>,
}

impl App {
    /// Create the demo app
    ///
    /// `plain` replaces the theme with an empty style override, leaving every
    /// slot unstyled.
    pub fn new(options: &WizardOptions, plain: bool) -> MultiStepResult<Self> {
        let answers = SharedAnswers::default();
        let advances = Rc::new(Cell::new(0));
        let retreats = Rc::new(Cell::new(0));

        let next_count = advances.clone();
        let prev_count = retreats.clone();

        let mut wizard = MultiStep::new(demo_steps(&answers))?
            .with_options(options)?
            .on_next(move || {
                next_count.set(next_count.get() + 1);
                info!(advances = next_count.get(), "Wizard advanced");
            })
            .on_prev(move || {
                prev_count.set(prev_count.get() + 1);
                info!(retreats = prev_count.get(), "Wizard went back");
            });

        if plain {
            wizard = wizard.styles(MultiStepStyles::default());
        }

        Ok(Self {
            wizard,
            answers,
            outcome: Outcome::default(),
            show_help: false,
            status_message: None,
            wizard_area: Rect::default(),
            advances,
            retreats,
        })
    }

    /// Whether the main loop should stop
    pub fn should_quit(&self) -> bool {
        self.outcome != Outcome::Running
    }

    /// Stop without finishing
    pub fn quit(&mut self) {
        self.outcome = Outcome::Cancelled;
    }

    /// Finish the wizard if it is on a valid last step
    ///
    /// Returns whether it finished.
    pub fn try_finish(&mut self) -> bool {
        self.wizard.process_signals();
        if self.wizard.is_last_step() && self.wizard.is_step_valid() {
            self.outcome = Outcome::Completed;
            true
        } else {
            false
        }
    }

    /// Set a status message
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    /// Clear the status message
    pub fn clear_status(&mut self) {
        self.status_message = None;
    }

    /// Toggle the help overlay
    pub fn toggle_help(&mut self) {
        self.show_help = !self.show_help;
    }

    /// Snapshot of the collected answers
    pub fn answers(&self) -> SetupAnswers {
        self.answers.borrow().clone()
    }
}
