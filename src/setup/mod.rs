//! Demo setup wizard
//!
//! A small project-setup flow that drives the [`MultiStep`](crate::wizard::MultiStep)
//! widget from the `demo` command: name the project, pick a template and a
//! license, then confirm.

pub mod steps;

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::Rc;

use crate::wizard::Step;

use steps::{ChoiceStep, ConfirmStep, NameStep};

/// Answers collected by the demo steps
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SetupAnswers {
    /// Project name
    pub name: String,
    /// Chosen option per choice step, keyed by the step title
    pub choices: BTreeMap<String, String>,
    /// Whether the summary was confirmed
    pub confirmed: bool,
}

/// Shared handle the steps write their answers into
pub type SharedAnswers = Rc<RefCell<SetupAnswers>>;

/// Build the demo steps, all writing into `answers`
pub fn demo_steps(answers: &SharedAnswers) -> Vec<Box<dyn Step>> {
    vec![
        Box::new(NameStep::new(answers.clone())),
        Box::new(ChoiceStep::new(
            "Template",
            "What are you building?",
            &["Library", "Command-line tool", "Terminal UI"],
            answers.clone(),
        )),
        Box::new(ChoiceStep::new(
            "License",
            "Which license should the project use?",
            &["MIT", "Apache-2.0", "MIT OR Apache-2.0"],
            answers.clone(),
        )),
        Box::new(ConfirmStep::new(answers.clone())),
    ]
}

/// Format the collected answers for display
pub fn format_summary(answers: &SetupAnswers) -> Vec<String> {
    let mut lines = vec![format!("Name: {}", answers.name)];
    for (title, choice) in &answers.choices {
        lines.push(format!("{}: {}", title, choice));
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wizard::MultiStep;

    #[test]
    fn test_demo_wizard_builds() {
        let answers = SharedAnswers::default();
        let wizard = MultiStep::new(demo_steps(&answers)).unwrap();

        assert_eq!(wizard.step_count(), 4);
        assert_eq!(wizard.step_title(0).as_deref(), Some("Name"));
        assert_eq!(wizard.step_title(3).as_deref(), Some("Confirm"));
        // Empty name is reported invalid on activation
        assert!(!wizard.is_step_valid());
    }

    #[test]
    fn test_format_summary() {
        let mut answers = SetupAnswers {
            name: "demo".into(),
            ..Default::default()
        };
        answers.choices.insert("License".into(), "MIT".into());

        assert_eq!(format_summary(&answers), vec!["Name: demo", "License: MIT"]);
    }
}
