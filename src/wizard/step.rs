//! Step contract
//!
//! Every page shown by the wizard implements [`Step`]. Steps talk back to the
//! wizard through exactly one channel: the [`StepSignal`] handed to them in
//! [`Step::attach`].

use std::sync::mpsc;

use crossterm::event::KeyEvent;
use ratatui::{buffer::Buffer, layout::Rect};
use serde::{Deserialize, Serialize};

/// Validity report sent from a step to its wizard
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StepReport {
    /// Whether the step currently allows navigating away from it
    pub is_valid: bool,
    /// Requested jump target. Carried through but not acted upon.
    #[serde(default)]
    pub goto: usize,
}

impl StepReport {
    /// Report with only the validity flag set
    pub fn valid(is_valid: bool) -> Self {
        Self { is_valid, goto: 0 }
    }
}

/// Handle a step uses to report its validity to the wizard
///
/// Cloning is cheap; all clones feed the same wizard. Reports sent after the
/// wizard is dropped are discarded.
#[derive(Debug, Clone)]
pub struct StepSignal {
    sender: mpsc::Sender<StepReport>,
}

impl StepSignal {
    pub(crate) fn new(sender: mpsc::Sender<StepReport>) -> Self {
        Self { sender }
    }

    /// Send a full report
    pub fn report(&self, report: StepReport) {
        // A closed channel means the wizard is gone.
        let _ = self.sender.send(report);
    }

    /// Shorthand for reporting only the validity flag
    pub fn valid(&self, is_valid: bool) {
        self.report(StepReport::valid(is_valid));
    }
}

/// A single page of the wizard
pub trait Step {
    /// Title shown under the step's ordinal in the indicator row
    ///
    /// `None` falls back to `Step N`.
    fn title(&self) -> Option<String> {
        None
    }

    /// Receive the reporting handle. Called once, when the wizard is built.
    fn attach(&mut self, signal: StepSignal);

    /// Called every time this step becomes the active one
    ///
    /// Steps should re-report their validity here.
    fn on_activate(&mut self) {}

    /// Offer a key press to the step. Return `true` if it was consumed.
    fn handle_key(&mut self, _key: KeyEvent) -> bool {
        false
    }

    /// Draw the step's content
    fn render(&self, area: Rect, buf: &mut Buffer);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_wire_format() {
        let report = StepReport {
            is_valid: true,
            goto: 2,
        };
        let json = serde_json::to_string(&report).unwrap();
        assert_eq!(json, r#"{"isValid":true,"goto":2}"#);

        let parsed: StepReport = serde_json::from_str(r#"{"isValid":false}"#).unwrap();
        assert_eq!(parsed, StepReport::valid(false));
    }

    #[test]
    fn test_signal_delivers_in_order() {
        let (tx, rx) = mpsc::channel();
        let signal = StepSignal::new(tx);
        let clone = signal.clone();

        signal.valid(true);
        clone.report(StepReport {
            is_valid: false,
            goto: 1,
        });

        assert_eq!(rx.try_recv().unwrap(), StepReport::valid(true));
        assert_eq!(rx.try_recv().unwrap().goto, 1);
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn test_signal_after_receiver_dropped() {
        let (tx, rx) = mpsc::channel();
        let signal = StepSignal::new(tx);
        drop(rx);
        signal.valid(true);
    }
}
