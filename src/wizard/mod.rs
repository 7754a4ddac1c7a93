//! Step wizard widget
//!
//! [`MultiStep`] shows a fixed sequence of [`Step`]s one at a time, with a row
//! of step indicators on top and previous/next controls at the bottom.
//!
//! The wizard owns two pieces of state: the active step index and the last
//! validity report received from a step. Everything else (indicator status,
//! control state) is derived from those and recomputed after each change.

pub mod layout;
pub mod nav;
pub mod step;
pub mod styles;

use std::sync::mpsc;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    widgets::{Block, Borders, Widget},
};
use tracing::{debug, trace};

use crate::config::settings::WizardOptions;
use crate::error::{MultiStepError, MultiStepResult};

pub use layout::{LabelPosition, WizardLayout};
pub use nav::{BottomNavState, StepStatus};
pub use step::{Step, StepReport, StepSignal};
pub use styles::{MultiStepStyles, SlotStyle, StyleConfig};

use styles::slot;

/// Side-effect hook run before a navigation move
pub type NavHook = Box<dyn FnMut()>;

/// The step wizard container
pub struct MultiStep {
    steps: Vec<Box<dyn Step>>,
    styles: MultiStepStyles,
    show_navigation: Option<bool>,
    label_position: LabelPosition,
    disable_navigation_click: bool,
    on_next: Option<NavHook>,
    on_prev: Option<NavHook>,

    active: usize,
    step_is_valid: bool,

    top_nav: Vec<StepStatus>,
    bottom_nav: BottomNavState,

    sender: mpsc::Sender<StepReport>,
    reports: mpsc::Receiver<StepReport>,
}

impl MultiStep {
    /// Create a wizard over the given steps
    ///
    /// # Errors
    ///
    /// Returns [`MultiStepError::NoSteps`] if `steps` is empty.
    pub fn new(mut steps: Vec<Box<dyn Step>>) -> MultiStepResult<Self> {
        if steps.is_empty() {
            return Err(MultiStepError::NoSteps);
        }

        let (sender, reports) = mpsc::channel();
        for step in steps.iter_mut() {
            step.attach(StepSignal::new(sender.clone()));
        }

        let len = steps.len();
        let mut wizard = Self {
            steps,
            styles: MultiStepStyles::resolve(None),
            show_navigation: None,
            label_position: LabelPosition::default(),
            disable_navigation_click: false,
            on_next: None,
            on_prev: None,
            active: 0,
            step_is_valid: false,
            top_nav: nav::top_nav_statuses(0, len),
            bottom_nav: nav::bottom_nav_state(0, len, false),
            sender,
            reports,
        };

        debug!(steps = len, "Wizard created");
        wizard.activate_current();
        Ok(wizard)
    }

    /// Use the given styles instead of the built-in theme
    ///
    /// Slots left as `None` render unstyled.
    pub fn styles(mut self, styles: MultiStepStyles) -> Self {
        self.styles = MultiStepStyles::resolve(Some(styles));
        self
    }

    /// Show or hide the bottom control row
    pub fn show_navigation(mut self, show: bool) -> Self {
        self.show_navigation = Some(show);
        self
    }

    /// Set where indicator labels sit relative to their ordinal
    pub fn label_position(mut self, position: LabelPosition) -> Self {
        self.label_position = position;
        self
    }

    /// Disable jumping to a step by clicking its indicator
    pub fn disable_navigation_click(mut self, disable: bool) -> Self {
        self.disable_navigation_click = disable;
        self
    }

    /// Run `hook` every time the wizard advances
    pub fn on_next(mut self, hook: impl FnMut() + 'static) -> Self {
        self.on_next = Some(Box::new(hook));
        self
    }

    /// Run `hook` every time the wizard goes back
    pub fn on_prev(mut self, hook: impl FnMut() + 'static) -> Self {
        self.on_prev = Some(Box::new(hook));
        self
    }

    /// Apply options loaded from the settings file
    pub fn with_options(mut self, options: &WizardOptions) -> MultiStepResult<Self> {
        if let Some(config) = &options.styles {
            self = self.styles(config.to_styles()?);
        }
        self.show_navigation = options.show_navigation;
        self.label_position = options.label_position;
        self.disable_navigation_click = options.disable_navigation_click;
        Ok(self)
    }

    /// A reporting handle feeding this wizard, for hosts that validate steps themselves
    pub fn signal(&self) -> StepSignal {
        StepSignal::new(self.sender.clone())
    }

    /// Index of the step being shown
    pub fn active_step(&self) -> usize {
        self.active
    }

    /// Number of steps
    pub fn step_count(&self) -> usize {
        self.steps.len()
    }

    /// Whether the wizard is on its final step
    pub fn is_last_step(&self) -> bool {
        self.active + 1 == self.steps.len()
    }

    /// Last validity reported by a step
    pub fn is_step_valid(&self) -> bool {
        self.step_is_valid
    }

    /// Indicator statuses, one per step
    pub fn top_nav(&self) -> &[StepStatus] {
        &self.top_nav
    }

    /// State of the previous/next controls
    pub fn bottom_nav(&self) -> BottomNavState {
        self.bottom_nav
    }

    /// Whether the bottom control row is drawn
    pub fn is_navigation_shown(&self) -> bool {
        self.show_navigation != Some(false)
    }

    /// Resolved style slots
    pub fn resolved_styles(&self) -> &MultiStepStyles {
        &self.styles
    }

    /// Indicator label for a step
    pub fn step_title(&self, index: usize) -> Option<String> {
        self.steps
            .get(index)
            .map(|step| step.title().unwrap_or_else(|| format!("Step {}", index + 1)))
    }

    /// Advance one step
    ///
    /// Runs the `on_next` hook, then moves forward. Stays put on the last step.
    pub fn next(&mut self) {
        if let Some(hook) = self.on_next.as_mut() {
            hook();
        }
        let target = (self.active + 1).min(self.steps.len() - 1);
        debug!(from = self.active, to = target, "Next");
        self.set_active(target);
    }

    /// Go back one step
    ///
    /// Runs the `on_prev` hook, then moves back. Stays put on the first step.
    pub fn previous(&mut self) {
        if let Some(hook) = self.on_prev.as_mut() {
            hook();
        }
        let target = self.active.saturating_sub(1);
        debug!(from = self.active, to = target, "Previous");
        self.set_active(target);
    }

    /// Activate the next control, honoring its disabled/hidden state
    ///
    /// Returns whether the wizard acted on it.
    pub fn press_next(&mut self) -> bool {
        if !self.is_navigation_shown() || self.bottom_nav.next_disabled || self.bottom_nav.hide_last
        {
            trace!(active = self.active, "Next control inactive");
            return false;
        }
        self.next();
        true
    }

    /// Activate the previous control, honoring its disabled state
    pub fn press_previous(&mut self) -> bool {
        if !self.is_navigation_shown() || self.bottom_nav.prev_disabled {
            trace!(active = self.active, "Previous control inactive");
            return false;
        }
        self.previous();
        true
    }

    /// Jump to a step through its indicator
    ///
    /// Ignored when indicator navigation is disabled or the active step is
    /// not valid. The target's own state is not consulted.
    pub fn step_click(&mut self, index: usize) -> bool {
        if self.disable_navigation_click {
            trace!(index, "Indicator navigation disabled");
            return false;
        }
        if !self.step_is_valid {
            trace!(index, active = self.active, "Active step invalid, jump ignored");
            return false;
        }
        if index >= self.steps.len() {
            return false;
        }
        debug!(from = self.active, to = index, "Jump");
        self.set_active(index);
        true
    }

    /// Record a validity report from the active step
    pub fn child_state_changed(&mut self, report: StepReport) {
        if report.is_valid != self.step_is_valid {
            debug!(active = self.active, valid = report.is_valid, "Step validity changed");
        }
        self.step_is_valid = report.is_valid;
        self.recompute();
    }

    /// Apply every report steps have sent since the last call
    pub fn process_signals(&mut self) {
        while let Ok(report) = self.reports.try_recv() {
            self.child_state_changed(report);
        }
    }

    /// Rebuild the derived navigation state
    pub fn recompute(&mut self) {
        let len = self.steps.len();
        self.top_nav = nav::top_nav_statuses(self.active, len);
        self.bottom_nav = nav::bottom_nav_state(self.active, len, self.step_is_valid);
    }

    fn set_active(&mut self, index: usize) {
        if index == self.active {
            self.recompute();
            return;
        }
        self.active = index;
        self.activate_current();
    }

    fn activate_current(&mut self) {
        self.steps[self.active].on_activate();
        self.process_signals();
        self.recompute();
    }

    /// Handle a key press
    ///
    /// The active step sees the key first. Unconsumed keys drive navigation:
    /// Right/Tab/Ctrl-n for next, Left/Shift-Tab/Ctrl-p for previous and
    /// Alt-1..Alt-9 to jump. Returns whether the key was used.
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        self.process_signals();

        let handled = if self.steps[self.active].handle_key(key) {
            true
        } else {
            match key.code {
                KeyCode::Right | KeyCode::Tab => self.press_next(),
                KeyCode::Left | KeyCode::BackTab => self.press_previous(),
                KeyCode::Char('n') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                    self.press_next()
                }
                KeyCode::Char('p') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                    self.press_previous()
                }
                KeyCode::Char(c) if key.modifiers.contains(KeyModifiers::ALT) => {
                    match c.to_digit(10) {
                        Some(d) if d >= 1 => self.step_click(d as usize - 1),
                        _ => false,
                    }
                }
                _ => false,
            }
        };

        self.process_signals();
        handled
    }

    /// Handle a mouse event for a wizard drawn in `area`
    pub fn handle_mouse(&mut self, mouse: MouseEvent, area: Rect) -> bool {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return false;
        }
        self.process_signals();

        let regions = self.layout(area);
        let (column, row) = (mouse.column, mouse.row);

        if let Some(index) = regions.indicator_at(column, row) {
            return self.step_click(index);
        }
        if regions
            .prev_button
            .is_some_and(|rect| layout::contains(rect, column, row))
        {
            return self.press_previous();
        }
        if regions
            .next_button
            .is_some_and(|rect| layout::contains(rect, column, row))
        {
            return self.press_next();
        }
        false
    }

    /// Layout of this wizard inside `area`
    pub fn layout(&self, area: Rect) -> WizardLayout {
        WizardLayout::new(
            area,
            self.steps.len(),
            self.label_position,
            self.is_navigation_shown(),
        )
    }

    fn render_top_nav(&self, layout: &WizardLayout, buf: &mut Buffer) {
        buf.set_style(layout.top_nav, slot(self.styles.top_nav));

        for (i, cell) in layout.indicators.iter().enumerate() {
            buf.set_style(*cell, slot(self.styles.top_nav_step));

            let marker = format!(" {} ", i + 1);
            let marker_style = match self.top_nav[i] {
                StepStatus::Doing => slot(self.styles.doing),
                StepStatus::Todo => slot(self.styles.todo),
            };
            let label = self.step_title(i).unwrap_or_default();
            let label_style = slot(self.styles.top_nav_step);

            match self.label_position {
                LabelPosition::Below | LabelPosition::Above => {
                    let (marker_y, label_y) = if self.label_position == LabelPosition::Below {
                        (cell.y, cell.y + 1)
                    } else {
                        (cell.y + 1, cell.y)
                    };
                    put_centered(buf, *cell, marker_y, &[(marker.as_str(), marker_style)]);
                    put_centered(buf, *cell, label_y, &[(label.as_str(), label_style)]);
                }
                LabelPosition::Left => {
                    put_centered(
                        buf,
                        *cell,
                        cell.y,
                        &[
                            (label.as_str(), label_style),
                            (" ", label_style),
                            (marker.as_str(), marker_style),
                        ],
                    );
                }
                LabelPosition::Right => {
                    put_centered(
                        buf,
                        *cell,
                        cell.y,
                        &[
                            (marker.as_str(), marker_style),
                            (" ", label_style),
                            (label.as_str(), label_style),
                        ],
                    );
                }
            }
        }
    }

    fn render_bottom_nav(&self, layout: &WizardLayout, buf: &mut Buffer) {
        let Some(row) = layout.bottom_nav else {
            return;
        };
        buf.set_style(row, slot(self.styles.section));

        if row.height == 0 {
            return;
        }

        if let Some(prev) = layout.prev_button {
            let style = control_style(slot(self.styles.prev_button), self.bottom_nav.prev_disabled);
            buf.set_stringn(prev.x, prev.y, "[ < ]", prev.width as usize, style);
        }

        if self.bottom_nav.hide_last {
            return;
        }
        if let Some(next) = layout.next_button {
            let style = control_style(slot(self.styles.next_button), self.bottom_nav.next_disabled);
            buf.set_stringn(next.x, next.y, "[ > ]", next.width as usize, style);
        }
    }
}

impl Widget for &MultiStep {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let layout = self.layout(area);

        Block::default()
            .borders(Borders::ALL)
            .style(slot(self.styles.component))
            .render(area, buf);

        self.render_top_nav(&layout, buf);

        buf.set_style(layout.content, slot(self.styles.section));
        if !layout.content.is_empty() {
            self.steps[self.active].render(layout.content, buf);
        }

        self.render_bottom_nav(&layout, buf);
    }
}

impl std::fmt::Debug for MultiStep {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MultiStep")
            .field("steps", &self.steps.len())
            .field("active", &self.active)
            .field("step_is_valid", &self.step_is_valid)
            .field("show_navigation", &self.show_navigation)
            .field("label_position", &self.label_position)
            .field("disable_navigation_click", &self.disable_navigation_click)
            .finish()
    }
}

/// Disabled controls are drawn dimmed
fn control_style(style: Style, disabled: bool) -> Style {
    if disabled {
        style.add_modifier(Modifier::DIM)
    } else {
        style
    }
}

/// Write styled pieces on one line, centered in `area`
fn put_centered(buf: &mut Buffer, area: Rect, y: u16, pieces: &[(&str, Style)]) {
    if area.width == 0 || y < area.y || y >= area.bottom() {
        return;
    }

    let width: usize = pieces.iter().map(|(s, _)| s.chars().count()).sum();
    let mut x = area.x + (area.width.saturating_sub(width as u16)) / 2;
    let right = area.x + area.width;

    for (text, style) in pieces {
        if x >= right {
            break;
        }
        let (next_x, _) = buf.set_stringn(x, y, text, (right - x) as usize, *style);
        x = next_x;
    }
}
