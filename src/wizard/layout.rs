//! Layout of the wizard widget
//!
//! Rendering and mouse hit-testing both go through [`WizardLayout`], so a
//! click always lands on what was drawn.

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use serde::{Deserialize, Serialize};

/// Width of a bottom control such as `[ < ]`
pub const BUTTON_WIDTH: u16 = 5;

/// Where an indicator's label sits relative to its ordinal marker
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum LabelPosition {
    /// Label before the marker, same line
    Left,
    /// Label after the marker, same line
    Right,
    /// Label on the line above the marker
    Above,
    /// Label on the line below the marker
    #[default]
    Below,
}

impl LabelPosition {
    /// Rows needed by one indicator
    pub fn rows(&self) -> u16 {
        match self {
            Self::Left | Self::Right => 1,
            Self::Above | Self::Below => 2,
        }
    }
}

/// Regions of a rendered wizard
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WizardLayout {
    /// Whole widget
    pub outer: Rect,
    /// Indicator row
    pub top_nav: Rect,
    /// One cell per step
    pub indicators: Vec<Rect>,
    /// Active step content
    pub content: Rect,
    /// Bottom control row, absent when navigation is hidden
    pub bottom_nav: Option<Rect>,
    /// Previous control
    pub prev_button: Option<Rect>,
    /// Next control (its area is reserved even when it is hidden)
    pub next_button: Option<Rect>,
}

impl WizardLayout {
    /// Calculate the layout for `step_count` steps inside `area`
    pub fn new(
        area: Rect,
        step_count: usize,
        label_position: LabelPosition,
        show_navigation: bool,
    ) -> Self {
        let inner = inset(area);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(label_position.rows()), // Indicators
                Constraint::Length(1),                     // Spacer
                Constraint::Min(1),                        // Content
                Constraint::Length(if show_navigation { 1 } else { 0 }), // Controls
            ])
            .split(inner);

        let top_nav = chunks[0];
        let content = chunks[2];

        let indicators = if step_count == 0 {
            Vec::new()
        } else {
            let constraints: Vec<Constraint> = (0..step_count)
                .map(|_| Constraint::Ratio(1, step_count as u32))
                .collect();
            Layout::default()
                .direction(Direction::Horizontal)
                .constraints(constraints)
                .split(top_nav)
                .to_vec()
        };

        let (bottom_nav, prev_button, next_button) = if show_navigation {
            let row = chunks[3];
            let width = BUTTON_WIDTH.min(row.width);
            let prev = Rect::new(row.x, row.y, width, row.height);
            let next = Rect::new(
                row.x + row.width.saturating_sub(width),
                row.y,
                width,
                row.height,
            );
            (Some(row), Some(prev), Some(next))
        } else {
            (None, None, None)
        };

        Self {
            outer: area,
            top_nav,
            indicators,
            content,
            bottom_nav,
            prev_button,
            next_button,
        }
    }

    /// Index of the indicator under the given cell, if any
    pub fn indicator_at(&self, column: u16, row: u16) -> Option<usize> {
        self.indicators
            .iter()
            .position(|rect| contains(*rect, column, row))
    }
}

/// Check whether a cell lies inside a rect
pub fn contains(rect: Rect, column: u16, row: u16) -> bool {
    column >= rect.x
        && column < rect.x.saturating_add(rect.width)
        && row >= rect.y
        && row < rect.y.saturating_add(rect.height)
}

/// Shrink a rect by one cell on every side (room for the border)
fn inset(area: Rect) -> Rect {
    Rect::new(
        area.x.saturating_add(1),
        area.y.saturating_add(1),
        area.width.saturating_sub(2),
        area.height.saturating_sub(2),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_indicators_cover_top_nav() {
        let layout = WizardLayout::new(Rect::new(0, 0, 62, 20), 3, LabelPosition::Below, true);

        assert_eq!(layout.indicators.len(), 3);
        assert_eq!(layout.top_nav, Rect::new(1, 1, 60, 2));
        let total: u16 = layout.indicators.iter().map(|r| r.width).sum();
        assert_eq!(total, 60);
        assert_eq!(layout.indicators[0].x, 1);
    }

    #[test]
    fn test_single_line_labels() {
        let layout = WizardLayout::new(Rect::new(0, 0, 40, 10), 2, LabelPosition::Right, true);
        assert_eq!(layout.top_nav.height, 1);
        assert_eq!(layout.content.y, 3);
    }

    #[test]
    fn test_hidden_navigation_has_no_controls() {
        let layout = WizardLayout::new(Rect::new(0, 0, 40, 10), 2, LabelPosition::Below, false);
        assert!(layout.bottom_nav.is_none());
        assert!(layout.prev_button.is_none());
        assert!(layout.next_button.is_none());
        // Content takes the freed row
        assert_eq!(layout.content.y + layout.content.height, 9);
    }

    #[test]
    fn test_controls_on_last_inner_row() {
        let layout = WizardLayout::new(Rect::new(0, 0, 40, 10), 2, LabelPosition::Below, true);
        let prev = layout.prev_button.unwrap();
        let next = layout.next_button.unwrap();
        assert_eq!(prev, Rect::new(1, 8, BUTTON_WIDTH, 1));
        assert_eq!(next, Rect::new(34, 8, BUTTON_WIDTH, 1));
    }

    #[test]
    fn test_indicator_hit_testing() {
        let layout = WizardLayout::new(Rect::new(0, 0, 62, 20), 3, LabelPosition::Below, true);
        assert_eq!(layout.indicator_at(1, 1), Some(0));
        assert_eq!(layout.indicator_at(30, 2), Some(1));
        assert_eq!(layout.indicator_at(60, 1), Some(2));
        assert_eq!(layout.indicator_at(30, 3), None);
        assert_eq!(layout.indicator_at(0, 1), None);
    }
}
