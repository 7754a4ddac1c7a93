//! Style slots for the wizard
//!
//! A wizard either uses the built-in theme for every slot (no styles given)
//! or exactly the slots the caller supplied (styles given). Slots missing from
//! a supplied set render unstyled; they are not filled in from the theme.

use std::str::FromStr;

use ratatui::style::{Color, Modifier, Style};
use serde::{Deserialize, Serialize};

use crate::error::{MultiStepError, MultiStepResult};

/// Per-slot styles for the wizard
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MultiStepStyles {
    /// Outer container
    pub component: Option<Style>,
    /// Content section and bottom control row
    pub section: Option<Style>,
    /// Indicator row
    pub top_nav: Option<Style>,
    /// Each indicator cell
    pub top_nav_step: Option<Style>,
    /// Marker of an inactive step
    pub todo: Option<Style>,
    /// Marker of the active step
    pub doing: Option<Style>,
    /// Previous control
    pub prev_button: Option<Style>,
    /// Next control
    pub next_button: Option<Style>,
}

impl MultiStepStyles {
    /// The built-in theme, every slot set
    pub fn base() -> Self {
        Self {
            component: Some(Style::default().fg(Color::White)),
            section: Some(Style::default()),
            top_nav: Some(Style::default().fg(Color::Gray)),
            top_nav_step: Some(Style::default().fg(Color::Gray)),
            todo: Some(Style::default().fg(Color::DarkGray)),
            doing: Some(
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
            prev_button: Some(Style::default().fg(Color::Yellow)),
            next_button: Some(
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            ),
        }
    }

    /// Pick the caller's styles when given, the theme otherwise
    pub fn resolve(styles: Option<Self>) -> Self {
        styles.unwrap_or_else(Self::base)
    }
}

/// Shorthand for reading a slot; unset slots are unstyled
pub(crate) fn slot(style: Option<Style>) -> Style {
    style.unwrap_or_default()
}

/// Serializable description of one style slot
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SlotStyle {
    /// Foreground color (`"red"`, `"#ff8800"`, `"12"`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fg: Option<String>,

    /// Background color
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bg: Option<String>,

    /// Text modifiers (`bold`, `dim`, `italic`, ...)
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub modifiers: Vec<String>,
}

impl SlotStyle {
    /// Convert to a ratatui style
    pub fn to_style(&self, slot_name: &str) -> MultiStepResult<Style> {
        let mut style = Style::default();

        if let Some(fg) = &self.fg {
            style = style.fg(parse_color(slot_name, fg)?);
        }
        if let Some(bg) = &self.bg {
            style = style.bg(parse_color(slot_name, bg)?);
        }
        for name in &self.modifiers {
            style = style.add_modifier(parse_modifier(slot_name, name)?);
        }

        Ok(style)
    }
}

/// Serializable form of [`MultiStepStyles`]
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct StyleConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub component: Option<SlotStyle>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub section: Option<SlotStyle>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub top_nav: Option<SlotStyle>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub top_nav_step: Option<SlotStyle>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub todo: Option<SlotStyle>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub doing: Option<SlotStyle>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prev_button: Option<SlotStyle>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_button: Option<SlotStyle>,
}

impl StyleConfig {
    /// Convert to wizard styles, keeping absent slots absent
    pub fn to_styles(&self) -> MultiStepResult<MultiStepStyles> {
        let convert = |name: &str, slot: &Option<SlotStyle>| -> MultiStepResult<Option<Style>> {
            slot.as_ref().map(|s| s.to_style(name)).transpose()
        };

        Ok(MultiStepStyles {
            component: convert("component", &self.component)?,
            section: convert("section", &self.section)?,
            top_nav: convert("top_nav", &self.top_nav)?,
            top_nav_step: convert("top_nav_step", &self.top_nav_step)?,
            todo: convert("todo", &self.todo)?,
            doing: convert("doing", &self.doing)?,
            prev_button: convert("prev_button", &self.prev_button)?,
            next_button: convert("next_button", &self.next_button)?,
        })
    }
}

fn parse_color(slot_name: &str, value: &str) -> MultiStepResult<Color> {
    Color::from_str(value)
        .map_err(|_| MultiStepError::invalid_style(slot_name, format!("unknown color '{}'", value)))
}

fn parse_modifier(slot_name: &str, value: &str) -> MultiStepResult<Modifier> {
    let modifier = match value.to_lowercase().as_str() {
        "bold" => Modifier::BOLD,
        "dim" => Modifier::DIM,
        "italic" => Modifier::ITALIC,
        "underlined" | "underline" => Modifier::UNDERLINED,
        "reversed" => Modifier::REVERSED,
        "crossed_out" | "strikethrough" => Modifier::CROSSED_OUT,
        "slow_blink" | "blink" => Modifier::SLOW_BLINK,
        _ => {
            return Err(MultiStepError::invalid_style(
                slot_name,
                format!("unknown modifier '{}'", value),
            ))
        }
    };
    Ok(modifier)
}
