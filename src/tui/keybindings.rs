//! Keybinding definitions
//!
//! Defines all keyboard shortcuts of the demo, grouped by context. The wizard
//! keys mirror what [`MultiStep::handle_key`](crate::wizard::MultiStep::handle_key)
//! understands.

use crossterm::event::{KeyCode, KeyModifiers};

/// A keybinding definition
#[derive(Debug, Clone)]
pub struct Keybinding {
    /// The key code
    pub key: KeyCode,
    /// Required modifiers
    pub modifiers: KeyModifiers,
    /// Description of what the key does
    pub description: &'static str,
    /// Context where this keybinding is active
    pub context: KeyContext,
}

/// Context in which a keybinding is active
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyContext {
    /// Active everywhere
    Global,
    /// Wizard navigation, when the active step does not use the key
    Wizard,
    /// Used by the demo steps
    Step,
}

impl KeyContext {
    /// Heading used in help output
    pub fn heading(&self) -> &'static str {
        match self {
            Self::Global => "Global",
            Self::Wizard => "Navigation",
            Self::Step => "Steps",
        }
    }
}

/// All keybindings
pub static KEYBINDINGS: &[Keybinding] = &[
    // Global
    Keybinding {
        key: KeyCode::Esc,
        modifiers: KeyModifiers::NONE,
        description: "Quit",
        context: KeyContext::Global,
    },
    Keybinding {
        key: KeyCode::Char('c'),
        modifiers: KeyModifiers::CONTROL,
        description: "Quit",
        context: KeyContext::Global,
    },
    Keybinding {
        key: KeyCode::F(1),
        modifiers: KeyModifiers::NONE,
        description: "Show/hide help",
        context: KeyContext::Global,
    },
    // Wizard
    Keybinding {
        key: KeyCode::Right,
        modifiers: KeyModifiers::NONE,
        description: "Next step",
        context: KeyContext::Wizard,
    },
    Keybinding {
        key: KeyCode::Tab,
        modifiers: KeyModifiers::NONE,
        description: "Next step",
        context: KeyContext::Wizard,
    },
    Keybinding {
        key: KeyCode::Char('n'),
        modifiers: KeyModifiers::CONTROL,
        description: "Next step",
        context: KeyContext::Wizard,
    },
    Keybinding {
        key: KeyCode::Left,
        modifiers: KeyModifiers::NONE,
        description: "Previous step",
        context: KeyContext::Wizard,
    },
    Keybinding {
        key: KeyCode::BackTab,
        modifiers: KeyModifiers::SHIFT,
        description: "Previous step",
        context: KeyContext::Wizard,
    },
    Keybinding {
        key: KeyCode::Char('p'),
        modifiers: KeyModifiers::CONTROL,
        description: "Previous step",
        context: KeyContext::Wizard,
    },
    Keybinding {
        key: KeyCode::Char('1'),
        modifiers: KeyModifiers::ALT,
        description: "Jump to step 1-9 (current step must be valid)",
        context: KeyContext::Wizard,
    },
    Keybinding {
        key: KeyCode::Enter,
        modifiers: KeyModifiers::NONE,
        description: "Finish (last step, when valid)",
        context: KeyContext::Wizard,
    },
    // Steps
    Keybinding {
        key: KeyCode::Up,
        modifiers: KeyModifiers::NONE,
        description: "Move choice up",
        context: KeyContext::Step,
    },
    Keybinding {
        key: KeyCode::Down,
        modifiers: KeyModifiers::NONE,
        description: "Move choice down",
        context: KeyContext::Step,
    },
    Keybinding {
        key: KeyCode::Char(' '),
        modifiers: KeyModifiers::NONE,
        description: "Pick choice / toggle confirmation",
        context: KeyContext::Step,
    },
    Keybinding {
        key: KeyCode::Char('y'),
        modifiers: KeyModifiers::NONE,
        description: "Confirm",
        context: KeyContext::Step,
    },
];

/// Get keybindings for a specific context
pub fn get_keybindings(context: KeyContext) -> Vec<&'static Keybinding> {
    KEYBINDINGS
        .iter()
        .filter(|kb| kb.context == context)
        .collect()
}

/// Format a keybinding for display
pub fn format_keybinding(kb: &Keybinding) -> String {
    let mut parts = Vec::new();

    if kb.modifiers.contains(KeyModifiers::CONTROL) {
        parts.push("Ctrl".to_string());
    }
    if kb.modifiers.contains(KeyModifiers::ALT) {
        parts.push("Alt".to_string());
    }
    if kb.modifiers.contains(KeyModifiers::SHIFT) {
        // Only show Shift for non-character keys
        if !matches!(kb.key, KeyCode::Char(_)) {
            parts.push("Shift".to_string());
        }
    }

    let key_str = match kb.key {
        KeyCode::Char(' ') => "Space".to_string(),
        KeyCode::Char(c) => c.to_string(),
        KeyCode::Enter => "Enter".to_string(),
        KeyCode::Tab | KeyCode::BackTab => "Tab".to_string(),
        KeyCode::Esc => "Esc".to_string(),
        KeyCode::Backspace => "Backspace".to_string(),
        KeyCode::Delete => "Delete".to_string(),
        KeyCode::F(n) => format!("F{}", n),
        KeyCode::Up => "↑".to_string(),
        KeyCode::Down => "↓".to_string(),
        KeyCode::Left => "←".to_string(),
        KeyCode::Right => "→".to_string(),
        _ => format!("{:?}", kb.key),
    };

    parts.push(key_str);
    parts.join("+")
}

/// Format all keybindings as a plain-text table, grouped by context
pub fn format_keybinding_table() -> String {
    let key_width = KEYBINDINGS
        .iter()
        .map(|kb| format_keybinding(kb).chars().count())
        .max()
        .unwrap_or(3)
        .max(3);

    let mut output = String::new();
    for context in [KeyContext::Global, KeyContext::Wizard, KeyContext::Step] {
        output.push_str(context.heading());
        output.push('\n');
        for kb in get_keybindings(context) {
            let key = format_keybinding(kb);
            let pad = key_width - key.chars().count();
            output.push_str(&format!(
                "  {}{}  {}\n",
                key,
                " ".repeat(pad),
                kb.description
            ));
        }
        output.push('\n');
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_keybinding() {
        let ctrl_n = Keybinding {
            key: KeyCode::Char('n'),
            modifiers: KeyModifiers::CONTROL,
            description: "",
            context: KeyContext::Wizard,
        };
        assert_eq!(format_keybinding(&ctrl_n), "Ctrl+n");

        let back_tab = Keybinding {
            key: KeyCode::BackTab,
            modifiers: KeyModifiers::SHIFT,
            description: "",
            context: KeyContext::Wizard,
        };
        assert_eq!(format_keybinding(&back_tab), "Shift+Tab");

        let help = Keybinding {
            key: KeyCode::F(1),
            modifiers: KeyModifiers::NONE,
            description: "",
            context: KeyContext::Global,
        };
        assert_eq!(format_keybinding(&help), "F1");
    }

    #[test]
    fn test_contexts_are_disjoint() {
        let total: usize = [KeyContext::Global, KeyContext::Wizard, KeyContext::Step]
            .iter()
            .map(|c| get_keybindings(*c).len())
            .sum();
        assert_eq!(total, KEYBINDINGS.len());
    }

    #[test]
    fn test_table_lists_every_context() {
        let table = format_keybinding_table();
        assert!(table.contains("Global"));
        assert!(table.contains("Navigation"));
        assert!(table.contains("Alt+1"));
        assert!(table.contains("Next step"));
    }
}
