//! User settings for multistep
//!
//! Manages the wizard options (navigation visibility, label position,
//! indicator navigation, style overrides) and the terminal event tick rate.

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::paths::MultiStepPaths;
use crate::error::MultiStepError;
use crate::wizard::{LabelPosition, StyleConfig};

/// Options applied to a wizard at construction
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct WizardOptions {
    /// `Some(false)` hides the bottom control row; anything else shows it
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub show_navigation: Option<bool>,

    /// Where indicator labels sit relative to their ordinal
    #[serde(default)]
    pub label_position: LabelPosition,

    /// Disable jumping to a step through its indicator
    #[serde(default)]
    pub disable_navigation_click: bool,

    /// Style override. Absent means the built-in theme; present means only
    /// the listed slots are styled.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub styles: Option<StyleConfig>,
}

/// User settings for multistep
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Wizard options
    #[serde(default)]
    pub wizard: WizardOptions,

    /// Terminal event tick rate in milliseconds
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,
}

fn default_schema_version() -> u32 {
    1
}

fn default_tick_rate_ms() -> u64 {
    250
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            wizard: WizardOptions::default(),
            tick_rate_ms: default_tick_rate_ms(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or fall back to defaults if the file doesn't exist
    pub fn load_or_create(paths: &MultiStepPaths) -> Result<Self, MultiStepError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            Self::load_from(&settings_path)
        } else {
            // Don't save yet - let caller decide when to persist
            Ok(Settings::default())
        }
    }

    /// Load settings from an explicit file
    ///
    /// Files ending in `.yaml` or `.yml` are read as YAML, anything else as JSON.
    pub fn load_from(path: &Path) -> Result<Self, MultiStepError> {
        let contents = std::fs::read_to_string(path).map_err(|e| {
            MultiStepError::Io(format!(
                "Failed to read settings file {}: {}",
                path.display(),
                e
            ))
        })?;

        let is_yaml = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("yaml") || ext.eq_ignore_ascii_case("yml"));

        let settings: Settings = if is_yaml {
            serde_yaml::from_str(&contents).map_err(|e| {
                MultiStepError::Config(format!("Failed to parse settings file: {}", e))
            })?
        } else {
            serde_json::from_str(&contents).map_err(|e| {
                MultiStepError::Config(format!("Failed to parse settings file: {}", e))
            })?
        };

        Ok(settings)
    }

    /// Save settings to disk
    pub fn save(&self, paths: &MultiStepPaths) -> Result<(), MultiStepError> {
        paths.ensure_directories()?;

        let settings_path = paths.settings_file();
        let contents = serde_json::to_string_pretty(self).map_err(|e| {
            MultiStepError::Config(format!("Failed to serialize settings: {}", e))
        })?;

        std::fs::write(&settings_path, contents).map_err(|e| {
            MultiStepError::Io(format!("Failed to write settings file: {}", e))
        })?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wizard::SlotStyle;
    use tempfile::TempDir;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.schema_version, 1);
        assert_eq!(settings.tick_rate_ms, 250);
        assert_eq!(settings.wizard.label_position, LabelPosition::Below);
        assert_eq!(settings.wizard.show_navigation, None);
        assert!(!settings.wizard.disable_navigation_click);
        assert!(settings.wizard.styles.is_none());
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let paths = MultiStepPaths::with_base_dir(temp_dir.path().to_path_buf());

        let mut settings = Settings::default();
        settings.wizard.label_position = LabelPosition::Right;
        settings.wizard.show_navigation = Some(false);
        settings.wizard.styles = Some(StyleConfig {
            doing: Some(SlotStyle {
                fg: Some("magenta".into()),
                ..Default::default()
            }),
            ..Default::default()
        });

        settings.save(&paths).unwrap();
        assert!(paths.is_initialized());

        let loaded = Settings::load_or_create(&paths).unwrap();
        assert_eq!(loaded.wizard, settings.wizard);
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let paths = MultiStepPaths::with_base_dir(temp_dir.path().to_path_buf());

        let settings = Settings::load_or_create(&paths).unwrap();
        assert_eq!(settings.wizard, WizardOptions::default());
        assert!(!paths.is_initialized());
    }

    #[test]
    fn test_load_yaml() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("wizard.yaml");
        std::fs::write(
            &path,
            "wizard:\n  label_position: above\n  disable_navigation_click: true\n  styles:\n    todo:\n      fg: gray\n",
        )
        .unwrap();

        let settings = Settings::load_from(&path).unwrap();
        assert_eq!(settings.wizard.label_position, LabelPosition::Above);
        assert!(settings.wizard.disable_navigation_click);
        let styles = settings.wizard.styles.unwrap();
        assert!(styles.todo.is_some());
        assert!(styles.doing.is_none());
        assert_eq!(settings.tick_rate_ms, 250);
    }

    #[test]
    fn test_invalid_json_is_config_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.json");
        std::fs::write(&path, "{ not json").unwrap();

        let err = Settings::load_from(&path).unwrap_err();
        assert!(matches!(err, MultiStepError::Config(_)));
    }
}
