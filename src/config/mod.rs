//! Configuration module for multistep
//!
//! This module provides configuration management including:
//! - XDG-compliant path resolution
//! - Settings persistence (wizard options, styles, event tick rate)

pub mod paths;
pub mod settings;

pub use paths::MultiStepPaths;
pub use settings::{Settings, WizardOptions};
