//! Dialog modules for the TUI
//!
//! Contains modal overlays drawn above the wizard

pub mod help;
