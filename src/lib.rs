//! multistep - Step-by-step wizard widget for ratatui
//!
//! This library provides [`MultiStep`], a terminal wizard that shows a fixed
//! sequence of caller-supplied steps one at a time, with step indicators on
//! top and previous/next controls at the bottom. Steps report whether they
//! are valid; the wizard derives which controls are enabled from that.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `wizard`: The wizard container, step contract, styles and layout
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `logging`: File-based tracing setup
//! - `setup`: Demo setup wizard built from sample steps
//! - `tui`: Terminal runner for the demo
//!
//! # Example
//!
//! ```rust,ignore
//! use multistep::wizard::{MultiStep, LabelPosition};
//!
//! let mut wizard = MultiStep::new(steps)?
//!     .label_position(LabelPosition::Right)
//!     .on_next(|| tracing::info!("advanced"));
//!
//! wizard.handle_key(key);
//! frame.render_widget(&wizard, area);
//! ```

pub mod config;
pub mod error;
pub mod logging;
pub mod setup;
pub mod tui;
pub mod wizard;

pub use error::{MultiStepError, MultiStepResult};
pub use wizard::{MultiStep, Step, StepReport, StepSignal};
