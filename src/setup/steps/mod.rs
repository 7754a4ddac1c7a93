//! Setup wizard steps
//!
//! Individual steps in the demo setup flow.

pub mod choice;
pub mod confirm;
pub mod name;

pub use choice::ChoiceStep;
pub use confirm::ConfirmStep;
pub use name::NameStep;
