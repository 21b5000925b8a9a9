//! The onboarding wizard.
//!
//! The wizard is a fixed sequence of question screens. Each data step
//! stores one answer in the session, the processing step collects and
//! submits everything, and the terminal step hands off to the product.

pub mod flow;
pub mod progress;
pub mod step;

pub use flow::{OnboardingFlow, ProcessingHandles};
pub use progress::{ProgressStream, ProgressUpdate, milestone_label, spawn_progress};
pub use step::{GoalChoice, WizardStep};
