//! The onboarding aggregator: turns stored answers into the payload the
//! backend expects.

pub mod collector;
pub mod debts;
pub mod model;

pub use collector::collect;
pub use debts::{DebtKind, DebtSheet, category_label};
pub use model::{Answer, AnswerValue, DebtAnswer, DebtEntry, OnboardingAggregate, questions};
