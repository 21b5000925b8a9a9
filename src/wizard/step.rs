//! Wizard step state machine: tracks which screen the user is on.

use serde::{Deserialize, Serialize};

use crate::aggregate::questions;
use crate::session::field_keys;

/// The steps of the onboarding wizard.
///
/// Progresses linearly: Name → Goal → Income → Rent → Debts →
/// Processing → Complete. Back navigation exists only between the five
/// data steps; once processing starts there is no way back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WizardStep {
    Name,
    Goal,
    Income,
    Rent,
    Debts,
    Processing,
    Complete,
}

impl WizardStep {
    /// Check if a transition from `self` to `target` is valid.
    pub fn can_transition_to(&self, target: WizardStep) -> bool {
        use WizardStep::*;
        matches!(
            (self, target),
            (Name, Goal)
                | (Goal, Income)
                | (Income, Rent)
                | (Rent, Debts)
                | (Debts, Processing)
                | (Processing, Complete)
                | (Goal, Name)
                | (Income, Goal)
                | (Rent, Income)
                | (Debts, Rent)
        )
    }

    /// Whether this step is terminal (the wizard is done).
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Complete)
    }

    /// Get the next step in the linear progression, if any.
    pub fn next(&self) -> Option<WizardStep> {
        use WizardStep::*;
        match self {
            Name => Some(Goal),
            Goal => Some(Income),
            Income => Some(Rent),
            Rent => Some(Debts),
            Debts => Some(Processing),
            Processing => Some(Complete),
            Complete => None,
        }
    }

    /// Get the previous data step, if back navigation is allowed from here.
    pub fn prev(&self) -> Option<WizardStep> {
        use WizardStep::*;
        match self {
            Name => None,
            Goal => Some(Name),
            Income => Some(Goal),
            Rent => Some(Income),
            Debts => Some(Rent),
            Processing | Complete => None,
        }
    }

    /// The question this data step asks, verbatim as the aggregate
    /// reports it. `None` for the processing and terminal steps.
    pub fn prompt(&self) -> Option<&'static str> {
        use WizardStep::*;
        match self {
            Name => Some(questions::NAME),
            Goal => Some(questions::GOAL),
            Income => Some(questions::INCOME),
            Rent => Some(questions::RENT),
            Debts => Some(questions::DEBTS),
            Processing | Complete => None,
        }
    }

    /// The session key this data step writes. `None` for the processing
    /// and terminal steps.
    pub fn field_key(&self) -> Option<&'static str> {
        use WizardStep::*;
        match self {
            Name => Some(field_keys::FIRST_NAME),
            Goal => Some(field_keys::GOAL),
            Income => Some(field_keys::MONTHLY_INCOME),
            Rent => Some(field_keys::MONTHLY_RENT),
            Debts => Some(field_keys::USER_DEBTS),
            Processing | Complete => None,
        }
    }
}

impl Default for WizardStep {
    fn default() -> Self {
        Self::Name
    }
}

impl std::fmt::Display for WizardStep {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Name => "name",
            Self::Goal => "goal",
            Self::Income => "income",
            Self::Rent => "rent",
            Self::Debts => "debts",
            Self::Processing => "processing",
            Self::Complete => "complete",
        };
        write!(f, "{s}")
    }
}

/// The motivation options offered on the goal screen.
///
/// The session stores the option's label verbatim, so the labels here
/// are part of the data contract, not just display copy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GoalChoice {
    CutSpending,
    SaveForGoal,
    UnderstandSpending,
    OptimizeSubscriptions,
}

impl GoalChoice {
    /// All options, in the order the goal screen lists them.
    pub const ALL: [GoalChoice; 4] = [
        GoalChoice::CutSpending,
        GoalChoice::SaveForGoal,
        GoalChoice::UnderstandSpending,
        GoalChoice::OptimizeSubscriptions,
    ];

    /// The label shown to the user and stored in the session.
    pub fn label(&self) -> &'static str {
        match self {
            Self::CutSpending => "Cutting my monthly spending",
            Self::SaveForGoal => "Saving for a specific goal (e.g., vacation, down payment)",
            Self::UnderstandSpending => "Understanding where my money is going",
            Self::OptimizeSubscriptions => "Optimizing my subscriptions",
        }
    }
}

impl std::fmt::Display for GoalChoice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}
