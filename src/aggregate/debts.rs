//! Debt categories and the writer-side debt selection.

use std::collections::BTreeMap;

use serde_json::Value;

/// The debt categories offered on the debts screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum DebtKind {
    CreditCard,
    Medical,
    Auto,
    BuyNowPayLater,
    Student,
    Personal,
}

impl DebtKind {
    /// All categories, in the order the debts screen lists them.
    pub const ALL: [DebtKind; 6] = [
        DebtKind::CreditCard,
        DebtKind::Medical,
        DebtKind::Auto,
        DebtKind::BuyNowPayLater,
        DebtKind::Student,
        DebtKind::Personal,
    ];

    /// The stable identifier stored in the session.
    pub fn id(&self) -> &'static str {
        match self {
            Self::CreditCard => "credit-card",
            Self::Medical => "medical",
            Self::Auto => "auto",
            Self::BuyNowPayLater => "buy-now",
            Self::Student => "student",
            Self::Personal => "personal",
        }
    }

    /// The human-readable label the aggregate reports.
    pub fn label(&self) -> &'static str {
        match self {
            Self::CreditCard => "Credit card",
            Self::Medical => "Medical debt",
            Self::Auto => "Auto loans",
            Self::BuyNowPayLater => "Buy now, pay later",
            Self::Student => "Student loans",
            Self::Personal => "Personal loans",
        }
    }

    /// Look up a category by its stored identifier.
    pub fn from_id(id: &str) -> Option<DebtKind> {
        Self::ALL.iter().copied().find(|kind| kind.id() == id)
    }
}

impl std::fmt::Display for DebtKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.id())
    }
}

/// Map a stored category identifier to its display label.
///
/// Unknown identifiers pass through unchanged, so sessions written with
/// retired categories still aggregate.
pub fn category_label(id: &str) -> &str {
    DebtKind::from_id(id).map(|kind| kind.label()).unwrap_or(id)
}

/// The debt selection being built on the debts screen.
///
/// Holds raw per-category amount strings as entered. Selections with
/// empty amounts are dropped, matching the screen's continue gate.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DebtSheet {
    amounts: BTreeMap<DebtKind, String>,
}

impl DebtSheet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the amount entered for a category. Whitespace-only input
    /// counts as empty and drops the selection.
    pub fn set_amount(&mut self, kind: DebtKind, amount: &str) {
        let amount = amount.trim();
        if amount.is_empty() {
            self.amounts.remove(&kind);
        } else {
            self.amounts.insert(kind, amount.to_string());
        }
    }

    /// Deselect a category.
    pub fn clear(&mut self, kind: DebtKind) {
        self.amounts.remove(&kind);
    }

    /// Whether no category carries an amount.
    pub fn is_empty(&self) -> bool {
        self.amounts.is_empty()
    }

    /// Render the stored JSON object of category id to raw amount.
    pub fn to_stored_json(&self) -> String {
        let map: serde_json::Map<String, Value> = self
            .amounts
            .iter()
            .map(|(kind, amount)| (kind.id().to_string(), Value::String(amount.clone())))
            .collect();
        Value::Object(map).to_string()
    }
}
