//! Wire-format types for the onboarding submission payload.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One question/answer record in the submission payload.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Answer {
    pub question: String,
    pub answer: AnswerValue,
}

/// An answer is either plain text or the structured debt payload.
///
/// Untagged, so text answers serialize as bare strings and the debt
/// answer as an object, exactly as the backend expects.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum AnswerValue {
    Text(String),
    Debts(DebtAnswer),
}

/// The structured answer to the debt question.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DebtAnswer {
    pub has_debts: bool,
    pub debts: Vec<DebtEntry>,
}

impl DebtAnswer {
    /// The answer reported when the user has no debt, and the fallback
    /// when the stored selection cannot be read.
    pub fn none() -> Self {
        Self {
            has_debts: false,
            debts: Vec::new(),
        }
    }
}

/// A single debt line: human-readable category plus formatted amount.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DebtEntry {
    pub category: String,
    pub amount: String,
}

/// The complete onboarding submission payload.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct OnboardingAggregate {
    /// One record per answered question, in wizard order.
    pub responses: Vec<Answer>,
    /// Machine-sortable collection instant.
    pub timestamp: DateTime<Utc>,
    /// Human-readable rendering of the same instant.
    pub completed_at: String,
}

/// The question copy the wizard asks and the aggregate reports.
///
/// The backend keys off these strings, so they are part of the data
/// contract.
pub mod questions {
    pub const NAME: &str = "What should we call you?";
    pub const GOAL: &str = "What brings you to Mono today?";
    pub const INCOME: &str = "How much do you earn monthly after tax?";
    pub const RENT: &str = "How much do you pay for rent monthly?";
    pub const DEBTS: &str = "Do you currently have any debt?";
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_answer_serializes_as_bare_string() {
        let answer = Answer {
            question: questions::INCOME.to_string(),
            answer: AnswerValue::Text("$4200".to_string()),
        };
        let json = serde_json::to_value(&answer).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "question": "How much do you earn monthly after tax?",
                "answer": "$4200"
            })
        );
    }

    #[test]
    fn debt_answer_uses_camel_case_keys() {
        let answer = DebtAnswer {
            has_debts: true,
            debts: vec![DebtEntry {
                category: "Credit card".to_string(),
                amount: "$500".to_string(),
            }],
        };
        let json = serde_json::to_value(&answer).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "hasDebts": true,
                "debts": [{"category": "Credit card", "amount": "$500"}]
            })
        );
    }

    #[test]
    fn aggregate_serializes_completed_at_camel_case() {
        let aggregate = OnboardingAggregate {
            responses: Vec::new(),
            timestamp: Utc::now(),
            completed_at: "8/25/2026, 3:04:05 PM".to_string(),
        };
        let json = serde_json::to_value(&aggregate).unwrap();
        assert!(json.get("completedAt").is_some());
        assert!(json.get("completed_at").is_none());
    }

    #[test]
    fn aggregate_roundtrips_through_serde() {
        let aggregate = OnboardingAggregate {
            responses: vec![
                Answer {
                    question: questions::NAME.to_string(),
                    answer: AnswerValue::Text("Ada".to_string()),
                },
                Answer {
                    question: questions::DEBTS.to_string(),
                    answer: AnswerValue::Debts(DebtAnswer {
                        has_debts: true,
                        debts: vec![DebtEntry {
                            category: "Student loans".to_string(),
                            amount: "$12000".to_string(),
                        }],
                    }),
                },
            ],
            timestamp: Utc::now(),
            completed_at: "8/25/2026, 3:04:05 PM".to_string(),
        };

        let json = serde_json::to_string(&aggregate).unwrap();
        let parsed: OnboardingAggregate = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, aggregate);
    }

    #[test]
    fn untagged_answer_deserializes_both_shapes() {
        let text: AnswerValue = serde_json::from_str("\"$1500\"").unwrap();
        assert_eq!(text, AnswerValue::Text("$1500".to_string()));

        let debts: AnswerValue =
            serde_json::from_str(r#"{"hasDebts":false,"debts":[]}"#).unwrap();
        assert_eq!(debts, AnswerValue::Debts(DebtAnswer::none()));
    }
}
