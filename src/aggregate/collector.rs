//! Aggregation of stored answers into the submission payload.

use chrono::{DateTime, Local, Utc};

use crate::aggregate::debts::category_label;
use crate::aggregate::model::{
    Answer, AnswerValue, DebtAnswer, DebtEntry, OnboardingAggregate, questions,
};
use crate::session::{SessionStore, field_keys};

/// Collect every stored answer into the submission payload.
///
/// Never fails: absent or empty fields are skipped and an unreadable
/// debt selection downgrades to the no-debt answer. Records appear in
/// wizard order regardless of when the answers were written.
pub async fn collect(store: &dyn SessionStore) -> OnboardingAggregate {
    let mut responses = Vec::new();

    if let Some(name) = read_present(store, field_keys::FIRST_NAME).await {
        responses.push(Answer {
            question: questions::NAME.to_string(),
            answer: AnswerValue::Text(name),
        });
    }

    if let Some(goal) = read_present(store, field_keys::GOAL).await {
        responses.push(Answer {
            question: questions::GOAL.to_string(),
            answer: AnswerValue::Text(goal),
        });
    }

    if let Some(income) = read_present(store, field_keys::MONTHLY_INCOME).await {
        responses.push(Answer {
            question: questions::INCOME.to_string(),
            answer: AnswerValue::Text(format!("${income}")),
        });
    }

    if let Some(rent) = read_present(store, field_keys::MONTHLY_RENT).await {
        responses.push(Answer {
            question: questions::RENT.to_string(),
            answer: AnswerValue::Text(format!("${rent}")),
        });
    }

    if let Some(raw) = read_present(store, field_keys::USER_DEBTS).await {
        responses.push(Answer {
            question: questions::DEBTS.to_string(),
            answer: AnswerValue::Debts(parse_debt_answer(&raw)),
        });
    }

    let now = Utc::now();
    OnboardingAggregate {
        responses,
        timestamp: now,
        completed_at: human_timestamp(now.with_timezone(&Local)),
    }
}

/// Read a field, treating the empty string as absent.
async fn read_present(store: &dyn SessionStore, key: &str) -> Option<String> {
    store.get(key).await.filter(|value| !value.is_empty())
}

/// Parse the stored debt selection.
///
/// Anything other than a JSON object downgrades to the no-debt answer,
/// as does an empty object. Amounts are `$`-prefixed verbatim.
fn parse_debt_answer(raw: &str) -> DebtAnswer {
    let parsed: serde_json::Value = match serde_json::from_str(raw) {
        Ok(value) => value,
        Err(_) => return DebtAnswer::none(),
    };
    let Some(map) = parsed.as_object() else {
        return DebtAnswer::none();
    };
    if map.is_empty() {
        return DebtAnswer::none();
    }

    let debts = map
        .iter()
        .map(|(id, amount)| DebtEntry {
            category: category_label(id).to_string(),
            amount: format!("${}", amount_text(amount)),
        })
        .collect();

    DebtAnswer {
        has_debts: true,
        debts,
    }
}

/// Render a stored amount. Strings come through bare, anything else in
/// its JSON form.
fn amount_text(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Render the instant the way a person reads it, e.g.
/// "8/25/2026, 3:04:05 PM".
fn human_timestamp(t: DateTime<Local>) -> String {
    t.format("%-m/%-d/%Y, %-I:%M:%S %p").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::MemoryStore;
    use chrono::{Datelike, TimeZone};

    async fn store_with(pairs: &[(&str, &str)]) -> MemoryStore {
        let store = MemoryStore::new();
        for (key, value) in pairs {
            store.set(key, value).await.unwrap();
        }
        store
    }

    #[tokio::test]
    async fn empty_store_yields_no_responses() {
        let store = MemoryStore::new();
        let aggregate = collect(&store).await;
        assert!(aggregate.responses.is_empty());
        assert!(!aggregate.completed_at.is_empty());
    }

    #[tokio::test]
    async fn partial_fields_keep_wizard_order() {
        // Written out of order; collected in wizard order.
        let store = store_with(&[
            (field_keys::MONTHLY_RENT, "1500"),
            (field_keys::FIRST_NAME, "Ada"),
        ])
        .await;

        let aggregate = collect(&store).await;
        assert_eq!(aggregate.responses.len(), 2);
        assert_eq!(aggregate.responses[0].question, questions::NAME);
        assert_eq!(
            aggregate.responses[0].answer,
            AnswerValue::Text("Ada".to_string())
        );
        assert_eq!(aggregate.responses[1].question, questions::RENT);
        assert_eq!(
            aggregate.responses[1].answer,
            AnswerValue::Text("$1500".to_string())
        );
    }

    #[tokio::test]
    async fn income_is_prefixed_verbatim() {
        // No numeric validation on amounts.
        let store = store_with(&[(field_keys::MONTHLY_INCOME, "4200.50 approx")]).await;
        let aggregate = collect(&store).await;
        assert_eq!(
            aggregate.responses[0].answer,
            AnswerValue::Text("$4200.50 approx".to_string())
        );
    }

    #[tokio::test]
    async fn empty_string_fields_are_skipped() {
        let store = store_with(&[
            (field_keys::FIRST_NAME, ""),
            (field_keys::GOAL, "Optimizing my subscriptions"),
        ])
        .await;

        let aggregate = collect(&store).await;
        assert_eq!(aggregate.responses.len(), 1);
        assert_eq!(aggregate.responses[0].question, questions::GOAL);
    }

    #[tokio::test]
    async fn debts_map_to_labels_and_prefixed_amounts() {
        let store = store_with(&[(
            field_keys::USER_DEBTS,
            r#"{"credit-card":"500","student":"12000"}"#,
        )])
        .await;

        let aggregate = collect(&store).await;
        assert_eq!(aggregate.responses.len(), 1);
        assert_eq!(aggregate.responses[0].question, questions::DEBTS);
        assert_eq!(
            aggregate.responses[0].answer,
            AnswerValue::Debts(DebtAnswer {
                has_debts: true,
                debts: vec![
                    DebtEntry {
                        category: "Credit card".to_string(),
                        amount: "$500".to_string(),
                    },
                    DebtEntry {
                        category: "Student loans".to_string(),
                        amount: "$12000".to_string(),
                    },
                ],
            })
        );
    }

    #[tokio::test]
    async fn debt_entries_aggregate_in_category_id_order() {
        // Stored key order does not survive the parse; ids come out
        // sorted, so the aggregate is deterministic either way.
        let store = store_with(&[(
            field_keys::USER_DEBTS,
            r#"{"student":"100","auto":"300"}"#,
        )])
        .await;

        let aggregate = collect(&store).await;
        let AnswerValue::Debts(ref debts) = aggregate.responses[0].answer else {
            panic!("expected debt answer");
        };
        let categories: Vec<_> = debts.debts.iter().map(|d| d.category.as_str()).collect();
        assert_eq!(categories, ["Auto loans", "Student loans"]);
    }

    #[tokio::test]
    async fn unknown_debt_category_passes_through() {
        let store = store_with(&[(field_keys::USER_DEBTS, r#"{"crypto-margin":"9000"}"#)]).await;
        let aggregate = collect(&store).await;
        let AnswerValue::Debts(ref debts) = aggregate.responses[0].answer else {
            panic!("expected debt answer");
        };
        assert_eq!(debts.debts[0].category, "crypto-margin");
        assert_eq!(debts.debts[0].amount, "$9000");
    }

    #[tokio::test]
    async fn empty_debt_object_is_the_no_debt_answer() {
        let store = store_with(&[(field_keys::USER_DEBTS, "{}")]).await;
        let aggregate = collect(&store).await;
        assert_eq!(
            aggregate.responses[0].answer,
            AnswerValue::Debts(DebtAnswer::none())
        );
    }

    #[tokio::test]
    async fn malformed_debts_downgrade_to_no_debt() {
        for raw in ["not-json", "[1,2]", "\"just a string\"", "null", "42"] {
            let store = store_with(&[(field_keys::USER_DEBTS, raw)]).await;
            let aggregate = collect(&store).await;
            assert_eq!(
                aggregate.responses[0].answer,
                AnswerValue::Debts(DebtAnswer::none()),
                "stored {raw:?} should downgrade to the no-debt answer"
            );
        }
    }

    #[tokio::test]
    async fn absent_debts_field_is_omitted() {
        let store = store_with(&[(field_keys::FIRST_NAME, "Ada")]).await;
        let aggregate = collect(&store).await;
        assert_eq!(aggregate.responses.len(), 1);
        assert!(
            aggregate
                .responses
                .iter()
                .all(|r| r.question != questions::DEBTS)
        );
    }

    #[tokio::test]
    async fn non_string_debt_amounts_render_in_json_form() {
        let store = store_with(&[(field_keys::USER_DEBTS, r#"{"medical":750}"#)]).await;
        let aggregate = collect(&store).await;
        let AnswerValue::Debts(ref debts) = aggregate.responses[0].answer else {
            panic!("expected debt answer");
        };
        assert_eq!(debts.debts[0].amount, "$750");
    }

    #[tokio::test]
    async fn collected_aggregate_roundtrips_through_serde() {
        let store = store_with(&[
            (field_keys::FIRST_NAME, "Ada"),
            (field_keys::GOAL, "Cutting my monthly spending"),
            (field_keys::MONTHLY_INCOME, "4200"),
            (field_keys::MONTHLY_RENT, "1500"),
            (field_keys::USER_DEBTS, r#"{"auto":"300"}"#),
        ])
        .await;

        let aggregate = collect(&store).await;
        assert_eq!(aggregate.responses.len(), 5);

        let json = serde_json::to_string(&aggregate).unwrap();
        let parsed: OnboardingAggregate = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, aggregate);
    }

    #[test]
    fn human_timestamp_format() {
        let instant = Local.with_ymd_and_hms(2026, 8, 25, 15, 4, 5).unwrap();
        assert_eq!(human_timestamp(instant), "8/25/2026, 3:04:05 PM");
    }

    #[tokio::test]
    async fn timestamps_describe_the_same_instant() {
        let store = MemoryStore::new();
        let aggregate = collect(&store).await;
        let year = aggregate.timestamp.with_timezone(&Local).year().to_string();
        assert!(
            aggregate.completed_at.contains(&year),
            "completed_at {:?} should mention year {year}",
            aggregate.completed_at
        );
    }
}
