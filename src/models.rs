use serde::{Deserialize, Serialize};

use crate::suggester::parse_amount;

/// In-progress transaction being edited before submission.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DraftTransaction {
    pub notes: String,
    pub amount: String,
    pub department: String,
    pub transaction_type: String,
    pub category: String,
}

/// One candidate returned by the category predictor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SuggestionMatch {
    pub category: String,
    #[serde(default)]
    pub similarity_score: f64,
    #[serde(default)]
    pub sample_notes: String,
    #[serde(default)]
    pub transaction_id: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PredictionResponse {
    #[serde(default)]
    pub predicted_category: String,
    #[serde(default)]
    pub confidence: f64,
    #[serde(default)]
    pub top_matches: Vec<SuggestionMatch>,
}

/// Either a full predictor response or just its `top_matches` array.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum PredictorPayload {
    Matches(Vec<SuggestionMatch>),
    Response(PredictionResponse),
}

impl From<PredictorPayload> for PredictionResponse {
    fn from(payload: PredictorPayload) -> Self {
        match payload {
            PredictorPayload::Matches(top_matches) => PredictionResponse {
                top_matches,
                ..Default::default()
            },
            PredictorPayload::Response(resp) => resp,
        }
    }
}

/// Body of the predict-category request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictRequest {
    pub notes: String,
    pub type_of_transaction: String,
    pub amount: f64,
}

impl PredictRequest {
    pub fn from_draft(draft: &DraftTransaction) -> Self {
        Self {
            notes: draft.notes.clone(),
            type_of_transaction: draft.transaction_type.clone(),
            amount: amount_or_zero(&draft.amount),
        }
    }
}

/// A stored transaction as listed by the ledger API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub id: i64,
    pub date: String,
    pub amount: f64,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub notes: String,
    pub type_of_transaction: String,
    #[serde(default)]
    pub created_at: String,
}

impl Transaction {
    pub fn is_credit(&self) -> bool {
        self.type_of_transaction.eq_ignore_ascii_case("credit")
    }
}

/// Submission body for a completed draft.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewTransaction {
    pub date: String,
    pub amount: f64,
    pub category: String,
    pub notes: String,
    pub type_of_transaction: String,
}

impl NewTransaction {
    pub fn from_draft(draft: &DraftTransaction, date: chrono::DateTime<chrono::Utc>) -> Self {
        Self {
            date: date.to_rfc3339_opts(chrono::SecondsFormat::Millis, true),
            amount: amount_or_zero(&draft.amount),
            category: draft.category.clone(),
            notes: draft.notes.clone(),
            type_of_transaction: draft.transaction_type.clone(),
        }
    }
}

fn amount_or_zero(raw: &str) -> f64 {
    let amount = parse_amount(raw);
    if amount.is_nan() {
        0.0
    } else {
        amount
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_decode_prediction_response() {
        let json = r#"{
            "predicted_category": "Food",
            "confidence": 0.91,
            "top_matches": [
                {"category": "Food", "similarity_score": 0.91, "sample_notes": "lunch", "transaction_id": 7}
            ]
        }"#;
        let resp: PredictionResponse = serde_json::from_str(json).unwrap();
        assert_eq!(resp.predicted_category, "Food");
        assert_eq!(resp.top_matches.len(), 1);
        assert_eq!(resp.top_matches[0].transaction_id, 7);
        assert_eq!(resp.top_matches[0].sample_notes, "lunch");
    }

    #[test]
    fn test_missing_top_matches_is_empty() {
        let resp: PredictionResponse = serde_json::from_str(r#"{"confidence": 0.2}"#).unwrap();
        assert!(resp.top_matches.is_empty());
    }

    #[test]
    fn test_payload_accepts_bare_matches() {
        let json = r#"[{"category": "Rent", "similarity_score": 0.4, "sample_notes": "", "transaction_id": 2}]"#;
        let payload: PredictorPayload = serde_json::from_str(json).unwrap();
        let resp = PredictionResponse::from(payload);
        assert_eq!(resp.top_matches[0].category, "Rent");
        assert!(resp.predicted_category.is_empty());
    }

    #[test]
    fn test_payload_accepts_full_response() {
        let json = r#"{"predicted_category": "Rent", "top_matches": []}"#;
        let payload: PredictorPayload = serde_json::from_str(json).unwrap();
        let resp = PredictionResponse::from(payload);
        assert_eq!(resp.predicted_category, "Rent");
        assert!(resp.top_matches.is_empty());
    }

    #[test]
    fn test_draft_uses_camel_case_type() {
        let draft: DraftTransaction =
            serde_json::from_str(r#"{"transactionType": "expense", "amount": "12"}"#).unwrap();
        assert_eq!(draft.transaction_type, "expense");
        assert_eq!(draft.amount, "12");
        assert!(draft.notes.is_empty());
    }

    #[test]
    fn test_predict_request_zeroes_bad_amount() {
        let draft = DraftTransaction {
            amount: "abc".to_string(),
            transaction_type: "expense".to_string(),
            ..Default::default()
        };
        let req = PredictRequest::from_draft(&draft);
        assert_eq!(req.amount, 0.0);
        assert_eq!(req.notes, "");
        assert_eq!(req.type_of_transaction, "expense");
    }

    #[test]
    fn test_new_transaction_from_draft() {
        let draft = DraftTransaction {
            notes: "team lunch".to_string(),
            amount: "249.50".to_string(),
            department: "hr".to_string(),
            transaction_type: "Debit".to_string(),
            category: "General".to_string(),
        };
        let date = chrono::Utc.with_ymd_and_hms(2025, 3, 4, 10, 0, 0).unwrap();
        let txn = NewTransaction::from_draft(&draft, date);
        assert_eq!(txn.date, "2025-03-04T10:00:00.000Z");
        assert_eq!(txn.amount, 249.5);
        assert_eq!(txn.category, "General");
    }

    #[test]
    fn test_is_credit_ignores_case() {
        let txn = Transaction {
            id: 1,
            date: "2025-01-01".to_string(),
            amount: 10.0,
            category: String::new(),
            notes: String::new(),
            type_of_transaction: "CREDIT".to_string(),
            created_at: String::new(),
        };
        assert!(txn.is_credit());
    }
}
