//! Owned record payloads for the four collections.
//!
//! The front-end posts form values as strings and spreads extra keys
//! (`username`, `date`, ...) into every create body, so the payload types are
//! deliberately lenient: amounts accept string or number, non-essential
//! fields are optional, and unrecognized keys are kept in a flattened map so
//! they round-trip back to the client unchanged. Only the owner key is
//! stripped, by the store, never here.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use uuid::Uuid;

/// A stored record: identity of the owner plus a variant-specific payload.
///
/// The owner is stamped server-side from the authenticated claims and lives
/// in its own column; the store strips any owner key from the payload JSON
/// before it is written.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OwnedRecord<T> {
    pub id: Uuid,
    /// Owner email, serialized as `email` to match the front-end.
    #[serde(rename = "email")]
    pub owner: String,
    pub created_at: DateTime<Utc>,
    #[serde(flatten)]
    pub payload: T,
}

/// A monetary amount as posted by the form: a number, or a numeric string.
/// Serialized back in whatever form it arrived.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Amount {
    Number(f64),
    Text(String),
}

/// Job application entry. Only the name is required; the edit form PUTs
/// partial bodies and the dashboard tolerates missing columns.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobInfo {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub apply_username: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Income entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AmountInfo {
    pub total: Amount,
    pub source: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Cost entry. `cost` is the purpose label, matching the front-end form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CostInfo {
    pub cost: String,
    pub amount: Amount,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Reading-schedule entry. Dates and times stay separate strings; the
/// countdown is computed client-side.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReadingInfo {
    pub name: String,
    pub unit: String,
    pub topic: String,
    pub start_date: String,
    pub start_time: String,
    pub end_date: String,
    pub end_time: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn job_info_uses_camel_case_wire_names() {
        let job: JobInfo = serde_json::from_str(
            r#"{"name":"Acme","link":"https://acme.example","applyUsername":"ann","password":"s3cret"}"#,
        )
        .unwrap();
        assert_eq!(job.apply_username.as_deref(), Some("ann"));

        let json = serde_json::to_value(&job).unwrap();
        assert!(json.get("applyUsername").is_some());
        assert!(json.get("apply_username").is_none());
    }

    #[test]
    fn job_with_only_a_name_round_trips_unchanged() {
        let job: JobInfo = serde_json::from_str(r#"{"name":"Acme"}"#).unwrap();
        assert_eq!(serde_json::to_value(&job).unwrap(), json!({"name": "Acme"}));
    }

    #[test]
    fn amounts_accept_form_strings_and_numbers() {
        // The form posts "500"; programmatic clients post 500.
        let from_form: AmountInfo =
            serde_json::from_str(r#"{"total":"500","source":"salary"}"#).unwrap();
        assert_eq!(from_form.total, Amount::Text("500".into()));

        let from_number: AmountInfo =
            serde_json::from_str(r#"{"total":500.5,"source":"salary"}"#).unwrap();
        assert_eq!(from_number.total, Amount::Number(500.5));

        // Each serializes back in the form it arrived.
        assert_eq!(serde_json::to_value(&from_form).unwrap()["total"], json!("500"));
        assert_eq!(
            serde_json::to_value(&from_number).unwrap()["total"],
            json!(500.5)
        );
    }

    #[test]
    fn client_extras_survive_the_round_trip() {
        // The front-end spreads {email, username, date} into every create
        // body; username and date must come back out for the dashboard's
        // month bucketing. The owner key is stripped later, by the store.
        let amount: AmountInfo = serde_json::from_str(
            r#"{"total":"120.5","source":"salary","email":"a@x.com","username":"Ann","date":"2026-01-15T10:00:00.000Z"}"#,
        )
        .unwrap();
        let json = serde_json::to_value(&amount).unwrap();
        assert_eq!(json["username"], "Ann");
        assert_eq!(json["date"], "2026-01-15T10:00:00.000Z");
        assert_eq!(json["email"], "a@x.com");
    }

    #[test]
    fn owned_record_flattens_payload() {
        let record = OwnedRecord {
            id: Uuid::nil(),
            owner: "a@x.com".into(),
            created_at: DateTime::<Utc>::UNIX_EPOCH,
            payload: CostInfo {
                cost: "groceries".into(),
                amount: Amount::Number(42.0),
                extra: Map::new(),
            },
        };
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["email"], "a@x.com");
        assert_eq!(json["cost"], "groceries");
        assert_eq!(json["amount"], 42.0);
        assert!(json.get("createdAt").is_some());
    }

    #[test]
    fn reading_info_round_trips_schedule_strings() {
        let reading: ReadingInfo = serde_json::from_str(
            r#"{"name":"Ch 3","unit":"2","topic":"Ownership","startDate":"2026-09-01","startTime":"18:00","endDate":"2026-09-02","endTime":"20:30"}"#,
        )
        .unwrap();
        assert_eq!(reading.start_date, "2026-09-01");
        assert_eq!(reading.end_time, "20:30");
    }
}
