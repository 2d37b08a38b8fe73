//! Owner-scoped record store.
//!
//! One generic pattern instantiated four times (jobs, amounts, costs,
//! readings). Every read, update and delete is filtered by
//! `owner_email = caller`, never by record id alone — that filter is the
//! system's main isolation guarantee, so it lives here and not in the
//! handlers.

use std::marker::PhantomData;

use chrono::{DateTime, Utc};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use sqlx::PgPool;
use thiserror::Error;
use uuid::Uuid;

use crate::models::records::{AmountInfo, CostInfo, JobInfo, OwnedRecord, ReadingInfo};
use crate::uuid::uuidv7;

/// Store errors.
#[derive(Debug, Error)]
pub enum StoreError {
    /// No record matched the (id, owner) pair.
    #[error("record not found")]
    NotFound,

    #[error("Database error: {0}")]
    Db(#[from] sqlx::Error),

    #[error("Payload error: {0}")]
    Payload(#[from] serde_json::Error),
}

/// The four record collections.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollectionKind {
    Jobs,
    Amounts,
    Costs,
    Readings,
}

impl CollectionKind {
    /// Table backing the collection. Fixed set, safe to splice into SQL.
    fn table(self) -> &'static str {
        match self {
            CollectionKind::Jobs => "job_info",
            CollectionKind::Amounts => "amount_info",
            CollectionKind::Costs => "cost_info",
            CollectionKind::Readings => "reading_info",
        }
    }
}

/// Job application collection.
pub const JOBS: Collection<JobInfo> = Collection::new(CollectionKind::Jobs);
/// Income collection.
pub const AMOUNTS: Collection<AmountInfo> = Collection::new(CollectionKind::Amounts);
/// Cost collection.
pub const COSTS: Collection<CostInfo> = Collection::new(CollectionKind::Costs);
/// Reading-schedule collection.
pub const READINGS: Collection<ReadingInfo> = Collection::new(CollectionKind::Readings);

/// Handle to one owner-scoped collection with payload type `T`.
#[derive(Debug)]
pub struct Collection<T> {
    kind: CollectionKind,
    _payload: PhantomData<T>,
}

impl<T> Clone for Collection<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Collection<T> {}

type RecordRow = (Uuid, String, Value, DateTime<Utc>);

impl<T> Collection<T>
where
    T: Serialize + DeserializeOwned,
{
    pub const fn new(kind: CollectionKind) -> Self {
        Self {
            kind,
            _payload: PhantomData,
        }
    }

    fn from_row(&self, row: RecordRow) -> Result<OwnedRecord<T>, StoreError> {
        let (id, owner, payload, created_at) = row;
        Ok(OwnedRecord {
            id,
            owner,
            created_at,
            payload: serde_json::from_value(payload)?,
        })
    }

    /// Insert a record owned by `owner_email`.
    ///
    /// The owner always comes from the authenticated claims. The front-end
    /// spreads its own `email` into every create body; that key (and the
    /// other reserved ones) is stripped from the payload JSON before the
    /// write, so nothing client-supplied can masquerade as ownership.
    pub async fn create(
        &self,
        pool: &PgPool,
        owner_email: &str,
        payload: T,
    ) -> Result<OwnedRecord<T>, StoreError> {
        let id = uuidv7();
        let json = sanitize_payload(serde_json::to_value(&payload)?);
        let payload: T = serde_json::from_value(json.clone())?;
        let created_at = sqlx::query_scalar::<_, DateTime<Utc>>(&format!(
            "INSERT INTO {} (id, owner_email, payload) VALUES ($1, $2, $3) RETURNING created_at",
            self.kind.table()
        ))
        .bind(id)
        .bind(owner_email)
        .bind(&json)
        .fetch_one(pool)
        .await?;

        Ok(OwnedRecord {
            id,
            owner: owner_email.to_string(),
            created_at,
            payload,
        })
    }

    /// List the records owned by `owner_email`, in insertion order.
    pub async fn list(
        &self,
        pool: &PgPool,
        owner_email: &str,
    ) -> Result<Vec<OwnedRecord<T>>, StoreError> {
        let rows = sqlx::query_as::<_, RecordRow>(&format!(
            "SELECT id, owner_email, payload, created_at FROM {} \
             WHERE owner_email = $1 ORDER BY id",
            self.kind.table()
        ))
        .bind(owner_email)
        .fetch_all(pool)
        .await?;

        rows.into_iter().map(|row| self.from_row(row)).collect()
    }

    /// Fetch one record by id, scoped to its owner.
    pub async fn find_by_id(
        &self,
        pool: &PgPool,
        owner_email: &str,
        id: Uuid,
    ) -> Result<Option<OwnedRecord<T>>, StoreError> {
        let row = sqlx::query_as::<_, RecordRow>(&format!(
            "SELECT id, owner_email, payload, created_at FROM {} \
             WHERE id = $1 AND owner_email = $2",
            self.kind.table()
        ))
        .bind(id)
        .bind(owner_email)
        .fetch_optional(pool)
        .await?;

        row.map(|row| self.from_row(row)).transpose()
    }

    /// Delete one record by id, scoped to its owner.
    ///
    /// `NotFound` covers both a missing id and a record owned by someone
    /// else; callers cannot tell the cases apart.
    pub async fn delete_by_id(
        &self,
        pool: &PgPool,
        owner_email: &str,
        id: Uuid,
    ) -> Result<(), StoreError> {
        let result = sqlx::query(&format!(
            "DELETE FROM {} WHERE id = $1 AND owner_email = $2",
            self.kind.table()
        ))
        .bind(id)
        .bind(owner_email)
        .execute(pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(StoreError::NotFound);
        }
        Ok(())
    }

    /// Replace the payload fields present in `patch`, scoped to the owner.
    ///
    /// Last-writer-wins; concurrent updates to the same record clobber each
    /// other, which is acceptable for single-owner records.
    pub async fn update_by_id(
        &self,
        pool: &PgPool,
        owner_email: &str,
        id: Uuid,
        patch: Value,
    ) -> Result<(), StoreError> {
        let patch = sanitize_payload(patch);
        let result = sqlx::query(&format!(
            "UPDATE {} SET payload = payload || $3 WHERE id = $1 AND owner_email = $2",
            self.kind.table()
        ))
        .bind(id)
        .bind(owner_email)
        .bind(&patch)
        .execute(pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(StoreError::NotFound);
        }
        Ok(())
    }
}

/// Reserved keys a payload or patch may not carry into the store: record
/// identity and ownership live in their own columns and are never
/// client-writable.
const RESERVED_KEYS: [&str; 4] = ["id", "_id", "email", "createdAt"];

/// Reduce client JSON to a plain object with reserved keys removed.
/// Non-object input degrades to an empty object.
fn sanitize_payload(payload: Value) -> Value {
    match payload {
        Value::Object(mut map) => {
            for key in RESERVED_KEYS {
                map.remove(key);
            }
            Value::Object(map)
        }
        _ => Value::Object(serde_json::Map::new()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn collections_map_to_their_tables() {
        assert_eq!(CollectionKind::Jobs.table(), "job_info");
        assert_eq!(CollectionKind::Amounts.table(), "amount_info");
        assert_eq!(CollectionKind::Costs.table(), "cost_info");
        assert_eq!(CollectionKind::Readings.table(), "reading_info");
    }

    #[test]
    fn sanitize_payload_strips_reserved_keys() {
        let patch = sanitize_payload(json!({
            "name": "Acme",
            "email": "spoof@x.com",
            "id": "11111111-1111-1111-1111-111111111111",
            "_id": "abc",
            "createdAt": "2026-01-01T00:00:00Z"
        }));
        assert_eq!(patch, json!({"name": "Acme"}));
    }

    #[test]
    fn sanitize_payload_rejects_non_objects() {
        assert_eq!(sanitize_payload(json!(["a", "b"])), json!({}));
        assert_eq!(sanitize_payload(json!("name")), json!({}));
        assert_eq!(sanitize_payload(Value::Null), json!({}));
    }

    #[test]
    fn create_sanitization_drops_spoofed_owner_but_keeps_extras() {
        // The client's create body carries email/username/date alongside the
        // form fields; only the reserved keys disappear.
        let job: crate::models::records::JobInfo = serde_json::from_value(json!({
            "name": "Acme",
            "email": "spoof@x.com",
            "username": "Ann",
            "date": "2026-01-15T10:00:00.000Z"
        }))
        .unwrap();
        let stored = sanitize_payload(serde_json::to_value(&job).unwrap());
        assert_eq!(stored["name"], "Acme");
        assert_eq!(stored["username"], "Ann");
        assert_eq!(stored["date"], "2026-01-15T10:00:00.000Z");
        assert!(stored.get("email").is_none());
    }

    #[test]
    fn from_row_rehydrates_payload() {
        let row: RecordRow = (
            Uuid::nil(),
            "a@x.com".into(),
            json!({"total": 10.0, "source": "salary"}),
            DateTime::<Utc>::UNIX_EPOCH,
        );
        let record = AMOUNTS.from_row(row).unwrap();
        assert_eq!(record.owner, "a@x.com");
        assert_eq!(record.payload.source, "salary");
    }

    #[test]
    fn from_row_surfaces_malformed_payloads() {
        let row: RecordRow = (
            Uuid::nil(),
            "a@x.com".into(),
            json!({"unexpected": true}),
            DateTime::<Utc>::UNIX_EPOCH,
        );
        assert!(matches!(
            AMOUNTS.from_row(row),
            Err(StoreError::Payload(_))
        ));
    }
}
