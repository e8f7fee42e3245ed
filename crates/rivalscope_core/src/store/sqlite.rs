//! SQLite-backed competitor store.
//!
//! # Responsibility
//! - Implement [`CompetitorStore`] over the `competitors` table.
//! - Return records in the store's native loose shape: snake_case keys,
//!   structured sub-fields as the TEXT the encoder originally wrote.
//!
//! # Invariants
//! - `create` assigns a fresh UUIDv4 id and never trusts a caller id.
//! - Listing is scoped by `user_id` and ordered by `created_at` descending.

use crate::store::{CompetitorStore, RawRecord, StoreError, StoreResult};
use rusqlite::{params, Connection, Row};
use serde_json::Value;
use uuid::Uuid;

const COMPETITOR_SELECT_SQL: &str = "SELECT
    id,
    name,
    website,
    description,
    industry,
    size,
    location,
    logo_url,
    social_media,
    metrics,
    products,
    strengths,
    weaknesses,
    user_id,
    created_at,
    last_updated
FROM competitors";

/// Columns the record body may set. `id` is store-owned; `user_id` and
/// `created_at` are write-once on create.
const BODY_COLUMNS: &[&str] = &[
    "name",
    "website",
    "description",
    "industry",
    "size",
    "location",
    "logo_url",
    "social_media",
    "metrics",
    "products",
    "strengths",
    "weaknesses",
    "last_updated",
];

/// SQLite implementation of the competitor document store.
pub struct SqliteCompetitorStore<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteCompetitorStore<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl CompetitorStore for SqliteCompetitorStore<'_> {
    fn list_for_owner(&self, user_id: &str) -> StoreResult<Vec<RawRecord>> {
        let mut stmt = self.conn.prepare(&format!(
            "{COMPETITOR_SELECT_SQL}
             WHERE user_id = ?1
             ORDER BY created_at DESC, id ASC;"
        ))?;

        let mut rows = stmt.query(params![user_id])?;
        let mut records = Vec::new();
        while let Some(row) = rows.next()? {
            records.push(raw_record_from_row(row)?);
        }

        Ok(records)
    }

    fn create(&self, record: &RawRecord) -> StoreResult<String> {
        let id = Uuid::new_v4().to_string();

        self.conn.execute(
            "INSERT INTO competitors (
                id,
                name,
                website,
                description,
                industry,
                size,
                location,
                logo_url,
                social_media,
                metrics,
                products,
                strengths,
                weaknesses,
                user_id,
                created_at,
                last_updated
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13, ?14, ?15, ?16);",
            params![
                id,
                record_text(record, "name"),
                record_text(record, "website"),
                record_text(record, "description"),
                record_text(record, "industry"),
                record_text_or(record, "size", "startup"),
                record_text(record, "location"),
                record_text(record, "logo_url"),
                record_text(record, "social_media"),
                record_text(record, "metrics"),
                record_text(record, "products"),
                record_text(record, "strengths"),
                record_text(record, "weaknesses"),
                record_text(record, "user_id"),
                record_text(record, "created_at"),
                record_text(record, "last_updated"),
            ],
        )?;

        Ok(id)
    }

    fn update(&self, id: &str, record: &RawRecord) -> StoreResult<()> {
        let assignments: Vec<String> = BODY_COLUMNS
            .iter()
            .enumerate()
            .map(|(index, column)| format!("{column} = ?{}", index + 1))
            .collect();
        let sql = format!(
            "UPDATE competitors SET {} WHERE id = ?{};",
            assignments.join(", "),
            BODY_COLUMNS.len() + 1
        );

        let mut values: Vec<String> = BODY_COLUMNS
            .iter()
            .map(|column| record_text(record, column))
            .collect();
        values.push(id.to_string());

        let changed = self
            .conn
            .execute(&sql, rusqlite::params_from_iter(values))?;
        if changed == 0 {
            return Err(StoreError::NotFound(id.to_string()));
        }

        Ok(())
    }

    fn delete(&self, id: &str) -> StoreResult<()> {
        let changed = self
            .conn
            .execute("DELETE FROM competitors WHERE id = ?1;", [id])?;
        if changed == 0 {
            return Err(StoreError::NotFound(id.to_string()));
        }

        Ok(())
    }
}

fn raw_record_from_row(row: &Row<'_>) -> StoreResult<RawRecord> {
    let mut record = RawRecord::new();
    insert_text(&mut record, row, "id")?;
    insert_text(&mut record, row, "name")?;
    insert_text(&mut record, row, "website")?;
    insert_text(&mut record, row, "description")?;
    insert_text(&mut record, row, "industry")?;
    insert_text(&mut record, row, "size")?;
    insert_text(&mut record, row, "location")?;
    insert_text(&mut record, row, "logo_url")?;
    insert_text(&mut record, row, "social_media")?;
    insert_text(&mut record, row, "metrics")?;
    insert_text(&mut record, row, "products")?;
    insert_text(&mut record, row, "strengths")?;
    insert_text(&mut record, row, "weaknesses")?;
    insert_text(&mut record, row, "user_id")?;
    insert_text(&mut record, row, "created_at")?;
    insert_text(&mut record, row, "last_updated")?;
    Ok(record)
}

fn insert_text(record: &mut RawRecord, row: &Row<'_>, column: &str) -> StoreResult<()> {
    // NULL columns stay absent from the record; the normalizer defaults them.
    if let Some(text) = row.get::<_, Option<String>>(column)? {
        record.insert(column.to_string(), Value::String(text));
    }
    Ok(())
}

fn record_text(record: &RawRecord, key: &str) -> String {
    record_text_or(record, key, "")
}

fn record_text_or(record: &RawRecord, key: &str, default: &str) -> String {
    match record.get(key).and_then(Value::as_str) {
        Some(text) => text.to_string(),
        None => default.to_string(),
    }
}
