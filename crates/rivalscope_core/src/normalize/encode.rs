//! Domain entity to store record encoding.
//!
//! # Responsibility
//! - Produce the snake_case record shape the document store expects, with
//!   every structured sub-field encoded as a single JSON string.
//! - Apply the write-time timestamp policy: both timestamps on create,
//!   `last_updated` only on update.
//!
//! # Invariants
//! - Create records never carry `id`; the store assigns it.
//! - Update records never carry `created_at` or `user_id`, so the stored
//!   values are preserved.

use crate::model::competitor::{Competitor, CompetitorDraft};
use crate::store::RawRecord;
use chrono::{DateTime, SecondsFormat, Utc};
use serde::Serialize;
use serde_json::Value;

/// Formats a write timestamp the way the original client did:
/// millisecond precision with a `Z` suffix.
pub fn iso_timestamp(now: DateTime<Utc>) -> String {
    now.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Builds the store record for a brand-new competitor.
///
/// # Contract
/// - Omits `id` (store-assigned).
/// - Sets `user_id` to the session owner and both timestamps to `now`.
pub fn draft_to_create_record(
    draft: &CompetitorDraft,
    user_id: &str,
    now: DateTime<Utc>,
) -> RawRecord {
    let stamp = iso_timestamp(now);
    let mut record = draft_fields(draft);
    record.insert("user_id".to_string(), Value::String(user_id.to_string()));
    record.insert("created_at".to_string(), Value::String(stamp.clone()));
    record.insert("last_updated".to_string(), Value::String(stamp));
    record
}

/// Builds the store record for a full-record update.
///
/// # Contract
/// - Refreshes `last_updated` to `now`; `created_at` and `user_id` are
///   omitted so the stored values survive.
/// - The record id is addressed by the store call, not the record body.
pub fn competitor_to_update_record(competitor: &Competitor, now: DateTime<Utc>) -> RawRecord {
    let mut record = draft_fields(&competitor.to_draft());
    record.insert(
        "last_updated".to_string(),
        Value::String(iso_timestamp(now)),
    );
    record
}

fn draft_fields(draft: &CompetitorDraft) -> RawRecord {
    let mut record = RawRecord::new();
    record.insert("name".to_string(), Value::String(draft.name.clone()));
    record.insert("website".to_string(), Value::String(draft.website.clone()));
    record.insert(
        "description".to_string(),
        Value::String(draft.description.clone()),
    );
    record.insert(
        "industry".to_string(),
        Value::String(draft.industry.clone()),
    );
    record.insert(
        "size".to_string(),
        Value::String(draft.size.as_str().to_string()),
    );
    record.insert(
        "location".to_string(),
        Value::String(draft.location.clone()),
    );
    record.insert(
        "logo_url".to_string(),
        Value::String(draft.logo_url.clone()),
    );
    record.insert(
        "social_media".to_string(),
        Value::String(encode_json(&draft.social_media, "{}")),
    );
    record.insert(
        "metrics".to_string(),
        Value::String(encode_json(&draft.metrics, "{}")),
    );
    record.insert(
        "products".to_string(),
        Value::String(encode_json(&draft.products, "[]")),
    );
    record.insert(
        "strengths".to_string(),
        Value::String(encode_json(&draft.strengths, "[]")),
    );
    record.insert(
        "weaknesses".to_string(),
        Value::String(encode_json(&draft.weaknesses, "[]")),
    );
    record
}

fn encode_json<T: Serialize>(value: &T, empty_literal: &str) -> String {
    // Plain data structs cannot fail to serialize; the fallback keeps the
    // write path total and decodes back to the field default.
    serde_json::to_string(value).unwrap_or_else(|_| empty_literal.to_string())
}
