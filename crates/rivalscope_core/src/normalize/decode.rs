//! Raw record to domain entity decoding.
//!
//! # Responsibility
//! - Bridge the impedance mismatch between the store's loosely-typed record
//!   representation and the strict `Competitor` type.
//! - Tolerate both key casings (`lowerCamelCase` preferred, `snake_case`
//!   fallback) and string-encoded structured sub-fields.
//!
//! # Invariants
//! - This function is total: one corrupt record degrades to defaulted
//!   fields, it never aborts loading the collection.
//! - `metrics` and `social_media` are well-formed structs for any input,
//!   including adversarial values such as `42` or `"not json"`.

use crate::model::competitor::{CompanySize, Competitor};
use crate::store::RawRecord;
use log::{debug, warn};
use serde::de::DeserializeOwned;
use serde_json::Value;

/// Textual fallback a lossy stringifier produces when an object is
/// stringified incorrectly. Treated as decode failure without a parse
/// attempt, same as the empty string.
const DEGENERATE_OBJECT_MARKER: &str = "[object Object]";

/// Converts one raw store record into a fully-populated `Competitor`.
///
/// `fallback_user_id` fills a missing owner field and `now_iso` fills
/// missing timestamps, mirroring what the client would have written.
///
/// # Contract
/// - Never fails; defaulting is silent toward the caller but observable
///   through `decode_fallback` log events.
pub fn record_to_competitor(
    record: &RawRecord,
    fallback_user_id: &str,
    now_iso: &str,
) -> Competitor {
    Competitor {
        id: text_field(record, "id", "id"),
        name: text_field(record, "name", "name"),
        website: text_field(record, "website", "website"),
        description: text_field(record, "description", "description"),
        industry: text_field(record, "industry", "industry"),
        size: size_field(record),
        location: text_field(record, "location", "location"),
        logo_url: text_field(record, "logoUrl", "logo_url"),
        social_media: json_field(record, "socialMedia", "social_media"),
        metrics: json_field(record, "metrics", "metrics"),
        products: json_field(record, "products", "products"),
        strengths: json_field(record, "strengths", "strengths"),
        weaknesses: json_field(record, "weaknesses", "weaknesses"),
        last_updated: text_field_or(record, "lastUpdated", "last_updated", now_iso),
        user_id: text_field_or(record, "userId", "user_id", fallback_user_id),
        created_at: text_field_or(record, "createdAt", "created_at", now_iso),
    }
}

/// Resolves a field under either casing convention.
///
/// Prefers the camel-case key, falls back to the snake-case key. JSON null
/// counts as absent under both keys.
fn raw_value<'a>(record: &'a RawRecord, camel: &str, snake: &str) -> Option<&'a Value> {
    record
        .get(camel)
        .filter(|value| !value.is_null())
        .or_else(|| record.get(snake).filter(|value| !value.is_null()))
}

fn text_field(record: &RawRecord, camel: &str, snake: &str) -> String {
    text_field_or(record, camel, snake, "")
}

fn text_field_or(record: &RawRecord, camel: &str, snake: &str, default: &str) -> String {
    match raw_value(record, camel, snake).and_then(Value::as_str) {
        Some(text) => text.to_string(),
        None => default.to_string(),
    }
}

fn size_field(record: &RawRecord) -> CompanySize {
    match raw_value(record, "size", "size").and_then(Value::as_str) {
        Some(text) => CompanySize::parse(text).unwrap_or_else(|| {
            warn!("event=decode_fallback module=normalize field=size reason=unrecognized value={text}");
            CompanySize::default()
        }),
        None => CompanySize::default(),
    }
}

/// Safe decode for one JSON-bearing field.
///
/// Policy, in order:
/// 1. Absent/null resolves to the field's type default.
/// 2. An already-structured value passes through; the store may have
///    deserialized it already. A structured value of the wrong shape still
///    falls back to the default.
/// 3. A string is parsed as encoded JSON, except the two observed
///    degenerate states (empty string, `"[object Object]"`) which map
///    straight to the default.
/// 4. Any parse error maps to the default.
fn json_field<T>(record: &RawRecord, camel: &str, snake: &str) -> T
where
    T: DeserializeOwned + Default,
{
    let Some(raw) = raw_value(record, camel, snake) else {
        debug!("event=decode_fallback module=normalize field={camel} reason=absent");
        return T::default();
    };

    match raw {
        Value::String(text) => {
            if text.is_empty() || text == DEGENERATE_OBJECT_MARKER {
                warn!(
                    "event=decode_fallback module=normalize field={camel} reason=degenerate_string"
                );
                return T::default();
            }
            let parsed: Value = match serde_json::from_str(text) {
                Ok(parsed) => parsed,
                Err(err) => {
                    warn!(
                        "event=decode_fallback module=normalize field={camel} reason=parse_error error={err}"
                    );
                    return T::default();
                }
            };
            typed_or_default(parsed, camel)
        }
        structured => typed_or_default(structured.clone(), camel),
    }
}

fn typed_or_default<T>(value: Value, field: &str) -> T
where
    T: DeserializeOwned + Default,
{
    match serde_json::from_value(value) {
        Ok(typed) => typed,
        Err(err) => {
            warn!(
                "event=decode_fallback module=normalize field={field} reason=type_mismatch error={err}"
            );
            T::default()
        }
    }
}
