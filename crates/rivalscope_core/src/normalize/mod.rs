//! Record normalization between the store boundary and the domain model.
//!
//! # Responsibility
//! - Recover a fully-typed [`Competitor`](crate::model::competitor::Competitor)
//!   from the loosely-typed records the document store returns.
//! - Produce the snake_case, string-encoded record shape the store expects
//!   on create and update.
//!
//! # Invariants
//! - Decoding never fails; every malformed field falls back to its type
//!   default and emits a `decode_fallback` log event.
//! - For well-formed structured fields, decode(encode(x)) == x.

pub mod decode;
pub mod encode;

pub use decode::record_to_competitor;
pub use encode::{competitor_to_update_record, draft_to_create_record, iso_timestamp};
