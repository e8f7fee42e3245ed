//! Document-store contract and persistence implementations.
//!
//! # Responsibility
//! - Define the loosely-typed record boundary the normalizer defends
//!   against, plus the CRUD contract over it.
//! - Keep SQL details inside the persistence boundary.
//!
//! # Invariants
//! - Raw records may use snake_case or camelCase keys inconsistently per
//!   field; callers must go through the normalizer, never read raw fields
//!   directly.
//! - All list queries are scoped to one owner.

use crate::db::DbError;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod sqlite;

pub use sqlite::SqliteCompetitorStore;

/// Loosely-typed record as the store returns it: arbitrary values under
/// ambiguously-cased keys, with structured sub-fields usually (but not
/// reliably) string-encoded.
pub type RawRecord = serde_json::Map<String, serde_json::Value>;

pub type StoreResult<T> = Result<T, StoreError>;

/// Store-level failure for competitor persistence operations.
#[derive(Debug)]
pub enum StoreError {
    Db(DbError),
    NotFound(String),
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::NotFound(id) => write!(f, "competitor not found: {id}"),
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            Self::NotFound(_) => None,
        }
    }
}

impl From<DbError> for StoreError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for StoreError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// CRUD contract over the competitor document collection.
pub trait CompetitorStore {
    /// Lists all records owned by `user_id`, newest first.
    fn list_for_owner(&self, user_id: &str) -> StoreResult<Vec<RawRecord>>;
    /// Persists a new record and returns the store-assigned id.
    fn create(&self, record: &RawRecord) -> StoreResult<String>;
    /// Replaces the stored record body for `id`.
    fn update(&self, id: &str, record: &RawRecord) -> StoreResult<()>;
    /// Store-level removal. Present on the contract; not driven by any
    /// current UI flow.
    fn delete(&self, id: &str) -> StoreResult<()>;
}
