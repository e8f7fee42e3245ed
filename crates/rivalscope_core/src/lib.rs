//! Core domain logic for RivalScope competitor tracking.
//! This crate is the single source of truth for normalization and
//! aggregation invariants; presentation layers stay read-only consumers.

pub mod db;
pub mod logging;
pub mod model;
pub mod normalize;
pub mod service;
pub mod session;
pub mod stats;
pub mod store;

pub use logging::{default_log_level, init_logging, logging_status};
pub use model::competitor::{CompanySize, Competitor, CompetitorDraft, Metrics, SocialMedia};
pub use normalize::{
    competitor_to_update_record, draft_to_create_record, iso_timestamp, record_to_competitor,
};
pub use service::{CompetitorCache, CompetitorService, LoadTicket};
pub use session::{AuthUser, SessionHub, SessionState, SubscriptionId};
pub use stats::filter::{filter_competitors, CompetitorFilter};
pub use store::{CompetitorStore, RawRecord, SqliteCompetitorStore, StoreError, StoreResult};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
