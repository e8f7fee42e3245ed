//! Competitor use-case service.
//!
//! # Responsibility
//! - Provide the load/create/update entry points the UI actions call.
//! - Apply the error policy of the dashboard: a failed load yields an
//!   empty collection, a failed write is logged and reported, nothing in
//!   this layer is fatal.
//!
//! # Invariants
//! - Loads are all-or-nothing: either every raw record is normalized, or
//!   the result is empty. No partial application.
//! - State refreshes only by re-running the load after a successful write;
//!   no optimistic mutation happens here.

use crate::model::competitor::{Competitor, CompetitorDraft};
use crate::normalize::{
    draft_to_create_record, competitor_to_update_record, iso_timestamp, record_to_competitor,
};
use crate::store::{CompetitorStore, StoreResult};
use chrono::Utc;
use log::{error, info};

/// Use-case service over a competitor store implementation.
pub struct CompetitorService<S: CompetitorStore> {
    store: S,
}

impl<S: CompetitorStore> CompetitorService<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Loads and normalizes every competitor owned by `user_id`.
    ///
    /// # Contract
    /// - A store failure is logged and yields an empty collection; the
    ///   caller sees an empty list, never an error.
    pub fn load_competitors(&self, user_id: &str) -> Vec<Competitor> {
        let raw_records = match self.store.list_for_owner(user_id) {
            Ok(records) => records,
            Err(err) => {
                error!("event=load_failed module=service owner={user_id} error={err}");
                return Vec::new();
            }
        };

        let now = iso_timestamp(Utc::now());
        let competitors: Vec<Competitor> = raw_records
            .iter()
            .map(|record| record_to_competitor(record, user_id, &now))
            .collect();

        info!(
            "event=load_competitors module=service status=ok owner={user_id} count={}",
            competitors.len()
        );
        competitors
    }

    /// Creates a competitor from a form draft and returns the assigned id.
    pub fn add_competitor(&self, user_id: &str, draft: &CompetitorDraft) -> StoreResult<String> {
        let record = draft_to_create_record(draft, user_id, Utc::now());
        match self.store.create(&record) {
            Ok(id) => {
                info!("event=create_competitor module=service status=ok id={id}");
                Ok(id)
            }
            Err(err) => {
                error!("event=create_competitor module=service status=error error={err}");
                Err(err)
            }
        }
    }

    /// Replaces the stored record for an edited competitor, refreshing
    /// `last_updated`. Last writer wins by full-record overwrite.
    pub fn update_competitor(&self, competitor: &Competitor) -> StoreResult<()> {
        let record = competitor_to_update_record(competitor, Utc::now());
        match self.store.update(&competitor.id, &record) {
            Ok(()) => {
                info!(
                    "event=update_competitor module=service status=ok id={}",
                    competitor.id
                );
                Ok(())
            }
            Err(err) => {
                error!(
                    "event=update_competitor module=service status=error id={} error={err}",
                    competitor.id
                );
                Err(err)
            }
        }
    }
}
