//! Read-through cache of the last successful list query.
//!
//! # Responsibility
//! - Hold the in-memory competitor collection the presentation layer
//!   reads between reloads.
//! - Discard load results that finish after the owning view moved on.
//!
//! # Invariants
//! - A completed load fully replaces the collection; results are never
//!   merged with stale contents.
//! - Only the ticket from the most recent `begin_load` can apply; older
//!   tickets are discarded (the update-after-unmount rule).

use crate::model::competitor::Competitor;

/// Handle identifying one in-flight load. Issued by
/// [`CompetitorCache::begin_load`]; applying it after a newer load began
/// is a no-op.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadTicket(u64);

/// Owner of the in-memory competitor collection.
#[derive(Debug, Default)]
pub struct CompetitorCache {
    items: Vec<Competitor>,
    epoch: u64,
}

impl CompetitorCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Read-only view of the cached collection.
    pub fn items(&self) -> &[Competitor] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Marks the start of a load and invalidates earlier tickets.
    pub fn begin_load(&mut self) -> LoadTicket {
        self.epoch += 1;
        LoadTicket(self.epoch)
    }

    /// Applies a finished load, replacing the whole collection.
    ///
    /// Returns `false` (and changes nothing) when a newer load began after
    /// this ticket was issued.
    pub fn complete_load(&mut self, ticket: LoadTicket, items: Vec<Competitor>) -> bool {
        if ticket.0 != self.epoch {
            return false;
        }
        self.items = items;
        true
    }

    /// Invalidates any in-flight load without touching current contents.
    /// Called when the owning view unmounts.
    pub fn invalidate(&mut self) {
        self.epoch += 1;
    }

    /// Empties the collection, e.g. on sign-out.
    pub fn clear(&mut self) {
        self.items.clear();
    }
}
