//! Listing-view filter predicates.
//!
//! # Responsibility
//! - Match competitors against the free-text search plus the size and
//!   industry dropdown selections, ANDed together.

use crate::model::competitor::{CompanySize, Competitor};

/// Filter state of the listing view. `None` on a dropdown means "all".
#[derive(Debug, Clone, Default)]
pub struct CompetitorFilter {
    /// Case-insensitive substring matched against name or industry.
    pub query: String,
    pub size: Option<CompanySize>,
    pub industry: Option<String>,
}

impl CompetitorFilter {
    /// Returns whether one competitor passes all three predicates.
    pub fn matches(&self, competitor: &Competitor) -> bool {
        let query = self.query.to_lowercase();
        let matches_query = query.is_empty()
            || competitor.name.to_lowercase().contains(&query)
            || competitor.industry.to_lowercase().contains(&query);
        let matches_size = self.size.map_or(true, |size| competitor.size == size);
        let matches_industry = self
            .industry
            .as_deref()
            .map_or(true, |industry| competitor.industry == industry);

        matches_query && matches_size && matches_industry
    }
}

/// Applies the filter over the whole collection, preserving order.
pub fn filter_competitors<'a>(
    items: &'a [Competitor],
    filter: &CompetitorFilter,
) -> Vec<&'a Competitor> {
    items.iter().filter(|item| filter.matches(item)).collect()
}
