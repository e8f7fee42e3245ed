//! Pure aggregation functions over the competitor collection.
//!
//! # Responsibility
//! - Provide every derived value the dashboard and analytics views render:
//!   totals, averages, coverage counts, distributions and rankings.
//!
//! # Invariants
//! - No function mutates its input.
//! - Every function is defined on the empty slice: zero or empty results,
//!   never a panic or NaN.
//! - Rankings use stable sorts so ties keep their original relative order.

use crate::model::competitor::{CompanySize, Competitor};
use chrono::DateTime;
use std::cmp::Ordering;
use std::collections::BTreeMap;

/// Number of competitors being tracked.
pub fn total_count(items: &[Competitor]) -> usize {
    items.len()
}

/// Combined monthly visitors across all competitors.
pub fn total_monthly_visitors(items: &[Competitor]) -> f64 {
    items.iter().map(|item| item.metrics.monthly_visitors).sum()
}

/// Mean growth rate, `0.0` for an empty collection.
pub fn average_growth_rate(items: &[Competitor]) -> f64 {
    if items.is_empty() {
        return 0.0;
    }
    let sum: f64 = items.iter().map(|item| item.metrics.growth_rate).sum();
    sum / items.len() as f64
}

/// Competitors with a strictly positive market share on record.
pub fn market_data_coverage(items: &[Competitor]) -> usize {
    items
        .iter()
        .filter(|item| item.metrics.market_share > 0.0)
        .count()
}

/// Competitors showing positive growth.
pub fn positive_growth_count(items: &[Competitor]) -> usize {
    items
        .iter()
        .filter(|item| item.metrics.growth_rate > 0.0)
        .count()
}

/// Large and enterprise competitors ("market leaders" insight).
pub fn enterprise_level_count(items: &[Competitor]) -> usize {
    items
        .iter()
        .filter(|item| matches!(item.size, CompanySize::Large | CompanySize::Enterprise))
        .count()
}

/// Startups and small companies ("emerging players" insight).
pub fn emerging_count(items: &[Competitor]) -> usize {
    items
        .iter()
        .filter(|item| matches!(item.size, CompanySize::Startup | CompanySize::Small))
        .count()
}

/// Occurrence count per company size. Only sizes that occur appear as keys.
pub fn size_distribution(items: &[Competitor]) -> BTreeMap<CompanySize, usize> {
    let mut counts = BTreeMap::new();
    for item in items {
        *counts.entry(item.size).or_insert(0) += 1;
    }
    counts
}

/// Occurrence count per non-empty industry. Competitors with no industry
/// are excluded from this grouping but still counted elsewhere.
pub fn industry_distribution(items: &[Competitor]) -> BTreeMap<String, usize> {
    let mut counts = BTreeMap::new();
    for item in items {
        if item.industry.is_empty() {
            continue;
        }
        *counts.entry(item.industry.clone()).or_insert(0) += 1;
    }
    counts
}

/// Sorted, de-duplicated list of non-empty industry names. Feeds the
/// industry filter dropdown.
pub fn distinct_industries(items: &[Competitor]) -> Vec<String> {
    industry_distribution(items).into_keys().collect()
}

/// Top `n` competitors by monthly visitors.
///
/// Filters to strictly positive traffic, sorts descending and truncates.
/// The sort is stable, so tied entries keep their input order.
pub fn top_by_monthly_visitors(items: &[Competitor], n: usize) -> Vec<&Competitor> {
    let mut ranked: Vec<&Competitor> = items
        .iter()
        .filter(|item| item.metrics.monthly_visitors > 0.0)
        .collect();
    ranked.sort_by(|a, b| descending(a.metrics.monthly_visitors, b.metrics.monthly_visitors));
    ranked.truncate(n);
    ranked
}

/// The `n` most recently updated competitors.
///
/// `last_updated` is parsed as an ISO-8601 timestamp; unparseable values
/// sort as earliest. Stable descending sort, then truncate.
pub fn most_recently_updated(items: &[Competitor], n: usize) -> Vec<&Competitor> {
    let mut ranked: Vec<&Competitor> = items.iter().collect();
    ranked.sort_by(|a, b| {
        parsed_epoch_ms(&b.last_updated).cmp(&parsed_epoch_ms(&a.last_updated))
    });
    ranked.truncate(n);
    ranked
}

fn parsed_epoch_ms(timestamp: &str) -> i64 {
    DateTime::parse_from_rfc3339(timestamp)
        .map(|parsed| parsed.timestamp_millis())
        .unwrap_or(i64::MIN)
}

fn descending(a: f64, b: f64) -> Ordering {
    // Metric values come from JSON numbers, so NaN cannot occur; Equal is
    // still a safe answer if it ever did.
    b.partial_cmp(&a).unwrap_or(Ordering::Equal)
}
