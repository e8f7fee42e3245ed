//! Competitor domain model.
//!
//! # Responsibility
//! - Define the canonical record tracked per competitor.
//! - Provide the draft shape used by create/edit flows.
//!
//! # Invariants
//! - `id` is store-assigned on create and never changes afterwards.
//! - `metrics` and `social_media` are always fully-populated structs; a
//!   missing KPI is represented as `0`, a missing handle as `""`.
//! - `products`/`strengths`/`weaknesses` are always sequences, never null.

use serde::{Deserialize, Serialize};

/// Company size bucket used for filtering and distribution charts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CompanySize {
    Startup,
    Small,
    Medium,
    Large,
    Enterprise,
}

impl CompanySize {
    /// Stable textual form shared with the store and the UI.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Startup => "startup",
            Self::Small => "small",
            Self::Medium => "medium",
            Self::Large => "large",
            Self::Enterprise => "enterprise",
        }
    }

    /// Parses the stored textual form. Unknown values return `None`; the
    /// normalizer maps those to [`CompanySize::default`].
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "startup" => Some(Self::Startup),
            "small" => Some(Self::Small),
            "medium" => Some(Self::Medium),
            "large" => Some(Self::Large),
            "enterprise" => Some(Self::Enterprise),
            _ => None,
        }
    }
}

impl Default for CompanySize {
    fn default() -> Self {
        Self::Startup
    }
}

/// Social handles for the fixed platform set tracked per competitor.
///
/// Every key is always present; a platform with no handle holds `""`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SocialMedia {
    pub twitter: String,
    pub linkedin: String,
    pub facebook: String,
    pub instagram: String,
}

/// Named numeric KPIs. Absent values normalize to `0`.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Metrics {
    pub monthly_visitors: f64,
    pub market_share: f64,
    pub revenue: f64,
    pub employees: f64,
    pub growth_rate: f64,
}

/// Canonical competitor record used throughout presentation logic.
///
/// Field names serialize in camelCase to match the domain wire shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Competitor {
    /// Opaque store-assigned identifier.
    pub id: String,
    pub name: String,
    pub website: String,
    pub description: String,
    pub industry: String,
    pub size: CompanySize,
    pub location: String,
    pub logo_url: String,
    pub social_media: SocialMedia,
    pub metrics: Metrics,
    pub products: Vec<String>,
    pub strengths: Vec<String>,
    pub weaknesses: Vec<String>,
    /// ISO-8601; refreshed by the client on every write.
    pub last_updated: String,
    /// Owner scope for all store reads and writes.
    pub user_id: String,
    /// ISO-8601; set once at creation.
    pub created_at: String,
}

/// Create/edit payload without store-owned fields (`id`, `user_id`,
/// timestamps). The form layer guarantees `name` and `website` are set.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CompetitorDraft {
    pub name: String,
    pub website: String,
    pub description: String,
    pub industry: String,
    pub size: CompanySize,
    pub location: String,
    pub logo_url: String,
    pub social_media: SocialMedia,
    pub metrics: Metrics,
    pub products: Vec<String>,
    pub strengths: Vec<String>,
    pub weaknesses: Vec<String>,
}

impl Competitor {
    /// Returns the draft view of this record, used when an edit form is
    /// pre-filled from an existing competitor.
    pub fn to_draft(&self) -> CompetitorDraft {
        CompetitorDraft {
            name: self.name.clone(),
            website: self.website.clone(),
            description: self.description.clone(),
            industry: self.industry.clone(),
            size: self.size,
            location: self.location.clone(),
            logo_url: self.logo_url.clone(),
            social_media: self.social_media.clone(),
            metrics: self.metrics,
            products: self.products.clone(),
            strengths: self.strengths.clone(),
            weaknesses: self.weaknesses.clone(),
        }
    }
}
