//! Domain model for tracked competitors.
//!
//! # Responsibility
//! - Define the canonical, strictly-typed shapes used by all core logic.
//! - Guarantee structured sub-fields (`metrics`, `social_media`) are plain
//!   values that consumers can read directly, never nullable lookups.
//!
//! # Invariants
//! - Every `Competitor` visible outside the normalizer has fully-populated
//!   sub-structures and non-null sequences.

pub mod competitor;
