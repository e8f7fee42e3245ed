//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate store calls plus normalization into use-case level APIs.
//! - Own the read-through collection cache the presentation layer reads.

pub mod cache;
pub mod competitor_service;

pub use cache::{CompetitorCache, LoadTicket};
pub use competitor_service::CompetitorService;
