//! Derived views over the competitor collection.
//!
//! # Responsibility
//! - Compute the summary metrics, distributions and rankings shown on the
//!   dashboard and analytics surfaces.
//! - Keep every function pure and total: no input mutation, defined
//!   results on the empty collection.

pub mod aggregate;
pub mod filter;
pub mod format;
