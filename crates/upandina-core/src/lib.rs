//! Core types and trait definitions for upandina.
//!
//! This crate is deliberately free of HTTP and database dependencies.
//! All other crates depend on it; it depends on nothing proprietary.

pub mod cache;
pub mod identity;
pub mod insights;
pub mod source;
pub mod zodiac;

pub use cache::{CacheEntry, InsightsCache, MemoryCache, cache_key};
pub use identity::{DecodedIdentity, Gender};
pub use insights::{EventPage, HistoricalEvent, InsightsPayload, Movie, Person};
pub use source::InsightSources;
pub use zodiac::Zodiac;
