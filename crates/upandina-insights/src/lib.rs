//! Birthday fun-fact aggregation for upandina.
//!
//! Three independent external lookups (shared-birthday people, an "on this
//! day" historical event, birth-year movies) fan out concurrently behind the
//! [`upandina_core::source::InsightSources`] seam; the
//! [`InsightsBuilder`] joins them, degrades each failure to its empty
//! default, and keeps the assembled payload in a day-keyed cache for 24
//! hours.

mod aggregate;
mod onthisday;
mod sources;
mod tmdb;
mod wikidata;

pub mod error;

pub use aggregate::InsightsBuilder;
pub use error::{Error, Result};
pub use sources::{HttpSources, SourceConfig};
