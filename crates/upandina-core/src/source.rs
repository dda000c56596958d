//! The `InsightSources` trait — the seam in front of the three external
//! fun-fact services.
//!
//! The HTTP implementation lives in `upandina-insights`; tests drive the
//! aggregator and API through stubs. The three lookups are independent and
//! commutative; implementations must not make one depend on another.

use std::future::Future;

use crate::insights::{HistoricalEvent, Movie, Person};

/// The three external lookups behind one abstraction.
///
/// Errors returned here are a backend's own diagnostics; the aggregator
/// converts each into that source's empty/absent default and never surfaces
/// them to its caller.
pub trait InsightSources: Send + Sync {
  type Error: std::error::Error + Send + Sync + 'static;

  /// Public figures born on (month, day), any year. Bounded result set.
  fn shared_birthdays(
    &self,
    month: u32,
    day: u32,
  ) -> impl Future<Output = Result<Vec<Person>, Self::Error>> + Send + '_;

  /// The first historical event reported for (month, day), if any.
  fn on_this_day(
    &self,
    month: u32,
    day: u32,
  ) -> impl Future<Output = Result<Option<HistoricalEvent>, Self::Error>> + Send + '_;

  /// Most popular movies released in `year`. Bounded result set; empty when
  /// the backend has no credential configured.
  fn movies_for_year(
    &self,
    year: i32,
  ) -> impl Future<Output = Result<Vec<Movie>, Self::Error>> + Send + '_;
}
