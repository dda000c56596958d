//! [`InsightsBuilder`] — the fan-out orchestrator.
//!
//! One cache read at entry, three concurrent source lookups, one cache write
//! at exit. Each source's failure is trapped here and replaced by that
//! source's empty/absent default; `build` itself has no failure mode.

use chrono::{Datelike, NaiveDate, Utc};
use upandina_core::{
  cache::{CacheEntry, InsightsCache, cache_key},
  insights::InsightsPayload,
  source::InsightSources,
  zodiac::Zodiac,
};

/// Assembles an [`InsightsPayload`] for a birth date.
pub struct InsightsBuilder<S, C> {
  sources: S,
  cache:   C,
}

impl<S, C> InsightsBuilder<S, C>
where
  S: InsightSources,
  C: InsightsCache,
{
  pub fn new(sources: S, cache: C) -> Self {
    Self { sources, cache }
  }

  /// Build (or reuse) the payload for `birth_date`. Never fails: source and
  /// cache errors are logged and degraded field-by-field.
  pub async fn build(&self, birth_date: NaiveDate) -> InsightsPayload {
    let (month, day, year) =
      (birth_date.month(), birth_date.day(), birth_date.year());
    let key = cache_key(birth_date);

    // A fresh cached payload short-circuits all network activity. A cache
    // read error is only a miss.
    match self.cache.get(&key).await {
      Ok(Some(entry)) if entry.is_fresh(Utc::now()) => {
        tracing::debug!(%key, "insights cache hit");
        return entry.payload;
      }
      Ok(_) => {}
      Err(error) => tracing::warn!(%key, %error, "insights cache read failed"),
    }

    // The three lookups are independent; run them concurrently and let each
    // degrade on its own.
    let (people, event, movies) = tokio::join!(
      self.sources.shared_birthdays(month, day),
      self.sources.on_this_day(month, day),
      self.sources.movies_for_year(year),
    );

    let people = people.unwrap_or_else(|error| {
      tracing::warn!(%error, "shared-birthday lookup failed");
      Vec::new()
    });
    let event = event.unwrap_or_else(|error| {
      tracing::warn!(%error, "on-this-day lookup failed");
      None
    });
    let movies = movies.unwrap_or_else(|error| {
      tracing::warn!(%error, "movie lookup failed");
      Vec::new()
    });

    let payload = InsightsPayload {
      zodiac: Zodiac::for_year(year),
      people,
      event,
      movies,
    };

    let entry = CacheEntry::new(payload.clone(), Utc::now());
    if let Err(error) = self.cache.set(&key, entry).await {
      tracing::warn!(%key, %error, "insights cache write failed");
    }

    payload
  }
}

// ─── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
  use std::sync::atomic::{AtomicUsize, Ordering};

  use chrono::TimeDelta;
  use upandina_core::{
    cache::MemoryCache,
    insights::{HistoricalEvent, Movie, Person},
  };

  use super::*;

  #[derive(Debug, thiserror::Error)]
  #[error("stub source failure")]
  struct StubError;

  /// Scripted sources: per-source success/failure plus a total call counter.
  #[derive(Default)]
  struct StubSources {
    fail_people: bool,
    fail_event:  bool,
    fail_movies: bool,
    calls:       AtomicUsize,
  }

  impl StubSources {
    fn call_count(&self) -> usize {
      self.calls.load(Ordering::SeqCst)
    }
  }

  impl InsightSources for &StubSources {
    type Error = StubError;

    async fn shared_birthdays(
      &self,
      _month: u32,
      _day: u32,
    ) -> Result<Vec<Person>, StubError> {
      self.calls.fetch_add(1, Ordering::SeqCst);
      if self.fail_people {
        return Err(StubError);
      }
      Ok(vec![Person {
        name: "Mark Wahlberg".to_string(),
        bio:  "American actor".to_string(),
        url:  "http://www.wikidata.org/entity/Q164119".to_string(),
      }])
    }

    async fn on_this_day(
      &self,
      _month: u32,
      _day: u32,
    ) -> Result<Option<HistoricalEvent>, StubError> {
      self.calls.fetch_add(1, Ordering::SeqCst);
      if self.fail_event {
        return Err(StubError);
      }
      Ok(Some(HistoricalEvent {
        year:  1967,
        text:  "The Six-Day War begins.".to_string(),
        pages: vec![],
      }))
    }

    async fn movies_for_year(&self, _year: i32) -> Result<Vec<Movie>, StubError> {
      self.calls.fetch_add(1, Ordering::SeqCst);
      if self.fail_movies {
        return Err(StubError);
      }
      Ok(vec![Movie {
        title:      "Back to the Future".to_string(),
        poster_url: None,
      }])
    }
  }

  fn birth_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(1985, 6, 5).unwrap()
  }

  #[tokio::test]
  async fn assembles_payload_from_all_sources() {
    let sources = StubSources::default();
    let builder = InsightsBuilder::new(&sources, MemoryCache::new());

    let payload = builder.build(birth_date()).await;

    assert_eq!(payload.zodiac, Zodiac::Ox);
    assert_eq!(payload.people.len(), 1);
    assert_eq!(payload.event.as_ref().unwrap().year, 1967);
    assert_eq!(payload.movies.len(), 1);
    assert_eq!(sources.call_count(), 3);
  }

  #[tokio::test]
  async fn second_call_within_window_hits_cache() {
    let sources = StubSources::default();
    let builder = InsightsBuilder::new(&sources, MemoryCache::new());

    let first = builder.build(birth_date()).await;
    let second = builder.build(birth_date()).await;

    assert_eq!(first, second);
    // No new lookups on the second call.
    assert_eq!(sources.call_count(), 3);
  }

  #[tokio::test]
  async fn stale_entry_triggers_refetch() {
    let sources = StubSources::default();
    let cache = MemoryCache::new();
    let key = cache_key(birth_date());

    // Seed a stale entry by hand.
    let stale = CacheEntry::new(
      InsightsPayload {
        zodiac: Zodiac::Ox,
        people: vec![],
        event:  None,
        movies: vec![],
      },
      Utc::now() - TimeDelta::hours(25),
    );
    cache.set(&key, stale).await.unwrap();

    let builder = InsightsBuilder::new(&sources, cache);
    let payload = builder.build(birth_date()).await;

    assert_eq!(sources.call_count(), 3);
    assert_eq!(payload.people.len(), 1, "stale payload must not be reused");
  }

  #[tokio::test]
  async fn failing_source_is_isolated() {
    let sources = StubSources {
      fail_people: true,
      ..StubSources::default()
    };
    let builder = InsightsBuilder::new(&sources, MemoryCache::new());

    let payload = builder.build(birth_date()).await;

    assert!(payload.people.is_empty());
    assert!(payload.event.is_some());
    assert_eq!(payload.movies.len(), 1);
  }

  #[tokio::test]
  async fn all_sources_failing_still_yields_payload() {
    let sources = StubSources {
      fail_people: true,
      fail_event:  true,
      fail_movies: true,
      ..StubSources::default()
    };
    let builder = InsightsBuilder::new(&sources, MemoryCache::new());

    let payload = builder.build(birth_date()).await;

    assert!(payload.people.is_empty());
    assert!(payload.event.is_none());
    assert!(payload.movies.is_empty());
    // The zodiac is derived locally and always present.
    assert_eq!(payload.zodiac, Zodiac::Ox);
  }

  #[tokio::test]
  async fn degraded_payload_is_cached_too() {
    let sources = StubSources {
      fail_people: true,
      ..StubSources::default()
    };
    let builder = InsightsBuilder::new(&sources, MemoryCache::new());

    builder.build(birth_date()).await;
    let second = builder.build(birth_date()).await;

    assert_eq!(sources.call_count(), 3, "second call must come from cache");
    assert!(second.people.is_empty());
  }
}
