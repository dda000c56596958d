use chrono::{TimeDelta, Utc};
use upandina_core::{
  cache::{CacheEntry, InsightsCache},
  insights::InsightsPayload,
  zodiac::Zodiac,
};

use crate::SqliteCache;

fn payload(zodiac: Zodiac) -> InsightsPayload {
  InsightsPayload {
    zodiac,
    people: vec![],
    event: None,
    movies: vec![],
  }
}

#[tokio::test]
async fn round_trip() {
  let cache = SqliteCache::open_in_memory().await.unwrap();
  let entry = CacheEntry::new(payload(Zodiac::Ox), Utc::now());

  cache.set("insights-6-5-1985", entry.clone()).await.unwrap();
  let got = cache.get("insights-6-5-1985").await.unwrap().unwrap();

  assert_eq!(got.payload, entry.payload);
  // RFC 3339 keeps sub-second precision, so the timestamp survives intact.
  assert_eq!(got.created_at, entry.created_at);
}

#[tokio::test]
async fn missing_key_reads_as_none() {
  let cache = SqliteCache::open_in_memory().await.unwrap();
  assert!(cache.get("insights-1-1-2000").await.unwrap().is_none());
}

#[tokio::test]
async fn set_overwrites_same_key() {
  let cache = SqliteCache::open_in_memory().await.unwrap();
  let old = CacheEntry::new(payload(Zodiac::Rat), Utc::now());
  let new = CacheEntry::new(payload(Zodiac::Ox), Utc::now());

  cache.set("k", old).await.unwrap();
  cache.set("k", new.clone()).await.unwrap();

  let got = cache.get("k").await.unwrap().unwrap();
  assert_eq!(got.payload, new.payload);
}

#[tokio::test]
async fn stale_entry_surfaces_with_original_timestamp() {
  // Staleness is the reader's call; the store returns entries of any age.
  let cache = SqliteCache::open_in_memory().await.unwrap();
  let created_at = Utc::now() - TimeDelta::hours(48);
  let entry = CacheEntry::new(payload(Zodiac::Ox), created_at);

  cache.set("k", entry).await.unwrap();
  let got = cache.get("k").await.unwrap().unwrap();

  assert_eq!(got.created_at, created_at);
  assert!(!got.is_fresh(Utc::now()));
}

#[tokio::test]
async fn corrupt_payload_reads_as_none() {
  let cache = SqliteCache::open_in_memory().await.unwrap();
  cache
    .raw_set("k", "{not json", &Utc::now().to_rfc3339())
    .await
    .unwrap();

  assert!(cache.get("k").await.unwrap().is_none());
}

#[tokio::test]
async fn corrupt_timestamp_reads_as_none() {
  let cache = SqliteCache::open_in_memory().await.unwrap();
  let json = serde_json::to_string(&payload(Zodiac::Ox)).unwrap();
  cache.raw_set("k", &json, "yesterday-ish").await.unwrap();

  assert!(cache.get("k").await.unwrap().is_none());
}
