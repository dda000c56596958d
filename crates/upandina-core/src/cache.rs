//! The `InsightsCache` trait and the in-process default implementation.
//!
//! The trait is implemented by storage backends (e.g.
//! `upandina-cache-sqlite`). The aggregator depends on this abstraction, not
//! on any concrete backend. A cache entry is keyed by the birth calendar day
//! and considered reusable only within the 24-hour freshness window; stale
//! entries are simply overwritten on the next write to the same key, never
//! proactively purged.

use std::{
  collections::HashMap,
  convert::Infallible,
  future::Future,
  sync::Mutex,
};

use chrono::{DateTime, Datelike, NaiveDate, TimeDelta, Utc};
use serde::{Deserialize, Serialize};

use crate::insights::InsightsPayload;

/// Freshness window: entries older than this read as absent.
pub const FRESHNESS_HOURS: i64 = 24;

/// Cache key for a birth date: `insights-{month}-{day}-{year}`, unpadded.
pub fn cache_key(date: NaiveDate) -> String {
  format!("insights-{}-{}-{}", date.month(), date.day(), date.year())
}

// ─── Entry ───────────────────────────────────────────────────────────────────

/// A payload plus the instant it was built.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CacheEntry {
  pub payload:    InsightsPayload,
  pub created_at: DateTime<Utc>,
}

impl CacheEntry {
  pub fn new(payload: InsightsPayload, created_at: DateTime<Utc>) -> Self {
    Self {
      payload,
      created_at,
    }
  }

  /// Valid for reuse iff `now − created_at` is under the freshness window.
  pub fn is_fresh(&self, now: DateTime<Utc>) -> bool {
    now - self.created_at < TimeDelta::hours(FRESHNESS_HOURS)
  }
}

// ─── Trait ───────────────────────────────────────────────────────────────────

/// Abstraction over a key→entry store for built insight payloads.
///
/// Backends return entries regardless of age; the freshness check is the
/// caller's (the aggregator reads once at entry and writes once at exit).
///
/// All methods return `Send` futures so the trait can be used in
/// multi-threaded async runtimes (e.g. tokio with `axum`).
pub trait InsightsCache: Send + Sync {
  type Error: std::error::Error + Send + Sync + 'static;

  /// Look up an entry. `None` when the key is absent or unreadable.
  fn get<'a>(
    &'a self,
    key: &'a str,
  ) -> impl Future<Output = Result<Option<CacheEntry>, Self::Error>> + Send + 'a;

  /// Store an entry, overwriting any prior entry under the same key.
  fn set<'a>(
    &'a self,
    key: &'a str,
    entry: CacheEntry,
  ) -> impl Future<Output = Result<(), Self::Error>> + Send + 'a;
}

// ─── In-memory implementation ────────────────────────────────────────────────

/// Single-session in-process cache — the default when no persistence is
/// configured. No eviction and no size bound, matching the freshness-only
/// contract above.
#[derive(Debug, Default)]
pub struct MemoryCache {
  entries: Mutex<HashMap<String, CacheEntry>>,
}

impl MemoryCache {
  pub fn new() -> Self {
    Self::default()
  }

  fn lock(&self) -> std::sync::MutexGuard<'_, HashMap<String, CacheEntry>> {
    // A poisoned lock only means a panic mid-insert; the map is still usable.
    self.entries.lock().unwrap_or_else(|e| e.into_inner())
  }
}

impl InsightsCache for MemoryCache {
  type Error = Infallible;

  async fn get(&self, key: &str) -> Result<Option<CacheEntry>, Infallible> {
    Ok(self.lock().get(key).cloned())
  }

  async fn set(&self, key: &str, entry: CacheEntry) -> Result<(), Infallible> {
    self.lock().insert(key.to_string(), entry);
    Ok(())
  }
}

// ─── Tests ───────────────────────────────────────────────────────────────────
