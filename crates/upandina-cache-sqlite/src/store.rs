//! [`SqliteCache`] — the SQLite implementation of [`InsightsCache`].

use std::path::Path;

use chrono::{DateTime, Utc};
use rusqlite::OptionalExtension as _;
use upandina_core::cache::{CacheEntry, InsightsCache};

use crate::{Error, Result, schema::SCHEMA};

/// An insights cache backed by a single SQLite file.
///
/// Cloning is cheap — the inner connection is reference-counted.
#[derive(Clone)]
pub struct SqliteCache {
  conn: tokio_rusqlite::Connection,
}

impl SqliteCache {
  /// Open (or create) a cache at `path` and run schema initialisation.
  pub async fn open(path: impl AsRef<Path>) -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open(path).await?;
    let cache = Self { conn };
    cache.init_schema().await?;
    Ok(cache)
  }

  /// Open an in-memory cache — useful for testing.
  pub async fn open_in_memory() -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open_in_memory().await?;
    let cache = Self { conn };
    cache.init_schema().await?;
    Ok(cache)
  }

  async fn init_schema(&self) -> Result<()> {
    self
      .conn
      .call(|conn| {
        conn.execute_batch(SCHEMA)?;
        Ok(())
      })
      .await?;
    Ok(())
  }

  /// Insert a raw row, bypassing serialisation. Lets tests plant corrupt
  /// payloads.
  #[cfg(test)]
  pub(crate) async fn raw_set(
    &self,
    key: &str,
    payload_json: &str,
    created_at: &str,
  ) -> Result<()> {
    let key = key.to_owned();
    let payload_json = payload_json.to_owned();
    let created_at = created_at.to_owned();
    self
      .conn
      .call(move |conn| {
        conn.execute(
          "INSERT OR REPLACE INTO insights_cache
             (cache_key, payload_json, created_at)
           VALUES (?1, ?2, ?3)",
          rusqlite::params![key, payload_json, created_at],
        )?;
        Ok(())
      })
      .await?;
    Ok(())
  }
}

impl InsightsCache for SqliteCache {
  type Error = Error;

  /// Read a row and decode it. A row whose payload or timestamp fails to
  /// decode reads as absent; it will be overwritten by the next `set`.
  async fn get(&self, key: &str) -> Result<Option<CacheEntry>> {
    let key = key.to_owned();
    let row: Option<(String, String)> = self
      .conn
      .call(move |conn| {
        let row = conn
          .query_row(
            "SELECT payload_json, created_at
               FROM insights_cache WHERE cache_key = ?1",
            rusqlite::params![key],
            |r| Ok((r.get(0)?, r.get(1)?)),
          )
          .optional()?;
        Ok(row)
      })
      .await?;

    let Some((payload_json, created_at_str)) = row else {
      return Ok(None);
    };

    let Ok(payload) = serde_json::from_str(&payload_json) else {
      return Ok(None);
    };
    let Ok(created_at) = DateTime::parse_from_rfc3339(&created_at_str) else {
      return Ok(None);
    };

    Ok(Some(CacheEntry::new(
      payload,
      created_at.with_timezone(&Utc),
    )))
  }

  async fn set(&self, key: &str, entry: CacheEntry) -> Result<()> {
    let key = key.to_owned();
    let payload_json = serde_json::to_string(&entry.payload)?;
    let created_at = entry.created_at.to_rfc3339();

    self
      .conn
      .call(move |conn| {
        conn.execute(
          "INSERT INTO insights_cache (cache_key, payload_json, created_at)
           VALUES (?1, ?2, ?3)
           ON CONFLICT(cache_key) DO UPDATE SET
             payload_json = excluded.payload_json,
             created_at   = excluded.created_at",
          rusqlite::params![key, payload_json, created_at],
        )?;
        Ok(())
      })
      .await?;
    Ok(())
  }
}
