//! SQL schema for the SQLite insights cache.
//!
//! Executed at connection startup. Future migrations will be gated on the
//! `PRAGMA user_version` number.

/// Full schema DDL; idempotent thanks to `CREATE TABLE IF NOT EXISTS`.
pub const SCHEMA: &str = "
PRAGMA journal_mode = WAL;

-- One row per birth calendar day. Rows are only ever replaced in full;
-- staleness is decided by the reader, so no expiry lives in the database.
CREATE TABLE IF NOT EXISTS insights_cache (
    cache_key    TEXT PRIMARY KEY,  -- 'insights-{month}-{day}-{year}'
    payload_json TEXT NOT NULL,     -- serialised InsightsPayload
    created_at   TEXT NOT NULL      -- ISO 8601 UTC
);

PRAGMA user_version = 1;
";
