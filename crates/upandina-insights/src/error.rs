//! Error type for the HTTP source clients.
//!
//! These errors never cross the aggregator boundary — each one is logged and
//! replaced by the failing source's empty/absent default.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  /// Transport failure, timeout, or a response body that does not match the
  /// expected schema (reqwest folds JSON decode errors in here).
  #[error("transport error: {0}")]
  Transport(#[from] reqwest::Error),

  #[error("{service} returned status {status}")]
  Status {
    service: &'static str,
    status:  reqwest::StatusCode,
  },
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
