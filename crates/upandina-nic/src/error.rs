//! Error types for the NIC decoder.
//!
//! All variants are the same user-visible failure class — "invalid NIC
//! format" — split out so the message can say what was wrong. Messages are
//! written for inline display next to an input field.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
  #[error("NIC number is empty")]
  Empty,

  #[error("NIC number must be 10 or 12 characters, got {0}")]
  Length(usize),

  #[error("NIC number contains unexpected characters")]
  Digits,

  /// The day-code field does not map to a real day of the encoded year
  /// (zero, or past December 31 after the gender offset is removed).
  #[error("NIC day code {0} does not map to a calendar date")]
  DayCode(u32),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
