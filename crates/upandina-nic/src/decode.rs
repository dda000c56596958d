//! NIC field parsing and calendar conversion.
//!
//! Pipeline:
//!   raw &str
//!     └─ trim + length dispatch      → (year, day-code)
//!          └─ split_day_code()       → (gender, day-of-year)
//!               └─ ordinal date      → DecodedIdentity

use chrono::NaiveDate;
use upandina_core::identity::{DecodedIdentity, Gender};

use crate::error::{Error, Result};

/// Day-codes above this offset mark the holder as female.
const FEMALE_OFFSET: u32 = 500;

/// Two-digit years expand to 1900 + yy; results below this cutoff roll
/// forward a century. The legacy 10-character scheme was only ever issued
/// for people born from the 1920s through 1999, so an apparent pre-1920
/// birth year really means 20xx.
const LEGACY_CENTURY_CUTOFF: i32 = 1920;

// ─── Low-level helpers ───────────────────────────────────────────────────────

fn all_digits(s: &str) -> bool {
  !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}

/// Parse a digit run that has already been validated by [`all_digits`].
fn digits(s: &str) -> u32 {
  s.bytes().fold(0, |acc, b| acc * 10 + u32::from(b - b'0'))
}

/// 12-character form: `YYYYDDDSSSSS` — 4-digit year, 3-digit day-code,
/// 5 serial digits (unused here).
fn parse_new_format(nic: &str) -> Result<(i32, u32)> {
  if !all_digits(nic) {
    return Err(Error::Digits);
  }
  let year = digits(&nic[0..4]) as i32;
  let day_code = digits(&nic[4..7]);
  Ok((year, day_code))
}

/// 10-character form: `YYDDDSSSSC` — 2-digit year, 3-digit day-code, 4 serial
/// digits, and a final digit or checksum letter (V/X, either case, no
/// computed meaning).
fn parse_legacy_format(nic: &str) -> Result<(i32, u32)> {
  let (body, last) = nic.split_at(9);
  if !all_digits(body) {
    return Err(Error::Digits);
  }
  if !matches!(last.as_bytes(), [b'0'..=b'9' | b'V' | b'v' | b'X' | b'x']) {
    return Err(Error::Digits);
  }

  let mut year = 1900 + digits(&body[0..2]) as i32;
  if year < LEGACY_CENTURY_CUTOFF {
    year += 100;
  }
  let day_code = digits(&body[2..5]);
  Ok((year, day_code))
}

/// Remove the gender offset: codes above 500 are female, with the true
/// day-of-year 500 lower. Exactly 500 is still male.
fn split_day_code(day_code: u32) -> (Gender, u32) {
  if day_code > FEMALE_OFFSET {
    (Gender::Female, day_code - FEMALE_OFFSET)
  } else {
    (Gender::Male, day_code)
  }
}

// ─── Decoder ─────────────────────────────────────────────────────────────────

/// Decode a raw NIC string into a [`DecodedIdentity`].
///
/// Accepts the 12-digit form and the legacy 10-character form (9 digits plus
/// a digit or V/X). Surrounding whitespace is ignored. Day-codes that do not
/// land on a real day of the encoded year — zero, or past December 31 once
/// the gender offset is removed — are rejected rather than wrapped into a
/// neighbouring year.
pub fn decode(raw: &str) -> Result<DecodedIdentity> {
  let nic = raw.trim();
  if nic.is_empty() {
    return Err(Error::Empty);
  }
  // Reject non-ASCII up front so the fixed-width slicing below stays on
  // character boundaries.
  if !nic.is_ascii() {
    return Err(Error::Digits);
  }

  let (year, day_code) = match nic.len() {
    12 => parse_new_format(nic)?,
    10 => parse_legacy_format(nic)?,
    other => return Err(Error::Length(other)),
  };

  let (gender, day_of_year) = split_day_code(day_code);

  // from_yo_opt validates the ordinal against the year's actual day count,
  // leap years included.
  let birth_date =
    NaiveDate::from_yo_opt(year, day_of_year).ok_or(Error::DayCode(day_code))?;

  Ok(DecodedIdentity {
    birth_year: year,
    gender,
    birth_date,
  })
}

// ─── Tests ───────────────────────────────────────────────────────────────────
