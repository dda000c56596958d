//! The decoded identity — the thin value object a NIC number expands into.
//!
//! An identity holds only what the NIC itself encodes (year, gender, date of
//! birth). Age and similar attributes are computed on read against a caller
//! supplied "today", never stored.

use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

/// The gender encoded in the NIC day-code field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
  Male,
  Female,
}

impl std::fmt::Display for Gender {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.write_str(match self {
      Gender::Male => "Male",
      Gender::Female => "Female",
    })
  }
}

/// What a valid NIC number decodes to. Immutable; computed fresh on every
/// decode call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecodedIdentity {
  pub birth_year: i32,
  pub gender:     Gender,
  pub birth_date: NaiveDate,
}

impl DecodedIdentity {
  /// Whole years between the birth date and `today`, decremented by one when
  /// `today`'s (month, day) precedes the birth (month, day).
  ///
  /// Negative for birth dates in the future; callers decide how to present
  /// that.
  pub fn age_on(&self, today: NaiveDate) -> i32 {
    let mut age = today.year() - self.birth_date.year();
    if (today.month(), today.day()) < (self.birth_date.month(), self.birth_date.day()) {
      age -= 1;
    }
    age
  }

  /// True when `today` shares the birth (month, day), year-independent.
  pub fn is_birthday(&self, today: NaiveDate) -> bool {
    today.month() == self.birth_date.month() && today.day() == self.birth_date.day()
  }

  /// The day of the week the person was born on.
  pub fn weekday(&self) -> Weekday {
    self.birth_date.weekday()
  }

  /// Full English weekday name ("Sunday" .. "Saturday").
  pub fn weekday_name(&self) -> &'static str {
    match self.weekday() {
      Weekday::Mon => "Monday",
      Weekday::Tue => "Tuesday",
      Weekday::Wed => "Wednesday",
      Weekday::Thu => "Thursday",
      Weekday::Fri => "Friday",
      Weekday::Sat => "Saturday",
      Weekday::Sun => "Sunday",
    }
  }
}

// ─── Tests ───────────────────────────────────────────────────────────────────
