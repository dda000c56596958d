//! Chinese zodiac — a pure function of the birth year.

use serde::{Deserialize, Serialize};

/// The fixed 12-year animal cycle, anchored so that 1900 is a Rat year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Zodiac {
  Rat,
  Ox,
  Tiger,
  Rabbit,
  Dragon,
  Snake,
  Horse,
  Goat,
  Monkey,
  Rooster,
  Dog,
  Pig,
}

/// Cycle order starting from the 1900 anchor.
const CYCLE: [Zodiac; 12] = [
  Zodiac::Rat,
  Zodiac::Ox,
  Zodiac::Tiger,
  Zodiac::Rabbit,
  Zodiac::Dragon,
  Zodiac::Snake,
  Zodiac::Horse,
  Zodiac::Goat,
  Zodiac::Monkey,
  Zodiac::Rooster,
  Zodiac::Dog,
  Zodiac::Pig,
];

impl Zodiac {
  /// The animal for a calendar year.
  ///
  /// Uses euclidean modulo so years before 1900 wrap backwards through the
  /// cycle instead of truncating toward zero.
  pub fn for_year(year: i32) -> Zodiac {
    CYCLE[(year - 1900).rem_euclid(12) as usize]
  }

  /// English label, identical to the serde representation.
  pub fn label(&self) -> &'static str {
    match self {
      Zodiac::Rat => "Rat",
      Zodiac::Ox => "Ox",
      Zodiac::Tiger => "Tiger",
      Zodiac::Rabbit => "Rabbit",
      Zodiac::Dragon => "Dragon",
      Zodiac::Snake => "Snake",
      Zodiac::Horse => "Horse",
      Zodiac::Goat => "Goat",
      Zodiac::Monkey => "Monkey",
      Zodiac::Rooster => "Rooster",
      Zodiac::Dog => "Dog",
      Zodiac::Pig => "Pig",
    }
  }
}

impl std::fmt::Display for Zodiac {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.write_str(self.label())
  }
}

// ─── Tests ───────────────────────────────────────────────────────────────────
