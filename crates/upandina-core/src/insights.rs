//! The aggregated "fun facts" payload and its building blocks.
//!
//! Every field is independently optional-or-empty: a source that fails or
//! finds nothing contributes its default, never an error.

use serde::{Deserialize, Serialize};

use crate::zodiac::Zodiac;

/// Cap on the shared-birthday result set.
pub const MAX_PEOPLE: usize = 5;

/// Cap on the birth-year movie result set.
pub const MAX_MOVIES: usize = 5;

/// A public figure who shares the birth (month, day), year-independent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
  pub name: String,
  /// Short free-text description; empty when the source has none.
  pub bio:  String,
  /// Link to the person's profile in the source knowledge graph.
  pub url:  String,
}

/// A page referenced by a historical event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventPage {
  pub title: String,
  pub url:   String,
}

/// A single "on this day" historical event for the birth (month, day).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoricalEvent {
  pub year:  i32,
  pub text:  String,
  pub pages: Vec<EventPage>,
}

/// A movie released in the birth year.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Movie {
  pub title:      String,
  /// Absent when the source has no poster asset for the title.
  pub poster_url: Option<String>,
}

/// Everything the aggregator assembles for one birth date.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InsightsPayload {
  pub zodiac: Zodiac,
  pub people: Vec<Person>,
  pub event:  Option<HistoricalEvent>,
  pub movies: Vec<Movie>,
}

// ─── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn payload_json_shape() {
    let payload = InsightsPayload {
      zodiac: Zodiac::Ox,
      people: vec![Person {
        name: "Mark Wahlberg".to_string(),
        bio:  "American actor".to_string(),
        url:  "http://www.wikidata.org/entity/Q164119".to_string(),
      }],
      event:  None,
      movies: vec![Movie {
        title:      "Back to the Future".to_string(),
        poster_url: None,
      }],
    };

    let json = serde_json::to_value(&payload).unwrap();
    assert_eq!(json["zodiac"], "Ox");
    assert_eq!(json["people"][0]["name"], "Mark Wahlberg");
    assert!(json["event"].is_null());
    assert!(json["movies"][0]["poster_url"].is_null());
  }
}
