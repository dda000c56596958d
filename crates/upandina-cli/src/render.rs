//! Plain-text rendering for the `decode` and `insights` subcommands.
//!
//! Pure string builders so output stays testable without capturing stdout.

use std::fmt::Write as _;

use chrono::NaiveDate;
use upandina_core::{
  identity::DecodedIdentity, insights::InsightsPayload, zodiac::Zodiac,
};

const NOTHING_FOUND: &str = "  (nothing found)";

/// The decoded identity block.
pub fn identity(identity: &DecodedIdentity, today: NaiveDate) -> String {
  let mut out = String::new();
  let _ = writeln!(
    out,
    "Born:    {}, {}",
    identity.weekday_name(),
    identity.birth_date.format("%-d %B %Y"),
  );
  let _ = writeln!(out, "Gender:  {}", identity.gender);
  let _ = writeln!(out, "Age:     {}", identity.age_on(today));
  let _ = writeln!(out, "Zodiac:  {}", Zodiac::for_year(identity.birth_year));
  if identity.is_birthday(today) {
    let _ = writeln!(out, "\nHappy birthday! 🎉");
  }
  out
}

/// The four fun-fact cards, with placeholders for empty sources.
pub fn insights(payload: &InsightsPayload, birth_year: i32) -> String {
  let mut out = String::new();

  let _ = writeln!(out, "Chinese zodiac: {}", payload.zodiac);

  let _ = writeln!(out, "\nFamous birthdays");
  if payload.people.is_empty() {
    let _ = writeln!(out, "{NOTHING_FOUND}");
  }
  for person in &payload.people {
    if person.bio.is_empty() {
      let _ = writeln!(out, "  * {}", person.name);
    } else {
      let _ = writeln!(out, "  * {} ({})", person.name, person.bio);
    }
  }

  let _ = writeln!(out, "\nOn this day");
  match &payload.event {
    Some(event) => {
      let _ = writeln!(out, "  {}: {}", event.year, event.text);
      for page in &event.pages {
        let _ = writeln!(out, "    {} <{}>", page.title, page.url);
      }
    }
    None => {
      let _ = writeln!(out, "{NOTHING_FOUND}");
    }
  }

  let _ = writeln!(out, "\nMovies from {birth_year}");
  if payload.movies.is_empty() {
    let _ = writeln!(out, "{NOTHING_FOUND}");
  }
  for movie in &payload.movies {
    let _ = writeln!(out, "  * {}", movie.title);
  }

  out
}

// ─── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
  use upandina_core::{
    identity::Gender,
    insights::{HistoricalEvent, Movie, Person},
  };

  use super::*;

  fn ox_payload() -> InsightsPayload {
    InsightsPayload {
      zodiac: Zodiac::Ox,
      people: vec![Person {
        name: "Mark Wahlberg".to_string(),
        bio:  "American actor".to_string(),
        url:  "http://www.wikidata.org/entity/Q164119".to_string(),
      }],
      event:  Some(HistoricalEvent {
        year:  1967,
        text:  "The Six-Day War begins.".to_string(),
        pages: vec![],
      }),
      movies: vec![Movie {
        title:      "Back to the Future".to_string(),
        poster_url: None,
      }],
    }
  }

  #[test]
  fn identity_block_has_weekday_and_age() {
    let id = DecodedIdentity {
      birth_year: 1985,
      gender:     Gender::Male,
      birth_date: NaiveDate::from_ymd_opt(1985, 6, 5).unwrap(),
    };
    let today = NaiveDate::from_ymd_opt(2026, 8, 27).unwrap();

    let text = identity(&id, today);
    assert!(text.contains("Wednesday, 5 June 1985"));
    assert!(text.contains("Age:     41"));
    assert!(text.contains("Zodiac:  Ox"));
    assert!(!text.contains("Happy birthday"));
  }

  #[test]
  fn identity_block_greets_on_birthday() {
    let id = DecodedIdentity {
      birth_year: 1985,
      gender:     Gender::Male,
      birth_date: NaiveDate::from_ymd_opt(1985, 6, 5).unwrap(),
    };
    let today = NaiveDate::from_ymd_opt(2026, 6, 5).unwrap();

    assert!(identity(&id, today).contains("Happy birthday"));
  }

  #[test]
  fn insights_lists_all_cards() {
    let text = insights(&ox_payload(), 1985);
    assert!(text.contains("Mark Wahlberg (American actor)"));
    assert!(text.contains("1967: The Six-Day War begins."));
    assert!(text.contains("Movies from 1985"));
    assert!(text.contains("Back to the Future"));
    assert!(!text.contains("(nothing found)"));
  }

  #[test]
  fn empty_sources_render_placeholders() {
    let payload = InsightsPayload {
      zodiac: Zodiac::Ox,
      people: vec![],
      event:  None,
      movies: vec![],
    };

    let text = insights(&payload, 1985);
    assert_eq!(text.matches("(nothing found)").count(), 3);
  }
}
