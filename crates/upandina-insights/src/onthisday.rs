//! Historical-event lookup against the Wikipedia "on this day" feed.
//!
//! `GET {base}/{month}/{day}` returns every recorded event for the calendar
//! day; only the first is used.

use reqwest::Client;
use serde::Deserialize;
use upandina_core::insights::{EventPage, HistoricalEvent};

use crate::error::{Error, Result};

// ─── Response schema ─────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
struct Feed {
  #[serde(default)]
  events: Vec<FeedEvent>,
}

#[derive(Debug, Deserialize)]
struct FeedEvent {
  year: i32,
  text: String,
  #[serde(default)]
  pages: Vec<FeedPage>,
}

#[derive(Debug, Deserialize)]
struct FeedPage {
  titles:       Option<Titles>,
  content_urls: Option<ContentUrls>,
}

#[derive(Debug, Deserialize)]
struct Titles {
  normalized: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ContentUrls {
  desktop: Option<PageUrl>,
}

#[derive(Debug, Deserialize)]
struct PageUrl {
  page: Option<String>,
}

// ─── Mapping ─────────────────────────────────────────────────────────────────

fn page_url(title: &str, urls: Option<ContentUrls>) -> String {
  if let Some(page) = urls.and_then(|u| u.desktop).and_then(|d| d.page) {
    return page;
  }
  // Fallback: canonical article URLs use underscores for spaces.
  format!("https://en.wikipedia.org/wiki/{}", title.replace(' ', "_"))
}

/// Take the first event, if any; pages without a normalized title are
/// dropped.
fn map_feed(feed: Feed) -> Option<HistoricalEvent> {
  let first = feed.events.into_iter().next()?;
  let pages = first
    .pages
    .into_iter()
    .filter_map(|p| {
      let title = p.titles.and_then(|t| t.normalized)?;
      let url = page_url(&title, p.content_urls);
      Some(EventPage { title, url })
    })
    .collect();

  Some(HistoricalEvent {
    year: first.year,
    text: first.text,
    pages,
  })
}

// ─── Fetch ───────────────────────────────────────────────────────────────────

pub(crate) async fn fetch(
  client: &Client,
  endpoint: &str,
  month: u32,
  day: u32,
) -> Result<Option<HistoricalEvent>> {
  let url = format!("{}/{month}/{day}", endpoint.trim_end_matches('/'));
  let resp = client.get(url).send().await?;

  if !resp.status().is_success() {
    return Err(Error::Status {
      service: "onthisday",
      status:  resp.status(),
    });
  }

  let feed: Feed = resp.json().await?;
  Ok(map_feed(feed))
}

// ─── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn first_event_only() {
    let raw = r#"{
      "events": [
        {
          "year": 1967,
          "text": "The Six-Day War begins.",
          "pages": [
            {
              "titles": { "normalized": "Six-Day War" },
              "content_urls": {
                "desktop": { "page": "https://en.wikipedia.org/wiki/Six-Day_War" }
              }
            }
          ]
        },
        { "year": 1981, "text": "A later event.", "pages": [] }
      ]
    }"#;
    let feed: Feed = serde_json::from_str(raw).unwrap();
    let event = map_feed(feed).unwrap();

    assert_eq!(event.year, 1967);
    assert_eq!(event.text, "The Six-Day War begins.");
    assert_eq!(event.pages.len(), 1);
    assert_eq!(event.pages[0].title, "Six-Day War");
    assert_eq!(event.pages[0].url, "https://en.wikipedia.org/wiki/Six-Day_War");
  }

  #[test]
  fn empty_feed_maps_to_none() {
    let feed: Feed = serde_json::from_str(r#"{ "events": [] }"#).unwrap();
    assert!(map_feed(feed).is_none());

    let feed: Feed = serde_json::from_str("{}").unwrap();
    assert!(map_feed(feed).is_none());
  }

  #[test]
  fn page_url_falls_back_to_underscored_title() {
    let raw = r#"{
      "events": [{
        "year": 1900,
        "text": "Something happened.",
        "pages": [{ "titles": { "normalized": "Some Article Name" } }]
      }]
    }"#;
    let feed: Feed = serde_json::from_str(raw).unwrap();
    let event = map_feed(feed).unwrap();
    assert_eq!(
      event.pages[0].url,
      "https://en.wikipedia.org/wiki/Some_Article_Name"
    );
  }

  #[test]
  fn pages_without_titles_dropped() {
    let raw = r#"{
      "events": [{
        "year": 1900,
        "text": "Something happened.",
        "pages": [{}, { "titles": {} }]
      }]
    }"#;
    let feed: Feed = serde_json::from_str(raw).unwrap();
    assert!(map_feed(feed).unwrap().pages.is_empty());
  }
}
