//! Birth-year movie lookup against the TMDB discover endpoint.
//!
//! Requires an API key; the caller skips this module entirely when none is
//! configured.

use reqwest::Client;
use serde::Deserialize;
use upandina_core::insights::{MAX_MOVIES, Movie};

use crate::error::{Error, Result};

const POSTER_BASE: &str = "https://image.tmdb.org/t/p/w200";

// ─── Response schema ─────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
struct DiscoverResponse {
  #[serde(default)]
  results: Vec<DiscoverMovie>,
}

#[derive(Debug, Deserialize)]
struct DiscoverMovie {
  title:       String,
  poster_path: Option<String>,
}

// ─── Mapping ─────────────────────────────────────────────────────────────────

/// Results arrive popularity-sorted; keep the top few.
fn map_results(response: DiscoverResponse) -> Vec<Movie> {
  response
    .results
    .into_iter()
    .take(MAX_MOVIES)
    .map(|m| Movie {
      title:      m.title,
      poster_url: m.poster_path.map(|p| format!("{POSTER_BASE}{p}")),
    })
    .collect()
}

// ─── Fetch ───────────────────────────────────────────────────────────────────

pub(crate) async fn fetch(
  client: &Client,
  endpoint: &str,
  api_key: &str,
  year: i32,
) -> Result<Vec<Movie>> {
  let resp = client
    .get(endpoint)
    .query(&[
      ("primary_release_year", year.to_string().as_str()),
      ("sort_by", "popularity.desc"),
      ("api_key", api_key),
    ])
    .send()
    .await?;

  if !resp.status().is_success() {
    return Err(Error::Status {
      service: "tmdb",
      status:  resp.status(),
    });
  }

  let body: DiscoverResponse = resp.json().await?;
  Ok(map_results(body))
}

// ─── Tests ───────────────────────────────────────────────────────────────────
