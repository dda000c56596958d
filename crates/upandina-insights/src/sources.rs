//! [`HttpSources`] — the reqwest-backed implementation of
//! [`InsightSources`].

use std::time::Duration;

use reqwest::Client;
use upandina_core::{
  insights::{HistoricalEvent, Movie, Person},
  source::InsightSources,
};

use crate::{
  error::{Error, Result},
  onthisday, tmdb, wikidata,
};

/// Per-request transport timeout. Every failure degrades to an empty card,
/// so this is kept short.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

// ─── Configuration ───────────────────────────────────────────────────────────

/// Endpoint settings for the three external services.
///
/// Defaults point at the public instances; tests and self-hosted mirrors
/// override them.
#[derive(Debug, Clone)]
pub struct SourceConfig {
  pub wikidata_endpoint:  String,
  pub onthisday_endpoint: String,
  pub tmdb_endpoint:      String,
  /// Absent key disables the movie source (skip, not an error).
  pub tmdb_api_key:       Option<String>,
}

impl Default for SourceConfig {
  fn default() -> Self {
    Self {
      wikidata_endpoint:  "https://query.wikidata.org/sparql".to_string(),
      onthisday_endpoint:
        "https://en.wikipedia.org/api/rest_v1/feed/onthisday/events".to_string(),
      tmdb_endpoint: "https://api.themoviedb.org/3/discover/movie".to_string(),
      tmdb_api_key:  None,
    }
  }
}

// ─── Client ──────────────────────────────────────────────────────────────────

/// HTTP client for all three fun-fact services.
///
/// Cheap to clone — the inner [`reqwest::Client`] is `Arc`-based.
#[derive(Clone)]
pub struct HttpSources {
  client: Client,
  config: SourceConfig,
}

impl HttpSources {
  pub fn new(config: SourceConfig) -> Result<Self> {
    // Wikidata rejects requests without a User-Agent.
    let client = Client::builder()
      .timeout(REQUEST_TIMEOUT)
      .user_agent(concat!("upandina/", env!("CARGO_PKG_VERSION")))
      .build()?;
    Ok(Self { client, config })
  }
}

impl InsightSources for HttpSources {
  type Error = Error;

  async fn shared_birthdays(&self, month: u32, day: u32) -> Result<Vec<Person>> {
    wikidata::fetch(&self.client, &self.config.wikidata_endpoint, month, day).await
  }

  async fn on_this_day(
    &self,
    month: u32,
    day: u32,
  ) -> Result<Option<HistoricalEvent>> {
    onthisday::fetch(&self.client, &self.config.onthisday_endpoint, month, day)
      .await
  }

  async fn movies_for_year(&self, year: i32) -> Result<Vec<Movie>> {
    let Some(key) = self.config.tmdb_api_key.as_deref() else {
      tracing::debug!("no TMDB API key configured; skipping movie lookup");
      return Ok(Vec::new());
    };
    tmdb::fetch(&self.client, &self.config.tmdb_endpoint, key, year).await
  }
}
