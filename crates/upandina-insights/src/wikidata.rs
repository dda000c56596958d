//! Shared-birthday lookup against the Wikidata SPARQL endpoint.
//!
//! Selects humans (`wdt:P31 wd:Q5`) whose date of birth (`wdt:P569`) matches
//! the requested (month, day), any year, with English labels and optional
//! descriptions.

use reqwest::{Client, header::ACCEPT};
use serde::Deserialize;
use upandina_core::insights::{MAX_PEOPLE, Person};

use crate::error::{Error, Result};

// ─── Response schema ─────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
struct SparqlResponse {
  results: SparqlResults,
}

#[derive(Debug, Deserialize)]
struct SparqlResults {
  #[serde(default)]
  bindings: Vec<Binding>,
}

#[derive(Debug, Deserialize)]
struct Binding {
  #[serde(rename = "personLabel")]
  person_label: Option<Literal>,
  description:  Option<Literal>,
  person:       Option<Literal>,
}

#[derive(Debug, Deserialize)]
struct Literal {
  value: String,
}

// ─── Query + mapping ─────────────────────────────────────────────────────────

fn sparql_query(month: u32, day: u32, limit: usize) -> String {
  format!(
    "SELECT ?person ?personLabel ?description WHERE {{\n  \
       ?person wdt:P31 wd:Q5; wdt:P569 ?dob.\n  \
       FILTER(MONTH(?dob) = {month} && DAY(?dob) = {day})\n  \
       SERVICE wikibase:label {{ bd:serviceParam wikibase:language \"en\". }}\n  \
       OPTIONAL {{ ?person schema:description ?description \
                   FILTER (lang(?description) = \"en\") }}\n\
     }} LIMIT {limit}"
  )
}

/// Bindings without a label carry nothing displayable and are skipped; an
/// entity whose label is just its Q-id (no English label resolved) is kept —
/// that matches what the label service actually returns.
fn map_bindings(response: SparqlResponse) -> Vec<Person> {
  response
    .results
    .bindings
    .into_iter()
    .filter_map(|b| {
      let name = b.person_label?.value;
      Some(Person {
        name,
        bio: b.description.map(|d| d.value).unwrap_or_default(),
        url: b.person.map(|p| p.value).unwrap_or_default(),
      })
    })
    .collect()
}

// ─── Fetch ───────────────────────────────────────────────────────────────────

pub(crate) async fn fetch(
  client: &Client,
  endpoint: &str,
  month: u32,
  day: u32,
) -> Result<Vec<Person>> {
  let resp = client
    .get(endpoint)
    .query(&[
      ("format", "json"),
      ("query", sparql_query(month, day, MAX_PEOPLE).as_str()),
    ])
    .header(ACCEPT, "application/sparql-results+json")
    .send()
    .await?;

  if !resp.status().is_success() {
    return Err(Error::Status {
      service: "wikidata",
      status:  resp.status(),
    });
  }

  let body: SparqlResponse = resp.json().await?;
  Ok(map_bindings(body))
}

// ─── Tests ───────────────────────────────────────────────────────────────────
