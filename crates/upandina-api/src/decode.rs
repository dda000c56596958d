//! Handler for `GET /decode/{nic}`.

use axum::{Json, extract::Path};
use chrono::{NaiveDate, Utc};
use serde::Serialize;
use upandina_core::{identity::DecodedIdentity, zodiac::Zodiac};

use crate::error::ApiError;

/// A decoded identity plus the attributes derived from it at request time.
#[derive(Debug, Serialize)]
pub struct IdentityResponse {
  #[serde(flatten)]
  pub identity:    DecodedIdentity,
  pub age:         i32,
  pub weekday:     &'static str,
  pub is_birthday: bool,
  pub zodiac:      Zodiac,
}

impl IdentityResponse {
  pub fn new(identity: DecodedIdentity, today: NaiveDate) -> Self {
    Self {
      age: identity.age_on(today),
      weekday: identity.weekday_name(),
      is_birthday: identity.is_birthday(today),
      zodiac: Zodiac::for_year(identity.birth_year),
      identity,
    }
  }
}

/// `GET /decode/{nic}` — pure decode, no lookups and no state.
pub async fn handler(
  Path(nic): Path<String>,
) -> Result<Json<IdentityResponse>, ApiError> {
  let identity = upandina_nic::decode(&nic)?;
  let today = Utc::now().date_naive();
  Ok(Json(IdentityResponse::new(identity, today)))
}
