//! Handler for `GET /insights/{nic}`.

use std::sync::Arc;

use axum::{
  Json,
  extract::{Path, State},
};
use chrono::Utc;
use serde::Serialize;
use upandina_core::{
  cache::InsightsCache, insights::InsightsPayload, source::InsightSources,
};
use upandina_insights::InsightsBuilder;

use crate::{decode::IdentityResponse, error::ApiError};

#[derive(Debug, Serialize)]
pub struct InsightsResponse {
  pub identity: IdentityResponse,
  pub insights: InsightsPayload,
}

/// `GET /insights/{nic}` — decode, then aggregate.
///
/// Source failures degrade inside the aggregator; the only error status this
/// handler produces is 422 for a malformed NIC.
pub async fn handler<S, C>(
  State(builder): State<Arc<InsightsBuilder<S, C>>>,
  Path(nic): Path<String>,
) -> Result<Json<InsightsResponse>, ApiError>
where
  S: InsightSources,
  C: InsightsCache,
{
  let identity = upandina_nic::decode(&nic)?;
  let insights = builder.build(identity.birth_date).await;
  let today = Utc::now().date_naive();
  Ok(Json(InsightsResponse {
    identity: IdentityResponse::new(identity, today),
    insights,
  }))
}
