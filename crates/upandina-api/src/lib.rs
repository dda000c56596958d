//! JSON REST API for upandina.
//!
//! Exposes an axum [`Router`] backed by any
//! [`upandina_core::source::InsightSources`] +
//! [`upandina_core::cache::InsightsCache`] pair. TLS and transport concerns
//! are the caller's responsibility.
//!
//! # Mounting
//!
//! ```rust,ignore
//! .nest("/api", upandina_api::api_router(builder.clone()))
//! ```

pub mod decode;
pub mod error;
pub mod insights;

use std::sync::Arc;

use axum::{Router, routing::get};
use upandina_core::{cache::InsightsCache, source::InsightSources};
use upandina_insights::InsightsBuilder;

pub use error::ApiError;

/// Build a fully-materialised API router for `builder`.
///
/// The returned `Router<()>` can be nested into any parent router regardless
/// of its own state type.
pub fn api_router<S, C>(builder: Arc<InsightsBuilder<S, C>>) -> Router<()>
where
  S: InsightSources + 'static,
  C: InsightsCache + 'static,
{
  Router::new()
    .route("/decode/{nic}", get(decode::handler))
    .route("/insights/{nic}", get(insights::handler::<S, C>))
    .with_state(builder)
}
