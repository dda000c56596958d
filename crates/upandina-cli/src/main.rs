//! `upandina` — Sri Lankan NIC decoder and birthday fun-fact tool.
//!
//! # Usage
//!
//! ```
//! upandina decode 198515602345
//! upandina insights 198515602345 --tmdb-key $TMDB_API_KEY
//! upandina serve --config config.toml
//! ```

mod render;

use std::{
  path::{Path, PathBuf},
  sync::Arc,
};

use anyhow::Context as _;
use axum::Router;
use chrono::{Local, NaiveDate};
use clap::{Parser, Subcommand};
use serde::Deserialize;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;
use upandina_cache_sqlite::SqliteCache;
use upandina_core::{
  cache::{InsightsCache, MemoryCache},
  identity::DecodedIdentity,
  insights::InsightsPayload,
  zodiac::Zodiac,
};
use upandina_insights::{HttpSources, InsightsBuilder, SourceConfig};

// ─── CLI args ─────────────────────────────────────────────────────────────────

#[derive(Parser)]
#[command(
  name = "upandina",
  version,
  about = "Sri Lankan NIC decoder and birthday fun facts"
)]
struct Cli {
  #[command(subcommand)]
  command: Command,
}

#[derive(Subcommand)]
enum Command {
  /// Decode a NIC number. Offline; no lookups.
  Decode {
    /// The NIC number, old (10-character) or new (12-digit) format.
    nic: String,

    /// Print the result as JSON.
    #[arg(long)]
    json: bool,
  },

  /// Decode a NIC number, then fetch birthday fun facts.
  Insights {
    /// The NIC number, old (10-character) or new (12-digit) format.
    nic: String,

    /// Print the result as JSON.
    #[arg(long)]
    json: bool,

    /// SQLite cache location (default: ~/.cache/upandina/insights.db).
    #[arg(long, value_name = "PATH")]
    cache_db: Option<PathBuf>,

    /// Keep the cache in memory for this run only.
    #[arg(long)]
    no_cache: bool,

    /// TMDB API key; without one the movie card is skipped.
    #[arg(long, env = "TMDB_API_KEY")]
    tmdb_key: Option<String>,
  },

  /// Run the JSON HTTP API server.
  Serve {
    /// Path to the TOML configuration file.
    #[arg(short, long, default_value = "config.toml")]
    config: PathBuf,
  },
}

// ─── Server configuration ─────────────────────────────────────────────────────

/// Runtime server configuration, from `config.toml` and `UPANDINA_*`
/// environment variables.
#[derive(Deserialize, Clone)]
struct ServerConfig {
  #[serde(default = "default_host")]
  host:         String,
  #[serde(default = "default_port")]
  port:         u16,
  #[serde(default = "default_cache_path")]
  cache_path:   PathBuf,
  #[serde(default)]
  tmdb_api_key: Option<String>,
}

fn default_host() -> String {
  "127.0.0.1".to_string()
}

fn default_port() -> u16 {
  5271
}

fn default_cache_path() -> PathBuf {
  PathBuf::from("~/.cache/upandina/insights.db")
}

// ─── Entry point ──────────────────────────────────────────────────────────────

#[tokio::main]
async fn main() -> anyhow::Result<()> {
  // Initialise tracing.
  tracing_subscriber::fmt()
    .with_env_filter(
      EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env_lossy(),
    )
    .init();

  let cli = Cli::parse();

  match cli.command {
    Command::Decode { nic, json } => decode_cmd(&nic, json),
    Command::Insights {
      nic,
      json,
      cache_db,
      no_cache,
      tmdb_key,
    } => insights_cmd(&nic, json, cache_db, no_cache, tmdb_key).await,
    Command::Serve { config } => serve_cmd(config).await,
  }
}

// ─── decode ───────────────────────────────────────────────────────────────────

fn decode_cmd(nic: &str, json: bool) -> anyhow::Result<()> {
  let identity = upandina_nic::decode(nic)?;
  let today = Local::now().date_naive();

  if json {
    println!(
      "{}",
      serde_json::to_string_pretty(&identity_json(&identity, today))?
    );
  } else {
    print!("{}", render::identity(&identity, today));
  }
  Ok(())
}

fn identity_json(identity: &DecodedIdentity, today: NaiveDate) -> serde_json::Value {
  serde_json::json!({
    "birth_year":  identity.birth_year,
    "gender":      identity.gender,
    "birth_date":  identity.birth_date,
    "age":         identity.age_on(today),
    "weekday":     identity.weekday_name(),
    "is_birthday": identity.is_birthday(today),
    "zodiac":      Zodiac::for_year(identity.birth_year),
  })
}

// ─── insights ─────────────────────────────────────────────────────────────────

async fn insights_cmd(
  nic: &str,
  json: bool,
  cache_db: Option<PathBuf>,
  no_cache: bool,
  tmdb_key: Option<String>,
) -> anyhow::Result<()> {
  // Decode first; an invalid NIC must fail before any network activity.
  let identity = upandina_nic::decode(nic)?;

  let sources = HttpSources::new(SourceConfig {
    tmdb_api_key: tmdb_key,
    ..SourceConfig::default()
  })
  .context("building HTTP client")?;

  let payload = if no_cache {
    build_insights(sources, MemoryCache::new(), identity.birth_date).await
  } else {
    let path = cache_db.unwrap_or_else(default_cache_db);
    if let Some(parent) = path.parent() {
      std::fs::create_dir_all(parent)
        .with_context(|| format!("creating cache directory {parent:?}"))?;
    }
    let cache = SqliteCache::open(&path)
      .await
      .with_context(|| format!("failed to open cache at {path:?}"))?;
    build_insights(sources, cache, identity.birth_date).await
  };

  if json {
    let today = Local::now().date_naive();
    println!(
      "{}",
      serde_json::to_string_pretty(&serde_json::json!({
        "identity": identity_json(&identity, today),
        "insights": payload,
      }))?
    );
  } else {
    print!("{}", render::insights(&payload, identity.birth_year));
  }
  Ok(())
}

async fn build_insights<C: InsightsCache>(
  sources: HttpSources,
  cache: C,
  birth_date: NaiveDate,
) -> InsightsPayload {
  InsightsBuilder::new(sources, cache).build(birth_date).await
}

fn default_cache_db() -> PathBuf {
  expand_tilde(Path::new("~/.cache/upandina/insights.db"))
}

// ─── serve ────────────────────────────────────────────────────────────────────

async fn serve_cmd(config_path: PathBuf) -> anyhow::Result<()> {
  // Load configuration.
  let settings = config::Config::builder()
    .add_source(config::File::from(config_path).required(false))
    .add_source(config::Environment::with_prefix("UPANDINA"))
    .build()
    .context("failed to read config file")?;

  let server_cfg: ServerConfig = settings
    .try_deserialize()
    .context("failed to deserialise ServerConfig")?;

  // Open the SQLite cache.
  let cache_path = expand_tilde(&server_cfg.cache_path);
  if let Some(parent) = cache_path.parent() {
    std::fs::create_dir_all(parent)
      .with_context(|| format!("creating cache directory {parent:?}"))?;
  }
  let cache = SqliteCache::open(&cache_path)
    .await
    .with_context(|| format!("failed to open cache at {cache_path:?}"))?;

  let sources = HttpSources::new(SourceConfig {
    tmdb_api_key: server_cfg.tmdb_api_key.clone(),
    ..SourceConfig::default()
  })
  .context("building HTTP client")?;

  let builder = Arc::new(InsightsBuilder::new(sources, cache));

  let app = Router::new()
    .nest("/api", upandina_api::api_router(builder))
    .layer(TraceLayer::new_for_http());

  let address = format!("{}:{}", server_cfg.host, server_cfg.port);
  tracing::info!("Listening on http://{address}");
  let listener = TcpListener::bind(&address)
    .await
    .with_context(|| format!("failed to bind {address}"))?;

  axum::serve(listener, app).await.context("server error")?;

  Ok(())
}

/// Expand a leading `~` to the user's home directory.
fn expand_tilde(path: &Path) -> PathBuf {
  let s = path.to_string_lossy();
  if let Some(rest) = s.strip_prefix("~/")
    && let Ok(home) = std::env::var("HOME")
  {
    return PathBuf::from(home).join(rest);
  }
  path.to_path_buf()
}
