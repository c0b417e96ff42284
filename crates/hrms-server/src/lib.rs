//! HTTP front door for the HRMS attendance service.
//!
//! Wraps [`hrms_api::api_router`] under `/api` with request tracing and a
//! permissive CORS policy for the browser UI, and serves a small banner at
//! `/`.

use std::{path::PathBuf, sync::Arc};

use axum::{Json, Router, routing::get};
use hrms_core::store::RecordStore;
use serde::Deserialize;
use serde_json::{Value, json};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

// ─── Configuration ────────────────────────────────────────────────────────────

/// Runtime server configuration, deserialised from `config.toml` and
/// `HRMS_*` environment variables.
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct ServerConfig {
  pub host:       String,
  pub port:       u16,
  pub store_path: PathBuf,
}

impl Default for ServerConfig {
  fn default() -> Self {
    Self {
      host:       "127.0.0.1".to_string(),
      port:       8000,
      store_path: PathBuf::from("hrms.db"),
    }
  }
}

impl ServerConfig {
  pub fn address(&self) -> String { format!("{}:{}", self.host, self.port) }
}

// ─── Router ───────────────────────────────────────────────────────────────────

/// `GET /`
async fn root() -> Json<Value> {
  Json(json!({
    "message": "HRMS Lite API is running",
    "version": env!("CARGO_PKG_VERSION"),
  }))
}

/// Build the full application router for `store`.
pub fn app<S>(store: Arc<S>) -> Router
where
  S: RecordStore + 'static,
{
  Router::new()
    .route("/", get(root))
    .nest("/api", hrms_api::api_router(store))
    .layer(CorsLayer::permissive())
    .layer(TraceLayer::new_for_http())
}

#[cfg(test)]
mod tests {
  use super::*;

  use axum::{
    body::Body,
    http::{Request, StatusCode},
  };
  use hrms_store_sqlite::SqliteStore;
  use tower::ServiceExt as _;

  async fn get_json(app: Router, uri: &str) -> (StatusCode, Value) {
    let req = Request::builder().uri(uri).body(Body::empty()).unwrap();
    let resp = app.oneshot(req).await.unwrap();
    let status = resp.status();
    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
  }

  #[tokio::test]
  async fn root_reports_version() {
    let store = SqliteStore::open_in_memory().await.unwrap();
    let (status, body) = get_json(app(Arc::new(store)), "/").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
  }

  #[tokio::test]
  async fn api_is_nested_under_prefix() {
    let store = SqliteStore::open_in_memory().await.unwrap();
    let (status, body) = get_json(app(Arc::new(store)), "/api/employees").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([]));
  }

  #[test]
  fn config_defaults_fill_missing_keys() {
    let settings = config::Config::builder()
      .set_override("port", 9000)
      .unwrap()
      .build()
      .unwrap();
    let cfg: ServerConfig = settings.try_deserialize().unwrap();
    assert_eq!(cfg.port, 9000);
    assert_eq!(cfg.host, "127.0.0.1");
    assert_eq!(cfg.address(), "127.0.0.1:9000");
  }
}
