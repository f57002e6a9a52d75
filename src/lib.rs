pub mod config;
pub mod connect;
pub mod error;
pub mod sink;

use crate::config::Config;
use crate::connect::verify::SignatureVerifier;
use crate::connect::webhook::handle_webhook;
use crate::sink::EnvelopeSink;
use axum::{
    extract::DefaultBodyLimit,
    http::HeaderName,
    routing::{get, post},
    Json, Router,
};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[derive(Clone)]
pub struct AppState {
    pub verifier: Arc<SignatureVerifier>,
    pub signature_header: HeaderName,
    pub sink: Arc<dyn EnvelopeSink>,
}

impl AppState {
    pub fn new(config: &Config, sink: Arc<dyn EnvelopeSink>) -> Self {
        Self {
            verifier: Arc::new(SignatureVerifier::from_config(&config.connect)),
            signature_header: config.connect.signature_header.clone(),
            sink,
        }
    }
}

pub async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "ok",
        "service": "docuhook",
        "version": VERSION
    }))
}

pub async fn root() -> &'static str {
    "docuhook - DocuSign Connect → HMAC verify → downstream"
}

pub fn create_app(state: AppState, body_limit: usize) -> Router {
    Router::new()
        .route("/", get(root))
        .route("/health", get(health))
        .route("/webhooks/docusign", post(handle_webhook))
        .layer(DefaultBodyLimit::max(body_limit))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
