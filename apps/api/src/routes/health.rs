use axum::{extract::State, Json};
use serde_json::{json, Value};

use crate::state::AppState;

/// GET /health
/// Returns service version and which suggestion providers are configured.
pub async fn health_handler(State(state): State<AppState>) -> Json<Value> {
    let credentials = state.config.credentials();
    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
        "service": "resume-api",
        "providers": {
            "primary": credentials.primary_api_key.is_some(),
            "secondary": credentials.secondary_api_key.is_some(),
        }
    }))
}
