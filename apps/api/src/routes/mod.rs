pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::resume::handlers as resume;
use crate::state::AppState;
use crate::suggestion::handlers as suggestion;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(resume::handle_home))
        .route("/health", get(health::health_handler))
        .route("/preview", post(resume::handle_preview))
        .route("/download", post(resume::handle_download))
        .route("/suggest", post(suggestion::handle_suggest))
        .with_state(state)
}
