use std::sync::Arc;

use anyhow::Result;

use crate::config::Config;
use crate::llm_client::{build_http_client, providers_from_config};
use crate::render::pdf::{GenPdfConverter, HtmlToPdf};
use crate::suggestion::orchestrator::SuggestionOrchestrator;

/// Shared application state injected into all route handlers via Axum extractors.
/// Immutable after startup; cloning only bumps reference counts.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Provider chain built once from the configured credentials.
    pub suggester: Arc<SuggestionOrchestrator>,
    /// Pluggable HTML → PDF engine. Default: GenPdfConverter.
    pub pdf: Arc<dyn HtmlToPdf>,
}

impl AppState {
    /// Wires the provider chain and the default PDF engine from `config`.
    pub fn from_config(config: Config) -> Result<Self> {
        let client = build_http_client(config.provider_timeout_secs)?;
        let providers = providers_from_config(&config, client);

        Ok(AppState {
            suggester: Arc::new(SuggestionOrchestrator::new(providers)),
            pdf: Arc::new(GenPdfConverter::new()),
            config,
        })
    }
}
