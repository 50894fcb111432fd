//! Suggestion chain — tries each configured provider in priority order and
//! falls back to a static sentence when none answers.
//!
//! Flow: section → prompt → provider[0] → provider[1] → ... → fallback.
//! Providers run sequentially; the first `Ok` wins and later providers are never called.

use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::llm_client::SuggestionProvider;
use crate::suggestion::prompts::Section;

/// Which tier produced a suggestion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SuggestionSource {
    Provider(String),
    Fallback,
}

#[derive(Debug, Clone)]
pub struct Suggestion {
    pub text: String,
    pub source: SuggestionSource,
}

pub struct SuggestionOrchestrator {
    providers: Vec<Arc<dyn SuggestionProvider>>,
}

impl SuggestionOrchestrator {
    pub fn new(providers: Vec<Arc<dyn SuggestionProvider>>) -> Self {
        Self { providers }
    }

    /// Produces exactly one suggestion. Never fails: provider errors are logged
    /// and the chain moves on.
    pub async fn suggest(&self, section: Section, context: &str) -> Suggestion {
        let prompt = section.prompt(context);

        for provider in &self.providers {
            debug!("Requesting {section} suggestion from {}", provider.name());

            match provider.complete(&prompt).await {
                Ok(text) => {
                    info!("{section} suggestion served by {}", provider.name());
                    return Suggestion {
                        text,
                        source: SuggestionSource::Provider(provider.name().to_string()),
                    };
                }
                Err(e) => {
                    warn!("{} suggestion failed, falling through: {e}", provider.name());
                }
            }
        }

        info!("{section} suggestion served by static fallback");
        Suggestion {
            text: section.fallback_suggestion(),
            source: SuggestionSource::Fallback,
        }
    }
}
