// Suggestion Orchestrator: section prompts, the provider fallback chain, and its handler.
// All provider calls go through llm_client — no direct HTTP here.

pub mod handlers;
pub mod orchestrator;
pub mod prompts;
