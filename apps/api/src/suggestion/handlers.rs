//! Axum route handler for the Suggestion API.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

use crate::errors::AppError;
use crate::state::AppState;
use crate::suggestion::prompts::Section;

/// Both fields take any JSON value so a wrongly-typed `section` is reported as
/// an invalid section rather than rejected by the extractor.
#[derive(Debug, Deserialize)]
pub struct SuggestionRequest {
    pub section: Option<Value>,
    pub context: Option<Value>,
}

#[derive(Debug, Serialize)]
pub struct SuggestionResponse {
    pub suggestion: String,
}

/// POST /suggest
///
/// Validates the section before any provider is contacted; after that the
/// response is always a 200 with one suggestion string.
pub async fn handle_suggest(
    State(state): State<AppState>,
    Json(request): Json<SuggestionRequest>,
) -> Result<Json<SuggestionResponse>, AppError> {
    let section: Section = request
        .section
        .as_ref()
        .and_then(Value::as_str)
        .ok_or(AppError::InvalidSection)?
        .parse()?;
    let context = context_text(request.context);

    let suggestion = state.suggester.suggest(section, &context).await;
    debug!("Returning {section} suggestion from {:?}", suggestion.source);

    Ok(Json(SuggestionResponse {
        suggestion: suggestion.text,
    }))
}

/// Strings are used verbatim; absent or null is empty; anything else is its JSON text.
fn context_text(context: Option<Value>) -> String {
    match context {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s,
        Some(other) => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_context_text_stringifies_non_strings() {
        assert_eq!(context_text(None), "");
        assert_eq!(context_text(Some(Value::Null)), "");
        assert_eq!(context_text(Some(json!("BSc CS"))), "BSc CS");
        assert_eq!(context_text(Some(json!(42))), "42");
        assert_eq!(context_text(Some(json!(["a", "b"]))), r#"["a","b"]"#);
    }
}
