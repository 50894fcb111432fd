use anyhow::{Context, Result};

const DEFAULT_OPENAI_BASE_URL: &str = "https://api.openai.com/v1";
const DEFAULT_SECONDARY_COMPLETIONS_URL: &str =
    "https://api.openrouter.ai/v1/engines/deepseek/completions";

/// API keys for the suggestion providers. A `None` key disables that provider
/// for the lifetime of the process.
#[derive(Clone, Default)]
pub struct ProviderCredentials {
    pub primary_api_key: Option<String>,
    pub secondary_api_key: Option<String>,
}

impl std::fmt::Debug for ProviderCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProviderCredentials")
            .field("primary_api_key", &self.primary_api_key.as_ref().map(|_| "<redacted>"))
            .field(
                "secondary_api_key",
                &self.secondary_api_key.as_ref().map(|_| "<redacted>"),
            )
            .finish()
    }
}

/// Application configuration loaded from environment variables once at startup.
/// Every provider setting is optional; only malformed numeric values fail startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub credentials: ProviderCredentials,
    pub openai_base_url: String,
    pub secondary_completions_url: String,
    pub provider_timeout_secs: u64,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            credentials: ProviderCredentials {
                primary_api_key: optional_env("OPENAI_API_KEY"),
                secondary_api_key: optional_env("DEEPSEEK_KEY"),
            },
            openai_base_url: optional_env("OPENAI_BASE_URL")
                .unwrap_or_else(|| DEFAULT_OPENAI_BASE_URL.to_string()),
            secondary_completions_url: optional_env("SECONDARY_COMPLETIONS_URL")
                .unwrap_or_else(|| DEFAULT_SECONDARY_COMPLETIONS_URL.to_string()),
            provider_timeout_secs: optional_env("PROVIDER_TIMEOUT_SECS")
                .unwrap_or_else(|| "60".to_string())
                .parse::<u64>()
                .context("PROVIDER_TIMEOUT_SECS must be a whole number of seconds")?,
            port: optional_env("PORT")
                .unwrap_or_else(|| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: optional_env("RUST_LOG").unwrap_or_else(|| "info".to_string()),
        })
    }

    pub fn credentials(&self) -> &ProviderCredentials {
        &self.credentials
    }
}

impl Default for Config {
    /// Offline defaults: no providers configured.
    fn default() -> Self {
        Config {
            credentials: ProviderCredentials::default(),
            openai_base_url: DEFAULT_OPENAI_BASE_URL.to_string(),
            secondary_completions_url: DEFAULT_SECONDARY_COMPLETIONS_URL.to_string(),
            provider_timeout_secs: 60,
            port: 8080,
            rust_log: "info".to_string(),
        }
    }
}

/// Reads an environment variable, treating blank values as unset.
fn optional_env(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_credentials_debug_never_prints_keys() {
        let creds = ProviderCredentials {
            primary_api_key: Some("sk-live-secret".to_string()),
            secondary_api_key: None,
        };
        let rendered = format!("{creds:?}");
        assert!(!rendered.contains("sk-live-secret"));
        assert!(rendered.contains("<redacted>"));
    }

    #[test]
    fn test_default_config_has_no_providers() {
        let config = Config::default();
        assert!(config.credentials().primary_api_key.is_none());
        assert!(config.credentials().secondary_api_key.is_none());
        assert_eq!(config.port, 8080);
    }
}
