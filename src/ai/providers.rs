use super::{GeminiBackend, LanguageModel, UnconfiguredModel};
use crate::config::AiConfig;
use std::sync::Arc;

/// Pick the backend for the given configuration.
///
/// Without an API key the app still runs; every AI call fails and is
/// recovered locally (fallback classification, apology message).
pub fn model_from_config(config: &AiConfig) -> Arc<dyn LanguageModel> {
    match &config.api_key {
        Some(key) => Arc::new(GeminiBackend::with_base_url(
            key.clone(),
            config.model.clone(),
            config.base_url.clone(),
        )),
        None => {
            tracing::warn!("GEMINI_API_KEY not set; AI analysis and analyst chat are unavailable");
            Arc::new(UnconfiguredModel)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_key_selects_unconfigured_model() {
        let config = AiConfig::default();
        assert_eq!(model_from_config(&config).model_name(), "unconfigured");
    }

    #[test]
    fn key_selects_gemini_with_configured_model() {
        let config = AiConfig {
            api_key: Some("k".to_string()),
            model: "gemini-2.0-flash".to_string(),
            ..AiConfig::default()
        };
        assert_eq!(model_from_config(&config).model_name(), "gemini-2.0-flash");
    }
}
