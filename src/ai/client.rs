use async_trait::async_trait;
use serde_json::Value;

// ============================================
// Error Types
// ============================================

#[derive(Debug, thiserror::Error)]
pub enum AiError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("service error {status}: {body}")]
    Api { status: u16, body: String },

    #[error("service returned no text{}", .0.as_deref().map(|r| format!(" (blocked: {r})")).unwrap_or_default())]
    EmptyResponse(Option<String>),

    #[error("invalid JSON: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("invalid input: {0}")]
    InvalidInput(&'static str),

    #[error("no generative-language API key configured; set GEMINI_API_KEY")]
    NotConfigured,
}

pub type AiResult<T> = Result<T, AiError>;

// ============================================
// Request Types
// ============================================

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ContentRole {
    User,
    Model,
}

impl ContentRole {
    pub fn as_str(self) -> &'static str {
        match self {
            ContentRole::User => "user",
            ContentRole::Model => "model",
        }
    }
}

/// One conversation turn sent to the model.
#[derive(Clone, Debug, PartialEq)]
pub struct Content {
    pub role: ContentRole,
    pub text: String,
}

impl Content {
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            role: ContentRole::User,
            text: text.into(),
        }
    }

    pub fn model(text: impl Into<String>) -> Self {
        Self {
            role: ContentRole::Model,
            text: text.into(),
        }
    }
}

/// Constrains the reply to a MIME type and, optionally, a JSON schema.
#[derive(Clone, Debug, PartialEq)]
pub struct ResponseFormat {
    pub mime_type: String,
    pub schema: Option<Value>,
}

impl ResponseFormat {
    pub fn json(schema: Value) -> Self {
        Self {
            mime_type: "application/json".to_string(),
            schema: Some(schema),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct GenerateRequest {
    pub system_instruction: Option<String>,
    pub contents: Vec<Content>,
    pub response_format: Option<ResponseFormat>,
}

impl GenerateRequest {
    /// Single-turn request carrying one user prompt.
    pub fn prompt(text: impl Into<String>) -> Self {
        Self {
            contents: vec![Content::user(text)],
            ..Self::default()
        }
    }

    pub fn with_system_instruction(mut self, instruction: impl Into<String>) -> Self {
        self.system_instruction = Some(instruction.into());
        self
    }

    pub fn with_response_format(mut self, format: ResponseFormat) -> Self {
        self.response_format = Some(format);
        self
    }
}

// ============================================
// Backend Seam
// ============================================

/// A text-generation backend. Implementations perform exactly one request per
/// call, with no retry.
#[async_trait]
pub trait LanguageModel: Send + Sync {
    fn model_name(&self) -> &str;

    async fn generate(&self, request: &GenerateRequest) -> AiResult<String>;
}

/// Stand-in used when no API key is configured: every call fails, which the
/// classifier and analyst already recover from.
pub struct UnconfiguredModel;

#[async_trait]
impl LanguageModel for UnconfiguredModel {
    fn model_name(&self) -> &str {
        "unconfigured"
    }

    async fn generate(&self, _request: &GenerateRequest) -> AiResult<String> {
        Err(AiError::NotConfigured)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_response_mentions_block_reason() {
        let err = AiError::EmptyResponse(Some("SAFETY".to_string()));
        assert_eq!(err.to_string(), "service returned no text (blocked: SAFETY)");
        assert_eq!(
            AiError::EmptyResponse(None).to_string(),
            "service returned no text"
        );
    }

    #[test]
    fn prompt_builder_sets_single_user_turn() {
        let request = GenerateRequest::prompt("hi").with_system_instruction("be brief");
        assert_eq!(request.contents, vec![Content::user("hi")]);
        assert_eq!(request.system_instruction.as_deref(), Some("be brief"));
        assert!(request.response_format.is_none());
    }

    #[tokio::test]
    async fn unconfigured_model_always_fails() {
        let result = UnconfiguredModel.generate(&GenerateRequest::prompt("hi")).await;
        assert!(matches!(result, Err(AiError::NotConfigured)));
    }
}
