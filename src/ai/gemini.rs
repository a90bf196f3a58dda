use super::{AiError, AiResult, Content, GenerateRequest, LanguageModel};
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::Value;

pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

pub struct GeminiBackend {
    client: Client,
    base_url: String,
    model: String,
    api_key: String,
}

impl GeminiBackend {
    pub fn new(api_key: String) -> Self {
        Self::with_base_url(api_key, DEFAULT_MODEL.to_string(), DEFAULT_BASE_URL.to_string())
    }

    pub fn with_base_url(api_key: String, model: String, base_url: String) -> Self {
        Self {
            client: Client::new(),
            base_url,
            model,
            api_key,
        }
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/models/{}:generateContent",
            self.base_url.trim_end_matches('/'),
            self.model
        )
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GeminiRequest<'a> {
    contents: Vec<GeminiContent<'a>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    system_instruction: Option<GeminiInstruction<'a>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    generation_config: Option<GenerationConfig<'a>>,
}

#[derive(Serialize)]
struct GeminiContent<'a> {
    role: &'a str,
    parts: [GeminiPart<'a>; 1],
}

#[derive(Serialize)]
struct GeminiInstruction<'a> {
    parts: [GeminiPart<'a>; 1],
}

#[derive(Serialize)]
struct GeminiPart<'a> {
    text: &'a str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig<'a> {
    response_mime_type: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    response_schema: Option<&'a Value>,
}

impl<'a> GeminiRequest<'a> {
    fn from_request(request: &'a GenerateRequest) -> Self {
        Self {
            contents: request.contents.iter().map(GeminiContent::from).collect(),
            system_instruction: request.system_instruction.as_deref().map(|text| {
                GeminiInstruction {
                    parts: [GeminiPart { text }],
                }
            }),
            generation_config: request.response_format.as_ref().map(|format| {
                GenerationConfig {
                    response_mime_type: &format.mime_type,
                    response_schema: format.schema.as_ref(),
                }
            }),
        }
    }
}

impl<'a> From<&'a Content> for GeminiContent<'a> {
    fn from(content: &'a Content) -> Self {
        Self {
            role: content.role.as_str(),
            parts: [GeminiPart {
                text: &content.text,
            }],
        }
    }
}

// Response shapes; only the fields we read.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeminiResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
    pub prompt_feedback: Option<PromptFeedback>,
}

#[derive(Deserialize)]
pub struct Candidate {
    pub content: Option<CandidateContent>,
}

#[derive(Deserialize)]
pub struct CandidateContent {
    #[serde(default)]
    pub parts: Vec<CandidatePart>,
}

#[derive(Deserialize)]
pub struct CandidatePart {
    pub text: Option<String>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PromptFeedback {
    pub block_reason: Option<String>,
}

/// Joins the text parts of the first candidate.
pub fn extract_candidate_text(body: &str) -> AiResult<String> {
    let parsed: GeminiResponse = serde_json::from_str(body)?;
    let text = parsed
        .candidates
        .into_iter()
        .next()
        .and_then(|candidate| candidate.content)
        .map(|content| {
            content
                .parts
                .into_iter()
                .filter_map(|part| part.text)
                .collect::<String>()
        })
        .unwrap_or_default();

    if text.is_empty() {
        let reason = parsed.prompt_feedback.and_then(|fb| fb.block_reason);
        return Err(AiError::EmptyResponse(reason));
    }
    Ok(text)
}

#[async_trait]
impl LanguageModel for GeminiBackend {
    fn model_name(&self) -> &str {
        &self.model
    }

    async fn generate(&self, request: &GenerateRequest) -> AiResult<String> {
        tracing::debug!(
            model = %self.model,
            turns = request.contents.len(),
            structured = request.response_format.is_some(),
            "sending generateContent request"
        );

        let response = self
            .client
            .post(self.endpoint())
            .header("x-goog-api-key", &self.api_key)
            .json(&GeminiRequest::from_request(request))
            .send()
            .await?;
        let status = response.status();
        let body = response.text().await?;

        if status.is_success() {
            extract_candidate_text(&body)
        } else {
            Err(AiError::Api {
                status: status.as_u16(),
                body,
            })
        }
    }
}
