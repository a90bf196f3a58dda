use crate::ai::{AiError, AiResult, GenerateRequest, LanguageModel, ResponseFormat};
use crate::prompts::{Region, classification_prompt, classification_schema};
use crate::types::Classification;
use std::sync::Arc;

/// Suggests a title, category and severity for an incident description.
///
/// Cheap to clone; clones share the same backend.
#[derive(Clone)]
pub struct IncidentClassifier {
    model: Arc<dyn LanguageModel>,
    region: Region,
}

impl IncidentClassifier {
    pub fn new(model: Arc<dyn LanguageModel>, region: Region) -> Self {
        Self { model, region }
    }

    /// Never fails: any error is logged and replaced by
    /// [`Classification::fallback`] so the user can always continue.
    pub async fn classify(&self, description: &str) -> Classification {
        match self.try_classify(description).await {
            Ok(classification) => classification,
            Err(err) => {
                tracing::warn!(error = %err, "incident analysis failed; using fallback classification");
                Classification::fallback()
            }
        }
    }

    pub async fn try_classify(&self, description: &str) -> AiResult<Classification> {
        if description.trim().is_empty() {
            return Err(AiError::InvalidInput("description is empty"));
        }

        let request = GenerateRequest::prompt(classification_prompt(&self.region, description))
            .with_response_format(ResponseFormat::json(classification_schema()));
        let text = self.model.generate(&request).await?;
        parse_classification(&text)
    }
}

/// Parse the model's JSON reply. A surrounding markdown code fence is
/// tolerated.
pub fn parse_classification(text: &str) -> AiResult<Classification> {
    Ok(serde_json::from_str(strip_code_fence(text))?)
}

fn strip_code_fence(text: &str) -> &str {
    let trimmed = text.trim();
    let Some(rest) = trimmed.strip_prefix("```") else {
        return trimmed;
    };
    // Drop an optional language tag on the opening line.
    let body = rest.find('\n').map_or(rest, |pos| &rest[pos + 1..]);
    body.trim_end().trim_end_matches("```").trim()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Category, Severity};

    #[test]
    fn parses_plain_json() {
        let parsed = parse_classification(
            r#"{"title":"Burst pipe","category":"Infrastructure","severity":"High"}"#,
        )
        .unwrap();
        assert_eq!(parsed.title, "Burst pipe");
        assert_eq!(parsed.category, Category::Infrastructure);
        assert_eq!(parsed.severity, Severity::High);
    }

    #[test]
    fn parses_fenced_json() {
        let text = "```json\n{\"title\":\"Lost dog\",\"category\":\"Lost & Found\",\"severity\":\"Low\"}\n```";
        let parsed = parse_classification(text).unwrap();
        assert_eq!(parsed.category, Category::LostFound);
    }

    #[test]
    fn rejects_prose() {
        assert!(parse_classification("I think this is infrastructure").is_err());
    }
}
