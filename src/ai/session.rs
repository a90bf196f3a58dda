use super::{AiResult, Content, GenerateRequest, LanguageModel};
use std::sync::Arc;

/// Client-side multi-turn conversation.
///
/// The system instruction is fixed when the session is created. Only turns
/// that completed successfully are recorded in the history; a failed turn
/// leaves the session exactly as it was.
pub struct ChatSession {
    model: Arc<dyn LanguageModel>,
    system_instruction: String,
    history: Vec<Content>,
}

impl ChatSession {
    pub fn new(model: Arc<dyn LanguageModel>, system_instruction: String) -> Self {
        Self {
            model,
            system_instruction,
            history: Vec::new(),
        }
    }

    pub fn system_instruction(&self) -> &str {
        &self.system_instruction
    }

    pub fn history(&self) -> &[Content] {
        &self.history
    }

    pub async fn send_message(&mut self, message: &str) -> AiResult<String> {
        let mut contents = self.history.clone();
        contents.push(Content::user(message));
        let request = GenerateRequest {
            system_instruction: Some(self.system_instruction.clone()),
            contents,
            response_format: None,
        };

        let reply = self.model.generate(&request).await?;

        self.history = request.contents;
        self.history.push(Content::model(reply.clone()));
        Ok(reply)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ai::{AiError, UnconfiguredModel};
    use async_trait::async_trait;
    use std::sync::Mutex;

    struct Echo {
        seen: Mutex<Vec<GenerateRequest>>,
    }

    #[async_trait]
    impl LanguageModel for Echo {
        fn model_name(&self) -> &str {
            "echo"
        }

        async fn generate(&self, request: &GenerateRequest) -> AiResult<String> {
            self.seen.lock().unwrap().push(request.clone());
            let last = request.contents.last().map(|c| c.text.clone()).unwrap_or_default();
            Ok(format!("echo: {last}"))
        }
    }

    #[tokio::test]
    async fn history_accumulates_and_is_resent() {
        let echo = Arc::new(Echo {
            seen: Mutex::new(Vec::new()),
        });
        let mut session = ChatSession::new(echo.clone(), "be kind".to_string());

        session.send_message("one").await.unwrap();
        let reply = session.send_message("two").await.unwrap();

        assert_eq!(reply, "echo: two");
        assert_eq!(session.history().len(), 4);

        let seen = echo.seen.lock().unwrap();
        assert_eq!(seen[1].contents.len(), 3);
        assert_eq!(seen[1].contents[1], Content::model("echo: one"));
        assert_eq!(seen[1].system_instruction.as_deref(), Some("be kind"));
    }

    #[tokio::test]
    async fn failed_turn_leaves_history_untouched() {
        let mut session = ChatSession::new(Arc::new(UnconfiguredModel), "x".to_string());
        let result = session.send_message("hello").await;
        assert!(matches!(result, Err(AiError::NotConfigured)));
        assert!(session.history().is_empty());
    }
}
