#![allow(dead_code)]

use async_trait::async_trait;
use sentinel::ai::{AiError, AiResult, GenerateRequest, LanguageModel};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use tokio::sync::Notify;

/// Replies from a fixed script, in order, and records every request.
/// Once the script runs out every call fails.
pub struct ScriptedModel {
    replies: Mutex<VecDeque<AiResult<String>>>,
    requests: Mutex<Vec<GenerateRequest>>,
    gate: Option<Arc<Notify>>,
}

impl ScriptedModel {
    pub fn new(replies: Vec<AiResult<String>>) -> Arc<Self> {
        Arc::new(Self {
            replies: Mutex::new(replies.into()),
            requests: Mutex::new(Vec::new()),
            gate: None,
        })
    }

    pub fn replying(texts: &[&str]) -> Arc<Self> {
        Self::new(texts.iter().map(|t| Ok(t.to_string())).collect())
    }

    pub fn failing() -> Arc<Self> {
        Self::new(vec![Err(transport_error())])
    }

    /// Like [`ScriptedModel::replying`], but each call waits for the gate to
    /// be notified before answering.
    pub fn gated(texts: &[&str], gate: Arc<Notify>) -> Arc<Self> {
        Arc::new(Self {
            replies: Mutex::new(texts.iter().map(|t| Ok(t.to_string())).collect()),
            requests: Mutex::new(Vec::new()),
            gate: Some(gate),
        })
    }

    pub fn requests(&self) -> Vec<GenerateRequest> {
        self.requests.lock().unwrap().clone()
    }
}

pub fn transport_error() -> AiError {
    AiError::Api {
        status: 503,
        body: "upstream connect error".to_string(),
    }
}

#[async_trait]
impl LanguageModel for ScriptedModel {
    fn model_name(&self) -> &str {
        "scripted"
    }

    async fn generate(&self, request: &GenerateRequest) -> AiResult<String> {
        self.requests.lock().unwrap().push(request.clone());
        if let Some(gate) = &self.gate {
            gate.notified().await;
        }
        self.replies
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or(Err(AiError::EmptyResponse(None)))
    }
}
