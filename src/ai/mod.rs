//! AI module for Sentinel
//!
//! This module wraps the external generative-language service behind the
//! [`LanguageModel`] trait so the classifier and the analyst can be driven by a
//! scripted model in tests.
//!
//! # Architecture
//!
//! - `client` - Backend trait, request types and the error type
//! - `gemini` - HTTP backend for the Gemini `generateContent` API
//! - `session` - Client-side multi-turn chat session
//! - `providers` - Backend selection from configuration
//!
//! # Usage
//!
//! ```rust,no_run
//! use sentinel::ai::{ChatSession, GeminiBackend};
//! use std::sync::Arc;
//!
//! # async fn example() -> sentinel::ai::AiResult<()> {
//! let model = Arc::new(GeminiBackend::new("api-key".to_string()));
//! let mut session = ChatSession::new(model, "You are a safety analyst.".to_string());
//! let reply = session.send_message("Any power cuts today?").await?;
//! println!("{reply}");
//! # Ok(())
//! # }
//! ```
mod client;
pub mod gemini;
mod providers;
mod session;

// Re-export main types
pub use client::{
    AiError, AiResult, Content, ContentRole, GenerateRequest, LanguageModel, ResponseFormat,
    UnconfiguredModel,
};
pub use gemini::GeminiBackend;
pub use providers::model_from_config;
pub use session::ChatSession;
