//! DeepSeek API request/response types
//!
//! Structs that mirror the DeepSeek chat-completions JSON format.
//! Used to serialize requests and deserialize API responses into typed
//! Rust structs.

use serde::{Deserialize, Serialize};

/// Request body for the chat-completions endpoint
#[derive(Serialize, Debug)]
pub struct ChatRequest {
    /// Model name (e.g., "deepseek-chat")
    pub model: String,
    /// Conversation messages (system prompt followed by the user prompt)
    pub messages: Vec<ChatMessage>,
    /// Whether to stream the response (always false here)
    pub stream: bool,
    /// Sampling temperature
    pub temperature: f32,
}

/// A single chat message in a request
#[derive(Serialize, Debug)]
pub struct ChatMessage {
    /// Message role ("system" or "user")
    pub role: String,
    /// Message text
    pub content: String,
}

/// Top-level chat-completions response
#[derive(Deserialize, Debug)]
pub struct ChatResponse {
    /// List of completion choices from the model
    pub choices: Vec<Choice>,
}

/// A single completion choice
#[derive(Deserialize, Debug)]
pub struct Choice {
    /// The generated message for this choice
    pub message: ResponseMessage,
    /// Why the model stopped generating (if reported)
    #[serde(default)]
    #[allow(dead_code)] // Part of API response format, may be used in future
    pub finish_reason: Option<String>,
}

/// The generated message within a choice
#[derive(Deserialize, Debug)]
pub struct ResponseMessage {
    /// The generated text content
    pub content: String,
}
