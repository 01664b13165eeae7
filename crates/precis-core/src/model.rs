use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::{Message, PrecisError};

/// Controls whether the model may invoke tools while answering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ToolChoice {
    /// The model decides whether to call a tool.
    Auto,
    /// Tool invocation is disabled; the model may only produce text.
    None,
    /// The model must call some tool.
    Required,
    /// The model must call the named tool.
    Specific(String),
}

/// A single chat exchange sent to a [`ChatModel`].
#[derive(Debug, Clone, PartialEq)]
pub struct ChatRequest {
    pub messages: Vec<Message>,
    pub tool_choice: Option<ToolChoice>,
}

impl ChatRequest {
    pub fn new(messages: Vec<Message>) -> Self {
        Self {
            messages,
            tool_choice: None,
        }
    }

    pub fn with_tool_choice(mut self, choice: ToolChoice) -> Self {
        self.tool_choice = Some(choice);
        self
    }
}

/// Token accounting reported by a model backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenUsage {
    pub input_tokens: usize,
    pub output_tokens: usize,
    pub total_tokens: usize,
}

/// The model's reply to a [`ChatRequest`].
#[derive(Debug, Clone, PartialEq)]
pub struct ChatResponse {
    pub message: Message,
    pub usage: Option<TokenUsage>,
}

/// Trait for chat-completion model backends.
#[async_trait]
pub trait ChatModel: Send + Sync {
    /// Send one request and return one generated message.
    async fn chat(&self, request: ChatRequest) -> Result<ChatResponse, PrecisError>;
}
