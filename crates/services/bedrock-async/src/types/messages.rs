use serde::{Deserialize, Serialize};

use super::common::Usage;
use super::content::{ContentBlock, MessageParam, MessageRole};
use crate::config::BEDROCK_ANTHROPIC_VERSION;

/// Request envelope for the Anthropic messages payload on Bedrock
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MessagesCreateRequest {
    /// Payload version expected by Bedrock (`bedrock-2023-05-31`)
    pub anthropic_version: String,
    /// Maximum number of tokens to generate
    pub max_tokens: u32,
    /// Sampling temperature
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f32>,
    /// Conversation messages
    pub messages: Vec<MessageParam>,
}

impl MessagesCreateRequest {
    /// Creates a request with the default payload version and no temperature
    #[must_use]
    pub fn new(max_tokens: u32, messages: Vec<MessageParam>) -> Self {
        Self {
            anthropic_version: BEDROCK_ANTHROPIC_VERSION.into(),
            max_tokens,
            temperature: None,
            messages,
        }
    }

    /// Sets the sampling temperature
    #[must_use]
    pub const fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = Some(temperature);
        self
    }
}

/// Response envelope for the Anthropic messages payload on Bedrock
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MessagesCreateResponse {
    /// Message identifier
    pub id: String,
    /// Object type (always "message")
    #[serde(rename = "type")]
    pub kind: String,
    /// Role of the responder
    pub role: MessageRole,
    /// Ordered output content blocks
    pub content: Vec<ContentBlock>,
    /// Model that produced the response
    pub model: String,
    /// Why generation stopped, if reported
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stop_reason: Option<String>,
    /// Token usage summary, if reported
    #[serde(skip_serializing_if = "Option::is_none")]
    pub usage: Option<Usage>,
}
