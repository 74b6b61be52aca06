//! Suggestion client data models

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

pub const DEFAULT_BASE_URL: &str = "https://api.anthropic.com";
pub const DEFAULT_MODEL_ID: &str = "claude-3-5-sonnet-20241022";
pub const DEFAULT_MAX_TOKENS: u32 = 2000;

/// Configuration for the suggestion client.
///
/// The API key is passed in explicitly rather than read from the process
/// environment here, so tests can construct clients with substitutes.
#[derive(Debug, Clone)]
pub struct SuggestConfig {
    pub api_key: String,
    pub model_id: String,
    pub max_tokens: u32,
    pub base_url: String,
}

impl SuggestConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            model_id: DEFAULT_MODEL_ID.to_string(),
            max_tokens: DEFAULT_MAX_TOKENS,
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }
}

/// An unpersisted draft model returned by the completion service.
///
/// Only `model_name` and `description` are required; the rest default.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelSuggestion {
    pub model_name: String,
    pub description: String,
    #[serde(default)]
    pub price_range: String,
    #[serde(default)]
    pub specifications: BTreeMap<String, serde_json::Value>,
}

// Anthropic Messages API wire types (request/response subset we use)

#[derive(Debug, Serialize)]
pub(crate) struct MessagesRequest<'a> {
    pub model: &'a str,
    pub max_tokens: u32,
    pub messages: Vec<MessageParam<'a>>,
}

#[derive(Debug, Serialize)]
pub(crate) struct MessageParam<'a> {
    pub role: &'a str,
    pub content: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct MessagesResponse {
    pub content: Vec<ContentBlock>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ContentBlock {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub text: String,
}
