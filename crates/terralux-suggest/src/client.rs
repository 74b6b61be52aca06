//! Anthropic-backed suggestion client
//!
//! One request, one response, no conversation history and no streaming.
//! The parsing contract: trim the reply, strip a surrounding code fence if
//! present, then parse the remainder as a JSON array of drafts. A fenced
//! body with malformed interior JSON fails the whole call; there is no
//! per-item recovery.

use async_trait::async_trait;
use tracing::warn;

use crate::model::{
    MessageParam, MessagesRequest, MessagesResponse, ModelSuggestion, SuggestConfig,
};

const ANTHROPIC_VERSION: &str = "2023-06-01";

/// Seam for the admin workflow, seeding commands, and tests.
#[async_trait]
pub trait ModelSuggester: Send + Sync {
    /// Draft 3-5 plausible product offerings for a vendor.
    ///
    /// Never fails: any error degrades to an empty list.
    async fn suggest_models(&self, vendor_name: &str, website_url: &str) -> Vec<ModelSuggestion>;

    /// Same as [`suggest_models`](Self::suggest_models) with extra
    /// free-text context about the vendor folded into the prompt.
    async fn suggest_models_from_context(
        &self,
        vendor_name: &str,
        website_url: &str,
        additional_context: &str,
    ) -> Vec<ModelSuggestion>;
}

/// Production suggester calling the Anthropic Messages API.
pub struct AnthropicSuggester {
    config: SuggestConfig,
    client: reqwest::Client,
}

impl AnthropicSuggester {
    pub fn new(config: SuggestConfig) -> Self {
        Self {
            config,
            client: reqwest::Client::new(),
        }
    }

    async fn complete(&self, prompt: String) -> Result<String, String> {
        let request = MessagesRequest {
            model: &self.config.model_id,
            max_tokens: self.config.max_tokens,
            messages: vec![MessageParam {
                role: "user",
                content: prompt,
            }],
        };

        let response = self
            .client
            .post(format!("{}/v1/messages", self.config.base_url))
            .header("x-api-key", &self.config.api_key)
            .header("anthropic-version", ANTHROPIC_VERSION)
            .json(&request)
            .send()
            .await
            .map_err(|e| format!("request failed: {}", e))?
            .error_for_status()
            .map_err(|e| format!("completion service returned error: {}", e))?;

        let body: MessagesResponse = response
            .json()
            .await
            .map_err(|e| format!("malformed completion response: {}", e))?;

        body.content
            .into_iter()
            .find(|block| block.kind == "text")
            .map(|block| block.text)
            .ok_or_else(|| "completion response contained no text block".to_string())
    }

    async fn suggest(&self, vendor_name: &str, prompt: String) -> Vec<ModelSuggestion> {
        let text = match self.complete(prompt).await {
            Ok(text) => text,
            Err(err) => {
                warn!("error generating model suggestions for '{}': {}", vendor_name, err);
                return Vec::new();
            }
        };

        match parse_suggestions(&text) {
            Ok(suggestions) => suggestions,
            Err(err) => {
                warn!("error parsing model suggestions for '{}': {}", vendor_name, err);
                Vec::new()
            }
        }
    }
}

#[async_trait]
impl ModelSuggester for AnthropicSuggester {
    async fn suggest_models(&self, vendor_name: &str, website_url: &str) -> Vec<ModelSuggestion> {
        self.suggest(vendor_name, build_prompt(vendor_name, website_url, None))
            .await
    }

    async fn suggest_models_from_context(
        &self,
        vendor_name: &str,
        website_url: &str,
        additional_context: &str,
    ) -> Vec<ModelSuggestion> {
        self.suggest(
            vendor_name,
            build_prompt(vendor_name, website_url, Some(additional_context)),
        )
        .await
    }
}

/// Compose the natural-language instruction sent as a single user message.
pub fn build_prompt(vendor_name: &str, website_url: &str, context: Option<&str>) -> String {
    let mut prompt = format!(
        "You are an expert in sustainable and regenerative building technologies.\n\n\
         A building systems vendor named \"{}\" with website {} needs to have \
         their product models catalogued.\n",
        vendor_name, website_url
    );

    if let Some(context) = context {
        prompt.push_str(&format!("\nAdditional context: {}\n", context));
    }

    prompt.push_str(
        "\nBased on the vendor name and typical products from companies in this \
         space, suggest 3-5 specific building models/products they likely offer.\n\n\
         For each model, provide:\n\
         1. model_name: Specific product name (e.g., \"24ft Geodesic Dome\", \"Modular Studio Unit\")\n\
         2. description: 2-3 sentence description of the model\n\
         3. price_range: Estimated price range (e.g., \"$50k-$100k\", \"$200k-$500k\")\n\
         4. specifications: Key technical specs as a JSON object (e.g., {\"size\": \"24ft diameter\", \"capacity\": \"4-6 people\", \"materials\": \"sustainable timber\"})\n\n\
         Return ONLY a valid JSON array of models, no other text. Format:\n\
         [\n  {\n    \"model_name\": \"...\",\n    \"description\": \"...\",\n    \"price_range\": \"...\",\n    \"specifications\": {...}\n  }\n]",
    );

    prompt
}

/// Strip a surrounding Markdown code fence: drop the first and last lines.
fn strip_code_fence(text: &str) -> String {
    let lines: Vec<&str> = text.split('\n').collect();
    if lines.len() <= 2 {
        return String::new();
    }
    lines[1..lines.len() - 1].join("\n")
}

/// Apply the parsing contract to raw reply text.
pub fn parse_suggestions(text: &str) -> Result<Vec<ModelSuggestion>, serde_json::Error> {
    let trimmed = text.trim();
    if trimmed.starts_with("```") {
        serde_json::from_str(&strip_code_fence(trimmed))
    } else {
        serde_json::from_str(trimmed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BARE: &str = r#"[{"model_name":"24ft Geodesic Dome","description":"A dome.","price_range":"$15k-$25k","specifications":{"diameter":"24 feet"}}]"#;

    #[test]
    fn test_bare_array_parses() {
        let suggestions = parse_suggestions(BARE).unwrap();
        assert_eq!(suggestions.len(), 1);
        assert_eq!(suggestions[0].model_name, "24ft Geodesic Dome");
        assert_eq!(
            suggestions[0].specifications.get("diameter"),
            Some(&serde_json::json!("24 feet"))
        );
    }

    #[test]
    fn test_fenced_array_parses() {
        let fenced = format!("```json\n{}\n```", BARE);
        let suggestions = parse_suggestions(&fenced).unwrap();
        assert_eq!(suggestions.len(), 1);
        assert_eq!(suggestions[0].price_range, "$15k-$25k");
    }

    #[test]
    fn test_fenced_with_surrounding_whitespace() {
        let fenced = format!("\n\n```\n{}\n```\n  ", BARE);
        assert_eq!(parse_suggestions(&fenced).unwrap().len(), 1);
    }

    #[test]
    fn test_garbage_is_an_error() {
        assert!(parse_suggestions("I could not find any products.").is_err());
    }

    #[test]
    fn test_fenced_garbage_is_an_error() {
        assert!(parse_suggestions("```json\nnot json at all\n```").is_err());
    }

    #[test]
    fn test_optional_fields_default() {
        let suggestions =
            parse_suggestions(r#"[{"model_name":"House Zero","description":"A home."}]"#).unwrap();
        assert_eq!(suggestions[0].price_range, "");
        assert!(suggestions[0].specifications.is_empty());
    }

    #[test]
    fn test_missing_required_field_fails_the_whole_call() {
        // No per-item recovery: one bad element fails the array
        let body = r#"[{"model_name":"Good","description":"ok"},{"description":"missing name"}]"#;
        assert!(parse_suggestions(body).is_err());
    }

    #[test]
    fn test_empty_array_is_zero_suggestions() {
        assert!(parse_suggestions("[]").unwrap().is_empty());
    }

    #[test]
    fn test_prompt_carries_vendor_identity() {
        let prompt = build_prompt("Pacific Domes", "https://pacificdomes.com", None);
        assert!(prompt.contains("\"Pacific Domes\""));
        assert!(prompt.contains("https://pacificdomes.com"));
        assert!(prompt.contains("3-5"));
        assert!(!prompt.contains("Additional context"));
    }

    #[test]
    fn test_prompt_with_context() {
        let prompt = build_prompt("Baumraum", "https://baumraum.de", Some("luxury treehouses"));
        assert!(prompt.contains("Additional context: luxury treehouses"));
    }
}
