//! Anthropic-style messages API.

use serde::{Deserialize, Serialize};

use super::{LlmError, ProviderConfig};

const ANTHROPIC_API_URL: &str = "https://api.anthropic.com";
const ANTHROPIC_VERSION: &str = "2023-06-01";

#[derive(Debug, Serialize)]
struct ApiRequest<'a> {
    model: &'a str,
    max_tokens: u32,
    temperature: f32,
    messages: Vec<ApiMessage<'a>>,
}

#[derive(Debug, Serialize)]
struct ApiMessage<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct ApiResponse {
    #[serde(default)]
    content: Vec<ApiResponseBlock>,
}

#[derive(Debug, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
enum ApiResponseBlock {
    Text {
        text: String,
    },
    #[serde(other)]
    Unknown,
}

pub struct AnthropicClient {
    client: reqwest::Client,
    config: ProviderConfig,
}

impl AnthropicClient {
    pub fn new(config: ProviderConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            config,
        }
    }

    fn endpoint(&self) -> String {
        let base = self.config.base_url.as_deref().unwrap_or(ANTHROPIC_API_URL);
        format!("{}/v1/messages", base.trim_end_matches('/'))
    }

    fn build_request<'a>(&'a self, prompt: &'a str) -> ApiRequest<'a> {
        ApiRequest {
            model: &self.config.model,
            max_tokens: self.config.max_tokens,
            temperature: self.config.temperature,
            messages: vec![ApiMessage {
                role: "user",
                content: prompt,
            }],
        }
    }

    pub async fn complete(&self, prompt: &str) -> Result<String, LlmError> {
        let response = self
            .client
            .post(self.endpoint())
            .header("x-api-key", self.config.api_key.expose())
            .header("anthropic-version", ANTHROPIC_VERSION)
            .header("content-type", "application/json")
            .json(&self.build_request(prompt))
            .send()
            .await
            .map_err(|e| LlmError::Network(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            return Err(LlmError::Api { status, body });
        }

        let api_response: ApiResponse = response
            .json()
            .await
            .map_err(|e| LlmError::InvalidResponse(e.to_string()))?;

        extract_text(api_response)
    }
}

/// First text block wins; thinking or tool blocks are skipped.
fn extract_text(response: ApiResponse) -> Result<String, LlmError> {
    response
        .content
        .into_iter()
        .find_map(|block| match block {
            ApiResponseBlock::Text { text } => Some(text),
            ApiResponseBlock::Unknown => None,
        })
        .ok_or_else(|| LlmError::InvalidResponse("no text block in response content".into()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm::stub::StubProvider;
    use crate::llm::{ApiKey, ProviderKind};

    fn config() -> ProviderConfig {
        ProviderConfig {
            kind: ProviderKind::Anthropic,
            api_key: ApiKey::new("sk-ant-test"),
            model: "claude-sonnet-4-5".into(),
            temperature: 0.7,
            max_tokens: 2000,
            base_url: None,
        }
    }

    fn client_for(stub: &StubProvider) -> AnthropicClient {
        AnthropicClient::new(ProviderConfig {
            base_url: Some(stub.base_url().to_string()),
            ..config()
        })
    }

    #[tokio::test]
    async fn test_complete_sends_headers_and_extracts_text() {
        let body = serde_json::json!({
            "content": [
                {"type": "thinking", "thinking": "..."},
                {"type": "text", "text": "Invert the full-backs."}
            ]
        });
        let stub = StubProvider::start("/v1/messages", 200, &body.to_string()).await;

        let text = client_for(&stub).complete("Beat a 4-4-2 diamond").await.unwrap();
        assert_eq!(text, "Invert the full-backs.");
        assert_eq!(stub.header("x-api-key").as_deref(), Some("sk-ant-test"));
        assert_eq!(stub.header("anthropic-version").as_deref(), Some("2023-06-01"));
    }

    #[tokio::test]
    async fn test_complete_maps_error_status() {
        for status in [401, 429] {
            let stub = StubProvider::start("/v1/messages", status, "{\"type\":\"error\"}").await;
            let err = client_for(&stub).complete("Press or drop?").await.unwrap_err();
            assert!(
                matches!(err, LlmError::Api { status: s, .. } if s == status),
                "unexpected error for {}: {:?}",
                status,
                err
            );
        }
    }

    #[tokio::test]
    async fn test_complete_rejects_garbage_body() {
        let stub = StubProvider::start("/v1/messages", 200, "not json").await;
        assert!(matches!(
            client_for(&stub).complete("Set-piece routines").await,
            Err(LlmError::InvalidResponse(_))
        ));
    }

    #[test]
    fn test_request_body_shape() {
        let client = AnthropicClient::new(config());
        let body = serde_json::to_value(client.build_request("Explain gegenpressing")).unwrap();
        assert_eq!(body["model"], "claude-sonnet-4-5");
        assert_eq!(body["max_tokens"], 2000);
        assert_eq!(body["messages"][0]["role"], "user");
        assert_eq!(body["messages"][0]["content"], "Explain gegenpressing");
        assert_eq!(client.endpoint(), "https://api.anthropic.com/v1/messages");
    }

    #[test]
    fn test_extract_skips_non_text_blocks() {
        let response: ApiResponse = serde_json::from_value(serde_json::json!({
            "id": "msg_1",
            "content": [
                {"type": "thinking", "thinking": "..."},
                {"type": "text", "text": "Overload the half-spaces."},
                {"type": "text", "text": "Second block."}
            ]
        }))
        .unwrap();
        assert_eq!(extract_text(response).unwrap(), "Overload the half-spaces.");
    }

    #[test]
    fn test_extract_without_text_is_invalid() {
        let response: ApiResponse =
            serde_json::from_value(serde_json::json!({"content": []})).unwrap();
        assert!(matches!(
            extract_text(response),
            Err(LlmError::InvalidResponse(_))
        ));
    }
}
