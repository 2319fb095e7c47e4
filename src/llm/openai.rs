//! OpenAI-style chat completions.

use serde::{Deserialize, Serialize};

use super::{LlmError, ProviderConfig};

const OPENAI_API_URL: &str = "https://api.openai.com/v1";

#[derive(Debug, Serialize)]
struct ApiRequest<'a> {
    model: &'a str,
    messages: Vec<ApiMessage<'a>>,
    temperature: f32,
    max_tokens: u32,
}

#[derive(Debug, Serialize)]
struct ApiMessage<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct ApiResponse {
    #[serde(default)]
    choices: Vec<ApiChoice>,
}

#[derive(Debug, Deserialize)]
struct ApiChoice {
    message: ApiChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ApiChoiceMessage {
    #[serde(default)]
    content: Option<String>,
}

pub struct OpenAiClient {
    client: reqwest::Client,
    config: ProviderConfig,
}

impl OpenAiClient {
    pub fn new(config: ProviderConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            config,
        }
    }

    fn endpoint(&self) -> String {
        let base = self.config.base_url.as_deref().unwrap_or(OPENAI_API_URL);
        format!("{}/chat/completions", base.trim_end_matches('/'))
    }

    fn build_request<'a>(&'a self, prompt: &'a str) -> ApiRequest<'a> {
        ApiRequest {
            model: &self.config.model,
            messages: vec![ApiMessage {
                role: "user",
                content: prompt,
            }],
            temperature: self.config.temperature,
            max_tokens: self.config.max_tokens,
        }
    }

    pub async fn complete(&self, prompt: &str) -> Result<String, LlmError> {
        let response = self
            .client
            .post(self.endpoint())
            .bearer_auth(self.config.api_key.expose())
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

fn extract_text(response: ApiResponse) -> Result<String, LlmError> {
    response
        .choices
        .into_iter()
        .next()
        .and_then(|choice| choice.message.content)
        .ok_or_else(|| LlmError::InvalidResponse("missing choices[0].message.content".into()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm::stub::StubProvider;
    use crate::llm::{ApiKey, ProviderKind};

    fn config(base_url: Option<&str>) -> ProviderConfig {
        ProviderConfig {
            kind: ProviderKind::OpenAi,
            api_key: ApiKey::new("sk-test"),
            model: "gpt-4o".into(),
            temperature: 0.5,
            max_tokens: 300,
            base_url: base_url.map(str::to_string),
        }
    }

    #[test]
    fn test_request_body_shape() {
        let client = OpenAiClient::new(config(None));
        let body = serde_json::to_value(client.build_request("How do I beat a 4-4-2?")).unwrap();
        assert_eq!(body["model"], "gpt-4o");
        assert_eq!(body["max_tokens"], 300);
        assert_eq!(body["temperature"], 0.5);
        assert_eq!(body["messages"][0]["role"], "user");
        assert_eq!(body["messages"][0]["content"], "How do I beat a 4-4-2?");
    }

    #[test]
    fn test_endpoint_respects_base_url() {
        assert_eq!(
            OpenAiClient::new(config(None)).endpoint(),
            "https://api.openai.com/v1/chat/completions"
        );
        assert_eq!(
            OpenAiClient::new(config(Some("http://localhost:4000/v1/"))).endpoint(),
            "http://localhost:4000/v1/chat/completions"
        );
    }

    #[test]
    fn test_extract_first_choice() {
        let response: ApiResponse = serde_json::from_value(serde_json::json!({
            "id": "chatcmpl-1",
            "choices": [
                {"index": 0, "message": {"role": "assistant", "content": "Press high."}},
                {"index": 1, "message": {"role": "assistant", "content": "Sit deep."}}
            ]
        }))
        .unwrap();
        assert_eq!(extract_text(response).unwrap(), "Press high.");
    }

    #[tokio::test]
    async fn test_complete_sends_bearer_and_extracts_text() {
        let body = serde_json::json!({
            "choices": [{"message": {"role": "assistant", "content": "Overload the half-spaces."}}]
        });
        let stub = StubProvider::start("/v1/chat/completions", 200, &body.to_string()).await;
        let base_url = format!("{}/v1", stub.base_url());
        let client = OpenAiClient::new(config(Some(base_url.as_str())));

        let text = client.complete("How do I break a low block?").await.unwrap();
        assert_eq!(text, "Overload the half-spaces.");
        assert_eq!(stub.header("authorization").as_deref(), Some("Bearer sk-test"));
    }

    #[tokio::test]
    async fn test_complete_maps_error_status() {
        for status in [401, 429] {
            let stub = StubProvider::start("/chat/completions", status, "rate limited").await;
            let client = OpenAiClient::new(config(Some(stub.base_url())));
            let err = client.complete("Zonal or man marking?").await.unwrap_err();
            assert!(
                matches!(err, LlmError::Api { status: s, ref body } if s == status && body == "rate limited"),
                "unexpected error for {}: {:?}",
                status,
                err
            );
            assert_eq!(stub.requests(), 1);
        }
    }

    #[tokio::test]
    async fn test_complete_rejects_garbage_body() {
        let stub = StubProvider::start("/chat/completions", 200, "<html>bad gateway</html>").await;
        let client = OpenAiClient::new(config(Some(stub.base_url())));
        assert!(matches!(
            client.complete("Play a back three?").await,
            Err(LlmError::InvalidResponse(_))
        ));
    }

    #[tokio::test]
    async fn test_complete_unreachable_is_network_error() {
        let client = OpenAiClient::new(config(Some("http://127.0.0.1:1")));
        assert!(matches!(
            client.complete("Anyone there?").await,
            Err(LlmError::Network(_))
        ));
    }

    #[test]
    fn test_extract_missing_content_is_invalid() {
        let response: ApiResponse = serde_json::from_value(serde_json::json!({
            "choices": [{"message": {"role": "assistant", "content": null}}]
        }))
        .unwrap();
        assert!(matches!(
            extract_text(response),
            Err(LlmError::InvalidResponse(_))
        ));

        let empty: ApiResponse = serde_json::from_value(serde_json::json!({})).unwrap();
        assert!(extract_text(empty).is_err());
    }
}
