//! LLM completion clients.
//!
//! Two provider kinds sit behind one [`Completer`] interface. The kind is
//! resolved once, when [`LlmClient::from_config`] runs; an unknown provider
//! name never reaches a request.

mod anthropic;
mod openai;

pub use anthropic::AnthropicClient;
pub use openai::OpenAiClient;

use std::future::Future;

use thiserror::Error;

use crate::config::LlmConfig;

/// Errors from building a client or running a completion.
#[derive(Debug, Error)]
pub enum LlmError {
    #[error("Unsupported LLM provider: {0}")]
    UnsupportedProvider(String),
    #[error("prompt is empty")]
    EmptyPrompt,
    #[error("network: {0}")]
    Network(String),
    #[error("provider api: {status}: {body}")]
    Api { status: u16, body: String },
    #[error("invalid provider response: {0}")]
    InvalidResponse(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProviderKind {
    /// Chat-completions style (`choices[0].message.content`)
    OpenAi,
    /// Messages style (list of content blocks)
    Anthropic,
}

impl std::str::FromStr for ProviderKind {
    type Err = LlmError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "openai" => Ok(Self::OpenAi),
            "anthropic" => Ok(Self::Anthropic),
            _ => Err(LlmError::UnsupportedProvider(s.to_string())),
        }
    }
}

impl std::fmt::Display for ProviderKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::OpenAi => write!(f, "openai"),
            Self::Anthropic => write!(f, "anthropic"),
        }
    }
}

/// API credential. Never printed.
#[derive(Clone, Default)]
pub struct ApiKey(String);

impl ApiKey {
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    pub fn expose(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl std::fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "ApiKey(***)")
    }
}

/// Resolved, immutable provider settings.
#[derive(Debug, Clone)]
pub struct ProviderConfig {
    pub kind: ProviderKind,
    pub api_key: ApiKey,
    pub model: String,
    pub temperature: f32,
    pub max_tokens: u32,
    pub base_url: Option<String>,
}

impl ProviderConfig {
    /// Resolve the provider kind and credential from loaded settings.
    ///
    /// Without an explicit key, falls back to the provider's conventional
    /// environment variable (`OPENAI_API_KEY` / `ANTHROPIC_API_KEY`).
    pub fn from_settings(settings: &LlmConfig) -> Result<Self, LlmError> {
        let kind: ProviderKind = settings.provider.parse()?;
        let api_key = settings.api_key.clone().or_else(|| {
            let var = match kind {
                ProviderKind::OpenAi => "OPENAI_API_KEY",
                ProviderKind::Anthropic => "ANTHROPIC_API_KEY",
            };
            std::env::var(var).ok()
        });
        Ok(Self {
            kind,
            api_key: ApiKey::new(api_key.unwrap_or_default()),
            model: settings.model.clone(),
            temperature: settings.temperature,
            max_tokens: settings.max_tokens,
            base_url: settings.base_url.clone(),
        })
    }
}

/// Text completion: one prompt in, one text out.
pub trait Completer: Send + Sync {
    fn complete(&self, prompt: &str) -> impl Future<Output = Result<String, LlmError>> + Send;
}

/// Provider client selected at construction.
pub enum LlmClient {
    OpenAi(OpenAiClient),
    Anthropic(AnthropicClient),
}

impl LlmClient {
    pub fn new(config: ProviderConfig) -> Self {
        match config.kind {
            ProviderKind::OpenAi => Self::OpenAi(OpenAiClient::new(config)),
            ProviderKind::Anthropic => Self::Anthropic(AnthropicClient::new(config)),
        }
    }

    /// Build the client for the configured provider.
    pub fn from_config(settings: &LlmConfig) -> Result<Self, LlmError> {
        let config = ProviderConfig::from_settings(settings)?;
        if config.api_key.is_empty() {
            tracing::warn!(provider = %config.kind, "No API key configured; completions will be rejected by the provider");
        }
        Ok(Self::new(config))
    }

    pub fn kind(&self) -> ProviderKind {
        match self {
            Self::OpenAi(_) => ProviderKind::OpenAi,
            Self::Anthropic(_) => ProviderKind::Anthropic,
        }
    }
}

impl Completer for LlmClient {
    async fn complete(&self, prompt: &str) -> Result<String, LlmError> {
        if prompt.trim().is_empty() {
            return Err(LlmError::EmptyPrompt);
        }
        match self {
            Self::OpenAi(client) => client.complete(prompt).await,
            Self::Anthropic(client) => client.complete(prompt).await,
        }
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_provider_kind_parse() {
        assert_eq!("openai".parse::<ProviderKind>().unwrap(), ProviderKind::OpenAi);
        assert_eq!(
            " Anthropic ".parse::<ProviderKind>().unwrap(),
            ProviderKind::Anthropic
        );
        let err = "gemini".parse::<ProviderKind>().unwrap_err();
        assert!(matches!(err, LlmError::UnsupportedProvider(ref p) if p == "gemini"));
        assert_eq!(err.to_string(), "Unsupported LLM provider: gemini");
    }

    #[test]
    fn test_from_config_rejects_unknown_provider() {
        let settings = LlmConfig {
            provider: "cohere".into(),
            ..LlmConfig::default()
        };
        assert!(matches!(
            LlmClient::from_config(&settings),
            Err(LlmError::UnsupportedProvider(_))
        ));
    }

    #[test]
    fn test_from_config_selects_variant() {
        let settings = LlmConfig {
            provider: "anthropic".into(),
            api_key: Some("sk-ant-test".into()),
            ..LlmConfig::default()
        };
        let client = LlmClient::from_config(&settings).unwrap();
        assert_eq!(client.kind(), ProviderKind::Anthropic);
    }

    #[test]
    fn test_api_key_is_redacted() {
        let key = ApiKey::new("sk-secret");
        assert_eq!(format!("{:?}", key), "ApiKey(***)");
        assert_eq!(key.expose(), "sk-secret");
    }

    #[tokio::test]
    async fn test_empty_prompt_rejected_before_network() {
        let settings = LlmConfig {
            api_key: Some("sk-test".into()),
            base_url: Some("http://127.0.0.1:9".into()),
            ..LlmConfig::default()
        };
        let client = LlmClient::from_config(&settings).unwrap();
        assert!(matches!(
            client.complete("   ").await,
            Err(LlmError::EmptyPrompt)
        ));
    }
}
