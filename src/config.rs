use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub llm: LlmConfig,
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LlmConfig {
    /// Provider name: "openai" or "anthropic". Checked when the client is built.
    #[serde(default = "default_provider")]
    pub provider: String,
    #[serde(default)]
    pub api_key: Option<String>,
    #[serde(default = "default_model")]
    pub model: String,
    #[serde(default = "default_temperature")]
    pub temperature: f32,
    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,
    /// Override for the provider endpoint (proxies, compatible gateways)
    #[serde(default)]
    pub base_url: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_bind")]
    pub bind: String,
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default = "default_name")]
    pub name: String,
    #[serde(default = "default_version")]
    pub version: String,
    #[serde(default)]
    pub transport: TransportKind,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransportKind {
    /// MCP over stdin/stdout
    #[default]
    Stdio,
    /// MCP streamable HTTP plus the plain JSON routes
    Http,
}

impl std::str::FromStr for TransportKind {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "stdio" => Ok(Self::Stdio),
            "http" => Ok(Self::Http),
            other => anyhow::bail!("Unknown transport '{}', expected 'stdio' or 'http'", other),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            llm: LlmConfig::default(),
            server: ServerConfig::default(),
            log_level: default_log_level(),
        }
    }
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            provider: default_provider(),
            api_key: None,
            model: default_model(),
            temperature: default_temperature(),
            max_tokens: default_max_tokens(),
            base_url: None,
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: default_bind(),
            port: default_port(),
            name: default_name(),
            version: default_version(),
            transport: TransportKind::default(),
        }
    }
}

impl Config {
    pub fn load_from_file(path: &str) -> anyhow::Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&contents)?;
        Ok(config)
    }

    /// Apply environment overrides on top of file or default values.
    pub fn apply_env<F>(&mut self, lookup: F) -> anyhow::Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(v) = lookup("LLM_PROVIDER") {
            self.llm.provider = v;
        }
        if let Some(v) = lookup("LLM_API_KEY") {
            self.llm.api_key = Some(v);
        }
        if let Some(v) = lookup("LLM_MODEL") {
            self.llm.model = v;
        }
        if let Some(v) = lookup("LLM_TEMPERATURE") {
            self.llm.temperature = v
                .parse()
                .map_err(|e| anyhow::anyhow!("Invalid LLM_TEMPERATURE '{}': {}", v, e))?;
        }
        if let Some(v) = lookup("LLM_MAX_TOKENS") {
            self.llm.max_tokens = v
                .parse()
                .map_err(|e| anyhow::anyhow!("Invalid LLM_MAX_TOKENS '{}': {}", v, e))?;
        }
        if let Some(v) = lookup("LLM_BASE_URL") {
            self.llm.base_url = Some(v);
        }
        if let Some(v) = lookup("MCP_HOST") {
            self.server.bind = v;
        }
        if let Some(v) = lookup("MCP_PORT") {
            self.server.port = v
                .parse()
                .map_err(|e| anyhow::anyhow!("Invalid MCP_PORT '{}': {}", v, e))?;
        }
        if let Some(v) = lookup("MCP_NAME") {
            self.server.name = v;
        }
        if let Some(v) = lookup("MCP_VERSION") {
            self.server.version = v;
        }
        if let Some(v) = lookup("MCP_TRANSPORT") {
            self.server.transport = v.parse()?;
        }
        if let Some(v) = lookup("LOG_LEVEL") {
            self.log_level = v;
        }
        Ok(())
    }

    /// Reject values no provider accepts, before anything is served.
    pub fn validate(&self) -> anyhow::Result<()> {
        if !(0.0..=2.0).contains(&self.llm.temperature) {
            anyhow::bail!(
                "LLM temperature must be within [0, 2], got {}",
                self.llm.temperature
            );
        }
        if self.llm.max_tokens == 0 {
            anyhow::bail!("LLM max_tokens must be positive");
        }
        if self.llm.model.trim().is_empty() {
            anyhow::bail!("LLM model must not be empty");
        }
        Ok(())
    }
}

fn default_provider() -> String {
    "openai".to_string()
}

fn default_model() -> String {
    "gpt-4o".to_string()
}

fn default_temperature() -> f32 {
    0.7
}

fn default_max_tokens() -> u32 {
    2000
}

fn default_bind() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    8000
}

fn default_name() -> String {
    "thegaffer".to_string()
}

fn default_version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

/// Environment variable naming an explicit config file
pub const CONFIG_PATH_VAR: &str = "GAFFER_CONFIG";
/// Fallback path for development
pub const DEV_CONFIG_PATH: &str = "gaffer.toml";

/// Load config from the first available file (if any), then the process environment.
pub fn load_config() -> anyhow::Result<Config> {
    let mut config = match std::env::var(CONFIG_PATH_VAR) {
        Ok(path) => Config::load_from_file(&path)?,
        Err(_) if std::path::Path::new(DEV_CONFIG_PATH).exists() => {
            Config::load_from_file(DEV_CONFIG_PATH)?
        }
        Err(_) => Config::default(),
    };
    config.apply_env(|key| std::env::var(key).ok())?;
    config.validate()?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.llm.provider, "openai");
        assert_eq!(config.llm.model, "gpt-4o");
        assert_eq!(config.llm.max_tokens, 2000);
        assert_eq!(config.server.port, 8000);
        assert_eq!(config.server.name, "thegaffer");
        assert_eq!(config.server.transport, TransportKind::Stdio);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_toml_partial_sections_use_defaults() {
        let config: Config = toml::from_str(
            r#"
            [llm]
            provider = "anthropic"
            model = "claude-sonnet-4-5"

            [server]
            transport = "http"
            port = 9000
            "#,
        )
        .unwrap();
        assert_eq!(config.llm.provider, "anthropic");
        assert_eq!(config.llm.temperature, 0.7);
        assert_eq!(config.server.transport, TransportKind::Http);
        assert_eq!(config.server.port, 9000);
        assert_eq!(config.server.bind, "127.0.0.1");
        assert_eq!(config.log_level, "info");
    }

    #[test]
    fn test_env_overrides() {
        let vars = env(&[
            ("LLM_PROVIDER", "anthropic"),
            ("LLM_API_KEY", "sk-test"),
            ("LLM_TEMPERATURE", "0.2"),
            ("LLM_MAX_TOKENS", "512"),
            ("MCP_PORT", "8123"),
            ("MCP_TRANSPORT", "HTTP"),
            ("LOG_LEVEL", "debug"),
        ]);
        let mut config = Config::default();
        config.apply_env(|k| vars.get(k).cloned()).unwrap();
        assert_eq!(config.llm.provider, "anthropic");
        assert_eq!(config.llm.api_key.as_deref(), Some("sk-test"));
        assert_eq!(config.llm.temperature, 0.2);
        assert_eq!(config.llm.max_tokens, 512);
        assert_eq!(config.server.port, 8123);
        assert_eq!(config.server.transport, TransportKind::Http);
        assert_eq!(config.log_level, "debug");
    }

    #[test]
    fn test_env_rejects_malformed_numbers() {
        let vars = env(&[("LLM_MAX_TOKENS", "lots")]);
        let mut config = Config::default();
        assert!(config.apply_env(|k| vars.get(k).cloned()).is_err());
    }

    #[test]
    fn test_validate_bounds() {
        let mut config = Config::default();
        config.llm.temperature = 2.5;
        assert!(config.validate().is_err());

        let mut config = Config::default();
        config.llm.max_tokens = 0;
        assert!(config.validate().is_err());
    }
}
