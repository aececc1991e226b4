use serde::Deserialize;
use std::fs;
use std::path::Path;

const ENV_CONFIG_PATH: &str = "KG_AGENT_CONFIG_PATH";
const DEFAULT_CONFIG_PATH: &str = "config.yaml";

const ENV_LLM_PROVIDER: &str = "LLM_PROVIDER";
const ENV_LLM_MODEL: &str = "LLM_MODEL";
const ENV_OLLAMA_BASE_URL: &str = "OLLAMA_BASE_URL";

const DEFAULT_OLLAMA_BASE_URL: &str = "http://localhost:11434";

const DEFAULT_TEMPERATURE: f64 = 0.1;
const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 120;

/// Completion provider backing every analyzer
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LlmProvider {
    #[default]
    OpenAi,
    Anthropic,
    Ollama,
}

impl LlmProvider {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "openai" => Some(Self::OpenAi),
            "anthropic" => Some(Self::Anthropic),
            "ollama" => Some(Self::Ollama),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::OpenAi => "openai",
            Self::Anthropic => "anthropic",
            Self::Ollama => "ollama",
        }
    }

    /// Environment variable holding this provider's API key, if it needs one
    pub fn api_key_var(&self) -> Option<&'static str> {
        match self {
            Self::OpenAi => Some("OPENAI_API_KEY"),
            Self::Anthropic => Some("ANTHROPIC_API_KEY"),
            Self::Ollama => None,
        }
    }

    pub fn default_model(&self) -> &'static str {
        match self {
            Self::OpenAi => "gpt-4o-mini",
            Self::Anthropic => "claude-3-5-sonnet-latest",
            Self::Ollama => "llama3.2",
        }
    }
}

/// Completion service configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LlmConfig {
    pub provider: LlmProvider,
    /// Model name; the provider default applies when unset
    pub model: Option<String>,
    pub temperature: f64,
    /// Deadline applied by the binding to every completion call
    pub request_timeout_secs: u64,
    /// Server address for self-hosted providers (Ollama)
    pub base_url: Option<String>,
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            provider: LlmProvider::default(),
            model: None,
            temperature: DEFAULT_TEMPERATURE,
            request_timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
            base_url: None,
        }
    }
}

impl LlmConfig {
    pub fn model_name(&self) -> &str {
        self.model
            .as_deref()
            .unwrap_or_else(|| self.provider.default_model())
    }

    pub fn base_url(&self) -> &str {
        self.base_url.as_deref().unwrap_or(DEFAULT_OLLAMA_BASE_URL)
    }

    /// Apply `LLM_PROVIDER` / `LLM_MODEL` / `OLLAMA_BASE_URL` overrides
    fn apply_env(mut self) -> Self {
        if let Ok(value) = std::env::var(ENV_LLM_PROVIDER) {
            match LlmProvider::parse(&value) {
                Some(provider) => {
                    if provider != self.provider {
                        // A model configured for another provider does not carry over
                        self.model = None;
                    }
                    self.provider = provider;
                }
                None => {
                    tracing::warn!(provider = %value, "Unknown LLM provider, keeping configured one")
                }
            }
        }
        if let Ok(model) = std::env::var(ENV_LLM_MODEL)
            && !model.trim().is_empty()
        {
            self.model = Some(model);
        }
        if let Ok(base_url) = std::env::var(ENV_OLLAMA_BASE_URL)
            && !base_url.trim().is_empty()
        {
            self.base_url = Some(base_url);
        }
        self
    }
}

/// YAML configuration file structure
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ConfigFile {
    #[serde(default)]
    pub llm: LlmConfig,
}

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub llm: LlmConfig,
    pub port: u16,
    pub host: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            llm: LlmConfig::default(),
            port: 8080,
            host: "127.0.0.1".to_string(),
        }
    }
}

impl Config {
    /// Load configuration from environment and config file
    pub fn from_env() -> Self {
        let port = std::env::var("PORT")
            .ok()
            .and_then(|p| p.parse().ok())
            .unwrap_or(8080);

        let host = std::env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string());

        let config_path = std::env::var(ENV_CONFIG_PATH)
            .unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());

        let llm = Self::load_config_file(&config_path)
            .map(|cf| cf.llm)
            .unwrap_or_default()
            .apply_env();

        Self { llm, port, host }
    }

    /// Load configuration from YAML file
    fn load_config_file(path: &str) -> Option<ConfigFile> {
        let path = Path::new(path);

        if !path.exists() {
            tracing::debug!(path = %path.display(), "Config file not found, using defaults");
            return None;
        }

        match fs::read_to_string(path) {
            Ok(contents) => parse_config(&contents).map_or_else(
                |e| {
                    tracing::warn!(path = %path.display(), error = %e, "Failed to parse config file, using defaults");
                    None
                },
                |config| {
                    tracing::info!(path = %path.display(), "Loaded configuration from file");
                    Some(config)
                },
            ),
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "Failed to read config file, using defaults");
                None
            }
        }
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse_config(contents: &str) -> Result<ConfigFile, serde_yaml::Error> {
    let contents = contents.trim();
    if contents.is_empty() {
        return Ok(ConfigFile::default());
    }
    serde_yaml::from_str(contents)
}
