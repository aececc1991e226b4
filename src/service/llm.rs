//! Completion service capability and provider bindings
//!
//! The analyzers only ever see [`CompletionService`]. A concrete binding is
//! chosen once at start-up from [`LlmConfig`] and injected as a shared handle.

use std::sync::Arc;
use std::time::{Duration, Instant};

use async_trait::async_trait;
use rig::client::{CompletionClient, Nothing};
use rig::completion::Prompt;
use rig::providers::{anthropic, ollama, openai};

use crate::model::{LlmConfig, LlmProvider};

/// Anthropic requires an explicit output budget
const ANTHROPIC_MAX_TOKENS: u64 = 4096;

/// Role-tagged prompt sent to the completion service
#[derive(Debug, Clone, PartialEq)]
pub struct CompletionRequest {
    /// Name of the structured output contract, used for logging and stubs
    pub contract: &'static str,
    /// System instructions including the format instructions
    pub preamble: String,
    /// User message with the shaped input interpolated
    pub prompt: String,
}

/// Upstream failure of the completion provider
#[derive(Debug, Clone, thiserror::Error)]
#[non_exhaustive]
pub enum CompletionError {
    #[error("{provider} request failed: {message}")]
    Request {
        provider: &'static str,
        message: String,
    },

    #[error("{provider} request timed out after {seconds}s")]
    Timeout {
        provider: &'static str,
        seconds: u64,
    },
}

/// Capability turning a prompt into raw model text
///
/// Implementations must be safe for concurrent, interleaved use by
/// independent analysis runs.
#[async_trait]
pub trait CompletionService: Send + Sync {
    async fn complete(&self, request: &CompletionRequest) -> Result<String, CompletionError>;

    /// Short provider label for logs and health output
    fn provider(&self) -> &'static str;
}

/// Shared completion service handle
pub type SharedCompletionService = Arc<dyn CompletionService>;

/// Failure to construct a provider binding
#[derive(Debug, thiserror::Error)]
pub enum LlmClientError {
    #[error("Missing API key: {0} is not set")]
    MissingApiKey(&'static str),

    #[error("Failed to create {provider} client: {message}")]
    Client {
        provider: &'static str,
        message: String,
    },
}

/// Build the completion service selected by configuration
///
/// API keys are read from the process environment.
pub fn build_completion_service(
    config: &LlmConfig,
) -> Result<SharedCompletionService, LlmClientError> {
    build_with_keys(config, |var| std::env::var(var).ok())
}

fn build_with_keys(
    config: &LlmConfig,
    lookup: impl Fn(&str) -> Option<String>,
) -> Result<SharedCompletionService, LlmClientError> {
    let api_key = api_key(config.provider, &lookup)?;
    let timeout = Duration::from_secs(config.request_timeout_secs);
    let model = config.model_name().to_string();
    let provider = config.provider.as_str();

    let service: SharedCompletionService = match config.provider {
        LlmProvider::OpenAi => {
            let client = openai::Client::new(&api_key)
                .map_err(|e| client_error(provider, e))?;
            Arc::new(OpenAiCompletionService {
                client,
                model,
                temperature: config.temperature,
                timeout,
            })
        }
        LlmProvider::Anthropic => {
            let client = anthropic::Client::new(&api_key)
                .map_err(|e| client_error(provider, e))?;
            Arc::new(AnthropicCompletionService {
                client,
                model,
                temperature: config.temperature,
                timeout,
            })
        }
        LlmProvider::Ollama => {
            let client = ollama::Client::builder()
                .api_key(Nothing)
                .base_url(config.base_url())
                .build()
                .map_err(|e| client_error(provider, e))?;
            Arc::new(OllamaCompletionService {
                client,
                model,
                temperature: config.temperature,
                timeout,
            })
        }
    };

    tracing::info!(
        provider,
        model = %config.model_name(),
        timeout_secs = config.request_timeout_secs,
        "Completion service initialized"
    );

    Ok(service)
}

fn api_key(
    provider: LlmProvider,
    lookup: &impl Fn(&str) -> Option<String>,
) -> Result<String, LlmClientError> {
    match provider.api_key_var() {
        Some(var) => lookup(var)
            .filter(|key| !key.trim().is_empty())
            .ok_or(LlmClientError::MissingApiKey(var)),
        None => Ok(String::new()),
    }
}

fn client_error(provider: &'static str, e: impl std::fmt::Display) -> LlmClientError {
    LlmClientError::Client {
        provider,
        message: e.to_string(),
    }
}

/// Await a provider call under the configured deadline
async fn with_deadline<F, E>(
    provider: &'static str,
    timeout: Duration,
    request: &CompletionRequest,
    call: F,
) -> Result<String, CompletionError>
where
    F: std::future::Future<Output = Result<String, E>>,
    E: std::fmt::Display,
{
    let start_time = Instant::now();
    let outcome = tokio::time::timeout(timeout, call).await;
    let elapsed_ms = start_time.elapsed().as_millis();

    match outcome {
        Ok(Ok(text)) => {
            tracing::debug!(
                provider,
                contract = request.contract,
                elapsed_ms,
                response_length = text.len(),
                "Completion call returned"
            );
            Ok(text)
        }
        Ok(Err(e)) => Err(CompletionError::Request {
            provider,
            message: e.to_string(),
        }),
        Err(_) => Err(CompletionError::Timeout {
            provider,
            seconds: timeout.as_secs(),
        }),
    }
}

/// OpenAI chat completion binding
pub struct OpenAiCompletionService {
    client: openai::Client,
    model: String,
    temperature: f64,
    timeout: Duration,
}

#[async_trait]
impl CompletionService for OpenAiCompletionService {
    async fn complete(&self, request: &CompletionRequest) -> Result<String, CompletionError> {
        let agent = self
            .client
            .agent(&self.model)
            .preamble(&request.preamble)
            .temperature(self.temperature)
            .build();

        with_deadline(self.provider(), self.timeout, request, async {
            agent.prompt(request.prompt.as_str()).await
        })
        .await
    }

    fn provider(&self) -> &'static str {
        "openai"
    }
}

/// Anthropic messages binding
pub struct AnthropicCompletionService {
    client: anthropic::Client,
    model: String,
    temperature: f64,
    timeout: Duration,
}

#[async_trait]
impl CompletionService for AnthropicCompletionService {
    async fn complete(&self, request: &CompletionRequest) -> Result<String, CompletionError> {
        let agent = self
            .client
            .agent(&self.model)
            .preamble(&request.preamble)
            .temperature(self.temperature)
            .max_tokens(ANTHROPIC_MAX_TOKENS)
            .build();

        with_deadline(self.provider(), self.timeout, request, async {
            agent.prompt(request.prompt.as_str()).await
        })
        .await
    }

    fn provider(&self) -> &'static str {
        "anthropic"
    }
}

/// Self-hosted Ollama binding
pub struct OllamaCompletionService {
    client: ollama::Client,
    model: String,
    temperature: f64,
    timeout: Duration,
}

#[async_trait]
impl CompletionService for OllamaCompletionService {
    async fn complete(&self, request: &CompletionRequest) -> Result<String, CompletionError> {
        let agent = self
            .client
            .agent(&self.model)
            .preamble(&request.preamble)
            .temperature(self.temperature)
            .build();

        with_deadline(self.provider(), self.timeout, request, async {
            agent.prompt(request.prompt.as_str()).await
        })
        .await
    }

    fn provider(&self) -> &'static str {
        "ollama"
    }
}
