//! Concurrent classification client.
//!
//! Queries several upstream AI providers at once through an
//! OpenAI-compatible chat completion API and returns the first reply that
//! comes back. The classifier never fails: when every provider is exhausted
//! it returns [`FALLBACK_REPLY`] instead of an error.

use std::sync::Arc;
use std::time::Duration;

use reqwest::{header, StatusCode};
use serde::{Deserialize, Serialize};
use serenity::async_trait;
use thiserror::Error;
use tokio::sync::mpsc;

const COMPLETION_API_URL: &str = "https://chat-api-rp7a.onrender.com/v1/chat/completions";
const COMPLETION_MODEL: &str = "gpt-4o";

/// Providers raced for every classification, in submission order.
const PROVIDERS: [&str; 3] = ["Blackbox", "DarkAI", "PollinationsAI"];

/// Attempts made against a single provider before giving up on it.
const MAX_ATTEMPTS: u32 = 3;

/// Per-request timeout, applied at the HTTP client level.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Reply returned when no provider produced a response.
pub const FALLBACK_REPLY: &str =
    "Sorry, I couldn't get a response from any AI provider at the moment.";

/// Error from a single completion attempt.
#[derive(Error, Debug)]
pub enum BackendError {
    /// Transport-level failure, including the request timeout.
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The API answered with a non-200 status.
    #[error("unexpected status code {0}")]
    Status(u16),

    /// The API answered 200 but the body held no message content.
    #[error("response missing message content")]
    MalformedResponse,
}

/// Transport for one completion attempt against a named provider.
///
/// Implemented over reqwest in production and by a scripted fake in tests.
#[async_trait]
pub trait CompletionBackend: Send + Sync {
    async fn complete(&self, provider: &str, prompt: &str) -> Result<String, BackendError>;
}

#[derive(Serialize)]
struct CompletionRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    provider: &'a str,
    stream: bool,
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Deserialize)]
struct CompletionResponse {
    choices: Vec<CompletionChoice>,
}

#[derive(Deserialize)]
struct CompletionChoice {
    message: ChoiceMessage,
}

#[derive(Deserialize)]
struct ChoiceMessage {
    content: String,
}

/// Production backend speaking the OpenAI-compatible chat completion API.
pub struct HttpCompletionBackend {
    client: reqwest::Client,
}

impl HttpCompletionBackend {
    pub fn new(client: reqwest::Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl CompletionBackend for HttpCompletionBackend {
    async fn complete(&self, provider: &str, prompt: &str) -> Result<String, BackendError> {
        let body = CompletionRequest {
            model: COMPLETION_MODEL,
            messages: vec![ChatMessage {
                role: "user",
                content: prompt,
            }],
            provider,
            stream: false,
        };

        let response = self
            .client
            .post(COMPLETION_API_URL)
            .header(header::ACCEPT, "application/json")
            .json(&body)
            .send()
            .await?;

        if response.status() != StatusCode::OK {
            return Err(BackendError::Status(response.status().as_u16()));
        }

        let completion: CompletionResponse = response.json().await?;
        completion
            .choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content)
            .ok_or(BackendError::MalformedResponse)
    }
}

/// Outcome of one provider's full attempt budget.
struct ProviderResult {
    provider: &'static str,
    reply: Option<String>,
}

/// Races all configured providers and returns the first successful reply.
pub struct ClassifierClient {
    backend: Arc<dyn CompletionBackend>,
}

impl ClassifierClient {
    /// Builds the production client on top of a shared reqwest client.
    ///
    /// The reqwest client is expected to carry [`REQUEST_TIMEOUT`] so that a
    /// hung provider cannot stall its attempt loop indefinitely.
    pub fn new(http_client: reqwest::Client) -> Self {
        Self::with_backend(Arc::new(HttpCompletionBackend::new(http_client)))
    }

    /// Builds a client over any completion backend.
    pub fn with_backend(backend: Arc<dyn CompletionBackend>) -> Self {
        Self { backend }
    }

    /// Requests a completion for the prompt, racing every provider.
    ///
    /// Each provider is queried on its own task with up to [`MAX_ATTEMPTS`]
    /// tries. The first successful reply wins; the losing tasks are left to
    /// finish on their own and their results are discarded. When every
    /// provider fails, [`FALLBACK_REPLY`] is returned.
    pub async fn classify(&self, prompt: &str) -> String {
        let (tx, mut rx) = mpsc::channel(PROVIDERS.len());

        for provider in PROVIDERS {
            let backend = Arc::clone(&self.backend);
            let prompt = prompt.to_string();
            let tx = tx.clone();

            // Once a winner is taken the receiver drops and the remaining
            // sends fail silently, abandoning the slower tasks.
            tokio::spawn(async move {
                let reply = query_provider(backend.as_ref(), provider, &prompt).await;
                let _ = tx.send(ProviderResult { provider, reply }).await;
            });
        }
        drop(tx);

        while let Some(result) = rx.recv().await {
            if let Some(reply) = result.reply {
                tracing::debug!("Response received from {}", result.provider);
                return reply;
            }
        }

        FALLBACK_REPLY.to_string()
    }
}

/// Runs one provider's attempt budget, returning its first success.
async fn query_provider(
    backend: &dyn CompletionBackend,
    provider: &'static str,
    prompt: &str,
) -> Option<String> {
    for attempt in 1..=MAX_ATTEMPTS {
        match backend.complete(provider, prompt).await {
            Ok(reply) => return Some(reply),
            Err(e) => {
                if attempt == MAX_ATTEMPTS {
                    tracing::error!("Error with {}: {}", provider, e);
                }
            }
        }
    }

    None
}
