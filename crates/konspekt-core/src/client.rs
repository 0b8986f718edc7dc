use async_trait::async_trait;

use crate::provider::{Provider, ProviderError};

#[derive(Debug, thiserror::Error)]
pub enum ModelError {
    #[error("API request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Invalid API response: {reason}")]
    InvalidResponse { reason: String },

    #[error(transparent)]
    Provider(#[from] ProviderError),
}

/// The external generative capability: a prompt in, a text completion out.
/// No retries and no caching live here; callers decide how to react to
/// failure.
#[async_trait]
pub trait TextModel: Send + Sync {
    async fn complete(&self, prompt: &str) -> Result<String, ModelError>;
}

/// Chat-completions client for one configured provider.
pub struct GenAiClient {
    http: reqwest::Client,
    api_url: &'static str,
    model: &'static str,
    api_key: String,
}

impl GenAiClient {
    /// Build a client for `provider`, reading its API key from the process
    /// environment. Fails fast with `MissingApiKey` before any request.
    pub fn new(provider: &Provider) -> Result<Self, ModelError> {
        let config = provider.config();
        let api_key = provider.validate_api_key()?;
        Ok(Self {
            http: reqwest::Client::new(),
            api_url: config.api_url,
            model: config.model,
            api_key,
        })
    }
}

#[async_trait]
impl TextModel for GenAiClient {
    async fn complete(&self, prompt: &str) -> Result<String, ModelError> {
        let response = self
            .http
            .post(self.api_url)
            .header("Content-Type", "application/json")
            .header("Authorization", format!("Bearer {}", self.api_key))
            .json(&serde_json::json!({
                "model": self.model,
                "messages": [
                    {
                        "role": "user",
                        "content": prompt,
                    },
                ],
                "temperature": 0.3,
            }))
            .send()
            .await?
            .json::<serde_json::Value>()
            .await?;

        let content = response["choices"][0]["message"]["content"]
            .as_str()
            .ok_or_else(|| ModelError::InvalidResponse {
                reason: format!("{:?}", response),
            })?;

        Ok(content.to_string())
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use std::collections::VecDeque;
    use std::sync::Mutex;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use super::*;

    /// Fake model that replays a fixed sequence of responses and counts how
    /// often it was called.
    pub struct ScriptedModel {
        responses: Mutex<VecDeque<String>>,
        calls: AtomicUsize,
    }

    impl ScriptedModel {
        pub fn new<I, S>(responses: I) -> Self
        where
            I: IntoIterator<Item = S>,
            S: Into<String>,
        {
            Self {
                responses: Mutex::new(responses.into_iter().map(Into::into).collect()),
                calls: AtomicUsize::new(0),
            }
        }

        pub fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl TextModel for ScriptedModel {
        async fn complete(&self, _prompt: &str) -> Result<String, ModelError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.responses
                .lock()
                .unwrap()
                .pop_front()
                .ok_or_else(|| ModelError::InvalidResponse {
                    reason: "scripted model ran out of responses".to_string(),
                })
        }
    }

    /// Fake model whose every call fails.
    pub struct FailingModel;

    #[async_trait]
    impl TextModel for FailingModel {
        async fn complete(&self, _prompt: &str) -> Result<String, ModelError> {
            Err(ModelError::InvalidResponse {
                reason: "scripted failure".to_string(),
            })
        }
    }
}
