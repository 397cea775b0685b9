use crate::backend::{CompletionBackend, CompletionRequest};
use crate::config::AdvisorConfig;
use crate::{Result, TunerError};
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use tracing::{debug, error, info};

/// HTTP client for OpenAI-compatible Chat Completions backends.
///
/// No client-side timeout is configured: the single request blocks until the
/// service answers or the transport fails.
#[derive(Clone)]
pub struct OpenAiChatClient {
    http: Client,
    url: String,
    api_key: String,
}

impl OpenAiChatClient {
    /// Fails with [`TunerError::Authentication`] when no credential is configured,
    /// so a missing key never reaches the network.
    pub fn new(cfg: AdvisorConfig) -> Result<Self> {
        let api_key = cfg
            .api_key
            .clone()
            .filter(|k| !k.is_empty())
            .ok_or_else(|| {
                TunerError::Authentication("OPENAI_API_KEY is not set".to_string())
            })?;
        let http = Client::builder().build()?;
        Ok(Self {
            http,
            url: cfg.chat_completions_url(),
            api_key,
        })
    }
}

#[async_trait]
impl CompletionBackend for OpenAiChatClient {
    async fn send(&self, request: &CompletionRequest) -> Result<String> {
        let url = &self.url;
        debug!(
            target = "llm_client",
            model = %request.model,
            payload_chars = request.user.chars().count(),
            "POST {} via Chat Completions",
            url
        );

        let resp = self
            .http
            .post(url.as_str())
            .header("content-type", "application/json")
            .bearer_auth(&self.api_key)
            .json(&request.body())
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            error!(target = "llm_client", %status, body = %body, "Chat Completions error");
            return Err(classify_status(status, body));
        }

        let val: serde_json::Value = resp.json().await.map_err(|e| {
            TunerError::MalformedResponse(format!("Failed to parse Chat Completions JSON: {e}"))
        })?;
        let text = extract_text_from_chat_completions(&val).ok_or_else(|| {
            TunerError::MalformedResponse(
                "Missing choices[0].message.content in chat completions".into(),
            )
        })?;
        info!(
            target = "llm_client",
            model = val.get("model").and_then(|v| v.as_str()).unwrap_or_default(),
            completion_chars = text.chars().count(),
            "Chat Completions ok"
        );
        Ok(text)
    }
}

fn classify_status(status: StatusCode, body: String) -> TunerError {
    match status {
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
            TunerError::Authentication(format!("status={} body={}", status, body))
        }
        _ => TunerError::Service {
            status: status.as_u16(),
            body,
        },
    }
}

fn extract_text_from_chat_completions(v: &serde_json::Value) -> Option<String> {
    v.get("choices")?
        .get(0)?
        .get("message")?
        .get("content")?
        .as_str()
        .map(|s| s.to_string())
}
