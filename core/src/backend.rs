use crate::Result;
use async_trait::async_trait;
use serde::Serialize;

/// One chat-completions request: a system instruction and a single user message
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompletionRequest {
    pub model: String,
    pub system: String,
    pub user: String,
}

/// Chat Completions wire body, borrowed from a [`CompletionRequest`]
#[derive(Debug, Serialize)]
pub struct ChatBody<'a> {
    pub model: &'a str,
    pub messages: [ChatMessage<'a>; 2],
}

#[derive(Debug, Serialize)]
pub struct ChatMessage<'a> {
    pub role: &'static str,
    pub content: &'a str,
}

impl CompletionRequest {
    pub fn new(
        model: impl Into<String>,
        system: impl Into<String>,
        user: impl Into<String>,
    ) -> Self {
        Self {
            model: model.into(),
            system: system.into(),
            user: user.into(),
        }
    }

    /// Request body: system message first, then the payload as the user message
    pub fn body(&self) -> ChatBody<'_> {
        ChatBody {
            model: &self.model,
            messages: [
                ChatMessage {
                    role: "system",
                    content: &self.system,
                },
                ChatMessage {
                    role: "user",
                    content: &self.user,
                },
            ],
        }
    }
}

/// Anything that turns a request into the primary completion text.
///
/// Contract:
/// - exactly one attempt per call, no retry
/// - Ok carries the first choice's text untouched
#[async_trait]
pub trait CompletionBackend: Send + Sync {
    async fn send(&self, request: &CompletionRequest) -> Result<String>;
}
