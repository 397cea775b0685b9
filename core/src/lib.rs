// yb-tuner Core Library
// Prompt assembly and single-shot completion dispatch for YugabyteDB query tuning

pub mod advisor;
pub mod backend;
pub mod client;
pub mod config;
pub mod error;
pub mod prompt;
pub mod telemetry;

// Export core types
pub use advisor::{emit, Advisor};
pub use backend::{ChatBody, ChatMessage, CompletionBackend, CompletionRequest};
pub use client::OpenAiChatClient;
pub use config::AdvisorConfig;
pub use error::{Result, TunerError};
pub use prompt::{build_request, PromptInputs, SYSTEM_PROMPT};
