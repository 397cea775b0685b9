//! Build → dispatch → emit.

use crate::backend::{CompletionBackend, CompletionRequest};
use crate::config::AdvisorConfig;
use crate::prompt::{build_request, PromptInputs};
use crate::Result;
use std::io::Write;
use tracing::{info, warn};

/// Prompt dispatcher over any [`CompletionBackend`]
pub struct Advisor<B: CompletionBackend> {
    backend: B,
    model: String,
    system_prompt: String,
}

impl<B: CompletionBackend> Advisor<B> {
    pub fn new(backend: B, cfg: &AdvisorConfig) -> Self {
        Self {
            backend,
            model: cfg.model.clone(),
            system_prompt: cfg.system_prompt.clone(),
        }
    }

    /// Send the payload as the user message and return the completion text
    pub async fn dispatch(&self, payload: &str) -> Result<String> {
        let request = CompletionRequest::new(&self.model, &self.system_prompt, payload);
        self.backend.send(&request).await
    }

    /// Run the whole sequence once. `out` is only written after a successful dispatch.
    pub async fn run<W: Write>(&self, inputs: &PromptInputs<'_>, out: &mut W) -> Result<()> {
        let payload = build_request(inputs);
        info!(
            target = "advisor",
            model = %self.model,
            payload_chars = payload.chars().count(),
            "Dispatching tuning prompt"
        );
        let text = match self.dispatch(&payload).await {
            Ok(t) => t,
            Err(e) => {
                warn!(target = "advisor", code = e.code(), error = %e, "Dispatch failed");
                return Err(e);
            }
        };
        emit(out, &text)
    }
}

/// Write the completion verbatim: no prefix, suffix or trailing newline
pub fn emit<W: Write>(out: &mut W, text: &str) -> Result<()> {
    out.write_all(text.as_bytes())?;
    out.flush()?;
    Ok(())
}
