use std::io;
use tracing::info;
use yb_tuner_core::telemetry::init_tracing;
use yb_tuner_core::{Advisor, AdvisorConfig, OpenAiChatClient, PromptInputs};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Logging / tracing (stderr only)
    init_tracing();

    // Credential and endpoint are read once, here, and passed down explicitly
    let cfg = AdvisorConfig::from_env();
    info!(target = "yb_tuner", base_url = %cfg.base_url, model = %cfg.model, "Starting yb-tuner");

    let client = OpenAiChatClient::new(cfg.clone())?;
    let advisor = Advisor::new(client, &cfg);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    advisor.run(&PromptInputs::bundled(), &mut out).await?;
    Ok(())
}
