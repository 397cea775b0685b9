// Logging setup. Stdout is reserved for the completion, so everything goes to stderr.
use tracing_subscriber::EnvFilter;

pub const DEFAULT_FILTER: &str = "warn,yb_tuner=info,yb_tuner_core=info";

/// Install the global fmt subscriber, honouring `RUST_LOG`
pub fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    // A second init (e.g. from tests) is not an error worth surfacing
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .try_init();
}
