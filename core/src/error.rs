use thiserror::Error;

#[derive(Error, Debug)]
pub enum TunerError {
    #[error("Authentication error: {0}")]
    Authentication(String),

    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Service error: status={status} body={body}")]
    Service { status: u16, body: String },

    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl TunerError {
    /// Short machine-friendly code, used as a tracing field
    pub fn code(&self) -> &'static str {
        match self {
            TunerError::Authentication(_) => "AUTHENTICATION_ERROR",
            TunerError::Transport(_) => "TRANSPORT_ERROR",
            TunerError::Service { .. } => "SERVICE_ERROR",
            TunerError::MalformedResponse(_) => "MALFORMED_RESPONSE",
            TunerError::Io(_) => "IO_ERROR",
        }
    }
}

pub type Result<T> = std::result::Result<T, TunerError>;
