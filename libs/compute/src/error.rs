use thiserror::Error;

/// Failures talking to the compute service.
#[derive(Debug, Error)]
pub enum ComputeError {
    /// Non-2xx response, decoded from the `{code, message}` error body.
    #[error(
        "compute service error: status={status} code={} message={message}",
        .code.as_deref().unwrap_or("-")
    )]
    Api { status: u16, code: Option<String>, message: String },

    #[error("unsupported mode: {0}")]
    UnsupportedMode(String),

    #[error("invalid result hash from compute service: {0:?}")]
    InvalidResultHash(String),

    /// Transport, timeout, or response decoding failure.
    #[error(transparent)]
    Http(#[from] reqwest::Error),
}

impl ComputeError {
    pub fn is_status(&self, status: u16) -> bool {
        matches!(self, ComputeError::Api { status: s, .. } if *s == status)
    }
}
