// ============================================================================
// ERRORS - Transport / Domain / Validation
// ============================================================================

use thiserror::Error;

/// Failure below the envelope: the request never produced a usable body.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TransportError {
    #[error("Network error: {0}")]
    Network(String),
    #[error("HTTP {status}: {message}")]
    Status { status: u16, message: String },
    #[error("Parse error: {0}")]
    Parse(String),
    #[error("Request build error: {0}")]
    Build(String),
}

/// Error returned by services and mutation calls. Stores flatten it into a `String`.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ClientError {
    #[error(transparent)]
    Transport(#[from] TransportError),
    /// Well-formed envelope with a non-success code or a missing `content`
    #[error("{0}")]
    Domain(String),
    /// Precondition failed locally; no request was sent
    #[error("{0}")]
    Validation(String),
}

impl ClientError {
    pub fn is_validation(&self) -> bool {
        matches!(self, ClientError::Validation(_))
    }

    /// Prefixes the message with `context`. Validation errors pass through untouched.
    pub fn context(self, context: &str) -> Self {
        match self {
            ClientError::Transport(e) => ClientError::Domain(format!("{}: {}", context, e)),
            ClientError::Domain(msg) => ClientError::Domain(format!("{}: {}", context, msg)),
            ClientError::Validation(msg) => ClientError::Validation(msg),
        }
    }
}

pub type ClientResult<T> = Result<T, ClientError>;
