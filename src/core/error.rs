/// Application-wide Result type
pub type Result<T> = std::result::Result<T, AppError>;

/// Main application error type
#[derive(thiserror::Error, Debug)]
pub enum AppError {
    /// Validation errors for business rules
    #[error("Validation error: {0}")]
    Validation(String),

    /// Store rejection carrying the HTTP status it answered with
    #[error("Erreur {status}")]
    Api { status: u16 },

    /// Network-level failure before any HTTP status was produced
    #[error("Transport error: {0}")]
    Transport(String),

    /// Response payload did not match the expected shape
    #[error("Decode error: {0}")]
    Decode(String),

    /// Session state missing or malformed
    #[error("Session error: {0}")]
    Session(String),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Configuration(String),
}

/// Coarse error category for presentation-layer branching
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Validation,
    Api,
    Transport,
    Decode,
    Session,
    Configuration,
}

// Helper functions for common error scenarios
impl AppError {
    pub fn validation(msg: impl Into<String>) -> Self {
        AppError::Validation(msg.into())
    }

    pub fn api(status: u16) -> Self {
        AppError::Api { status }
    }

    pub fn transport(msg: impl Into<String>) -> Self {
        AppError::Transport(msg.into())
    }

    pub fn decode(msg: impl Into<String>) -> Self {
        AppError::Decode(msg.into())
    }

    pub fn session(msg: impl Into<String>) -> Self {
        AppError::Session(msg.into())
    }

    pub fn configuration(msg: impl Into<String>) -> Self {
        AppError::Configuration(msg.into())
    }

    /// HTTP status carried by the error, when the store answered at all.
    ///
    /// Only `Api` errors carry one; transport failures never reached a
    /// response and validation never left the client.
    pub fn status(&self) -> Option<u16> {
        match self {
            AppError::Api { status } => Some(*status),
            _ => None,
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            AppError::Validation(_) => ErrorKind::Validation,
            AppError::Api { .. } => ErrorKind::Api,
            AppError::Transport(_) => ErrorKind::Transport,
            AppError::Decode(_) => ErrorKind::Decode,
            AppError::Session(_) => ErrorKind::Session,
            AppError::Configuration(_) => ErrorKind::Configuration,
        }
    }
}

impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        match err.status() {
            Some(status) => AppError::Api {
                status: status.as_u16(),
            },
            None => AppError::Transport(err.to_string()),
        }
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Decode(err.to_string())
    }
}
