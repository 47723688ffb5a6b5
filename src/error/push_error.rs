use thiserror::Error;

/// Crate-wide error type covering every failure a send can surface.
///
/// Each failure is constructed once and handed to the caller; there is no
/// local recovery in this crate. Collaborator failures (transport,
/// credential provider) keep their own variants and are not reinterpreted.
#[derive(Error, Debug)]
pub enum PushError {
    /// The send request was rejected before any I/O took place
    #[error("Invalid request: {message}")]
    InvalidRequest { message: String },

    /// The provider answered with an error status; carries the
    /// provider-supplied error value
    #[error("Provider error ({status}): {error}")]
    Provider {
        status: u16,
        error: serde_json::Value,
    },

    /// The provider's error response body could not be interpreted
    #[error("Malformed provider response: {message}")]
    MalformedResponse {
        message: String,
        #[source]
        source: Option<serde_json::Error>,
    },

    /// The HTTP transport failed before a response was produced
    #[error("Transport error")]
    Transport {
        #[source]
        source: reqwest::Error,
    },

    /// The credential provider failed to produce a bearer token
    #[error("Credential error: {message}")]
    Credential {
        message: String,
        #[source]
        source: Option<anyhow::Error>,
    },

    /// Provider configuration is unusable
    #[error("Configuration error: {key} - {message}")]
    Configuration { key: String, message: String },
}

impl PushError {
    /// Create an invalid-request error (pre-flight validation failure)
    pub fn invalid_request<S: Into<String>>(message: S) -> Self {
        PushError::InvalidRequest {
            message: message.into(),
        }
    }

    /// Create a provider error carrying the upstream error value.
    ///
    /// The reported status is always 400, whatever the upstream HTTP
    /// status was. Callers match on that code; the real upstream status
    /// is logged at the call site.
    pub fn provider(error: serde_json::Value) -> Self {
        PushError::Provider { status: 400, error }
    }

    /// Create a malformed-response error
    pub fn malformed<S: Into<String>>(message: S, source: Option<serde_json::Error>) -> Self {
        PushError::MalformedResponse {
            message: message.into(),
            source,
        }
    }

    /// Create a credential error with an underlying cause
    pub fn credential<S: Into<String>>(message: S, source: Option<anyhow::Error>) -> Self {
        PushError::Credential {
            message: message.into(),
            source,
        }
    }

    /// Create a configuration error for a specific key
    pub fn configuration<S: Into<String>>(key: S, message: S) -> Self {
        PushError::Configuration {
            key: key.into(),
            message: message.into(),
        }
    }

    /// HTTP-equivalent status code for this error
    pub fn status(&self) -> u16 {
        match self {
            PushError::InvalidRequest { .. } => 400,
            PushError::Provider { status, .. } => *status,
            PushError::MalformedResponse { .. } => 502,
            PushError::Transport { .. } => 502,
            PushError::Credential { .. } => 401,
            PushError::Configuration { .. } => 500,
        }
    }
}

impl From<reqwest::Error> for PushError {
    fn from(source: reqwest::Error) -> Self {
        PushError::Transport { source }
    }
}

/// Type alias for Result with PushError to simplify function signatures
pub type PushResult<T> = Result<T, PushError>;
