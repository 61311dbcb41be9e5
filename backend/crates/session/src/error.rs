//! Session Error Types
//!
//! Every error here is resolved inside the crate into an allow/redirect
//! decision; none is rendered to the end user as raw text.

use axum::http::StatusCode;
use thiserror::Error;

/// Session-specific result type alias
pub type SessionResult<T> = Result<T, SessionError>;

/// Session-specific error variants
#[derive(Debug, Error)]
pub enum SessionError {
    /// Token does not have three segments or its payload does not decode
    #[error("Malformed session token: {0}")]
    MalformedToken(String),

    /// No credential in the store
    #[error("No session credential present")]
    MissingCredential,

    /// The identity provider reported an error in the callback
    #[error("OAuth provider returned an error: {0}")]
    ProviderDenied(String),

    /// The identity backend rejected the exchange
    #[error("OAuth exchange rejected with status {0}")]
    ExchangeRejected(StatusCode),

    /// Transport failure talking to the identity backend
    #[error("OAuth exchange request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl SessionError {
    /// Log the error with appropriate level
    pub fn log(&self) {
        match self {
            SessionError::Http(e) => {
                tracing::error!(error = %e, "Identity backend unreachable");
            }
            SessionError::ExchangeRejected(status) => {
                tracing::error!(status = %status, "OAuth exchange rejected");
            }
            SessionError::ProviderDenied(reason) => {
                tracing::warn!(reason = %reason, "OAuth provider denied authorization");
            }
            SessionError::Internal(msg) => {
                tracing::error!(message = %msg, "Session internal error");
            }
            SessionError::MalformedToken(_) | SessionError::MissingCredential => {
                tracing::debug!(error = %self, "Session credential rejected");
            }
        }
    }
}
