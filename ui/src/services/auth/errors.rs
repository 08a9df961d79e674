use thiserror::Error;

use super::codes::AuthErrorCode;

/// Rejection from the authentication backend.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("{code}: {message}")]
pub struct AuthError {
    pub code: AuthErrorCode,
    pub message: String,
}

impl AuthError {
    pub fn new(code: AuthErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    /// Build an error from an Identity Toolkit REST error message.
    pub fn from_rest_message(message: &str) -> Self {
        Self::new(AuthErrorCode::from_rest_message(message), message)
    }

    pub fn network(message: impl Into<String>) -> Self {
        Self::new(AuthErrorCode::network_request_failed(), message)
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(AuthErrorCode::internal(), message)
    }
}

pub type AuthResult<T> = Result<T, AuthError>;
