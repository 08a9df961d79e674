use serde::{Deserialize, Serialize};

use super::codes::AuthErrorCode;
use super::errors::AuthError;

/// Signed-in user returned by a successful sign-up
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthUser {
    pub uid: String,
    pub email: String,
    pub display_name: Option<String>,
    pub id_token: String,
    pub refresh_token: String,
    /// Token lifetime in seconds, as reported by the backend
    pub expires_in: Option<u64>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SignUpRequest<'a> {
    pub email: &'a str,
    pub password: &'a str,
    pub return_secure_token: bool,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignUpResponse {
    pub local_id: String,
    #[serde(default)]
    pub email: String,
    pub id_token: String,
    #[serde(default)]
    pub refresh_token: String,
    #[serde(default)]
    pub expires_in: Option<String>,
}

impl SignUpResponse {
    pub fn into_user(self) -> AuthUser {
        AuthUser {
            uid: self.local_id,
            email: self.email,
            display_name: None,
            id_token: self.id_token,
            refresh_token: self.refresh_token,
            expires_in: self.expires_in.and_then(|secs| secs.parse().ok()),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProfileRequest<'a> {
    pub id_token: &'a str,
    pub display_name: &'a str,
    pub return_secure_token: bool,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProfileResponse {
    #[serde(default)]
    pub display_name: Option<String>,
}

/// Error envelope used by the Identity Toolkit REST API
#[derive(Debug, Clone, Deserialize)]
pub struct RestErrorEnvelope {
    pub error: RestErrorBody,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RestErrorBody {
    #[serde(default)]
    pub code: u16,
    #[serde(default)]
    pub message: String,
}

impl RestErrorEnvelope {
    /// Coded error whose message keeps the HTTP status reported in the body
    pub fn into_auth_error(self) -> AuthError {
        let RestErrorBody { code, message } = self.error;
        AuthError::new(
            AuthErrorCode::from_rest_message(&message),
            format!("HTTP {}: {}", code, message),
        )
    }
}
