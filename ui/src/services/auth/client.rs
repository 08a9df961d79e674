use async_trait::async_trait;
use reqwest::{Client, Response};
use tracing::{info, instrument, warn};

use super::errors::{AuthError, AuthResult};
use super::types::*;
use crate::services::config::AppConfig;

/// Account operations offered by the authentication backend.
///
/// WASM futures are not `Send`, so the trait is `?Send`.
#[async_trait(?Send)]
pub trait AuthClient {
    /// Create an account with email and password
    async fn create_account(&self, email: &str, password: &str) -> AuthResult<AuthUser>;

    /// Set the display name of a freshly created account
    async fn update_display_name(&self, id_token: &str, display_name: &str) -> AuthResult<()>;
}

/// Create an account and then attach a display name to it.
///
/// A failing display-name update is logged and the created user is still
/// returned, since the account already exists at that point.
pub async fn create_account_with_profile(
    client: &dyn AuthClient,
    email: &str,
    password: &str,
    display_name: Option<&str>,
) -> AuthResult<AuthUser> {
    let mut user = client.create_account(email, password).await?;

    if let Some(name) = display_name.filter(|name| !name.is_empty()) {
        match client.update_display_name(&user.id_token, name).await {
            Ok(()) => user.display_name = Some(name.to_string()),
            Err(e) => warn!("Account {} created but display name update failed: {}", user.uid, e),
        }
    }

    Ok(user)
}

/// Identity Toolkit REST client
#[derive(Clone)]
pub struct FirebaseAuthClient {
    pub(crate) http_client: Client,
    pub(crate) config: AppConfig,
}

impl FirebaseAuthClient {
    pub fn new(config: AppConfig) -> Self {
        Self {
            http_client: Client::new(),
            config,
        }
    }

    /// Turn a non-success response into a coded error
    async fn rejection(response: Response) -> AuthError {
        let status = response.status();
        let body = match response.text().await {
            Ok(body) => body,
            Err(e) => return AuthError::network(format!("Failed to read error response: {}", e)),
        };

        match serde_json::from_str::<RestErrorEnvelope>(&body) {
            Ok(envelope) => envelope.into_auth_error(),
            Err(_) => AuthError::internal(format!("HTTP {}: {}", status, body)),
        }
    }
}

#[async_trait(?Send)]
impl AuthClient for FirebaseAuthClient {
    #[instrument(skip(self, password), err)]
    async fn create_account(&self, email: &str, password: &str) -> AuthResult<AuthUser> {
        info!("Creating account for {}", email);

        let response = self
            .http_client
            .post(self.config.auth_endpoint("signUp"))
            .json(&SignUpRequest {
                email,
                password,
                return_secure_token: true,
            })
            .send()
            .await
            .map_err(|e| AuthError::network(format!("Failed to call signUp: {}", e)))?;

        if !response.status().is_success() {
            return Err(Self::rejection(response).await);
        }

        let created: SignUpResponse = response
            .json()
            .await
            .map_err(|e| AuthError::internal(format!("Failed to parse signUp response: {}", e)))?;

        let user = created.into_user();
        info!("Account created with uid {}", user.uid);
        Ok(user)
    }

    #[instrument(skip(self, id_token), err)]
    async fn update_display_name(&self, id_token: &str, display_name: &str) -> AuthResult<()> {
        let response = self
            .http_client
            .post(self.config.auth_endpoint("update"))
            .json(&UpdateProfileRequest {
                id_token,
                display_name,
                return_secure_token: false,
            })
            .send()
            .await
            .map_err(|e| AuthError::network(format!("Failed to call update: {}", e)))?;

        if !response.status().is_success() {
            return Err(Self::rejection(response).await);
        }

        let updated: UpdateProfileResponse = response
            .json()
            .await
            .map_err(|e| AuthError::internal(format!("Failed to parse update response: {}", e)))?;

        if updated.display_name.as_deref() != Some(display_name) {
            warn!("Backend echoed display name {:?}", updated.display_name);
        }
        Ok(())
    }
}
