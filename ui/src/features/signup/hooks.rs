use std::rc::Rc;

use dioxus::prelude::*;

use super::request::CreateAccountState;
use super::storage::AuthSessionStore;
use crate::app::AppServices;
use crate::services::auth::{create_account_with_profile, AuthClient, AuthError, AuthUser};
use crate::{console_info, console_warn};

/// Live state of a create-account request plus the function that starts it
#[derive(Clone, Copy)]
pub struct CreateAccountHandle {
    state: Signal<CreateAccountState>,
    client: Signal<Rc<dyn AuthClient>>,
}

/// Hook exposing account creation through the app's `AuthClient`
pub fn use_create_account() -> CreateAccountHandle {
    let services = use_context::<AppServices>();
    let client = use_signal(|| services.auth.clone());

    CreateAccountHandle {
        state: use_signal(CreateAccountState::default),
        client,
    }
}

impl CreateAccountHandle {
    /// Create an account with email and password only.
    ///
    /// For callers that do not collect a name; the sign-up form uses
    /// `submit_with_profile`.
    pub fn submit(&self, email: String, password: String) {
        self.submit_with_profile(email, password, None);
    }

    /// Create an account, then set its display name
    pub fn submit_with_profile(
        &self,
        email: String,
        password: String,
        display_name: Option<String>,
    ) {
        let mut state = self.state;

        // Enter in a field submits the form even while the button is disabled
        if !state.with_mut(|s| s.begin()) {
            return;
        }

        let client = Rc::clone(&*self.client.peek());

        spawn(async move {
            let result = create_account_with_profile(
                client.as_ref(),
                &email,
                &password,
                display_name.as_deref(),
            )
            .await;

            match &result {
                Ok(created) => {
                    console_info!("[SignUp] Account created for {}", created.email);
                    if let Err(e) = AuthSessionStore::store_user(created) {
                        console_warn!("[SignUp] Could not persist session: {}", e);
                    }
                }
                Err(e) => console_warn!("[SignUp] Sign-up rejected: {}", e),
            }

            state.with_mut(|s| s.finish(result));
        });
    }

    /// Latest backend rejection; reading it subscribes to request changes
    pub fn error(&self) -> Option<AuthError> {
        self.state.read().error.clone()
    }

    pub fn user(&self) -> Option<AuthUser> {
        self.state.read().user.clone()
    }

    pub fn is_loading(&self) -> bool {
        self.state.read().loading
    }
}
