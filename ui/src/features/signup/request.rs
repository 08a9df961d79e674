use crate::services::auth::{AuthError, AuthResult, AuthUser};

/// Outcome of the form's create-account request as the UI sees it
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CreateAccountState {
    pub user: Option<AuthUser>,
    pub loading: bool,
    pub error: Option<AuthError>,
}

impl CreateAccountState {
    /// Mark a request as started. Returns `false`, changing nothing, when one
    /// is already in flight.
    pub fn begin(&mut self) -> bool {
        if self.loading {
            return false;
        }
        self.loading = true;
        self.error = None;
        true
    }

    /// Record the result of the in-flight request
    pub fn finish(&mut self, result: AuthResult<AuthUser>) {
        match result {
            Ok(user) => {
                self.user = Some(user);
                self.error = None;
            }
            Err(error) => {
                self.user = None;
                self.error = Some(error);
            }
        }
        self.loading = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::auth::AuthErrorCode;

    fn user() -> AuthUser {
        AuthUser {
            uid: "uid-1".to_string(),
            email: "a@b.com".to_string(),
            display_name: Some("Ada".to_string()),
            id_token: "token".to_string(),
            refresh_token: "refresh".to_string(),
            expires_in: Some(3600),
        }
    }

    #[test]
    fn test_second_submit_while_loading_is_ignored() {
        let mut state = CreateAccountState::default();
        assert!(state.begin());

        let in_flight = state.clone();
        assert!(!state.begin());
        assert_eq!(state, in_flight);
        assert!(state.loading);
    }

    #[test]
    fn test_begin_clears_previous_error() {
        let mut state = CreateAccountState::default();
        state.begin();
        state.finish(Err(AuthError::from_rest_message("EMAIL_EXISTS")));
        assert!(state.error.is_some());

        assert!(state.begin());
        assert_eq!(state.error, None);
        assert!(state.loading);
    }

    #[test]
    fn test_rejection_sets_error_and_clears_user() {
        let mut state = CreateAccountState {
            user: Some(user()),
            ..CreateAccountState::default()
        };
        state.begin();
        state.finish(Err(AuthError::from_rest_message("WEAK_PASSWORD : Password should be at least 6 characters")));

        assert_eq!(state.user, None);
        assert_eq!(
            state.error.as_ref().map(|e| &e.code),
            Some(&AuthErrorCode::WeakPassword)
        );
        assert!(!state.loading);
    }

    #[test]
    fn test_success_sets_user_without_error() {
        let mut state = CreateAccountState::default();
        state.begin();
        state.finish(Ok(user()));

        assert_eq!(state.user, Some(user()));
        assert_eq!(state.error, None);
        assert!(!state.loading);
    }

    #[test]
    fn test_can_submit_again_after_finish() {
        let mut state = CreateAccountState::default();
        state.begin();
        state.finish(Err(AuthError::network("offline")));

        assert!(state.begin());
    }
}
