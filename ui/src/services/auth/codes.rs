use std::fmt;

/// Coded failure reported by the authentication backend.
///
/// The four recognised codes drive field-level messages on the sign-up form.
/// Everything else is carried verbatim in `Other` and is not shown on any field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthErrorCode {
    WeakPassword,
    InvalidEmail,
    EmailAlreadyInUse,
    TooManyRequests,
    Other(String),
}

impl AuthErrorCode {
    pub fn as_str(&self) -> &str {
        match self {
            AuthErrorCode::WeakPassword => "auth/weak-password",
            AuthErrorCode::InvalidEmail => "auth/invalid-email",
            AuthErrorCode::EmailAlreadyInUse => "auth/email-already-in-use",
            AuthErrorCode::TooManyRequests => "auth/too-many-requests",
            AuthErrorCode::Other(code) => code,
        }
    }

    /// Parse a code in its `auth/...` string form.
    pub fn parse(code: &str) -> Self {
        match code {
            "auth/weak-password" => AuthErrorCode::WeakPassword,
            "auth/invalid-email" => AuthErrorCode::InvalidEmail,
            "auth/email-already-in-use" => AuthErrorCode::EmailAlreadyInUse,
            "auth/too-many-requests" => AuthErrorCode::TooManyRequests,
            other => AuthErrorCode::Other(other.to_string()),
        }
    }

    /// Map an Identity Toolkit REST error message to a code.
    ///
    /// REST messages look like `EMAIL_EXISTS` or
    /// `WEAK_PASSWORD : Password should be at least 6 characters`; only the
    /// leading token is significant.
    pub fn from_rest_message(message: &str) -> Self {
        let token = message.split(':').next().unwrap_or_default().trim();
        match token {
            "WEAK_PASSWORD" => AuthErrorCode::WeakPassword,
            "INVALID_EMAIL" => AuthErrorCode::InvalidEmail,
            "EMAIL_EXISTS" => AuthErrorCode::EmailAlreadyInUse,
            "TOO_MANY_ATTEMPTS_TRY_LATER" => AuthErrorCode::TooManyRequests,
            "MISSING_EMAIL" => AuthErrorCode::Other("auth/missing-email".to_string()),
            "MISSING_PASSWORD" => AuthErrorCode::Other("auth/missing-password".to_string()),
            "OPERATION_NOT_ALLOWED" => {
                AuthErrorCode::Other("auth/operation-not-allowed".to_string())
            }
            _ => AuthErrorCode::internal(),
        }
    }

    pub fn internal() -> Self {
        AuthErrorCode::Other("auth/internal-error".to_string())
    }

    pub fn network_request_failed() -> Self {
        AuthErrorCode::Other("auth/network-request-failed".to_string())
    }

    pub fn is_recognized(&self) -> bool {
        !matches!(self, AuthErrorCode::Other(_))
    }
}

impl fmt::Display for AuthErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recognized_codes_parse_back_to_themselves() {
        let codes = [
            AuthErrorCode::WeakPassword,
            AuthErrorCode::InvalidEmail,
            AuthErrorCode::EmailAlreadyInUse,
            AuthErrorCode::TooManyRequests,
        ];

        for code in codes {
            assert!(code.is_recognized());
            assert_eq!(AuthErrorCode::parse(code.as_str()), code);
        }
    }

    #[test]
    fn test_unknown_code_is_kept_verbatim() {
        let code = AuthErrorCode::parse("auth/user-disabled");
        assert_eq!(code, AuthErrorCode::Other("auth/user-disabled".to_string()));
        assert_eq!(code.to_string(), "auth/user-disabled");
        assert!(!code.is_recognized());
    }

    #[test]
    fn test_rest_messages_map_to_codes() {
        assert_eq!(
            AuthErrorCode::from_rest_message("EMAIL_EXISTS"),
            AuthErrorCode::EmailAlreadyInUse
        );
        assert_eq!(
            AuthErrorCode::from_rest_message("WEAK_PASSWORD : Password should be at least 6 characters"),
            AuthErrorCode::WeakPassword
        );
        assert_eq!(
            AuthErrorCode::from_rest_message("INVALID_EMAIL"),
            AuthErrorCode::InvalidEmail
        );
        assert_eq!(
            AuthErrorCode::from_rest_message("TOO_MANY_ATTEMPTS_TRY_LATER"),
            AuthErrorCode::TooManyRequests
        );
        assert_eq!(
            AuthErrorCode::from_rest_message("MISSING_PASSWORD").as_str(),
            "auth/missing-password"
        );
    }

    #[test]
    fn test_unmapped_rest_message_is_internal_error() {
        let code = AuthErrorCode::from_rest_message("SOMETHING_NEW");
        assert_eq!(code.as_str(), "auth/internal-error");
        assert_eq!(AuthErrorCode::from_rest_message("").as_str(), "auth/internal-error");
    }
}
