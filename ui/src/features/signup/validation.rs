use super::types::{FieldError, SignUpErrors, SignUpFields};
use crate::services::auth::AuthErrorCode;

pub const PASSWORD_LENGTH_MESSAGE: &str = "Password must be at least 6 characters";
pub const INVALID_EMAIL_MESSAGE: &str = "Please enter a valid email.";
pub const EMAIL_IN_USE_MESSAGE: &str = "Email is already in use";
pub const TOO_MANY_REQUESTS_MESSAGE: &str = "Too many requests. Try again later.";
pub const EMPTY_NAME_MESSAGE: &str = "Full name cannot be empty";

/// Field errors for the current inputs and the latest backend failure.
///
/// Without a failure nothing is shown, even for fields that are still empty.
/// Failure codes other than the four recognised ones produce no email message.
pub fn compute_errors(fields: &SignUpFields, failure: Option<&AuthErrorCode>) -> SignUpErrors {
    let Some(code) = failure else {
        return SignUpErrors::default();
    };

    let password = (fields.password.is_empty() || *code == AuthErrorCode::WeakPassword)
        .then(|| FieldError::new(PASSWORD_LENGTH_MESSAGE));

    let email = if fields.email.is_empty() || *code == AuthErrorCode::InvalidEmail {
        Some(FieldError::new(INVALID_EMAIL_MESSAGE))
    } else {
        match code {
            AuthErrorCode::EmailAlreadyInUse => Some(FieldError::new(EMAIL_IN_USE_MESSAGE)),
            AuthErrorCode::TooManyRequests => Some(FieldError::new(TOO_MANY_REQUESTS_MESSAGE)),
            _ => None,
        }
    };

    let full_name = fields
        .full_name
        .is_empty()
        .then(|| FieldError::new(EMPTY_NAME_MESSAGE));

    SignUpErrors {
        email,
        password,
        full_name,
    }
}

pub fn field_input_class(error: &Option<FieldError>) -> &'static str {
    match error {
        Some(_) => "input-field input-invalid",
        None => "input-field",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fields(email: &str, password: &str, full_name: &str) -> SignUpFields {
        SignUpFields {
            email: email.to_string(),
            password: password.to_string(),
            full_name: full_name.to_string(),
        }
    }

    fn message(error: &Option<FieldError>) -> Option<&str> {
        error.as_ref().map(|e| e.message.as_str())
    }

    #[test]
    fn test_no_failure_clears_all_errors() {
        let cases = [
            fields("", "", ""),
            fields("a@b.com", "validpass", "Ada"),
            fields("not-an-email", "x", ""),
        ];

        for case in cases {
            assert_eq!(compute_errors(&case, None), SignUpErrors::default());
        }
    }

    #[test]
    fn test_empty_password_without_failure_shows_nothing() {
        let errors = compute_errors(&fields("a@b.com", "", "Ada"), None);
        assert_eq!(errors.password, None);
    }

    #[test]
    fn test_weak_password_message_ignores_password_content() {
        for password in ["", "abc", "a much longer password"] {
            let errors = compute_errors(
                &fields("a@b.com", password, "Ada"),
                Some(&AuthErrorCode::WeakPassword),
            );
            assert_eq!(message(&errors.password), Some(PASSWORD_LENGTH_MESSAGE));
        }
    }

    #[test]
    fn test_empty_password_with_any_failure_sets_password_error() {
        let errors = compute_errors(
            &fields("a@b.com", "", "Ada"),
            Some(&AuthErrorCode::Other("auth/internal-error".to_string())),
        );
        assert_eq!(message(&errors.password), Some(PASSWORD_LENGTH_MESSAGE));
    }

    #[test]
    fn test_empty_email_wins_over_too_many_requests() {
        let errors = compute_errors(
            &fields("", "validpass", "Ada"),
            Some(&AuthErrorCode::TooManyRequests),
        );
        assert_eq!(message(&errors.email), Some(INVALID_EMAIL_MESSAGE));
    }

    #[test]
    fn test_empty_email_wins_over_email_in_use() {
        let errors = compute_errors(
            &fields("", "validpass", "Ada"),
            Some(&AuthErrorCode::EmailAlreadyInUse),
        );
        assert_eq!(message(&errors.email), Some(INVALID_EMAIL_MESSAGE));
    }

    #[test]
    fn test_invalid_email_code() {
        let errors = compute_errors(
            &fields("not-an-email", "validpass", "Ada"),
            Some(&AuthErrorCode::InvalidEmail),
        );
        assert_eq!(message(&errors.email), Some(INVALID_EMAIL_MESSAGE));
        assert_eq!(errors.password, None);
        assert_eq!(errors.full_name, None);
    }

    #[test]
    fn test_name_error_requires_empty_name_and_failure() {
        let failure = AuthErrorCode::EmailAlreadyInUse;

        let empty = compute_errors(&fields("a@b.com", "validpass", ""), Some(&failure));
        assert_eq!(message(&empty.full_name), Some(EMPTY_NAME_MESSAGE));

        let filled = compute_errors(&fields("a@b.com", "validpass", "Ada"), Some(&failure));
        assert_eq!(filled.full_name, None);

        let no_failure = compute_errors(&fields("a@b.com", "validpass", ""), None);
        assert_eq!(no_failure.full_name, None);
    }

    #[test]
    fn test_whitespace_counts_as_filled() {
        let errors = compute_errors(
            &fields(" ", " ", " "),
            Some(&AuthErrorCode::Other("auth/internal-error".to_string())),
        );
        assert!(errors.is_clear());
    }

    #[test]
    fn test_scenario_weak_password_with_empty_fields() {
        let errors = compute_errors(
            &fields("", "abc", ""),
            Some(&AuthErrorCode::parse("auth/weak-password")),
        );

        assert_eq!(message(&errors.email), Some("Please enter a valid email."));
        assert_eq!(
            message(&errors.password),
            Some("Password must be at least 6 characters")
        );
        assert_eq!(message(&errors.full_name), Some("Full name cannot be empty"));
    }

    #[test]
    fn test_scenario_email_already_in_use() {
        let errors = compute_errors(
            &fields("a@b.com", "validpass", "A"),
            Some(&AuthErrorCode::parse("auth/email-already-in-use")),
        );

        assert_eq!(message(&errors.email), Some("Email is already in use"));
        assert_eq!(errors.password, None);
        assert_eq!(errors.full_name, None);
    }

    #[test]
    fn test_scenario_too_many_requests() {
        let errors = compute_errors(
            &fields("a@b.com", "validpass", "A"),
            Some(&AuthErrorCode::parse("auth/too-many-requests")),
        );

        assert_eq!(
            message(&errors.email),
            Some("Too many requests. Try again later.")
        );
        assert_eq!(errors.password, None);
        assert_eq!(errors.full_name, None);
    }

    #[test]
    fn test_scenario_unrecognized_code_is_silent() {
        let errors = compute_errors(
            &fields("a@b.com", "validpass", "A"),
            Some(&AuthErrorCode::parse("auth/user-disabled")),
        );

        assert!(errors.is_clear());
    }

    #[test]
    fn test_field_input_class() {
        assert_eq!(field_input_class(&None), "input-field");
        assert_eq!(
            field_input_class(&Some(FieldError::new("bad"))),
            "input-field input-invalid"
        );
    }
}
