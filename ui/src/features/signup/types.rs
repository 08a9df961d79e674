use serde::{Deserialize, Serialize};

use super::validation::compute_errors;
use crate::services::auth::AuthErrorCode;

/// Inline validation message attached to one field
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    pub message: String,
}

impl FieldError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Raw values of the sign-up inputs, stored exactly as typed
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SignUpFields {
    pub email: String,
    pub password: String,
    pub full_name: String,
}

/// Per-field messages shown under the sign-up inputs
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SignUpErrors {
    pub email: Option<FieldError>,
    pub password: Option<FieldError>,
    pub full_name: Option<FieldError>,
}

impl SignUpErrors {
    pub fn is_clear(&self) -> bool {
        self.email.is_none() && self.password.is_none() && self.full_name.is_none()
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SignUpState {
    pub fields: SignUpFields,
    pub errors: SignUpErrors,
}

#[derive(Debug, Clone, PartialEq)]
pub enum SignUpAction {
    SetEmail(String),
    SetPassword(String),
    SetFullName(String),
    /// Latest coded failure from the backend changed
    ApplyAuthFailure(Option<AuthErrorCode>),
}

impl SignUpState {
    /// Apply an action in place so signal subscribers stay attached
    pub fn reduce_in_place(&mut self, action: SignUpAction) {
        match action {
            SignUpAction::SetEmail(email) => {
                self.fields.email = email;
            }
            SignUpAction::SetPassword(password) => {
                self.fields.password = password;
            }
            SignUpAction::SetFullName(full_name) => {
                self.fields.full_name = full_name;
            }
            SignUpAction::ApplyAuthFailure(code) => {
                self.errors = compute_errors(&self.fields, code.as_ref());
            }
        }
    }
}
