use dioxus::prelude::*;

use crate::components::input::{Input, InputType, LoadingButton, PasswordInput};
use crate::console_debug;
use crate::features::signup::{use_create_account, SignUpAction, SignUpState};

/// Email/password/name sign-up form.
///
/// Field messages are recomputed from scratch each time the backend failure
/// changes; typing alone never changes them.
#[component]
pub fn SignUpForm() -> Element {
    let mut state = use_signal(SignUpState::default);
    let auth = use_create_account();

    // Dispatch function for actions - using in-place reduction to preserve Dioxus Signal reactivity
    let dispatch = EventHandler::new(move |action: SignUpAction| {
        state.with_mut(|s| {
            s.reduce_in_place(action);
        });
    });

    // Re-runs when the request state changes; fields are read with peek
    use_effect(move || {
        let failure = auth.error().map(|e| e.code);
        console_debug!("[SignUp] Backend failure changed: {:?}", failure);
        dispatch.call(SignUpAction::ApplyAuthFailure(failure));
    });

    let errors = state().errors;
    let fields = state().fields;
    let welcome_name = auth.user().map(|user| user.display_name.unwrap_or(user.email));

    rsx! {
        form {
            class: "sign-up-form",
            novalidate: true,
            onsubmit: move |event: FormEvent| {
                event.prevent_default();
                let fields = state.peek().fields.clone();
                auth.submit_with_profile(fields.email, fields.password, Some(fields.full_name));
            },

            Input {
                label_text: "Your email".to_string(),
                input_type: InputType::Email,
                value: fields.email,
                on_change: move |value: String| dispatch.call(SignUpAction::SetEmail(value)),
                error: errors.email,
                required: true,
                autocomplete: "email".to_string(),
            }

            Input {
                label_text: "Your full name".to_string(),
                input_type: InputType::Text,
                value: fields.full_name,
                on_change: move |value: String| dispatch.call(SignUpAction::SetFullName(value)),
                error: errors.full_name,
                required: true,
                autocomplete: "name".to_string(),
            }

            PasswordInput {
                password: fields.password,
                on_change: move |value: String| dispatch.call(SignUpAction::SetPassword(value)),
                error: errors.password,
            }

            LoadingButton {
                loading: auth.is_loading(),
                "Continue"
            }

            if let Some(name) = welcome_name {
                div {
                    class: "auth-result success",
                    "✓ Welcome, {name}!"
                }
            }
        }
    }
}
