use dioxus::prelude::*;

use super::text_input::{Input, InputType};
use crate::features::signup::FieldError;

#[derive(Props, PartialEq, Clone)]
pub struct PasswordInputProps {
    pub password: String,
    pub on_change: EventHandler<String>,
    pub error: Option<FieldError>,
}

/// Password field with a show/hide toggle
#[component]
pub fn PasswordInput(props: PasswordInputProps) -> Element {
    let mut visible = use_signal(|| false);

    let input_type = if visible() {
        InputType::Text
    } else {
        InputType::Password
    };

    rsx! {
        Input {
            label_text: "Your password".to_string(),
            input_type: input_type,
            value: props.password,
            on_change: props.on_change,
            error: props.error,
            required: true,
            autocomplete: "new-password".to_string(),
            trailing: rsx! {
                button {
                    class: "password-toggle",
                    r#type: "button",
                    onclick: move |_| {
                        let shown = visible();
                        visible.set(!shown);
                    },
                    if visible() { "Hide" } else { "Show" }
                }
            }
        }
    }
}
